//! UI services: the session gate and the upload panel's controller.
//!
//! ARCHITECTURE
//! ============
//! Services own the calls to the hosted backend and every state transition
//! that follows from them. Pages and components only wire DOM events to
//! service methods and render the resulting state.

pub mod clock;
pub mod session_gate;
pub mod uploads;
