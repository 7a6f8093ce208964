use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::session::AuthUser;

fn counter_callback(hits: &Arc<AtomicUsize>) -> AuthCallback {
    let hits = Arc::clone(hits);
    Arc::new(move |_: AuthEvent, _: Option<&Session>| {
        hits.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn emit_reaches_every_listener() {
    let events = AuthEvents::default();
    let hits = Arc::new(AtomicUsize::new(0));
    let _a = events.subscribe(counter_callback(&hits));
    let _b = events.subscribe(counter_callback(&hits));

    events.emit(AuthEvent::SignedOut, None);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn unsubscribe_stops_delivery_for_that_listener_only() {
    let events = AuthEvents::default();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let sub = events.subscribe(counter_callback(&first));
    let _keep = events.subscribe(counter_callback(&second));

    sub.unsubscribe();
    events.emit(AuthEvent::SignedIn, None);

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn callback_receives_event_and_session() {
    let events = AuthEvents::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = events.subscribe(Arc::new(move |event: AuthEvent, session: Option<&Session>| {
        sink.lock().unwrap().push((event, session.map(|s| s.user.id.clone())));
    }));

    let session = Session {
        access_token: "t".into(),
        refresh_token: None,
        expires_at: None,
        user: AuthUser { id: "u9".into(), email: None },
    };
    events.emit(AuthEvent::SignedIn, Some(&session));
    events.emit(AuthEvent::SignedOut, None);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[(AuthEvent::SignedIn, Some("u9".to_owned())), (AuthEvent::SignedOut, None)]);
}

#[test]
fn unsubscribe_after_registry_dropped_is_noop() {
    let events = AuthEvents::default();
    let sub = events.subscribe(Arc::new(|_: AuthEvent, _: Option<&Session>| {}));
    drop(events);
    sub.unsubscribe();
}
