use super::*;

#[test]
fn mutex_store_applies_mutation() {
    let cell = Arc::new(Mutex::new(1_u32));
    cell.modify(|v| *v += 41);
    assert_eq!(*cell.lock().unwrap(), 42);
}

#[test]
fn signal_store_applies_mutation() {
    // Signals need a reactive owner (arena) to be active under SSR.
    leptos::prelude::Owner::new().with(|| {
        let signal = RwSignal::new(vec![1, 2]);
        signal.modify(|v| v.push(3));
        assert_eq!(signal.get_untracked(), vec![1, 2, 3]);
    });
}
