use educa_client::session::handler::{SessionExpiredHandler, SessionExpiryHook};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Counter(AtomicUsize);

impl SessionExpiredHandler for Counter {
    fn on_session_expired(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_struct_handler_fires_once_per_call() {
    let counter = Arc::new(Counter(AtomicUsize::new(0)));
    let hook = SessionExpiryHook::with_handler(counter.clone());
    assert!(hook.fire());
    assert!(hook.fire());
    assert_eq!(counter.0.load(Ordering::SeqCst), 2);
}

#[test]
fn test_clones_share_the_slot() {
    let counter = Arc::new(Counter(AtomicUsize::new(0)));
    let hook = SessionExpiryHook::new();
    let shared = hook.clone();
    hook.register(counter.clone());
    assert!(shared.is_registered());
    shared.fire();
    assert_eq!(counter.0.load(Ordering::SeqCst), 1);

    shared.clear();
    assert!(!hook.is_registered());
    assert!(format!("{hook:?}").contains("registered: false"));
}

#[test]
fn test_handler_may_reregister_while_firing() {
    let hook = SessionExpiryHook::new();
    let inner = hook.clone();
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_in_handler = fired.clone();
    hook.register(Arc::new(move || {
        fired_in_handler.fetch_add(1, Ordering::SeqCst);
        inner.clear();
    }));
    assert!(hook.fire());
    assert!(!hook.fire());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
