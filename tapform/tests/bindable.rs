use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tapform::events::InputEvent;
use tapform::input::BindableValue;

#[test]
fn test_set_notifies_callbacks_and_subscribers() {
    let value = BindableValue::new(0u32);
    let changes = Arc::new(AtomicUsize::new(0));
    let touches = Arc::new(AtomicUsize::new(0));
    let (c, t) = (changes.clone(), touches.clone());
    value.register_on_change(move |v| {
        c.store(*v as usize, Ordering::SeqCst);
    });
    value.register_on_touched(move || {
        t.fetch_add(1, Ordering::SeqCst);
    });
    let mut rx = value.subscribe();

    assert!(value.set(7));
    assert!(!value.set(7));

    assert_eq!(value.get(), 7);
    assert_eq!(changes.load(Ordering::SeqCst), 7);
    assert_eq!(touches.load(Ordering::SeqCst), 1);
    assert_eq!(rx.try_recv().ok(), Some(InputEvent::Change(7)));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_write_value_is_silent() {
    let value = BindableValue::new(String::from("a"));
    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    value.register_on_change(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    let mut rx = value.subscribe();

    assert!(value.write_value("b".into()));
    assert!(!value.write_value("b".into()));

    assert_eq!(value.get(), "b");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_disabled_flag_reports_changes() {
    let value = BindableValue::new(false);
    assert!(!value.disabled());
    assert!(value.set_disabled(true));
    assert!(!value.set_disabled(true));
    assert!(value.disabled());
}

#[test]
fn test_dropped_subscribers_are_pruned() {
    let value = BindableValue::new(false);
    let dropped = value.subscribe();
    let mut live = value.subscribe();
    drop(dropped);

    value.set(true);
    value.set(false);

    assert_eq!(live.try_recv().ok(), Some(InputEvent::Change(true)));
    assert_eq!(live.try_recv().ok(), Some(InputEvent::Change(false)));
}

#[test]
fn test_clones_share_slot() {
    let a = BindableValue::new(false);
    let b = a.clone();
    b.set(true);
    assert!(a.get());
}
