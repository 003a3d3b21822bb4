use super::*;

#[test]
fn update_publishes_new_snapshot_and_keeps_old_one_intact() {
    let cell = StateCell::new(vec![1]);
    let before = cell.snapshot();
    let after = cell.update(|v| v.push(2));

    assert_eq!(*before, vec![1]);
    assert_eq!(*after, vec![1, 2]);
    assert_eq!(*cell.snapshot(), vec![1, 2]);
}

#[test]
fn observers_see_every_update_in_order() {
    let cell = StateCell::new(0u32);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    cell.subscribe(move |v| sink.borrow_mut().push(*v));

    cell.update(|v| *v += 1);
    cell.update(|v| *v += 10);

    assert_eq!(*seen.borrow(), vec![1, 11]);
}

#[test]
fn observer_may_read_snapshot_during_notification() {
    let cell = Rc::new(StateCell::new(String::new()));
    let reader = Rc::clone(&cell);
    let seen = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&seen);
    cell.subscribe(move |_| *sink.borrow_mut() = (*reader.snapshot()).clone());

    cell.update(|s| s.push_str("ready"));
    assert_eq!(*seen.borrow(), "ready");
}

#[test]
fn in_flight_admits_one_holder_until_drop() {
    let slot = InFlight::default();
    let guard = slot.try_acquire();
    assert!(guard.is_some());
    assert!(slot.is_busy());
    assert!(slot.try_acquire().is_none());

    drop(guard);
    assert!(!slot.is_busy());
    assert!(slot.try_acquire().is_some());
}
