/// Hook registry ordering and lifecycle tests.
use std::cell::RefCell;
use std::rc::Rc;
use vivitree_core::{Hooks, DEFAULT_PRIORITY};

type Log = Rc<RefCell<Vec<&'static str>>>;

fn recorder(log: &Log, label: &'static str) -> impl FnMut(&()) + 'static {
    let log = Rc::clone(log);
    move |_| log.borrow_mut().push(label)
}

#[test]
fn lower_priority_runs_first_then_attachment_order() {
    let log: Log = Rc::default();
    let mut hooks: Hooks = Hooks::new();
    hooks.register("save", recorder(&log, "first-10"), 10);
    hooks.register("save", recorder(&log, "only-5"), 5);
    hooks.register("save", recorder(&log, "second-10"), 10);

    assert_eq!(hooks.fire("save", &()), 3);
    assert_eq!(*log.borrow(), ["only-5", "first-10", "second-10"]);
}

#[test]
fn add_uses_default_priority() {
    let log: Log = Rc::default();
    let mut hooks: Hooks = Hooks::new();
    hooks.add("e", recorder(&log, "default"));
    hooks.register("e", recorder(&log, "late"), DEFAULT_PRIORITY + 1);
    hooks.register("e", recorder(&log, "early"), DEFAULT_PRIORITY - 1);

    hooks.fire("e", &());
    assert_eq!(*log.borrow(), ["early", "default", "late"]);
}

#[test]
fn firing_unknown_name_is_noop() {
    let mut hooks: Hooks = Hooks::new();
    assert_eq!(hooks.fire("nothing", &()), 0);
}

#[test]
fn names_are_independent() {
    let log: Log = Rc::default();
    let mut hooks: Hooks = Hooks::new();
    hooks.add("a", recorder(&log, "a"));
    hooks.add("b", recorder(&log, "b"));

    hooks.fire("b", &());
    assert_eq!(*log.borrow(), ["b"]);
}

#[test]
fn unregister_removes_every_callback() {
    let log: Log = Rc::default();
    let mut hooks: Hooks = Hooks::new();
    hooks.register("a", recorder(&log, "x"), 1);
    hooks.register("a", recorder(&log, "y"), 20);

    assert!(hooks.is_registered("a"));
    assert!(hooks.unregister("a"));
    assert!(!hooks.is_registered("a"));
    assert!(!hooks.unregister("a"));
    assert_eq!(hooks.fire("a", &()), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn callbacks_receive_arguments_and_keep_state() {
    let mut hooks: Hooks<(String, i64)> = Hooks::new();
    let total = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&total);
    hooks.add("count", move |(_, n): &(String, i64)| *sink.borrow_mut() += n);

    hooks.fire("count", &("x".to_string(), 2));
    hooks.fire("count", &("y".to_string(), 5));
    assert_eq!(*total.borrow(), 7);
}

#[test]
fn fire_can_run_repeatedly() {
    let log: Log = Rc::default();
    let mut hooks: Hooks = Hooks::new();
    hooks.add("tick", recorder(&log, "t"));
    hooks.fire("tick", &());
    hooks.fire("tick", &());
    assert_eq!(log.borrow().len(), 2);
}
