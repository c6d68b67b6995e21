//! Shared test utilities for selector and dashboard tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use salesdeck::selection::{Candidates, ExecutiveSelection};

/// Build a candidate list from string literals
pub fn candidates(items: &[&str]) -> Candidates {
    items.iter().map(|s| s.to_string()).collect()
}

/// Records every branch notification
pub fn branch_recorder() -> (Rc<RefCell<Vec<Vec<String>>>>, impl FnMut(&[String]) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink_log = Rc::clone(&log);
    (log, move |selected: &[String]| {
        sink_log.borrow_mut().push(selected.to_vec())
    })
}

/// Records every executive snapshot
pub fn executive_recorder() -> (
    Rc<RefCell<Vec<ExecutiveSelection>>>,
    impl FnMut(&ExecutiveSelection) + 'static,
) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink_log = Rc::clone(&log);
    (log, move |selection: &ExecutiveSelection| {
        sink_log.borrow_mut().push(selection.clone())
    })
}

/// Order-insensitive view of a selection
pub fn sorted(items: &[String]) -> Vec<String> {
    let mut v = items.to_vec();
    v.sort();
    v
}
