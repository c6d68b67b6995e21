//! Executive selector: two independent sides, snapshot notifications

use salesdeck::selection::{ExecutiveSelection, ExecutiveSelector, ExecutiveSide};

use crate::common::{candidates, executive_recorder};

#[test]
fn test_initial_snapshot_has_both_sides() {
    let (log, sink) = executive_recorder();
    let _sel = ExecutiveSelector::new(candidates(&["A", "B"]), candidates(&["X"]), sink);
    assert_eq!(
        log.borrow()[0],
        ExecutiveSelection {
            sales: vec!["A".to_string(), "B".to_string()],
            budget: vec!["X".to_string()],
        }
    );
}

#[test]
fn test_toggle_sales_reports_unchanged_budget() {
    let (log, sink) = executive_recorder();
    let mut sel = ExecutiveSelector::new(candidates(&["A", "B"]), candidates(&["X"]), sink);
    sel.toggle_one(ExecutiveSide::Sales, "A");

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].sales, vec!["B"]);
    assert_eq!(log[1].budget, vec!["X"]);
}

#[test]
fn test_toggle_all_on_one_side_only() {
    let (log, sink) = executive_recorder();
    let mut sel = ExecutiveSelector::new(candidates(&["A", "B"]), candidates(&["X", "Y"]), sink);

    sel.toggle_all(ExecutiveSide::Sales);
    assert!(!sel.side(ExecutiveSide::Sales).select_all());
    assert!(sel.side(ExecutiveSide::Budget).select_all());

    sel.toggle_one(ExecutiveSide::Budget, "Y");
    assert!(!sel.side(ExecutiveSide::Budget).select_all());

    sel.toggle_all(ExecutiveSide::Sales);
    assert!(sel.side(ExecutiveSide::Sales).select_all());
    assert_eq!(sel.side(ExecutiveSide::Budget).selected(), &["X"]);

    let last = log.borrow().last().unwrap().clone();
    assert_eq!(last, sel.snapshot());
}

#[test]
fn test_unknown_executive_is_ignored() {
    let (log, sink) = executive_recorder();
    let mut sel = ExecutiveSelector::new(candidates(&["A"]), candidates(&["X"]), sink);
    // "X" is a budget executive, not a sales one
    sel.toggle_one(ExecutiveSide::Sales, "X");
    assert_eq!(log.borrow().len(), 1);
    assert!(sel.side(ExecutiveSide::Sales).select_all());
}

#[test]
fn test_replacing_lists_notifies_once() {
    let (log, sink) = executive_recorder();
    let mut sel = ExecutiveSelector::new(candidates(&["A"]), candidates(&["X"]), sink);
    sel.toggle_all(ExecutiveSide::Sales);

    assert!(sel.sync_candidates(&candidates(&["C", "D"]), &candidates(&["Z"])));
    let log = log.borrow();
    assert_eq!(log.len(), 3);
    assert_eq!(log[2].sales, vec!["C", "D"]);
    assert_eq!(log[2].budget, vec!["Z"]);
}
