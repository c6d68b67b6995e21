//! Concrete branch selector scenarios

use salesdeck::selection::{BranchSelector, SelectionSet};

use crate::common::{branch_recorder, candidates};

#[test]
fn test_deselect_one_branch() {
    let mut set = SelectionSet::new(candidates(&["North", "South", "East", "West"]));
    set.toggle_one("South");
    assert_eq!(set.selected(), &["North", "East", "West"]);
    assert!(!set.select_all());
}

#[test]
fn test_empty_branch_list() {
    let (log, sink) = branch_recorder();
    let mut selector = BranchSelector::new(candidates(&[]), sink);
    assert!(selector.set().selected().is_empty());
    assert!(selector.set().select_all());

    selector.toggle_all();
    assert!(selector.set().selected().is_empty());
    assert!(selector.set().select_all());

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert!(log.iter().all(|selected| selected.is_empty()));
}

#[test]
fn test_single_toggles_reach_select_all() {
    let (_log, sink) = branch_recorder();
    let mut selector = BranchSelector::new(candidates(&["North", "South"]), sink);
    selector.toggle_all();
    assert!(!selector.set().select_all());

    selector.toggle_one("South");
    selector.toggle_one("North");
    assert!(selector.set().select_all());
    assert_eq!(selector.set().selected(), &["South", "North"]);
}

#[test]
fn test_new_upload_resets_selection() {
    let (log, sink) = branch_recorder();
    let first = candidates(&["North", "South"]);
    let mut selector = BranchSelector::new(first.clone(), sink);
    selector.toggle_one("North");

    // Re-render with the same list keeps the user's choice
    selector.sync_candidates(&first);
    assert_eq!(selector.set().selected(), &["South"]);

    let second = candidates(&["Central", "Coast", "Hills"]);
    selector.sync_candidates(&second);
    assert_eq!(selector.set().selected(), &["Central", "Coast", "Hills"]);
    assert!(selector.set().select_all());

    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_duplicate_branches_toggle_together() {
    let (_log, sink) = branch_recorder();
    let mut selector = BranchSelector::new(candidates(&["North", "North", "South"]), sink);
    selector.toggle_one("North");
    assert_eq!(selector.set().selected(), &["South"]);
    assert!(!selector.set().is_selected("North"));
}

#[test]
fn test_four_column_layout() {
    let (_log, sink) = branch_recorder();
    let selector = BranchSelector::new(
        candidates(&["b1", "b2", "b3", "b4", "b5", "b6", "b7", "b8", "b9", "b10"]),
        sink,
    );
    let cols = selector.columns(4);
    // ceil(10 / 4) = 3 per column
    assert_eq!(cols.len(), 4);
    assert_eq!(cols[0], &["b1", "b2", "b3"]);
    assert_eq!(cols[1], &["b4", "b5", "b6"]);
    assert_eq!(cols[2], &["b7", "b8", "b9"]);
    assert_eq!(cols[3], &["b10"]);
}
