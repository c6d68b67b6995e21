//! Property-style checks over several candidate lists

use salesdeck::selection::{BranchSelector, SelectionSet};

use crate::common::{branch_recorder, candidates, sorted};

fn sample_lists() -> Vec<Vec<&'static str>> {
    vec![
        vec![],
        vec!["North"],
        vec!["North", "South", "East", "West"],
        vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"],
    ]
}

#[test]
fn test_initialize_selects_all_candidates() {
    for items in sample_lists() {
        let list = candidates(&items);
        let set = SelectionSet::new(list.clone());
        assert_eq!(set.selected(), &list[..]);
        assert!(set.select_all());
    }
}

#[test]
fn test_toggle_one_twice_restores_selection() {
    for items in sample_lists() {
        for item in &items {
            let mut set = SelectionSet::new(candidates(&items));
            let before = sorted(set.selected());

            set.toggle_one(item);
            set.toggle_one(item);

            assert_eq!(sorted(set.selected()), before, "item {item}");
            assert!(set.select_all());
        }
    }
}

#[test]
fn test_toggle_all_twice_restores_selection_and_flag() {
    for items in sample_lists() {
        let mut set = SelectionSet::new(candidates(&items));
        let before = set.selected().to_vec();
        let flag = set.select_all();

        set.toggle_all();
        set.toggle_all();

        assert_eq!(set.selected(), &before[..]);
        assert_eq!(set.select_all(), flag);
    }
}

#[test]
fn test_select_all_flag_tracks_selection_size() {
    let items = ["a", "b", "c", "d", "e"];
    let (log, sink) = branch_recorder();
    let mut selector = BranchSelector::new(candidates(&items), sink);

    // Deterministic pseudo-random walk over toggles
    let mut seed: u32 = 7;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let pick = (seed >> 16) as usize % (items.len() + 1);
        if pick == items.len() {
            selector.toggle_all();
        } else {
            selector.toggle_one(items[pick]);
        }

        let set = selector.set();
        assert_eq!(
            set.select_all(),
            set.selected().len() == set.candidates().len()
        );
        assert!(set.selected().iter().all(|s| items.contains(&s.as_str())));
    }

    // One notification on creation plus one per toggle
    assert_eq!(log.borrow().len(), 201);
    assert_eq!(log.borrow().last().unwrap(), selector.set().selected());
}
