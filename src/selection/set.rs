//! Selection set state machine
//!
//! Keeps an ordered subset of a candidate list. The "select all" flag is
//! never stored; it is derived from the sizes of both lists on every read.

use std::sync::Arc;

/// Candidate list shared with the owner. Identity (not content) decides
/// whether a newly supplied list replaces the current one.
pub type Candidates = Arc<[String]>;

/// Ordered multi-select over a candidate list
#[derive(Debug, Clone)]
pub struct SelectionSet {
    candidates: Candidates,
    selected: Vec<String>,
}

impl SelectionSet {
    /// Create a set with every candidate selected
    pub fn new(candidates: Candidates) -> Self {
        let selected = candidates.to_vec();
        Self {
            candidates,
            selected,
        }
    }

    /// Reset to the full selection of a new candidate list
    pub fn initialize(&mut self, candidates: Candidates) {
        self.selected = candidates.to_vec();
        self.candidates = candidates;
    }

    /// Whether `candidates` is the same list this set was initialized from
    pub fn is_same_list(&self, candidates: &Candidates) -> bool {
        Arc::ptr_eq(&self.candidates, candidates)
    }

    /// Toggle a single item.
    ///
    /// A selected item is removed (every equal occurrence), otherwise it is
    /// appended. Items outside the candidate list are ignored and `false`
    /// is returned.
    pub fn toggle_one(&mut self, item: &str) -> bool {
        if !self.candidates.iter().any(|c| c == item) {
            return false;
        }

        if self.is_selected(item) {
            self.selected.retain(|s| s != item);
        } else {
            self.selected.push(item.to_string());
        }
        true
    }

    /// Clear when everything is selected, otherwise select every candidate
    pub fn toggle_all(&mut self) {
        if self.select_all() {
            self.selected.clear();
        } else {
            self.selected = self.candidates.to_vec();
        }
    }

    /// Derived: true iff the selection covers the candidate list
    pub fn select_all(&self) -> bool {
        self.selected.len() == self.candidates.len()
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.iter().any(|s| s == item)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new(Arc::from(Vec::<String>::new()))
    }
}
