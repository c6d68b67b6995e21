//! Branch selector: a single selection set laid out in columns

use tracing::debug;

use super::layout::partition_columns;
use super::set::{Candidates, SelectionSet};
use super::sink::SelectionSink;

/// Number of checkbox columns used when none is configured
pub const DEFAULT_BRANCH_COLUMNS: usize = 4;

/// Multi-select over branch names.
///
/// The owner is told about every change through the sink passed to
/// [`BranchSelector::new`]; the payload is always the full selected list.
pub struct BranchSelector {
    set: SelectionSet,
    sink: Box<dyn SelectionSink<[String]>>,
}

impl BranchSelector {
    /// Create a selector with every branch selected and notify the owner
    pub fn new(candidates: Candidates, sink: impl SelectionSink<[String]> + 'static) -> Self {
        let mut selector = Self {
            set: SelectionSet::new(candidates),
            sink: Box::new(sink),
        };
        selector.notify();
        selector
    }

    /// Adopt a candidate list supplied by the owner.
    ///
    /// Re-initializes (and notifies) only when `candidates` is a different
    /// list from the current one; handing the same `Arc` back is a no-op.
    pub fn sync_candidates(&mut self, candidates: &Candidates) -> bool {
        if self.set.is_same_list(candidates) {
            return false;
        }
        debug!("Branch candidates replaced ({} items)", candidates.len());
        self.set.initialize(candidates.clone());
        self.notify();
        true
    }

    pub fn toggle_one(&mut self, branch: &str) {
        if self.set.toggle_one(branch) {
            debug!("Branch toggled: {}", branch);
            self.notify();
        }
    }

    pub fn toggle_all(&mut self) {
        self.set.toggle_all();
        debug!("Branch select-all toggled, now {}", self.set.select_all());
        self.notify();
    }

    /// Candidates split into contiguous display columns
    pub fn columns(&self, columns: usize) -> Vec<&[String]> {
        partition_columns(&self.set.candidates()[..], columns)
    }

    pub fn set(&self) -> &SelectionSet {
        &self.set
    }

    fn notify(&mut self) {
        self.sink.notify(self.set.selected());
    }
}
