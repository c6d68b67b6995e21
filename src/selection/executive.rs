//! Executive selector: independent sales and budget selection sets
//!
//! Both sides share the same logic but no state. Every notification carries
//! a full snapshot of both sides, even when only one of them changed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::set::{Candidates, SelectionSet};
use super::sink::SelectionSink;

/// Which executive list an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutiveSide {
    Sales,
    Budget,
}

impl ExecutiveSide {
    pub fn label(&self) -> &'static str {
        match self {
            ExecutiveSide::Sales => "Sales executives",
            ExecutiveSide::Budget => "Budget executives",
        }
    }
}

/// Snapshot of both executive selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveSelection {
    pub sales: Vec<String>,
    pub budget: Vec<String>,
}

pub struct ExecutiveSelector {
    sales: SelectionSet,
    budget: SelectionSet,
    sink: Box<dyn SelectionSink<ExecutiveSelection>>,
}

impl ExecutiveSelector {
    /// Create a selector with both sides fully selected and notify the owner
    pub fn new(
        sales: Candidates,
        budget: Candidates,
        sink: impl SelectionSink<ExecutiveSelection> + 'static,
    ) -> Self {
        let mut selector = Self {
            sales: SelectionSet::new(sales),
            budget: SelectionSet::new(budget),
            sink: Box::new(sink),
        };
        selector.notify();
        selector
    }

    /// Adopt candidate lists supplied by the owner.
    ///
    /// Only a side whose list identity changed is re-initialized; the other
    /// keeps its current selection. The owner is notified once if either
    /// side was replaced.
    pub fn sync_candidates(&mut self, sales: &Candidates, budget: &Candidates) -> bool {
        let mut changed = false;
        if !self.sales.is_same_list(sales) {
            debug!("Sales executive candidates replaced ({} items)", sales.len());
            self.sales.initialize(sales.clone());
            changed = true;
        }
        if !self.budget.is_same_list(budget) {
            debug!("Budget executive candidates replaced ({} items)", budget.len());
            self.budget.initialize(budget.clone());
            changed = true;
        }
        if changed {
            self.notify();
        }
        changed
    }

    pub fn toggle_one(&mut self, side: ExecutiveSide, executive: &str) {
        if self.side_mut(side).toggle_one(executive) {
            debug!("{:?} executive toggled: {}", side, executive);
            self.notify();
        }
    }

    pub fn toggle_all(&mut self, side: ExecutiveSide) {
        let set = self.side_mut(side);
        set.toggle_all();
        debug!("{:?} select-all toggled, now {}", side, set.select_all());
        self.notify();
    }

    pub fn side(&self, side: ExecutiveSide) -> &SelectionSet {
        match side {
            ExecutiveSide::Sales => &self.sales,
            ExecutiveSide::Budget => &self.budget,
        }
    }

    /// Current state of both sides
    pub fn snapshot(&self) -> ExecutiveSelection {
        ExecutiveSelection {
            sales: self.sales.selected().to_vec(),
            budget: self.budget.selected().to_vec(),
        }
    }

    fn side_mut(&mut self, side: ExecutiveSide) -> &mut SelectionSet {
        match side {
            ExecutiveSide::Sales => &mut self.sales,
            ExecutiveSide::Budget => &mut self.budget,
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.sink.notify(&snapshot);
    }
}
