//! Multi-select widgets state
//!
//! Provides the selection state machine shared by the dashboard selectors:
//! - [`SelectionSet`]: candidates, ordered selection, derived select-all flag
//! - [`BranchSelector`]: one set rendered as a column grid
//! - [`ExecutiveSelector`]: independent sales and budget sets
//!
//! Selectors report every change to their owner through a [`SelectionSink`].

mod branch;
mod executive;
mod layout;
mod set;
mod sink;

pub use branch::{BranchSelector, DEFAULT_BRANCH_COLUMNS};
pub use executive::{ExecutiveSelection, ExecutiveSelector, ExecutiveSide};
pub use layout::partition_columns;
pub use set::{Candidates, SelectionSet};
pub use sink::SelectionSink;
