//! salesdeck - budget vs billed reporting dashboard
//!
//! salesdeck takes the column auto-mapping result of a sales/budget
//! spreadsheet pair and lets the user narrow the report down to branches
//! and executives before accumulating report snapshots.
//!
//! ## Selectors
//!
//! Both selectors are built on [`selection::SelectionSet`]:
//!
//! 1. **Branches**: one set, rendered as a 4-column checkbox grid.
//!
//! 2. **Executives**: independent sales and budget sets; every change is
//!    reported as a snapshot of both.

pub mod atomic_file;
pub mod config;
pub mod gui;
pub mod mapping;
pub mod report;
pub mod selection;
