//! GUI module for the salesdeck dashboard
//!
//! Renders the branch and executive selectors for a loaded auto-mapping
//! result, and a side panel that accumulates report snapshots.

pub mod app;
mod app_eframe;
pub mod reports;
pub mod runner;
pub mod selector;
pub mod theme;

pub use app::{DashboardApp, SelectionEvent};
pub use reports::ReportAction;
pub use runner::run_gui;
