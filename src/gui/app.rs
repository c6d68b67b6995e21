//! Main dashboard application state

use std::path::PathBuf;
use std::sync::mpsc;

use tracing::{info, warn};

use super::reports::ReportAction;
use crate::config::Config;
use crate::mapping::MappingResult;
use crate::report::{ReportAccumulator, ReportStore};
use crate::selection::{BranchSelector, ExecutiveSelection, ExecutiveSelector};

/// Selection changes forwarded from the selectors' callbacks
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Branches(Vec<String>),
    Executives(ExecutiveSelection),
}

/// Main application state
pub struct DashboardApp {
    pub(super) config: Config,
    /// Mapping file path as typed in the toolbar
    pub(super) mapping_input: String,
    pub(super) mapping_status: Option<(String, bool)>,
    pub(super) branch_selector: BranchSelector,
    pub(super) executive_selector: ExecutiveSelector,
    pub(super) selection_rx: mpsc::Receiver<SelectionEvent>,
    /// Latest snapshots reported by the selectors
    pub(super) branches: Vec<String>,
    pub(super) executives: ExecutiveSelection,
    pub(super) reports: ReportAccumulator,
    pub(super) report_store: ReportStore,
    pub(super) report_title: String,
    pub(super) report_status: Option<(String, bool)>,
}

impl DashboardApp {
    pub fn new(config: Config, mapping_path: Option<PathBuf>) -> Self {
        let (selection_tx, selection_rx) = mpsc::channel();

        let empty = MappingResult::empty();

        let branch_tx = selection_tx.clone();
        let branch_selector = BranchSelector::new(
            empty.branches,
            move |selected: &[String]| {
                let _ = branch_tx.send(SelectionEvent::Branches(selected.to_vec()));
            },
        );

        let executive_selector = ExecutiveSelector::new(
            empty.sales_executives,
            empty.budget_executives,
            move |selection: &ExecutiveSelection| {
                let _ = selection_tx.send(SelectionEvent::Executives(selection.clone()));
            },
        );

        let report_store = config.report_store();
        let (reports, report_status) = match report_store.load() {
            Ok(reports) => (reports, None),
            Err(e) => {
                warn!(
                    "[salesdeck] Failed to load reports from {}: {}",
                    report_store.path().display(),
                    e
                );
                (ReportAccumulator::new(), Some((e.to_string(), true)))
            }
        };

        let mapping_input = mapping_path
            .or_else(|| config.mapping_path())
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        let mut app = Self {
            config,
            mapping_input,
            mapping_status: None,
            branch_selector,
            executive_selector,
            selection_rx,
            branches: Vec::new(),
            executives: ExecutiveSelection::default(),
            reports,
            report_store,
            report_title: String::new(),
            report_status,
        };

        if !app.mapping_input.trim().is_empty() {
            app.reload_mapping();
        }
        app.drain_selection_events();
        app
    }

    /// Read the mapping file and hand fresh candidate lists to the selectors
    pub fn reload_mapping(&mut self) {
        let path = PathBuf::from(self.mapping_input.trim());
        match MappingResult::from_file(&path) {
            Ok(mapping) => {
                self.apply_mapping(&mapping);
                info!(
                    "[salesdeck] Loaded mapping {} ({} branches, {} sales, {} budget)",
                    path.display(),
                    mapping.branches.len(),
                    mapping.sales_executives.len(),
                    mapping.budget_executives.len()
                );
                self.mapping_status = Some((format!("Loaded {}", path.display()), false));
            }
            Err(e) => {
                warn!("[salesdeck] Failed to load mapping {}: {}", path.display(), e);
                self.mapping_status = Some((e.to_string(), true));
            }
        }
    }

    pub fn apply_mapping(&mut self, mapping: &MappingResult) {
        self.branch_selector.sync_candidates(&mapping.branches);
        self.executive_selector
            .sync_candidates(&mapping.sales_executives, &mapping.budget_executives);
    }

    /// Pull pending selector notifications into the app's snapshots
    pub fn drain_selection_events(&mut self) {
        while let Ok(event) = self.selection_rx.try_recv() {
            match event {
                SelectionEvent::Branches(branches) => self.branches = branches,
                SelectionEvent::Executives(executives) => self.executives = executives,
            }
        }
    }

    pub fn handle_report_action(&mut self, action: ReportAction) {
        match action {
            ReportAction::Add(title) => {
                let id = self.reports.add(&title, &self.branches, &self.executives);
                info!("[salesdeck] Added report {}", id);
                self.report_status = None;
            }
            ReportAction::Remove(id) => {
                self.reports.remove(id);
            }
            ReportAction::Clear => self.reports.clear(),
            ReportAction::Save => {
                self.report_status = Some(match self.report_store.save(&self.reports) {
                    Ok(()) => (
                        format!("Saved to {}", self.report_store.path().display()),
                        false,
                    ),
                    Err(e) => {
                        warn!("[salesdeck] Failed to save reports: {}", e);
                        (e.to_string(), true)
                    }
                });
            }
        }
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn executives(&self) -> &ExecutiveSelection {
        &self.executives
    }

    pub fn reports(&self) -> &ReportAccumulator {
        &self.reports
    }
}
