//! Local report accumulator
//!
//! Users collect selection snapshots ("reports") while working through a
//! spreadsheet. The list lives in memory and is persisted by [`ReportStore`].

mod store;

pub use store::{ReportStore, ReportStoreError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::selection::ExecutiveSelection;

/// One accumulated report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub branches: Vec<String>,
    pub sales_executives: Vec<String>,
    pub budget_executives: Vec<String>,
}

/// Ordered list of reports, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportAccumulator {
    #[serde(default)]
    entries: Vec<ReportEntry>,
}

impl ReportAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current selection and return the new report id
    pub fn add(&mut self, title: &str, branches: &[String], executives: &ExecutiveSelection) -> Uuid {
        let title = title.trim();
        let title = if title.is_empty() {
            format!("Report {}", self.entries.len() + 1)
        } else {
            title.to_string()
        };

        let entry = ReportEntry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title,
            branches: branches.to_vec(),
            sales_executives: executives.sales.clone(),
            budget_executives: executives.budget.clone(),
        };
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Remove a report, returning whether it existed
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
