//! Settings configuration types

mod gui;

pub use gui::GuiSettings;

use serde::{Deserialize, Serialize};

use crate::selection::DEFAULT_BRANCH_COLUMNS;

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Number of checkbox columns in the branch selector (default: 4)
    #[serde(default = "default_branch_columns")]
    pub branch_columns: usize,

    /// Number of checkbox columns per executive list (default: 1)
    #[serde(default = "default_executive_columns")]
    pub executive_columns: usize,

    /// Where accumulated reports are stored.
    /// Empty means ~/.salesdeck/reports.json
    #[serde(default)]
    pub report_store_path: String,

    /// GUI settings
    #[serde(default)]
    pub gui: GuiSettings,
}

fn default_branch_columns() -> usize {
    DEFAULT_BRANCH_COLUMNS
}

fn default_executive_columns() -> usize {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            branch_columns: default_branch_columns(),
            executive_columns: default_executive_columns(),
            report_store_path: String::new(),
            gui: GuiSettings::default(),
        }
    }
}
