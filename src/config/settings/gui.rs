//! GUI-specific settings

use serde::{Deserialize, Serialize};

/// GUI-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Mapping file opened on startup when none is passed on the command line
    #[serde(default)]
    pub mapping_path: String,
}

fn default_window_width() -> f32 {
    1100.0
}

fn default_window_height() -> f32 {
    700.0
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            mapping_path: String::new(),
        }
    }
}
