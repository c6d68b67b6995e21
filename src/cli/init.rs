//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

/// Default configuration content for salesdeck init
pub const DEFAULT_CONFIG: &str = r#"# salesdeck configuration
# =======================

[settings]
# Checkbox columns in the branch selector
branch_columns = 4
# Checkbox columns per executive list
executive_columns = 1
# Where accumulated reports are stored (empty: ~/.salesdeck/reports.json)
report_store_path = ""

[settings.gui]
window_width = 1100.0
window_height = 700.0
# Auto-mapping result opened on startup (empty: none)
mapping_path = ""
"#;

/// Write the default config to `config_path`
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
