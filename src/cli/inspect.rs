//! Inspect command implementation
//!
//! Prints how a mapping result would be laid out in the selectors.

use anyhow::{Context, Result};
use std::path::Path;

use salesdeck::mapping::MappingResult;
use salesdeck::selection::partition_columns;

pub fn inspect_command(file: &Path, columns: usize) -> Result<()> {
    let mapping = MappingResult::from_file(file)
        .with_context(|| format!("Failed to load mapping: {}", file.display()))?;

    print!("{}", render_layout(&mapping, columns));
    Ok(())
}

fn render_layout(mapping: &MappingResult, columns: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Branches ({}):\n", mapping.branches.len()));
    for (i, column) in partition_columns(&mapping.branches[..], columns.max(1))
        .iter()
        .enumerate()
    {
        out.push_str(&format!("  [{}] {}\n", i + 1, column.join(", ")));
    }

    out.push_str(&format!(
        "Sales executives ({}): {}\n",
        mapping.sales_executives.len(),
        mapping.sales_executives.join(", ")
    ));
    out.push_str(&format!(
        "Budget executives ({}): {}\n",
        mapping.budget_executives.len(),
        mapping.budget_executives.join(", ")
    ));
    out
}
