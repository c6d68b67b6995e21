//! Auto-mapping results
//!
//! The backend maps sales and budget spreadsheet columns to semantic fields
//! and answers with the distinct branches and executives it found. This
//! module reads that answer from a JSON file, e.g.:
//!
//! ```json
//! {
//!   "branches": ["North", "South"],
//!   "salesExecList": ["Ana", "Bo"],
//!   "budgetExecList": ["Ana"]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::selection::Candidates;

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("Failed to read mapping file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mapping JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct MappingFile {
    #[serde(default, alias = "branchList")]
    branches: Vec<String>,
    #[serde(default, alias = "salesExecList")]
    sales_executives: Vec<String>,
    #[serde(default, alias = "budgetExecList")]
    budget_executives: Vec<String>,
}

/// Candidate lists produced by one auto-mapping run.
///
/// Every parse yields fresh lists, so selectors treat a reload as a
/// replacement even when the content is unchanged.
#[derive(Debug, Clone)]
pub struct MappingResult {
    pub branches: Candidates,
    pub sales_executives: Candidates,
    pub budget_executives: Candidates,
}

impl MappingResult {
    pub fn empty() -> Self {
        Self {
            branches: Candidates::from(Vec::new()),
            sales_executives: Candidates::from(Vec::new()),
            budget_executives: Candidates::from(Vec::new()),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, MappingError> {
        let file: MappingFile = serde_json::from_str(content)?;
        Ok(Self {
            branches: file.branches.into(),
            sales_executives: file.sales_executives.into(),
            budget_executives: file.budget_executives.into(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, MappingError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_parse_snake_case() {
        let result = MappingResult::from_json(
            r#"{"branches":["North"],"sales_executives":["A","B"],"budget_executives":["X"]}"#,
        )
        .unwrap();
        assert_eq!(&*result.branches, &["North".to_string()]);
        assert_eq!(result.sales_executives.len(), 2);
        assert_eq!(result.budget_executives.len(), 1);
    }

    #[test]
    fn test_parse_backend_aliases() {
        let result = MappingResult::from_json(
            r#"{"branchList":["N","S"],"salesExecList":["A"],"budgetExecList":[]}"#,
        )
        .unwrap();
        assert_eq!(result.branches.len(), 2);
        assert_eq!(result.sales_executives.len(), 1);
        assert!(result.budget_executives.is_empty());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let result = MappingResult::from_json("{}").unwrap();
        assert!(result.branches.is_empty());
        assert!(result.sales_executives.is_empty());
    }

    #[test]
    fn test_each_parse_is_a_new_identity() {
        let json = r#"{"branches":["North"]}"#;
        let a = MappingResult::from_json(json).unwrap();
        let b = MappingResult::from_json(json).unwrap();
        assert_eq!(a.branches, b.branches);
        assert!(!Arc::ptr_eq(&a.branches, &b.branches));
    }

    #[test]
    fn test_invalid_json() {
        let err = MappingResult::from_json("{not json").unwrap_err();
        assert!(matches!(err, MappingError::Json(_)));
    }
}
