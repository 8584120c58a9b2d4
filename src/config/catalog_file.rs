use crate::core::catalog::Catalog;
use crate::domain::model::Scenario;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk catalog format: a list of `[[scenarios]]` tables, each with
/// nested `[[scenarios.options]]`. Loaded catalogs go through the same
/// validation as the built-in one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub scenarios: Vec<Scenario>,
}

impl CatalogFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Catalog> {
        let file: CatalogFile = toml::from_str(content)?;
        Catalog::new(file.scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuizError;

    const VALID: &str = r#"
[[scenarios]]
id = "late_handoff"
title = "Late Handoff"
description = "A teammate hands you work an hour before the deadline."
question = "What do you do?"

[[scenarios.options]]
id = "A"
text = "Flag the risk and negotiate scope"
score = 90

[[scenarios.options]]
id = "B"
text = "Rush it through without review"
score = 25
"#;

    #[test]
    fn parses_valid_catalog_file() {
        let catalog = CatalogFile::parse(VALID).unwrap();
        assert_eq!(catalog.len(), 1);

        let scenario = catalog.by_id("late_handoff").unwrap();
        assert_eq!(scenario.options.len(), 2);
        assert_eq!(scenario.option("A").unwrap().score, 90);
    }

    #[test]
    fn malformed_toml_is_a_catalog_file_error() {
        let err = CatalogFile::parse("not even toml [[").unwrap_err();
        assert!(matches!(err, QuizError::CatalogFile(_)));
    }

    #[test]
    fn parsed_catalog_still_goes_through_validation() {
        let bad = VALID.replace("score = 90", "score = 900");
        let err = CatalogFile::parse(&bad).unwrap_err();
        assert!(matches!(err, QuizError::InvalidConfigValue { .. }));
    }
}
