pub mod catalog_file;
pub mod cli;

use crate::domain::ports::QuizOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "readiness-quiz"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Scenario-based professional readiness assessment")
)]
pub struct CliConfig {
    /// Directory the report files are written to.
    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Load a custom scenario catalog from a TOML file.
    #[cfg_attr(feature = "cli", arg(long))]
    pub catalog: Option<String>,

    /// Pause after each answer before advancing, in milliseconds.
    #[cfg_attr(feature = "cli", arg(long, default_value = "300"))]
    pub advance_delay_ms: u64,

    /// Skip writing report files after completion.
    #[cfg_attr(feature = "cli", arg(long))]
    pub no_export: bool,

    /// Enable verbose output.
    #[cfg_attr(feature = "cli", arg(long))]
    pub verbose: bool,
}

impl QuizOptions for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    fn export_enabled(&self) -> bool {
        !self.no_export
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_range("advance_delay_ms", self.advance_delay_ms, 0, 5_000)?;
        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
        }
        Ok(())
    }
}
