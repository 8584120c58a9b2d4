use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog file error: {0}")]
    CatalogFile(#[from] toml::de::Error),

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown scenario: {scenario_id}")]
    UnknownScenario { scenario_id: String },

    #[error("Option '{option_id}' is not valid for scenario '{scenario_id}'")]
    InvalidSelection {
        scenario_id: String,
        option_id: String,
    },

    #[error("Cannot {operation} while the assessment is {phase}")]
    PhaseViolation { operation: String, phase: String },

    #[error("Report generation failed: {message}")]
    Report { message: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;
