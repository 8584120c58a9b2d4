pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

pub use config::{cli::LocalReportSink, CliConfig};
pub use core::aggregator::{aggregate, UniformJitter};
pub use core::catalog::Catalog;
pub use core::collector::ResponseCollector;
pub use core::engine::{AnswerOutcome, AssessmentEngine, Phase};
pub use domain::model::{AssessmentResult, ResponseMap, Scenario, ScenarioOption, SectionScores};
pub use utils::error::{QuizError, Result};
