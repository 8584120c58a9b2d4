pub mod aggregator;
pub mod catalog;
pub mod collector;
pub mod engine;

pub use crate::domain::model::{
    AssessmentResult, ResponseMap, Scenario, ScenarioOption, SectionScores,
};
pub use crate::domain::ports::{JitterSource, QuizOptions, ReportSink};
pub use crate::utils::error::Result;
