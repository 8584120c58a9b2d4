pub mod bands;
pub mod export;
pub mod pearl;

pub use bands::ScoreBand;
pub use export::{AssessmentReport, ReportExporter, ResponseDetail};
pub use pearl::PearlBreakdown;
