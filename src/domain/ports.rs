use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Random source for the jittered section scores. Injectable so tests
/// can supply a fixed value and assert exact bounds.
pub trait JitterSource {
    /// Draw one jitter value from the interval (-5, 5).
    fn jitter(&mut self) -> f64;
}

#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait QuizOptions: Send + Sync {
    fn output_path(&self) -> &str;
    fn advance_delay(&self) -> Duration;
    fn export_enabled(&self) -> bool;
}
