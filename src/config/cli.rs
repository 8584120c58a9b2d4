use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Filesystem-backed report sink rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalReportSink {
    base_path: String,
}

impl LocalReportSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl ReportSink for LocalReportSink {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
