use crate::core::catalog::Catalog;
use crate::domain::model::{AssessmentResult, SectionScores};
use crate::domain::ports::ReportSink;
use crate::report::bands::ScoreBand;
use crate::report::pearl::PearlBreakdown;
use crate::utils::error::{QuizError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One answered scenario joined against the catalog, for the report.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseDetail {
    pub scenario_id: String,
    pub scenario_title: String,
    pub option_id: String,
    pub option_text: String,
    pub option_score: u32,
}

/// Exportable view of one finished attempt: the canonical result plus the
/// display-layer derivations (band, PEARL) and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub overall_score: u32,
    pub band: String,
    pub band_description: String,
    pub section_scores: SectionScores,
    pub pearl: PearlBreakdown,
    pub responses: Vec<ResponseDetail>,
}

impl AssessmentReport {
    pub fn build(
        catalog: &Catalog,
        result: &AssessmentResult,
        started_at: Option<DateTime<Utc>>,
    ) -> Self {
        let band = ScoreBand::from_score(i64::from(result.overall_score));

        // Catalog order, answered scenarios only.
        let responses = catalog
            .iter()
            .filter_map(|scenario| {
                let option_id = result.responses.get(&scenario.id)?;
                let option = scenario.option(option_id)?;
                Some(ResponseDetail {
                    scenario_id: scenario.id.clone(),
                    scenario_title: scenario.title.clone(),
                    option_id: option.id.clone(),
                    option_text: option.text.clone(),
                    option_score: option.score,
                })
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            started_at,
            overall_score: result.overall_score,
            band: band.label().to_string(),
            band_description: band.description().to_string(),
            section_scores: result.section_scores,
            pearl: PearlBreakdown::from_overall(result.overall_score),
            responses,
        }
    }
}

/// Writes the report files through a sink, the same way the rest of the
/// crate never touches the filesystem directly.
pub struct ReportExporter<S: ReportSink> {
    sink: S,
}

impl<S: ReportSink> ReportExporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Write `report.json` and `responses.csv`; returns the file names.
    pub async fn export(&self, report: &AssessmentReport) -> Result<Vec<String>> {
        let json = serde_json::to_vec_pretty(report)?;
        self.sink.write_file("report.json", &json).await?;
        tracing::debug!(bytes = json.len(), "report.json written");

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &report.responses {
            writer.serialize(row)?;
        }
        writer.flush()?;
        let csv_data = writer.into_inner().map_err(|e| QuizError::Report {
            message: e.to_string(),
        })?;
        self.sink.write_file("responses.csv", &csv_data).await?;
        tracing::debug!(bytes = csv_data.len(), "responses.csv written");

        Ok(vec!["report.json".to_string(), "responses.csv".to_string()])
    }
}
