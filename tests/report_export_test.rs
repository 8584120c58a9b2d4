use readiness_quiz::domain::ports::JitterSource;
use readiness_quiz::report::{AssessmentReport, ReportExporter};
use readiness_quiz::{aggregate, Catalog, LocalReportSink, ResponseMap};
use tempfile::TempDir;

struct FixedJitter(f64);

impl JitterSource for FixedJitter {
    fn jitter(&mut self) -> f64 {
        self.0
    }
}

fn responses(entries: &[(&str, &str)]) -> ResponseMap {
    entries
        .iter()
        .map(|(s, o)| (s.to_string(), o.to_string()))
        .collect()
}

#[tokio::test]
async fn export_writes_report_files_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let catalog = Catalog::builtin();
    let map = responses(&[("missed_email", "B"), ("system_outage", "B")]);
    let result = aggregate(&catalog, &map, &mut FixedJitter(1.0));
    let report = AssessmentReport::build(&catalog, &result, None);

    let exporter = ReportExporter::new(LocalReportSink::new(output_path));
    let files = exporter.export(&report).await.unwrap();
    assert_eq!(files.len(), 2);

    let json_path = temp_dir.path().join("report.json");
    assert!(json_path.exists());

    let parsed: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(parsed["overall_score"], 93);
    assert_eq!(parsed["band"], "Excellent");
    assert_eq!(parsed["band_description"], "Ready for immediate application");
    assert_eq!(parsed["pearl"]["practical_intelligence"], 93);
    assert_eq!(parsed["pearl"]["execution"], 98);
    assert_eq!(parsed["section_scores"]["problem_solving"], 94.0);

    let csv_path = temp_dir.path().join("responses.csv");
    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv_content.starts_with("scenario_id,scenario_title,option_id,option_text,option_score"));
    assert!(csv_content.contains("missed_email,The Missed Email,B,"));
    assert!(csv_content.contains("system_outage,"));
}

#[tokio::test]
async fn export_creates_missing_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("reports").join("latest");
    let output_path = nested.to_str().unwrap().to_string();

    let catalog = Catalog::builtin();
    let result = aggregate(&catalog, &ResponseMap::new(), &mut FixedJitter(0.0));
    let report = AssessmentReport::build(&catalog, &result, None);

    let exporter = ReportExporter::new(LocalReportSink::new(output_path));
    exporter.export(&report).await.unwrap();

    assert!(nested.join("report.json").exists());
    assert!(nested.join("responses.csv").exists());
}
