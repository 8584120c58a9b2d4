use anyhow::Context;
use clap::Parser;
use readiness_quiz::config::catalog_file::CatalogFile;
use readiness_quiz::domain::ports::QuizOptions;
use readiness_quiz::report::{AssessmentReport, PearlBreakdown, ReportExporter, ScoreBand};
use readiness_quiz::utils::{logger, validation::Validate};
use readiness_quiz::{
    AnswerOutcome, AssessmentEngine, AssessmentResult, Catalog, CliConfig, LocalReportSink,
    Scenario, UniformJitter,
};
use std::io::{self, Write};

type InputLines = io::Lines<io::StdinLock<'static>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("starting readiness-quiz");

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match &config.catalog {
        Some(path) => CatalogFile::load(path)
            .with_context(|| format!("failed to load catalog from {}", path))?,
        None => Catalog::builtin(),
    };
    tracing::info!("catalog loaded, {} scenarios", catalog.len());

    let mut lines = io::stdin().lines();
    let mut engine = AssessmentEngine::new(catalog, config.advance_delay(), UniformJitter::new());

    loop {
        print_intro(engine.catalog().len());
        match prompt(&mut lines, "Press Enter to start (or type 'quit'): ")? {
            None => break,
            Some(input) if input.trim().eq_ignore_ascii_case("quit") => break,
            Some(_) => {}
        }

        engine.start()?;

        let Some(result) = run_assessment(&mut engine, &mut lines).await? else {
            break;
        };

        print_results(&result);
        let report = AssessmentReport::build(engine.catalog(), &result, engine.started_at());
        print_pearl(&report.pearl);

        if config.export_enabled() {
            let exporter =
                ReportExporter::new(LocalReportSink::new(config.output_path().to_string()));
            match exporter.export(&report).await {
                Ok(files) => {
                    println!(
                        "📁 Report written to {}: {}",
                        config.output_path(),
                        files.join(", ")
                    );
                }
                Err(e) => tracing::warn!("report export failed: {}", e),
            }
        }

        match prompt(&mut lines, "\nRetake the assessment? [y/N]: ")? {
            Some(input) if input.trim().eq_ignore_ascii_case("y") => engine.restart(),
            _ => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Question loop for one attempt. Returns None on quit or end of input.
async fn run_assessment(
    engine: &mut AssessmentEngine<UniformJitter>,
    lines: &mut InputLines,
) -> anyhow::Result<Option<AssessmentResult>> {
    loop {
        let (scenario_id, option_ids) = {
            let scenario = engine
                .current_scenario()
                .context("no active scenario while in progress")?;
            let (current, total) = engine.progress();
            print_scenario(scenario, current, total, engine.response_for(&scenario.id));
            let option_ids: Vec<String> = scenario.options.iter().map(|o| o.id.clone()).collect();
            (scenario.id.clone(), option_ids)
        };

        let Some(input) = prompt(lines, "Your choice (letter, 'back' or 'quit'): ")? else {
            return Ok(None);
        };
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        if input.eq_ignore_ascii_case("back") {
            if !engine.go_back() {
                println!("Already at the first scenario.");
            }
            continue;
        }

        let Some(option_id) = option_ids.iter().find(|id| id.eq_ignore_ascii_case(input)) else {
            println!("Please answer with one of: {}", option_ids.join(", "));
            continue;
        };

        match engine.answer(&scenario_id, option_id).await? {
            AnswerOutcome::Advanced { .. } => println!("✅ Answer recorded"),
            AnswerOutcome::Completed(result) => {
                println!("✅ Answer recorded");
                return Ok(Some(result));
            }
        }
    }
}

fn prompt(lines: &mut InputLines, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn print_intro(scenario_count: usize) {
    println!("\n=== Professional Readiness Assessment ===\n");
    println!("Evaluate your practical, on-the-job readiness through real-world");
    println!("scenarios and decision-making challenges.\n");
    println!(
        "{} scenario questions. Pick the option closest to what you would actually do first.",
        scenario_count
    );
    println!("You can go back and change earlier answers at any time.\n");
}

fn print_scenario(scenario: &Scenario, current: usize, total: usize, recorded: Option<&str>) {
    println!("\n--- Scenario {} of {}: {} ---\n", current, total, scenario.title);
    println!("{}\n", scenario.description);
    println!("{}\n", scenario.question);
    for option in &scenario.options {
        println!("  [{}] {}", option.id, option.text);
    }
    if let Some(option_id) = recorded {
        println!("\n(Current answer: {})", option_id);
    }
    println!();
}

fn print_results(result: &AssessmentResult) {
    let band = ScoreBand::from_score(i64::from(result.overall_score));

    println!("\n=== Assessment Complete ===\n");
    println!(
        "Overall readiness: {}/100 [{}]",
        result.overall_score,
        band.label()
    );
    println!("{}\n", band.description());

    println!("Skill breakdown:");
    let sections = [
        ("Decision Making", result.section_scores.decision_making),
        ("Problem Solving", result.section_scores.problem_solving),
        ("Communication", result.section_scores.communication),
        ("Adaptability", result.section_scores.adaptability),
    ];
    for (name, score) in sections {
        // Section scores stay fractional internally; round for display only.
        let rounded = score.round() as i64;
        let band = ScoreBand::from_score(rounded);
        println!("  {:<16} {:>3}/100  {}", name, rounded, band.label());
    }
}

fn print_pearl(pearl: &PearlBreakdown) {
    println!("\nPEARL framework analysis:");
    for (letter, name, score) in pearl.entries() {
        println!("  [{}] {:<22} {:>3}/100", letter, name, score);
    }
}
