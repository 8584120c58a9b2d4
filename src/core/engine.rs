use crate::core::aggregator::aggregate;
use crate::core::catalog::Catalog;
use crate::core::collector::ResponseCollector;
use crate::domain::model::{AssessmentResult, Scenario};
use crate::domain::ports::JitterSource;
use crate::utils::error::{QuizError, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// The three screens of the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    InProgress,
    Completed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Intro => write!(f, "at the intro"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AnswerOutcome {
    /// More scenarios remain; the collector moved to `next_index`.
    Advanced { next_index: usize },
    /// The last scenario was answered and the attempt is finished.
    Completed(AssessmentResult),
}

/// Drives one assessment attempt through Intro, InProgress and Completed,
/// owning the collector, the timed advance and the final aggregation.
pub struct AssessmentEngine<J: JitterSource> {
    catalog: Catalog,
    collector: ResponseCollector,
    phase: Phase,
    advance_delay: Duration,
    jitter: J,
    result: Option<AssessmentResult>,
    started_at: Option<DateTime<Utc>>,
}

impl<J: JitterSource> AssessmentEngine<J> {
    pub fn new(catalog: Catalog, advance_delay: Duration, jitter: J) -> Self {
        Self {
            catalog,
            collector: ResponseCollector::new(),
            phase: Phase::Intro,
            advance_delay,
            jitter,
            result: None,
            started_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// The scenario currently shown, if an attempt is running.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        if self.phase == Phase::InProgress {
            self.catalog.get(self.collector.current_index())
        } else {
            None
        }
    }

    /// One-based position and total count, for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.collector.current_index() + 1, self.catalog.len())
    }

    pub fn response_for(&self, scenario_id: &str) -> Option<&str> {
        self.collector.response_for(scenario_id)
    }

    /// Intro -> InProgress with a fresh collector.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != Phase::Intro {
            return Err(QuizError::PhaseViolation {
                operation: "start".to_string(),
                phase: self.phase.to_string(),
            });
        }
        self.collector.reset();
        self.result = None;
        self.started_at = Some(Utc::now());
        self.phase = Phase::InProgress;
        tracing::info!("assessment started, {} scenarios", self.catalog.len());
        Ok(())
    }

    /// Record an answer, wait out the advance delay, then either move to
    /// the next scenario or finish the attempt. `Completed` is produced
    /// exactly once per attempt; answering afterwards is a phase violation.
    pub async fn answer(&mut self, scenario_id: &str, option_id: &str) -> Result<AnswerOutcome> {
        if self.phase != Phase::InProgress {
            return Err(QuizError::PhaseViolation {
                operation: "answer".to_string(),
                phase: self.phase.to_string(),
            });
        }

        self.collector.select(&self.catalog, scenario_id, option_id)?;
        tracing::debug!(scenario = scenario_id, option = option_id, "answer recorded");

        // Debounce so the caller can show the registered selection before
        // the view moves on.
        tokio::time::sleep(self.advance_delay).await;

        if self.collector.at_last(&self.catalog) {
            let result = aggregate(&self.catalog, self.collector.responses(), &mut self.jitter);
            self.result = Some(result.clone());
            self.phase = Phase::Completed;
            tracing::info!(overall = result.overall_score, "assessment complete");
            Ok(AnswerOutcome::Completed(result))
        } else {
            let next_index = self.collector.advance(&self.catalog);
            Ok(AnswerOutcome::Advanced { next_index })
        }
    }

    /// Step back to the previous scenario. A no-op at the first scenario
    /// or outside a running attempt.
    pub fn go_back(&mut self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.collector.go_back()
    }

    /// Discard all in-progress state and the result, back to the intro.
    pub fn restart(&mut self) {
        self.collector.reset();
        self.result = None;
        self.started_at = None;
        self.phase = Phase::Intro;
        tracing::debug!("assessment state discarded");
    }
}
