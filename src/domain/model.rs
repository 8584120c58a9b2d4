use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One workplace situation presented to the user, with a fixed set of
/// answer options. Scenarios are defined once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question: String,
    pub options: Vec<ScenarioOption>,
}

impl Scenario {
    pub fn option(&self, option_id: &str) -> Option<&ScenarioOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// One selectable answer. The score grades the quality of the choice
/// on a 0 to 100 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub id: String,
    pub text: String,
    pub score: u32,
}

/// The user's recorded scenario id to option id selections for the
/// current attempt. Entries are only removed by a full reset.
pub type ResponseMap = HashMap<String, String>;

/// Skill breakdown derived from the overall score. `decision_making`
/// mirrors the overall score exactly; the other three carry a random
/// jitter and are neither rounded nor clamped here. Rounding happens
/// at display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub decision_making: f64,
    pub problem_solving: f64,
    pub communication: f64,
    pub adaptability: f64,
}

/// Final output of one assessment attempt. Built once when the last
/// scenario is answered, immutable afterwards, discarded on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub overall_score: u32,
    pub section_scores: SectionScores,
    pub responses: ResponseMap,
}
