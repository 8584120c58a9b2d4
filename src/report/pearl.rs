use serde::{Deserialize, Serialize};

/// Five-part display breakdown derived from the overall score with fixed
/// offsets, each clamped to [0, 100]. Not part of the canonical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PearlBreakdown {
    pub practical_intelligence: u32,
    pub execution: u32,
    pub adaptability: u32,
    pub reliability: u32,
    pub learning_agility: u32,
}

impl PearlBreakdown {
    pub fn from_overall(overall: u32) -> Self {
        Self {
            practical_intelligence: overall.min(100),
            execution: (overall + 5).min(100),
            adaptability: overall.saturating_sub(3),
            reliability: (overall + 2).min(100),
            learning_agility: overall.saturating_sub(1),
        }
    }

    /// Letter, name and score triples in P-E-A-R-L order for display.
    pub fn entries(&self) -> [(&'static str, &'static str, u32); 5] {
        [
            ("P", "Practical Intelligence", self.practical_intelligence),
            ("E", "Execution", self.execution),
            ("A", "Adaptability", self.adaptability),
            ("R", "Reliability", self.reliability),
            ("L", "Learning Agility", self.learning_agility),
        ]
    }
}
