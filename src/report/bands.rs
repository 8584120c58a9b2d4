use serde::Serialize;

/// Readiness band for a displayed score. Section scores are unclamped
/// upstream, so the input may fall outside [0, 100]; the thresholds still
/// apply as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Strong,
    Developing,
    Emerging,
}

impl ScoreBand {
    pub fn from_score(score: i64) -> Self {
        if score >= 85 {
            ScoreBand::Excellent
        } else if score >= 70 {
            ScoreBand::Strong
        } else if score >= 55 {
            ScoreBand::Developing
        } else {
            ScoreBand::Emerging
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Strong => "Strong",
            ScoreBand::Developing => "Developing",
            ScoreBand::Emerging => "Emerging",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Ready for immediate application",
            ScoreBand::Strong => "Minor development needed",
            ScoreBand::Developing => "Focused training recommended",
            ScoreBand::Emerging => "Significant development needed",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
