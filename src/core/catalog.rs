use crate::domain::model::{Scenario, ScenarioOption};
use crate::utils::error::{QuizError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::collections::HashSet;

/// Ordered, fixed sequence of scenarios. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Build a catalog from caller-supplied scenarios, rejecting duplicate
    /// ids, out-of-range option scores and empty text fields.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self> {
        let catalog = Self { scenarios };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn by_id(&self, scenario_id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == scenario_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// The default dataset: six workplace scenarios, four options each.
    pub fn builtin() -> Self {
        Self {
            scenarios: vec![
                scenario(
                    "missed_email",
                    "The Missed Email",
                    "You discover a key stakeholder didn't receive a deliverable due to your \
                     oversight. The deadline was today, and your manager is unavailable.",
                    "What do you do first?",
                    [
                        ("A", "Resend the deliverable and CC your manager", 85),
                        ("B", "Call the stakeholder and acknowledge the issue", 95),
                        ("C", "Wait to inform your manager first", 30),
                        ("D", "Ask the team if anyone can explain what happened", 45),
                    ],
                ),
                scenario(
                    "system_outage",
                    "Unexpected System Outage",
                    "You're responsible for client onboarding. The CRM is down, and a \
                     high-value client is waiting for next steps.",
                    "What's your best course of action?",
                    [
                        ("A", "Wait for IT to fix it", 25),
                        ("B", "Move to a manual process", 90),
                        ("C", "Cancel the onboarding session", 15),
                        ("D", "Tell the client to reschedule", 40),
                    ],
                ),
                scenario(
                    "conflicting_priorities",
                    "Conflicting Priorities",
                    "Your team lead gives you a high-priority task. Simultaneously, a senior \
                     executive emails you with a request due by end of day.",
                    "How do you handle this?",
                    [
                        ("A", "Focus on the executive's request first", 60),
                        ("B", "Contact both to clarify priorities and timelines", 95),
                        ("C", "Work on the team lead's task as assigned", 70),
                        ("D", "Try to complete both without asking questions", 40),
                    ],
                ),
                scenario(
                    "unclear_feedback",
                    "Unclear Feedback",
                    "You complete a task and receive vague feedback: 'This isn't what I \
                     expected.'",
                    "What's your next step?",
                    [
                        ("A", "Ask specific questions about what needs to change", 95),
                        ("B", "Guess what they meant and revise", 30),
                        ("C", "Request a meeting to discuss expectations", 85),
                        ("D", "Look at similar past work for guidance", 60),
                    ],
                ),
                scenario(
                    "tight_timeline",
                    "Tight Timeline Decision",
                    "You're leading a short project. A team member wants to switch tools \
                     mid-way, claiming it'll improve outcomes. You're 2 days from the deadline.",
                    "What do you decide?",
                    [
                        ("A", "Stick with current tools to avoid risk", 80),
                        ("B", "Evaluate the risk vs. benefit quickly", 90),
                        ("C", "Let the team member proceed independently", 45),
                        ("D", "Switch tools for future projects only", 70),
                    ],
                ),
                scenario(
                    "process_breakdown",
                    "Process Breakdown",
                    "The usual escalation path fails, and a client issue is getting worse. \
                     You're not sure who owns the next step.",
                    "What's your most effective move?",
                    [
                        ("A", "Take ownership and find a solution path", 95),
                        ("B", "Keep escalating until someone responds", 60),
                        ("C", "Document the issue and wait for guidance", 35),
                        ("D", "Inform the client about the process delay", 75),
                    ],
                ),
            ],
        }
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        if self.scenarios.is_empty() {
            return Err(QuizError::InvalidCatalog {
                message: "Catalog must contain at least one scenario".to_string(),
            });
        }

        let mut scenario_ids = HashSet::new();
        for scenario in &self.scenarios {
            validate_non_empty_string("scenario.id", &scenario.id)?;
            validate_non_empty_string("scenario.title", &scenario.title)?;
            validate_non_empty_string("scenario.question", &scenario.question)?;

            if !scenario_ids.insert(scenario.id.as_str()) {
                return Err(QuizError::InvalidCatalog {
                    message: format!("Duplicate scenario id: {}", scenario.id),
                });
            }

            if scenario.options.is_empty() {
                return Err(QuizError::InvalidCatalog {
                    message: format!("Scenario '{}' has no options", scenario.id),
                });
            }

            let mut option_ids = HashSet::new();
            for option in &scenario.options {
                validate_non_empty_string("option.id", &option.id)?;
                validate_non_empty_string("option.text", &option.text)?;
                validate_range("option.score", option.score, 0, 100)?;

                if !option_ids.insert(option.id.as_str()) {
                    return Err(QuizError::InvalidCatalog {
                        message: format!(
                            "Duplicate option id '{}' in scenario '{}'",
                            option.id, scenario.id
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

fn scenario(
    id: &str,
    title: &str,
    description: &str,
    question: &str,
    options: [(&str, &str, u32); 4],
) -> Scenario {
    Scenario {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        question: question.to_string(),
        options: options
            .into_iter()
            .map(|(id, text, score)| ScenarioOption {
                id: id.to_string(),
                text: text.to_string(),
                score,
            })
            .collect(),
    }
}
