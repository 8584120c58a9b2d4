use crate::core::catalog::Catalog;
use crate::domain::model::ResponseMap;
use crate::utils::error::{QuizError, Result};

/// Navigation and selection state for one assessment attempt: the current
/// scenario index plus the response map. The timed advance between
/// scenarios belongs to the engine, not here.
#[derive(Debug, Clone, Default)]
pub struct ResponseCollector {
    index: usize,
    responses: ResponseMap,
}

impl ResponseCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    pub fn response_for(&self, scenario_id: &str) -> Option<&str> {
        self.responses.get(scenario_id).map(String::as_str)
    }

    /// Record the selected option for the scenario at the current index.
    /// The scenario id must match the current scenario and the option must
    /// belong to it; anything else is a contract violation from the caller.
    /// Re-selecting after `go_back` overwrites the single map entry.
    pub fn select(&mut self, catalog: &Catalog, scenario_id: &str, option_id: &str) -> Result<()> {
        let scenario = catalog
            .get(self.index)
            .filter(|s| s.id == scenario_id)
            .ok_or_else(|| QuizError::UnknownScenario {
                scenario_id: scenario_id.to_string(),
            })?;

        if scenario.option(option_id).is_none() {
            return Err(QuizError::InvalidSelection {
                scenario_id: scenario_id.to_string(),
                option_id: option_id.to_string(),
            });
        }

        self.responses
            .insert(scenario_id.to_string(), option_id.to_string());
        Ok(())
    }

    /// True when the current index is the last scenario of the catalog.
    pub fn at_last(&self, catalog: &Catalog) -> bool {
        self.index + 1 >= catalog.len()
    }

    /// Move to the next scenario and return the new index. Saturates at the
    /// last scenario.
    pub fn advance(&mut self, catalog: &Catalog) -> usize {
        if self.index + 1 < catalog.len() {
            self.index += 1;
        }
        self.index
    }

    /// Step back one scenario without clearing any recorded response.
    /// Returns false (and leaves state unchanged) at the first scenario.
    pub fn go_back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.responses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_records_answer_for_current_scenario() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new();

        collector.select(&catalog, "missed_email", "B").unwrap();
        assert_eq!(collector.response_for("missed_email"), Some("B"));
        assert_eq!(collector.responses().len(), 1);
    }

    #[test]
    fn select_rejects_option_outside_scenario() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new();

        let err = collector.select(&catalog, "missed_email", "Z").unwrap_err();
        assert!(matches!(err, QuizError::InvalidSelection { .. }));
        assert!(collector.responses().is_empty());
    }

    #[test]
    fn select_rejects_scenario_other_than_current() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new();

        // Index is 0; answering the second scenario is not allowed.
        let err = collector.select(&catalog, "system_outage", "B").unwrap_err();
        assert!(matches!(err, QuizError::UnknownScenario { .. }));
    }

    #[test]
    fn go_back_at_first_scenario_is_a_noop() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new();
        collector.select(&catalog, "missed_email", "A").unwrap();

        assert!(!collector.go_back());
        assert_eq!(collector.current_index(), 0);
        assert_eq!(collector.response_for("missed_email"), Some("A"));
    }

    #[test]
    fn reselect_after_go_back_overwrites_single_entry() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new();

        collector.select(&catalog, "missed_email", "A").unwrap();
        collector.advance(&catalog);
        collector.select(&catalog, "system_outage", "B").unwrap();

        assert!(collector.go_back());
        collector.select(&catalog, "missed_email", "B").unwrap();

        assert_eq!(collector.responses().len(), 2);
        assert_eq!(collector.response_for("missed_email"), Some("B"));
        assert_eq!(collector.response_for("system_outage"), Some("B"));
    }

    #[test]
    fn advance_saturates_at_last_scenario() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new();

        for _ in 0..10 {
            collector.advance(&catalog);
        }
        assert_eq!(collector.current_index(), catalog.len() - 1);
        assert!(collector.at_last(&catalog));
    }

    #[test]
    fn reset_clears_index_and_responses() {
        let catalog = Catalog::builtin();
        let mut collector = ResponseCollector::new();

        collector.select(&catalog, "missed_email", "A").unwrap();
        collector.advance(&catalog);
        collector.reset();

        assert_eq!(collector.current_index(), 0);
        assert!(collector.responses().is_empty());
    }
}
