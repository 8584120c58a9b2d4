use crate::core::catalog::Catalog;
use crate::domain::model::{AssessmentResult, ResponseMap, SectionScores};
use crate::domain::ports::JitterSource;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Compute the assessment result from the recorded responses.
///
/// Scenarios without a recorded response are skipped, not penalized. The
/// overall score is the round-half-up mean of the selected option scores,
/// or 0 when nothing was answered. `decision_making` mirrors the overall
/// score; the other three sections add a jitter draw each and stay
/// unrounded and unclamped.
pub fn aggregate(
    catalog: &Catalog,
    responses: &ResponseMap,
    jitter: &mut dyn JitterSource,
) -> AssessmentResult {
    let mut total = 0u32;
    let mut count = 0u32;

    for scenario in catalog.iter() {
        if let Some(option_id) = responses.get(&scenario.id) {
            if let Some(option) = scenario.option(option_id) {
                total += option.score;
                count += 1;
            }
        }
    }

    // f64::round rounds half away from zero, which is round-half-up for
    // the non-negative means produced here.
    let overall_score = if count > 0 {
        (f64::from(total) / f64::from(count)).round() as u32
    } else {
        0
    };
    let overall = f64::from(overall_score);

    AssessmentResult {
        overall_score,
        section_scores: SectionScores {
            decision_making: overall,
            problem_solving: overall + jitter.jitter(),
            communication: overall + jitter.jitter(),
            adaptability: overall + jitter.jitter(),
        },
        responses: responses.clone(),
    }
}

/// Production jitter source: a fresh uniform draw per call, so repeated
/// aggregations over the same responses are not reproducible.
#[derive(Debug)]
pub struct UniformJitter {
    rng: SmallRng,
}

impl UniformJitter {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for UniformJitter {
    fn jitter(&mut self) -> f64 {
        self.rng.gen_range(-5.0..5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Scenario, ScenarioOption};

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

    #[test]
    fn two_answers_round_half_up() {
        let catalog = Catalog::builtin();
        // missed_email B = 95, system_outage B = 90; mean 92.5 rounds to 93.
        let map = responses(&[("missed_email", "B"), ("system_outage", "B")]);

        let result = aggregate(&catalog, &map, &mut FixedJitter(0.0));
        assert_eq!(result.overall_score, 93);
    }

    #[test]
    fn empty_response_map_scores_zero() {
        let catalog = Catalog::builtin();
        let map = ResponseMap::new();

        let result = aggregate(&catalog, &map, &mut FixedJitter(1.5));
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.section_scores.decision_making, 0.0);
        assert_eq!(result.section_scores.problem_solving, 1.5);
        assert!(result.responses.is_empty());
    }

    #[test]
    fn single_answer_equals_its_option_score() {
        let catalog = Catalog::builtin();
        let map = responses(&[("unclear_feedback", "A")]);

        let result = aggregate(&catalog, &map, &mut FixedJitter(0.0));
        assert_eq!(result.overall_score, 95);
    }

    #[test]
    fn decision_making_always_equals_overall() {
        let catalog = Catalog::builtin();
        let map = responses(&[("missed_email", "C"), ("tight_timeline", "B")]);

        let result = aggregate(&catalog, &map, &mut FixedJitter(4.9));
        assert_eq!(
            result.section_scores.decision_making,
            f64::from(result.overall_score)
        );
    }

    #[test]
    fn jittered_sections_stay_within_five_of_overall() {
        let catalog = Catalog::builtin();
        let map = responses(&[("missed_email", "B")]);

        let result = aggregate(&catalog, &map, &mut UniformJitter::new());
        let overall = f64::from(result.overall_score);
        for section in [
            result.section_scores.problem_solving,
            result.section_scores.communication,
            result.section_scores.adaptability,
        ] {
            assert!((section - overall).abs() < 5.0);
        }
    }

    #[test]
    fn unanswered_scenarios_are_skipped_not_imputed() {
        let catalog = Catalog::builtin();
        // One high and one low answer; the other four scenarios must not
        // drag the mean toward zero.
        let map = responses(&[("missed_email", "B"), ("system_outage", "C")]);

        let result = aggregate(&catalog, &map, &mut FixedJitter(0.0));
        assert_eq!(result.overall_score, 55); // (95 + 15) / 2
    }

    #[test]
    fn sections_are_not_clamped_to_one_hundred() {
        let scenarios = vec![Scenario {
            id: "only".to_string(),
            title: "Only".to_string(),
            description: "d".to_string(),
            question: "q?".to_string(),
            options: vec![ScenarioOption {
                id: "A".to_string(),
                text: "a".to_string(),
                score: 100,
            }],
        }];
        let catalog = Catalog::new(scenarios).unwrap();
        let map = responses(&[("only", "A")]);

        let result = aggregate(&catalog, &map, &mut FixedJitter(4.0));
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.section_scores.problem_solving, 104.0);
    }

    #[test]
    fn result_carries_copy_of_responses() {
        let catalog = Catalog::builtin();
        let map = responses(&[("missed_email", "A")]);

        let result = aggregate(&catalog, &map, &mut FixedJitter(0.0));
        assert_eq!(result.responses, map);
    }

    #[test]
    fn uniform_jitter_draws_stay_in_bounds() {
        let mut jitter = UniformJitter::new();
        for _ in 0..1_000 {
            let draw = jitter.jitter();
            assert!((-5.0..5.0).contains(&draw));
        }
    }
}
