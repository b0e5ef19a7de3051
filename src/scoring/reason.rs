//! @ai:module:intent Compose the natural-language explanation of a score result
//! @ai:module:layer application
//! @ai:module:public_api ReasonComposer
//! @ai:module:stateless true

use crate::config::ScoringConfig;
use crate::scoring::types::{percent, PreferenceWeights, RankedTool, SignificanceTest};
use crate::store::display_name;

/// @ai:intent Deterministic sentence template over engine output
#[derive(Debug, Clone)]
pub struct ReasonComposer {
    significance_level: f64,
    priority_threshold: f64,
    neutral_preference: f64,
}

impl ReasonComposer {
    /// @ai:intent Create a composer from scoring configuration
    /// @ai:effects pure
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            significance_level: config.significance_level,
            priority_threshold: config.priority_threshold,
            neutral_preference: config.neutral_preference,
        }
    }

    /// @ai:intent Build the explanation string
    /// @ai:pre ranking is sorted by descending score
    /// @ai:effects pure
    pub fn compose(
        &self,
        subtask: &str,
        preferences: Option<&PreferenceWeights>,
        ranking: &[RankedTool],
        not_applicable: &[String],
        significance: Option<&SignificanceTest>,
    ) -> String {
        let mut sentences = Vec::new();
        let subject = display_name(subtask).to_lowercase();

        match ranking.first() {
            Some(winner) => {
                sentences.push(format!(
                    "For {}, {} is the best match based on overall benchmark performance.",
                    subject, winner.tool
                ));
                sentences.push(format!(
                    "{} scored {:.1}% overall{}.",
                    winner.tool,
                    percent(winner.score),
                    self.prioritised_phrase(preferences)
                ));
            }
            None => {
                sentences.push(format!(
                    "No benchmarked tool is applicable to {}.",
                    subject
                ));
            }
        }

        if let Some(second) = ranking.get(1) {
            sentences.push(format!(
                "{} ranked second with {:.1}%.",
                second.tool,
                percent(second.score)
            ));
        }

        if let Some(test) = significance {
            if test.p < self.significance_level {
                sentences.push(format!(
                    "The performance difference is statistically significant (p={:.3}).",
                    test.p
                ));
            } else {
                sentences.push(format!(
                    "The performance difference may not be statistically significant (p={:.3}).",
                    test.p
                ));
            }
        }

        if !not_applicable.is_empty() {
            sentences.push(format!(
                "The following tools were not applicable for this task: {}.",
                not_applicable.join(", ")
            ));
        }

        sentences.join(" ")
    }

    /// @ai:intent Phrase naming the prioritised preferences, empty for neutral profiles
    /// @ai:effects pure
    fn prioritised_phrase(&self, preferences: Option<&PreferenceWeights>) -> String {
        let Some(prefs) = preferences else {
            return String::new();
        };

        let neutral = Some(self.neutral_preference);
        if prefs.speed == neutral && prefs.memory == neutral && prefs.ease == neutral {
            return String::new();
        }

        let prioritised: Vec<&str> = [
            (prefs.speed, "speed"),
            (prefs.memory, "memory efficiency"),
            (prefs.ease, "ease of use"),
        ]
        .into_iter()
        .filter(|(value, _)| value.map_or(false, |v| v >= self.priority_threshold))
        .map(|(_, label)| label)
        .collect();

        if prioritised.is_empty() {
            String::new()
        } else {
            format!(
                ", showing strong performance in the metrics you prioritised ({})",
                prioritised.join(", ")
            )
        }
    }
}

impl Default for ReasonComposer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::stats::PLACEHOLDER_P_VALUE;
    use pretty_assertions::assert_eq;

    fn ranked(tool: &str, score: f64) -> RankedTool {
        RankedTool {
            tool: tool.to_string(),
            score,
        }
    }

    fn placeholder_test() -> SignificanceTest {
        SignificanceTest {
            top_tool: "R".to_string(),
            runner_up: "Python".to_string(),
            t: Some(-1.1),
            df: Some(5.0),
            p: PLACEHOLDER_P_VALUE,
            p_value_is_placeholder: true,
        }
    }

    #[test]
    fn test_full_reason_with_not_applicable() {
        let composer = ReasonComposer::default();
        let reason = composer.compose(
            "ANOVA",
            None,
            &[ranked("R", 0.7), ranked("Python", 0.275)],
            &["SQL".to_string()],
            Some(&placeholder_test()),
        );

        assert_eq!(
            reason,
            "For anova, R is the best match based on overall benchmark performance. \
             R scored 70.0% overall. Python ranked second with 27.5%. \
             The performance difference may not be statistically significant (p=0.500). \
             The following tools were not applicable for this task: SQL."
        );
    }

    #[test]
    fn test_prioritised_preferences_listed() {
        let composer = ReasonComposer::default();
        let prefs = PreferenceWeights::new(90.0, 50.0, 30.0);
        let reason = composer.compose("FILTERING", Some(&prefs), &[ranked("Python", 0.8848)], &[], None);

        assert!(reason.contains(
            "Python scored 88.5% overall, showing strong performance in the metrics you prioritised (speed)."
        ));
    }

    #[test]
    fn test_balanced_profile_has_no_priorities() {
        let composer = ReasonComposer::default();
        let prefs = PreferenceWeights::new(50.0, 50.0, 50.0);
        let reason = composer.compose("JOINING", Some(&prefs), &[ranked("Python", 0.74)], &[], None);

        assert!(!reason.contains("prioritised"));
    }

    #[test]
    fn test_multiple_priorities_in_fixed_order() {
        let composer = ReasonComposer::default();
        let prefs = PreferenceWeights::new(60.0, 80.0, 80.0);
        let reason = composer.compose("BAR_CHART", Some(&prefs), &[ranked("R", 0.6)], &[], None);

        assert!(reason.starts_with("For bar chart, R"));
        assert!(reason.contains("(speed, memory efficiency, ease of use)"));
    }

    #[test]
    fn test_significant_wording_below_level() {
        let composer = ReasonComposer::default();
        let mut test = placeholder_test();
        test.p = 0.01;

        let reason = composer.compose(
            "TTEST",
            None,
            &[ranked("R", 0.6), ranked("Python", 0.4)],
            &[],
            Some(&test),
        );
        assert!(reason.contains("is statistically significant (p=0.010)."));
    }

    #[test]
    fn test_no_applicable_tool() {
        let composer = ReasonComposer::default();
        let reason = composer.compose(
            "BOX PLOT",
            None,
            &[],
            &["SQL".to_string(), "R".to_string()],
            None,
        );

        assert_eq!(
            reason,
            "No benchmarked tool is applicable to box plot. \
             The following tools were not applicable for this task: SQL, R."
        );
    }
}
