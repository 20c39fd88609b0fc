//! Strongest/weakest selection and improvement suggestions.

use super::aggregator::AttributeScore;
use crate::model::{AttributeKey, LikertRating, RatingSelection};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tolerance for treating two scores as equal
pub const SCORE_EPSILON: f64 = 1e-6;

/// Shown in place of the strongest list when every score is equal
pub const TIED_STRONGEST_TEXT: &str = "All attributes are tied (no single strongest attribute).";
/// Shown in place of the weakest list when every score is equal
pub const TIED_WEAKEST_TEXT: &str = "All attributes are tied (no single weakest attribute).";
/// Global message when every answer is the top of the scale
pub const ALL_HIGHEST_TEXT: &str = "You rated every aspect at the highest level. No specific improvement suggestions were generated.";
/// Global message when every answer is the bottom of the scale
pub const ALL_LOWEST_TEXT: &str = "You rated every aspect at the lowest level. Consider revisiting your architecture from the ground up, as all quality attributes currently appear weak.";

/// Which attributes receive an improvement suggestion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionPolicy {
    /// Every attribute scoring below the best score
    #[default]
    BelowBest,
    /// Only the attributes tied for the lowest score
    WeakestOnly,
}

impl SuggestionPolicy {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BelowBest => "below-best",
            Self::WeakestOnly => "weakest-only",
        }
    }
}

impl std::fmt::Display for SuggestionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative ranking of the attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Standing {
    /// Every attribute scored the same
    Tied,
    /// Labels of the attributes tied for max and min, in catalog order
    Ranked {
        strongest: Vec<&'static str>,
        weakest: Vec<&'static str>,
    },
}

impl Standing {
    /// Text for the strongest line.
    #[must_use]
    pub fn strongest_text(&self) -> String {
        match self {
            Self::Tied => TIED_STRONGEST_TEXT.to_string(),
            Self::Ranked { strongest, .. } => strongest.join(", "),
        }
    }

    /// Text for the weakest line.
    #[must_use]
    pub fn weakest_text(&self) -> String {
        match self {
            Self::Tied => TIED_WEAKEST_TEXT.to_string(),
            Self::Ranked { weakest, .. } => weakest.join(", "),
        }
    }
}

/// An improvement suggestion for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub key: AttributeKey,
    pub label: &'static str,
    pub text: &'static str,
}

impl Suggestion {
    fn for_key(key: AttributeKey) -> Self {
        let attr = key.attribute();
        Self {
            key,
            label: attr.label,
            text: attr.suggestion,
        }
    }
}

/// What advice, if any, accompanies the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "suggestions", rename_all = "snake_case")]
pub enum Guidance {
    /// Every answer was 5; per-attribute suggestions are suppressed
    AllHighest,
    /// Every answer was 1; a single global message replaces suggestions
    AllLowest,
    /// Scores are tied, nothing stands out
    NoSuggestions,
    /// Suggestions in catalog order
    Suggestions(Vec<Suggestion>),
}

impl Guidance {
    /// The global message replacing per-attribute suggestions, if any.
    #[must_use]
    pub const fn global_message(&self) -> Option<&'static str> {
        match self {
            Self::AllHighest => Some(ALL_HIGHEST_TEXT),
            Self::AllLowest => Some(ALL_LOWEST_TEXT),
            Self::NoSuggestions | Self::Suggestions(_) => None,
        }
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            Self::Suggestions(list) => list,
            _ => &[],
        }
    }
}

/// Strongest/weakest standing plus the guidance to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub standing: Standing,
    pub guidance: Guidance,
}

/// Pick strongest/weakest attributes and the suggestions to surface.
///
/// The uniform-answer cases look at the raw ratings, not the derived scores:
/// all 5s and all 1s each produce a single global message.
pub fn select_insights(
    scores: &[AttributeScore],
    ratings: &RatingSelection,
    policy: SuggestionPolicy,
) -> Insights {
    let standing = rank(scores);

    let guidance = if all_ratings_equal(ratings, LikertRating::MAX) {
        Guidance::AllHighest
    } else if all_ratings_equal(ratings, LikertRating::MIN) {
        Guidance::AllLowest
    } else {
        match &standing {
            Standing::Tied => Guidance::NoSuggestions,
            Standing::Ranked { .. } => {
                let suggestions = suggest(scores, policy);
                if suggestions.is_empty() {
                    Guidance::NoSuggestions
                } else {
                    Guidance::Suggestions(suggestions)
                }
            }
        }
    };

    tracing::debug!(?policy, suggestions = guidance.suggestions().len(), "selected insights");
    Insights { standing, guidance }
}

fn bounds(scores: &[AttributeScore]) -> Option<(f64, f64)> {
    scores.iter().map(|s| s.score).fold(None, |acc, score| match acc {
        None => Some((score, score)),
        Some((min, max)) => Some((min.min(score), max.max(score))),
    })
}

fn rank(scores: &[AttributeScore]) -> Standing {
    let Some((min, max)) = bounds(scores) else {
        return Standing::Tied;
    };
    if (max - min).abs() < SCORE_EPSILON {
        return Standing::Tied;
    }

    let labels_near = |target: f64| -> Vec<&'static str> {
        scores
            .iter()
            .filter(|s| (s.score - target).abs() < SCORE_EPSILON)
            .map(AttributeScore::label)
            .collect()
    };

    Standing::Ranked {
        strongest: labels_near(max),
        weakest: labels_near(min),
    }
}

fn suggest(scores: &[AttributeScore], policy: SuggestionPolicy) -> Vec<Suggestion> {
    let Some((min, max)) = bounds(scores) else {
        return Vec::new();
    };

    scores
        .iter()
        .filter(|s| match policy {
            SuggestionPolicy::BelowBest => s.score < max - SCORE_EPSILON,
            SuggestionPolicy::WeakestOnly => (s.score - min).abs() < SCORE_EPSILON,
        })
        .map(|s| Suggestion::for_key(s.key))
        .collect()
}

fn all_ratings_equal(ratings: &RatingSelection, value: LikertRating) -> bool {
    let mut all = ratings.all_ratings().peekable();
    all.peek().is_some() && all.all(|r| r == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RatingPair, WeightSelection};
    use crate::scoring::compute_scores;

    fn pair(a: u8, b: u8) -> RatingPair {
        RatingPair::new(LikertRating::new(a).unwrap(), LikertRating::new(b).unwrap())
    }

    fn insights_for(ratings: &RatingSelection, policy: SuggestionPolicy) -> Insights {
        let result = compute_scores(&WeightSelection::uniform(3), ratings).unwrap();
        select_insights(&result.attribute_scores, ratings, policy)
    }

    #[test]
    fn test_all_highest() {
        let insights = insights_for(&RatingSelection::uniform(pair(5, 5)), SuggestionPolicy::BelowBest);
        assert_eq!(insights.standing, Standing::Tied);
        assert_eq!(insights.guidance, Guidance::AllHighest);
        assert_eq!(insights.guidance.global_message(), Some(ALL_HIGHEST_TEXT));
        assert!(insights.guidance.suggestions().is_empty());
    }

    #[test]
    fn test_all_lowest() {
        let insights = insights_for(&RatingSelection::uniform(pair(1, 1)), SuggestionPolicy::BelowBest);
        assert_eq!(insights.guidance, Guidance::AllLowest);
    }

    #[test]
    fn test_uniform_neutral_is_tied_without_suggestions() {
        let insights = insights_for(&RatingSelection::uniform(pair(3, 3)), SuggestionPolicy::BelowBest);
        assert_eq!(insights.standing, Standing::Tied);
        assert_eq!(insights.guidance, Guidance::NoSuggestions);
        assert_eq!(insights.standing.strongest_text(), TIED_STRONGEST_TEXT);
        assert_eq!(insights.standing.weakest_text(), TIED_WEAKEST_TEXT);
    }

    #[test]
    fn test_equal_scores_from_mixed_answers_are_tied() {
        // (2,4) and (4,2) both average to 3 but are not uniform answers
        let mut ratings = RatingSelection::uniform(pair(2, 4));
        ratings.insert(AttributeKey::Security, pair(4, 2));
        let insights = insights_for(&ratings, SuggestionPolicy::BelowBest);
        assert_eq!(insights.standing, Standing::Tied);
        assert_eq!(insights.guidance, Guidance::NoSuggestions);
    }

    #[test]
    fn test_single_weak_attribute() {
        let mut ratings = RatingSelection::uniform(pair(5, 5));
        ratings.insert(AttributeKey::Security, pair(1, 1));
        let insights = insights_for(&ratings, SuggestionPolicy::BelowBest);

        match &insights.standing {
            Standing::Ranked { strongest, weakest } => {
                assert_eq!(weakest, &vec!["Security"]);
                assert_eq!(strongest.len(), 9);
                assert!(!strongest.contains(&"Security"));
            }
            Standing::Tied => panic!("expected ranked standing"),
        }
        let suggestions = insights.guidance.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].key, AttributeKey::Security);
        assert_eq!(suggestions[0].text, AttributeKey::Security.suggestion());
    }

    #[test]
    fn test_below_best_includes_middle_attributes() {
        let mut ratings = RatingSelection::uniform(pair(5, 5));
        ratings.insert(AttributeKey::Usability, pair(3, 3));
        ratings.insert(AttributeKey::Modularity, pair(1, 2));

        let below_best = insights_for(&ratings, SuggestionPolicy::BelowBest);
        let keys: Vec<AttributeKey> = below_best.guidance.suggestions().iter().map(|s| s.key).collect();
        // catalog order, not score order
        assert_eq!(keys, [AttributeKey::Modularity, AttributeKey::Usability]);

        let weakest_only = insights_for(&ratings, SuggestionPolicy::WeakestOnly);
        let keys: Vec<AttributeKey> = weakest_only.guidance.suggestions().iter().map(|s| s.key).collect();
        assert_eq!(keys, [AttributeKey::Modularity]);
    }

    #[test]
    fn test_weakest_ties_all_get_suggestions() {
        let mut ratings = RatingSelection::uniform(pair(4, 4));
        ratings.insert(AttributeKey::Reliability, pair(2, 2));
        ratings.insert(AttributeKey::Portability, pair(2, 2));
        let insights = insights_for(&ratings, SuggestionPolicy::WeakestOnly);
        match &insights.standing {
            Standing::Ranked { weakest, .. } => {
                assert_eq!(weakest, &vec!["Reliability", "Portability"]);
            }
            Standing::Tied => panic!("expected ranked standing"),
        }
        assert_eq!(insights.guidance.suggestions().len(), 2);
    }

    #[test]
    fn test_empty_scores_are_tied() {
        let insights = select_insights(&[], &RatingSelection::new(), SuggestionPolicy::BelowBest);
        assert_eq!(insights.standing, Standing::Tied);
        assert_eq!(insights.guidance, Guidance::NoSuggestions);
    }

    #[test]
    fn test_policy_parses_from_yaml() {
        let policy: SuggestionPolicy = serde_yaml::from_str("weakest-only").unwrap();
        assert_eq!(policy, SuggestionPolicy::WeakestOnly);
    }
}
