//! Scoring engine integration tests.
//!
//! Exercises the collect → aggregate → select flow on whole questionnaires,
//! including the uniform-answer special cases and tie handling.

use qds_tools::collector::{check_completeness, collect, missing_fields};
use qds_tools::model::{
    AttributeKey, FieldId, LikertRating, Question, RatingPair, RatingSelection, ResponseSheet,
    WeightSelection,
};
use qds_tools::scoring::{
    attribute_score, compute_scores, normalize_weights, select_insights, Guidance, Standing,
    SuggestionPolicy, ALL_HIGHEST_TEXT, ALL_LOWEST_TEXT, TIED_STRONGEST_TEXT, TIED_WEAKEST_TEXT,
};

// ============================================================================
// Helpers
// ============================================================================

fn rating(value: u8) -> LikertRating {
    LikertRating::new(value).expect("valid rating")
}

fn pair(a: u8, b: u8) -> RatingPair {
    RatingPair::new(rating(a), rating(b))
}

/// Every attribute answered with the same weight and pair.
fn uniform_sheet(weight: u32, a: u8, b: u8) -> ResponseSheet {
    AttributeKey::ALL
        .iter()
        .fold(ResponseSheet::new(), |sheet, key| {
            sheet.with_attribute(*key, weight, rating(a), rating(b))
        })
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Attribute score conversion
// ============================================================================

mod attribute_scores {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert!(approx_eq(attribute_score(&pair(1, 1)), 0.0));
        assert!(approx_eq(attribute_score(&pair(3, 3)), 5.0));
        assert!(approx_eq(attribute_score(&pair(5, 5)), 10.0));
    }

    #[test]
    fn order_of_answers_does_not_matter() {
        assert!(approx_eq(
            attribute_score(&pair(2, 5)),
            attribute_score(&pair(5, 2))
        ));
        assert!(approx_eq(attribute_score(&pair(2, 5)), 6.25));
    }
}

// ============================================================================
// Aggregation
// ============================================================================

mod aggregation {
    use super::*;

    #[test]
    fn all_highest_scores_ten() {
        let result = compute_scores(
            &WeightSelection::uniform(2),
            &RatingSelection::uniform(pair(5, 5)),
        )
        .expect("positive weights");
        assert_eq!(result.display_score(), "10.00");
        assert!(approx_eq(result.percentage(), 100.0));
    }

    #[test]
    fn all_lowest_scores_zero() {
        let result = compute_scores(
            &WeightSelection::uniform(4),
            &RatingSelection::uniform(pair(1, 1)),
        )
        .expect("positive weights");
        assert_eq!(result.display_score(), "0.00");
    }

    #[test]
    fn zero_total_weight_has_no_result() {
        assert!(compute_scores(
            &WeightSelection::uniform(0),
            &RatingSelection::uniform(pair(4, 4))
        )
        .is_none());
        assert!(normalize_weights(&WeightSelection::uniform(0)).is_none());
    }

    #[test]
    fn weights_shift_the_overall_score() {
        let mut weights = WeightSelection::uniform(1);
        weights.insert(AttributeKey::Security, 10);
        let mut ratings = RatingSelection::uniform(pair(5, 5));
        ratings.insert(AttributeKey::Security, pair(1, 1));

        // 9 attributes at 10 with weight 1, Security at 0 with weight 10
        let result = compute_scores(&weights, &ratings).expect("positive weights");
        assert!(approx_eq(result.overall_score, 90.0 / 19.0));
    }

    #[test]
    fn single_weighted_attribute_dominates() {
        let mut weights = WeightSelection::uniform(0);
        weights.insert(AttributeKey::Usability, 5);
        let mut ratings = RatingSelection::uniform(pair(1, 1));
        ratings.insert(AttributeKey::Usability, pair(4, 5));

        let result = compute_scores(&weights, &ratings).expect("positive weights");
        assert!(approx_eq(result.overall_score, 8.75));
    }

    #[test]
    fn attribute_scores_follow_catalog_order() {
        let result = compute_scores(
            &WeightSelection::uniform(1),
            &RatingSelection::uniform(pair(3, 4)),
        )
        .expect("positive weights");
        let keys: Vec<AttributeKey> = result.attribute_scores.iter().map(|s| s.key).collect();
        assert_eq!(keys, AttributeKey::ALL.to_vec());
    }
}

// ============================================================================
// Insights
// ============================================================================

mod insights {
    use super::*;

    fn evaluate_uniform(ratings: &RatingSelection, policy: SuggestionPolicy) -> qds_tools::Insights {
        let result = compute_scores(&WeightSelection::uniform(3), ratings).expect("positive weights");
        select_insights(&result.attribute_scores, ratings, policy)
    }

    #[test]
    fn all_highest_has_global_message_only() {
        let insights = evaluate_uniform(&RatingSelection::uniform(pair(5, 5)), SuggestionPolicy::BelowBest);
        assert_eq!(insights.guidance, Guidance::AllHighest);
        assert_eq!(insights.guidance.global_message(), Some(ALL_HIGHEST_TEXT));
        assert!(insights.guidance.suggestions().is_empty());
    }

    #[test]
    fn all_lowest_has_global_message_only() {
        let insights = evaluate_uniform(&RatingSelection::uniform(pair(1, 1)), SuggestionPolicy::BelowBest);
        assert_eq!(insights.guidance, Guidance::AllLowest);
        assert_eq!(insights.guidance.global_message(), Some(ALL_LOWEST_TEXT));
    }

    #[test]
    fn neutral_answers_are_tied() {
        let insights = evaluate_uniform(&RatingSelection::uniform(pair(3, 3)), SuggestionPolicy::BelowBest);
        assert_eq!(insights.standing, Standing::Tied);
        assert_eq!(insights.standing.strongest_text(), TIED_STRONGEST_TEXT);
        assert_eq!(insights.standing.weakest_text(), TIED_WEAKEST_TEXT);
        assert_eq!(insights.guidance, Guidance::NoSuggestions);
    }

    #[test]
    fn weak_security_scenario() {
        let mut ratings = RatingSelection::uniform(pair(5, 5));
        ratings.insert(AttributeKey::Security, pair(1, 1));
        let result = compute_scores(&WeightSelection::uniform(3), &ratings).expect("positive weights");
        assert_eq!(result.display_score(), "9.00");

        let insights = select_insights(&result.attribute_scores, &ratings, SuggestionPolicy::BelowBest);
        match &insights.standing {
            Standing::Ranked { strongest, weakest } => {
                assert_eq!(weakest, &vec!["Security"]);
                let expected: Vec<&str> = AttributeKey::ALL
                    .iter()
                    .filter(|k| **k != AttributeKey::Security)
                    .map(|k| k.label())
                    .collect();
                assert_eq!(strongest, &expected);
            }
            Standing::Tied => panic!("expected a ranked standing"),
        }

        let suggestions = insights.guidance.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].text, AttributeKey::Security.suggestion());
    }

    #[test]
    fn policies_differ_on_middle_attributes() {
        let mut ratings = RatingSelection::uniform(pair(4, 4));
        ratings.insert(AttributeKey::Reliability, pair(5, 5));
        ratings.insert(AttributeKey::Scalability, pair(2, 2));

        let below_best = evaluate_uniform(&ratings, SuggestionPolicy::BelowBest);
        assert_eq!(below_best.guidance.suggestions().len(), 9);

        let weakest_only = evaluate_uniform(&ratings, SuggestionPolicy::WeakestOnly);
        let keys: Vec<AttributeKey> = weakest_only
            .guidance
            .suggestions()
            .iter()
            .map(|s| s.key)
            .collect();
        assert_eq!(keys, vec![AttributeKey::Scalability]);
    }
}

// ============================================================================
// Completeness
// ============================================================================

mod completeness {
    use super::*;

    #[test]
    fn one_missing_question_is_reported_alone() {
        let mut sheet = uniform_sheet(3, 4, 4);
        let field = FieldId::question(AttributeKey::Interoperability, Question::First);
        sheet.clear_field(field);

        let missing = missing_fields(&sheet);
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), vec![field]);
        assert!(collect(&sheet).is_err());
    }

    #[test]
    fn every_missing_field_is_listed() {
        let completeness = check_completeness(&ResponseSheet::new());
        assert!(!completeness.is_complete());
        assert_eq!(completeness.missing_count(), 30);
        let first = completeness.missing_fields().iter().next().copied();
        assert_eq!(first, Some(FieldId::weight(AttributeKey::Modularity)));
    }

    #[test]
    fn zero_weight_counts_as_answered() {
        let sheet = uniform_sheet(0, 2, 3);
        assert!(check_completeness(&sheet).is_complete());
        let collected = collect(&sheet).expect("complete sheet");
        assert_eq!(collected.weights.total(), 0);
    }

    #[test]
    fn collect_snapshots_every_attribute() {
        let collected = collect(&uniform_sheet(2, 1, 5)).expect("complete sheet");
        assert_eq!(collected.weights.len(), 10);
        assert_eq!(collected.ratings.len(), 10);
        assert_eq!(
            collected.ratings.get(AttributeKey::Portability),
            Some(&pair(1, 5))
        );
    }
}
