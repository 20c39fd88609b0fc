//! Weighted aggregation of attribute scores into the overall QDS.

use crate::model::{AttributeKey, RatingPair, RatingSelection, WeightSelection};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lower bound of the score scale
pub const MIN_SCORE: f64 = 0.0;
/// Upper bound of the score scale
pub const MAX_SCORE: f64 = 10.0;

/// Allowed drift of the normalized weight sum away from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-5;

/// One attribute's score on the 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeScore {
    pub key: AttributeKey,
    pub score: f64,
}

impl AttributeScore {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.key.label()
    }
}

/// Overall QDS together with the per-attribute scores it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct AggregateResult {
    /// Weighted average, clamped to [0, 10]
    pub overall_score: f64,
    /// Per-attribute scores in catalog order
    pub attribute_scores: Vec<AttributeScore>,
}

impl AggregateResult {
    /// Position of the score on a 0–100% gradient.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.overall_score / MAX_SCORE * 100.0
    }

    /// Score as shown to users, with two decimals.
    #[must_use]
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.overall_score)
    }

    #[must_use]
    pub fn score_for(&self, key: AttributeKey) -> Option<f64> {
        self.attribute_scores
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.score)
    }
}

/// Map a pair of Likert answers onto 0–10: 1 → 0, 3 → 5, 5 → 10.
#[must_use]
pub fn attribute_score(pair: &RatingPair) -> f64 {
    (pair.average() - 1.0) * 2.5
}

/// Divide every weight by the total.
///
/// Returns `None` when the total is zero. The resulting weights sum to 1.0
/// within floating-point tolerance.
#[must_use]
pub fn normalize_weights(weights: &WeightSelection) -> Option<IndexMap<AttributeKey, f64>> {
    let total = weights.total();
    if total == 0 {
        return None;
    }

    let total = total as f64;
    let normalized: IndexMap<AttributeKey, f64> = weights
        .iter()
        .map(|(key, w)| (key, f64::from(w) / total))
        .collect();

    let sum: f64 = normalized.values().sum();
    let drift = (sum - 1.0).abs();
    if drift >= WEIGHT_SUM_TOLERANCE {
        tracing::warn!(sum, "normalized weights drifted away from 1.0");
    }
    debug_assert!(drift < WEIGHT_SUM_TOLERANCE, "normalized weights sum to {sum}");

    Some(normalized)
}

/// Combine per-attribute scores into the overall QDS.
///
/// Returns `None` when the total weight is zero, independent of the ratings.
/// Attributes without a rating pair contribute no score, but their weight
/// still counts toward the total.
pub fn compute_scores(
    weights: &WeightSelection,
    ratings: &RatingSelection,
) -> Option<AggregateResult> {
    let normalized = normalize_weights(weights)?;

    let mut overall = 0.0;
    let mut attribute_scores = Vec::with_capacity(AttributeKey::ALL.len());
    for key in AttributeKey::ALL {
        let Some(pair) = ratings.get(key) else {
            continue;
        };
        let score = attribute_score(pair);
        let weight = normalized.get(&key).copied().unwrap_or(0.0);
        overall += weight * score;
        attribute_scores.push(AttributeScore { key, score });
    }

    let overall_score = overall.clamp(MIN_SCORE, MAX_SCORE);
    tracing::debug!(overall_score, attributes = attribute_scores.len(), "computed QDS");

    Some(AggregateResult {
        overall_score,
        attribute_scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LikertRating;

    fn pair(a: u8, b: u8) -> RatingPair {
        RatingPair::new(LikertRating::new(a).unwrap(), LikertRating::new(b).unwrap())
    }

    #[test]
    fn test_attribute_score_anchors() {
        assert!((attribute_score(&pair(1, 1)) - 0.0).abs() < 1e-12);
        assert!((attribute_score(&pair(3, 3)) - 5.0).abs() < 1e-12);
        assert!((attribute_score(&pair(5, 5)) - 10.0).abs() < 1e-12);
        assert!((attribute_score(&pair(2, 3)) - 3.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_weight_has_no_result() {
        let weights = WeightSelection::uniform(0);
        let ratings = RatingSelection::uniform(pair(5, 5));
        assert!(compute_scores(&weights, &ratings).is_none());
        assert!(compute_scores(&WeightSelection::new(), &ratings).is_none());
    }

    #[test]
    fn test_normalized_weights_sum_to_one() {
        let mut weights = WeightSelection::new();
        weights.insert(AttributeKey::Security, 5);
        weights.insert(AttributeKey::Usability, 1);
        weights.insert(AttributeKey::Portability, 3);
        let normalized = normalize_weights(&weights).unwrap();
        let sum: f64 = normalized.values().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!((normalized[&AttributeKey::Security] - 5.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_average() {
        let mut weights = WeightSelection::uniform(0);
        weights.insert(AttributeKey::Security, 3);
        weights.insert(AttributeKey::Reliability, 1);

        let mut ratings = RatingSelection::uniform(pair(3, 3));
        ratings.insert(AttributeKey::Security, pair(5, 5));
        ratings.insert(AttributeKey::Reliability, pair(1, 1));

        let result = compute_scores(&weights, &ratings).unwrap();
        // 0.75 * 10 + 0.25 * 0
        assert!((result.overall_score - 7.5).abs() < 1e-9);
        assert_eq!(result.display_score(), "7.50");
        assert!((result.percentage() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_follow_catalog_order() {
        let result = compute_scores(
            &WeightSelection::uniform(2),
            &RatingSelection::uniform(pair(4, 2)),
        )
        .unwrap();
        let keys: Vec<AttributeKey> = result.attribute_scores.iter().map(|s| s.key).collect();
        assert_eq!(keys, AttributeKey::ALL);
    }

    #[test]
    fn test_unrated_attribute_is_skipped() {
        let mut ratings = RatingSelection::new();
        ratings.insert(AttributeKey::Security, pair(5, 5));
        let result = compute_scores(&WeightSelection::uniform(1), &ratings).unwrap();
        assert_eq!(result.attribute_scores.len(), 1);
        assert!((result.overall_score - 1.0).abs() < 1e-9);
        assert_eq!(result.score_for(AttributeKey::Security), Some(10.0));
        assert_eq!(result.score_for(AttributeKey::Usability), None);
    }
}
