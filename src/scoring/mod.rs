//! Quality Design Score engine.
//!
//! Turns validated selections into the overall QDS and picks the insights to
//! present alongside it. Everything here is a pure function of its inputs.
//!
//! # Usage
//!
//! ```
//! use qds_tools::model::{LikertRating, RatingPair, RatingSelection, WeightSelection};
//! use qds_tools::scoring::{compute_scores, select_insights, SuggestionPolicy};
//!
//! let top = RatingPair::new(LikertRating::MAX, LikertRating::MAX);
//! let weights = WeightSelection::uniform(3);
//! let ratings = RatingSelection::uniform(top);
//!
//! let result = compute_scores(&weights, &ratings).expect("weights are positive");
//! assert_eq!(result.display_score(), "10.00");
//!
//! let insights = select_insights(&result.attribute_scores, &ratings, SuggestionPolicy::default());
//! assert!(insights.guidance.suggestions().is_empty());
//! ```

mod aggregator;
mod insights;

pub use aggregator::{
    attribute_score, compute_scores, normalize_weights, AggregateResult, AttributeScore,
    MAX_SCORE, MIN_SCORE,
};
pub use insights::{
    select_insights, Guidance, Insights, Standing, Suggestion, SuggestionPolicy,
    ALL_HIGHEST_TEXT, ALL_LOWEST_TEXT, SCORE_EPSILON, TIED_STRONGEST_TEXT, TIED_WEAKEST_TEXT,
};
