//! Completeness checking and snapshot collection.

use super::source::ResponseSource;
use crate::model::{
    AttributeKey, FieldId, FieldKind, Question, RatingPair, RatingSelection, WeightSelection,
};
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of a completeness check.
///
/// Lists every missing field rather than the first one found, so a caller can
/// flag all of them at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Completeness {
    missing: BTreeSet<FieldId>,
}

impl Completeness {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Missing fields in catalog order.
    #[must_use]
    pub const fn missing_fields(&self) -> &BTreeSet<FieldId> {
        &self.missing
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Attributes with at least one missing field.
    pub fn incomplete_attributes(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        let mut seen = BTreeSet::new();
        self.missing
            .iter()
            .map(|f| f.attribute)
            .filter(move |key| seen.insert(*key))
    }

    #[must_use]
    pub fn into_missing_fields(self) -> BTreeSet<FieldId> {
        self.missing
    }
}

/// Validated snapshot of a complete questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedResponses {
    pub weights: WeightSelection,
    pub ratings: RatingSelection,
}

/// Check every weight and both questions of every catalog attribute.
pub fn check_completeness<S: ResponseSource + ?Sized>(source: &S) -> Completeness {
    let missing = AttributeKey::ALL
        .iter()
        .flat_map(|key| FieldId::all_for(*key))
        .filter(|field| !is_answered(source, *field))
        .collect();
    Completeness { missing }
}

/// The set of unanswered fields; empty when the questionnaire is complete.
pub fn missing_fields<S: ResponseSource + ?Sized>(source: &S) -> BTreeSet<FieldId> {
    check_completeness(source).into_missing_fields()
}

/// Build the weight and rating snapshot, or report what is missing.
///
/// Weights and ratings are validated together: a selected weight whose
/// questions are unanswered is just as incomplete as a missing weight.
pub fn collect<S: ResponseSource + ?Sized>(source: &S) -> Result<CollectedResponses, Completeness> {
    let completeness = check_completeness(source);
    if !completeness.is_complete() {
        tracing::debug!(
            missing = completeness.missing_count(),
            "questionnaire incomplete"
        );
        return Err(completeness);
    }

    let mut weights = WeightSelection::new();
    let mut ratings = RatingSelection::new();
    for key in AttributeKey::ALL {
        let (Some(weight), Some(first), Some(second)) = (
            source.weight(key),
            source.answer(key, Question::First),
            source.answer(key, Question::Second),
        ) else {
            // The source changed between the check and the read.
            return Err(check_completeness(source));
        };
        weights.insert(key, weight);
        ratings.insert(key, RatingPair::new(first, second));
    }

    Ok(CollectedResponses { weights, ratings })
}

// A weight of 0 still counts as a selection.
fn is_answered<S: ResponseSource + ?Sized>(source: &S, field: FieldId) -> bool {
    match field.kind {
        FieldKind::Weight => source.weight(field.attribute).is_some(),
        FieldKind::Question(q) => source.answer(field.attribute, q).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LikertRating, ResponseSheet};

    fn full_sheet(weight: u32, q: u8) -> ResponseSheet {
        let r = LikertRating::new(q).unwrap();
        AttributeKey::ALL
            .iter()
            .fold(ResponseSheet::new(), |sheet, key| sheet.with_attribute(*key, weight, r, r))
    }

    #[test]
    fn test_empty_sheet_reports_every_field() {
        let completeness = check_completeness(&ResponseSheet::new());
        assert!(!completeness.is_complete());
        assert_eq!(completeness.missing_count(), 30);
        assert_eq!(completeness.incomplete_attributes().count(), 10);
    }

    #[test]
    fn test_full_sheet_is_complete() {
        let sheet = full_sheet(3, 4);
        assert!(check_completeness(&sheet).is_complete());
        assert!(missing_fields(&sheet).is_empty());

        let collected = collect(&sheet).unwrap();
        assert_eq!(collected.weights.len(), 10);
        assert_eq!(collected.ratings.len(), 10);
    }

    #[test]
    fn test_single_missing_question_reported_alone() {
        let mut sheet = full_sheet(3, 4);
        let field = FieldId::question(AttributeKey::Security, Question::Second);
        sheet.clear_field(field);

        let missing = missing_fields(&sheet);
        assert_eq!(missing.len(), 1);
        assert!(missing.contains(&field));
        assert!(collect(&sheet).is_err());
    }

    #[test]
    fn test_both_questions_missing_reports_both() {
        let mut sheet = full_sheet(2, 2);
        sheet.clear_field(FieldId::question(AttributeKey::Testability, Question::First));
        sheet.clear_field(FieldId::question(AttributeKey::Testability, Question::Second));

        let names: Vec<String> = missing_fields(&sheet).iter().map(ToString::to_string).collect();
        assert_eq!(names, ["testability_q1", "testability_q2"]);
    }

    #[test]
    fn test_zero_weight_counts_as_answered() {
        let sheet = full_sheet(0, 3);
        assert!(check_completeness(&sheet).is_complete());
    }

    #[test]
    fn test_weight_without_ratings_is_incomplete() {
        let mut sheet = full_sheet(3, 3);
        sheet.clear_field(FieldId::question(AttributeKey::Modularity, Question::First));
        let err = collect(&sheet).unwrap_err();
        assert_eq!(err.missing_count(), 1);
    }
}
