//! Questionnaire response types.
//!
//! A [`ResponseSheet`] is the raw form state: any field may still be empty.
//! [`WeightSelection`] and [`RatingSelection`] are the validated snapshots the
//! scoring engine consumes, rebuilt from the sheet on every computation.

use super::attribute::AttributeKey;
use crate::error::{QdsError, ResponseErrorKind, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Likert ratings
// ============================================================================

/// An answer on the 1–5 agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct LikertRating(u8);

impl LikertRating {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Create a rating, rejecting values outside 1..=5.
    pub fn new(value: u8) -> Result<Self> {
        Self::try_from(i64::from(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for LikertRating {
    type Error = QdsError;

    fn try_from(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v @ 1..=5) => Ok(Self(v)),
            _ => Err(QdsError::rating_out_of_range(value)),
        }
    }
}

impl From<LikertRating> for u8 {
    fn from(rating: LikertRating) -> Self {
        rating.0
    }
}

impl fmt::Display for LikertRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Both answers for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPair {
    pub first: LikertRating,
    pub second: LikertRating,
}

impl RatingPair {
    #[must_use]
    pub const fn new(first: LikertRating, second: LikertRating) -> Self {
        Self { first, second }
    }

    /// Mean of the two answers, in [1, 5]
    #[must_use]
    pub fn average(&self) -> f64 {
        (f64::from(self.first.value()) + f64::from(self.second.value())) / 2.0
    }

    pub fn ratings(&self) -> impl Iterator<Item = LikertRating> {
        [self.first, self.second].into_iter()
    }
}

// ============================================================================
// Field identifiers
// ============================================================================

/// One of the two rating questions asked per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Question {
    First,
    Second,
}

impl Question {
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// Which input of an attribute a field refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Weight,
    Question(Question),
}

/// A single input field of the questionnaire.
///
/// Rendered as `<key>_weight`, `<key>_q1` or `<key>_q2`. Ordering is catalog
/// order first, then weight, q1, q2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId {
    pub attribute: AttributeKey,
    pub kind: FieldKind,
}

impl FieldId {
    /// Fields per attribute: one weight and two questions
    pub const PER_ATTRIBUTE: usize = 3;

    #[must_use]
    pub const fn weight(attribute: AttributeKey) -> Self {
        Self {
            attribute,
            kind: FieldKind::Weight,
        }
    }

    #[must_use]
    pub const fn question(attribute: AttributeKey, question: Question) -> Self {
        Self {
            attribute,
            kind: FieldKind::Question(question),
        }
    }

    /// Every field of an attribute, in form order.
    pub fn all_for(attribute: AttributeKey) -> [Self; Self::PER_ATTRIBUTE] {
        [
            Self::weight(attribute),
            Self::question(attribute, Question::First),
            Self::question(attribute, Question::Second),
        ]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldKind::Weight => write!(f, "{}_weight", self.attribute),
            FieldKind::Question(q) => write!(f, "{}_q{}", self.attribute, q.number()),
        }
    }
}

impl FromStr for FieldId {
    type Err = QdsError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || {
            QdsError::response(
                format!("parsing field id '{s}'"),
                ResponseErrorKind::UnknownField {
                    field: s.to_string(),
                },
            )
        };
        let (key, suffix) = s.trim().rsplit_once('_').ok_or_else(unknown)?;
        let attribute: AttributeKey = key.parse()?;
        let kind = match suffix {
            "weight" => FieldKind::Weight,
            "q1" => FieldKind::Question(Question::First),
            "q2" => FieldKind::Question(Question::Second),
            _ => return Err(unknown()),
        };
        Ok(Self { attribute, kind })
    }
}

impl Serialize for FieldId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Raw form state
// ============================================================================

/// The current selections for one attribute. Empty fields are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeResponse {
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub q1: Option<LikertRating>,
    #[serde(default)]
    pub q2: Option<LikertRating>,
}

impl AttributeResponse {
    #[must_use]
    pub const fn answer(&self, question: Question) -> Option<LikertRating> {
        match question {
            Question::First => self.q1,
            Question::Second => self.q2,
        }
    }

    fn answer_mut(&mut self, question: Question) -> &mut Option<LikertRating> {
        match question {
            Question::First => &mut self.q1,
            Question::Second => &mut self.q2,
        }
    }
}

/// Snapshot of every questionnaire field, keyed by attribute.
///
/// This is the on-disk response sheet format:
///
/// ```yaml
/// security:
///   weight: 5
///   q1: 2
///   q2: 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSheet {
    entries: IndexMap<AttributeKey, AttributeResponse>,
}

impl ResponseSheet {
    /// An empty sheet: nothing selected yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sheet listing every catalog attribute with all fields empty.
    #[must_use]
    pub fn template() -> Self {
        Self {
            entries: AttributeKey::ALL
                .iter()
                .map(|key| (*key, AttributeResponse::default()))
                .collect(),
        }
    }

    /// Builder-style helper filling all three fields of one attribute.
    #[must_use]
    pub fn with_attribute(
        mut self,
        key: AttributeKey,
        weight: u32,
        q1: LikertRating,
        q2: LikertRating,
    ) -> Self {
        self.entries.insert(
            key,
            AttributeResponse {
                weight: Some(weight),
                q1: Some(q1),
                q2: Some(q2),
            },
        );
        self
    }

    /// Parse a sheet from JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a sheet from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeResponse> {
        self.entries.get(&key)
    }

    pub fn set_weight(&mut self, key: AttributeKey, weight: Option<u32>) {
        self.entries.entry(key).or_default().weight = weight;
    }

    pub fn set_answer(&mut self, key: AttributeKey, question: Question, answer: Option<LikertRating>) {
        *self.entries.entry(key).or_default().answer_mut(question) = answer;
    }

    /// Set a field from a raw numeric value, validating ratings.
    pub fn set_field(&mut self, field: FieldId, value: i64) -> Result<()> {
        match field.kind {
            FieldKind::Weight => {
                let weight = u32::try_from(value).map_err(|_| {
                    QdsError::validation(format!("{field}: weight must be non-negative, got {value}"))
                })?;
                self.set_weight(field.attribute, Some(weight));
            }
            FieldKind::Question(q) => {
                let rating = LikertRating::try_from(value)?;
                self.set_answer(field.attribute, q, Some(rating));
            }
        }
        Ok(())
    }

    /// Deselect a field.
    pub fn clear_field(&mut self, field: FieldId) {
        match field.kind {
            FieldKind::Weight => self.set_weight(field.attribute, None),
            FieldKind::Question(q) => self.set_answer(field.attribute, q, None),
        }
    }
}

// ============================================================================
// Validated selections
// ============================================================================

/// Selected importance weight per attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightSelection(IndexMap<AttributeKey, u32>);

impl WeightSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same weight for every catalog attribute.
    #[must_use]
    pub fn uniform(weight: u32) -> Self {
        AttributeKey::ALL.iter().map(|key| (*key, weight)).collect()
    }

    pub fn insert(&mut self, key: AttributeKey, weight: u32) {
        self.0.insert(key, weight);
    }

    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<u32> {
        self.0.get(&key).copied()
    }

    /// Sum of all selected weights, widened so it cannot overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().map(|w| u64::from(*w)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, u32)> + '_ {
        self.0.iter().map(|(k, w)| (*k, *w))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AttributeKey, u32)> for WeightSelection {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Both Likert answers per attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingSelection(IndexMap<AttributeKey, RatingPair>);

impl RatingSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same pair for every catalog attribute.
    #[must_use]
    pub fn uniform(pair: RatingPair) -> Self {
        AttributeKey::ALL.iter().map(|key| (*key, pair)).collect()
    }

    pub fn insert(&mut self, key: AttributeKey, pair: RatingPair) {
        self.0.insert(key, pair);
    }

    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&RatingPair> {
        self.0.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &RatingPair)> + '_ {
        self.0.iter().map(|(k, p)| (*k, p))
    }

    /// Every individual answer collected, two per attribute.
    pub fn all_ratings(&self) -> impl Iterator<Item = LikertRating> + '_ {
        self.0.values().flat_map(RatingPair::ratings)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AttributeKey, RatingPair)> for RatingSelection {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, RatingPair)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
