//! Input sources for questionnaire answers.

use crate::model::{AttributeKey, LikertRating, Question, ResponseSheet};

/// Read access to the current questionnaire selections.
pub trait ResponseSource {
    /// Selected importance weight, if any.
    fn weight(&self, key: AttributeKey) -> Option<u32>;

    /// Selected answer to one of the attribute's questions, if any.
    fn answer(&self, key: AttributeKey, question: Question) -> Option<LikertRating>;
}

impl ResponseSource for ResponseSheet {
    fn weight(&self, key: AttributeKey) -> Option<u32> {
        self.get(key).and_then(|r| r.weight)
    }

    fn answer(&self, key: AttributeKey, question: Question) -> Option<LikertRating> {
        self.get(key).and_then(|r| r.answer(question))
    }
}

impl<T: ResponseSource + ?Sized> ResponseSource for &T {
    fn weight(&self, key: AttributeKey) -> Option<u32> {
        (**self).weight(key)
    }

    fn answer(&self, key: AttributeKey, question: Question) -> Option<LikertRating> {
        (**self).answer(key, question)
    }
}
