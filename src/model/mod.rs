//! Core data model for the questionnaire.
//!
//! The attribute catalog is fixed at compile time. Response types separate the
//! raw, possibly incomplete form state ([`ResponseSheet`]) from the validated
//! selections handed to the scoring engine ([`WeightSelection`],
//! [`RatingSelection`]).

mod attribute;
mod responses;

pub use attribute::*;
pub use responses::*;
