//! Default values for qds-tools configuration.

/// Score at or above which a result is celebrated
pub const DEFAULT_CELEBRATION_THRESHOLD: f64 = 7.0;
