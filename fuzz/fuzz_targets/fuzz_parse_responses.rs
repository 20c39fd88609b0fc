#![no_main]
use libfuzzer_sys::fuzz_target;
use qds_tools::config::ScoringConfig;
use qds_tools::model::ResponseSheet;
use qds_tools::pipeline::{evaluate, parse_str, InputFormat, Outcome};

/// Fuzz response sheet parsing and everything downstream of it.
///
/// Any sheet that parses must evaluate without panicking, and a computed
/// score must stay on the 0-10 scale.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(sheet) = parse_str::<ResponseSheet>(s, InputFormat::Unknown) {
            if let Outcome::Evaluated(evaluation) = evaluate(&sheet, &ScoringConfig::default()) {
                let score = evaluation.overall_score();
                assert!((0.0..=10.0).contains(&score));
            }
        }
    }
});
