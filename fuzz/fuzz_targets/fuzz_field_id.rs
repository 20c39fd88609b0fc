#![no_main]
use libfuzzer_sys::fuzz_target;
use qds_tools::model::FieldId;

/// Fuzz field id parsing. Anything that parses must render back to a string
/// that parses to the same id.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(field) = s.parse::<FieldId>() {
            let rendered = field.to_string();
            assert_eq!(rendered.parse::<FieldId>().ok(), Some(field));
        }
    }
});
