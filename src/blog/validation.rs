//! Field rules every stored post satisfies.
//!
//! Lengths are measured after trimming, in Unicode scalar values.

use super::model::BlogRecord;

pub const MAX_HEADING_CHARS: usize = 200;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Checks a candidate record, reporting every violated rule at once.
pub fn validate(record: &BlogRecord) -> Result<(), Vec<String>> {
    let violations = violations(&record.heading, &record.description);
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}

/// The human-readable rules broken by this heading/description pair, in a
/// stable order. Empty when the pair is valid.
pub fn violations(heading: &str, description: &str) -> Vec<String> {
    let heading_len = heading.trim().chars().count();
    let description_len = description.trim().chars().count();
    let mut errors = Vec::new();

    if heading_len == 0 {
        errors.push("Heading is required".to_owned());
    }
    if description_len == 0 {
        errors.push("Description is required".to_owned());
    }
    // A whitespace-only description reports both "required" and "too short".
    if !description.is_empty() && description_len < MIN_DESCRIPTION_CHARS {
        errors.push(format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters"));
    }
    if heading_len > MAX_HEADING_CHARS {
        errors.push(format!("Heading must be less than {MAX_HEADING_CHARS} characters"));
    }
    if description_len > MAX_DESCRIPTION_CHARS {
        errors.push(format!("Description must be less than {MAX_DESCRIPTION_CHARS} characters"));
    }
    errors
}
