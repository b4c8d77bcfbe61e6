use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::*;
use crate::segment::Segment;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Trims an entered option and collapses inner whitespace runs.
pub fn normalize_label(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw.trim(), " ").into_owned()
}

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(error("empty_label", EMPTY_LABEL_ERROR));
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(error("label_too_long", LABEL_TOO_LONG_ERROR));
    }
    Ok(())
}

/// Rejects a label that already exists on the wheel, ignoring case.
/// `skip_id` excludes the segment being renamed.
pub fn validate_unique(label: &str, segments: &[Segment], skip_id: Option<&str>) -> Result<(), ValidationError> {
    let wanted = label.to_lowercase();
    let taken = segments
        .iter()
        .filter(|s| Some(s.id.as_str()) != skip_id)
        .any(|s| s.label.to_lowercase() == wanted);
    if taken {
        return Err(error("duplicate_label", DUPLICATE_LABEL_ERROR));
    }
    Ok(())
}

pub fn validate_capacity(current: usize) -> Result<(), ValidationError> {
    if current >= MAX_OPTIONS {
        return Err(error("too_many_options", TOO_MANY_OPTIONS_ERROR));
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(error("invalid_weight", INVALID_WEIGHT_ERROR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Pizza \t  Night \n"), "Pizza Night");
    }

    #[test]
    fn test_validate_label() {
        assert!(validate_label("Tacos").is_ok());
        assert_eq!(validate_label("   ").unwrap_err().code, "empty_label");
        let long = "x".repeat(MAX_LABEL_LENGTH + 1);
        assert_eq!(validate_label(&long).unwrap_err().code, "label_too_long");
    }

    #[test]
    fn test_validate_unique_ignores_case_and_skipped_id() {
        let segments = vec![Segment::new("tacos-0", "Tacos", "#fff")];
        assert!(validate_unique("TACOS", &segments, None).is_err());
        assert!(validate_unique("tacos", &segments, Some("tacos-0")).is_ok());
        assert!(validate_unique("Sushi", &segments, None).is_ok());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(1.0).is_ok());
        assert!(validate_weight(10.0).is_ok());
        assert!(validate_weight(0.5).is_err());
        assert!(validate_weight(f64::NAN).is_err());
    }
}
