use std::borrow::Cow;

use rustrict::CensorStr;
use validator::ValidationError;

use crate::constants::INAPPROPRIATE_LABEL_ERROR;

/// Content filter for labels typed into a family-safe wheel.
#[derive(Debug)]
pub struct ProfanityFilter;

impl ProfanityFilter {
    pub fn contains_profanity(text: &str) -> bool {
        text.is_inappropriate()
    }

    pub fn validate_label(label: &str) -> Result<(), ValidationError> {
        if label.is_inappropriate() {
            let mut err = ValidationError::new("inappropriate_label");
            err.message = Some(Cow::Borrowed(INAPPROPRIATE_LABEL_ERROR));
            return Err(err);
        }
        Ok(())
    }

    pub fn get_censored_text(text: &str) -> String {
        text.censor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everyday_labels_pass() {
        for label in ["Red", "Jump", "Pizza Slice", "Stargazing"] {
            assert!(ProfanityFilter::validate_label(label).is_ok(), "{}", label);
        }
    }

    #[test]
    fn test_profanity_is_rejected() {
        assert!(ProfanityFilter::contains_profanity("fuck"));
        assert_eq!(
            ProfanityFilter::validate_label("fuck").unwrap_err().code,
            "inappropriate_label"
        );
    }
}
