//! Rejection reason validation.
//!
//! Every review screen in the old system re-implemented this check with
//! slightly different thresholds; it lives in exactly one place now.

use thiserror::Error;

/// Minimum length (in characters, after trimming) for a rejection reason.
pub const MIN_REJECTION_REASON_CHARS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "rejection reason must be at least {MIN_REJECTION_REASON_CHARS} characters after trimming"
    )]
    ReasonTooShort,
}

/// Validate a rejection reason, returning the trimmed reason on success.
///
/// Pure; the same threshold applies to all three item kinds.
pub fn validate_rejection_reason(reason: &str) -> Result<String, ValidationError> {
    let trimmed = reason.trim();
    if trimmed.chars().count() < MIN_REJECTION_REASON_CHARS {
        return Err(ValidationError::ReasonTooShort);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_reason_at_the_threshold() {
        assert_eq!(
            validate_rejection_reason("0123456789"),
            Ok("0123456789".to_string())
        );
    }

    #[test]
    fn trims_before_measuring() {
        // 9 characters once the padding is gone
        assert_eq!(
            validate_rejection_reason("   too short   "),
            Err(ValidationError::ReasonTooShort)
        );
        // 10 characters plus padding passes, stored trimmed
        assert_eq!(
            validate_rejection_reason("  not enough  "),
            Ok("not enough".to_string())
        );
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert_eq!(
            validate_rejection_reason(""),
            Err(ValidationError::ReasonTooShort)
        );
        assert_eq!(
            validate_rejection_reason("     \t  "),
            Err(ValidationError::ReasonTooShort)
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 10 Hangul characters are more than 10 bytes but exactly 10 chars
        assert!(validate_rejection_reason("증빙서류가 누락되었음").is_ok());
    }
}
