//! Credential format validation.
//!
//! Pure predicates used by every entry point that accepts an email or
//! password. Patterns are anchored so the whole string must match.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+\.[A-Za-z]+@university\.com$").expect("valid email regex"));

static PASSWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z]{4,}\d{3,}$").expect("valid password regex"));

/// True iff the email is `firstname.lastname@university.com` with purely
/// alphabetic name tokens.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True iff the password starts with an uppercase letter, contains at
/// least five letters, and ends with three or more digits.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("john.smith@university.com"));
        assert!(is_valid_email("Jane.Doe@university.com"));

        assert!(!is_valid_email("johnsmith@university.com")); // no dot separator
        assert!(!is_valid_email("john.smith@other.com")); // wrong domain
        assert!(!is_valid_email("John.Smith123@university.com")); // digits in name
        assert!(!is_valid_email("john..smith@university.com")); // extra dot
        assert!(!is_valid_email(" john.smith@university.com")); // leading space
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_validation() {
        assert!(is_valid_password("Abcde123"));
        assert!(is_valid_password("Somelongerpassword9876"));

        assert!(!is_valid_password("abcde123")); // no leading uppercase
        assert!(!is_valid_password("Abc123")); // too few letters
        assert!(!is_valid_password("Abcdefg12")); // too few digits
        assert!(!is_valid_password("Abcde123x")); // trailing non-digit
        assert!(!is_valid_password(""));
    }
}
