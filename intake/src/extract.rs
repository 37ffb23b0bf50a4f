//! Regex field extraction from free-form candidate text.
//!
//! Three independent patterns (email, phone, years of experience) plus the "tech stack: ..."
//! phrase. First match wins; nothing is validated beyond the pattern itself.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::CandidateField;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+-]+@[\w.-]+\.[a-zA-Z]{2,}").expect("email regex"));
static EMAIL_FULL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w.-]+\.[a-zA-Z]{2,}$").expect("email regex"));
// Optional '+', a digit, at least eight digits/spaces/dashes, a digit.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s\-]{8,}\d").expect("phone regex"));
static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s*\+?\s*(?:years?|yrs?)").expect("experience regex")
});
static TECH_STACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tech stack[:\s-]*(.+)").expect("tech stack regex"));

/// Fields found in one piece of text. Only the three extractable fields can appear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_of_experience: Option<String>,
}

impl ExtractedFields {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.years_of_experience.is_none()
    }

    /// (field, value) pairs in display order.
    pub fn into_pairs(self) -> Vec<(CandidateField, String)> {
        [
            (CandidateField::EmailAddress, self.email),
            (CandidateField::PhoneNumber, self.phone),
            (CandidateField::YearsOfExperience, self.years_of_experience),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Scans `text` for an email address, a phone number and an "N years" phrase.
pub fn extract_fields(text: &str) -> ExtractedFields {
    ExtractedFields {
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().trim().to_string()),
        years_of_experience: EXPERIENCE_RE
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
    }
}

/// Returns everything after "tech stack" (case-insensitive) up to the end of that line.
pub fn detect_tech_stack(text: &str) -> Option<String> {
    TECH_STACK_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Whole-string email format check.
pub fn validate_email(email: &str) -> bool {
    EMAIL_FULL_RE.is_match(email)
}

/// Accepts 10 to 15 digits, ignoring any separators or country-code prefix.
pub fn validate_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_returned_verbatim() {
        let found = extract_fields("Sure, reach me at jane.doe+jobs@mail.example.com thanks");
        assert_eq!(found.email.as_deref(), Some("jane.doe+jobs@mail.example.com"));
    }

    #[test]
    fn first_email_wins() {
        let found = extract_fields("a@one.io or b@two.io");
        assert_eq!(found.email.as_deref(), Some("a@one.io"));
    }

    #[test]
    fn phone_with_country_code_and_dashes() {
        let found = extract_fields("call +1 415-555-0134 anytime");
        assert_eq!(found.phone.as_deref(), Some("+1 415-555-0134"));
    }

    #[test]
    fn plain_ten_digit_phone() {
        let found = extract_fields("my number is 9876543210");
        assert_eq!(found.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn short_numbers_are_not_phones() {
        let found = extract_fields("I have 5 years and 2 kids");
        assert_eq!(found.phone, None);
    }

    #[test]
    fn experience_variants() {
        for (text, want) in [
            ("I have 5 years of experience", "5"),
            ("10+ yrs in backend", "10"),
            ("about 3 YEARS", "3"),
            ("1 yr", "1"),
        ] {
            assert_eq!(
                extract_fields(text).years_of_experience.as_deref(),
                Some(want),
                "text: {}",
                text
            );
        }
    }

    #[test]
    fn unmatched_text_yields_nothing() {
        let found = extract_fields("Hello! I'd like to apply.");
        assert!(found.is_empty());
        assert!(found.into_pairs().is_empty());
    }

    #[test]
    fn pairs_follow_display_order() {
        let found = extract_fields("7 years, 555-123-4567, me@x.dev");
        let fields: Vec<CandidateField> = found.into_pairs().into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                CandidateField::EmailAddress,
                CandidateField::PhoneNumber,
                CandidateField::YearsOfExperience
            ]
        );
    }

    #[test]
    fn tech_stack_phrase() {
        assert_eq!(
            detect_tech_stack("My Tech Stack: Python, Django & React").as_deref(),
            Some("Python, Django & React")
        );
        assert_eq!(
            detect_tech_stack("tech stack - go / k8s").as_deref(),
            Some("go / k8s")
        );
        assert_eq!(detect_tech_stack("I know python"), None);
        assert_eq!(detect_tech_stack("tech stack:   "), None);
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("dev@company.org"));
        assert!(!validate_email("dev@company"));
        assert!(!validate_email("contact dev@company.org"));
    }

    #[test]
    fn phone_validation_counts_digits() {
        assert!(validate_phone("+91 98765-43210"));
        assert!(validate_phone("4155550134"));
        assert!(!validate_phone("555-0134"));
        assert!(!validate_phone("1234567890123456"));
    }
}
