//! Input validation for names, subjects, ratings and argument lines.
//!
//! A token is a non-empty string made only of ASCII letters and digits. Student names
//! and subjects are both tokens. Ratings must match one of the nine labels exactly,
//! case included.

use crate::error::{GradebookError, Result};
use crate::model::Rating;
use std::str::FromStr;

/// Returns true if `s` is non-empty and contains only `[0-9A-Za-z]`.
///
/// # Examples
/// ```
/// use gradebook::validation::is_valid_token;
///
/// assert!(is_valid_token("Alice"));
/// assert!(is_valid_token("Math101"));
///
/// assert!(!is_valid_token(""));
/// assert!(!is_valid_token("Ann Lee"));
/// assert!(!is_valid_token("O'Neil"));
/// assert!(!is_valid_token("Zoë"));
/// ```
pub fn is_valid_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Like [`is_valid_token`], but reports which field was rejected.
pub fn validate_token(field: &'static str, value: &str) -> Result<()> {
    if is_valid_token(value) {
        Ok(())
    } else {
        Err(GradebookError::InvalidToken {
            field,
            value: value.to_string(),
        })
    }
}

pub fn parse_rating(s: &str) -> Result<Rating> {
    Rating::ALL
        .into_iter()
        .find(|r| r.label() == s)
        .ok_or_else(|| GradebookError::UnknownRating(s.to_string()))
}

impl FromStr for Rating {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rating(s)
    }
}

/// Splits a line on single spaces and checks the field count.
///
/// Consecutive spaces produce empty fields, so `"Alice  Math"` has three fields.
pub fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != expected {
        return Err(GradebookError::WrongArgumentCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_digits() {
        assert!(is_valid_token("Alice"));
        assert!(is_valid_token("bob"));
        assert!(is_valid_token("2024"));
        assert!(is_valid_token("Math2"));
    }

    #[test]
    fn rejects_empty_whitespace_and_symbols() {
        assert!(!is_valid_token(""));
        assert!(!is_valid_token(" "));
        assert!(!is_valid_token("Ann Lee"));
        assert!(!is_valid_token("Alice\t"));
        assert!(!is_valid_token("foo-bar"));
        assert!(!is_valid_token("foo_bar"));
        assert!(!is_valid_token("a.b"));
        assert!(!is_valid_token("김철수"));
    }

    #[test]
    fn validate_token_reports_field() {
        let err = validate_token("name", "A B").unwrap_err();
        assert!(matches!(
            err,
            GradebookError::InvalidToken { field: "name", ref value } if value == "A B"
        ));
        assert!(validate_token("subject", "Math").is_ok());
    }

    #[test]
    fn parses_every_label() {
        for rating in Rating::ALL {
            assert_eq!(parse_rating(rating.label()).unwrap(), rating);
        }
        assert_eq!("B+".parse::<Rating>().unwrap(), Rating::BPlus);
    }

    #[test]
    fn rejects_unknown_ratings() {
        for bad in ["A++", "a", "", "b+", "E", " A", "A "] {
            assert!(
                matches!(parse_rating(bad), Err(GradebookError::UnknownRating(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn split_fields_requires_exact_count() {
        assert_eq!(
            split_fields("Alice Math A", 3).unwrap(),
            vec!["Alice", "Math", "A"]
        );
        assert_eq!(split_fields("Alice Math", 2).unwrap(), vec!["Alice", "Math"]);

        assert!(matches!(
            split_fields("Alice Math", 3),
            Err(GradebookError::WrongArgumentCount {
                expected: 3,
                actual: 2
            })
        ));
        assert!(matches!(
            split_fields("Alice  Math", 2),
            Err(GradebookError::WrongArgumentCount {
                expected: 2,
                actual: 3
            })
        ));
        assert!(matches!(
            split_fields("", 2),
            Err(GradebookError::WrongArgumentCount {
                expected: 2,
                actual: 1
            })
        ));
    }
}
