//! Answer comparison strategies shared by activities and assessments.

use std::fmt;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Absolute tolerance applied to numeric answers.
pub const NUMERIC_TOLERANCE: f64 = 0.001;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    #[error("invalid regular expression {pattern:?}: {message}")]
    Invalid { pattern: String, message: String },

    #[error("unsupported regular expression flag {flag:?} in {pattern:?}")]
    UnsupportedFlag { pattern: String, flag: char },
}

/// Compiled regular expression target.
///
/// Accepts either a bare pattern (`^42$`) or the literal form with trailing
/// flags (`/^42$/i`). Matching follows `RegExp.test`: the pattern is searched
/// for, anchoring is up to the pattern itself.
#[derive(Clone)]
pub struct AnswerPattern {
    source: String,
    regex: Regex,
}

impl AnswerPattern {
    /// # Errors
    ///
    /// Returns `PatternError` if the pattern does not compile or carries a
    /// flag other than `i`, `m`, `s` (`g` is accepted and ignored).
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let (body, flags) = split_literal(source);
        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'g' => {}
                other => {
                    return Err(PatternError::UnsupportedFlag {
                        pattern: source.to_string(),
                        flag: other,
                    });
                }
            }
        }
        let regex = builder.build().map_err(|err| PatternError::Invalid {
            pattern: source.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Trims the input and tests it against the pattern.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input.trim())
    }
}

impl fmt::Debug for AnswerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnswerPattern({})", self.source)
    }
}

impl PartialEq for AnswerPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

fn split_literal(source: &str) -> (&str, &str) {
    let Some(rest) = source.strip_prefix('/') else {
        return (source, "");
    };
    match rest.rfind('/') {
        Some(end) if rest[end + 1..].chars().all(|ch| ch.is_ascii_alphabetic()) => {
            (&rest[..end], &rest[end + 1..])
        }
        _ => (source, ""),
    }
}

/// True when a selection was made and it is the correct one.
#[must_use]
pub fn matches_choice(selected: Option<usize>, correct_index: usize) -> bool {
    selected == Some(correct_index)
}

/// Trimmed, case-insensitive equality.
#[must_use]
pub fn matches_text(input: &str, target: &str) -> bool {
    input.trim().to_lowercase() == target.to_lowercase()
}

/// True when the input parses to a number within `NUMERIC_TOLERANCE` of the
/// target. Unparseable input is simply incorrect.
#[must_use]
pub fn matches_numeric(input: &str, target: f64) -> bool {
    parse_leading_float(input)
        .is_some_and(|value| target - NUMERIC_TOLERANCE <= value && value <= target + NUMERIC_TOLERANCE)
}

/// Parses the longest numeric prefix of `input`, the way a browser's
/// `parseFloat` does: `"3.14abc"` is `3.14`, `"abc"` is nothing.
#[must_use]
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
