//! Heuristic password strength estimation.
//!
//! Produces a deterministic 0-100 score and a three-tier class from lexical
//! features of the password alone: character class mix, middle-of-string
//! bonus characters, consecutive same-class runs, sequential runs against
//! fixed alphabets, and repeated characters. No external state and no I/O;
//! the host widget binds the result to a progress bar.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RockResult;
use crate::text;

/// Alphabets scanned for sequential 3-character runs, forward and reversed.
const LETTER_SEQUENCE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_SEQUENCE: &str = "01234567890";
const SYMBOL_SEQUENCE: &str = "\\!@#$%&/()=?¿";

/// Window length of a sequential run.
const SEQUENCE_WINDOW: usize = 3;

/// Qualitative strength tier, one per score band of 33 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthClass {
    Weak,
    Medium,
    Strong,
}

impl StrengthClass {
    /// Bootstrap progress-bar type the host widget renders this tier with.
    pub fn css_class(self) -> &'static str {
        match self {
            StrengthClass::Weak => "danger",
            StrengthClass::Medium => "warning",
            StrengthClass::Strong => "success",
        }
    }

    fn from_score(score: u8) -> Self {
        match score / 33 {
            0 | 1 => StrengthClass::Weak,
            2 => StrengthClass::Medium,
            _ => StrengthClass::Strong,
        }
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthScore {
    /// Score in 0..=100.
    pub value: u8,
    /// Tier derived from the score.
    pub class: StrengthClass,
}

/// Score a password from its lexical features.
///
/// Pure and deterministic: the same input always yields the same result.
/// An empty password scores 0.
pub fn score_password(password: &str) -> StrengthScore {
    let value = measure_strength(password);
    StrengthScore {
        value,
        class: StrengthClass::from_score(value),
    }
}

/// Score a password and return the result as a JSON string.
/// Convenience function for FFI.
pub fn score_password_json(password: &str) -> RockResult<String> {
    let score = score_password(password);
    Ok(serde_json::to_string(&score)?)
}

fn measure_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let chars: Vec<char> = password.chars().collect();
    let length = chars.len() as i64;

    // Benefits
    let lower = chars.iter().filter(|c| c.is_ascii_lowercase()).count() as i64;
    let upper = chars.iter().filter(|c| c.is_ascii_uppercase()).count() as i64;
    let digits = chars.iter().filter(|c| c.is_ascii_digit()).count() as i64;
    let symbols = chars.iter().filter(|c| is_symbol(**c)).count() as i64;

    // Digits and symbols strictly between the first and last character
    // weigh extra.
    let middle: &[char] = if chars.len() > 2 {
        &chars[1..chars.len() - 1]
    } else {
        &[]
    };
    let middle_digits = middle.iter().filter(|c| c.is_ascii_digit()).count() as i64;
    let middle_symbols = middle.iter().filter(|c| is_symbol(**c)).count() as i64;

    // Met-requirements bonus: class variety plus minimum length, counted
    // only once at least three requirements hold.
    let mut requirements = [lower, upper, digits, symbols]
        .iter()
        .filter(|count| **count > 0)
        .count() as i64;
    if length >= 8 {
        requirements += 1;
    }
    if requirements < 3 {
        requirements = 0;
    }

    // Deductions
    let consec_lower = consecutive_pairs(&chars, |c| c.is_ascii_lowercase());
    let consec_upper = consecutive_pairs(&chars, |c| c.is_ascii_uppercase());
    let consec_digits = consecutive_pairs(&chars, |c| c.is_ascii_digit());

    let only_digits = chars.iter().all(|c| c.is_ascii_digit());
    let only_letters = chars.iter().all(|c| c.is_ascii_alphabetic());

    let lowered = password.to_lowercase();
    let seq_letters = sequence_matches(LETTER_SEQUENCE, &lowered);
    let seq_digits = sequence_matches(DIGIT_SEQUENCE, &lowered);
    let seq_symbols = sequence_matches(SYMBOL_SEQUENCE, &lowered);

    let repeated = repeated_chars(&lowered);

    let mut strength = (length * 4) as f64;
    if upper > 0 {
        strength += ((length - upper) * 2) as f64;
    }
    if lower > 0 {
        strength += ((length - lower) * 2) as f64;
    }
    if upper > 0 || lower > 0 {
        strength += (digits * 4) as f64;
    }
    strength += (symbols * 6) as f64;
    strength += ((middle_digits + middle_symbols) * 2) as f64;
    strength += (requirements * 2) as f64;

    strength -= (consec_lower * 2) as f64;
    strength -= (consec_upper * 2) as f64;
    strength -= (consec_digits * 2) as f64;
    strength -= (seq_digits * 3) as f64;
    strength -= (seq_letters * 3) as f64;
    strength -= (seq_symbols * 3) as f64;

    if only_digits {
        strength -= length as f64;
    }
    if only_letters {
        strength -= length as f64;
    }
    if repeated > 0 {
        strength -= repeated as f64 / length as f64 * 10.0;
    }

    strength.round().clamp(0.0, 100.0) as u8
}

/// The symbol class the scorer counts. Matches the character class the
/// strength meter has always used: most ASCII punctuation, but not `@`,
/// `#`, `"` or `\`.
fn is_symbol(c: char) -> bool {
    matches!(c, '$'..='/' | ':'..='?' | '{'..='~' | '!' | '^' | '_' | '`' | '[' | ']')
}

/// Count adjacent same-class pairs; overlapping pairs all count.
fn consecutive_pairs(chars: &[char], class: impl Fn(&char) -> bool) -> i64 {
    chars
        .windows(2)
        .filter(|pair| class(&pair[0]) && class(&pair[1]))
        .count() as i64
}

/// Count 3-character windows of `alphabet` appearing in `haystack` either
/// forward or reversed. `haystack` is already case-folded.
fn sequence_matches(alphabet: &str, haystack: &str) -> i64 {
    let letters: Vec<char> = alphabet.chars().collect();
    let mut count = 0;
    for window in letters.windows(SEQUENCE_WINDOW) {
        let forward: String = window.iter().collect();
        let back = text::reverse(&forward);
        if haystack.contains(&forward) || haystack.contains(&back) {
            count += 1;
        }
    }
    count
}

/// Total occurrences of every character appearing more than once,
/// case-folded.
fn repeated_chars(lowered: &str) -> i64 {
    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in lowered.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts.values().filter(|n| **n > 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        let score = score_password("");
        assert_eq!(score.value, 0);
        assert_eq!(score.class, StrengthClass::Weak);
    }

    #[test]
    fn test_repeated_single_class_scores_zero() {
        // Length bonus is eaten whole by the consecutive-run, single-class
        // and repetition deductions.
        let score = score_password("aaaaaaaa");
        assert_eq!(score.value, 0);
        assert_eq!(score.class, StrengthClass::Weak);
    }

    #[test]
    fn test_sequential_digits_stay_weak() {
        let score = score_password("12345678");
        assert_eq!(score.value, 4);
        assert_eq!(score.class, StrengthClass::Weak);
    }

    #[test]
    fn test_mixed_classes_score_high() {
        let score = score_password("K9!mQ2@pX");
        assert_eq!(score.value, 92);
        assert!(score.value > score_password("aaaaaaaa").value);
    }

    #[test]
    fn test_common_shape_lands_midway() {
        // One capital, one trailing digit, a long lowercase run.
        let score = score_password("Password1");
        assert_eq!(score.value, 54);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let first = score_password("K9!mQ2@pX");
        let second = score_password("K9!mQ2@pX");
        assert_eq!(first, second);
    }

    #[test]
    fn test_class_buckets() {
        assert_eq!(StrengthClass::from_score(0), StrengthClass::Weak);
        assert_eq!(StrengthClass::from_score(33), StrengthClass::Weak);
        assert_eq!(StrengthClass::from_score(65), StrengthClass::Weak);
        assert_eq!(StrengthClass::from_score(66), StrengthClass::Medium);
        assert_eq!(StrengthClass::from_score(98), StrengthClass::Medium);
        assert_eq!(StrengthClass::from_score(99), StrengthClass::Strong);
        assert_eq!(StrengthClass::from_score(100), StrengthClass::Strong);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(StrengthClass::Weak.css_class(), "danger");
        assert_eq!(StrengthClass::Medium.css_class(), "warning");
        assert_eq!(StrengthClass::Strong.css_class(), "success");
    }

    #[test]
    fn test_symbol_class_excludes_at_sign() {
        assert!(is_symbol('!'));
        assert!(is_symbol('$'));
        assert!(is_symbol('_'));
        assert!(is_symbol('~'));
        assert!(!is_symbol('@'));
        assert!(!is_symbol('#'));
        assert!(!is_symbol('a'));
        assert!(!is_symbol('5'));
    }

    #[test]
    fn test_sequence_detection_counts_reversed_runs() {
        // "cba" is the reverse of the "abc" window.
        assert_eq!(sequence_matches(LETTER_SEQUENCE, "cba"), 1);
        assert_eq!(sequence_matches(LETTER_SEQUENCE, "abcd"), 2);
        assert_eq!(sequence_matches(DIGIT_SEQUENCE, "321"), 1);
        assert_eq!(sequence_matches(LETTER_SEQUENCE, "axbycz"), 0);
    }

    #[test]
    fn test_json_output_shape() {
        let json = score_password_json("12345678").unwrap();
        assert!(json.contains("\"value\":4"));
        assert!(json.contains("\"class\":\"weak\""));
    }
}
