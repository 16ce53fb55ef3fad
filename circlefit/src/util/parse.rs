//! Lenient parsing of numbers typed by people, accepting both `.` and `,` as decimal separator.

use regex::Regex;
use std::sync::LazyLock;

static CURRENCY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[€£¥$][a-z%]*\s*").expect("valid regex"));
static PERCENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%$").expect("valid regex"));
static UNIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]+$").expect("valid regex"));
static MISTYPED_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?;:+@]").expect("valid regex"));
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9,.\-]").expect("valid regex"));

const INCOMPLETE_NUMBERS: [&str; 4] = ["", ".", "-", "-."];

/// Parses a number from free-form input such as `"12,5"`, `"€75,5"` or `"3.14cm"`.
///
/// Currency prefixes, percent signs and unit suffixes are stripped,
/// common mistypes of the decimal separator (`? ; : + @`) are read as a dot and slashes are dropped.
/// When both `.` and `,` occur, the last one is the decimal separator and all others are removed.
/// Returns `None` if no single number remains.
pub fn parse_number(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let stripped = CURRENCY_PREFIX.replace(input, "");
    let stripped = PERCENT_SUFFIX.replace(&stripped, "");
    let stripped = UNIT_SUFFIX.replace(&stripped, "");

    let cleaned = MISTYPED_SEPARATORS.replace_all(stripped.trim(), ".");
    let cleaned = cleaned.replace('/', "");
    let cleaned = NON_NUMERIC.replace_all(&cleaned, "").into_owned();

    let cleaned = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(last_dot), Some(last_comma)) => {
            //mixed separators, only the last one survives
            let last_sep = if last_dot > last_comma { '.' } else { ',' };
            let mut parts = cleaned.split(['.', ',']).collect::<Vec<_>>();
            let last_part = parts.pop().unwrap_or_default();
            format!("{}{last_sep}{last_part}", parts.concat())
        }
        _ => cleaned,
    };

    let normalized = cleaned.replace(',', ".");
    if normalized.matches('.').count() > 1 || INCOMPLETE_NUMBERS.contains(&normalized.as_str()) {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// Whether `c` may be typed into a strict number field
pub fn is_allowed_char(c: char, allow_negative: bool) -> bool {
    c.is_ascii_digit() || c == '.' || c == ',' || (allow_negative && c == '-')
}

/// Outcome of [`validate_number_input`]
#[derive(Clone, Debug, PartialEq)]
pub struct NumberInput {
    pub valid: bool,
    /// The input with all disallowed characters removed
    pub cleaned: String,
    pub value: Option<f64>,
}

/// Strict validation of a number field: any disallowed character makes the input invalid.
/// Incomplete input (empty, `"."`, `"-"`) is valid but carries no value.
pub fn validate_number_input(input: &str, allow_negative: bool) -> NumberInput {
    if input.trim().is_empty() {
        return NumberInput {
            valid: true,
            cleaned: String::new(),
            value: None,
        };
    }

    let cleaned: String = input
        .chars()
        .filter(|c| is_allowed_char(*c, allow_negative))
        .collect();
    let invalid = |cleaned: String| NumberInput {
        valid: false,
        cleaned,
        value: None,
    };

    if cleaned != input {
        return invalid(cleaned);
    }
    if INCOMPLETE_NUMBERS.contains(&cleaned.as_str()) {
        return NumberInput {
            valid: true,
            cleaned,
            value: None,
        };
    }

    let normalized = cleaned.replace(',', ".");
    if normalized.matches('.').count() > 1 {
        return invalid(cleaned);
    }
    if let Some(magnitude) = normalized.strip_prefix('-') {
        if !allow_negative || magnitude.is_empty() || magnitude == "." || magnitude == "-" {
            return invalid(cleaned);
        }
    }

    match normalized.parse::<f64>() {
        Ok(value) => NumberInput {
            valid: true,
            cleaned,
            value: Some(value),
        },
        Err(_) => invalid(cleaned),
    }
}
