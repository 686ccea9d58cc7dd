//! Number text - conversion between typed-in text and numeric leaves.
//!
//! Parsing follows the browser's `Number(text)` rules so that whatever a user
//! types into a field behaves the same as it always has: surrounding
//! whitespace is ignored, empty text is zero, and `0x`/`0o`/`0b` integers are
//! accepted. Non-finite results are rejected so a stored state is always
//! valid JSON.

use thiserror::Error;

/// Signal that a piece of text is not a number.
///
/// This is the only failure the dual representation can produce. It is not a
/// [`DomainError`](crate::DomainError): callers decide per call site whether to
/// abort (whole-buffer conversion) or ignore it (single-leaf edits).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unparsable numeric input: {input:?}")]
pub struct SkipUpdate {
    /// The text that failed to parse
    pub input: String,
}

/// Parse one leaf of an input buffer.
pub fn parse_leaf(text: &str) -> Result<f64, SkipUpdate> {
    parse_number(text).ok_or_else(|| SkipUpdate {
        input: text.to_string(),
    })
}

/// Parse user text as a finite number, or `None` if it is not one.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_number_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let value = match parse_radix_literal(trimmed) {
        Some(value) => value,
        None if is_decimal_literal(trimmed) => trimmed.parse::<f64>().ok()?,
        None => return None,
    };

    // The browser would accept "Infinity" and "1e400"; a non-finite leaf
    // serializes as JSON `null` and the stored state would no longer load.
    value.is_finite().then_some(value)
}

/// Locale-invariant text for a numeric leaf.
///
/// Uses the shortest digits that parse back to the same value, switching to
/// exponent form outside `[1e-6, 1e21)` the way the browser does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    // Covers -0 as well.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

fn is_number_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `0x1f`, `0o17`, `0b101` - unsigned, no fraction, no exponent.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        Some("0o" | "0O") => (8, &text[2..]),
        Some("0b" | "0B") => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// `[+-] (digits [. digits?] | . digits) [(e|E) [+-] digits]`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let skip_sign = |pos: &mut usize| {
        if matches!(bytes.get(*pos), Some(b'+' | b'-')) {
            *pos += 1;
        }
    };
    let skip_digits = |pos: &mut usize| -> usize {
        let start = *pos;
        while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        }
        *pos - start
    };

    skip_sign(&mut pos);
    let mut mantissa_digits = skip_digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        mantissa_digits += skip_digits(&mut pos);
    }
    if mantissa_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        skip_sign(&mut pos);
        if skip_digits(&mut pos) == 0 {
            return false;
        }
    }

    pos == bytes.len()
}
