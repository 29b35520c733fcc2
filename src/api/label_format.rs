//! Best-effort numeric label formatting.
//!
//! Invalid input collapses to zero instead of surfacing an error, matching
//! the no-throw contract of the rest of the controller surface.

/// Numeric input accepted by [`format_number`].
///
/// Text input is parsed by numeric prefix, so `"3.1abc"` reads as `3.1`.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for NumericInput {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Renders `value` with en-US thousands grouping and exactly `precision`
/// fraction digits (padded and rounded to that count).
///
/// Non-finite numbers and unparseable text normalize to zero.
#[must_use]
pub fn format_number(value: impl Into<NumericInput>, precision: usize) -> String {
    let value = coerce(value.into());
    group_thousands(&format!("{value:.precision$}"))
}

fn coerce(input: NumericInput) -> f64 {
    let value = match input {
        NumericInput::Number(value) => value,
        NumericInput::Text(text) => parse_numeric_prefix(&text),
    };
    if value.is_finite() { value } else { 0.0 }
}

/// Longest leading numeric prefix: optional sign, digits, fraction, and an
/// exponent only when it is complete. NaN when no digits are present.
fn parse_numeric_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut cursor = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        cursor = 1;
    }
    let integer_digits = digit_run(bytes, cursor);
    cursor += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(cursor) == Some(&b'.') {
        fraction_digits = digit_run(bytes, cursor + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            cursor += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(cursor), Some(b'e' | b'E')) {
        let mut exponent_cursor = cursor + 1;
        if matches!(bytes.get(exponent_cursor), Some(b'+' | b'-')) {
            exponent_cursor += 1;
        }
        let exponent_digits = digit_run(bytes, exponent_cursor);
        if exponent_digits > 0 {
            cursor = exponent_cursor + exponent_digits;
        }
    }

    trimmed[..cursor].parse::<f64>().unwrap_or(f64::NAN)
}

fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map(|rest| rest.iter().take_while(|byte| byte.is_ascii_digit()).count())
        .unwrap_or(0)
}

fn group_thousands(rendered: &str) -> String {
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::parse_numeric_prefix;

    #[test]
    fn prefix_parsing_stops_at_first_invalid_byte() {
        assert_eq!(parse_numeric_prefix("3.1abc"), 3.1);
        assert_eq!(parse_numeric_prefix("  -12.5e2xyz"), -1250.0);
        assert_eq!(parse_numeric_prefix(".5"), 0.5);
        assert_eq!(parse_numeric_prefix("12e"), 12.0);
        assert_eq!(parse_numeric_prefix("12e+"), 12.0);
        assert!(parse_numeric_prefix("abc").is_nan());
        assert!(parse_numeric_prefix("-").is_nan());
        assert!(parse_numeric_prefix("").is_nan());
    }
}
