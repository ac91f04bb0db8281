//! Integer coercion for raw form input.
//!
//! Form fields never reject input. Text that does not parse becomes the
//! field's fallback value, and so does a parsed zero: an input showing `0`
//! and an empty input are treated alike.

use serde::{Deserialize, Serialize};

/// How raw widget text is turned into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Read a leading integer and ignore whatever follows (`"12abc"` is 12).
    #[default]
    Prefix,
    /// The whole trimmed text must be an integer (`"12abc"` is rejected).
    Strict,
}

impl ParsePolicy {
    /// Parse `raw` under this policy. `None` means "not a number".
    pub fn parse(self, raw: &str) -> Option<i64> {
        match self {
            Self::Prefix => parse_prefix_int(raw),
            Self::Strict => parse_strict_int(raw),
        }
    }

    /// Parse `raw`, substituting `fallback` for unparsable text or zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetz_domain::common::ParsePolicy;
    ///
    /// assert_eq!(ParsePolicy::Prefix.int_or("14", 10), 14);
    /// assert_eq!(ParsePolicy::Prefix.int_or("", 10), 10);
    /// assert_eq!(ParsePolicy::Prefix.int_or("0", 10), 10);
    /// assert_eq!(ParsePolicy::Strict.int_or("12abc", 2), 2);
    /// ```
    pub fn int_or(self, raw: &str, fallback: i64) -> i64 {
        match self.parse(raw) {
            Some(0) | None => fallback,
            Some(value) => value,
        }
    }
}

/// Reads an optional sign followed by decimal digits, after leading whitespace.
///
/// Trailing characters are ignored, so `"7 gp"` parses as 7 and `"1.9"` as 1.
/// Values beyond the `i64` range saturate.
pub fn parse_prefix_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, digits) = split_sign(text);
    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }
    Some(accumulate(&digits[..digit_count], negative))
}

/// Accepts only an optional sign and decimal digits, surrounding whitespace aside.
pub fn parse_strict_int(raw: &str) -> Option<i64> {
    let (negative, digits) = split_sign(raw.trim());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(accumulate(digits, negative))
}

/// Narrow a parsed value into `i32`, saturating at the bounds.
pub fn saturate_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Narrow a parsed value into `u32`; negatives become 0.
pub fn saturate_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn accumulate(digits: &str, negative: bool) -> i64 {
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod prefix {
        use super::*;

        #[test]
        fn reads_plain_integers() {
            assert_eq!(parse_prefix_int("15"), Some(15));
            assert_eq!(parse_prefix_int("  15"), Some(15));
            assert_eq!(parse_prefix_int("-3"), Some(-3));
            assert_eq!(parse_prefix_int("+4"), Some(4));
        }

        #[test]
        fn ignores_trailing_text() {
            assert_eq!(parse_prefix_int("12abc"), Some(12));
            assert_eq!(parse_prefix_int("1.9"), Some(1));
            assert_eq!(parse_prefix_int("7 gp"), Some(7));
        }

        #[test]
        fn rejects_text_without_leading_digits() {
            assert_eq!(parse_prefix_int(""), None);
            assert_eq!(parse_prefix_int("abc"), None);
            assert_eq!(parse_prefix_int("-"), None);
            assert_eq!(parse_prefix_int(".5"), None);
        }

        #[test]
        fn saturates_huge_values() {
            assert_eq!(parse_prefix_int("99999999999999999999999"), Some(i64::MAX));
        }
    }

    mod strict {
        use super::*;

        #[test]
        fn accepts_whole_integers_only() {
            assert_eq!(parse_strict_int(" 42 "), Some(42));
            assert_eq!(parse_strict_int("-8"), Some(-8));
            assert_eq!(parse_strict_int("12abc"), None);
            assert_eq!(parse_strict_int("1.5"), None);
            assert_eq!(parse_strict_int(""), None);
            assert_eq!(parse_strict_int("+"), None);
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn zero_and_garbage_take_the_fallback() {
            assert_eq!(ParsePolicy::Prefix.int_or("0", 2), 2);
            assert_eq!(ParsePolicy::Prefix.int_or("x", 2), 2);
            assert_eq!(ParsePolicy::Strict.int_or("", 1), 1);
            assert_eq!(ParsePolicy::Strict.int_or("3", 1), 3);
        }

        #[test]
        fn negative_values_are_kept() {
            assert_eq!(ParsePolicy::Prefix.int_or("-2", 10), -2);
        }
    }

    #[test]
    fn saturating_narrowing() {
        assert_eq!(saturate_i32(i64::MAX), i32::MAX);
        assert_eq!(saturate_i32(-5), -5);
        assert_eq!(saturate_u32(-5), 0);
        assert_eq!(saturate_u32(12), 12);
    }
}
