//! TEAM_422: Unsigned string-to-integer conversion with C `strtoul` radix rules.
//!
//! Firmware tables and debugger input hand the kernel numbers in whatever
//! base the vendor felt like, so the parser infers the radix from the
//! classic prefixes when asked (`radix == 0`): `0x`/`0X` selects 16, a
//! leading `0` selects 8, anything else selects 10. Parsing stops at the
//! first non-digit and the unconsumed tail is returned alongside the value.
//!
//! Unlike libc `strtoul` there is no whitespace skipping and no sign
//! handling; callers here always hold a trimmed, unsigned field.

use lum_error::define_status;

define_status! {
    /// Parse failures for [`parse_u64`].
    pub enum ParseError {
        /// Input does not start with a digit valid in the chosen radix.
        NoDigits = (0x0001, "PARSE_NO_DIGITS", "No digits at start of input"),
        /// Accumulated value exceeds 64 bits.
        Overflow = (0x0002, "PARSE_OVERFLOW", "Value does not fit in 64 bits"),
        /// Radix outside 2..=36 (and not the auto-detect 0).
        BadRadix = (0x0003, "PARSE_BAD_RADIX", "Radix outside 2..=36"),
    }
}

/// Strip a `0x`/`0X` prefix, but only when a hex digit follows.
///
/// `"0x"` with no digit after it must parse as the octal/decimal zero `"0"`
/// followed by the tail `"x"`, which is what `strtoul` does.
fn strip_hex_prefix(src: &str) -> Option<&str> {
    let rest = src
        .strip_prefix("0x")
        .or_else(|| src.strip_prefix("0X"))?;
    rest.chars().next()?.is_ascii_hexdigit().then_some(rest)
}

/// Parse an unsigned 64-bit integer from the front of `src`.
///
/// `radix` is 2..=36, or 0 to infer it from the prefix. With an explicit
/// radix of 16 an optional `0x` prefix is accepted. Returns the value and
/// the unconsumed remainder of `src`.
pub fn parse_u64(src: &str, radix: u32) -> Result<(u64, &str), ParseError> {
    let (radix, digits) = match radix {
        0 => {
            if let Some(rest) = strip_hex_prefix(src) {
                (16, rest)
            } else if src.starts_with('0') {
                (8, src)
            } else {
                (10, src)
            }
        }
        16 => (16, strip_hex_prefix(src).unwrap_or(src)),
        2..=36 => (radix, src),
        _ => return Err(ParseError::BadRadix),
    };

    let mut value: u64 = 0;
    let mut consumed = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or(ParseError::Overflow)?;
        consumed += c.len_utf8();
    }

    if consumed == 0 {
        return Err(ParseError::NoDigits);
    }
    Ok((value, &digits[consumed..]))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_u64("1234", 10), Ok((1234, "")));
        assert_eq!(parse_u64("42abc", 10), Ok((42, "abc")));
    }

    #[test]
    fn test_auto_radix_prefixes() {
        assert_eq!(parse_u64("0x1f", 0), Ok((0x1f, "")));
        assert_eq!(parse_u64("0X1F", 0), Ok((0x1f, "")));
        assert_eq!(parse_u64("0755", 0), Ok((0o755, "")));
        assert_eq!(parse_u64("755", 0), Ok((755, "")));
        assert_eq!(parse_u64("0", 0), Ok((0, "")));
    }

    #[test]
    fn test_bare_0x_is_zero_then_tail() {
        // strtoul reads "0" and leaves "x" unconsumed
        assert_eq!(parse_u64("0x", 0), Ok((0, "x")));
        assert_eq!(parse_u64("0xg", 16), Ok((0, "xg")));
    }

    #[test]
    fn test_explicit_hex_optional_prefix() {
        assert_eq!(parse_u64("ff", 16), Ok((0xff, "")));
        assert_eq!(parse_u64("0xff", 16), Ok((0xff, "")));
    }

    #[test]
    fn test_stops_at_radix_boundary() {
        // '8' is not an octal digit
        assert_eq!(parse_u64("078", 0), Ok((7, "8")));
        assert_eq!(parse_u64("1012", 2), Ok((0b101, "2")));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_u64("", 10), Err(ParseError::NoDigits));
        assert_eq!(parse_u64("zzz", 10), Err(ParseError::NoDigits));
        // sign handling is deliberately absent
        assert_eq!(parse_u64("-5", 10), Err(ParseError::NoDigits));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(parse_u64("18446744073709551615", 10), Ok((u64::MAX, "")));
        assert_eq!(
            parse_u64("18446744073709551616", 10),
            Err(ParseError::Overflow)
        );
        assert_eq!(
            parse_u64("0xffffffffffffffff0", 0),
            Err(ParseError::Overflow)
        );
    }

    #[test]
    fn test_bad_radix() {
        assert_eq!(parse_u64("10", 1), Err(ParseError::BadRadix));
        assert_eq!(parse_u64("10", 37), Err(ParseError::BadRadix));
    }

    #[test]
    fn test_letter_digits_case_insensitive() {
        assert_eq!(parse_u64("Zz", 36), Ok((35 * 36 + 35, "")));
    }
}
