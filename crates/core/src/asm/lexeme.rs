//! Operand token classification.
//!
//! Low-level recognizers for the three kinds of operand token: registers, integer
//! literals and label names. Each returns `None`/`false` rather than a diagnostic; the
//! operand validator decides what message a failed token deserves.

pub use crate::isa::abi::lookup as parse_register;

/// Parses a decimal or `0x` hexadecimal integer with an optional sign.
///
/// # Examples
///
/// ```
/// use mipsim_core::asm::lexeme::parse_integer;
///
/// assert_eq!(parse_integer("-16"), Some(-16));
/// assert_eq!(parse_integer("0x10"), Some(16));
/// assert_eq!(parse_integer("-0X8000"), Some(-32768));
/// assert_eq!(parse_integer("12abc"), None);
/// ```
pub fn parse_integer(token: &str) -> Option<i64> {
    let token = token.trim();
    let (negative, body) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        i128::from_str_radix(hex, 16).ok()?
    } else {
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        body.parse::<i128>().ok()?
    };

    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Returns true if the token looks like it was meant as a number.
pub fn looks_numeric(token: &str) -> bool {
    matches!(
        token.trim().as_bytes().first(),
        Some(b'0'..=b'9' | b'-' | b'+')
    )
}

/// Returns true for a well-formed label: `[a-z_][a-z0-9_.\-]*`.
pub fn is_label(token: &str) -> bool {
    let mut bytes = token.bytes();
    match bytes.next() {
        Some(b'a'..=b'z' | b'_') => {}
        _ => return false,
    }
    bytes.all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-'))
}
