//! Register naming conventions.
//!
//! Registers may be written as a bare index (`8`), an R-style name (`r8`) or a conventional
//! alias (`t0`). An optional `$` sigil is accepted in front of any form.

/// Conventional aliases for `r0`-`r31`.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Register `r30` is also known as `s8`.
const S8_ALIAS: (&str, usize) = ("s8", 30);

/// Resolves a register token to its index.
///
/// Matching is case-insensitive.
///
/// # Returns
///
/// The index 0-31, or `None` if the token names no register.
pub fn lookup(token: &str) -> Option<usize> {
    let lower = token.trim().to_ascii_lowercase();
    let name = lower.strip_prefix('$').unwrap_or(&lower);
    if name.is_empty() {
        return None;
    }

    if let Some(idx) = parse_index(name) {
        return Some(idx);
    }
    if let Some(idx) = name.strip_prefix('r').and_then(parse_index) {
        return Some(idx);
    }
    if name == S8_ALIAS.0 {
        return Some(S8_ALIAS.1);
    }
    REG_NAMES.iter().position(|&alias| alias == name)
}

/// Parses a plain decimal register index in `0..32`.
fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&idx| idx < REG_NAMES.len())
}

/// Returns the conventional alias of a register index.
pub fn alias(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r??")
}
