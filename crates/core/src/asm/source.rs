//! Source line tokenizer.
//!
//! Splits raw source text into [`SourceLine`]s of the shape
//! `[label:] [directive-or-opcode [operand text]] [comment]`. Comments start at `#` or `;`.
//! Code is lowercased so labels, mnemonics and register names compare case-insensitively.
//! Nothing here validates; the assembler diagnoses whatever the fields contain.

use serde::Serialize;

/// One tokenized source line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SourceLine {
    /// 1-based line number in the source text.
    pub number: usize,
    /// Label defined on this line, without the trailing `:`.
    pub label: Option<String>,
    /// Directive (with its leading `.`) or opcode mnemonic.
    pub keyword: Option<String>,
    /// Remaining operand text, trimmed; empty when absent.
    pub operands: String,
    /// Comment text after the marker, trimmed.
    pub comment: Option<String>,
}

impl SourceLine {
    /// Returns true if the line carries neither a label nor a keyword.
    pub const fn is_blank(&self) -> bool {
        self.label.is_none() && self.keyword.is_none()
    }
}

/// Tokenizes every line of `source`, blank lines included.
pub fn tokenize(source: &str) -> Vec<SourceLine> {
    source
        .lines()
        .enumerate()
        .map(|(idx, raw)| split_line(idx + 1, raw))
        .collect()
}

/// Splits a single raw line.
pub fn split_line(number: usize, raw: &str) -> SourceLine {
    let (code, comment) = match raw.find(['#', ';']) {
        Some(pos) => (&raw[..pos], Some(raw[pos + 1..].trim().to_string())),
        None => (raw, None),
    };
    let code = code.trim().to_ascii_lowercase();

    let (label, rest) = split_label(&code);
    let rest = rest.trim();
    let (keyword, operands) = match rest.split_once(char::is_whitespace) {
        Some((kw, ops)) => (Some(kw.to_string()), ops.trim().to_string()),
        None if rest.is_empty() => (None, String::new()),
        None => (Some(rest.to_string()), String::new()),
    };

    SourceLine {
        number,
        label,
        keyword,
        operands,
        comment,
    }
}

/// Peels a leading `label:` off the code.
///
/// Only a colon preceded by a single directive-free word counts, so the `value:count`
/// form of `.word` is left alone.
fn split_label(code: &str) -> (Option<String>, &str) {
    match code.split_once(':') {
        Some((head, tail))
            if !head.is_empty()
                && !head.starts_with('.')
                && !head.contains(char::is_whitespace) =>
        {
            (Some(head.to_string()), tail)
        }
        _ => (None, code),
    }
}
