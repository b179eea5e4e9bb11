//! Diagnostics log.
//!
//! Errors and warnings are values collected by each component rather than printed or
//! thrown. Every entry is mirrored to `tracing` so a subscriber sees them as they happen.

use std::fmt;

use serde::Serialize;

/// One line-numbered diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line, when the message relates to one.
    pub line: Option<usize>,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "LineNo: {line}\t{}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Error and warning logs. Any error entry means the build or run has failed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates empty logs.
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Records an error.
    pub fn error(&mut self, line: impl Into<Option<usize>>, message: impl Into<String>) {
        let entry = Diagnostic {
            line: line.into(),
            message: message.into(),
        };
        tracing::error!(line = ?entry.line, "{}", entry.message);
        self.errors.push(entry);
    }

    /// Records a warning.
    pub fn warn(&mut self, line: impl Into<Option<usize>>, message: impl Into<String>) {
        let entry = Diagnostic {
            line: line.into(),
            message: message.into(),
        };
        tracing::warn!(line = ?entry.line, "{}", entry.message);
        self.warnings.push(entry);
    }

    /// Returns the error log.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Returns the warning log.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Returns true if any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of recorded warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if neither log has entries.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
