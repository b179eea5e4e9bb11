//! Two-pass assembler.
//!
//! Turns source text into a [`Program`]:
//! 1. **Tokenizing:** [`source`] splits lines into label, keyword, operands and comment.
//! 2. **Placement:** [`placement`] assigns addresses and validates operands.
//! 3. **Resolution:** [`resolve`] replaces label references with immediates.
//!
//! Assembly only succeeds when neither pass recorded an error. On success every
//! instruction is marked assembled and the remaining warnings travel with the program.

/// Label name to address mapping.
pub mod labels;

/// Token recognizers for registers, integers and labels.
pub mod lexeme;

/// Per-format operand validation.
pub mod operands;

/// First pass: address assignment.
pub mod placement;

/// Second pass: label resolution.
pub mod resolve;

/// Source line tokenizer.
pub mod source;

use serde::Serialize;
use tracing::info;

pub use labels::LabelTable;
pub use operands::validate;
pub use placement::Assembler;
pub use source::{SourceLine, tokenize};

use crate::common::diag::Diagnostics;
use crate::common::error::BuildError;
use crate::memory::{DataStore, InstructionStore};

/// A successfully assembled program, ready for the interpreter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    /// Placed, resolved and assembled instructions.
    pub text: InstructionStore,
    /// Initial data region contents.
    pub data: DataStore,
    /// Every defined label.
    pub labels: LabelTable,
    /// Warnings from both passes; never contains errors.
    pub diagnostics: Diagnostics,
}

/// Assembles tokenized source lines.
///
/// # Errors
///
/// Returns [`BuildError`] carrying every diagnostic if either pass recorded an error.
pub fn assemble(lines: &[SourceLine]) -> Result<Program, BuildError> {
    let mut asm = Assembler::new();
    asm.place_all(lines);
    resolve::resolve(&mut asm.text, &asm.labels, &mut asm.log);

    if asm.log.has_errors() {
        return Err(BuildError {
            diagnostics: asm.log,
        });
    }

    for inst in asm.text.iter_mut() {
        inst.mark_assembled();
    }
    info!(
        instructions = asm.text.len(),
        data = asm.data.placed(),
        labels = asm.labels.len(),
        warnings = asm.log.warning_count(),
        "assembly succeeded"
    );

    Ok(Program {
        text: asm.text,
        data: asm.data,
        labels: asm.labels,
        diagnostics: asm.log,
    })
}

/// Tokenizes and assembles raw source text.
///
/// # Errors
///
/// See [`assemble`].
pub fn assemble_source(source: &str) -> Result<Program, BuildError> {
    assemble(&tokenize(source))
}
