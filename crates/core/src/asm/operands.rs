//! Operand Validator.
//!
//! Validates the raw operand text of one instruction against the grammar of its opcode's
//! format and produces an [`OperandBundle`]. Every token is checked even after an earlier
//! one failed, so a line reports all of its problems at once; the aggregate
//! `Operands: ... Not Valid` diagnostic always comes last.
//!
//! Bare literal addresses (`lw r1, 0x4004000`, `j 0x100000`) are checked against the
//! region's supported range here, through the same [`Region::check`] that resolution
//! applies to label addresses.

use super::lexeme::{is_label, looks_numeric, parse_integer, parse_register};
use crate::common::addr::{Region, imm_to_addr};
use crate::common::constants::{IMM16_MAX, IMM16_MIN, IMM26_MAX, ZERO_REGISTER};
use crate::common::diag::Diagnostics;
use crate::isa::instruction::{ImmMode, Immediate, OperandBundle, Operands};
use crate::isa::opcode::{FormatClass, Opcode, OperandFormat};

/// Validates the operand text of `opcode`.
///
/// # Arguments
///
/// * `opcode` - The already recognised opcode.
/// * `text` - Raw operand text (everything after the mnemonic).
/// * `line` - Source line used for diagnostics.
/// * `log` - Receives one diagnostic per failed token, then the aggregate error.
///
/// # Returns
///
/// The validated bundle, or `None` if any error was recorded for this line.
pub fn validate(
    opcode: Opcode,
    text: &str,
    line: usize,
    log: &mut Diagnostics,
) -> Option<OperandBundle> {
    let tokens = split_operands(text);
    let mut checker = TokenChecker { log, line };

    let operands = match opcode.format() {
        OperandFormat::None => checker.no_operands(&tokens),
        OperandFormat::Register => checker.register_format(&tokens),
        OperandFormat::ImmediateArith => checker.immediate_arith(&tokens),
        OperandFormat::Memory => {
            checker.memory_format(&tokens, opcode.class() == FormatClass::ImmediateWrite)
        }
        OperandFormat::Branch => checker.branch_format(&tokens),
        OperandFormat::Jump => checker.jump_format(&tokens),
    };

    if let Some(operands) = operands {
        Some(OperandBundle {
            class: opcode.class(),
            operands,
        })
    } else {
        log.error(
            line,
            format!("Operands: \"{}\" Not Valid For \"{opcode}\"!", text.trim()),
        );
        None
    }
}

/// Splits operand text on commas; blank text yields no tokens.
fn split_operands(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        Vec::new()
    } else {
        text.split(',').map(str::trim).collect()
    }
}

/// Per-line token checker. Each method records its own diagnostic on failure.
struct TokenChecker<'a> {
    log: &'a mut Diagnostics,
    line: usize,
}

impl TokenChecker<'_> {
    fn fail(&mut self, message: String) {
        self.log.error(self.line, message);
    }

    fn arity(&mut self, tokens: &[&str], expected: usize) -> bool {
        if tokens.len() == expected {
            true
        } else {
            self.fail(format!(
                "Operands: expected {expected}, found {}",
                tokens.len()
            ));
            false
        }
    }

    fn read_register(&mut self, token: &str) -> Option<usize> {
        let reg = parse_register(token);
        if reg.is_none() {
            self.fail(format!("Register: \"{token}\" Not Recognised!"));
        }
        reg
    }

    fn write_register(&mut self, token: &str) -> Option<usize> {
        let reg = self.read_register(token)?;
        if reg == ZERO_REGISTER {
            self.log.warn(
                self.line,
                format!("Register: \"{token}\" is hardwired to zero, writes will be discarded"),
            );
        }
        Some(reg)
    }

    fn signed16(&mut self, token: &str) -> Option<i64> {
        match parse_integer(token) {
            None => {
                self.fail(format!("Immediate: \"{token}\" Not Recognised!"));
                None
            }
            Some(v) if !(IMM16_MIN..=IMM16_MAX).contains(&v) => {
                self.fail(format!(
                    "Immediate: \"{token}\" Out Of Range [{IMM16_MIN}, {IMM16_MAX}]!"
                ));
                None
            }
            Some(v) => Some(v),
        }
    }

    /// A literal word immediate whose byte address must be supported in `region`.
    fn word_address(&mut self, token: &str, region: Region, max: i64) -> Option<i64> {
        let Some(imm) = parse_integer(token) else {
            self.fail(format!("Immediate: \"{token}\" Not Recognised!"));
            return None;
        };
        if !(0..=max).contains(&imm) {
            self.fail(format!("Immediate: \"{token}\" Out Of Range [0, {max}]!"));
            return None;
        }
        match region.check(imm_to_addr(imm) as u64) {
            Ok(_) => Some(imm),
            Err(e) => {
                self.fail(format!("Address: \"{token}\" {e}"));
                None
            }
        }
    }

    fn label(&mut self, token: &str) -> Option<String> {
        let lower = token.to_ascii_lowercase();
        if is_label(&lower) {
            Some(lower)
        } else {
            self.fail(format!("Label: \"{token}\" Not Recognised!"));
            None
        }
    }

    fn no_operands(&mut self, tokens: &[&str]) -> Option<Operands> {
        self.arity(tokens, 0).then_some(Operands::None)
    }

    fn register_format(&mut self, tokens: &[&str]) -> Option<Operands> {
        if !self.arity(tokens, 3) {
            return None;
        }
        let rd = self.write_register(tokens[0]);
        let rs = self.read_register(tokens[1]);
        let rt = self.read_register(tokens[2]);
        Some(Operands::Register {
            rs: rs?,
            rt: rt?,
            rd: rd?,
        })
    }

    fn immediate_arith(&mut self, tokens: &[&str]) -> Option<Operands> {
        if !self.arity(tokens, 3) {
            return None;
        }
        let rt = self.write_register(tokens[0]);
        let rs = self.read_register(tokens[1]);
        let imm = self.signed16(tokens[2]);
        Some(Operands::Immediate {
            rs: rs?,
            rt: rt?,
            imm: Immediate::Literal(imm?),
            mode: ImmMode::Plain,
        })
    }

    fn memory_format(&mut self, tokens: &[&str], writes_rt: bool) -> Option<Operands> {
        if !self.arity(tokens, 2) {
            return None;
        }
        let rt = if writes_rt {
            self.write_register(tokens[0])
        } else {
            self.read_register(tokens[0])
        };
        let address = self.memory_address(tokens[1]);
        let (rs, imm, mode) = address?;
        Some(Operands::Immediate {
            rs,
            rt: rt?,
            imm,
            mode,
        })
    }

    /// `offset(base)` with either part optional, or a bare label / word immediate.
    fn memory_address(&mut self, token: &str) -> Option<(usize, Immediate, ImmMode)> {
        if let Some(open) = token.find('(') {
            let Some(inner) = token[open + 1..].strip_suffix(')') else {
                self.fail(format!("Memory Operand: \"{token}\" Not Recognised!"));
                return None;
            };
            let offset_text = token[..open].trim();
            let base_text = inner.trim();
            let offset = if offset_text.is_empty() {
                Some(0)
            } else {
                self.signed16(offset_text)
            };
            let base = if base_text.is_empty() {
                Some(ZERO_REGISTER)
            } else {
                self.read_register(base_text)
            };
            Some((base?, Immediate::Literal(offset?), ImmMode::Plain))
        } else if looks_numeric(token) {
            let imm = self.word_address(token, Region::DATA, i64::MAX >> 2)?;
            Some((ZERO_REGISTER, Immediate::Literal(imm), ImmMode::WordAddress))
        } else {
            let label = self.label(token)?;
            Some((
                ZERO_REGISTER,
                Immediate::Unresolved(label),
                ImmMode::WordAddress,
            ))
        }
    }

    fn branch_format(&mut self, tokens: &[&str]) -> Option<Operands> {
        if !self.arity(tokens, 3) {
            return None;
        }
        let rs = self.read_register(tokens[0]);
        let rt = self.read_register(tokens[1]);
        let imm = if looks_numeric(tokens[2]) {
            self.signed16(tokens[2]).map(Immediate::Literal)
        } else {
            self.label(tokens[2]).map(Immediate::Unresolved)
        };
        Some(Operands::Immediate {
            rs: rs?,
            rt: rt?,
            imm: imm?,
            mode: ImmMode::Plain,
        })
    }

    fn jump_format(&mut self, tokens: &[&str]) -> Option<Operands> {
        if !self.arity(tokens, 1) {
            return None;
        }
        let target = if looks_numeric(tokens[0]) {
            self.word_address(tokens[0], Region::TEXT, IMM26_MAX)
                .map(Immediate::Literal)
        } else {
            self.label(tokens[0]).map(Immediate::Unresolved)
        };
        Some(Operands::Jump { target: target? })
    }
}
