//! Placement pass.
//!
//! Walks the tokenized source top to bottom, assigning addresses to instructions, data
//! words and labels. Labels are staged as pending and attach to whichever item (in either
//! region) is placed next. Every line is processed even after errors; nothing here stops
//! early except a full store, which drops the rest of that line with a warning.

use tracing::debug;

use super::labels::LabelTable;
use super::lexeme::{is_label, parse_integer};
use super::operands::validate;
use super::source::SourceLine;
use crate::common::constants::STORE_CAPACITY;
use crate::common::diag::Diagnostics;
use crate::isa::instruction::Instruction;
use crate::isa::opcode::Opcode;
use crate::memory::{DataStore, InstructionStore};

/// Assembler state shared by the placement and resolution passes.
#[derive(Debug, Default)]
pub struct Assembler {
    pub(crate) text: InstructionStore,
    pub(crate) data: DataStore,
    pub(crate) labels: LabelTable,
    pub(crate) log: Diagnostics,
    pending: Vec<(String, usize)>,
}

impl Assembler {
    /// Creates an assembler with empty stores.
    pub const fn new() -> Self {
        Self {
            text: InstructionStore::new(),
            data: DataStore::new(),
            labels: LabelTable::new(),
            log: Diagnostics::new(),
            pending: Vec::new(),
        }
    }

    /// Runs placement over every line, then reports labels left pending.
    pub fn place_all(&mut self, lines: &[SourceLine]) {
        for line in lines {
            self.place(line);
        }
        for (name, line) in std::mem::take(&mut self.pending) {
            self.log.warn(
                line,
                format!("Label: \"{name}\" is not followed by any instruction or data"),
            );
        }
    }

    /// Places a single line.
    pub fn place(&mut self, line: &SourceLine) {
        if let Some(label) = &line.label {
            self.stage_label(label, line.number);
        }
        let Some(keyword) = line.keyword.as_deref() else {
            return;
        };
        if keyword.starts_with('.') {
            self.directive(keyword, &line.operands, line.number);
        } else {
            self.instruction(keyword, &line.operands, line.number);
        }
    }

    /// Label table built so far.
    pub const fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Diagnostics recorded so far.
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.log
    }

    fn stage_label(&mut self, name: &str, line: usize) {
        if !is_label(name) {
            self.log.error(line, format!("Label: \"{name}\" Not Valid!"));
            return;
        }
        if self.labels.contains(name) || self.pending.iter().any(|(n, _)| n == name) {
            self.log
                .error(line, format!("Label: \"{name}\" Already Defined!"));
            return;
        }
        self.pending.push((name.to_string(), line));
    }

    /// Attaches pending labels to `slot`, or drops them with a warning when the
    /// store had no room.
    fn settle_pending(&mut self, slot: Option<u64>) {
        for (name, line) in std::mem::take(&mut self.pending) {
            match slot {
                Some(addr) => {
                    if self.labels.define(&name, addr) {
                        debug!(label = %name, "label defined at {addr:#010x}");
                    }
                }
                None => self.log.warn(
                    line,
                    format!("Label: \"{name}\" dropped, its item did not fit in storage"),
                ),
            }
        }
    }

    fn directive(&mut self, keyword: &str, operands: &str, line: usize) {
        match keyword {
            ".data" | ".text" | ".code" => {}
            ".word" => self.word_directive(operands, line),
            other => {
                self.log
                    .error(line, format!("Directive: \"{other}\" Not Recognised!"));
            }
        }
    }

    fn word_directive(&mut self, operands: &str, line: usize) {
        let Some(values) = self.word_values(operands, line) else {
            let slot = (!self.data.is_full()).then(|| self.data.next_address());
            self.settle_pending(slot);
            return;
        };

        let mut first = true;
        for value in values {
            if let Some(addr) = self.data.push(value) {
                if first {
                    self.settle_pending(Some(addr));
                    first = false;
                }
                debug!(value, "data placed at {addr:#010x}");
            } else {
                self.log.warn(
                    line,
                    format!(
                        "Data: storage full ({STORE_CAPACITY} double words), remaining values dropped"
                    ),
                );
                if first {
                    self.settle_pending(None);
                }
                break;
            }
        }
    }

    /// Parses `.word` operands: `v`, `v1, v2, ...` or `v:count`.
    fn word_values(&mut self, operands: &str, line: usize) -> Option<Vec<i64>> {
        let text = operands.trim();
        if text.is_empty() {
            self.log
                .error(line, "Directive: \".word\" requires at least one value");
            return None;
        }

        if let Some((value, count)) = text.split_once(':') {
            let value = self.word_literal(value.trim(), line);
            let count = match parse_integer(count.trim()) {
                Some(n) if n >= 1 => Some(n),
                _ => {
                    self.log.error(
                        line,
                        format!("Directive: repeat count \"{}\" Not Valid!", count.trim()),
                    );
                    None
                }
            };
            // Anything beyond capacity is dropped anyway.
            let count = count?.min(STORE_CAPACITY as i64 + 1) as usize;
            return Some(vec![value?; count]);
        }

        let parsed: Vec<Option<i64>> = text
            .split(',')
            .map(|token| self.word_literal(token.trim(), line))
            .collect();
        parsed.into_iter().collect()
    }

    fn word_literal(&mut self, token: &str, line: usize) -> Option<i64> {
        let value = parse_integer(token);
        if value.is_none() {
            self.log
                .error(line, format!("Immediate: \"{token}\" Not Recognised!"));
        }
        value
    }

    fn instruction(&mut self, keyword: &str, operands: &str, line: usize) {
        let opcode = match keyword.parse::<Opcode>() {
            Ok(opcode) => opcode,
            Err(e) => {
                self.log.error(line, e.to_string());
                self.settle_at_next_instruction();
                return;
            }
        };

        let Some(bundle) = validate(opcode, operands, line, &mut self.log) else {
            self.settle_at_next_instruction();
            return;
        };

        let inst = Instruction::build(opcode, bundle, line);
        if let Some(addr) = self.text.push(inst) {
            debug!(%opcode, line, "instruction placed at {addr:#010x}");
            self.settle_pending(Some(addr));
        } else {
            self.log.warn(
                line,
                format!(
                    "Instruction: storage full ({STORE_CAPACITY} instructions), \"{keyword}\" dropped"
                ),
            );
            self.settle_pending(None);
        }
    }

    /// A rejected instruction still claims its labels at the address it would have had,
    /// so later references do not cascade into "not found" errors.
    fn settle_at_next_instruction(&mut self) {
        let slot = (!self.text.is_full()).then(|| self.text.next_address());
        self.settle_pending(slot);
    }
}
