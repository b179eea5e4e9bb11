//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. All arithmetic
//! wraps on overflow; there are no overflow exceptions.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Xor, Slt, Sle

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (xor, slt, sle).
pub mod logic;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand
    ///
    /// # Returns
    ///
    /// The signed 64-bit result. `Pass` returns `a` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, i64::MAX, 1), i64::MIN);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sle, 10, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Pass, 7, 99), 7);
    /// ```
    pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Xor | AluOp::Slt | AluOp::Sle => logic::execute(op, a, b),
            AluOp::Pass => a,
        }
    }
}
