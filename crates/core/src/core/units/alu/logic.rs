//! ALU logical and comparison operations.
//!
//! Comparisons are signed and always produce 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The result, or `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::Xor => a ^ b,
        AluOp::Slt => (a < b) as i64,
        AluOp::Sle => (a <= b) as i64,
        _ => 0,
    }
}
