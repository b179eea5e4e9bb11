//! ALU arithmetic operations.
//!
//! Addition and subtraction on signed 64-bit values with two's-complement wrapping.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
