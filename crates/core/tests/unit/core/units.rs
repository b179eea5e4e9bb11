use mipsim_core::core::pipeline::signals::{AluOp, BranchCond, NextPcSel};
use mipsim_core::core::units::alu::Alu;
use mipsim_core::core::units::bru::BranchUnit;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 5, -7, -2)]
#[case(AluOp::Sub, 5, 7, -2)]
#[case(AluOp::Sub, i64::MIN, 1, i64::MAX)]
#[case(AluOp::Xor, 0b1100, 0b1010, 0b0110)]
#[case(AluOp::Slt, 41, 42, 1)]
#[case(AluOp::Slt, 42, 42, 0)]
#[case(AluOp::Sle, 42, 42, 1)]
#[case(AluOp::Sle, 43, 42, 0)]
#[case(AluOp::Pass, 0x0040_0004, 123, 0x0040_0004)]
fn alu_cases(#[case] op: AluOp, #[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

proptest! {
    #[test]
    fn sub_is_zero_only_for_equal_operands(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Alu::execute(AluOp::Sub, a, b) == 0, a == b);
    }

    #[test]
    fn slt_matches_signed_compare(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Alu::execute(AluOp::Slt, a, b), i64::from(a < b));
        prop_assert_eq!(Alu::execute(AluOp::Sle, a, b), i64::from(a <= b));
    }
}

#[test]
fn branch_target_is_relative_to_npc() {
    assert_eq!(BranchUnit::target(NextPcSel::Branch, 0x0040_000c, -3), Some(0x0040_0000));
    assert_eq!(BranchUnit::target(NextPcSel::Branch, 0x0040_0004, 1), Some(0x0040_0008));
}

#[test]
fn jump_target_is_absolute_word_address() {
    assert_eq!(BranchUnit::target(NextPcSel::Jump, 0x0040_0004, 0x0010_0005), Some(0x0040_0014));
    assert_eq!(BranchUnit::target(NextPcSel::Sequential, 0x0040_0004, 9), None);
}

#[test]
fn next_pc_selection() {
    let npc = 0x0040_0008;
    let t = Some(0x0040_0100);
    assert_eq!(BranchUnit::next_pc(NextPcSel::Sequential, npc, None, false), npc);
    assert_eq!(BranchUnit::next_pc(NextPcSel::Jump, npc, t, false), 0x0040_0100);
    assert_eq!(BranchUnit::next_pc(NextPcSel::Branch, npc, t, true), 0x0040_0100);
    assert_eq!(BranchUnit::next_pc(NextPcSel::Branch, npc, t, false), npc);
    assert!(!BranchUnit::taken(BranchCond::Zero, 1));
}
