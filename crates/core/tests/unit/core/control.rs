use mipsim_core::core::pipeline::control::control_for;
use mipsim_core::core::pipeline::signals::{
    AluOp, BranchCond, DestSel, MemOp, NextPcSel, Src1Sel, Src2Sel, WbSel,
};
use mipsim_core::isa::Opcode;
use rstest::rstest;

#[rstest]
#[case(Opcode::Add, DestSel::Dest, Src2Sel::Source2, AluOp::Add)]
#[case(Opcode::Sub, DestSel::Dest, Src2Sel::Source2, AluOp::Sub)]
#[case(Opcode::Addi, DestSel::Target, Src2Sel::Immediate, AluOp::Add)]
#[case(Opcode::Lw, DestSel::Target, Src2Sel::Immediate, AluOp::Add)]
#[case(Opcode::Sw, DestSel::None, Src2Sel::Immediate, AluOp::Add)]
#[case(Opcode::Jal, DestSel::Link, Src2Sel::Immediate, AluOp::Pass)]
#[case(Opcode::Nop, DestSel::None, Src2Sel::Source2, AluOp::Pass)]
fn datapath_rows(
    #[case] op: Opcode,
    #[case] dest: DestSel,
    #[case] src2: Src2Sel,
    #[case] alu: AluOp,
) {
    let row = control_for(op);
    assert_eq!(row.dest, dest);
    assert_eq!(row.src2, src2);
    assert_eq!(row.alu, alu);
}

#[rstest]
#[case(Opcode::Beq, AluOp::Sub, BranchCond::Zero)]
#[case(Opcode::Bne, AluOp::Sub, BranchCond::NonZero)]
#[case(Opcode::Blt, AluOp::Slt, BranchCond::NonZero)]
#[case(Opcode::Bge, AluOp::Slt, BranchCond::Zero)]
#[case(Opcode::Bgt, AluOp::Sle, BranchCond::Zero)]
#[case(Opcode::Ble, AluOp::Sle, BranchCond::NonZero)]
fn branch_rows(#[case] op: Opcode, #[case] alu: AluOp, #[case] cond: BranchCond) {
    let row = control_for(op);
    assert_eq!(row.alu, alu);
    assert_eq!(row.cond, cond);
    assert_eq!(row.next_pc, NextPcSel::Branch);
    assert_eq!(row.dest, DestSel::None);
    assert_eq!(row.mem, MemOp::None);
}

#[test]
fn only_lw_writes_back_from_memory() {
    for op in Opcode::ALL {
        let expected = if op == Opcode::Lw { WbSel::Mem } else { WbSel::Alu };
        assert_eq!(control_for(op).wb, expected, "{op}");
    }
}

#[test]
fn only_jal_reads_the_sequential_address() {
    for op in Opcode::ALL {
        let expected = if op == Opcode::Jal { Src1Sel::Npc } else { Src1Sel::Source1 };
        assert_eq!(control_for(op).src1, expected, "{op}");
    }
}

#[test]
fn jumps_select_the_jump_target() {
    assert_eq!(control_for(Opcode::J).next_pc, NextPcSel::Jump);
    assert_eq!(control_for(Opcode::Jal).next_pc, NextPcSel::Jump);
    assert_eq!(control_for(Opcode::Exit).next_pc, NextPcSel::Sequential);
}
