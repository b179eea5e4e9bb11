use crate::common::harness::{assemble_err, assemble_ok, errors};
use mipsim_core::isa::Immediate;
use mipsim_core::isa::disasm::disassemble;
use pretty_assertions::assert_eq;

fn immediate_at(source: &str, index: usize) -> Immediate {
    let program = assemble_ok(source);
    program.text.get(index).unwrap().operands.immediate().unwrap().clone()
}

#[test]
fn forward_branch_offset_is_relative_to_next_instruction() {
    let imm = immediate_at("beq r1, r2, skip\nnop\nskip: exit", 0);
    assert_eq!(imm, Immediate::Literal(1));
}

#[test]
fn backward_branch_offset_is_negative() {
    let imm = immediate_at("loop: nop\nnop\nbne r1, r0, loop\nexit", 2);
    assert_eq!(imm, Immediate::Literal(-3));
}

#[test]
fn jump_and_memory_labels_become_word_addresses() {
    assert_eq!(
        immediate_at("j end\nend: exit", 0),
        Immediate::Literal(0x0040_0004 >> 2)
    );
    assert_eq!(
        immediate_at(".word 1\nv: .word 2\nlw r1, v\nexit", 0),
        Immediate::Literal(0x1001_0008 >> 2)
    );
}

#[test]
fn every_reference_is_resolved_after_success() {
    let program = assemble_ok("a: j b\nb: beq r0, r0, a\nexit");
    assert!(program.text.iter().all(|inst| inst.unresolved_label().is_none()));
    assert!(program.text.iter().all(|inst| inst.is_ready()));
}

#[test]
fn missing_label_is_an_error() {
    let log = assemble_err("j nowhere");
    assert_eq!(errors(&log), vec!["LineNo: 1\tLabel: \"nowhere\" Not Found!"]);
}

#[test]
fn memory_reference_to_text_label_is_rejected() {
    let log = assemble_err("main: lw r1, main\nexit");
    assert_eq!(log.error_count(), 1);
    assert!(errors(&log)[0].starts_with("LineNo: 1\tLabel: \"main\" data address"));
}

#[test]
fn jump_to_data_label_is_rejected() {
    let log = assemble_err("y: .word 1\nj y");
    assert!(errors(&log)[0].starts_with("LineNo: 2\tLabel: \"y\" instruction address"));
}

#[test]
fn resolved_program_disassembles() {
    let program = assemble_ok(
        "
                .data
                .word 50
        y:      .word 268500992
                .text
        main:   lw r8, y
                lw r16, 0(r8)
                addi r10, r8, 16
                sw r20, 0(r10)
                jal main
                exit
        ",
    );
    let listing: Vec<String> = program.text.iter().map(disassemble).collect();
    assert_eq!(
        listing,
        vec![
            "lw r8, 0x10010008",
            "lw r16, 0(r8)",
            "addi r10, r8, 16",
            "sw r20, 0(r10)",
            "jal 0x00400000",
            "exit",
        ]
    );
}
