use mipsim_core::asm::validate;
use mipsim_core::common::diag::Diagnostics;
use mipsim_core::isa::{FormatClass, ImmMode, Immediate, Opcode, OperandBundle, Operands};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn check(opcode: Opcode, text: &str) -> (Option<OperandBundle>, Diagnostics) {
    let mut log = Diagnostics::new();
    let bundle = validate(opcode, text, 1, &mut log);
    (bundle, log)
}

#[rstest]
#[case::register_names(Opcode::Add, "r1, r2, r3", true)]
#[case::register_aliases(Opcode::Sub, "$t0, $s1, $zero", true)]
#[case::bare_indices(Opcode::Add, "1, 2, 31", true)]
#[case::register_too_large(Opcode::Add, "r1, r2, r32", false)]
#[case::too_few(Opcode::Add, "r1, r2", false)]
#[case::imm_max(Opcode::Addi, "r1, r2, 32767", true)]
#[case::imm_min(Opcode::Addi, "r1, r2, -32768", true)]
#[case::imm_hex(Opcode::Addi, "r1, r2, 0x7fff", true)]
#[case::imm_overflow(Opcode::Addi, "r1, r2, 32768", false)]
#[case::imm_garbage(Opcode::Addi, "r1, r2, 12abc", false)]
#[case::offset_base(Opcode::Lw, "r1, 8(r2)", true)]
#[case::no_offset(Opcode::Lw, "r1, (r2)", true)]
#[case::no_base(Opcode::Lw, "r1, 4()", true)]
#[case::data_label(Opcode::Lw, "r1, y", true)]
#[case::data_word_literal(Opcode::Lw, "r1, 0x4004000", true)]
#[case::data_word_unsupported(Opcode::Lw, "r1, 0x4004200", false)]
#[case::store_offset_overflow(Opcode::Sw, "r1, 70000(r2)", false)]
#[case::unclosed_paren(Opcode::Sw, "r1, 4(r2", false)]
#[case::branch_label(Opcode::Beq, "r1, r2, loop", true)]
#[case::branch_literal(Opcode::Bne, "r1, r2, -4", true)]
#[case::branch_bad_label(Opcode::Blt, "r1, r2, 9lives", false)]
#[case::jump_literal(Opcode::J, "0x100000", true)]
#[case::jump_beyond_26_bits(Opcode::J, "67108864", false)]
#[case::jump_below_text(Opcode::Jal, "0", false)]
#[case::jump_label(Opcode::Jal, "func", true)]
#[case::exit_bare(Opcode::Exit, "", true)]
#[case::exit_with_operand(Opcode::Exit, "r1", false)]
fn validation_table(#[case] opcode: Opcode, #[case] text: &str, #[case] ok: bool) {
    let (bundle, log) = check(opcode, text);
    assert_eq!(bundle.is_some(), ok, "{opcode} {text}: {:?}", log.errors());
    assert_eq!(log.has_errors(), !ok);
}

#[test]
fn every_bad_token_is_reported_before_the_aggregate() {
    let (bundle, log) = check(Opcode::Add, "r99, rx, r1");
    assert!(bundle.is_none());
    let messages: Vec<&str> = log.errors().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Register: \"r99\" Not Recognised!",
            "Register: \"rx\" Not Recognised!",
            "Operands: \"r99, rx, r1\" Not Valid For \"add\"!",
        ]
    );
}

#[test]
fn arity_mismatch_names_both_counts() {
    let (_, log) = check(Opcode::Beq, "r1, r2");
    assert_eq!(log.errors()[0].message, "Operands: expected 3, found 2");
    assert_eq!(log.error_count(), 2);
}

#[test]
fn writing_r0_is_accepted_with_a_warning() {
    let (bundle, log) = check(Opcode::Add, "r0, r1, r2");
    assert!(bundle.is_some());
    assert!(!log.has_errors());
    assert_eq!(log.warning_count(), 1);
}

#[test]
fn reading_r0_is_silent() {
    let (_, log) = check(Opcode::Sw, "r0, 0(r0)");
    assert!(log.is_empty());
}

#[test]
fn memory_label_is_a_word_address_on_r0() {
    let (bundle, _) = check(Opcode::Lw, "r8, Y");
    assert_eq!(
        bundle,
        Some(OperandBundle {
            class: FormatClass::ImmediateWrite,
            operands: Operands::Immediate {
                rs: 0,
                rt: 8,
                imm: Immediate::Unresolved("y".to_string()),
                mode: ImmMode::WordAddress,
            },
        })
    );
}

#[test]
fn store_reads_its_target_register() {
    let (bundle, _) = check(Opcode::Sw, "r20, 0(r10)");
    let bundle = bundle.unwrap();
    assert_eq!(bundle.class, FormatClass::ImmediateRead);
    assert_eq!(bundle.destination(), None);
}

#[test]
fn jal_destination_is_the_link_register() {
    let (bundle, _) = check(Opcode::Jal, "func");
    assert_eq!(bundle.unwrap().destination(), Some(31));
}
