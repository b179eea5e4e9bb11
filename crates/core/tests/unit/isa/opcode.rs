use mipsim_core::isa::{FormatClass, Opcode, OperandFormat};
use rstest::rstest;

#[test]
fn every_mnemonic_parses_back() {
    for op in Opcode::ALL {
        assert_eq!(op.mnemonic().parse::<Opcode>(), Ok(op));
    }
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!("JAL".parse::<Opcode>(), Ok(Opcode::Jal));
}

#[test]
fn unknown_mnemonic_message() {
    let err = "mul".parse::<Opcode>().unwrap_err();
    assert_eq!(err.to_string(), "Opcode: \"mul\" Not Recognised!");
}

#[rstest]
#[case(Opcode::Add, OperandFormat::Register, FormatClass::Register)]
#[case(Opcode::Addi, OperandFormat::ImmediateArith, FormatClass::ImmediateWrite)]
#[case(Opcode::Lw, OperandFormat::Memory, FormatClass::ImmediateWrite)]
#[case(Opcode::Sw, OperandFormat::Memory, FormatClass::ImmediateRead)]
#[case(Opcode::Ble, OperandFormat::Branch, FormatClass::ImmediateRead)]
#[case(Opcode::J, OperandFormat::Jump, FormatClass::Jump)]
#[case(Opcode::Jal, OperandFormat::Jump, FormatClass::JumpLink)]
#[case(Opcode::Halt, OperandFormat::None, FormatClass::None)]
fn format_table(#[case] op: Opcode, #[case] format: OperandFormat, #[case] class: FormatClass) {
    assert_eq!(op.format(), format);
    assert_eq!(op.class(), class);
}

#[test]
fn only_exit_and_halt_are_terminal() {
    let terminal: Vec<Opcode> = Opcode::ALL.into_iter().filter(|op| op.is_terminal()).collect();
    assert_eq!(terminal, vec![Opcode::Exit, Opcode::Halt]);
}
