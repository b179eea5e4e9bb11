use crate::common::harness::TestContext;
use mipsim_core::Cpu;
use mipsim_core::asm::Program;
use mipsim_core::common::error::{AddressError, ExecError};
use mipsim_core::config::Config;
use mipsim_core::core::pipeline::trace::Stage;
use mipsim_core::isa::{FormatClass, Immediate, Instruction, Opcode, OperandBundle, Operands};

#[test]
fn load_below_data_region_is_fatal() {
    let (ctx, err) = TestContext::new("lw r1, 0(r0)\nexit").run_err();
    assert!(matches!(
        err,
        ExecError::Address {
            stage: Stage::MemoryAccess,
            source: AddressError::OutOfRange { addr: 0, .. },
        }
    ));
    // Fetch through Execute were traced before the fault.
    let stages: Vec<Stage> = ctx.cpu().trace.blocks().iter().map(|b| b.report.stage()).collect();
    assert_eq!(stages, Stage::ALL[..4].to_vec());
    assert!(!ctx.cpu().is_halted());
}

#[test]
fn misaligned_store_is_fatal_and_writes_nothing() {
    let (ctx, err) = TestContext::new(
        "
        p:  .word 268500996
            addi r2, r0, 5
            lw r1, p
            sw r2, 0(r1)
            exit
        ",
    )
    .run_err();
    assert!(matches!(
        err,
        ExecError::Address {
            source: AddressError::Misaligned { addr: 0x1001_0004, align: 8, .. },
            ..
        }
    ));
    assert_eq!(ctx.cpu().data.iter().count(), 1);
    assert_eq!(ctx.cpu().stats.instructions_retired, 2);
}

#[test]
fn unsupported_data_address_is_fatal() {
    let (_, err) = TestContext::new(
        "
        p:  .word 268503040
            lw r1, p
            lw r2, 0(r1)
            exit
        ",
    )
    .run_err();
    assert!(matches!(
        err,
        ExecError::Address {
            source: AddressError::Unsupported { addr: 0x1001_0800, .. },
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "Memory-Access: data address 0x10010800 is valid but not supported (storage ends at 0x10010800)"
    );
}

#[test]
fn fetch_from_unbacked_text_is_fatal() {
    let mut ctx = TestContext::new("exit");
    ctx.cpu_mut().pc = Some(0x0050_0000);
    let (ctx, err) = ctx.run_err();
    assert!(matches!(
        err,
        ExecError::Address {
            stage: Stage::Fetch,
            source: AddressError::Unsupported { .. },
        }
    ));
    assert!(ctx.cpu().trace.is_empty());
}

#[test]
fn fetch_from_misaligned_pc_is_fatal() {
    let mut ctx = TestContext::new("exit");
    ctx.cpu_mut().pc = Some(0x0040_0002);
    let (_, err) = ctx.run_err();
    assert!(matches!(
        err,
        ExecError::Address {
            source: AddressError::Misaligned { .. },
            ..
        }
    ));
}

fn hand_built(operands: Operands, opcode: Opcode, class: FormatClass) -> Cpu {
    let mut program = Program::default();
    let _ = program
        .text
        .push(Instruction::build(opcode, OperandBundle { class, operands }, 1));
    Cpu::new(program, &Config::default())
}

#[test]
fn unassembled_instruction_is_refused() {
    let mut cpu = hand_built(Operands::None, Opcode::Nop, FormatClass::None);
    assert_eq!(cpu.step(), Err(ExecError::NotAssembled { pc: 0x0040_0000 }));
}

#[test]
fn unresolved_reference_is_refused() {
    let mut cpu = hand_built(
        Operands::Jump {
            target: Immediate::Unresolved("later".to_string()),
        },
        Opcode::J,
        FormatClass::Jump,
    );
    assert_eq!(
        cpu.step(),
        Err(ExecError::Unresolved {
            pc: 0x0040_0000,
            label: "later".to_string(),
        })
    );
}
