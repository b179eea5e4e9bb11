use crate::common::harness::{TestContext, assemble_ok};
use mipsim_core::Simulator;
use mipsim_core::common::error::ExecError;
use mipsim_core::config::{Config, GeneralConfig};

fn limited(max_steps: u64) -> Config {
    Config {
        general: GeneralConfig {
            max_steps,
            ..GeneralConfig::default()
        },
    }
}

#[test]
fn endless_loop_hits_the_step_limit() {
    let (ctx, err) = TestContext::with_config("spin: j spin", &limited(10)).run_err();
    assert_eq!(err, ExecError::StepLimit(10));
    assert_eq!(ctx.cpu().steps, 10);
    assert_eq!(ctx.cpu().stats.instructions_retired, 10);
    assert!(!ctx.sim.is_halted());
}

#[test]
fn limit_equal_to_program_length_is_enough() {
    let ctx = TestContext::with_config("nop\nnop\nexit", &limited(3)).run_ok();
    assert!(ctx.sim.is_halted());
}

#[test]
fn single_stepping_matches_a_full_run() {
    let source = "addi r1, r0, 2\nloop: addi r1, r1, -1\nbne r1, r0, loop\nexit";
    let mut stepped = Simulator::new(assemble_ok(source), &Config::default());
    while !stepped.is_halted() {
        stepped.step().unwrap();
    }
    let full = TestContext::new(source).run_ok();
    assert_eq!(stepped.cpu.trace, full.cpu().trace);
    assert_eq!(stepped.cpu.state(), full.cpu().state());
}

#[test]
fn build_warnings_are_kept_separately() {
    let ctx = TestContext::new("exit\nend:").run_ok();
    assert_eq!(ctx.sim.build_warnings.warning_count(), 1);
    assert!(ctx.cpu().warnings.is_empty());
}
