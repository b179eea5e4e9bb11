//! # Run Statistics Tests
//!
//! Instruction mix and branch outcome counters after real runs.

use crate::common::harness::TestContext;
use mipsim_core::isa::Opcode;
use mipsim_core::stats::RunStats;

#[test]
fn loop_mix() {
    let ctx = TestContext::new(
        "
              addi r1, r0, 3
        loop: addi r2, r2, 10
              addi r1, r1, -1
              bne r1, r0, loop
              exit
        ",
    )
    .run_ok();
    let stats = &ctx.cpu().stats;
    assert_eq!(stats.instructions_retired, 11);
    assert_eq!(stats.inst_alu, 7);
    assert_eq!(stats.branches_taken, 2);
    assert_eq!(stats.branches_not_taken, 1);
    assert_eq!(stats.inst_other, 1);
}

#[test]
fn memory_and_jump_counters() {
    let ctx = TestContext::new(
        "
        v:    .word 4
              lw r1, v
              sw r1, v
              jal next
        next: j end
        end:  halt
        ",
    )
    .run_ok();
    let stats = &ctx.cpu().stats;
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_jump, 2);
    assert_eq!(stats.inst_other, 1);
}

#[test]
fn retire_counts_by_category() {
    let mut stats = RunStats::default();
    stats.retire(Opcode::Sub, None);
    stats.retire(Opcode::Ble, Some(false));
    stats.retire(Opcode::Nop, None);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.branches_not_taken, 1);
    assert_eq!(stats.inst_other, 1);
}

#[test]
fn serialized_stats_omit_host_timing() {
    let json = serde_json::to_value(RunStats::default()).unwrap();
    assert_eq!(json["instructions_retired"], 0);
    assert!(json.get("start_time").is_none());
}
