use crate::common::harness::TestContext;
use mipsim_core::common::constants::DATA_BASE;
use pretty_assertions::assert_eq;

#[test]
fn arithmetic_chain() {
    let ctx = TestContext::new(
        "
        addi r1, r0, 4
        addi r2, r0, 6
        add  r3, r1, r2
        sub  r4, r1, r2
        exit
        ",
    )
    .run_ok();
    assert_eq!(ctx.reg(3), 10);
    assert_eq!(ctx.reg(4), -2);
    assert!(ctx.cpu().is_halted());
}

#[test]
fn load_through_pointer_and_store_back() {
    let ctx = TestContext::new(
        "
                .data
                .word 50
        y:      .word 268500992
                .text
        main:   addi r20, r0, 77
                lw r8, y
                lw r16, 0(r8)
                addi r10, r8, 16
                sw r20, 0(r10)
                exit
        ",
    )
    .run_ok();

    assert_eq!(ctx.reg(8), 268_500_992);
    assert_eq!(ctx.reg(8), DATA_BASE as i64);
    assert_eq!(ctx.reg(16), 50);
    assert_eq!(ctx.reg(10), 0x1001_0010);
    assert_eq!(ctx.mem(0x1001_0010), 77);
    assert_eq!(
        ctx.cpu().data.iter().collect::<Vec<_>>(),
        vec![
            (0x1001_0000, 50),
            (0x1001_0008, 268_500_992),
            (0x1001_0010, 77)
        ]
    );
}

#[test]
fn taken_branch_skips_fallthrough() {
    let ctx = TestContext::new(
        "
              addi r2, r0, 42
              addi r3, r0, 41
              bge r2, r3, taken
              addi r9, r0, 1
        taken: beq r5, r5, done
              addi r9, r0, 2
        done: exit
        ",
    )
    .run_ok();
    assert_eq!(ctx.reg(9), 0);
    assert_eq!(ctx.cpu().stats.branches_taken, 2);
}

#[test]
fn untaken_branch_falls_through() {
    let ctx = TestContext::new(
        "
              addi r2, r0, 42
              addi r3, r0, 41
              blt r2, r3, skip
              addi r9, r0, 1
        skip: exit
        ",
    )
    .run_ok();
    assert_eq!(ctx.reg(9), 1);
    assert_eq!(ctx.cpu().stats.branches_not_taken, 1);
}

#[test]
fn bgt_and_ble_on_equal_operands() {
    let ctx = TestContext::new(
        "
              addi r1, r0, 7
              addi r2, r0, 7
              bgt r1, r2, a
              addi r10, r0, 1
        a:    ble r1, r2, b
              addi r11, r0, 1
        b:    exit
        ",
    )
    .run_ok();
    assert_eq!(ctx.reg(10), 1);
    assert_eq!(ctx.reg(11), 0);
}

#[test]
fn backward_branch_loop() {
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
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.reg(2), 30);
    assert_eq!(ctx.cpu().steps, 11);
}

#[test]
fn jal_links_and_j_jumps() {
    let ctx = TestContext::new(
        "
              jal func
              exit
        func: addi r4, r0, 5
              j done
              addi r4, r0, 6
        done: halt
        ",
    )
    .run_ok();
    assert_eq!(ctx.reg(31), 0x0040_0004);
    assert_eq!(ctx.reg(4), 5);
}

#[test]
fn write_to_r0_is_discarded_with_a_runtime_warning() {
    let ctx = TestContext::new("addi r0, r0, 5\nadd r1, r0, r0\nexit").run_ok();
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.sim.build_warnings.warning_count(), 1);
    assert_eq!(ctx.cpu().warnings.warning_count(), 1);
    assert_eq!(ctx.cpu().warnings.warnings()[0].line, Some(1));
    assert_eq!(ctx.cpu().stats.discarded_writes, 1);
}

#[test]
fn running_past_the_last_instruction_exits_implicitly() {
    let ctx = TestContext::new("addi r1, r0, 1").run_ok();
    assert_eq!(ctx.reg(1), 1);
    assert!(ctx.cpu().is_halted());
    assert_eq!(ctx.cpu().warnings.warning_count(), 1);
    assert_eq!(
        ctx.cpu().warnings.warnings()[0].message,
        "Fetch: no instruction placed at 0x00400004, executing implicit exit"
    );
}

#[test]
fn full_instruction_store_runs_into_implicit_exit() {
    let ctx = TestContext::new(&"nop\n".repeat(256)).run_ok();
    assert_eq!(ctx.cpu().steps, 257);
    assert_eq!(ctx.cpu().stats.instructions_retired, 257);
}

#[test]
fn halted_cpu_ignores_further_steps() {
    let mut ctx = TestContext::new("exit\naddi r1, r0, 1").run_ok();
    let trace_len = ctx.cpu().trace.len();
    assert_eq!(ctx.cpu_mut().step(), Ok(()));
    assert_eq!(ctx.cpu().trace.len(), trace_len);
    assert_eq!(ctx.reg(1), 0);
}

#[test]
fn final_state_snapshot() {
    let ctx = TestContext::new(".word 9\naddi r3, r0, -1\nexit").run_ok();
    let state = ctx.cpu().state();
    assert_eq!(state.pc, None);
    assert_eq!(state.registers, vec![(3, -1)]);
    assert_eq!(state.memory, vec![(0x1001_0000, 9)]);
}
