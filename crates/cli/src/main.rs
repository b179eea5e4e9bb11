//! mipsim command-line front end.
//!
//! This binary assembles and runs programs for the MIPS-subset interpreter. It performs:
//! 1. **Run:** Assemble a source file, execute it, and print the trace, final state and
//!    statistics (or a JSON document with `--json`).
//! 2. **Check:** Assemble only, printing diagnostics and the label table.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::common::diag::Diagnostics;
use mipsim_core::config::Config;
use mipsim_core::core::MachineState;
use mipsim_core::core::pipeline::trace::Trace;
use mipsim_core::isa::abi;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::sim::LoadError;
use mipsim_core::sim::loader;
use mipsim_core::stats::RunStats;
use mipsim_core::{Cpu, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-subset assembler and pipeline interpreter",
    long_about = "Assemble a MIPS-subset source file and run it on a six-stage pipeline model.\n\nExamples:\n  mipsim run program.asm\n  mipsim run program.asm --quiet\n  mipsim run program.asm --config run.json --json\n  mipsim check program.asm"
)]
struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble and run a source file.
    Run {
        /// Assembly source file.
        path: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print one JSON document instead of text.
        #[arg(long)]
        json: bool,

        /// Do not print the execution trace.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Assemble a source file without running it.
    Check {
        /// Assembly source file.
        path: PathBuf,
    },
}

/// Everything a run produced, for `--json`.
#[derive(Serialize)]
struct RunReport<'a> {
    build_warnings: &'a Diagnostics,
    runtime_warnings: &'a Diagnostics,
    trace: &'a Trace,
    state: MachineState,
    stats: &'a RunStats,
    error: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            path,
            config,
            json,
            quiet,
        } => cmd_run(&path, config.as_deref(), json, quiet),
        Commands::Check { path } => cmd_check(&path),
    }
}

/// Installs the stderr subscriber.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints every entry of a diagnostics log under a heading.
fn print_diagnostics(heading: &str, log: &Diagnostics) {
    if log.is_empty() {
        return;
    }
    println!("{heading}");
    for entry in log.errors() {
        println!("  error: {entry}");
    }
    for entry in log.warnings() {
        println!("  warning: {entry}");
    }
}

/// Reports a load failure; build failures print the whole error log.
fn report_load_error(err: &LoadError) -> ExitCode {
    if let LoadError::Build(build) = err {
        print_diagnostics("[!] Assembly failed:", &build.diagnostics);
    }
    eprintln!("\n[!] {err}");
    ExitCode::FAILURE
}

/// Assembles and runs a program.
fn cmd_run(path: &Path, config_path: Option<&Path>, json: bool, quiet: bool) -> ExitCode {
    let config = match config_path.map(loader::load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => return report_load_error(&e),
    };
    info!(path = %path.display(), max_steps = config.general.max_steps, "assembling");
    let program = match loader::load_program(path) {
        Ok(program) => program,
        Err(e) => return report_load_error(&e),
    };

    let mut sim = Simulator::new(program, &config);
    let result = sim.run();

    if json {
        let report = RunReport {
            build_warnings: &sim.build_warnings,
            runtime_warnings: &sim.cpu.warnings,
            trace: &sim.cpu.trace,
            state: sim.cpu.state(),
            stats: &sim.cpu.stats,
            error: result.as_ref().err().map(ToString::to_string),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("[!] could not serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
        return if result.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    print_diagnostics("[*] Assembly warnings:", &sim.build_warnings);
    if !quiet && !sim.cpu.trace.is_empty() {
        println!("\n[*] Execution trace:");
        print!("{}", sim.cpu.trace);
    }
    print_diagnostics("\n[*] Runtime warnings:", &sim.cpu.warnings);

    let code = match &result {
        Ok(()) => {
            println!("\n[*] Program terminated normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    };
    dump_state(&sim.cpu, &config);
    sim.cpu.stats.print();
    code
}

/// Prints the final registers and data slots.
fn dump_state(cpu: &Cpu, config: &Config) {
    match cpu.pc {
        Some(pc) => println!("\npc: {pc:#010x}"),
        None => println!("\npc: halted"),
    }
    if config.general.print_registers {
        println!("registers:");
        for (idx, value) in cpu.regs.non_zero() {
            println!("  r{idx:<2} ({:>4}) = {value}", abi::alias(idx));
        }
    }
    if config.general.print_memory {
        println!("memory:");
        for (addr, value) in cpu.data.iter() {
            println!("  [{addr:#010x}] = {value}");
        }
    }
}

/// Assembles without running.
fn cmd_check(path: &Path) -> ExitCode {
    let program = match loader::load_program(path) {
        Ok(program) => program,
        Err(e) => return report_load_error(&e),
    };

    print_diagnostics("[*] Assembly warnings:", &program.diagnostics);
    println!(
        "[*] {} instruction(s), {} data word(s), {} label(s)",
        program.text.len(),
        program.data.placed(),
        program.labels.len()
    );
    if !program.labels.is_empty() {
        println!("labels:");
        for (name, addr) in program.labels.iter() {
            println!("  {name:<16} {addr:#010x}");
        }
    }
    println!("text:");
    for inst in &program.text {
        println!("  {:#010x}  {}", inst.address, disassemble(inst));
    }
    ExitCode::SUCCESS
}
