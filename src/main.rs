/*!
main.rs - Driver binary: load a ROM, optionally patch it for the CP/M
diagnostic harness, and run it to completion.

Overview
========
Thin glue over the library: parse arguments, build a `Memory`, load one or
more ROM images into it at the requested offsets, then call `cpu::step` in
a loop until the interpreter reports `Halted`, `DiagnosticExit`, or an
`Unimplemented` opcode (SPEC_FULL.md §6). All actual emulation logic lives
in the library; this binary owns only argument parsing, logging setup, and
the step loop.
*/

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use i8080::cpu::step;
use i8080::hook::NullPorts;
use i8080::memory::Memory;
use i8080::rom;
use i8080::{CpuState, StepOutcome};

#[cfg(feature = "cpm")]
use i8080::diagnostic::CpmHook;
#[cfg(not(feature = "cpm"))]
use i8080::hook::NoopHook;

/// Run an Intel 8080 ROM image to completion.
#[derive(Parser, Debug)]
#[command(name = "i8080", version, about)]
struct Args {
    /// Path to the ROM image to load.
    rom: PathBuf,

    /// Byte offset in the 64 KiB address space to load the ROM at.
    #[arg(long, default_value_t = 0)]
    offset: u16,

    /// Apply the documented `cpudiag.bin` relocation patches before
    /// running, and install the CP/M BDOS diagnostic hook. Requires the
    /// `cpm` feature.
    #[arg(long)]
    cpudiag: bool,

    /// Log each executed instruction's disassembly at trace level.
    #[arg(long)]
    trace: bool,

    /// Stop after this many instructions even if the ROM never halts.
    /// Unset means run until `HLT` or a diagnostic exit.
    #[arg(long)]
    max_steps: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut memory = Memory::new();
    if let Err(err) = rom::load_file(&mut memory, &args.rom, args.offset) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    if args.cpudiag {
        #[cfg(feature = "cpm")]
        {
            rom::apply_cpudiag_patches(&mut memory);
        }
        #[cfg(not(feature = "cpm"))]
        {
            eprintln!("error: --cpudiag requires building with `--features cpm`");
            return ExitCode::FAILURE;
        }
    }

    let mut cpu = CpuState::new();
    if args.cpudiag {
        cpu.pc = 0x0100;
    }
    let mut ports = NullPorts;

    #[cfg(feature = "cpm")]
    let mut hook = CpmHook::new();
    #[cfg(not(feature = "cpm"))]
    let mut hook = NoopHook;

    let mut steps: u64 = 0;
    loop {
        if let Some(limit) = args.max_steps {
            if steps >= limit {
                log::info!("stopped after reaching --max-steps={limit}");
                break;
            }
        }

        if args.trace {
            let pc = cpu.pc;
            let (mnemonic, _len) = i8080::disasm::disassemble(&memory_window(&memory, pc), 0);
            log::trace!("{:04x}  {}", pc, mnemonic);
        }

        match step(&mut cpu, &mut memory, &mut ports, &mut hook) {
            StepOutcome::Continued => {}
            StepOutcome::Halted => {
                log::info!("halted at pc={:#06x}", cpu.pc);
                break;
            }
            StepOutcome::Unimplemented(opcode) => {
                eprintln!(
                    "error: unimplemented opcode {:#04x} at pc={:#06x}",
                    opcode, cpu.pc
                );
                return ExitCode::FAILURE;
            }
            StepOutcome::DiagnosticExit => {
                log::info!("diagnostic hook reported a clean exit");
                #[cfg(feature = "cpm")]
                {
                    print!("{}", hook.output());
                }
                break;
            }
        }

        steps += 1;
    }

    ExitCode::SUCCESS
}

/// `disassemble` wants a slice starting at the instruction; carve out a
/// fixed 3-byte window (the longest instruction length) so it never reads
/// past the end of the address space.
fn memory_window(memory: &Memory, pc: u16) -> [u8; 3] {
    let mut window = [0u8; 3];
    for (i, slot) in window.iter_mut().enumerate() {
        *slot = memory.read8(pc.wrapping_add(i as u16));
    }
    window
}
