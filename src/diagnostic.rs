/*!
diagnostic.rs - The CP/M BDOS shim used to run `cpudiag.bin`-style test
ROMs, gated behind the `cpm` Cargo feature.

Overview
========
`cpudiag.bin` and similar CP/M-hosted 8080 test suites drive their own
console output through two BDOS functions reached via `CALL 0x0005`, with
the function selector in register C:

- C == 9: print the `$`-terminated string at `(DE)+3` (the `+3` skips the
  CP/M page-zero parameter block the real BDOS would also see).
- C == 2: a fixed "print routine called" notice (SPEC_FULL.md §4.5
  intentionally stops short of modeling this BDOS function's real
  single-character-in-E semantics, matching the reference diagnostic
  harness's own incomplete handling of it).

`CALL 0x0000` is CP/M's warm-boot re-entry point; a diagnostic ROM that
jumps there has finished, so it's treated as a clean exit.

Responsibilities
================
- Implement `CallHook` for exactly these three call targets.
- Buffer printed output so a test can assert on it instead of stdout.

Non-Responsibilities
================
- No other BDOS functions (this crate's CP/M support is only as deep as
  cpudiag-style ROMs require, not a general CP/M console driver).
*/

use crate::cpu::state::CpuState;
use crate::hook::{CallAction, CallHook};
use crate::memory::Memory;

/// CP/M BDOS entry point function 5 is invoked via a fixed `CALL 0x0005`.
const BDOS_ENTRY: u16 = 0x0005;
/// CP/M warm-boot re-entry; a diagnostic ROM jumping here has finished.
const WARM_BOOT: u16 = 0x0000;

/// A [`CallHook`] that intercepts the two CP/M BDOS calls `cpudiag.bin`
/// needs and reports a clean exit on warm boot.
#[derive(Debug, Default)]
pub struct CpmHook {
    output: String,
}

impl CpmHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far through BDOS functions 2 and 9.
    pub fn output(&self) -> &str {
        &self.output
    }

    fn print_string_from_de(&mut self, cpu: &CpuState, memory: &Memory) {
        let mut addr = cpu.de().wrapping_add(3);
        loop {
            let byte = memory.read8(addr);
            if byte == b'$' {
                break;
            }
            self.output.push(byte as char);
            addr = addr.wrapping_add(1);
        }
        self.output.push('\n');
        log::trace!("cpm bdos print: {}", self.output);
    }
}

impl CallHook for CpmHook {
    fn on_call(&mut self, target: u16, cpu: &CpuState, memory: &Memory) -> CallAction {
        if target == BDOS_ENTRY {
            match cpu.c {
                9 => {
                    self.print_string_from_de(cpu, memory);
                    CallAction::Handled
                }
                2 => {
                    self.output.push_str("Print routine called\n");
                    CallAction::Handled
                }
                _ => CallAction::Handled,
            }
        } else if target == WARM_BOOT {
            CallAction::Exit
        } else {
            CallAction::Continue
        }
    }
}
