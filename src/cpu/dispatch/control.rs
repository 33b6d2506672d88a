/*!
control.rs - `NOP`, `HLT`, `DI`, `EI`, `IN`, `OUT`, and the unofficial
opcode duplicates.

Overview
========
The 256-entry opcode table leaves twelve encodings unofficial: seven are
wholly undefined (0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38) and five
duplicate a documented instruction's bit pattern on real silicon (0xCB,
0xD9, 0xDD, 0xED, 0xFD - JMP/RET/CALL respectively). This crate treats
all twelve uniformly as a plain 1-byte `NOP`, so they're dispatched here
alongside the canonical `0x00` rather than redirecting PC or touching the
stack.
*/

use crate::cpu::StepOutcome;
use crate::cpu::state::CpuState;
use crate::hook::Ports;
use crate::memory::Memory;

pub fn handle<P: Ports>(
    opcode: u8,
    cpu: &mut CpuState,
    memory: &mut Memory,
    ports: &mut P,
    outcome: &mut Option<StepOutcome>,
) -> bool {
    match opcode {
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 | 0xCB | 0xD9 | 0xDD | 0xED
        | 0xFD => true, // NOP

        0x76 => {
            cpu.halted = true;
            *outcome = Some(StepOutcome::Halted);
            true
        }

        0xF3 => {
            cpu.int_enable = false;
            true
        }
        0xFB => {
            cpu.int_enable = true;
            true
        }

        0xDB => {
            let port = cpu.fetch8(memory);
            cpu.a = ports.input(port);
            true
        }
        0xD3 => {
            let port = cpu.fetch8(memory);
            ports.output(port, cpu.a);
            true
        }

        _ => false,
    }
}
