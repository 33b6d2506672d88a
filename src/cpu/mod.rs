/*!
cpu - Register file, flags, and the fetch-decode-execute interpreter.

Overview
========
`cpu::state::CpuState` is the programmer-visible register/flag storage;
`cpu::flags` is the pure flag-bit arithmetic; `cpu::execute` is the shared
ALU/condition-code logic every dispatch arm calls into; `cpu::dispatch` is
the orchestrator and its six opcode-family submodules (SPEC_FULL.md §4).
*/

pub mod dispatch;
pub mod execute;
pub mod flags;
pub mod state;

use crate::hook::{CallHook, Ports};
use crate::memory::Memory;
use state::CpuState;

/// What happened during one call to [`dispatch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction executed normally; PC now points at the next
    /// instruction (or a jump target).
    Continued,
    /// `HLT` executed. `cpu.halted` is now `true`; further calls to `step`
    /// re-report `Halted` without fetching another opcode.
    Halted,
    /// The fetched byte has no defined 8080 semantics in this interpreter.
    /// `cpu.pc` has already moved past it. The byte value is preserved for
    /// diagnostics.
    Unimplemented(u8),
    /// A [`CallHook`] reported that the program reached its defined exit
    /// point (SPEC_FULL.md §4.5/§9). Not part of the bare 8080 architecture;
    /// only ever produced when a hook asks for it.
    DiagnosticExit,
}

/// Execute exactly one instruction: fetch the opcode at `cpu.pc`, advance
/// PC past it and any immediate operands, and perform its effects.
///
/// A CPU that is already halted does not fetch; it simply re-reports
/// [`StepOutcome::Halted`], mirroring real hardware holding the bus after
/// `HLT`.
pub fn step<P: Ports, H: CallHook>(
    cpu: &mut CpuState,
    memory: &mut Memory,
    ports: &mut P,
    hook: &mut H,
) -> StepOutcome {
    if cpu.halted {
        return StepOutcome::Halted;
    }

    let opcode = cpu.fetch8(memory);
    let mut outcome: Option<StepOutcome> = None;

    let handled = dispatch::data_transfer::handle(opcode, cpu, memory)
        || dispatch::arithmetic::handle(opcode, cpu, memory)
        || dispatch::logical::handle(opcode, cpu, memory)
        || dispatch::stack::handle(opcode, cpu, memory)
        || dispatch::control::handle(opcode, cpu, memory, ports, &mut outcome)
        || dispatch::branch::handle(opcode, cpu, memory, hook, &mut outcome);

    if !handled {
        return StepOutcome::Unimplemented(opcode);
    }

    outcome.unwrap_or(StepOutcome::Continued)
}
