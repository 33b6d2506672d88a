/*!
hook.rs - Host-pluggable collaborators the interpreter consumes but does not
implement: port I/O and the pre-CALL diagnostic observer.

Overview
========
The core dispatch code (`cpu::dispatch`) is generic over two small traits
defined here:

- `Ports`, for the `IN`/`OUT` instructions - the arcade cabinet's keypad,
  the CP/M console, or nothing at all (`NullPorts`) all look the same to
  the interpreter.
- `CallHook`, invoked by the `CALL`/`Ccc` dispatch arms before they push a
  return address, so a CP/M BDOS shim (`diagnostic::CpmHook`) can intercept
  `CALL 0x0005`/`CALL 0x0000` without the interpreter knowing CP/M exists.

Responsibilities
================
- Define the two trait contracts and a no-op default for each.

Non-Responsibilities
================
- No concrete CP/M semantics (see `diagnostic.rs`).
- No concrete port semantics (the host - an arcade-cabinet frontend, a CP/M
  console shim, a test - owns that).
*/

use crate::cpu::state::CpuState;
use crate::memory::Memory;

/// The two-port IN/OUT contract (SPEC_FULL.md §6). The interpreter treats
/// `input`'s return value as opaque and performs no interpretation of it.
pub trait Ports {
    fn input(&mut self, port: u8) -> u8;
    fn output(&mut self, port: u8, value: u8);
}

/// A `Ports` implementation for ROMs that never perform `IN`/`OUT`, or for
/// tests that don't care. `input` returns `0xFF`, the idle-bus value most
/// 8080 peripherals float to; `output` is discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPorts;

impl Ports for NullPorts {
    fn input(&mut self, _port: u8) -> u8 {
        0xFF
    }

    fn output(&mut self, _port: u8, _value: u8) {}
}

/// What a `CallHook` decided to do with a `CALL` target it inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallAction {
    /// Not of interest to the hook; the dispatcher performs the ordinary
    /// push-and-jump `CALL` sequence.
    Continue,
    /// The hook fully serviced the call itself (e.g. a BDOS print). The
    /// dispatcher must not push a return address; `PC` is simply left
    /// where it already is, past the 3-byte `CALL`.
    Handled,
    /// The hook wants the interpreter to report a clean program exit
    /// (`StepOutcome::DiagnosticExit`) instead of executing the call.
    Exit,
}

/// A pre-`CALL` observer. The `CALL`/`Ccc` dispatch arms call `on_call`
/// with the call target *before* pushing a return address, so the hook can
/// veto or fully replace the call (see `CallAction`).
pub trait CallHook {
    fn on_call(&mut self, target: u16, cpu: &CpuState, memory: &Memory) -> CallAction;
}

/// A `CallHook` that never intercepts anything; every `CALL` executes
/// normally. This is the default for ROMs (Space Invaders, etc.) that are
/// not hosted under CP/M.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl CallHook for NoopHook {
    fn on_call(&mut self, _target: u16, _cpu: &CpuState, _memory: &Memory) -> CallAction {
        CallAction::Continue
    }
}
