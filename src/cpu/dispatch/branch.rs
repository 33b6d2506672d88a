/*!
branch.rs - `JMP`/`Jcc`, `CALL`/`Ccc`, `RET`/`Rcc`, `RST`, `PCHL`.

Overview
========
Every opcode that can redirect PC. `CALL`'s unconditional and conditional
forms are the one place the interpreter consults the pluggable
[`CallHook`] (SPEC_FULL.md §4.5) before committing to the ordinary
push-return-address-and-jump sequence, so a CP/M BDOS shim can intercept
`CALL 0x0005`/`CALL 0x0000` without this module knowing CP/M exists.
*/

use crate::cpu::StepOutcome;
use crate::cpu::execute::test_condition;
use crate::cpu::state::CpuState;
use crate::hook::{CallAction, CallHook};
use crate::memory::Memory;

pub fn handle<H: CallHook>(
    opcode: u8,
    cpu: &mut CpuState,
    memory: &mut Memory,
    hook: &mut H,
    outcome: &mut Option<StepOutcome>,
) -> bool {
    match opcode {
        // JMP addr. 0xCB is one of the twelve unofficial opcodes, which the
        // architecture defines as a plain `NOP` rather than a JMP alias, so
        // it is not listed here - it falls through to `control`'s NOP table.
        0xC3 => {
            cpu.pc = cpu.fetch16(memory);
            true
        }

        // Jcc addr
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => {
            let cc = (opcode >> 3) & 0x07;
            let target = cpu.fetch16(memory);
            if test_condition(cpu, cc) {
                cpu.pc = target;
            }
            true
        }

        // CALL addr. 0xDD/0xED/0xFD are unofficial opcodes and are NOPs, not
        // CALL aliases - they fall through to `control`'s NOP table.
        0xCD => {
            let return_addr = cpu.pc.wrapping_add(2);
            let target = cpu.fetch16(memory);
            dispatch_call(cpu, memory, hook, target, return_addr, outcome);
            true
        }

        // Ccc addr
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
            let cc = (opcode >> 3) & 0x07;
            let return_addr = cpu.pc.wrapping_add(2);
            let target = cpu.fetch16(memory);
            if test_condition(cpu, cc) {
                dispatch_call(cpu, memory, hook, target, return_addr, outcome);
            }
            true
        }

        // RET. 0xD9 is an unofficial opcode and is a NOP, not a RET alias -
        // it falls through to `control`'s NOP table.
        0xC9 => {
            cpu.pc = cpu.pop16(memory);
            true
        }

        // Rcc
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
            let cc = (opcode >> 3) & 0x07;
            if test_condition(cpu, cc) {
                cpu.pc = cpu.pop16(memory);
            }
            true
        }

        // RST n
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            let n = (opcode >> 3) & 0x07;
            cpu.push16(memory, cpu.pc);
            cpu.pc = (n as u16) * 8;
            true
        }

        // PCHL: PC = HL.
        0xE9 => {
            cpu.pc = cpu.hl();
            true
        }

        _ => false,
    }
}

/// Shared `CALL` sequence: consult the hook before committing to the
/// ordinary push-and-jump, matching SPEC_FULL.md §4.5's "pre-CALL observer"
/// contract.
fn dispatch_call<H: CallHook>(
    cpu: &mut CpuState,
    memory: &mut Memory,
    hook: &mut H,
    target: u16,
    return_addr: u16,
    outcome: &mut Option<StepOutcome>,
) {
    match hook.on_call(target, cpu, memory) {
        CallAction::Continue => {
            cpu.push16(memory, return_addr);
            cpu.pc = target;
        }
        CallAction::Handled => {
            // The hook fully serviced the call; PC stays past the CALL.
        }
        CallAction::Exit => {
            *outcome = Some(StepOutcome::DiagnosticExit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::NoopHook;

    #[test]
    fn jmp_sets_pc() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = NoopHook;
        let mut outcome = None;
        mem.write16(0x0000, 0x1234);
        cpu.pc = 0x0000;
        assert!(handle(0xC3, &mut cpu, &mut mem, &mut hook, &mut outcome));
        assert_eq!(cpu.pc, 0x1234);
    }

    #[test]
    fn jcc_only_jumps_when_condition_holds() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = NoopHook;
        let mut outcome = None;
        mem.write16(0x0000, 0x1234);
        cpu.pc = 0x0000;
        cpu.flags.z = false;
        assert!(handle(0xCA, &mut cpu, &mut mem, &mut hook, &mut outcome)); // JZ, not taken
        assert_eq!(cpu.pc, 0x0002);

        mem.write16(0x0002, 0x5678);
        cpu.pc = 0x0002;
        cpu.flags.z = true;
        assert!(handle(0xCA, &mut cpu, &mut mem, &mut hook, &mut outcome)); // JZ, taken
        assert_eq!(cpu.pc, 0x5678);
    }

    #[test]
    fn call_pushes_return_address_and_jumps() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = NoopHook;
        let mut outcome = None;
        cpu.sp = 0x2400;
        mem.write16(0x0000, 0x4000);
        cpu.pc = 0x0000;
        assert!(handle(0xCD, &mut cpu, &mut mem, &mut hook, &mut outcome));
        assert_eq!(cpu.pc, 0x4000);
        assert_eq!(cpu.sp, 0x23FE);
        assert_eq!(mem.read16(0x23FE), 0x0002);
    }

    #[test]
    fn ret_pops_pc() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = NoopHook;
        let mut outcome = None;
        cpu.sp = 0x23FE;
        mem.write16(0x23FE, 0x4000);
        assert!(handle(0xC9, &mut cpu, &mut mem, &mut hook, &mut outcome));
        assert_eq!(cpu.pc, 0x4000);
        assert_eq!(cpu.sp, 0x2400);
    }

    #[test]
    fn rst_pushes_pc_and_jumps_to_fixed_vector() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = NoopHook;
        let mut outcome = None;
        cpu.sp = 0x2400;
        cpu.pc = 0x1000;
        assert!(handle(0xCF, &mut cpu, &mut mem, &mut hook, &mut outcome)); // RST 1
        assert_eq!(cpu.pc, 0x0008);
        assert_eq!(mem.read16(0x23FE), 0x1000);
    }

    #[test]
    fn pchl_jumps_to_hl() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = NoopHook;
        let mut outcome = None;
        cpu.set_hl(0x9000);
        assert!(handle(0xE9, &mut cpu, &mut mem, &mut hook, &mut outcome));
        assert_eq!(cpu.pc, 0x9000);
    }

    #[test]
    fn call_hook_can_intercept_and_fully_handle() {
        struct PrintHook;
        impl CallHook for PrintHook {
            fn on_call(&mut self, target: u16, _cpu: &CpuState, _memory: &Memory) -> CallAction {
                if target == 0x0005 {
                    CallAction::Handled
                } else {
                    CallAction::Continue
                }
            }
        }

        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = PrintHook;
        let mut outcome = None;
        cpu.sp = 0x2400;
        mem.write16(0x0000, 0x0005);
        cpu.pc = 0x0000;
        assert!(handle(0xCD, &mut cpu, &mut mem, &mut hook, &mut outcome));
        assert_eq!(cpu.pc, 0x0002, "handled call must not jump");
        assert_eq!(cpu.sp, 0x2400, "handled call must not push a return address");
        assert!(outcome.is_none());
    }

    #[test]
    fn call_hook_can_signal_exit() {
        struct ExitHook;
        impl CallHook for ExitHook {
            fn on_call(&mut self, target: u16, _cpu: &CpuState, _memory: &Memory) -> CallAction {
                if target == 0x0000 {
                    CallAction::Exit
                } else {
                    CallAction::Continue
                }
            }
        }

        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = ExitHook;
        let mut outcome = None;
        mem.write16(0x0000, 0x0000);
        cpu.pc = 0x0000;
        assert!(handle(0xCD, &mut cpu, &mut mem, &mut hook, &mut outcome));
        assert_eq!(outcome, Some(StepOutcome::DiagnosticExit));
    }

    #[test]
    fn unrecognized_opcode_is_not_handled() {
        let mut cpu = CpuState::new();
        let mut mem = Memory::new();
        let mut hook = NoopHook;
        let mut outcome = None;
        assert!(!handle(0x00, &mut cpu, &mut mem, &mut hook, &mut outcome));
    }
}
