#![doc = r#"
i8080 library crate.

This crate exposes the emulator core modules for use by the driver binary
and by tests.

Modules:
- `memory`: the flat 64 KiB memory image and its byte/word access primitives.
- `cpu`: processor state, the fetch-decode-execute interpreter, and flag
  utilities. The interpreter is a single 256-entry opcode dispatch split
  across one submodule per opcode family under `cpu::dispatch`.
- `disasm`: a pure disassembler over the same 256-entry opcode classification.
- `hook`: the `CallHook`/`Ports` traits an embedder plugs into `cpu::dispatch::step`.
- `diagnostic`: the CP/M BDOS diagnostic hook (`CpmHook`), gated behind the
  `cpm` feature.
- `rom`: a byte-slice-to-memory-offset ROM loader.
- `error`: the crate's only fallible surface, `LoadError`.

The interpreter never owns a file handle, a socket, or a thread; everything
it touches is the `memory::Memory` image and the `cpu::state::CpuState` it is
handed. This keeps it embeddable in tests, alternate drivers, or a debugger.
"#]

pub mod cpu;
#[cfg(feature = "cpm")]
pub mod diagnostic;
pub mod disasm;
pub mod error;
pub mod hook;
pub mod memory;
pub mod rom;

pub use cpu::state::CpuState;
pub use cpu::StepOutcome;
pub use error::LoadError;
pub use memory::Memory;
