/*!
dispatch - The six opcode-family handlers chained by `cpu::step`.

Each submodule owns a disjoint slice of the 256-entry opcode table and
exposes a single `handle` function that either performs the instruction's
effects and returns `true`, or returns `false` to let the next family in
the chain try the same opcode. The orchestration itself - the fetch, the
`||` chain, and the final `Unimplemented` fallback - lives in `cpu::step`,
not here.
*/

pub mod arithmetic;
pub mod branch;
pub mod control;
pub mod data_transfer;
pub mod logical;
pub mod stack;
