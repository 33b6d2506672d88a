/*!
disasm.rs - Pure disassembler over the same 256-opcode table the
interpreter executes.

Overview
========
`disassemble` takes a byte slice and an offset and returns the mnemonic
text for the instruction at that offset along with its length in bytes -
nothing else. It performs no interpretation, has no side effects, and
never touches a [`crate::cpu::state::CpuState`] or [`crate::memory::Memory`];
it exists purely as a debugging aid for driver binaries that want to trace
a ROM (SPEC_FULL.md §5), grounded on the reference emulator's own
`Disassembler` routine.
*/

const REG_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "M", "A"];
const RP_NAMES: [&str; 4] = ["B", "D", "H", "SP"];
const RP_PUSH_NAMES: [&str; 4] = ["B", "D", "H", "PSW"];
const CC_NAMES: [&str; 8] = ["NZ", "Z", "NC", "C", "PO", "PE", "P", "M"];

/// Disassemble the instruction at `code[offset]`. Returns the mnemonic and
/// the instruction length in bytes (1, 2, or 3). If `offset` is within one
/// or two bytes of the end of `code`, any missing operand bytes are
/// treated as `0x00` rather than panicking - matching how a ROM's tail can
/// legitimately end mid-instruction when disassembling for display only.
pub fn disassemble(code: &[u8], offset: usize) -> (String, u16) {
    let opcode = code[offset];
    let byte = |n: usize| code.get(offset + n).copied().unwrap_or(0);
    let d8 = || byte(1);
    let addr = || u16::from_le_bytes([byte(1), byte(2)]);

    match opcode {
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 | 0xCB | 0xD9 | 0xDD | 0xED
        | 0xFD => ("NOP".to_string(), 1),
        0x76 => ("HLT".to_string(), 1),
        0xF3 => ("DI".to_string(), 1),
        0xFB => ("EI".to_string(), 1),
        0x07 => ("RLC".to_string(), 1),
        0x0F => ("RRC".to_string(), 1),
        0x17 => ("RAL".to_string(), 1),
        0x1F => ("RAR".to_string(), 1),
        0x27 => ("DAA".to_string(), 1),
        0x2F => ("CMA".to_string(), 1),
        0x37 => ("STC".to_string(), 1),
        0x3F => ("CMC".to_string(), 1),
        0xC9 => ("RET".to_string(), 1),
        0xE9 => ("PCHL".to_string(), 1),
        0xF9 => ("SPHL".to_string(), 1),
        0xE3 => ("XTHL".to_string(), 1),
        0xEB => ("XCHG".to_string(), 1),
        0xDB => (format!("IN ${:02x}", d8()), 2),
        0xD3 => (format!("OUT ${:02x}", d8()), 2),

        0x01 | 0x11 | 0x21 | 0x31 => (
            format!("LXI {},${:04x}", RP_NAMES[((opcode >> 4) & 0x03) as usize], addr()),
            3,
        ),
        0x02 => ("STAX B".to_string(), 1),
        0x12 => ("STAX D".to_string(), 1),
        0x0A => ("LDAX B".to_string(), 1),
        0x1A => ("LDAX D".to_string(), 1),
        0x22 => (format!("SHLD ${:04x}", addr()), 3),
        0x2A => (format!("LHLD ${:04x}", addr()), 3),
        0x32 => (format!("STA ${:04x}", addr()), 3),
        0x3A => (format!("LDA ${:04x}", addr()), 3),

        0x03 | 0x13 | 0x23 | 0x33 => (
            format!("INX {}", RP_NAMES[((opcode >> 4) & 0x03) as usize]),
            1,
        ),
        0x0B | 0x1B | 0x2B | 0x3B => (
            format!("DCX {}", RP_NAMES[((opcode >> 4) & 0x03) as usize]),
            1,
        ),
        0x09 | 0x19 | 0x29 | 0x39 => (
            format!("DAD {}", RP_NAMES[((opcode >> 4) & 0x03) as usize]),
            1,
        ),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => (
            format!("INR {}", REG_NAMES[((opcode >> 3) & 0x07) as usize]),
            1,
        ),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => (
            format!("DCR {}", REG_NAMES[((opcode >> 3) & 0x07) as usize]),
            1,
        ),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => (
            format!(
                "MVI {},${:02x}",
                REG_NAMES[((opcode >> 3) & 0x07) as usize],
                d8()
            ),
            2,
        ),

        0x40..=0x75 | 0x77..=0x7F => (
            format!(
                "MOV {},{}",
                REG_NAMES[((opcode >> 3) & 0x07) as usize],
                REG_NAMES[(opcode & 0x07) as usize]
            ),
            1,
        ),

        0x80..=0x87 => (format!("ADD {}", REG_NAMES[(opcode & 0x07) as usize]), 1),
        0x88..=0x8F => (format!("ADC {}", REG_NAMES[(opcode & 0x07) as usize]), 1),
        0x90..=0x97 => (format!("SUB {}", REG_NAMES[(opcode & 0x07) as usize]), 1),
        0x98..=0x9F => (format!("SBB {}", REG_NAMES[(opcode & 0x07) as usize]), 1),
        0xA0..=0xA7 => (format!("ANA {}", REG_NAMES[(opcode & 0x07) as usize]), 1),
        0xA8..=0xAF => (format!("XRA {}", REG_NAMES[(opcode & 0x07) as usize]), 1),
        0xB0..=0xB7 => (format!("ORA {}", REG_NAMES[(opcode & 0x07) as usize]), 1),
        0xB8..=0xBF => (format!("CMP {}", REG_NAMES[(opcode & 0x07) as usize]), 1),

        0xC6 => (format!("ADI ${:02x}", d8()), 2),
        0xCE => (format!("ACI ${:02x}", d8()), 2),
        0xD6 => (format!("SUI ${:02x}", d8()), 2),
        0xDE => (format!("SBI ${:02x}", d8()), 2),
        0xE6 => (format!("ANI ${:02x}", d8()), 2),
        0xEE => (format!("XRI ${:02x}", d8()), 2),
        0xF6 => (format!("ORI ${:02x}", d8()), 2),
        0xFE => (format!("CPI ${:02x}", d8()), 2),

        0xC3 => (format!("JMP ${:04x}", addr()), 3),
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => (
            format!("J{} ${:04x}", CC_NAMES[((opcode >> 3) & 0x07) as usize], addr()),
            3,
        ),
        0xCD => (format!("CALL ${:04x}", addr()), 3),
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => (
            format!("C{} ${:04x}", CC_NAMES[((opcode >> 3) & 0x07) as usize], addr()),
            3,
        ),
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => (
            format!("R{}", CC_NAMES[((opcode >> 3) & 0x07) as usize]),
            1,
        ),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            (format!("RST {}", (opcode >> 3) & 0x07), 1)
        }

        0xC5 | 0xD5 | 0xE5 | 0xF5 => (
            format!("PUSH {}", RP_PUSH_NAMES[((opcode >> 4) & 0x03) as usize]),
            1,
        ),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => (
            format!("POP {}", RP_PUSH_NAMES[((opcode >> 4) & 0x03) as usize]),
            1,
        ),
    }
}
