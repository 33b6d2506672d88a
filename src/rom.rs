/*!
rom.rs - Byte-slice-to-memory-offset ROM loader.

Overview
========
Reads an entire file into a `Vec<u8>` and copies it verbatim into a
`Memory` image starting at a caller-supplied offset. This is the whole
contract (see SPEC_FULL.md §6); anything fancier - multi-file packaging,
checksums, bank selection for mappers - is a host concern outside this
crate.

Responsibilities
================
- Open and read a ROM file.
- Reject files that would run past the 64 KiB address space.
- Copy the bytes into the memory image.

Non-Responsibilities
================
- No interpretation of file contents (header parsing, checksums).
- No knowledge of which ROM goes at which offset - that's the driver's job
  (see `main.rs`, which maps `--rom PATH:OFFSET` pairs onto this function),
  documented for the two known layouts (CP/M `cpudiag.bin`, Space Invaders'
  four-bank ROM set) in SPEC_FULL.md §6.
*/

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::memory::Memory;

/// Read the whole file at `path` and copy it into `memory` starting at
/// `offset`. Errors if the file cannot be read or does not fit.
pub fn load_file(memory: &mut Memory, path: &Path, offset: u16) -> Result<(), LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_bytes(memory, &bytes, offset, &path.display().to_string())
}

/// Copy `data` into `memory` starting at `offset`. Exposed separately from
/// [`load_file`] so tests and the CP/M patch path (§6) can exercise the
/// bounds check without touching the filesystem.
pub fn load_bytes(
    memory: &mut Memory,
    data: &[u8],
    offset: u16,
    label: &str,
) -> Result<(), LoadError> {
    let end = offset as usize + data.len();
    if end > memory.len() {
        return Err(LoadError::TooLarge {
            path: label.to_string(),
            len: data.len(),
            offset,
            end,
        });
    }
    memory.as_mut_slice()[offset as usize..end].copy_from_slice(data);
    log::debug!(
        "loaded {} bytes from {} at offset {:#06x}",
        data.len(),
        label,
        offset
    );
    Ok(())
}

/// The three documented `cpudiag.bin` relocation patches (SPEC_FULL.md §6):
/// rewrite the initial `JMP` to `0x0100`, fix the stack-initialization byte,
/// and bypass the `DAA` test (which exercises an opcode this core does not
/// special-case away from the manual's definition, so the patch is about
/// the test harness's own buggy expectations, not about this interpreter).
pub fn apply_cpudiag_patches(memory: &mut Memory) {
    // JMP 0x0100
    memory.write8(0x0000, 0xC3);
    memory.write8(0x0001, 0x00);
    memory.write8(0x0002, 0x01);
    // Stack-initialization fix: 0x06 -> 0x07.
    memory.write8(0x0170, 0x07);
    // Skip the DAA test: JMP 0x05C2.
    memory.write8(0x059C, 0xC3);
    memory.write8(0x059D, 0xC2);
    memory.write8(0x059E, 0x05);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_bytes_copies_into_offset() {
        let mut mem = Memory::new();
        load_bytes(&mut mem, &[0xAA, 0xBB, 0xCC], 0x0100, "test").unwrap();
        assert_eq!(mem.read8(0x0100), 0xAA);
        assert_eq!(mem.read8(0x0101), 0xBB);
        assert_eq!(mem.read8(0x0102), 0xCC);
    }

    #[test]
    fn load_bytes_rejects_overflow() {
        let mut mem = Memory::new();
        let data = vec![0u8; 16];
        let err = load_bytes(&mut mem, &data, 0xFFFF, "test").unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { .. }));
    }

    #[test]
    fn load_bytes_exactly_fitting_top_of_space_is_ok() {
        let mut mem = Memory::new();
        let data = vec![0x42u8; 16];
        load_bytes(&mut mem, &data, 0xFFF0, "test").unwrap();
        assert_eq!(mem.read8(0xFFFF), 0x42);
    }

    #[test]
    fn cpudiag_patches_write_documented_bytes() {
        let mut mem = Memory::new();
        apply_cpudiag_patches(&mut mem);
        assert_eq!(mem.read8(0x0000), 0xC3);
        assert_eq!(mem.read8(0x0001), 0x00);
        assert_eq!(mem.read8(0x0002), 0x01);
        assert_eq!(mem.read8(0x0170), 0x07);
        assert_eq!(mem.read8(0x059C), 0xC3);
        assert_eq!(mem.read8(0x059D), 0xC2);
        assert_eq!(mem.read8(0x059E), 0x05);
    }
}
