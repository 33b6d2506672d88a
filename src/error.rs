/*!
error.rs - Crate error taxonomy.

The interpreter itself is infallible: every opcode arm operates on modular
8-/16-bit integers and a fixed-size memory image, so overflow is observable
only through flags, never through a `Result`. The one place this crate can
genuinely fail is at the filesystem boundary, loading a ROM image into
memory (see `rom::load_file`).
*/

use std::io;

/// Failure modes for loading a ROM image into a [`crate::memory::Memory`].
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The ROM file could not be opened or read.
    #[error("failed to read ROM file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file's length plus the requested offset would run past 0xFFFF.
    #[error(
        "ROM file {path} ({len} bytes) does not fit at offset {offset:#06x} \
         (would end at {end:#06x}, past the 64 KiB address space)"
    )]
    TooLarge {
        path: String,
        len: usize,
        offset: u16,
        end: usize,
    },
}
