//! Data sources.
//!
//! The viewer never holds the whole stream. It asks a [`DataSource`] for the
//! slice it is about to paint:
//! - [`FileSource`] for files on disk (seek + read)
//! - [`MemorySource`] for in-memory buffers (tests, piped data)

use crate::model::error::InputError;
use std::path::PathBuf;
use tracing::warn;

pub mod file;
pub mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

/// Random-access byte provider.
///
/// # Contract
/// - `read` fills as much of `buf` as is available starting at `offset` and
///   returns the number of bytes written
/// - a short count is legal (end of data, I/O trouble); bytes past the count
///   are left untouched
/// - `read` never reads past `len()`
pub trait DataSource: std::fmt::Debug {
    /// Total length in bytes.
    fn len(&self) -> u64;

    /// Fill `buf` from `offset`; returns the number of bytes written.
    fn read(&mut self, buf: &mut [u8], offset: u64) -> usize;

    /// True for an empty source.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Open the data source named on the command line.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::NotAFile` for directories and other non-regular files,
/// and `InputError::Io` for other I/O errors.
pub fn open(path: PathBuf) -> Result<Box<dyn DataSource>, InputError> {
    Ok(Box::new(FileSource::open(path)?))
}

/// Slice of data loaded for display.
///
/// Bytes that the source failed to deliver are zero-filled and counted in
/// `unknown_trailing`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ByteWindow {
    offset: u64,
    bytes: Vec<u8>,
    unknown_trailing: usize,
}

impl ByteWindow {
    /// Load up to `capacity` bytes starting at `offset`.
    pub fn load(source: &mut dyn DataSource, offset: u64, capacity: usize) -> Self {
        let available = source.len().saturating_sub(offset);
        let wanted = usize::try_from(available).map_or(capacity, |a| a.min(capacity));
        let mut bytes = vec![0u8; wanted];
        let read = source.read(&mut bytes, offset).min(wanted);
        if read < wanted {
            warn!(offset, wanted, read, "Short read while loading window");
        }
        Self {
            offset,
            bytes,
            unknown_trailing: wanted - read,
        }
    }

    /// Index of the first byte in the window.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The loaded bytes, including zero padding for unknown bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// How many bytes at the end of the window are padding.
    pub fn unknown_trailing(&self) -> usize {
        self.unknown_trailing
    }

    /// Byte at absolute `index`, if it was loaded and is known.
    pub fn get(&self, index: u64) -> Option<u8> {
        let relative = usize::try_from(index.checked_sub(self.offset)?).ok()?;
        if relative >= self.bytes.len() - self.unknown_trailing {
            return None;
        }
        self.bytes.get(relative).copied()
    }

    /// Number of bytes in the window.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Result of [`read_padded`]: a fixed-width read near the end of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedRead {
    /// `width` bytes; the known bytes are right-aligned.
    pub bytes: Vec<u8>,
    /// How many leading bytes are zero padding.
    pub unknown_leading: usize,
}

impl PaddedRead {
    /// The bytes as a big-endian unsigned number (at most 8 bytes used).
    pub fn be_value(&self) -> u64 {
        let tail = &self.bytes[self.bytes.len().saturating_sub(8)..];
        tail.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
    }
}

/// Read exactly `width` bytes from `offset`, padding a short read.
///
/// The bytes that were read are moved to the end of the buffer and the
/// leading bytes zero-filled, so multi-byte values at the very end of the
/// data still have a well-defined (partially unknown) interpretation.
pub fn read_padded(source: &mut dyn DataSource, offset: u64, width: usize) -> PaddedRead {
    let mut bytes = vec![0u8; width];
    let read = source.read(&mut bytes, offset).min(width);
    if read < width {
        bytes.copy_within(0..read, width - read);
        bytes[..width - read].fill(0);
    }
    PaddedRead {
        bytes,
        unknown_leading: width - read,
    }
}
