//! File-backed data source.
//!
//! Seeks and reads on demand; only the slice being painted is ever in memory.

use super::DataSource;
use crate::model::error::InputError;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Random-access reader over a file on disk.
///
/// The length is captured when the file is opened; the viewer does not
/// follow files that grow or shrink afterwards.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    file: File,
    len: u64,
}

impl FileSource {
    /// Open `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::NotAFile` if the path is a directory or other non-regular file.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(InputError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        debug!(path = %path.display(), len = metadata.len(), "Opened file source");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            len: metadata.len(),
        })
    }

    /// Path the source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn len(&self) -> u64 {
        self.len
    }

    fn read(&mut self, buf: &mut [u8], offset: u64) -> usize {
        let available = self.len.saturating_sub(offset);
        let wanted = usize::try_from(available).map_or(buf.len(), |a| a.min(buf.len()));
        if wanted == 0 {
            return 0;
        }

        if let Err(err) = self.file.seek(SeekFrom::Start(offset)) {
            warn!(path = %self.path.display(), offset, error = %err, "Seek failed");
            return 0;
        }

        // `read` may return fewer bytes than requested; keep going until the
        // window is full or the file reports EOF.
        let mut filled = 0;
        while filled < wanted {
            match self.file.read(&mut buf[filled..wanted]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!(path = %self.path.display(), offset, filled, error = %err, "Read failed");
                    break;
                }
            }
        }
        filled
    }
}
