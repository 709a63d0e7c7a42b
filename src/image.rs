//! Offset string reader over the binary image
//!
//! Mapped names live inside the companion binary as NUL-terminated byte
//! strings at fixed file offsets. The reader seeks to each offset on demand
//! and never keeps more than one string in flight; the descriptor drives
//! which offsets get read at all.

use crate::domain::{ImageOffset, MapError};
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Starting capacity for the per-read string buffer; grows geometrically
/// from here as bytes arrive.
const INITIAL_READ_CAPACITY: usize = 32;

/// Reader for NUL-terminated strings stored at fixed offsets in the image.
#[derive(Debug)]
pub struct ImageReader {
    reader: BufReader<File>,
    /// Total image size. Seeking past EOF succeeds on every platform we
    /// care about, so an up-front bounds check stands in for a failing seek.
    len: u64,
    path: PathBuf,
}

impl ImageReader {
    /// Open the binary image read-only.
    ///
    /// # Errors
    /// Returns an error if the image cannot be opened or its length queried.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .map_err(|source| MapError::ImageOpenFailed { path: path.clone(), source })?;
        let len = file
            .metadata()
            .map_err(|source| MapError::ImageOpenFailed { path: path.clone(), source })?
            .len();
        Ok(Self { reader: BufReader::new(file), len, path })
    }

    /// Size of the image in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the NUL-terminated string stored at `offset`.
    ///
    /// Returns `None` when there is no data to read: the offset lies at or
    /// past the end of the image, or an I/O error interrupts the read. The
    /// distinction from `Some(String::new())` matters to the caller — a NUL
    /// byte sitting at `offset` itself is an empty-but-present string.
    ///
    /// Reading stops at the first NUL or at end-of-file, whichever comes
    /// first. The buffer starts small, grows geometrically while bytes
    /// arrive, and is trimmed to the exact read length before conversion.
    /// Bytes are decoded as UTF-8 with lossy replacement, so a stray
    /// non-UTF-8 byte degrades one entry rather than the whole load.
    ///
    /// Every call re-seeks; the cursor position left behind by a previous
    /// read is never relied upon.
    pub fn read_string_at(&mut self, offset: ImageOffset) -> Option<String> {
        if offset.0 >= self.len {
            warn!(
                "Offset {} is past the end of {} ({} bytes), no mapped name read",
                offset,
                self.path.display(),
                self.len
            );
            return None;
        }

        if let Err(e) = self.reader.seek(SeekFrom::Start(offset.0)) {
            warn!("Failed to seek {} to {offset}: {e}", self.path.display());
            return None;
        }

        let mut buf: Vec<u8> = Vec::with_capacity(INITIAL_READ_CAPACITY);
        if let Err(e) = self.reader.read_until(b'\0', &mut buf) {
            warn!("Read error at {offset} in {}: {e}", self.path.display());
            return None;
        }

        // read_until keeps the delimiter; EOF before a NUL leaves it off.
        if buf.last() == Some(&b'\0') {
            buf.pop();
        }
        buf.shrink_to_fit();

        match String::from_utf8(buf) {
            Ok(s) => Some(s),
            Err(e) => Some(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        }
    }
}
