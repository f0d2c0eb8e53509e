//! Whole-file byte buffer helpers.
//!
//! These are meant for test support: writing fixtures out and loading them
//! back. Use them in production code at your own risk.
//!
//! Reads trust the length reported by the file's metadata. On a local volume
//! that matches the number of readable bytes; on network or virtual
//! filesystems it may not, and a read that ends early leaves the tail of the
//! returned buffer zero-filled rather than failing.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

/// Writes `bytes` to `path`, creating the file or truncating any existing
/// content.
///
/// A failed write may leave a truncated file behind.
pub fn write_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(bytes)?;

    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Reads the whole of the file at `path`.
///
/// See [`read_file_from`] for how the buffer is sized.
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = read_file_from(File::open(path)?)?;

    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Reads the whole of an already open file.
///
/// The buffer is allocated up front at the length reported by the file's
/// metadata. The file is consumed and closed before this returns.
pub fn read_file_from(file: File) -> io::Result<Vec<u8>> {
    let len = file.metadata()?.len();
    let len = usize::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("file length {} does not fit in memory", len),
        )
    })?;

    read_sized(file, len)
}

/// Reads up to `len` bytes from `reader` into a zero-filled buffer of exactly
/// `len` bytes.
///
/// Each read asks for the remaining unfilled part of the buffer. End of data
/// before the buffer is full is not an error: the rest stays zeroed.
pub(crate) fn read_sized<R: Read>(mut reader: R, len: usize) -> io::Result<Vec<u8>> {
    // should only be zero if loading from a network or similar
    if len == 0 {
        debug!("declared file length is zero, returning an empty buffer");
    }

    let mut bytes = vec![0u8; len];
    let mut offset = 0;
    while offset != len {
        match reader.read(&mut bytes[offset..]) {
            Ok(0) => break,
            Ok(n) => offset += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    if offset != len {
        debug!("short read: got {} of {} bytes", offset, len);
    }

    Ok(bytes)
}
