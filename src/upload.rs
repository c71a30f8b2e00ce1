//! The uploaded-file handle consumed by the upload validators.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// An uploaded file: a name, a known byte size, and a readable stream.
///
/// Validators only ever read the handle; the one side effect they have is
/// advancing the stream's read position. Callers running several
/// stream-reading validators over the same upload must [`rewind`] between
/// them.
///
/// [`rewind`]: Upload::rewind
#[derive(Debug)]
pub struct Upload<R> {
    name: String,
    size: u64,
    reader: R,
}

impl Upload<Cursor<Vec<u8>>> {
    /// Wraps an in-memory body, e.g. a decoded multipart part.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self {
            name: name.into(),
            size,
            reader: Cursor::new(bytes),
        }
    }
}

impl Upload<BufReader<File>> {
    /// Opens a disk-backed upload. The handle's name is the file name
    /// component of `path`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self {
            name,
            size,
            reader: BufReader::new(file),
        })
    }
}

impl<R> Upload<R> {
    /// The file name the client supplied for this upload.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the upload in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl<R: Read> Upload<R> {
    /// Reads the remaining stream content, advancing the read position to
    /// the end.
    pub fn read_to_end(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.size as usize);
        self.reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl<R: Seek> Upload<R> {
    /// Resets the read position to the start of the stream.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}
