//! Resolved byte sources.

use std::{
    fs::File,
    io::{self, Cursor, Read, Seek, SeekFrom, Write},
};

use anyhow::{Context, Result};

/// An exclusively owned, seekable handle to resolved file content.
///
/// Local matches keep the opened file handle; remote matches hold the
/// fetched body in memory with the read position at the start. Either
/// way the source belongs to the caller alone.
#[derive(Debug)]
pub struct ByteSource {
    origin: String,
    backing: Backing,
}

#[derive(Debug)]
enum Backing {
    Memory(Cursor<Vec<u8>>),
    File(File),
}

impl ByteSource {
    pub(crate) fn from_bytes(origin: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            origin: origin.into(),
            backing: Backing::Memory(Cursor::new(bytes)),
        }
    }

    pub(crate) fn from_file(origin: impl Into<String>, file: File) -> Self {
        Self {
            origin: origin.into(),
            backing: Backing::File(file),
        }
    }

    /// The expanded path or URL this source was resolved from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// True when the content lives in memory rather than behind a file
    /// descriptor.
    pub fn is_buffered(&self) -> bool {
        matches!(self.backing, Backing::Memory(_))
    }

    /// Turns the source into a real, seekable file handle.
    ///
    /// File-backed sources give up their handle directly. Memory-backed
    /// sources are copied into a fresh anonymous temporary file and
    /// rewound to the start; the handle's lifetime is independent of
    /// this source, which is consumed.
    pub fn into_file(self) -> Result<File> {
        let Self { origin, backing } = self;
        match backing {
            Backing::File(file) => Ok(file),
            Backing::Memory(cursor) => {
                let mut file = tempfile::tempfile()
                    .context("failed to create temporary file for fetched data")?;
                file.write_all(cursor.get_ref())
                    .with_context(|| format!("failed to spill {origin} to disk"))?;
                file.rewind()
                    .with_context(|| format!("failed to rewind spilled copy of {origin}"))?;
                Ok(file)
            }
        }
    }
}

impl Read for ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.backing {
            Backing::Memory(cursor) => cursor.read(buf),
            Backing::File(file) => file.read(buf),
        }
    }
}

impl Seek for ByteSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match &mut self.backing {
            Backing::Memory(cursor) => cursor.seek(pos),
            Backing::File(file) => file.seek(pos),
        }
    }
}
