//! Byte stream interfaces consumed by the codec.
//!
//! The engine never touches files or buffers directly; it reads symbols
//! through [`ByteReader`] and emits output through [`ByteWriter`]. Encoding
//! makes two passes over the input (frequency scan, then emission), so
//! readers must support [`ByteReader::rewind`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::Result;

/// Source of input bytes.
pub trait ByteReader {
    /// Read the next byte, or `None` at end of stream.
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Reposition to the start of the stream.
    fn rewind(&mut self) -> Result<()>;
}

/// Sink for output bytes.
pub trait ByteWriter {
    /// Append one byte.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Flush and release the underlying sink. Must be called exactly once
    /// at the end of a run; writes after `close` are a contract violation.
    fn close(&mut self) -> Result<()>;
}

impl<R: ByteReader + ?Sized> ByteReader for &mut R {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }

    fn rewind(&mut self) -> Result<()> {
        (**self).rewind()
    }
}

impl<W: ByteWriter + ?Sized> ByteWriter for &mut W {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Reader over an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Create a reader over a slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteReader for SliceReader<'_> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        match self.data.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.pos = 0;
        Ok(())
    }
}

/// Buffered reader over a file.
#[derive(Debug)]
pub struct FileReader {
    inner: BufReader<File>,
}

impl FileReader {
    /// Open a file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            inner: BufReader::new(file),
        })
    }
}

impl ByteReader for FileReader {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn rewind(&mut self) -> Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

/// Writer accumulating into an owned `Vec<u8>`.
#[derive(Debug, Clone, Default)]
pub struct VecWriter {
    data: Vec<u8>,
}

impl VecWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the writer and return the accumulated bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// View the accumulated bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl ByteWriter for VecWriter {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.data.push(byte);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Buffered writer over a file.
#[derive(Debug)]
pub struct FileWriter {
    inner: BufWriter<File>,
}

impl FileWriter {
    /// Create (or truncate) a file for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }
}

impl ByteWriter for FileWriter {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.inner.write_all(&[byte])?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.inner.flush()?;
        self.inner.get_ref().sync_all()?;
        Ok(())
    }
}
