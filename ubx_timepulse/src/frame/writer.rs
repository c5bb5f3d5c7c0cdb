use crate::error::MemWriterError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Abstraction for buffer creation/reallocation
/// to store a frame
pub trait MemWriter {
    /// make sure that we have at least `len` bytes for writing
    fn reserve_allocate(&mut self, len: usize) -> Result<(), MemWriterError>;
    fn write(&mut self, buf: &[u8]) -> Result<(), MemWriterError>;
}

#[cfg(feature = "alloc")]
impl MemWriter for Vec<u8> {
    fn reserve_allocate(&mut self, len: usize) -> Result<(), MemWriterError> {
        self.reserve(len);
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), MemWriterError> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// [`MemWriter`] over a caller provided buffer, for targets without an allocator
#[derive(Debug)]
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Forget everything written, the buffer can be reused for the next frame
    pub fn clear(&mut self) {
        self.pos = 0;
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl MemWriter for SliceWriter<'_> {
    fn reserve_allocate(&mut self, len: usize) -> Result<(), MemWriterError> {
        if len > self.remaining() {
            return Err(MemWriterError::NotEnoughMem {
                need: len,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), MemWriterError> {
        self.reserve_allocate(buf.len())?;
        let end = self.pos + buf.len();
        self.buf[self.pos..end].copy_from_slice(buf);
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_writer_appends() {
        let mut buf = [0u8; 4];
        let mut out = SliceWriter::new(&mut buf);
        assert!(out.is_empty());
        out.write(&[1, 2]).unwrap();
        out.write(&[3]).unwrap();
        assert_eq!(out.written(), &[1, 2, 3]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn slice_writer_refuses_overflow_without_writing() {
        let mut buf = [0u8; 4];
        let mut out = SliceWriter::new(&mut buf);
        out.write(&[9, 9, 9]).unwrap();
        assert_eq!(
            out.write(&[1, 2]),
            Err(MemWriterError::NotEnoughMem {
                need: 2,
                available: 1
            })
        );
        assert_eq!(out.written(), &[9, 9, 9]);

        out.clear();
        assert!(out.reserve_allocate(4).is_ok());
        assert!(out.reserve_allocate(5).is_err());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn vec_writer_grows() {
        let mut out = Vec::new();
        out.reserve_allocate(3).unwrap();
        out.write(&[1, 2, 3]).unwrap();
        out.write(&[4]).unwrap();
        assert_eq!(out, [1, 2, 3, 4]);
    }
}
