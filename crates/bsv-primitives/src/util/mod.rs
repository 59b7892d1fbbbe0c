//! Wire codec for the legacy transaction format.
//!
//! `VarInt` is the Bitcoin compact-size integer. `BsvReader` walks a byte
//! slice with bounds-checked little-endian reads; `BsvWriter` builds one.

use crate::PrimitivesError;

// ---------------------------------------------------------------------------
// VarInt
// ---------------------------------------------------------------------------

/// A compact-size integer: 1, 3, 5 or 9 bytes on the wire.
///
/// Values below `0xfd` are a single byte; larger values carry a marker byte
/// (`0xfd`, `0xfe`, `0xff`) followed by a 2, 4 or 8 byte little-endian body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Number of bytes this value occupies when encoded.
    pub fn length(&self) -> usize {
        match self.0 {
            0..=0xfc => 1,
            0xfd..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        }
    }

    /// Encode into a fresh buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let v = self.0;
        let mut out = Vec::with_capacity(self.length());
        match self.length() {
            1 => out.push(v as u8),
            3 => {
                out.push(0xfd);
                out.extend_from_slice(&(v as u16).to_le_bytes());
            }
            5 => {
                out.push(0xfe);
                out.extend_from_slice(&(v as u32).to_le_bytes());
            }
            _ => {
                out.push(0xff);
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        out
    }

    /// Decode from the front of `data`.
    ///
    /// # Returns
    /// The value and the number of bytes consumed, or `UnexpectedEof`
    /// when `data` ends inside the encoding.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, usize), PrimitivesError> {
        let mut reader = BsvReader::new(data);
        let value = reader.read_varint()?;
        Ok((value, reader.position()))
    }

    /// The integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<usize> for VarInt {
    fn from(v: usize) -> Self {
        VarInt(v as u64)
    }
}

impl From<u64> for VarInt {
    fn from(v: u64) -> Self {
        VarInt(v)
    }
}

// ---------------------------------------------------------------------------
// BsvReader
// ---------------------------------------------------------------------------

/// Cursor over a byte slice.
///
/// Every read is bounds-checked and fails with `UnexpectedEof` instead of
/// panicking, so truncated input surfaces as an error.
pub struct BsvReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BsvReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        BsvReader { data, pos: 0 }
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], PrimitivesError> {
        let end = self.pos.checked_add(n).ok_or(PrimitivesError::UnexpectedEof)?;
        let slice = self.data.get(self.pos..end).ok_or(PrimitivesError::UnexpectedEof)?;
        self.pos = end;
        Ok(slice)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], PrimitivesError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, PrimitivesError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, PrimitivesError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, PrimitivesError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, PrimitivesError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a compact-size integer.
    pub fn read_varint(&mut self) -> Result<VarInt, PrimitivesError> {
        let value = match self.read_u8()? {
            0xff => self.read_u64_le()?,
            0xfe => u64::from(self.read_u32_le()?),
            0xfd => u64::from(self.read_u16_le()?),
            b => u64::from(b),
        };
        Ok(VarInt(value))
    }

    /// Read a VarInt length prefix followed by that many bytes.
    ///
    /// A declared length larger than what remains fails with
    /// `LengthOverflow` before anything is allocated.
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], PrimitivesError> {
        let len = self.read_varint()?.value();
        let remaining = self.remaining();
        if len > remaining as u64 {
            return Err(PrimitivesError::LengthOverflow(len, remaining));
        }
        self.read_bytes(len as usize)
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Count of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

// ---------------------------------------------------------------------------
// BsvWriter
// ---------------------------------------------------------------------------

/// Growable output buffer for wire serialization.
#[derive(Debug, Default)]
pub struct BsvWriter {
    buf: Vec<u8>,
}

impl BsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BsvWriter { buf: Vec::with_capacity(capacity) }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_u64_le(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_varint(&mut self, varint: VarInt) {
        self.buf.extend_from_slice(&varint.to_bytes());
    }

    /// Write a VarInt length prefix followed by `bytes`.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_varint(VarInt::from(bytes.len()));
        self.write_bytes(bytes);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- VarInt ----

    #[test]
    fn test_varint_encodings() {
        let cases: &[(u64, &[u8])] = &[
            (0, &[0x00]),
            (252, &[0xfc]),
            (253, &[0xfd, 0xfd, 0x00]),
            (0xffff, &[0xfd, 0xff, 0xff]),
            (0x1_0000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
            (0xffff_ffff, &[0xfe, 0xff, 0xff, 0xff, 0xff]),
            (0x1_0000_0000, &[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]),
        ];
        for (value, expected) in cases {
            let vi = VarInt(*value);
            assert_eq!(vi.to_bytes(), expected.to_vec(), "encoding of {}", value);
            assert_eq!(vi.length(), expected.len());
            let (decoded, used) = VarInt::from_bytes(expected).unwrap();
            assert_eq!(decoded, vi);
            assert_eq!(used, expected.len());
        }
    }

    #[test]
    fn test_varint_truncated_marker() {
        assert!(matches!(
            VarInt::from_bytes(&[0xfe, 0x01]),
            Err(PrimitivesError::UnexpectedEof)
        ));
        assert!(VarInt::from_bytes(&[]).is_err());
    }

    // ---- reader / writer ----

    #[test]
    fn test_reader_writer_fields() {
        let mut w = BsvWriter::with_capacity(32);
        w.write_u8(0x42);
        w.write_u32_le(0xdead_beef);
        w.write_u64_le(3498);
        w.write_var_bytes(b"hello");
        assert_eq!(w.len(), 1 + 4 + 8 + 1 + 5);

        let data = w.into_bytes();
        let mut r = BsvReader::new(&data);
        assert_eq!(r.read_u8().unwrap(), 0x42);
        assert_eq!(r.read_u32_le().unwrap(), 0xdead_beef);
        assert_eq!(r.read_u64_le().unwrap(), 3498);
        assert_eq!(r.read_var_bytes().unwrap(), b"hello");
        assert_eq!(r.remaining(), 0);
        assert_eq!(r.position(), data.len());
    }

    #[test]
    fn test_reader_eof() {
        let mut r = BsvReader::new(&[0x01, 0x02]);
        assert!(r.read_u32_le().is_err());
        // A failed read does not advance the cursor.
        assert_eq!(r.position(), 0);
        assert_eq!(r.read_u16_le().unwrap(), 0x0201);
    }

    #[test]
    fn test_var_bytes_length_overflow() {
        // Claims 200 bytes, provides 2.
        let mut r = BsvReader::new(&[0xc8, 0xaa, 0xbb]);
        assert!(matches!(
            r.read_var_bytes(),
            Err(PrimitivesError::LengthOverflow(200, 2))
        ));
    }
}
