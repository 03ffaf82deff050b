//! Fixed-width binary primitives shared by the native instruction codecs
//!
//! Integers are little-endian, addresses are raw 32 bytes and strings carry a
//! u64 little-endian length prefix followed by UTF-8 bytes with no terminator.

use crate::address::{ADDRESS_BYTES, Address};
use crate::derivation::Seed;
use crate::error::{CodecError, Result};

pub fn encode_u8(value: u8) -> [u8; 1] {
    [value]
}

pub fn encode_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

pub fn encode_address(address: &Address) -> [u8; ADDRESS_BYTES] {
    address.to_bytes()
}

/// Length-prefixed UTF-8 string
pub fn encode_string(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + s.len());
    out.extend_from_slice(&encode_u64(s.len() as u64));
    out.extend_from_slice(s.as_bytes());
    out
}

/// Cursor over an instruction payload
///
/// Every read either consumes exactly the bytes it needs or fails with
/// `TruncatedInput` without advancing. Bytes left over after the last field
/// are not an error.
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(CodecError::TruncatedInput { needed, remaining });
        }
        let start = self.offset;
        self.offset += needed;
        Ok(&self.data[start..self.offset])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.take_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.take_array().map(u64::from_le_bytes)
    }

    pub fn read_address(&mut self) -> Result<Address> {
        self.take_array().map(Address::new_from_array)
    }

    pub fn read_string(&mut self) -> Result<String> {
        let start = self.offset;
        let len = self.read_u64()?;
        let remaining = self.remaining();
        // A declared length that does not fit in usize can never be satisfied
        let needed = usize::try_from(len).unwrap_or(usize::MAX);
        if needed > remaining {
            self.offset = start;
            return Err(CodecError::TruncatedInput { needed, remaining });
        }
        let bytes = self.take(needed)?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => {
                self.offset = start;
                Err(CodecError::InvalidUtf8)
            }
        }
    }

    /// Reads a string and validates it against the seed length limit
    pub fn read_seed(&mut self) -> Result<Seed> {
        let s = self.read_string()?;
        Seed::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_integer_encodings_are_little_endian() {
        assert_eq!(encode_u8(7), [7]);
        assert_eq!(encode_u32(2), [2, 0, 0, 0]);
        assert_eq!(encode_u64(1000), [0xe8, 0x03, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_string_prefix() {
        let encoded = encode_string("seed");
        assert_eq!(&encoded[..8], &4u64.to_le_bytes());
        assert_eq!(&encoded[8..], b"seed");
        assert_eq!(encode_string(""), vec![0u8; 8]);
    }

    #[test]
    fn test_reader_sequence() {
        let address = Address::new_from_array([5u8; 32]);
        let mut buf = Vec::new();
        buf.extend_from_slice(&encode_u32(12));
        buf.extend_from_slice(&encode_u64(u64::MAX));
        buf.extend_from_slice(&encode_address(&address));
        buf.extend_from_slice(&encode_string("héllo"));
        buf.extend_from_slice(&encode_u8(255));

        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_u32().unwrap(), 12);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX);
        assert_eq!(reader.read_address().unwrap(), address);
        assert_eq!(reader.read_string().unwrap(), "héllo");
        assert_eq!(reader.read_u8().unwrap(), 255);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_truncated_reads() {
        let mut reader = WireReader::new(&[1, 2, 3]);
        assert_eq!(
            reader.read_u32(),
            Err(CodecError::TruncatedInput {
                needed: 4,
                remaining: 3
            })
        );
        // Failed read leaves the cursor untouched
        assert_eq!(reader.remaining(), 3);

        let mut reader = WireReader::new(&[]);
        assert_matches!(reader.read_address(), Err(CodecError::TruncatedInput { .. }));
    }

    #[test]
    fn test_string_length_exceeds_payload() {
        let mut buf = encode_u64(10).to_vec();
        buf.extend_from_slice(b"abc");
        let mut reader = WireReader::new(&buf);
        assert_eq!(
            reader.read_string(),
            Err(CodecError::TruncatedInput {
                needed: 10,
                remaining: 3
            })
        );
        assert_eq!(reader.remaining(), 11);

        let mut huge = encode_u64(u64::MAX).to_vec();
        huge.push(b'a');
        assert_matches!(
            WireReader::new(&huge).read_string(),
            Err(CodecError::TruncatedInput { .. })
        );
    }

    #[test]
    fn test_invalid_utf8_string() {
        let mut buf = encode_u64(2).to_vec();
        buf.extend_from_slice(&[0xff, 0xfe]);
        assert_eq!(
            WireReader::new(&buf).read_string(),
            Err(CodecError::InvalidUtf8)
        );
    }

    #[test]
    fn test_read_seed_enforces_limit() {
        let long = "x".repeat(33);
        let buf = encode_string(&long);
        assert_eq!(
            WireReader::new(&buf).read_seed(),
            Err(CodecError::SeedTooLong { len: 33 })
        );
    }
}
