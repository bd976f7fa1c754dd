//! Fixed-schema binary codec.
//!
//! A value serializes as the concatenation of its fields in declared
//! order. Every field handled here is fixed-length, so there are no
//! length prefixes and decoding is a single forward pass.

use crate::error::DecodeError;

/// Append-only byte sink.
#[derive(Clone, Debug, Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Append raw bytes without a length prefix.
    pub fn write_fixed(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Forward-only cursor over a byte slice.
#[derive(Clone, Debug)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        BinaryReader { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [byte] = self.read_fixed::<1>()?;
        Ok(byte)
    }

    /// Read exactly `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(DecodeError::UnexpectedEof { needed: n, remaining });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }
}

/// Types with a fixed binary layout.
pub trait BinarySerialize {
    /// Append this value's fields to `writer` in declared order.
    fn serialize_into(&self, writer: &mut BinaryWriter);
}

/// Types that can be read back from their binary layout.
pub trait BinaryDeserialize: Sized {
    /// Consume exactly this value's bytes from `reader`.
    fn deserialize_from(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError>;
}

impl<const N: usize> BinarySerialize for [u8; N] {
    fn serialize_into(&self, writer: &mut BinaryWriter) {
        writer.write_fixed(self);
    }
}

impl<const N: usize> BinaryDeserialize for [u8; N] {
    fn deserialize_from(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
        reader.read_fixed::<N>()
    }
}

/// Serialize a value to bytes.
pub fn serialize<T: BinarySerialize + ?Sized>(value: &T) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    value.serialize_into(&mut writer);
    writer.into_bytes()
}

/// Deserialize a value from bytes.
///
/// Returns an error if:
/// - The bytes end before the value is complete
/// - A tag byte is not recognized
/// - There are trailing bytes after the value
pub fn deserialize<T: BinaryDeserialize>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut reader = BinaryReader::new(bytes);
    let value = T::deserialize_from(&mut reader)?;
    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes(reader.remaining()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Pair {
        tag: u8,
        body: [u8; 4],
    }

    impl BinarySerialize for Pair {
        fn serialize_into(&self, writer: &mut BinaryWriter) {
            writer.write_u8(self.tag);
            self.body.serialize_into(writer);
        }
    }

    impl BinaryDeserialize for Pair {
        fn deserialize_from(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
            let tag = reader.read_u8()?;
            let body = reader.read_fixed()?;
            Ok(Pair { tag, body })
        }
    }

    #[test]
    fn test_fields_concatenated_in_order() {
        let value = Pair { tag: 9, body: [1, 2, 3, 4] };
        assert_eq!(serialize(&value), vec![9, 1, 2, 3, 4]);
    }

    #[test]
    fn test_roundtrip() {
        let value = Pair { tag: 0xAB, body: [0xFF; 4] };
        let recovered: Pair = deserialize(&serialize(&value)).unwrap();
        assert_eq!(value, recovered);
    }

    #[test]
    fn test_reader_advances() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.read_bytes(2).unwrap(), &[2, 3]);
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.read_fixed::<2>().unwrap(), [4, 5]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_past_end() {
        let data = [1u8, 2, 3];
        let mut reader = BinaryReader::new(&data);

        let result = reader.read_fixed::<4>();
        assert_eq!(result, Err(DecodeError::UnexpectedEof { needed: 4, remaining: 3 }));

        // A failed read does not consume anything.
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn test_read_u8_empty() {
        let mut reader = BinaryReader::new(&[]);
        assert!(matches!(
            reader.read_u8(),
            Err(DecodeError::UnexpectedEof { needed: 1, remaining: 0 })
        ));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = serialize(&Pair { tag: 1, body: [0; 4] });
        bytes.push(0xFF);

        let result: Result<Pair, _> = deserialize(&bytes);
        assert_eq!(result, Err(DecodeError::TrailingBytes(1)));
    }

    #[test]
    fn test_writer_len() {
        let mut writer = BinaryWriter::with_capacity(8);
        assert!(writer.is_empty());
        writer.write_u8(0);
        writer.write_fixed(&[1, 2, 3]);
        assert_eq!(writer.len(), 4);
    }
}
