//! Wire framing of tokens.
//!
//! ```text
//! literal := bit(0) byte
//! copy    := bit(1) byte(distance >> 4) byte((distance & 0xF) << 4 | length)
//! ```

use std::io::{self, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::lz77::Lz77;

const FLAG_LITERAL: bool = false;
const FLAG_COPY: bool = true;

/// Pack a 12-bit distance and a 4-bit length into the two field bytes of a copy token.
pub fn pack_copy(distance: u16, length: u8) -> [u8; 2] {
    debug_assert!(distance < 1 << 12);
    debug_assert!(length < 1 << 4);
    [(distance >> 4) as u8, (((distance & 0x0F) as u8) << 4) | (length & 0x0F)]
}

/// Inverse of [`pack_copy`]: returns `(distance, length)`.
pub fn unpack_copy(fields: [u8; 2]) -> (u16, u8) {
    let distance = ((fields[0] as u16) << 4) | (fields[1] >> 4) as u16;
    let length = fields[1] & 0x0F;
    (distance, length)
}

pub fn write_token<W: Write>(writer: &mut BitWriter<W>, token: Lz77) -> io::Result<()> {
    match token {
        Lz77::Literal(x) => {
            writer.write_bit(FLAG_LITERAL)?;
            writer.write_byte(x)
        }
        Lz77::Copy { distance, length } => {
            let [hi, lo] = pack_copy(distance, length);
            writer.write_bit(FLAG_COPY)?;
            writer.write_byte(hi)?;
            writer.write_byte(lo)
        }
    }
}

/// Reads the next token. `Ok(None)` is a clean end of stream at a token boundary.
pub fn read_token(reader: &mut BitReader<'_>) -> Result<Option<Lz77>> {
    if reader.at_end() {
        return Ok(None);
    }
    let flag = reader.read_bit().ok_or(Error::TruncatedStream)?;
    let token = if flag == FLAG_COPY {
        let hi = reader.read_byte().ok_or(Error::TruncatedStream)?;
        let lo = reader.read_byte().ok_or(Error::TruncatedStream)?;
        let (distance, length) = unpack_copy([hi, lo]);
        Lz77::Copy { distance, length }
    } else {
        Lz77::Literal(reader.read_byte().ok_or(Error::TruncatedStream)?)
    };
    Ok(Some(token))
}

/// Adapts a bit reader into an iterator of tokens. Stops after the first error.
pub struct TokenReader<'a> {
    reader: BitReader<'a>,
    done: bool,
}

impl<'a> TokenReader<'a> {
    pub fn new(reader: BitReader<'a>) -> Self {
        Self { reader, done: false }
    }
}

impl<'a> Iterator for TokenReader<'a> {
    type Item = Result<Lz77>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match read_token(&mut self.reader) {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tokens: &[Lz77]) -> Vec<u8> {
        let mut writer = BitWriter::new(Vec::new());
        for &token in tokens {
            write_token(&mut writer, token).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_pack_copy_layout() {
        assert_eq!(pack_copy(0xABC, 0x7), [0xAB, 0xC7]);
        assert_eq!(unpack_copy([0xAB, 0xC7]), (0xABC, 0x7));
        assert_eq!(pack_copy(1, 2), [0x00, 0x12]);
        assert_eq!(pack_copy(4095, 14), [0xFF, 0xFE]);
    }

    #[test]
    fn test_literal_bits() {
        // 0 0100_0001, then 7 bits of padding
        assert_eq!(frame(&[Lz77::Literal(0x41)]), vec![0x20, 0x80]);
    }

    #[test]
    fn test_copy_bits() {
        // 1 0000_0000 0001_0011, then 7 bits of padding
        let bytes = frame(&[Lz77::Copy { distance: 1, length: 3 }]);
        assert_eq!(bytes, vec![0x80, 0x09, 0x80]);
    }

    #[test]
    fn test_token_reader() {
        let tokens = vec![
            Lz77::Literal(b'a'),
            Lz77::Literal(b'b'),
            Lz77::Copy { distance: 2, length: 6 },
            Lz77::Literal(0),
        ];
        let bytes = frame(&tokens);
        let decoded: Vec<Lz77> = TokenReader::new(BitReader::new(&bytes))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(decoded, tokens);
    }

    #[test]
    fn test_truncated_copy() {
        // flag 1 followed by only 7 bits
        let mut reader = BitReader::new(&[0x80]);
        assert!(matches!(read_token(&mut reader), Err(Error::TruncatedStream)));
    }

    #[test]
    fn test_truncated_literal() {
        let mut reader = BitReader::new(&[0x20]);
        assert!(matches!(read_token(&mut reader), Err(Error::TruncatedStream)));
    }

    #[test]
    fn test_reader_fuses_after_error() {
        let mut iter = TokenReader::new(BitReader::new(&[0x80, 0x00]));
        assert!(matches!(iter.next(), Some(Err(Error::TruncatedStream))));
        assert!(iter.next().is_none());
    }
}
