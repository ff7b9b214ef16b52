use std::io::Write;

use log::{debug, trace};

use crate::bitio::BitReader;
use crate::error::{malformed_error, Result};
use crate::lz77::Lz77;
use crate::token::TokenReader;

/// Rebuilds the original bytes from a bit stream.
///
/// All output is kept in an append-only buffer, since a copy token may reach back to any
/// earlier byte within its distance.
pub struct Decoder<'a> {
    tokens: TokenReader<'a>,
    buf: Vec<u8>,
    pos: usize, // next byte handed out by the iterator
    n_tokens: usize,
    failed: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            tokens: TokenReader::new(BitReader::new(data)),
            buf: Vec::with_capacity(data.len() * 2),
            pos: 0,
            n_tokens: 0,
            failed: false,
        }
    }

    /// Decode one token and return the bytes it appended. `Ok(None)` at end of stream.
    pub fn read_token(&mut self) -> Result<Option<&[u8]>> {
        if self.failed {
            return Ok(None);
        }
        let token = match self.tokens.next() {
            Some(token) => token?,
            None => return Ok(None),
        };
        let begin = self.buf.len();
        match token {
            Lz77::Literal(x) => self.buf.push(x),
            Lz77::Copy { distance, length } => {
                let distance = distance as usize;
                if distance == 0 || distance > self.buf.len() {
                    self.failed = true;
                    return if distance == 0 {
                        malformed_error("copy distance is zero")
                    } else {
                        malformed_error("copy reaches before start of output")
                    };
                }
                // byte by byte: the source may run into bytes appended by this same copy
                for _ in 0..length {
                    let x = self.buf[self.buf.len() - distance];
                    self.buf.push(x);
                }
            }
        }
        trace!("token: {:?}\toutput: {}", token, self.buf.len());
        self.n_tokens += 1;
        Ok(Some(&self.buf[begin..]))
    }

    /// Bytes reconstructed so far.
    pub fn output(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_output(self) -> Vec<u8> {
        self.buf
    }

    /// Decode to the end of the stream.
    pub fn decode_all(mut self) -> Result<Vec<u8>> {
        while self.read_token()?.is_some() {}
        debug!("decoded {} tokens into {} bytes", self.n_tokens, self.buf.len());
        Ok(self.buf)
    }

    /// Decode to the end of the stream, writing each token's bytes to `sink` as they appear.
    pub fn decode_into<W: Write>(mut self, mut sink: W) -> Result<W> {
        while let Some(span) = self.read_token()? {
            sink.write_all(span)?;
        }
        sink.flush()?;
        debug!("decoded {} tokens into {} bytes", self.n_tokens, self.buf.len());
        Ok(sink)
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos >= self.buf.len() {
            match self.read_token() {
                Ok(Some(_)) => {}
                Ok(None) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
        let x = self.buf[self.pos];
        self.pos += 1;
        Some(Ok(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitio::BitWriter;
    use crate::error::Error;
    use crate::token::write_token;

    fn frame(tokens: &[Lz77]) -> Vec<u8> {
        let mut writer = BitWriter::new(Vec::new());
        for &token in tokens {
            write_token(&mut writer, token).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_empty_stream() {
        assert!(Decoder::new(&[]).decode_all().unwrap().is_empty());
    }

    #[test]
    fn test_self_overlapping_copy() {
        let data = frame(&[
            Lz77::Literal(b'A'),
            Lz77::Literal(b'A'),
            Lz77::Copy { distance: 1, length: 3 },
        ]);
        assert_eq!(Decoder::new(&data).decode_all().unwrap(), b"AAAAA");
    }

    #[test]
    fn test_period_two_copy() {
        let data = frame(&[
            Lz77::Literal(b'a'),
            Lz77::Literal(b'b'),
            Lz77::Copy { distance: 2, length: 7 },
        ]);
        assert_eq!(Decoder::new(&data).decode_all().unwrap(), b"ababababa");
    }

    #[test]
    fn test_zero_length_copy_appends_nothing() {
        let data = frame(&[Lz77::Literal(b'z'), Lz77::Copy { distance: 1, length: 0 }]);
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.read_token().unwrap(), Some(&b"z"[..]));
        assert_eq!(decoder.read_token().unwrap(), Some(&b""[..]));
        assert_eq!(decoder.read_token().unwrap(), None);
        assert_eq!(decoder.output(), b"z");
    }

    #[test]
    fn test_copy_before_start() {
        let data = frame(&[Lz77::Literal(b'a'), Lz77::Copy { distance: 2, length: 2 }]);
        assert!(matches!(Decoder::new(&data).decode_all(), Err(Error::MalformedStream(_))));
    }

    #[test]
    fn test_copy_distance_zero() {
        let data = frame(&[
            Lz77::Literal(b'a'),
            Lz77::Copy { distance: 0, length: 2 },
            Lz77::Literal(b'b'),
        ]);
        let mut decoder = Decoder::new(&data);
        assert!(decoder.read_token().is_ok());
        assert!(matches!(decoder.read_token(), Err(Error::MalformedStream(_))));
        // nothing after a malformed token
        assert!(matches!(decoder.read_token(), Ok(None)));
    }

    #[test]
    fn test_truncated_mid_copy() {
        let mut data = frame(&[Lz77::Literal(b'a'), Lz77::Copy { distance: 1, length: 5 }]);
        data.pop();
        data.pop();
        assert!(matches!(Decoder::new(&data).decode_all(), Err(Error::TruncatedStream)));
    }

    #[test]
    fn test_iterator_yields_then_errors() {
        let mut data = frame(&[
            Lz77::Literal(b'a'),
            Lz77::Literal(b'b'),
            Lz77::Copy { distance: 1, length: 5 },
        ]);
        data.truncate(data.len() - 2);
        let mut decoder = Decoder::new(&data);
        assert_eq!(decoder.next().unwrap().unwrap(), b'a');
        assert_eq!(decoder.next().unwrap().unwrap(), b'b');
        assert!(matches!(decoder.next(), Some(Err(Error::TruncatedStream))));
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_decode_into_sink() {
        let data = frame(&[Lz77::Literal(b'x'), Lz77::Copy { distance: 1, length: 9 }]);
        let out = Decoder::new(&data).decode_into(Vec::new()).unwrap();
        assert_eq!(out, vec![b'x'; 10]);
    }
}
