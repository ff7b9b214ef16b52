//! Bit channel: MSB-first bit packing over byte sinks and sources.

use std::io::{self, Write};

/// Bit writer — MSB-first, emits each completed byte to the sink.
pub struct BitWriter<W> {
    inner: W,
    cur: u8,
    n_bits: u32,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, cur: 0, n_bits: 0, bits_written: 0 }
    }

    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.cur = (self.cur << 1) | bit as u8;
        self.n_bits += 1;
        self.bits_written += 1;
        if self.n_bits == 8 {
            self.inner.write_all(&[self.cur])?;
            self.cur = 0;
            self.n_bits = 0;
        }
        Ok(())
    }

    /// Write the low `width` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u8, width: u32) -> io::Result<()> {
        debug_assert!(width <= 8);
        for shift in (0..width).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    pub fn write_byte(&mut self, value: u8) -> io::Result<()> {
        if self.n_bits == 0 {
            // byte aligned
            self.bits_written += 8;
            return self.inner.write_all(&[value]);
        }
        self.write_bits(value, 8)
    }

    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Pad the last partial byte with zero bits, flush, and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        if self.n_bits > 0 {
            let byte = self.cur << (8 - self.n_bits);
            self.inner.write_all(&[byte])?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Bit reader — MSB-first, reads from a byte slice.
///
/// Reads return `None` once the source cannot supply the requested bits; nothing is consumed
/// in that case.
pub struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize, // bit position
}

impl<'a> BitReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn bits_left(&self) -> usize {
        self.buf.len() * 8 - self.pos
    }

    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.buf.get(self.pos >> 3)?;
        let bit = (byte >> (7 - (self.pos & 7))) & 1;
        self.pos += 1;
        Some(bit == 1)
    }

    /// Read `width` (at most 8) bits as an unsigned integer.
    pub fn read_bits(&mut self, width: u32) -> Option<u8> {
        debug_assert!(width <= 8);
        if self.bits_left() < width as usize {
            return None;
        }
        let mut value = 0u8;
        for _ in 0..width {
            // cannot fail, availability checked above
            let bit = self.read_bit()? as u8;
            value = (value << 1) | bit;
        }
        Some(value)
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.read_bits(8)
    }

    /// True when only zero padding of the final byte is left unread.
    pub fn at_end(&self) -> bool {
        let left = self.bits_left();
        if left == 0 {
            return true;
        }
        if left >= 8 {
            return false;
        }
        let last = self.buf[self.buf.len() - 1];
        last & ((1u8 << left) - 1) == 0
    }
}
