use std::io::Write;

use log::{debug, trace};

use crate::bitio::BitWriter;
use crate::error::Result;
use crate::hash_chain::HashChainFinder;
use crate::lz77::Lz77;
use crate::matcher::{MatchFinder, WindowScan};
use crate::options::{EncoderOptions, MatchStrategy};
use crate::token::write_token;

/// Greedy tokenizer: at each position take the finder's match if there is one, otherwise a
/// literal. Yields tokens until the input is consumed.
pub struct Encoder<'a> {
    data: &'a [u8],
    search_pos: usize,
    finder: Box<dyn MatchFinder + 'a>,
}

impl<'a> Encoder<'a> {
    pub fn new(data: &'a [u8], options: &EncoderOptions) -> Result<Self> {
        options.validate()?;
        let window_size = options.window_size.get();
        let finder: Box<dyn MatchFinder> = match options.strategy {
            MatchStrategy::WindowScan => Box::new(WindowScan::new(window_size, options.look_ahead)),
            MatchStrategy::HashChain => {
                Box::new(HashChainFinder::new(window_size, options.look_ahead))
            }
        };
        Ok(Self::with_finder(data, finder))
    }

    pub fn with_finder(data: &'a [u8], finder: Box<dyn MatchFinder + 'a>) -> Self {
        Self { data, search_pos: 0, finder }
    }

    /// Input bytes consumed so far.
    pub fn len(&self) -> usize {
        self.search_pos
    }

    pub fn is_empty(&self) -> bool {
        self.search_pos == 0
    }
}

impl Iterator for Encoder<'_> {
    type Item = Lz77;

    fn next(&mut self) -> Option<Self::Item> {
        if self.search_pos >= self.data.len() {
            return None;
        }

        let token = match self.finder.find(self.data, self.search_pos) {
            Some(m) => Lz77::Copy { distance: m.distance as u16, length: m.length as u8 },
            None => Lz77::Literal(self.data[self.search_pos]),
        };
        trace!("pos: {}\ttoken: {:?}", self.search_pos, token);
        self.search_pos += token.len();
        Some(token)
    }
}

/// Encode `data` and write the bit stream to `sink`. Returns the sink and the number of bytes
/// written to it.
pub fn encode_into<W: Write>(data: &[u8], options: &EncoderOptions, sink: W) -> Result<(W, u64)> {
    let encoder = Encoder::new(data, options)?;
    let mut writer = BitWriter::new(sink);
    let (mut literals, mut copies) = (0usize, 0usize);

    for token in encoder {
        match token {
            Lz77::Literal(_) => literals += 1,
            Lz77::Copy { .. } => copies += 1,
        }
        write_token(&mut writer, token)?;
    }

    let n_bytes = writer.bits_written().div_ceil(8);
    debug!(
        "encoded {} bytes into {} bytes ({} literals, {} copies, window {}, {})",
        data.len(),
        n_bytes,
        literals,
        copies,
        options.window_size,
        options.strategy
    );
    Ok((writer.finish()?, n_bytes))
}
