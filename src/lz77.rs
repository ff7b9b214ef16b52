/// 12 bits of distance.
pub const MAX_WINDOW_SIZE: usize = (1 << 12) - 1; // 4095
/// Matches are strictly shorter than the look-ahead.
pub const DEFAULT_LOOK_AHEAD: usize = (1 << 4) - 1; // 15
/// Largest look-ahead whose longest match still fits the 4-bit length field.
pub const MAX_LOOK_AHEAD: usize = 1 << 4;
pub const MIN_LOOK_AHEAD: usize = MIN_MATCH_LENGTH + 1;
pub const MIN_MATCH_LENGTH: usize = 2;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Lz77 {
    Literal(u8),
    Copy {
        distance: u16, // 1~4095
        length: u8,    // 2~14 from the encoder, any 4-bit value on the wire
    },
}

impl Lz77 {
    /// Number of output bytes this token produces.
    pub fn len(&self) -> usize {
        match *self {
            Lz77::Literal(_) => 1,
            Lz77::Copy { length, .. } => length as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lz77 {
    fn default() -> Self {
        Self::Literal(0)
    }
}
