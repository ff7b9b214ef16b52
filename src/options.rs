use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::lz77::{DEFAULT_LOOK_AHEAD, MAX_LOOK_AHEAD, MAX_WINDOW_SIZE, MIN_LOOK_AHEAD};

/// Number of already-processed bytes a back-reference may reach into, within `1..=4095`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(u16);

impl WindowSize {
    pub const MAX: WindowSize = WindowSize(MAX_WINDOW_SIZE as u16);

    /// Rejects sizes outside `1..=4095`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_WINDOW_SIZE {
            return Err(Error::InvalidWindowSize(size));
        }
        Ok(WindowSize(size as u16))
    }

    /// Saturates into `1..=4095`.
    pub fn clamped(size: usize) -> Self {
        WindowSize(size.clamp(1, MAX_WINDOW_SIZE) as u16)
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Match finder used by the encoder. Both produce identical streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Exhaustive scan of every length and window offset.
    #[default]
    WindowScan,
    /// Hash chains keyed on the next two bytes.
    HashChain,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowScan => write!(f, "window-scan"),
            Self::HashChain => write!(f, "hash-chain"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "window-scan" | "scan" => Ok(Self::WindowScan),
            "hash-chain" | "chain" => Ok(Self::HashChain),
            _ => Err(format!("unknown match strategy: {s}. Available: window-scan, hash-chain")),
        }
    }
}

/// `EncoderOptions` is a common set of options that the encoder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    pub window_size: WindowSize,
    /// Matches are strictly shorter than this. The default of 15 yields lengths `2..=14`.
    pub look_ahead: usize,
    pub strategy: MatchStrategy,
}

impl EncoderOptions {
    pub fn with_window_size(window_size: WindowSize) -> Self {
        Self { window_size, ..Default::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_LOOK_AHEAD..=MAX_LOOK_AHEAD).contains(&self.look_ahead) {
            return Err(Error::InvalidLookAhead(self.look_ahead));
        }
        Ok(())
    }
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            window_size: WindowSize::default(),
            look_ahead: DEFAULT_LOOK_AHEAD,
            strategy: MatchStrategy::default(),
        }
    }
}
