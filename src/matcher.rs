//! Match finding over the sliding window.
//!
//! Every finder must return exactly what [`WindowScan`] returns: the longest match, and among
//! the longest the one with the largest distance. The encoded stream depends on that choice.

use crate::lz77::MIN_MATCH_LENGTH;

/// A back-reference candidate for the current position.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Match {
    pub distance: usize,
    pub length: usize,
}

pub trait MatchFinder {
    /// Best match for `data[pos..]`, or `None` when no match of at least two bytes exists.
    ///
    /// The encoder calls this with strictly increasing positions.
    fn find(&mut self, data: &[u8], pos: usize) -> Option<Match>;
}

/// Longest candidate length at `pos`: below the look-ahead and within the input.
#[inline]
pub(crate) fn max_length(data: &[u8], pos: usize, look_ahead: usize) -> usize {
    look_ahead.saturating_sub(1).min(data.len() - pos)
}

/// Does repeating `data[src..pos]` reproduce `data[pos..pos + length]`?
fn tiled_eq(data: &[u8], src: usize, pos: usize, length: usize) -> bool {
    let period = pos - src;
    let tile = &data[src..pos];
    data[pos..pos + length].iter().enumerate().all(|(k, &x)| tile[k % period] == x)
}

/// Exhaustive scan: every length from 2 upward, and for each length every source offset from
/// the far end of the window to the nearest.
///
/// Cost per position is O(window * look_ahead^2); fine for small windows only.
pub struct WindowScan {
    window_size: usize,
    look_ahead: usize,
}

impl WindowScan {
    pub fn new(window_size: usize, look_ahead: usize) -> Self {
        Self { window_size, look_ahead }
    }
}

impl MatchFinder for WindowScan {
    fn find(&mut self, data: &[u8], pos: usize) -> Option<Match> {
        let mut best = Match { distance: 0, length: 0 };
        let start = pos.saturating_sub(self.window_size);

        for length in MIN_MATCH_LENGTH..=max_length(data, pos, self.look_ahead) {
            for src in start..pos {
                // only a strictly longer match replaces the current best
                if length > best.length && tiled_eq(data, src, pos, length) {
                    best = Match { distance: pos - src, length };
                }
            }
        }

        if best.length > 0 && best.distance > 0 {
            Some(best)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(data: &[u8], pos: usize, window_size: usize) -> Option<Match> {
        WindowScan::new(window_size, 15).find(data, pos)
    }

    #[test]
    fn test_no_window_no_match() {
        assert_eq!(scan(b"aaaa", 0, 4095), None);
    }

    #[test]
    fn test_last_byte_never_matches() {
        assert_eq!(scan(b"aaaa", 3, 4095), None);
    }

    #[test]
    fn test_self_overlapping_match() {
        assert_eq!(scan(b"AAAAA", 1, 4095), Some(Match { distance: 1, length: 4 }));
    }

    #[test]
    fn test_tiled_period_two() {
        // "ab" repeated covers "ababa"
        assert_eq!(scan(b"abababa", 2, 4095), Some(Match { distance: 2, length: 5 }));
    }

    #[test]
    fn test_longer_match_wins() {
        let data = b"abcXabcdYabcd";
        // "abcd" at 4 beats "abc" at 0
        assert_eq!(scan(data, 9, 4095), Some(Match { distance: 5, length: 4 }));
    }

    #[test]
    fn test_ties_go_to_farthest_source() {
        let data = b"abXabYab";
        assert_eq!(scan(data, 6, 4095), Some(Match { distance: 6, length: 2 }));
        // a narrower window hides the farther copy
        assert_eq!(scan(data, 6, 3), Some(Match { distance: 3, length: 2 }));
    }

    #[test]
    fn test_window_bound() {
        let data = b"abcdefab";
        assert_eq!(scan(data, 6, 5), None);
        assert_eq!(scan(data, 6, 6), Some(Match { distance: 6, length: 2 }));
    }

    #[test]
    fn test_length_cap() {
        let data = [7u8; 40];
        assert_eq!(scan(&data, 1, 4095), Some(Match { distance: 1, length: 14 }));
        let short = WindowScan::new(4095, 4).find(&data, 1);
        assert_eq!(short, Some(Match { distance: 1, length: 3 }));
    }
}
