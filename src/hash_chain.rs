use crate::hash::{RunningHasher, TABLE_SIZE};
use crate::matcher::{max_length, Match, MatchFinder};
use crate::lz77::MIN_MATCH_LENGTH;

/// Positions grouped by the two bytes that start there, newest first.
///
/// Entries are stored as `pos + 1` so that 0 means "none".
pub struct HashChain {
    table: Vec<usize>,
    chain: Vec<usize>,
}

impl Default for HashChain {
    fn default() -> Self {
        Self::new()
    }
}

impl HashChain {
    pub fn new() -> Self {
        Self { table: vec![0; TABLE_SIZE], chain: Vec::new() }
    }

    /// hash: masked hash
    /// pos: must be one past the last added position
    pub fn add(&mut self, hash: usize, pos: usize) -> Option<usize> {
        debug_assert_eq!(pos, self.chain.len());
        let prev = self.table[hash];
        self.table[hash] = pos + 1;
        self.chain.push(prev);
        prev.checked_sub(1)
    }

    pub fn head(&self, hash: usize) -> Option<usize> {
        self.table[hash].checked_sub(1)
    }

    pub fn get(&self, pos: usize) -> Option<usize> {
        self.chain[pos].checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

/// Finds the same matches as [`WindowScan`](crate::matcher::WindowScan) by walking the chain of
/// earlier positions that share the next two bytes.
pub struct HashChainFinder {
    window_size: usize,
    look_ahead: usize,
    hasher: RunningHasher,
    hash_chain: HashChain,
}

impl HashChainFinder {
    pub fn new(window_size: usize, look_ahead: usize) -> Self {
        Self {
            window_size,
            look_ahead,
            hasher: RunningHasher::new(),
            hash_chain: HashChain::new(),
        }
    }

    /// hash every position before `pos`
    fn advance_hash(&mut self, data: &[u8], pos: usize) {
        while self.hash_chain.len() < pos {
            let x = self.hash_chain.len();
            if x == 0 {
                self.hasher.update(data[0]);
            }
            let h = self.hasher.update(data[x + 1]);
            self.hash_chain.add(h, x);
        }
    }

    fn match_length(data: &[u8], src: usize, pos: usize, upper_bound: usize) -> usize {
        // reading past `pos` from `src` is the overlapping copy
        (src..)
            .zip(pos..pos + upper_bound)
            .take_while(|&(a, b)| data[a] == data[b])
            .count()
    }
}

impl MatchFinder for HashChainFinder {
    fn find(&mut self, data: &[u8], pos: usize) -> Option<Match> {
        self.advance_hash(data, pos);

        let upper_bound = max_length(data, pos, self.look_ahead);
        if pos == 0 || upper_bound < MIN_MATCH_LENGTH {
            return None;
        }

        let mut probe = self.hasher;
        let h = probe.update(data[pos + 1]);
        let start = pos.saturating_sub(self.window_size);

        let mut best: Option<Match> = None;
        let mut next = self.hash_chain.head(h);
        while let Some(src) = next {
            if src < start {
                break;
            }
            let length = Self::match_length(data, src, pos, upper_bound);
            // nearest first, so ties move the best farther back
            if length >= MIN_MATCH_LENGTH && best.map_or(true, |b| length >= b.length) {
                best = Some(Match { distance: pos - src, length });
            }
            next = self.hash_chain.get(src);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::WindowScan;

    #[test]
    fn test_chain_links() {
        let mut chain = HashChain::new();
        assert_eq!(chain.add(7, 0), None);
        assert_eq!(chain.add(9, 1), None);
        assert_eq!(chain.add(7, 2), Some(0));
        assert_eq!(chain.head(7), Some(2));
        assert_eq!(chain.get(2), Some(0));
        assert_eq!(chain.get(0), None);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_agrees_with_window_scan() {
        let data = b"abracadabra abracadabra, abababababab xxxxxxxxxxxxxxxxxxxxxxxxx abra";
        for window_size in [1, 2, 5, 16, 4095] {
            let mut scan = WindowScan::new(window_size, 15);
            let mut chain = HashChainFinder::new(window_size, 15);
            for pos in 0..data.len() {
                assert_eq!(
                    chain.find(data, pos),
                    scan.find(data, pos),
                    "pos {} window {}",
                    pos,
                    window_size
                );
            }
        }
    }

    #[test]
    fn test_skipped_positions_are_hashed() {
        let data = b"xyzxyzxyz";
        let mut chain = HashChainFinder::new(4095, 15);
        assert_eq!(chain.find(data, 6), Some(Match { distance: 6, length: 3 }));
    }
}
