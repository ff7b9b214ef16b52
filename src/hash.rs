pub const TABLE_SIZE: usize = 1 << 16;

#[derive(Clone, Copy)]
pub struct RunningHasher {
    hash: usize,
}

impl Default for RunningHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningHasher {
    /// 2-byte hasher, i.e., the hash is a function of the last two bytes
    /// uses 16-bits hash, so shift is 8-bits and two bytes never collide
    const MASK: usize = TABLE_SIZE - 1;
    const SHIFT: usize = 8;

    pub fn new() -> Self {
        Self { hash: 0 }
    }

    pub fn update(&mut self, x: u8) -> usize {
        self.hash = (self.hash << Self::SHIFT) ^ x as usize;
        self.hash &= Self::MASK;
        self.hash
    }

    pub fn get(&self) -> usize {
        self.hash
    }
}

#[test]
fn test_rolling_hash() {
    let mut hasher = RunningHasher::new();
    hasher.update(b'x');
    hasher.update(b'a');
    let h1 = hasher.update(b'b');

    hasher.update(b'a');
    let h2 = hasher.update(b'b');

    assert_eq!(h1, h2);
    assert_eq!(hasher.get(), h2);
}

#[test]
fn test_distinct_pairs_distinct_hashes() {
    let mut hasher = RunningHasher::new();
    hasher.update(b'a');
    let ab = hasher.update(b'b');
    let ba = hasher.update(b'a');
    assert_ne!(ab, ba);
}
