use nanorand::{BufferedRng, Rng, WyRand};

/// Source of the bytes used by the RND instruction.
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}

/// Default source, backed by nanorand's WyRand.
pub struct WyRandSource {
    rng: BufferedRng<WyRand, 8>,
}

impl WyRandSource {
    /// Seeded from system entropy.
    pub fn new() -> Self {
        WyRandSource {
            rng: BufferedRng::new(WyRand::new()),
        }
    }

    /// Same seed, same byte sequence.
    pub fn with_seed(seed: u64) -> Self {
        WyRandSource {
            rng: BufferedRng::new(WyRand::new_seed(seed)),
        }
    }
}

impl Default for WyRandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for WyRandSource {
    fn next_byte(&mut self) -> u8 {
        let mut n = [0u8; 1];
        self.rng.fill(&mut n);
        n[0]
    }
}

/// Replays a fixed list of bytes, starting over when it runs out.
/// An empty list yields zeroes.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    bytes: Vec<u8>,
    pos: usize,
}

impl FixedSequence {
    pub fn new(bytes: Vec<u8>) -> Self {
        FixedSequence { bytes, pos: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_byte(&mut self) -> u8 {
        if self.bytes.is_empty() {
            return 0;
        }
        let b = self.bytes[self.pos];
        self.pos = (self.pos + 1) % self.bytes.len();
        b
    }
}
