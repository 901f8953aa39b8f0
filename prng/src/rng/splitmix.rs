//! splitmix64 random number generator
//!
//! A counter-based generator: each draw adds a fixed odd increment (the
//! golden gamma) to a 64-bit counter and runs the result through a
//! two-round finalizer.
//!
//! # Period
//!
//! The counter visits all 2^64 values before repeating, so the period is
//! exactly 2^64 and every state, zero included, is valid.
//!
//! # Uses
//!
//! - Standalone generator ([`UniformGenerator`])
//! - Seed expander for [`Xoroshiro128Plus`](super::Xoroshiro128Plus)
//!   ([`SeedSequence`])

use super::{pack_words, SeedSequence, UniformGenerator};
use serde::{Deserialize, Serialize};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;

/// Deterministic counter-based generator using splitmix64
///
/// # Example
/// ```
/// use xoroshiro_prng::SplitMix64;
///
/// let mut rng = SplitMix64::new(0);
/// assert_eq!(rng.next(), 0xe220a8397b1dcdaf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    /// Counter (64-bit)
    state: u64,
}

impl SplitMix64 {
    /// Create a new generator whose counter starts at `seed`
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator from two words of a seed sequence
    ///
    /// The first word becomes the low half of the counter, the second the
    /// high half.
    pub fn from_seed_sequence<S: SeedSequence + ?Sized>(seq: &mut S) -> Self {
        let mut rng = Self::new(Self::DEFAULT_SEED);
        rng.seed_from(seq);
        rng
    }

    /// Overwrite the counter with `seed`
    pub fn seed(&mut self, seed: u64) {
        self.state = seed;
    }

    /// Overwrite the counter with two words pulled from `seq`
    pub fn seed_from<S: SeedSequence + ?Sized>(&mut self, seq: &mut S) {
        let mut words = [0u32; 2];
        seq.generate(&mut words);
        self.state = pack_words(words[0], words[1]);
    }

    /// Generate next random u64 value
    ///
    /// The output depends only on the counter before the call.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
        z ^ (z >> 31)
    }

    /// Get current counter (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use xoroshiro_prng::SplitMix64;
    ///
    /// let mut rng = SplitMix64::new(12345);
    /// rng.next();
    ///
    /// let mut replay = SplitMix64::new(rng.state());
    /// assert_eq!(replay.next(), rng.next());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for SplitMix64 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl UniformGenerator for SplitMix64 {
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;
    const DEFAULT_SEED: u64 = 0;

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    /// Skips ahead in O(1): n draws move the counter by n golden gammas.
    fn discard(&mut self, n: u64) {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA.wrapping_mul(n));
    }
}

impl SeedSequence for SplitMix64 {
    /// Low half of each draw first, then the high half. With an odd
    /// number of slots the high half of the last draw is dropped.
    fn generate(&mut self, dest: &mut [u32]) {
        for chunk in dest.chunks_mut(2) {
            let value = self.next();
            chunk[0] = value as u32;
            if let Some(high) = chunk.get_mut(1) {
                *high = (value >> 32) as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vector_seed_zero() {
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next(), 0xe220a8397b1dcdaf);
        assert_eq!(rng.next(), 0x6e789e6aa1b965f4);
        assert_eq!(rng.next(), 0x06c45d188009454f);
    }

    #[test]
    fn test_counter_advances_by_golden_gamma() {
        let mut rng = SplitMix64::new(0);
        rng.next();
        assert_eq!(rng.state(), GOLDEN_GAMMA);
        rng.next();
        assert_eq!(rng.state(), GOLDEN_GAMMA.wrapping_mul(2));
    }

    #[test]
    fn test_counter_wraps() {
        let mut rng = SplitMix64::new(u64::MAX);
        rng.next();
        assert_eq!(rng.state(), GOLDEN_GAMMA - 1);
    }

    #[test]
    fn test_default_uses_seed_zero() {
        assert_eq!(SplitMix64::default(), SplitMix64::new(0));
    }

    #[test]
    fn test_seed_overwrites_state() {
        let mut rng = SplitMix64::new(5);
        rng.next();
        rng.seed(42);
        assert_eq!(rng.state(), 42);
    }

    #[test]
    fn test_generate_empty_buffer_draws_nothing() {
        let mut rng = SplitMix64::new(9);
        rng.generate(&mut [0u32; 0]);
        assert_eq!(rng.state(), 9);
    }

    #[test]
    fn test_generate_odd_buffer_drops_last_high_half() {
        let mut rng = SplitMix64::new(1);
        let mut words = [0u32; 3];
        rng.generate(&mut words);

        assert_eq!(words, [0x89025cc1, 0x910a2dec, 0x658eec67]);
        // Two draws consumed
        assert_eq!(rng.state(), GOLDEN_GAMMA.wrapping_mul(2).wrapping_add(1));
    }
}
