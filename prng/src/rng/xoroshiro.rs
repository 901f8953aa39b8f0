//! xoroshiro128+ random number generator
//!
//! Two 64-bit state words, period 2^128 - 1. This is the default source of
//! randomness; [`SplitMix64`] only expands seeds for it.
//!
//! # Algorithm
//!
//! Output is `s0 + s1` (wrapping). The transition is xor/rotate/shift
//! (a = 55, b = 14, c = 36), computed entirely from the old pair.
//!
//! # Degenerate state
//!
//! `(0, 0)` is absorbing: every draw returns 0 and the state never leaves
//! it. Seeding through `SplitMix64` makes that state astronomically unlikely,
//! but [`Xoroshiro128Plus::from_state`] will accept it without complaint.
//!
//! # Streams
//!
//! [`Xoroshiro128Plus::jump`] moves the state 2^64 draws ahead, giving
//! non-overlapping sub-streams for parallel consumers.

use super::{pack_words, SeedSequence, SplitMix64, UniformGenerator};
use serde::{Deserialize, Serialize};

/// Jump polynomial for 2^64 draws, low word first
const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

/// Deterministic long-period generator using xoroshiro128+
///
/// # Example
/// ```
/// use xoroshiro_prng::Xoroshiro128Plus;
///
/// let mut rng = Xoroshiro128Plus::new(1);
/// assert_eq!(rng.next(), 0x4ff5bb8dee914928);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    /// Create a new RNG seeded through `SplitMix64::new(seed)`
    ///
    /// The state words are the first two outputs of the mixer.
    pub fn new(seed: u64) -> Self {
        let mut mixer = SplitMix64::new(seed);
        Self::from_seed_sequence(&mut mixer)
    }

    /// Create a RNG from four words of a seed sequence
    pub fn from_seed_sequence<S: SeedSequence + ?Sized>(seq: &mut S) -> Self {
        let mut rng = Self { s0: 0, s1: 0 };
        rng.seed_from(seq);
        rng
    }

    /// Create a RNG with the given state words, bypassing seeding
    ///
    /// `(0, 0)` is accepted and yields an endless stream of zeros.
    pub fn from_state(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    /// Re-seed through `SplitMix64::new(seed)`
    pub fn seed(&mut self, seed: u64) {
        let mut mixer = SplitMix64::new(seed);
        self.seed_from(&mut mixer);
    }

    /// Re-seed from four words pulled from `seq`
    ///
    /// Words 0 and 1 form `s0` (low, high), words 2 and 3 form `s1`.
    pub fn seed_from<S: SeedSequence + ?Sized>(&mut self, seq: &mut S) {
        let mut words = [0u32; 4];
        seq.generate(&mut words);
        self.s0 = pack_words(words[0], words[1]);
        self.s1 = pack_words(words[2], words[3]);
    }

    /// Generate next random u64 value
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let s0 = self.s0;
        let s1 = self.s1 ^ s0;
        let result = s0.wrapping_add(self.s1);

        self.s0 = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.s1 = s1.rotate_left(36);

        result
    }

    /// Advance the state as if `next` had been called 2^64 times
    ///
    /// Always performs 128 transitions.
    ///
    /// # Example
    /// ```
    /// use xoroshiro_prng::Xoroshiro128Plus;
    ///
    /// let mut a = Xoroshiro128Plus::new(7);
    /// let mut b = a.clone();
    /// a.jump();
    /// b.jump();
    /// assert_eq!(a, b);
    /// ```
    pub fn jump(&mut self) {
        let mut s0 = 0u64;
        let mut s1 = 0u64;

        for word in JUMP {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    s0 ^= self.s0;
                    s1 ^= self.s1;
                }
                self.next();
            }
        }

        self.s0 = s0;
        self.s1 = s1;
    }

    /// Get current state words `(s0, s1)` (for checkpointing/replay)
    pub fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }
}

impl Default for Xoroshiro128Plus {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl UniformGenerator for Xoroshiro128Plus {
    const MIN: u64 = 1;
    const MAX: u64 = u64::MAX;
    const DEFAULT_SEED: u64 = 1;

    fn next_u64(&mut self) -> u64 {
        self.next()
    }
}
