//! Deterministic random number generation
//!
//! Two generators live here:
//! - [`SplitMix64`]: counter-based mixer, mostly used to expand a single
//!   64-bit seed into larger states.
//! - [`Xoroshiro128Plus`]: long-period generator, the default source of
//!   randomness. Seeded through `SplitMix64`.
//!
//! Both speak the same two protocols: [`UniformGenerator`] for drawing
//! values and [`SeedSequence`] for handing 32-bit seed words to another
//! generator.

mod splitmix;
mod xoroshiro;

pub use splitmix::SplitMix64;
pub use xoroshiro::Xoroshiro128Plus;

/// Source of 32-bit seed words
///
/// Anything able to fill a buffer of `u32` words on demand can seed a
/// generator. [`SplitMix64`] implements this, so one generator can seed
/// another.
///
/// # Example
/// ```
/// use xoroshiro_prng::{SplitMix64, Xoroshiro128Plus};
///
/// let mut mixer = SplitMix64::new(7);
/// let rng = Xoroshiro128Plus::from_seed_sequence(&mut mixer);
/// assert_ne!(rng.state(), (0, 0));
/// ```
pub trait SeedSequence {
    /// Fill every slot of `dest` with seed words
    fn generate(&mut self, dest: &mut [u32]);
}

impl<S: SeedSequence + ?Sized> SeedSequence for &mut S {
    fn generate(&mut self, dest: &mut [u32]) {
        (**self).generate(dest)
    }
}

/// Uniform 64-bit generator protocol
///
/// Consumers rescale `next_u64` output into other ranges using
/// [`MIN`](Self::MIN) and [`MAX`](Self::MAX).
pub trait UniformGenerator {
    /// Width of each result in bits
    const RESULT_BITS: u32 = 64;
    /// Smallest value the generator declares it can return
    const MIN: u64;
    /// Largest value the generator declares it can return
    const MAX: u64;
    /// Seed used by `Default`
    const DEFAULT_SEED: u64;

    /// Draw the next value and advance the state
    fn next_u64(&mut self) -> u64;

    /// Advance the state by exactly `n` draws, discarding the outputs
    ///
    /// # Example
    /// ```
    /// use xoroshiro_prng::{SplitMix64, UniformGenerator};
    ///
    /// let mut a = SplitMix64::new(3);
    /// let mut b = SplitMix64::new(3);
    /// a.discard(2);
    /// b.next();
    /// b.next();
    /// assert_eq!(a.next(), b.next());
    /// ```
    fn discard(&mut self, n: u64) {
        for _ in 0..n {
            self.next_u64();
        }
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits of one draw.
    fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random value in range [min, max)
    ///
    /// Plain modular reduction; the slight bias toward low values is
    /// negligible for ranges much smaller than 2^64.
    ///
    /// # Panics
    /// Panics if min >= max
    fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let range_size = max.wrapping_sub(min) as u64;
        min.wrapping_add((self.next_u64() % range_size) as i64)
    }
}

/// Compose a 64-bit word from its low and high 32-bit halves
#[inline]
pub(crate) fn pack_words(low: u32, high: u32) -> u64 {
    (low as u64) | ((high as u64) << 32)
}
