//! Xoroshiro PRNG - Deterministic 64-bit Generators
//!
//! Fast, non-cryptographic pseudorandom number generators for simulation,
//! sampling and shuffling.
//!
//! # Architecture
//!
//! - **rng**: The generators ([`SplitMix64`], [`Xoroshiro128Plus`]) and the
//!   protocols they implement ([`UniformGenerator`], [`SeedSequence`])
//! - **streams**: Non-overlapping sub-streams derived by jumping
//! - **checkpoint**: Capture/restore of generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. Every operation is total; wraparound arithmetic is not an error
//! 3. No generator is thread-safe; give each thread its own (see
//!    [`jump_streams`])

// Module declarations
pub mod checkpoint;
pub mod rng;
pub mod streams;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot, GeneratorState};
pub use rng::{SeedSequence, SplitMix64, UniformGenerator, Xoroshiro128Plus};
pub use streams::{jump_streams, StreamConfig, StreamError, MAX_STREAMS};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoroshiro_prng(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generators::PySplitMix64>()?;
    m.add_class::<ffi::generators::PyXoroshiro128Plus>()?;
    Ok(())
}
