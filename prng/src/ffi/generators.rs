//! PyO3 wrappers for the generators
//!
//! Each Python object owns its generator outright; share one instance per
//! thread, or derive independent streams with `jump()`.
//!
//! # Example (from Python)
//!
//! ```python
//! from xoroshiro_prng import Xoroshiro128Plus
//!
//! rng = Xoroshiro128Plus(42)
//! worker_rng = Xoroshiro128Plus(42)
//! worker_rng.jump()
//! print(rng.next(), worker_rng.next())
//! ```

use pyo3::prelude::*;

use crate::checkpoint::{CheckpointError, GeneratorSnapshot};
use crate::rng::{SplitMix64, UniformGenerator, Xoroshiro128Plus};

fn checkpoint_err(e: CheckpointError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Snapshot failed: {}", e))
}

/// Python wrapper for the splitmix64 generator
#[pyclass(name = "SplitMix64")]
pub struct PySplitMix64 {
    inner: SplitMix64,
}

#[pymethods]
impl PySplitMix64 {
    /// Create a generator; `seed` defaults to 0
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(SplitMix64::DEFAULT_SEED);
        PySplitMix64 {
            inner: SplitMix64::new(seed),
        }
    }

    /// Restore a generator from a JSON snapshot
    ///
    /// Raises ValueError on a bad checksum or a snapshot of another algorithm.
    #[staticmethod]
    fn from_snapshot(json: &str) -> PyResult<Self> {
        let inner = GeneratorSnapshot::from_json(json)
            .and_then(|s| s.restore_splitmix())
            .map_err(checkpoint_err)?;
        Ok(PySplitMix64 { inner })
    }

    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    fn discard(&mut self, n: u64) {
        self.inner.discard(n);
    }

    fn state(&self) -> u64 {
        self.inner.state()
    }

    /// Capture the current state as a JSON snapshot
    fn snapshot(&self) -> PyResult<String> {
        GeneratorSnapshot::capture(&self.inner)
            .and_then(|s| s.to_json())
            .map_err(checkpoint_err)
    }
}

/// Python wrapper for the xoroshiro128+ generator
#[pyclass(name = "Xoroshiro128Plus")]
pub struct PyXoroshiro128Plus {
    inner: Xoroshiro128Plus,
}

#[pymethods]
impl PyXoroshiro128Plus {
    /// Create a generator; `seed` defaults to 1
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(Xoroshiro128Plus::DEFAULT_SEED);
        PyXoroshiro128Plus {
            inner: Xoroshiro128Plus::new(seed),
        }
    }

    /// Restore a generator from a JSON snapshot
    #[staticmethod]
    fn from_snapshot(json: &str) -> PyResult<Self> {
        let inner = GeneratorSnapshot::from_json(json)
            .and_then(|s| s.restore_xoroshiro())
            .map_err(checkpoint_err)?;
        Ok(PyXoroshiro128Plus { inner })
    }

    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    fn discard(&mut self, n: u64) {
        self.inner.discard(n);
    }

    /// Advance 2^64 draws in one step
    fn jump(&mut self) {
        self.inner.jump();
    }

    /// Current `(s0, s1)` state words
    fn state(&self) -> (u64, u64) {
        self.inner.state()
    }

    fn snapshot(&self) -> PyResult<String> {
        GeneratorSnapshot::capture(&self.inner)
            .and_then(|s| s.to_json())
            .map_err(checkpoint_err)
    }
}
