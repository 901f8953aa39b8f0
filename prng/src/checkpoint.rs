//! Checkpoint - Capture/Restore Generator State
//!
//! Snapshots hold the raw state words of a generator plus a SHA256 checksum,
//! so a stream can be paused and later resumed at exactly the same draw.
//! Snapshots are plain values and JSON strings; nothing here touches disk.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator produces the same sequence the
//!   original would have produced from the capture point
//! - **Integrity**: a snapshot whose checksum does not match its state is
//!   rejected
//! - **Algorithm Matching**: state can only be restored into the generator
//!   type it was captured from

use crate::rng::{SplitMix64, Xoroshiro128Plus};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur while encoding or restoring snapshots
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Raw state of one generator, tagged by algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum GeneratorState {
    #[serde(rename = "splitmix64")]
    SplitMix64 { state: u64 },

    #[serde(rename = "xoroshiro128plus")]
    Xoroshiro128Plus { s0: u64, s1: u64 },
}

impl GeneratorState {
    /// Algorithm tag as it appears in JSON
    pub fn algorithm(&self) -> &'static str {
        match self {
            GeneratorState::SplitMix64 { .. } => "splitmix64",
            GeneratorState::Xoroshiro128Plus { .. } => "xoroshiro128plus",
        }
    }
}

impl From<&SplitMix64> for GeneratorState {
    fn from(rng: &SplitMix64) -> Self {
        GeneratorState::SplitMix64 { state: rng.state() }
    }
}

impl From<&Xoroshiro128Plus> for GeneratorState {
    fn from(rng: &Xoroshiro128Plus) -> Self {
        let (s0, s1) = rng.state();
        GeneratorState::Xoroshiro128Plus { s0, s1 }
    }
}

/// Generator state plus integrity checksum
///
/// # Example
/// ```
/// use xoroshiro_prng::{GeneratorSnapshot, Xoroshiro128Plus};
///
/// let mut rng = Xoroshiro128Plus::new(42);
/// rng.next();
///
/// let json = GeneratorSnapshot::capture(&rng).unwrap().to_json().unwrap();
/// let mut restored = GeneratorSnapshot::from_json(&json)
///     .unwrap()
///     .restore_xoroshiro()
///     .unwrap();
/// assert_eq!(restored.next(), rng.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Captured state words
    pub generator: GeneratorState,

    /// SHA256 of the compact JSON form of `generator`
    pub checksum: String,
}

impl GeneratorSnapshot {
    /// Capture the current state of a generator
    pub fn capture<'a, G>(rng: &'a G) -> Result<Self, CheckpointError>
    where
        GeneratorState: From<&'a G>,
    {
        let generator = GeneratorState::from(rng);
        let checksum = compute_state_hash(&generator)?;
        Ok(Self {
            generator,
            checksum,
        })
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Parse a snapshot and verify its checksum
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::Serialization(e.to_string()))?;
        snapshot.verify()?;
        Ok(snapshot)
    }

    /// Check that the checksum still matches the state
    pub fn verify(&self) -> Result<(), CheckpointError> {
        let actual = compute_state_hash(&self.generator)?;
        if actual != self.checksum {
            return Err(CheckpointError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }
        Ok(())
    }

    pub fn restore_splitmix(&self) -> Result<SplitMix64, CheckpointError> {
        self.verify()?;
        match self.generator {
            GeneratorState::SplitMix64 { state } => Ok(SplitMix64::new(state)),
            ref other => Err(CheckpointError::AlgorithmMismatch {
                expected: "splitmix64",
                found: other.algorithm(),
            }),
        }
    }

    /// Restore a xoroshiro128+ generator
    ///
    /// A `(0, 0)` state is restored as-is.
    pub fn restore_xoroshiro(&self) -> Result<Xoroshiro128Plus, CheckpointError> {
        self.verify()?;
        match self.generator {
            GeneratorState::Xoroshiro128Plus { s0, s1 } => {
                Ok(Xoroshiro128Plus::from_state(s0, s1))
            }
            ref other => Err(CheckpointError::AlgorithmMismatch {
                expected: "xoroshiro128plus",
                found: other.algorithm(),
            }),
        }
    }
}

// ============================================================================
// State Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a serializable value
///
/// Hashes the compact JSON form. Struct and enum fields serialize in
/// declaration order, so the digest is stable for a given state.
pub fn compute_state_hash<T: Serialize>(value: &T) -> Result<String, CheckpointError> {
    let json =
        serde_json::to_string(value).map_err(|e| CheckpointError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
