//! Independent sub-streams for parallel consumers
//!
//! Each stream is the previous one jumped 2^64 draws ahead, so streams never
//! overlap as long as each consumer takes fewer than 2^64 values. Streams
//! share no state; hand one to each thread or task.

use crate::rng::{UniformGenerator, Xoroshiro128Plus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building streams from configuration
#[derive(Debug, Error, PartialEq)]
pub enum StreamError {
    #[error("Stream configuration must request at least one stream")]
    NoStreams,

    #[error("Too many streams: requested {requested}, max {max}")]
    TooManyStreams { requested: usize, max: usize },

    #[error("Invalid stream configuration: {0}")]
    InvalidConfig(String),
}

/// Upper bound on `num_streams` accepted from configuration
pub const MAX_STREAMS: usize = 1 << 16;

fn default_seed() -> u64 {
    Xoroshiro128Plus::DEFAULT_SEED
}

/// Configuration for a set of jumped streams
///
/// # Example
/// ```
/// use xoroshiro_prng::StreamConfig;
///
/// let config = StreamConfig::from_json(r#"{"seed": 42, "num_streams": 4}"#).unwrap();
/// let streams = config.build().unwrap();
/// assert_eq!(streams.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Seed for the first stream
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// How many streams to derive
    pub num_streams: usize,
}

impl StreamConfig {
    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self, StreamError> {
        serde_json::from_str(json).map_err(|e| StreamError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        if self.num_streams == 0 {
            return Err(StreamError::NoStreams);
        }
        if self.num_streams > MAX_STREAMS {
            return Err(StreamError::TooManyStreams {
                requested: self.num_streams,
                max: MAX_STREAMS,
            });
        }
        Ok(())
    }

    /// Seed a generator and split it into `num_streams` streams
    pub fn build(&self) -> Result<Vec<Xoroshiro128Plus>, StreamError> {
        self.validate()?;
        Ok(jump_streams(&Xoroshiro128Plus::new(self.seed), self.num_streams))
    }
}

/// Derive `count` streams starting at `base`
///
/// Stream 0 is a copy of `base`; stream i is stream i-1 after one jump.
/// `base` itself is left untouched. Unlike [`StreamConfig::build`], `count`
/// is not bounded here.
pub fn jump_streams(base: &Xoroshiro128Plus, count: usize) -> Vec<Xoroshiro128Plus> {
    let mut streams = Vec::with_capacity(count);
    let mut current = base.clone();

    for i in 0..count {
        if i > 0 {
            current.jump();
        }
        streams.push(current.clone());
    }

    streams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults_to_generator_default() {
        let config = StreamConfig::from_json(r#"{"num_streams": 2}"#).unwrap();
        assert_eq!(config.seed, 1);
    }

    #[test]
    fn test_missing_num_streams_is_invalid() {
        let err = StreamConfig::from_json(r#"{"seed": 3}"#).unwrap_err();
        assert!(matches!(err, StreamError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_streams_rejected() {
        let config = StreamConfig {
            seed: 7,
            num_streams: 0,
        };
        assert_eq!(config.build().unwrap_err(), StreamError::NoStreams);
    }

    #[test]
    fn test_stream_limit_is_inclusive() {
        let at_limit = StreamConfig {
            seed: 7,
            num_streams: MAX_STREAMS,
        };
        assert_eq!(at_limit.validate(), Ok(()));

        let over = StreamConfig {
            seed: 7,
            num_streams: MAX_STREAMS + 1,
        };
        assert_eq!(
            over.validate(),
            Err(StreamError::TooManyStreams {
                requested: MAX_STREAMS + 1,
                max: MAX_STREAMS,
            })
        );
    }

    #[test]
    fn test_jump_streams_zero_count_is_empty() {
        assert!(jump_streams(&Xoroshiro128Plus::new(1), 0).is_empty());
    }
}
