//! Tests for jumped sub-streams

use std::collections::HashSet;
use xoroshiro_prng::{jump_streams, StreamConfig, StreamError, Xoroshiro128Plus, MAX_STREAMS};

#[test]
fn test_build_returns_requested_count() {
    let config = StreamConfig {
        seed: 42,
        num_streams: 8,
    };
    assert_eq!(config.build().unwrap().len(), 8);
}

#[test]
fn test_first_stream_is_seeded_generator() {
    let config = StreamConfig {
        seed: 42,
        num_streams: 3,
    };
    let streams = config.build().unwrap();
    assert_eq!(streams[0], Xoroshiro128Plus::new(42));
}

#[test]
fn test_each_stream_is_previous_jumped() {
    let streams = jump_streams(&Xoroshiro128Plus::new(9), 4);

    for pair in streams.windows(2) {
        let mut expected = pair[0].clone();
        expected.jump();
        assert_eq!(pair[1], expected);
    }
}

#[test]
fn test_base_not_mutated() {
    let base = Xoroshiro128Plus::new(9);
    let _ = jump_streams(&base, 5);
    assert_eq!(base, Xoroshiro128Plus::new(9));
}

#[test]
fn test_streams_do_not_collide() {
    let mut streams = jump_streams(&Xoroshiro128Plus::new(2024), 4);

    let mut seen = HashSet::new();
    for rng in streams.iter_mut() {
        for _ in 0..1000 {
            assert!(seen.insert(rng.next()), "Value repeated across streams");
        }
    }
}

#[test]
fn test_build_deterministic() {
    let config = StreamConfig::from_json(r#"{"seed": 77, "num_streams": 3}"#).unwrap();
    assert_eq!(config.build().unwrap(), config.build().unwrap());
}

#[test]
fn test_streams_usable_across_threads() {
    let streams = jump_streams(&Xoroshiro128Plus::new(5), 4);
    let expected: Vec<u64> = streams.iter().cloned().map(|mut rng| rng.next()).collect();

    let handles: Vec<_> = streams
        .into_iter()
        .map(|mut rng| std::thread::spawn(move || rng.next()))
        .collect();
    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results, expected);
}

#[test]
fn test_config_errors() {
    assert_eq!(
        StreamConfig::from_json(r#"{"seed": 1, "num_streams": 0}"#)
            .unwrap()
            .build()
            .unwrap_err(),
        StreamError::NoStreams
    );

    let err = StreamConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, StreamError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("Invalid stream configuration"));
}

#[test]
fn test_huge_stream_count_rejected_without_panic() {
    let config =
        StreamConfig::from_json(r#"{"seed": 1, "num_streams": 18446744073709551615}"#).unwrap();

    assert_eq!(
        config.build().unwrap_err(),
        StreamError::TooManyStreams {
            requested: usize::MAX,
            max: MAX_STREAMS,
        }
    );
}
