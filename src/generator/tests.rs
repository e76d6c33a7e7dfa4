//! Deterministic sources shared by the generator tests.

use super::{RandSource, TimeSource};
use crate::GenerateError;

/// A random source that emits the bytes 0, 1, 2, ... wrapping at 255.
#[derive(Debug, Default)]
pub struct CountingRandSource(pub u8);

impl RandSource for CountingRandSource {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        for e in dest {
            *e = self.0;
            self.0 = self.0.wrapping_add(1);
        }
        Ok(())
    }
}

/// A random source that always fails.
#[derive(Debug, Default)]
pub struct FailingRandSource;

impl RandSource for FailingRandSource {
    fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), GenerateError> {
        Err(GenerateError::RandomSource(None))
    }
}

/// A clock that returns the queued readings in order, repeating the last one once exhausted.
#[derive(Debug)]
pub struct ScriptedTimeSource {
    readings: Vec<u64>,
    pos: usize,
}

impl ScriptedTimeSource {
    pub fn new(readings: impl Into<Vec<u64>>) -> Self {
        Self {
            readings: readings.into(),
            pos: 0,
        }
    }
}

impl TimeSource for ScriptedTimeSource {
    fn unix_ts_ns(&mut self) -> Result<u64, GenerateError> {
        let e = *self
            .readings
            .get(self.pos)
            .or(self.readings.last())
            .ok_or(GenerateError::Clock)?;
        self.pos += 1;
        Ok(e)
    }
}

/// A clock that always fails.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct FailingTimeSource;

impl TimeSource for FailingTimeSource {
    fn unix_ts_ns(&mut self) -> Result<u64, GenerateError> {
        Err(GenerateError::Clock)
    }
}

/// Reads a sane value from the system clock
#[cfg(feature = "std")]
#[test]
fn reads_a_sane_value_from_the_system_clock() {
    use super::StdSystemTime;

    // 2020-01-01T00:00:00Z
    let lower = 1_577_836_800_000_000_000u64;
    let a = StdSystemTime.unix_ts_ns().unwrap();
    let b = StdSystemTime.unix_ts_ns().unwrap();
    assert!(lower < a);
    assert!(a <= b);
}

/// Rejects clock readings out of the nanosecond range
#[cfg(feature = "std")]
#[test]
fn rejects_clock_readings_out_of_the_nanosecond_range() {
    use super::StdSystemTime;
    use std::time::{Duration, UNIX_EPOCH};

    let before = UNIX_EPOCH - Duration::from_secs(1);
    assert_eq!(StdSystemTime::unix_ts_ns_at(before), Err(GenerateError::Clock));

    let edge = UNIX_EPOCH + Duration::from_nanos(u64::MAX);
    assert_eq!(StdSystemTime::unix_ts_ns_at(edge), Ok(u64::MAX));

    // u64 nanoseconds run out in 2554
    if let Some(beyond) = edge.checked_add(Duration::from_secs(1)) {
        assert_eq!(StdSystemTime::unix_ts_ns_at(beyond), Err(GenerateError::Clock));
    }
}

/// Forwards calls through mutable references
#[test]
fn forwards_calls_through_mutable_references() {
    fn fill(mut rng: impl RandSource, buffer: &mut [u8]) {
        rng.try_fill_bytes(buffer).unwrap();
    }

    let mut inner = CountingRandSource(250);
    let mut buffer = [0u8; 8];
    fill(&mut inner, &mut buffer);
    assert_eq!(buffer, [250, 251, 252, 253, 254, 255, 0, 1]);
    assert_eq!(inner.0, 2);
}
