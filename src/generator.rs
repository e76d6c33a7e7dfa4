//! UUID generators and the external sources they consume.
//!
//! Every generator draws on two collaborators that are abstracted as traits so that callers (and
//! tests) can supply their own:
//!
//! - [`RandSource`]: a cryptographically secure random number generator. Any `rand` (v0.8)
//!   [`RngCore`](rand::RngCore) can be plugged in through [`with_rand08::Adapter`].
//! - [`TimeSource`]: a wall clock. [`StdSystemTime`] reads [`std::time::SystemTime`].

use crate::GenerateError;

pub mod name;
pub mod v1;
pub mod v4;
pub mod with_rand08;

#[cfg(test)]
mod tests;

/// A trait that defines the minimum random number generator interface for the generators.
pub trait RandSource {
    /// Fills `dest` entirely with random data.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomSource`] if the source cannot produce the bytes. `dest` is
    /// left in an unspecified state in that case and must not be used.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GenerateError>;
}

impl<T: RandSource + ?Sized> RandSource for &mut T {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        (**self).try_fill_bytes(dest)
    }
}

/// A trait that defines the minimum system clock interface for the time-based generator.
pub trait TimeSource {
    /// Returns the current Unix timestamp in nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Clock`] if the clock cannot be read or reads a time outside the
    /// range representable as nanoseconds since the Unix epoch in a `u64`.
    fn unix_ts_ns(&mut self) -> Result<u64, GenerateError>;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl StdSystemTime {
    /// Converts `now` into nanoseconds since the Unix epoch.
    fn unix_ts_ns_at(now: std::time::SystemTime) -> Result<u64, GenerateError> {
        let elapsed = now.duration_since(std::time::UNIX_EPOCH).map_err(|err| {
            tracing::warn!(
                behind = ?err.duration(),
                "system clock is set before the Unix epoch"
            );
            GenerateError::Clock
        })?;
        u64::try_from(elapsed.as_nanos()).map_err(|_| {
            tracing::warn!(
                elapsed = ?elapsed,
                "system clock is beyond the range of nanosecond timestamps"
            );
            GenerateError::Clock
        })
    }
}

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ns(&mut self) -> Result<u64, GenerateError> {
        Self::unix_ts_ns_at(std::time::SystemTime::now())
    }
}
