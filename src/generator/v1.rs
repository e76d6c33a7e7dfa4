//! UUIDv1 generator and timestamp decoding

use super::{RandSource, TimeSource};
use crate::{Fields, GenerateError, Uuid, Version};

/// Number of 100-nanosecond intervals between the Gregorian reform (1582-10-15T00:00:00Z) and the
/// Unix epoch.
pub const UUID_EPOCH_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const MAX_TICK: u64 = (1 << 60) - 1;
const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// Represents a UUIDv1 generator that encapsulates a node ID, a clock sequence, and a counter to
/// tell apart UUIDs generated within the same 100-nanosecond tick.
///
/// The node ID and the clock sequence are fixed when the generator is created. Each call reads
/// the clock; if the tick has not advanced past the previous one, the internal counter is bumped
/// (wrapping at 14 bits) and added to the clock sequence so that the new UUID differs from the
/// last one. The counter is reset whenever the tick advances.
///
/// The node ID and the clock sequence are what keep UUIDs from distinct generators apart, so the
/// type does not implement `Clone`. Create every additional generator with
/// [`V1Generator::new()`] so that it draws its own node ID and clock sequence.
///
/// The generator mutates its state on every call and is not meant to be shared without a lock.
/// The following example uses Rust's standard synchronization mechanism to share one generator
/// among threads.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuid4122::V1Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::with_rand08(rand::rngs::OsRng)?));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// # Ok::<(), uuid4122::GenerateError>(())
/// ```
#[derive(Eq, PartialEq, Debug)]
pub struct V1Generator<T> {
    last_timestamp: u64,
    sequence: u16,
    node_id: [u8; 6],
    clock_seq: u16,

    /// The system clock used by the generator.
    time_source: T,
}

impl<T: TimeSource> V1Generator<T> {
    /// Creates a generator instance with a random node ID and a random clock sequence drawn from
    /// `rng`.
    ///
    /// The multicast bit of the node ID is set, as RFC 4122 requires for node IDs that are not
    /// IEEE 802 addresses.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomSource`] if `rng` fails.
    pub fn new(mut rng: impl RandSource, time_source: T) -> Result<Self, GenerateError> {
        let mut seed = [0u8; 8];
        rng.try_fill_bytes(&mut seed)?;
        let node_id = [seed[0] | 0x01, seed[1], seed[2], seed[3], seed[4], seed[5]];
        let clock_seq = u16::from_be_bytes([seed[6], seed[7]]);
        Ok(Self::with_node_id(node_id, clock_seq, time_source))
    }

    /// Creates a generator instance with the given node ID and clock sequence. Only the low 14
    /// bits of `clock_seq` are used.
    pub fn with_node_id(node_id: [u8; 6], clock_seq: u16, time_source: T) -> Self {
        let clock_seq = clock_seq & MAX_CLOCK_SEQ;
        tracing::debug!(clock_seq, "created v1 generator");
        Self {
            last_timestamp: 0,
            sequence: 0,
            node_id,
            clock_seq,
            time_source,
        }
    }

    /// Returns the node ID embedded in every UUID this generator produces.
    pub const fn node_id(&self) -> [u8; 6] {
        self.node_id
    }

    /// Returns the base clock sequence the per-tick counter is added to.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Generates a new UUIDv1 object from the current time.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Clock`] if the time source fails; the generator state is left
    /// untouched in that case.
    pub fn generate(&mut self) -> Result<Uuid, GenerateError> {
        let unix_ts_ns = self.time_source.unix_ts_ns()?;
        Ok(self.generate_core(unix_ts_ns / 100 + UUID_EPOCH_OFFSET))
    }

    /// Generates a new UUIDv1 object from a tick count, i.e., the number of 100-nanosecond
    /// intervals since 1582-10-15T00:00:00Z. Only the low 60 bits are encoded.
    ///
    /// Clock rollbacks are not rejected. A tick that is equal to or smaller than the previous one
    /// bumps the counter instead of resetting it, and the new tick is always recorded.
    pub fn generate_core(&mut self, tick: u64) -> Uuid {
        if tick <= self.last_timestamp {
            self.sequence = (self.sequence + 1) & MAX_CLOCK_SEQ;
            tracing::trace!(tick, sequence = self.sequence, "tick did not advance");
            if self.sequence == 0 {
                tracing::warn!(tick, "v1 sequence wrapped around within a stalled clock");
            }
        } else {
            self.sequence = 0;
        }
        self.last_timestamp = tick;

        let tick = tick & MAX_TICK;
        let clock_seq = self.clock_seq.wrapping_add(self.sequence) & MAX_CLOCK_SEQ;
        Uuid::from_fields(&Fields {
            time_low: tick as u32,
            time_mid: (tick >> 32) as u16,
            time_hi_and_version: ((tick >> 48) as u16) | 0x1000,
            clock_seq_hi_and_res: (clock_seq >> 8) as u8 | 0x80,
            clock_seq_low: clock_seq as u8,
            node: self.node_id,
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl V1Generator<super::StdSystemTime> {
    /// Creates a generator object that reads the system clock, seeding the node ID and the clock
    /// sequence from a random number generator that implements [`RngCore`](rand::RngCore) from
    /// `rand` (v0.8) crate.
    pub fn with_rand08(rng: impl rand::RngCore) -> Result<Self, GenerateError> {
        Self::new(super::with_rand08::Adapter(rng), super::StdSystemTime)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object (or an error
/// reading the clock) for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4122::V1Generator;
///
/// V1Generator::with_rand08(rand::thread_rng())?
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .try_for_each(|(i, e)| e.map(|e| println!("[{}] {}", i, e)))?;
/// # Ok::<(), uuid4122::GenerateError>(())
/// ```
impl<T: TimeSource> Iterator for V1Generator<T> {
    type Item = Result<Uuid, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: TimeSource> core::iter::FusedIterator for V1Generator<T> {}

/// The timestamp and clock sequence carried by a UUIDv1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Timestamp {
    ticks: u64,
    clock_seq: u16,
}

impl Timestamp {
    /// Returns the 60-bit count of 100-nanosecond intervals since 1582-10-15T00:00:00Z.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns the 14-bit clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Converts the tick count into seconds and subsecond nanoseconds since the Unix epoch, or
    /// returns `None` if the timestamp predates the Unix epoch.
    pub const fn to_unix(&self) -> Option<(u64, u32)> {
        match self.ticks.checked_sub(UUID_EPOCH_OFFSET) {
            Some(t) => Some((t / 10_000_000, (t % 10_000_000) as u32 * 100)),
            None => None,
        }
    }
}

impl Uuid {
    /// Returns the timestamp and clock sequence if this is a UUIDv1, or `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x: Uuid = "20616934-4ba2-11e7-8000-010203040506".parse()?;
    /// let ts = x.get_timestamp().unwrap();
    /// assert_eq!(ts.to_unix(), Some((1_496_854_535, 812_946_000)));
    /// assert_eq!(ts.clock_seq(), 0);
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn get_timestamp(&self) -> Option<Timestamp> {
        if self.version() != Ok(Version::Mac) {
            return None;
        }

        let f = self.to_fields();
        Some(Timestamp {
            ticks: u64::from(f.time_hi_and_version & 0x0fff) << 48
                | u64::from(f.time_mid) << 32
                | u64::from(f.time_low),
            clock_seq: u16::from(f.clock_seq_hi_and_res & 0x3f) << 8 | u16::from(f.clock_seq_low),
        })
    }
}
