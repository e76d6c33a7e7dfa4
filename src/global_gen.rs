//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{GenerateError, Uuid};
use inner::GlobalGenInner;

/// Runs `f` with the process-wide global generator, creating one if none exists.
fn with_global_gen<T>(
    f: impl FnOnce(&mut GlobalGenInner) -> Result<T, GenerateError>,
) -> Result<T, GenerateError> {
    static G: sync::Mutex<Option<GlobalGenInner>> = sync::Mutex::new(None);

    // the state stays consistent even if a panic occurred while the lock was held
    let mut guard = G.lock().unwrap_or_else(sync::PoisonError::into_inner);
    let g = match guard.take() {
        Some(g) if !g.is_stale() => g,
        _ => GlobalGenInner::new()?,
    };
    f(guard.insert(g))
}

/// Generates a UUIDv1 object.
///
/// This function employs a global generator whose random node ID and clock sequence are drawn
/// when it is first used. Calls are serialized, so UUIDs generated within the same tick by
/// different threads are still distinct. On Unix, this function resets the generator when the
/// process ID changes (i.e., upon process forks) to prevent collisions across processes.
///
/// # Errors
///
/// Returns an error if the operating system's random number generator or the system clock fails.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid1()?;
/// println!("{}", uuid); // e.g., "7f7d7c1a-8a4b-11ef-8a3e-5d2b6c1f0e93"
/// # Ok::<(), uuid4122::GenerateError>(())
/// ```
pub fn uuid1() -> Result<Uuid, GenerateError> {
    with_global_gen(|g| g.v1.generate())
}

/// Generates a UUIDv4 object.
///
/// # Errors
///
/// Returns an error if the operating system's random number generator fails when the global
/// generator is seeded.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuid4122::GenerateError>(())
/// ```
pub fn uuid4() -> Result<Uuid, GenerateError> {
    with_global_gen(|g| g.v4.generate())
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08::Adapter, RandSource, StdSystemTime};
    use crate::{GenerateError, V1Generator, V4Generator};

    /// Number of bytes the global random number generator produces before reseeding from the OS.
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        fn new() -> Result<Self, GenerateError> {
            let core = ChaCha12Core::from_rng(OsRng).map_err(|err| {
                tracing::warn!(code = ?err.code(), "could not seed global generator");
                GenerateError::RandomSource(err.code())
            })?;
            Ok(Self(ReseedingRng::new(core, RESEED_THRESHOLD, OsRng)))
        }
    }

    impl RandSource for GlobalGenRng {
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
            Adapter(&mut self.0).try_fill_bytes(dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        pub v1: V1Generator<StdSystemTime>,
        pub v4: V4Generator<GlobalGenRng>,
    }

    impl GlobalGenInner {
        pub fn new() -> Result<Self, GenerateError> {
            let mut rng = GlobalGenRng::new()?;
            let v1 = V1Generator::new(&mut rng, StdSystemTime)?;
            tracing::debug!("initialized global generator");
            Ok(Self {
                #[cfg(unix)]
                pid: std::process::id(),
                v1,
                v4: V4Generator::new(rng),
            })
        }

        /// Returns `true` if the process ID has changed since the generator was created.
        pub fn is_stale(&self) -> bool {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    pid = std::process::id(),
                    "process ID changed; resetting global generator"
                );
                return true;
            }
            false
        }
    }
}


#[cfg(test)]
mod tests_v4 {
    use super::uuid4;
    use crate::{Variant, Version};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = {
        (0..N_SAMPLES).map(|_| uuid4().unwrap().into()).collect()
    });

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid4().unwrap();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Ok(Version::Random));
        }
    }
}
