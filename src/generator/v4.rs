//! UUIDv4 generator

use super::{with_rand08, RandSource};
use crate::{GenerateError, Uuid, Version};

/// Represents a UUIDv4 generator that fills 122 bits of each UUID with random data.
///
/// The generator holds no state besides the random number generator, so it is as safe to share
/// as the underlying source is.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{V4Generator, Variant, Version};
///
/// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), Ok(Version::Random));
/// assert_eq!(uuid.variant(), Variant::Rfc4122);
/// # Ok::<(), uuid4122::GenerateError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomSource`] if the random number generator fails; no value is
    /// produced in that case.
    pub fn generate(&mut self) -> Result<Uuid, GenerateError> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(Uuid::from_bytes_rfc4122(bytes, Version::Random))
    }
}

impl<T: rand::RngCore> V4Generator<with_rand08::Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`](rand::RngCore) from `rand` (v0.8) crate.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(with_rand08::Adapter(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::V4Generator;
    use crate::generator::tests::{CountingRandSource, FailingRandSource};
    use crate::{GenerateError, Variant, Version};

    /// Keeps drawn bits other than version and variant
    #[test]
    fn keeps_drawn_bits_other_than_version_and_variant() {
        let mut g = V4Generator::new(CountingRandSource(0));
        assert_eq!(
            g.generate().unwrap().to_string(),
            "00010203-0405-4607-8809-0a0b0c0d0e0f"
        );
        assert_eq!(
            g.generate().unwrap().to_string(),
            "10111213-1415-4617-9819-1a1b1c1d1e1f"
        );
        let mut g = V4Generator::new(CountingRandSource(0xf0));
        assert_eq!(
            g.generate().unwrap().to_string(),
            "f0f1f2f3-f4f5-46f7-b8f9-fafbfcfdfeff"
        );
    }

    /// Propagates random source failure
    #[test]
    fn propagates_random_source_failure() {
        let mut g = V4Generator::new(FailingRandSource);
        assert_eq!(g.generate(), Err(GenerateError::RandomSource(None)));
    }

    /// Works with rand08 random number generators
    #[test]
    fn works_with_rand08_random_number_generators() {
        let mut g = V4Generator::with_rand08(rand::thread_rng());
        let mut prev = g.generate().unwrap();
        for _ in 0..1_000 {
            let curr = g.generate().unwrap();
            assert_eq!(curr.version(), Ok(Version::Random));
            assert_eq!(curr.variant(), Variant::Rfc4122);
            assert_ne!(prev, curr);
            prev = curr;
        }
    }
}
