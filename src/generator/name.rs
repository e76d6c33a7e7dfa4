//! Name-based UUIDv3 (MD5) and UUIDv5 (SHA-1) generators
//!
//! Two flavors are provided:
//!
//! - [`NameGenerator`] holds nothing but the namespace and hashes `namespace || name` from
//!   scratch on every call. It is `Copy` and can be shared freely. This is the one to use unless
//!   the name arrives in pieces.
//! - [`NameContext`] owns a hash context seeded with the namespace. It accepts the name
//!   incrementally and is consumed by [`NameContext::finalize()`], so it cannot be reused after
//!   producing its UUID.

use core::{fmt, marker::PhantomData};

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::{Uuid, Version};

mod sealed {
    pub trait Sealed {}
    impl Sealed for md5::Md5 {}
    impl Sealed for sha1::Sha1 {}
}

/// A hash function usable for name-based UUIDs. Implemented for [`Md5`] (version 3) and
/// [`Sha1`] (version 5) only.
pub trait NameHash: Digest + sealed::Sealed {
    /// The version number written to UUIDs derived from this hash.
    const VERSION: Version;
}

impl NameHash for Md5 {
    const VERSION: Version = Version::Md5;
}

impl NameHash for Sha1 {
    const VERSION: Version = Version::Sha1;
}

/// UUIDv3 generator.
pub type V3Generator = NameGenerator<Md5>;

/// UUIDv5 generator.
pub type V5Generator = NameGenerator<Sha1>;

/// Single-use UUIDv3 hash context.
pub type V3Context = NameContext<Md5>;

/// Single-use UUIDv5 hash context.
pub type V5Context = NameContext<Sha1>;

/// Represents a reusable name-based UUID generator bound to a namespace.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{Uuid, V5Generator};
///
/// let g = V5Generator::new(Uuid::NAMESPACE_DNS);
/// assert_eq!(g.generate("rust-lang.org").to_string(), "c66bbb60-d62e-5f17-a399-3a0bd237c503");
/// assert_eq!(g.generate("rust-lang.org"), g.generate(b"rust-lang.org"));
/// ```
pub struct NameGenerator<H> {
    namespace: Uuid,
    _hash: PhantomData<fn() -> H>,
}

impl<H: NameHash> NameGenerator<H> {
    /// Creates a generator instance for `namespace`.
    pub const fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            _hash: PhantomData,
        }
    }

    /// Returns the namespace the generator is bound to.
    pub const fn namespace(&self) -> Uuid {
        self.namespace
    }

    /// Generates the UUID for `name` in the namespace.
    pub fn generate(&self, name: impl AsRef<[u8]>) -> Uuid {
        NameContext::<H>::new(self.namespace).finalize(name)
    }
}

impl<H> Clone for NameGenerator<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for NameGenerator<H> {}

impl<H> PartialEq for NameGenerator<H> {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
    }
}

impl<H> Eq for NameGenerator<H> {}

impl<H: NameHash> fmt::Debug for NameGenerator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameGenerator")
            .field("version", &H::VERSION)
            .field("namespace", &self.namespace)
            .finish()
    }
}

/// Represents a single-use hash context seeded with a namespace.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{Uuid, V3Context};
///
/// let mut ctx = V3Context::new(Uuid::NAMESPACE_URL);
/// ctx.update("https://example.com/").update("index.html");
/// let uuid = ctx.finalize("?lang=en");
///
/// let expected = uuid4122::uuid3(Uuid::NAMESPACE_URL, "https://example.com/index.html?lang=en");
/// assert_eq!(uuid, expected);
/// ```
#[derive(Clone)]
pub struct NameContext<H> {
    hasher: H,
}

impl<H: NameHash> NameContext<H> {
    /// Creates a hash context that has already absorbed the 16 bytes of `namespace`.
    pub fn new(namespace: Uuid) -> Self {
        let mut hasher = H::new();
        Digest::update(&mut hasher, namespace.as_bytes());
        Self { hasher }
    }

    /// Feeds a part of the name into the context.
    pub fn update(&mut self, part: impl AsRef<[u8]>) -> &mut Self {
        Digest::update(&mut self.hasher, part);
        self
    }

    /// Feeds the last part of the name and consumes the context to produce the UUID.
    pub fn finalize(mut self, name: impl AsRef<[u8]>) -> Uuid {
        Digest::update(&mut self.hasher, name);
        let digest = Digest::finalize(self.hasher);

        // SHA-1 produces 20 bytes, of which the trailing 4 are dropped
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Uuid::from_bytes_rfc4122(bytes, H::VERSION)
    }
}

impl<H: NameHash> fmt::Debug for NameContext<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameContext")
            .field("version", &H::VERSION)
            .finish_non_exhaustive()
    }
}

/// Generates a UUIDv3 object from a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid3, Uuid};
///
/// let uuid = uuid3(Uuid::NAMESPACE_DNS, "example.org");
/// assert_eq!(uuid.to_string(), "04738bdf-b25a-3829-a801-b21a1d25095b");
/// ```
pub fn uuid3(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    V3Generator::new(namespace).generate(name)
}

/// Generates a UUIDv5 object from a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid5, Uuid};
///
/// let uuid = uuid5(Uuid::NAMESPACE_DNS, "example.org");
/// assert_eq!(uuid.to_string(), "aad03681-8b63-5304-89e0-8ca8f49461b5");
/// ```
pub fn uuid5(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    V5Generator::new(namespace).generate(name)
}
