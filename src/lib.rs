//! An implementation of RFC 4122 Universally Unique IDentifiers
//!
//! ```rust
//! use uuid4122::{uuid1, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid4()?;
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid1()?;
//! println!("{}", uuid); // e.g., "7f7d7c1a-8a4b-11ef-8a3e-5d2b6c1f0e93"
//!
//! let uuid = uuid5(Uuid::NAMESPACE_DNS, "rust-lang.org");
//! assert_eq!(uuid.to_string(), "c66bbb60-d62e-5f17-a399-3a0bd237c503");
//! # Ok::<(), uuid4122::GenerateError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! A UUID is handled as a 128-bit big-endian value with the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq_hi |  clk_seq_low  |         node (0-1)        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Counting from the least significant bit of the 128-bit value, the 4-bit `ver` field occupies
//! bits 76 through 79 and the `var` field occupies bits 62 and 63. [`Uuid::version()`] and
//! [`Uuid::variant()`] read them; [`Uuid::to_fields()`] exposes the whole layout.
//!
//! # Generators
//!
//! | Version | Generator          | Entry point           | Source of the 122 free bits          |
//! | ------- | ------------------ | --------------------- | ------------------------------------ |
//! | 1       | [`V1Generator`]    | [`uuid1()`]           | 100-ns timestamp, clock seq, node ID |
//! | 3       | [`V3Generator`]    | [`uuid3()`]           | MD5 of namespace and name            |
//! | 4       | [`V4Generator`]    | [`uuid4()`]           | random number generator              |
//! | 5       | [`V5Generator`]    | [`uuid5()`]           | SHA-1 of namespace and name          |
//!
//! The generators take their random number generator and system clock as [`RandSource`] and
//! [`TimeSource`] implementations, so that they can be replaced, e.g., by deterministic ones in
//! tests. `uuid1()` and `uuid4()` use a process-wide generator seeded from the operating system.
//!
//! # Crate features
//!
//! - `std` (enabled by `global_gen`): [`StdSystemTime`] and `String` conversions.
//! - `global_gen` (default): [`uuid1()`] and [`uuid4()`].
//! - `serde`: `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: conversions from and to `uuid::Uuid`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{GenerateError, ParseError, VersionError};

mod id;
pub use id::Uuid;

mod fields;
pub use fields::Fields;

mod version;
pub use version::{Variant, Version};

pub mod generator;
pub use generator::name::{
    uuid3, uuid5, NameContext, NameGenerator, V3Context, V3Generator, V5Context, V5Generator,
};
pub use generator::v1::{Timestamp, V1Generator};
pub use generator::v4::V4Generator;
pub use generator::{RandSource, TimeSource};

#[cfg(feature = "std")]
pub use generator::StdSystemTime;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4};
