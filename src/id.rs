use core::{fmt, ops, str};

use crate::{ParseError, Version};

/// Represents a Universally Unique IDentifier.
///
/// The value is stored as a 16-byte array in big-endian (network) order, so the byte order of
/// [`as_bytes()`](Uuid::as_bytes) matches the 8-4-4-4-12 string representation and the bit
/// offsets of the version and variant fields are fixed regardless of the host byte order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for ISO object identifiers (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

    /// Creates a UUID from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from a 128-bit unsigned integer interpreted in big-endian order.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Creates a UUID from a byte slice, failing unless the slice is exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{ParseError, Uuid};
    ///
    /// let x = Uuid::from_slice(&[0xff; 16])?;
    /// assert_eq!(x, Uuid::MAX);
    /// assert_eq!(Uuid::from_slice(&[0; 15]), Err(ParseError::InvalidLength(15)));
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, ParseError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| ParseError::InvalidLength(src.len()))
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 128-bit unsigned integer representation.
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns `true` if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// Returns `true` if this is the Max UUID.
    pub const fn is_max(&self) -> bool {
        self.as_u128() == u128::MAX
    }

    /// Creates a UUID from arbitrary bytes by overwriting the version field with `version` and
    /// the variant field with `10`. The other 122 bits are kept as given.
    pub(crate) const fn from_bytes_rfc4122(mut bytes: [u8; 16], version: Version) -> Self {
        bytes[6] = ((version as u8) << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hexadecimal digits are accepted in either case. No other textual forms (braces, URN
    /// prefix, hyphen-less strings) are accepted.
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError::InvalidLength(src.len()));
        }

        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            *e = (hex_value(src, pos)? << 4) | hex_value(src, pos + 1)?;
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if src[pos] != b'-' {
                    return Err(ParseError::InvalidHyphen(pos));
                }
                pos += 1;
            }
        }
        Ok(Self(dst))
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "84401971-B835-468F-866D-2915DDFFC772".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "84401971-b835-468f-866d-2915ddffc772");
    /// assert_eq!(format!("{}", y), "84401971-b835-468f-866d-2915ddffc772");
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

/// Returns the numeric value of the hexadecimal digit at `src[index]`.
fn hex_value(src: &[u8], index: usize) -> Result<u8, ParseError> {
    match src[index] {
        c @ b'0'..=b'9' => Ok(c - b'0'),
        c @ b'a'..=b'f' => Ok(c - b'a' + 10),
        c @ b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseError::InvalidDigit(index)),
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.as_u128()
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            Self::parse_str(&src)
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }

    struct UuidVisitor;

    impl<'de> de::Visitor<'de> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "84401971-b835-468f-866d-2915ddffc772",
                    &[
                        132, 64, 25, 113, 184, 53, 70, 143, 134, 109, 41, 21, 221, 255, 199, 114,
                    ],
                ),
                ("ffffffff-ffff-ffff-ffff-ffffffffffff", &[255u8; 16]),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Rejects malformed input with a descriptive error
        #[test]
        fn rejects_malformed_input_with_a_descriptive_error() {
            assert_de_tokens_error::<serde_test::Readable<Uuid>>(
                &[Token::Str("84401971-b835-468f-866d-2915ddffc77")],
                "invalid length: found 35",
            );
            assert_de_tokens_error::<serde_test::Compact<Uuid>>(
                &[Token::Bytes(&[0u8; 4])],
                "invalid length: found 4",
            );
        }
    }
}
