//! Version and variant classification.

use crate::{Uuid, VersionError};

/// The 4-bit version field, naming the algorithm that generated a UUID.
///
/// Only versions 1, 3, 4, and 5 can be generated by this crate; the rest are recognized so that
/// values produced elsewhere can still be classified.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Version {
    /// Version 1: Gregorian time-based with node ID.
    Mac = 1,

    /// Version 2: DCE security.
    Dce = 2,

    /// Version 3: MD5 name-based.
    Md5 = 3,

    /// Version 4: random.
    Random = 4,

    /// Version 5: SHA-1 name-based.
    Sha1 = 5,

    /// Version 6: reordered Gregorian time-based.
    SortMac = 6,

    /// Version 7: Unix time-based.
    SortRand = 7,

    /// Version 8: custom.
    Custom = 8,
}

impl Version {
    /// Returns the numeric value of the version field.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Version {
    type Error = VersionError;

    fn try_from(src: u8) -> Result<Self, Self::Error> {
        match src {
            1 => Ok(Self::Mac),
            2 => Ok(Self::Dce),
            3 => Ok(Self::Md5),
            4 => Ok(Self::Random),
            5 => Ok(Self::Sha1),
            6 => Ok(Self::SortMac),
            7 => Ok(Self::SortRand),
            8 => Ok(Self::Custom),
            _ => Err(VersionError::Undefined(src)),
        }
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src.as_u8()
    }
}

/// The variant field, determining the layout of a UUID.
///
/// Only the top two bits are examined, so the Microsoft pattern (`110`) and the reserved future
/// pattern (`111`) are both reported as [`Variant::Microsoft`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (`0x`).
    Ncs,

    /// The layout specified in RFC 4122 (`10`).
    Rfc4122,

    /// Reserved for Microsoft backward compatibility and future definition (`11`).
    Microsoft,
}

impl Uuid {
    /// Reports the version number of the UUID.
    ///
    /// The version lives in bits 76 through 79 of the big-endian 128-bit value, i.e., the high
    /// nibble of `as_bytes()[6]`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Undefined`] if the field holds 0 or 9 through 15.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{Uuid, Version, VersionError};
    ///
    /// let x: Uuid = "84401971-b835-468f-866d-2915ddffc772".parse()?;
    /// assert_eq!(x.version(), Ok(Version::Random));
    /// assert_eq!(Uuid::NIL.version(), Err(VersionError::Undefined(0)));
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn version(&self) -> Result<Version, VersionError> {
        Version::try_from(self.as_bytes()[6] >> 4)
    }

    /// Reports the variant field value of the UUID.
    ///
    /// The variant lives in bits 62 and 63 of the big-endian 128-bit value, i.e., the two most
    /// significant bits of `as_bytes()[8]`.
    pub const fn variant(&self) -> Variant {
        match self.as_bytes()[8] >> 6 {
            0b00 | 0b01 => Variant::Ncs,
            0b10 => Variant::Rfc4122,
            _ => Variant::Microsoft,
        }
    }
}
