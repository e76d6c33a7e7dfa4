//! Structured field view of the RFC 4122 layout.

use crate::Uuid;

/// The six fields of the RFC 4122 layout, each holding its big-endian value.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          time_low                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       time_mid                |         time_hi_and_version   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |clk_seq_hi_res |  clk_seq_low  |         node (0-1)            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         node (2-5)                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// This is a projection computed from a [`Uuid`]; the UUID value itself stays the source of
/// truth and [`Uuid::from_fields()`] reassembles it exactly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Fields {
    /// Low 32 bits of the timestamp.
    pub time_low: u32,

    /// Middle 16 bits of the timestamp.
    pub time_mid: u16,

    /// High 12 bits of the timestamp multiplexed with the 4-bit version.
    pub time_hi_and_version: u16,

    /// High 6 bits of the clock sequence multiplexed with the variant.
    pub clock_seq_hi_and_res: u8,

    /// Low 8 bits of the clock sequence.
    pub clock_seq_low: u8,

    /// 48-bit node identifier.
    pub node: [u8; 6],
}

impl Uuid {
    /// Returns the structured field view of this UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let fields = Uuid::NAMESPACE_DNS.to_fields();
    /// assert_eq!(fields.time_low, 0x6ba7b810);
    /// assert_eq!(fields.time_hi_and_version, 0x11d1);
    /// assert_eq!(fields.node, [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
    /// ```
    pub const fn to_fields(&self) -> Fields {
        let b = self.as_bytes();
        Fields {
            time_low: u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            time_mid: u16::from_be_bytes([b[4], b[5]]),
            time_hi_and_version: u16::from_be_bytes([b[6], b[7]]),
            clock_seq_hi_and_res: b[8],
            clock_seq_low: b[9],
            node: [b[10], b[11], b[12], b[13], b[14], b[15]],
        }
    }

    /// Reassembles a UUID from its structured field view.
    pub const fn from_fields(fields: &Fields) -> Self {
        let time_low = fields.time_low.to_be_bytes();
        let time_mid = fields.time_mid.to_be_bytes();
        let time_hi = fields.time_hi_and_version.to_be_bytes();
        let node = fields.node;
        Self::from_bytes([
            time_low[0],
            time_low[1],
            time_low[2],
            time_low[3],
            time_mid[0],
            time_mid[1],
            time_hi[0],
            time_hi[1],
            fields.clock_seq_hi_and_res,
            fields.clock_seq_low,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }
}

impl From<Uuid> for Fields {
    fn from(src: Uuid) -> Self {
        src.to_fields()
    }
}

impl From<Fields> for Uuid {
    fn from(src: Fields) -> Self {
        Self::from_fields(&src)
    }
}

#[cfg(test)]
mod tests {
    use super::{Fields, Uuid};

    /// Splits prepared cases into fields correctly
    #[test]
    fn splits_prepared_cases_into_fields_correctly() {
        let e: Uuid = "84401971-b835-468f-866d-2915ddffc772".parse().unwrap();
        assert_eq!(
            e.to_fields(),
            Fields {
                time_low: 0x84401971,
                time_mid: 0xb835,
                time_hi_and_version: 0x468f,
                clock_seq_hi_and_res: 0x86,
                clock_seq_low: 0x6d,
                node: [0x29, 0x15, 0xdd, 0xff, 0xc7, 0x72],
            }
        );

        assert_eq!(Uuid::NIL.to_fields(), Fields::default());
        assert_eq!(
            Uuid::MAX.to_fields(),
            Fields {
                time_low: u32::MAX,
                time_mid: u16::MAX,
                time_hi_and_version: u16::MAX,
                clock_seq_hi_and_res: u8::MAX,
                clock_seq_low: u8::MAX,
                node: [u8::MAX; 6],
            }
        );
    }

    /// Reassembles original value from fields
    #[test]
    fn reassembles_original_value_from_fields() {
        let mut cases = vec![Uuid::NIL, Uuid::MAX, Uuid::NAMESPACE_X500];
        // walk a single set bit and a single cleared bit through every position
        for i in 0..128 {
            cases.push(Uuid::from(1u128 << i));
            cases.push(Uuid::from(!(1u128 << i)));
        }
        for _ in 0..1_000 {
            cases.push(Uuid::from(rand::random::<u128>()));
        }

        for e in cases {
            assert_eq!(Uuid::from_fields(&e.to_fields()), e);
            assert_eq!(Uuid::from(Fields::from(e)), e);
        }
    }
}
