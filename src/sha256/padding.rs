//! Merkle–Damgård padding.

use bytes::{BufMut, Bytes, BytesMut};

use super::{BLOCK_SIZE, LENGTH_FIELD_SIZE};

/// Number of padding bytes that follow a message of `message_len` bytes.
///
/// Always in `9..=72`.
#[inline]
#[must_use]
pub const fn padding_len(message_len: u64) -> usize {
    let rem = (message_len % BLOCK_SIZE as u64) as usize;
    let zeros = (2 * BLOCK_SIZE - 1 - LENGTH_FIELD_SIZE - rem) % BLOCK_SIZE;
    1 + zeros + LENGTH_FIELD_SIZE
}

/// Padding for a message of `message_len` bytes.
///
/// `0x80`, then zeros up to 8 bytes short of a block boundary, then the
/// message length in bits as a big-endian u64. The bit length is taken modulo
/// 2^64, as in FIPS 180-4.
#[must_use]
pub fn pad(message_len: u64) -> Bytes {
    let len = padding_len(message_len);
    let mut out = BytesMut::with_capacity(len);
    out.put_u8(0x80);
    out.put_bytes(0, len - 1 - LENGTH_FIELD_SIZE);
    out.put_u64(message_len.wrapping_mul(8));
    out.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn empty_message_pads_to_one_block() {
        let padding = pad(0);
        assert_eq!(padding.len(), 64);
        assert_eq!(padding[0], 0x80);
        assert!(padding[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn boundary_lengths() {
        assert_eq!(padding_len(55), 9);
        assert_eq!(padding_len(56), 72);
        assert_eq!(padding_len(63), 65);
        assert_eq!(padding_len(64), 64);
        assert_eq!(padding_len(119), 9);
    }

    #[test]
    fn five_byte_message() {
        let padding = pad(5);
        assert_eq!(padding.len(), 59);
        assert_eq!(&padding[51..], &hex!("0000000000000028"));
    }

    #[test]
    fn bit_length_is_big_endian() {
        let padding = pad(0x0102_0304);
        assert_eq!(&padding[padding.len() - 8..], &hex!("0000000008101820"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: message plus padding always ends on a block boundary
            #[test]
            fn prop_total_is_block_aligned(n in 0u64..(1u64 << 61)) {
                let padding = pad(n);
                prop_assert_eq!(padding.len(), padding_len(n));
                prop_assert_eq!((n + padding.len() as u64) % 64, 0);
                prop_assert!((9..=72).contains(&padding.len()));
            }

            /// Property: trailer decodes to the bit length and the filler is minimal
            #[test]
            fn prop_trailer_encodes_bit_length(n in 0u64..(1u64 << 61)) {
                let padding = pad(n);
                let trailer: [u8; 8] = padding[padding.len() - 8..].try_into().unwrap();
                prop_assert_eq!(u64::from_be_bytes(trailer), n * 8);
                prop_assert_eq!(padding[0], 0x80);
                prop_assert!(padding[1..padding.len() - 8].iter().all(|b| *b == 0));
                prop_assert!(padding.len() - 9 < 64);
            }
        }
    }
}
