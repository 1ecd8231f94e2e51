//! Compression function, initial vector and round constants.

use super::round::step;
use super::schedule::expand;
use super::{Block, Result, SCHEDULE_WORDS, State};

/// Initial hash value (fractional parts of the square roots of the first 8 primes).
pub const INITIAL_STATE: State = State::from_words([
    0x6A09_E667,
    0xBB67_AE85,
    0x3C6E_F372,
    0xA54F_F53A,
    0x510E_527F,
    0x9B05_688C,
    0x1F83_D9AB,
    0x5BE0_CD19,
]);

/// Round constants (fractional parts of the cube roots of the first 64 primes).
pub const ROUND_CONSTANTS: [u32; SCHEDULE_WORDS] = [
    0x428A_2F98,
    0x7137_4491,
    0xB5C0_FBCF,
    0xE9B5_DBA5,
    0x3956_C25B,
    0x59F1_11F1,
    0x923F_82A4,
    0xAB1C_5ED5,
    0xD807_AA98,
    0x1283_5B01,
    0x2431_85BE,
    0x550C_7DC3,
    0x72BE_5D74,
    0x80DE_B1FE,
    0x9BDC_06A7,
    0xC19B_F174,
    0xE49B_69C1,
    0xEFBE_4786,
    0x0FC1_9DC6,
    0x240C_A1CC,
    0x2DE9_2C6F,
    0x4A74_84AA,
    0x5CB0_A9DC,
    0x76F9_88DA,
    0x983E_5152,
    0xA831_C66D,
    0xB003_27C8,
    0xBF59_7FC7,
    0xC6E0_0BF3,
    0xD5A7_9147,
    0x06CA_6351,
    0x1429_2967,
    0x27B7_0A85,
    0x2E1B_2138,
    0x4D2C_6DFC,
    0x5338_0D13,
    0x650A_7354,
    0x766A_0ABB,
    0x81C2_C92E,
    0x9272_2C85,
    0xA2BF_E8A1,
    0xA81A_664B,
    0xC24B_8B70,
    0xC76C_51A3,
    0xD192_E819,
    0xD699_0624,
    0xF40E_3585,
    0x106A_A070,
    0x19A4_C116,
    0x1E37_6C08,
    0x2748_774C,
    0x34B0_BCB5,
    0x391C_0CB3,
    0x4ED8_AA4A,
    0x5B9C_CA4F,
    0x682E_6FF3,
    0x748F_82EE,
    0x78A5_636F,
    0x84C8_7814,
    0x8CC7_0208,
    0x90BE_FFFA,
    0xA450_6CEB,
    0xBEF9_A3F7,
    0xC671_78F2,
];

/// Run 64 rounds over `block` and add the result back into `input`.
///
/// The output depends only on `input` and `block`, which is exactly what lets a
/// published digest be resumed as a chaining state.
#[must_use]
pub fn compress(input: State, block: &Block) -> State {
    let schedule = expand(block);

    let mut state = input;
    for (k, w) in ROUND_CONSTANTS.iter().zip(schedule.words()) {
        state = step(state, *k, *w);
    }

    let mut out = input.into_words();
    for (acc, word) in out.iter_mut().zip(state.words()) {
        *acc = acc.wrapping_add(*word);
    }
    State::from_words(out)
}

/// Compress a raw slice that must be exactly one block long.
pub fn compress_slice(input: State, block: &[u8]) -> Result<State> {
    Ok(compress(input, &Block::from_slice(block)?))
}

/// Fold a block-aligned byte run into `input`, one block at a time.
///
/// `data.len()` must be a multiple of 64; a trailing partial block is reported
/// as [`Error::InvalidBlockLength`](super::Error::InvalidBlockLength).
pub fn compress_blocks(input: State, data: &[u8]) -> Result<State> {
    data.chunks(super::BLOCK_SIZE)
        .try_fold(input, |state, chunk| compress_slice(state, chunk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::Error;

    fn padded_abc() -> Block {
        let mut bytes = [0u8; 64];
        bytes[..3].copy_from_slice(b"abc");
        bytes[3] = 0x80;
        bytes[63] = 24;
        Block::from_array(bytes)
    }

    #[test]
    fn single_block_abc_matches_digest_words() {
        let state = compress(INITIAL_STATE, &padded_abc());
        assert_eq!(
            state.into_words(),
            [
                0xBA78_16BF,
                0x8F01_CFEA,
                0x4141_40DE,
                0x5DAE_2223,
                0xB003_61A3,
                0x9617_7A9C,
                0xB410_FF61,
                0xF200_15AD,
            ]
        );
    }

    #[test]
    fn zero_state_zero_block() {
        let state = compress(State::from_words([0; 8]), &Block::from_array([0u8; 64]));
        assert_eq!(
            state.into_words(),
            [
                0x7CA5_1614,
                0x425C_3BA8,
                0xCE54_DD2F,
                0xC202_0AE7,
                0xB6E5_74D1,
                0x9813_6D0F,
                0xAE7E_26CC,
                0xBF0B_E7A6,
            ]
        );
    }

    #[test]
    fn compress_slice_checks_length() {
        assert_eq!(
            compress_slice(INITIAL_STATE, &[0u8; 10]),
            Err(Error::InvalidBlockLength { got: 10 })
        );
    }

    #[test]
    fn compress_blocks_rejects_ragged_tail() {
        assert_eq!(
            compress_blocks(INITIAL_STATE, &[0u8; 100]),
            Err(Error::InvalidBlockLength { got: 36 })
        );
        assert_eq!(compress_blocks(INITIAL_STATE, &[]), Ok(INITIAL_STATE));
    }

    #[test]
    fn compress_does_not_alias_input() {
        let input = INITIAL_STATE;
        let _ = compress(input, &padded_abc());
        assert_eq!(input, INITIAL_STATE);
    }
}
