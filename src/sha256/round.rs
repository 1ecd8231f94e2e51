//! Single round of the compression function.

use super::State;
use super::words::{add32, big_sigma0, big_sigma1, choice, majority};

/// Advance the eight registers by one round.
///
/// `k` is the round constant and `w` the schedule word for this round. The
/// registers shift down by one, with `a` and `e` receiving the mixed values.
#[must_use]
pub fn step(state: State, k: u32, w: u32) -> State {
    let [a, b, c, d, e, f, g, h] = state.into_words();

    let t1 = add32(&[h, big_sigma1(e), choice(e, f, g), k, w]);
    let t2 = add32(&[big_sigma0(a), majority(a, b, c)]);

    State::from_words([add32(&[t1, t2]), a, b, c, add32(&[d, t1]), e, f, g])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::compress::{INITIAL_STATE, ROUND_CONSTANTS};

    #[test]
    fn zero_state_is_fixed_point_for_zero_inputs() {
        let zero = State::from_words([0; 8]);
        assert_eq!(step(zero, 0, 0), zero);
    }

    #[test]
    fn first_round_of_abc() {
        // t = 0 row of the FIPS 180-2 "abc" walkthrough
        let next = step(INITIAL_STATE, ROUND_CONSTANTS[0], 0x6162_6380);
        assert_eq!(
            next.into_words(),
            [
                0x5D6A_EBCD,
                0x6A09_E667,
                0xBB67_AE85,
                0x3C6E_F372,
                0xFA2A_4622,
                0x510E_527F,
                0x9B05_688C,
                0x1F83_D9AB,
            ]
        );
    }

    #[test]
    fn registers_shift_down() {
        let state = State::from_words([1, 2, 3, 4, 5, 6, 7, 8]);
        let next = step(state, 0x1234, 0x5678);
        let words = next.words();
        assert_eq!(&words[1..4], &[1, 2, 3]);
        assert_eq!(&words[5..8], &[5, 6, 7]);
    }
}
