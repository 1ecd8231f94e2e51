//! Message schedule expansion.

use super::words::{add32, small_sigma0, small_sigma1};
use super::{Block, SCHEDULE_WORDS, Schedule};

/// Expand one block into the 64 words that drive the rounds.
#[must_use]
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (idx, chunk) in block.as_bytes().chunks_exact(4).enumerate() {
        w[idx] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..SCHEDULE_WORDS {
        w[t] = add32(&[
            w[t - 16],
            small_sigma0(w[t - 15]),
            w[t - 7],
            small_sigma1(w[t - 2]),
        ]);
    }

    Schedule::from_words(w)
}
