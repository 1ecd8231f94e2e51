//! Conversion between the chaining state and its published digest form.

use super::{DIGEST_SIZE, Digest, Result, STATE_WORDS, State};

/// Serialize each word big-endian, in register order.
#[must_use]
pub fn state_to_digest(state: &State) -> Digest {
    let mut out = [0u8; DIGEST_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.words()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    Digest::from_array(out)
}

/// Recover the chaining state a digest was serialized from.
///
/// `bytes` must be exactly 32 bytes long.
pub fn digest_to_state(bytes: &[u8]) -> Result<State> {
    let digest = Digest::from_bytes(bytes)?;
    Ok(state_from_digest(&digest))
}

/// Infallible form of [`digest_to_state`] for an already sized digest.
#[must_use]
pub fn state_from_digest(digest: &Digest) -> State {
    let mut words = [0u32; STATE_WORDS];
    for (word, chunk) in words.iter_mut().zip(digest.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    State::from_words(words)
}

impl From<State> for Digest {
    fn from(state: State) -> Self {
        state_to_digest(&state)
    }
}

impl From<Digest> for State {
    fn from(digest: Digest) -> Self {
        state_from_digest(&digest)
    }
}
