//! Length extension over a published digest.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::{instrument, trace};

use crate::sha256::{
    Digest, Error, Result, Sha256, compress_blocks, pad, padding_len, state_from_digest,
    state_to_digest,
};

/// Padding the verifier implicitly appended to the original message.
///
/// These bytes sit between the original and the suffix in the forged message.
#[must_use]
pub fn glue_padding(original_len: u64) -> Bytes {
    pad(original_len)
}

/// Length of `original ‖ glue ‖ suffix`, or `None` if it overflows u64.
fn extended_len(original_len: u64, suffix_len: usize) -> Option<u64> {
    original_len
        .checked_add(padding_len(original_len) as u64)?
        .checked_add(suffix_len as u64)
}

/// Forge the digest of `original ‖ glue_padding(original_len) ‖ suffix`.
///
/// Only the digest and length of the original are needed: the digest is the
/// chaining state after the original's final block, so hashing resumes from it.
#[instrument(level = "trace", skip(original, suffix), fields(suffix_len = suffix.len()))]
pub fn extend(original: &Digest, original_len: u64, suffix: &[u8]) -> Result<Digest> {
    let state = state_from_digest(original);
    let total = extended_len(original_len, suffix.len()).ok_or(Error::LengthOverflow {
        original_len,
        suffix_len: suffix.len(),
    })?;

    let padding = pad(total);
    let mut tail = BytesMut::with_capacity(suffix.len() + padding.len());
    tail.put_slice(suffix);
    tail.put_slice(&padding);
    trace!(total, blocks = tail.len() / 64, "extending digest");

    let state = compress_blocks(state, &tail)?;
    Ok(state_to_digest(&state))
}

/// [`extend`] for a digest supplied as raw bytes; must be exactly 32 bytes.
pub fn extend_from_bytes(original: &[u8], original_len: u64, suffix: &[u8]) -> Result<Digest> {
    let digest = Digest::from_bytes(original)?;
    extend(&digest, original_len, suffix)
}

/// Streaming form of [`extend`]: a hasher positioned right after the glue padding.
///
/// Absorb the suffix into it in any number of chunks, then finalize.
pub fn resume(original: &Digest, original_len: u64) -> Result<Sha256> {
    let resumed_len = extended_len(original_len, 0).ok_or(Error::LengthOverflow {
        original_len,
        suffix_len: 0,
    })?;
    Sha256::from_parts(state_from_digest(original), resumed_len)
}

/// The literal message whose digest [`extend`] computes.
///
/// Needs the original bytes, so it is only useful for checking a forgery.
#[must_use]
pub fn forged_message(original: &[u8], suffix: &[u8]) -> Bytes {
    let glue = glue_padding(original.len() as u64);
    let mut out = BytesMut::with_capacity(original.len() + glue.len() + suffix.len());
    out.put_slice(original);
    out.put_slice(&glue);
    out.put_slice(suffix);
    out.freeze()
}
