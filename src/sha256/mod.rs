//! SHA-256 core
//!
//! Word primitives, message schedule, round function, compression, padding,
//! state/digest conversion and the streaming hasher. Everything except
//! [`Sha256`] is a pure function over fixed-size values.

mod codec;
mod compress;
mod error;
mod hasher;
mod padding;
mod round;
mod schedule;
mod types;
mod words;

pub use codec::{digest_to_state, state_from_digest, state_to_digest};
pub use compress::{INITIAL_STATE, ROUND_CONSTANTS, compress, compress_blocks, compress_slice};
pub use error::{Error, Result};
pub use hasher::{Sha256, hash};
pub use padding::{pad, padding_len};
pub use round::step;
pub use schedule::expand;
pub use types::{Block, Digest, Schedule, State};
pub use words::{
    add32, big_sigma0, big_sigma1, choice, majority, rotate_right32, small_sigma0, small_sigma1,
};

/// Compression input size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Number of 32-bit words in the chaining state
pub const STATE_WORDS: usize = 8;

/// Number of schedule words (and rounds) per block
pub const SCHEDULE_WORDS: usize = 64;

/// Size of the trailing bit-length field in the padding
pub const LENGTH_FIELD_SIZE: usize = 8;
