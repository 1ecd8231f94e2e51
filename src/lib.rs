//! SHA-256 from first principles, plus a length-extension forgery toolkit.
//!
//! The [`sha256`] module implements the hash bottom-up: word primitives, the
//! message schedule, the round function, the Davies–Meyer compression
//! function, Merkle–Damgård padding and a streaming [`Sha256`] context. The
//! [`attack`] module exploits the construction: a digest *is* the chaining
//! state, so hashing can resume from it.
//!
//! # Quick Start
//!
//! ```rust
//! use sha256_forge::{extend, forged_message, hash};
//!
//! let digest = hash(b"hello");
//!
//! // Forge without looking at the original bytes
//! let forged = extend(&digest, 5, b"!")?;
//!
//! // The verifier hashes the full message and gets the same value
//! assert_eq!(forged, hash(&forged_message(b"hello", b"!")));
//! # Ok::<(), sha256_forge::Error>(())
//! ```
//!
//! # Features
//!
//! - **Pure core** - every stage is a value-in/value-out function
//! - **Streaming hasher** - non-destructive `finalize`, cheap forking via `Clone`
//! - **Length extension** - one-shot [`extend`], streaming [`resume`] and a
//!   [`Forger`] for unknown original lengths
//! - **serde** (optional) - `Serialize`/`Deserialize` for states, digests and forgeries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod attack;
pub mod sha256;

pub use attack::{
    ForgeConfig, Forger, Forgery, extend, extend_from_bytes, forged_message, glue_padding, resume,
};
pub use sha256::{
    BLOCK_SIZE, Block, DIGEST_SIZE, Digest, Error, Result, Sha256, State, digest_to_state, hash,
    pad, state_to_digest,
};
