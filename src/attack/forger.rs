//! Candidate forgeries when the original length is only known to lie in a range.
//!
//! A secret-prefix MAC `H(secret ‖ message)` hides the secret's length, so the
//! attacker forges one candidate per plausible total length and lets the
//! verifier tell which one is accepted.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use super::extend::{extend, glue_padding};
use crate::sha256::{Digest, Error, Result};

/// Forger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// Smallest original length to try, in bytes.
    pub min_original_len: u64,
    /// Largest original length to try, in bytes (inclusive).
    pub max_original_len: u64,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            min_original_len: 0,
            max_original_len: 64,
        }
    }
}

impl ForgeConfig {
    /// Configuration for an exactly known original length.
    #[must_use]
    pub const fn exact(original_len: u64) -> Self {
        Self {
            min_original_len: original_len,
            max_original_len: original_len,
        }
    }

    /// Reject an empty range.
    pub fn validate(&self) -> Result<()> {
        if self.min_original_len > self.max_original_len {
            return Err(Error::InvalidLengthRange {
                min: self.min_original_len,
                max: self.max_original_len,
            });
        }
        Ok(())
    }
}

/// One forged (message tail, digest) pair for a guessed original length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forgery {
    /// Guessed length of the original message.
    pub original_len: u64,
    /// Padding that closed the original message.
    pub glue_padding: Bytes,
    /// Attacker-chosen bytes appended after the glue.
    pub suffix: Bytes,
    /// Digest of `original ‖ glue_padding ‖ suffix`.
    pub digest: Digest,
}

impl Forgery {
    /// Bytes the attacker appends to the original: `glue_padding ‖ suffix`.
    #[must_use]
    pub fn appended(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(self.glue_padding.len() + self.suffix.len());
        out.put_slice(&self.glue_padding);
        out.put_slice(&self.suffix);
        out.freeze()
    }

    /// Full forged message for a known original.
    ///
    /// Only hashes to [`Forgery::digest`] when `original.len()` equals the guess.
    #[must_use]
    pub fn message(&self, original: &[u8]) -> Bytes {
        let mut out =
            BytesMut::with_capacity(original.len() + self.glue_padding.len() + self.suffix.len());
        out.put_slice(original);
        out.put_slice(&self.glue_padding);
        out.put_slice(&self.suffix);
        out.freeze()
    }
}

/// Produces forgeries extending one published digest.
#[derive(Debug, Clone)]
pub struct Forger {
    original: Digest,
    config: ForgeConfig,
}

impl Forger {
    /// Forger for `original` over the configured length range.
    pub fn new(original: Digest, config: ForgeConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            min = config.min_original_len,
            max = config.max_original_len,
            "forger configured"
        );
        Ok(Self { original, config })
    }

    /// Digest being extended.
    #[must_use]
    pub fn original(&self) -> &Digest {
        &self.original
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    /// Forge for a single guessed length.
    pub fn forge(&self, original_len: u64, suffix: &[u8]) -> Result<Forgery> {
        let digest = extend(&self.original, original_len, suffix)?;
        Ok(Forgery {
            original_len,
            glue_padding: glue_padding(original_len),
            suffix: Bytes::copy_from_slice(suffix),
            digest,
        })
    }

    /// One forgery per length in the configured range, shortest first.
    pub fn candidates<'a>(
        &'a self,
        suffix: &'a [u8],
    ) -> impl Iterator<Item = Result<Forgery>> + 'a {
        (self.config.min_original_len..=self.config.max_original_len)
            .map(move |len| self.forge(len, suffix))
    }

    /// First candidate the verifier accepts, if any.
    pub fn find_accepted<F>(&self, suffix: &[u8], mut accepts: F) -> Result<Option<Forgery>>
    where
        F: FnMut(&Forgery) -> bool,
    {
        for candidate in self.candidates(suffix) {
            let candidate = candidate?;
            if accepts(&candidate) {
                debug!(original_len = candidate.original_len, "forgery accepted");
                return Ok(Some(candidate));
            }
        }
        debug!("no candidate accepted");
        Ok(None)
    }
}
