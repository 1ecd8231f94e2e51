//! Fixed-size value types flowing through the compression pipeline.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::{BLOCK_SIZE, DIGEST_SIZE, Error, Result, SCHEDULE_WORDS, STATE_WORDS};

/// Chaining state: the eight working registers `a..h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State([u32; STATE_WORDS]);

impl State {
    /// Construct from eight words.
    #[must_use]
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Borrow the words in register order.
    #[must_use]
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Consume into the underlying words.
    #[must_use]
    pub const fn into_words(self) -> [u32; STATE_WORDS] {
        self.0
    }
}

impl Default for State {
    fn default() -> Self {
        super::compress::INITIAL_STATE
    }
}

impl From<[u32; STATE_WORDS]> for State {
    fn from(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }
}

impl Index<usize> for State {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

/// One 64-byte compression input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block([u8; BLOCK_SIZE]);

impl Block {
    /// Construct from a fixed-size array.
    #[must_use]
    pub const fn from_array(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Construct from a byte slice that must be exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; BLOCK_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidBlockLength { got: bytes.len() })?;
        Ok(Self(array))
    }

    /// Borrow as bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

/// Message schedule derived from a single block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule([u32; SCHEDULE_WORDS]);

impl Schedule {
    pub(crate) const fn from_words(words: [u32; SCHEDULE_WORDS]) -> Self {
        Self(words)
    }

    /// Borrow all 64 words.
    #[must_use]
    pub const fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.0
    }
}

impl Index<usize> for Schedule {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

/// 32-byte SHA-256 output.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Construct from a fixed-size array.
    #[must_use]
    pub const fn from_array(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Construct from a byte slice that must be exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; DIGEST_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidDigestLength { got: bytes.len() })?;
        Ok(Self(array))
    }

    /// Borrow as bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consume into the raw array.
    #[must_use]
    pub const fn into_array(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Lowercase hex rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_rejects_wrong_length() {
        assert_eq!(
            Block::from_slice(&[0u8; 63]),
            Err(Error::InvalidBlockLength { got: 63 })
        );
        assert_eq!(
            Block::try_from(&[0u8; 65][..]),
            Err(Error::InvalidBlockLength { got: 65 })
        );
        assert!(Block::from_slice(&[7u8; 64]).is_ok());
    }

    #[test]
    fn digest_hex_parse_and_display() {
        let text = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        let digest: Digest = text.parse().unwrap();
        assert_eq!(digest.to_string(), text);
        assert_eq!(format!("{digest:x}"), text);
        assert_eq!(digest.to_hex(), text);
    }

    #[test]
    fn digest_parse_rejects_bad_input() {
        assert!(matches!("zz".parse::<Digest>(), Err(Error::InvalidHex(_))));
        assert_eq!(
            "abcd".parse::<Digest>(),
            Err(Error::InvalidDigestLength { got: 2 })
        );
    }

    #[test]
    fn default_state_is_initial_vector() {
        assert_eq!(State::default().words()[0], 0x6A09_E667);
        assert_eq!(State::default()[7], 0x5BE0_CD19);
    }
}
