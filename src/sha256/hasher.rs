//! Incremental SHA-256 hashing context.

use tracing::trace;

use super::codec::state_to_digest;
use super::compress::{INITIAL_STATE, compress};
use super::padding::pad;
use super::{BLOCK_SIZE, Block, Digest, Error, Result, State};

/// Streaming hasher: a chaining state, a partial block and a byte counter.
///
/// Absorbing is chunking-invariant. [`Sha256::finalize`] borrows the context,
/// so a digest can be taken mid-stream and absorption continued afterwards.
/// Cloning forks an independent timeline.
#[derive(Clone, Debug)]
pub struct Sha256 {
    state: State,
    buffer: [u8; BLOCK_SIZE],
    len: u64,
}

impl Sha256 {
    /// Fresh context at the initial vector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            len: 0,
        }
    }

    /// Resume from a chaining state after `len` bytes have been compressed.
    ///
    /// `len` must sit on a block boundary since no partial block is carried.
    pub fn from_parts(state: State, len: u64) -> Result<Self> {
        if len % BLOCK_SIZE as u64 != 0 {
            return Err(Error::UnalignedResume { len });
        }
        Ok(Self {
            state,
            buffer: [0u8; BLOCK_SIZE],
            len,
        })
    }

    /// Total bytes absorbed so far (including any resumed prefix).
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether nothing has been absorbed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current chaining state; excludes any bytes still buffered.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    fn buffered(&self) -> usize {
        (self.len % BLOCK_SIZE as u64) as usize
    }

    /// Append `data` to the message.
    pub fn absorb(&mut self, data: &[u8]) {
        let mut remaining = data;
        while !remaining.is_empty() {
            let filled = self.buffered();
            let take = (BLOCK_SIZE - filled).min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.buffer[filled..filled + take].copy_from_slice(head);
            self.len = self.len.wrapping_add(take as u64);
            remaining = tail;

            if filled + take == BLOCK_SIZE {
                self.state = compress(self.state, &Block::from_array(self.buffer));
                trace!(len = self.len, "compressed block");
            }
        }
    }

    /// Alias of [`Sha256::absorb`].
    pub fn update(&mut self, data: &[u8]) {
        self.absorb(data);
    }

    /// Digest of everything absorbed so far. Leaves the context untouched.
    #[must_use]
    pub fn finalize(&self) -> Digest {
        let filled = self.buffered();
        let padding = pad(self.len);

        let mut tail = [0u8; 2 * BLOCK_SIZE];
        let tail_len = filled + padding.len();
        tail[..filled].copy_from_slice(&self.buffer[..filled]);
        tail[filled..tail_len].copy_from_slice(&padding);
        debug_assert!(tail_len == BLOCK_SIZE || tail_len == 2 * BLOCK_SIZE);

        let mut state = self.state;
        for chunk in tail[..tail_len].chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            state = compress(state, &Block::from_array(block));
        }
        state_to_digest(&state)
    }

    /// Lowercase hex of [`Sha256::finalize`].
    #[must_use]
    pub fn hexdigest(&self) -> String {
        self.finalize().to_hex()
    }

    /// One-shot digest of `data`.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.absorb(data);
        hasher.finalize()
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot SHA-256 of `data`.
#[must_use]
pub fn hash(data: &[u8]) -> Digest {
    Sha256::digest(data)
}
