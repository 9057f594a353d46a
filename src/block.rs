//======================================================================
// src/block.rs
// The ChaCha20 single-block core and its construction surface.
//======================================================================

use crate::backends;
use crate::consts::{CONSTANTS, COUNTER_WORD, STATE_WORDS};
use cipher::{Block, BlockSizeUser, Iv, IvSizeUser, Key, KeyIvInit, KeySizeUser};

/// One ChaCha20 block transform over a 16-word state.
///
/// The state holds four protocol constants, eight key words, the block
/// counter and three nonce words, in that order. [`transform`] leaves the
/// stored state untouched and returns the output keystream words; the
/// `keystream_block` helpers serialize them into the 64-byte wire block.
///
/// [`transform`]: Self::transform
#[derive(Clone)]
pub struct ChaChaBlock {
    /// The 512-bit state (16 x 32-bit words).
    state: [u32; STATE_WORDS],
}

impl KeySizeUser for ChaChaBlock {
    type KeySize = cipher::consts::U32;
}

impl IvSizeUser for ChaChaBlock {
    type IvSize = cipher::consts::U12;
}

impl BlockSizeUser for ChaChaBlock {
    type BlockSize = cipher::consts::U64; // 512-bit (64-byte) blocks
}

impl KeyIvInit for ChaChaBlock {
    /// Builds the initial state from a 256-bit key and a 96-bit nonce:
    /// the constants into words 0..4, little-endian key words into 4..12,
    /// a zero counter into word 12 and little-endian nonce words into
    /// 13..16.
    fn new(key: &Key<Self>, iv: &Iv<Self>) -> Self {
        let mut state = [0u32; STATE_WORDS];
        state[..4].copy_from_slice(&CONSTANTS);
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            state[4 + i] = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        for (i, chunk) in iv.chunks_exact(4).enumerate() {
            state[13 + i] = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        Self { state }
    }
}

impl ChaChaBlock {
    /// Wraps an already-assembled 16-word state.
    ///
    /// The caller is responsible for word order: constants in words 0..4
    /// and little-endian-normalized key, counter and nonce words after
    /// them. Any 16-word array is a valid state.
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self { state: words }
    }

    /// The current 16-word state.
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }

    /// The block counter (word 12).
    pub const fn counter(&self) -> u32 {
        self.state[COUNTER_WORD]
    }

    /// Sets the block counter (word 12).
    pub fn set_counter(&mut self, counter: u32) {
        self.state[COUNTER_WORD] = counter;
    }

    /// Runs the 20-round block function and returns the output state.
    ///
    /// The working copy never aliases the stored state, and the stored
    /// state is unchanged afterwards: the same instance always produces
    /// the same block.
    pub fn transform(&self) -> [u32; STATE_WORDS] {
        backends::block(&self.state)
    }

    /// Serializes the output state into `block` as little-endian words.
    pub fn write_keystream_block(&self, block: &mut Block<Self>) {
        let output = self.transform();
        for (chunk, word) in block.chunks_exact_mut(4).zip(output.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }

    /// The 64-byte keystream block for the current state.
    pub fn keystream_block(&self) -> Block<Self> {
        let mut block = Block::<Self>::default();
        self.write_keystream_block(&mut block);
        block
    }
}
