//======================================================================
// src/consts.rs
// State geometry and protocol constants for the ChaCha20 block.
//======================================================================

/// Number of 32-bit words in the state.
pub const STATE_WORDS: usize = 16;

/// Size of one keystream block in bytes.
pub const BLOCK_BYTES: usize = 64;

/// Number of column/diagonal double rounds per block (20 rounds total).
pub const DOUBLE_ROUNDS: usize = 10;

/// Index of the block counter word.
pub const COUNTER_WORD: usize = 12;

/// The "expand 32-byte k" protocol constants occupying words 0..4.
pub const CONSTANTS: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];
