//======================================================================
// demos/state_block.rs
// Builds a demonstration state, runs one block transform, and prints
// both states as hexadecimal words.
//======================================================================

use chacha20_block::consts::{CONSTANTS, STATE_WORDS};
use chacha20_block::{endian, ChaChaBlock};

fn print_state(words: &[u32; STATE_WORDS]) {
    for row in words.chunks_exact(4) {
        println!("{:08x} {:08x} {:08x} {:08x}", row[0], row[1], row[2], row[3]);
    }
}

fn main() {
    // Key, counter and nonce written down big-endian style; normalized
    // below before they enter the state. The constants stay as-is.
    let mut words: [u32; STATE_WORDS] = [
        CONSTANTS[0], CONSTANTS[1], CONSTANTS[2], CONSTANTS[3],
        0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f,
        0x10111213, 0x14151617, 0x18191a1b, 0x1c1d1e1f,
        0x01000000, 0x00000009, 0x0000004a, 0x00000000,
    ];
    endian::normalize_words(&mut words[4..]);

    let block = ChaChaBlock::from_words(words);

    println!("initial state:");
    print_state(block.words());

    println!();
    println!("keystream block:");
    print_state(&block.transform());
}
