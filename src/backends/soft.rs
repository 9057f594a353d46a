//======================================================================
// src/backends/soft.rs
// Software (scalar) implementation of the ChaCha20 block function.
//======================================================================

use crate::consts::{DOUBLE_ROUNDS, STATE_WORDS};

/// The ARX quarter round over four state positions.
///
/// Additions wrap modulo 2^32; the rotation amounts {16, 12, 8, 7} are
/// fixed by the cipher definition.
#[inline(always)]
pub(crate) fn quarter_round(
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    state: &mut [u32; STATE_WORDS],
) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Runs the 20 mixing rounds in place. Each of the `DOUBLE_ROUNDS`
/// iterations applies a column round followed by a diagonal round; the
/// column round finishes all four quartets before the diagonal round
/// starts.
#[inline(always)]
pub(crate) fn rounds(state: &mut [u32; STATE_WORDS]) {
    for _ in 0..DOUBLE_ROUNDS {
        // Column round
        quarter_round(0, 4, 8, 12, state);
        quarter_round(1, 5, 9, 13, state);
        quarter_round(2, 6, 10, 14, state);
        quarter_round(3, 7, 11, 15, state);

        // Diagonal round
        quarter_round(0, 5, 10, 15, state);
        quarter_round(1, 6, 11, 12, state);
        quarter_round(2, 7, 8, 13, state);
        quarter_round(3, 4, 9, 14, state);
    }
}

/// The full block function: 20 rounds over a working copy of `state`,
/// then a word-wise wrapping add with the original words.
#[inline(always)]
pub(crate) fn block(state: &[u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
    let mut working_state = *state;
    rounds(&mut working_state);
    for (word, input) in working_state.iter_mut().zip(state.iter()) {
        *word = word.wrapping_add(*input);
    }
    working_state
}
