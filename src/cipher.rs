//! The four phases of an ACORN-128 computation.
//!
//! Every AEAD call drives the state through initialization, associated
//! data absorption, message processing and finalization, in that order.
//! Bytes are consumed least significant bit first, so full words travel
//! through the 32-clock update as little-endian `u32`s and the trailing
//! `len % 4` bytes through the 8-clock update.

use crate::state::State;

/// Reads a 16-byte key or nonce as four little-endian words.
#[inline]
fn le_words(bytes: &[u8; 16]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes"));
    }
    words
}

/// Loads the key and nonce into a fresh state: 1792 clocks total, all
/// with both control bits set. The key is fed once, then the nonce, then
/// the key repeats for the remaining 1536 clocks with its very first bit
/// flipped.
pub(crate) fn initialize(key: &[u8; 16], nonce: &[u8; 16]) -> State {
    let key = le_words(key);
    let nonce = le_words(nonce);
    let mut state = State::new();

    for &word in &key {
        state.clock32(word, u32::MAX, u32::MAX);
    }
    for &word in &nonce {
        state.clock32(word, u32::MAX, u32::MAX);
    }
    state.clock32(key[0] ^ 1, u32::MAX, u32::MAX);
    for i in 1..48 {
        state.clock32(key[i % 4], u32::MAX, u32::MAX);
    }

    state
}

/// Absorbs the associated data, followed by the domain pad.
pub(crate) fn absorb(state: &mut State, data: &[u8]) {
    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let word = u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes"));
        state.clock32(word, u32::MAX, u32::MAX);
    }
    for &byte in chunks.remainder() {
        state.clock8(byte, u8::MAX, u8::MAX);
    }

    pad(state, u32::MAX);
}

/// Encrypts `buffer` in place and applies the domain pad.
pub(crate) fn encrypt(state: &mut State, buffer: &mut [u8]) {
    let mut chunks = buffer.chunks_exact_mut(4);
    for chunk in &mut chunks {
        let word = u32::from_le_bytes((&*chunk).try_into().expect("chunk is 4 bytes"));
        let ks = state.clock32(word, u32::MAX, 0);
        chunk.copy_from_slice(&(word ^ ks).to_le_bytes());
    }
    for byte in chunks.into_remainder() {
        *byte ^= state.clock8(*byte, u8::MAX, 0);
    }

    pad(state, 0);
}

/// Decrypts `buffer` in place and applies the domain pad.
///
/// The bits fed back into the state are the recovered plaintext bits,
/// which is the only way decryption differs from encryption.
pub(crate) fn decrypt(state: &mut State, buffer: &mut [u8]) {
    let mut chunks = buffer.chunks_exact_mut(4);
    for chunk in &mut chunks {
        let word = u32::from_le_bytes((&*chunk).try_into().expect("chunk is 4 bytes"));
        chunk.copy_from_slice(&state.recover32(word).to_le_bytes());
    }
    for byte in chunks.into_remainder() {
        *byte = state.recover8(*byte);
    }

    pad(state, 0);
}

/// The 256-clock pad separating the phases: a lone one bit, 127 zeros
/// with `ca` still set, then 128 zeros with `ca` cleared. The associated
/// data pad runs with `cb` set, the message pad with `cb` cleared.
fn pad(state: &mut State, cb: u32) {
    state.clock32(1, u32::MAX, cb);
    for _ in 0..3 {
        state.clock32(0, u32::MAX, cb);
    }
    for _ in 0..4 {
        state.clock32(0, 0, cb);
    }
}

/// Runs the 768 finalization clocks and packs the last 128 keystream
/// bits into the tag, least significant bit of byte 0 first.
pub(crate) fn finalize(state: &mut State) -> [u8; 16] {
    for _ in 0..20 {
        state.clock32(0, u32::MAX, u32::MAX);
    }

    let mut tag = [0u8; 16];
    for chunk in tag.chunks_exact_mut(4) {
        let ks = state.clock32(0, u32::MAX, u32::MAX);
        chunk.copy_from_slice(&ks.to_le_bytes());
    }
    tag
}
