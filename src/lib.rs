//! The ACORN-128 authenticated cipher.
//!
//! [ACORN-128] is a lightweight authenticated encryption cipher with
//! associated data (AEAD) selected for the final portfolio of the CAESAR
//! competition. It keeps a 293-bit state built from seven linear feedback
//! shift registers and produces one keystream bit per state clock; this
//! implementation advances the state 32 clocks (or 8 for trailing bytes)
//! at a time and is bit-compatible with the serial definition.
//!
//! AEAD functionality is accessed using traits from the re-exported
//! [`aead`] crate.
//!
//! # Security Warning
//!
//! ACORN-128 survived the CAESAR process, but this implementation has not
//! received any independent security audit.
//!
//! USE AT YOUR OWN RISK!
//!
//! # Usage
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use acorn_aead::Acorn128;
//! use acorn_aead::aead::{Aead, KeyInit};
//!
//! let key = b"sixteen byte key";
//! let cipher = Acorn128::new(key.into());
//! let nonce = b"unique nonce 016"; // 128 bits; unique per message
//!
//! let ciphertext = cipher
//!     .encrypt(nonce.into(), b"plaintext message".as_ref())
//!     .expect("encryption failure!");
//!
//! let plaintext = cipher
//!     .decrypt(nonce.into(), ciphertext.as_ref())
//!     .expect("decryption failure!");
//!
//! assert_eq!(&plaintext, b"plaintext message");
//! # }
//! ```
//!
//! ## In-place usage
//!
//! The [`aead::AeadInPlace`] trait offers detached encryption and
//! decryption without allocation. A failed decryption wipes the
//! recovered bytes before returning; on success the buffer holds the
//! plaintext.
//!
//! [ACORN-128]: https://competitions.cr.yp.to/round3/acornv3.pdf

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

pub use aead;

mod cipher;
mod state;

use aead::{
    consts::{U0, U16},
    AeadCore, AeadInPlace, Error, KeyInit, KeySizeUser, Result,
};
use subtle::ConstantTimeEq;

/// Size of an ACORN-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Size of an ACORN-128 nonce in bytes.
pub const NONCE_SIZE: usize = 16;

/// Size of an ACORN-128 authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// ACORN-128 key.
pub type Key = aead::Key<Acorn128>;

/// ACORN-128 nonce.
pub type Nonce = aead::Nonce<Acorn128>;

/// ACORN-128 authentication tag.
pub type Tag = aead::Tag<Acorn128>;

/// The ACORN-128 authenticated cipher.
#[derive(Clone)]
#[cfg_attr(feature = "zeroize", derive(zeroize::ZeroizeOnDrop))]
pub struct Acorn128 {
    key: [u8; KEY_SIZE],
}

impl KeySizeUser for Acorn128 {
    type KeySize = U16;
}

impl KeyInit for Acorn128 {
    fn new(key: &Key) -> Self {
        Self { key: (*key).into() }
    }
}

impl AeadCore for Acorn128 {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for Acorn128 {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> Result<Tag> {
        let mut state = cipher::initialize(&self.key, nonce.as_ref());
        cipher::absorb(&mut state, associated_data);
        cipher::encrypt(&mut state, buffer);
        Ok(cipher::finalize(&mut state).into())
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag,
    ) -> Result<()> {
        let mut state = cipher::initialize(&self.key, nonce.as_ref());
        cipher::absorb(&mut state, associated_data);
        cipher::decrypt(&mut state, buffer);
        let expected = cipher::finalize(&mut state);

        if bool::from(expected.ct_eq(tag.as_slice())) {
            Ok(())
        } else {
            // The recovered bytes are unauthenticated; do not hand them out.
            buffer.fill(0);
            Err(Error)
        }
    }
}
