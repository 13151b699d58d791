//! # Cachet-Lib
//! This is the `no_std` library of Cachet implementing one-shot authenticated
//! encryption and decryption with ChaCha20-Poly1305.
//!
#![no_std]

extern crate alloc;

pub mod cryptography;

pub use cryptography::symetric::chacha_aead::ChaChaPoly;
pub use cryptography::symetric::{AeadCipher, AeadError, Sealed};
