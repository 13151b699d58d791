use crate::cryptography::symetric::{AeadCipher, AeadError, Sealed, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use alloc::vec::Vec;
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce, Tag};
use chacha20poly1305::aead::{AeadInPlace, KeyInit};
use zeroize::Zeroize;

pub struct ChaChaPoly;

impl AeadCipher for ChaChaPoly {
	fn encrypt(plaintext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Sealed, AeadError> {
		if key.len() != KEY_SIZE {
			return Err(AeadError::InvalidKeyLength(key.len()))
		}
		if nonce.len() != NONCE_SIZE {
			return Err(AeadError::InvalidNonceLength(nonce.len()))
		}
		let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
		let mut ciphertext = plaintext.to_vec();
		let tag = cipher
			.encrypt_in_place_detached(Nonce::from_slice(nonce), b"", &mut ciphertext)
			.map_err(|_| AeadError::EncryptionFailure)?;
		let mut tag_bytes = [0_u8; TAG_SIZE];
		tag_bytes.copy_from_slice(tag.as_slice());
		Ok(Sealed { ciphertext, tag: tag_bytes })
	}

	fn decrypt(ciphertext: &[u8], tag: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>, AeadError> {
		if key.len() != KEY_SIZE {
			return Err(AeadError::InvalidKeyLength(key.len()))
		}
		if nonce.len() != NONCE_SIZE {
			return Err(AeadError::InvalidNonceLength(nonce.len()))
		}
		if tag.len() != TAG_SIZE {
			return Err(AeadError::InvalidTagLength(tag.len()))
		}
		let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
		let mut plaintext = ciphertext.to_vec();
		match cipher.decrypt_in_place_detached(Nonce::from_slice(nonce), b"", &mut plaintext, Tag::from_slice(tag)) {
			Ok(()) => Ok(plaintext),
			Err(_) => {
				// The buffer already holds the unauthenticated candidate,
				// it must not leave this function.
				plaintext.zeroize();
				Err(AeadError::DecryptionFailure)
			}
		}
	}
}
