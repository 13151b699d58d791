use alloc::vec::Vec;

pub mod chacha_aead;

/// Key length in bytes.
pub const KEY_SIZE: usize = 32;
/// Nonce length in bytes.
pub const NONCE_SIZE: usize = 12;
/// Authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

#[derive(Debug, PartialEq)]
pub enum AeadError {
	EncryptionFailure,
	DecryptionFailure,
	InvalidKeyLength(usize),
	InvalidNonceLength(usize),
	InvalidTagLength(usize),
}

/// Ciphertext together with its detached authentication tag.
///
/// The ciphertext is always exactly as long as the plaintext it was produced
/// from. The tag authenticates the ciphertext under the key and nonce it was
/// sealed with.
#[derive(Debug, Clone, PartialEq)]
pub struct Sealed {
	pub ciphertext: Vec<u8>,
	pub tag: [u8; TAG_SIZE],
}

/// One-shot authenticated encryption.
///
/// Both operations are stateless, every call drives its own ephemeral cipher.
/// Nonce uniqueness per key is the caller's obligation and is neither enforced
/// nor detected here. Associated data is always empty.
pub trait AeadCipher {
	/// Seals `plaintext` under `key` and `nonce`.
	fn encrypt(plaintext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Sealed, AeadError>;

	/// Opens `ciphertext` and verifies `tag`. Plaintext is only returned when
	/// verification succeeds, a [`AeadError::DecryptionFailure`] carries no
	/// information about what went wrong.
	fn decrypt(ciphertext: &[u8], tag: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>, AeadError>;
}
