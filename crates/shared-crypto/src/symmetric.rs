//! # Symmetric Encryption
//!
//! Audit-trail codec: AES-256 in CFB mode with a fresh random IV per message.
//!
//! ## Wire Form
//!
//! ```text
//! hex( IV (16 bytes) || ciphertext (len(plaintext) bytes) )
//! ```
//!
//! ## Security Properties
//!
//! - A new IV is drawn for every call, so equal plaintexts never produce
//!   equal ciphertexts under the same key
//! - CFB is unauthenticated: a corrupted ciphertext decrypts to garbage
//!   rather than failing, unless it breaks the hex/length framing

use crate::CryptoError;
use aes::Aes256;
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use std::fmt;
use zeroize::Zeroize;

type Aes256CfbEnc = cfb_mode::Encryptor<Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<Aes256>;

/// Key size in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// IV size in bytes (one AES block).
pub const IV_SIZE: usize = 16;

/// Secret key (256-bit).
///
/// Held in memory only; zeroized on drop and redacted from `Debug` output.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, checking its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let raw: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    /// Generate random key from the OS-seeded CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Initialization vector for CFB mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iv([u8; IV_SIZE]);

impl Iv {
    /// Generate random IV.
    pub fn generate() -> Self {
        let mut bytes = [0u8; IV_SIZE];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.0
    }
}

/// Encrypt plaintext and return hex(IV || ciphertext).
pub fn encrypt(key: &SecretKey, plaintext: &[u8]) -> String {
    let iv = Iv::generate();

    let mut framed = Vec::with_capacity(IV_SIZE + plaintext.len());
    framed.extend_from_slice(iv.as_bytes());
    framed.extend_from_slice(plaintext);

    Aes256CfbEnc::new(key.as_bytes().into(), iv.as_bytes().into()).encrypt(&mut framed[IV_SIZE..]);

    hex::encode(framed)
}

/// Decrypt a hex(IV || ciphertext) string back to plaintext bytes.
///
/// # Errors
///
/// Returns `CryptoError::MalformedCiphertext` if the input is not valid hex
/// or is shorter than one IV.
pub fn decrypt(key: &SecretKey, encoded: &str) -> Result<Vec<u8>, CryptoError> {
    let mut data = hex::decode(encoded)
        .map_err(|e| CryptoError::MalformedCiphertext(format!("invalid hex: {e}")))?;

    if data.len() < IV_SIZE {
        return Err(CryptoError::MalformedCiphertext(format!(
            "ciphertext too short: {} bytes, need at least {IV_SIZE}",
            data.len()
        )));
    }

    let mut payload = data.split_off(IV_SIZE);
    let iv: [u8; IV_SIZE] = data
        .as_slice()
        .try_into()
        .map_err(|_| CryptoError::MalformedCiphertext("iv framing".to_string()))?;

    Aes256CfbDec::new(key.as_bytes().into(), (&iv).into()).decrypt(&mut payload);

    Ok(payload)
}

/// Decrypt and interpret the plaintext as UTF-8 text.
///
/// # Errors
///
/// Returns `CryptoError::MalformedCiphertext` on framing errors or when the
/// recovered bytes are not valid UTF-8.
pub fn decrypt_string(key: &SecretKey, encoded: &str) -> Result<String, CryptoError> {
    let bytes = decrypt(key, encoded)?;
    String::from_utf8(bytes)
        .map_err(|e| CryptoError::MalformedCiphertext(format!("plaintext is not utf-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = SecretKey::generate();
        let plaintext = b"order created";

        let encoded = encrypt(&key, plaintext);
        let decrypted = decrypt(&key, &encoded).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_empty_plaintext() {
        let key = SecretKey::generate();
        let encoded = encrypt(&key, b"");

        assert_eq!(encoded.len(), IV_SIZE * 2);
        assert_eq!(decrypt_string(&key, &encoded).unwrap(), "");
    }

    #[test]
    fn test_multibyte_text() {
        let key = SecretKey::generate();
        let text = "статус: доставлено 📦 配達済み";

        let encoded = encrypt(&key, text.as_bytes());
        assert_eq!(decrypt_string(&key, &encoded).unwrap(), text);
    }

    #[test]
    fn test_fresh_iv_per_message() {
        let key = SecretKey::generate();
        let a = encrypt(&key, b"same message");
        let b = encrypt(&key, b"same message");
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_key_does_not_recover_plaintext() {
        let key1 = SecretKey::generate();
        let key2 = SecretKey::generate();

        let encoded = encrypt(&key1, b"Secret message");
        let result = decrypt(&key2, &encoded).unwrap();

        assert_ne!(result, b"Secret message");
    }

    #[test]
    fn test_invalid_hex_is_malformed() {
        let key = SecretKey::generate();
        let result = decrypt(&key, "not hex at all");
        assert!(matches!(result, Err(CryptoError::MalformedCiphertext(_))));
    }

    #[test]
    fn test_truncated_is_malformed() {
        let key = SecretKey::generate();
        let encoded = encrypt(&key, b"hello");

        // Keep only half the IV.
        let result = decrypt(&key, &encoded[..IV_SIZE]);
        assert!(matches!(result, Err(CryptoError::MalformedCiphertext(_))));
    }

    #[test]
    fn test_key_from_slice_checks_length() {
        assert!(SecretKey::from_slice(&[0u8; KEY_SIZE]).is_ok());
        assert_eq!(
            SecretKey::from_slice(&[0u8; 5]).unwrap_err(),
            CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: 5
            }
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = SecretKey::from_bytes([0xAB; KEY_SIZE]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("ab"));
        assert!(!rendered.contains("171"));
    }

    #[test]
    fn test_iv_uniqueness() {
        let n1 = Iv::generate();
        let n2 = Iv::generate();
        assert_ne!(n1.as_bytes(), n2.as_bytes());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_arbitrary_bytes(plaintext in proptest::collection::vec(any::<u8>(), 0..512)) {
            let key = SecretKey::generate();
            let encoded = encrypt(&key, &plaintext);
            prop_assert_eq!(decrypt(&key, &encoded).unwrap(), plaintext);
        }

        #[test]
        fn prop_roundtrip_arbitrary_text(text in ".*") {
            let key = SecretKey::generate();
            let encoded = encrypt(&key, text.as_bytes());
            prop_assert_eq!(decrypt_string(&key, &encoded).unwrap(), text);
        }
    }
}
