//! # SHA-256 Hashing
//!
//! Digest helpers used by the hash-chain integrity codec.
//!
//! Block hashes travel as lowercase hex strings, so the difficulty target is
//! expressed in leading `'0'` hex characters rather than leading zero bits.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Length of a hex-encoded SHA-256 digest.
pub const HEX_DIGEST_LEN: usize = 64;

/// Hash data with SHA-256 (one-shot).
#[inline]
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple inputs as if they were concatenated.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// Hash multiple inputs and return the lowercase hex digest.
pub fn sha256_hex(inputs: &[&[u8]]) -> String {
    hex::encode(sha256_many(inputs))
}

/// Count the leading `'0'` characters of a hex digest.
pub fn leading_hex_zeros(digest: &str) -> usize {
    digest.bytes().take_while(|b| *b == b'0').count()
}

/// Check if a hex digest meets a difficulty target.
///
/// Returns true if the digest starts with at least `difficulty` `'0'` chars.
#[inline]
pub fn meets_hex_difficulty(digest: &str, difficulty: usize) -> bool {
    digest.len() >= difficulty && digest.bytes().take(difficulty).all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256("abc")
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let oneshot = sha256(b"hello world");
        let many = sha256_many(&[b"hello ", b"world"]);
        assert_eq!(oneshot, many);
    }

    #[test]
    fn test_hex_digest_length() {
        let digest = sha256_hex(&[b"data"]);
        assert_eq!(digest.len(), HEX_DIGEST_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_leading_hex_zeros() {
        assert_eq!(leading_hex_zeros("000abc"), 3);
        assert_eq!(leading_hex_zeros("abc"), 0);
        assert_eq!(leading_hex_zeros(""), 0);
    }

    #[test]
    fn test_meets_hex_difficulty() {
        assert!(meets_hex_difficulty("00ff", 0));
        assert!(meets_hex_difficulty("00ff", 2));
        assert!(!meets_hex_difficulty("00ff", 3));
        assert!(!meets_hex_difficulty("0", 2));
        assert!(meets_hex_difficulty("", 0));
    }
}
