//! # Shared Crypto - Ledger Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Block digests, proof-of-work targets |
//! | `symmetric` | AES-256-CFB | Per-order audit event encryption |
//!
//! ## Security Properties
//!
//! - **SHA-256**: digests are rendered as lowercase hex; difficulty counts
//!   leading `'0'` hex characters
//! - **AES-256-CFB**: fresh 128-bit IV per message, key zeroized on drop
//! - Keys are never derived or persisted; they live only in process memory

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod symmetric;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{leading_hex_zeros, meets_hex_difficulty, sha256, sha256_hex, Hash};
pub use symmetric::{decrypt, decrypt_string, encrypt, Iv, SecretKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
