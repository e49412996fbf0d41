//! Integrity codec
//!
//! `digest = hex(SHA-256(prev_hash || payload_json || timestamp || nonce))`
//!
//! The payload is rendered as JSON (`null` for genesis, sorted object keys
//! for data), the timestamp as RFC 3339 UTC with nanoseconds, and the nonce
//! in decimal. The same inputs always produce the same digest.

use super::entities::{Block, BlockPayload};
use chrono::SecondsFormat;
use shared_crypto::sha256_hex;

/// Compute the digest of a block as it currently stands
pub fn digest(block: &Block) -> String {
    DigestInput::new(block).digest_with_nonce(block.nonce)
}

/// Canonical text form of a payload
pub fn canonical_payload(payload: &BlockPayload) -> String {
    // Object keys are strings and contract fields are plain values, so the
    // JSON encoder has no failing path here.
    let rendered = match payload {
        BlockPayload::Empty => Ok("null".to_string()),
        BlockPayload::Data(data) => serde_json::to_string(data),
        BlockPayload::Contract(contract) => serde_json::to_string(contract),
    };
    rendered.unwrap_or_default()
}

/// Everything hashed except the nonce
///
/// Built once per mining run so each attempt only formats the nonce.
pub(crate) struct DigestInput {
    head: String,
}

impl DigestInput {
    pub(crate) fn new(block: &Block) -> Self {
        let mut head = block.prev_hash.clone();
        head.push_str(&canonical_payload(&block.payload));
        head.push_str(
            &block
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Nanos, true),
        );
        Self { head }
    }

    pub(crate) fn digest_with_nonce(&self, nonce: u64) -> String {
        let nonce = nonce.to_string();
        sha256_hex(&[self.head.as_bytes(), nonce.as_bytes()])
    }
}
