//! Snapshot blob format.
//!
//! ```text
//! "TNT" 0x01 | blake3(body) [32 bytes] | body = zstd(json(store))
//! ```

use tenet_core::errors::{StorageError, TenetResult};
use tenet_core::models::PrincipleStore;

pub const MAGIC: [u8; 4] = *b"TNT\x01";
const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = MAGIC.len() + CHECKSUM_LEN;
const ZSTD_LEVEL: i32 = 3;

/// An encoded snapshot and the hex checksum of its body.
#[derive(Debug, Clone)]
pub struct EncodedSnapshot {
    pub bytes: Vec<u8>,
    pub checksum: String,
}

fn corrupt(details: impl Into<String>) -> StorageError {
    StorageError::CorruptSnapshot {
        details: details.into(),
    }
}

pub fn encode(store: &PrincipleStore) -> TenetResult<EncodedSnapshot> {
    let json = serde_json::to_vec(store)?;
    let body = zstd::encode_all(json.as_slice(), ZSTD_LEVEL)
        .map_err(|e| corrupt(format!("compression failed: {e}")))?;
    let hash = blake3::hash(&body);

    let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(hash.as_bytes());
    bytes.extend_from_slice(&body);
    Ok(EncodedSnapshot {
        bytes,
        checksum: hash.to_hex().to_string(),
    })
}

/// Verify magic and checksum, then decompress and deserialize.
pub fn decode(bytes: &[u8]) -> TenetResult<PrincipleStore> {
    if bytes.len() < HEADER_LEN {
        return Err(corrupt(format!("{} bytes is shorter than the header", bytes.len())).into());
    }
    if bytes[..MAGIC.len()] != MAGIC {
        return Err(corrupt("bad magic").into());
    }
    let mut expected = [0u8; CHECKSUM_LEN];
    expected.copy_from_slice(&bytes[MAGIC.len()..HEADER_LEN]);
    let body = &bytes[HEADER_LEN..];
    if blake3::Hash::from(expected) != blake3::hash(body) {
        return Err(corrupt("checksum mismatch").into());
    }

    let json = zstd::decode_all(body).map_err(|e| corrupt(format!("decompression failed: {e}")))?;
    serde_json::from_slice(&json).map_err(|e| corrupt(format!("invalid store json: {e}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_survives() {
        let encoded = encode(&PrincipleStore::new()).unwrap();
        assert_eq!(&encoded.bytes[..4], b"TNT\x01");
        assert_eq!(encoded.checksum.len(), 64);
        assert_eq!(decode(&encoded.bytes).unwrap(), PrincipleStore::new());
    }

    #[test]
    fn flipped_byte_is_detected() {
        let mut bytes = encode(&PrincipleStore::new()).unwrap().bytes;
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("checksum mismatch"));
    }

    #[test]
    fn truncated_and_foreign_blobs_are_rejected() {
        assert!(decode(b"TNT").is_err());
        let mut bytes = encode(&PrincipleStore::new()).unwrap().bytes;
        bytes[3] = 0x02;
        assert!(decode(&bytes).unwrap_err().to_string().contains("bad magic"));
    }
}
