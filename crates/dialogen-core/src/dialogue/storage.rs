//! File persistence for dialogues.
//!
//! Two on-disk forms exist:
//!
//! - **JSON**: the UTF-8 interchange format external tools read and write.
//! - **Blob**: an opaque binary checkpoint for same-process, same-version
//!   round trips. The framing is magic bytes, a format version, and a
//!   length-prefixed payload; cross-version compatibility is not claimed,
//!   the version field only makes incompatibility fail cleanly.
//!
//! All operations are synchronous and single-shot. Handles are scoped to
//! each call; on failure the target file is left in an unspecified state
//! and the error propagates to the caller. Concurrent writers to one path
//! are last-writer-wins; callers serialize access externally.

use crate::dialogue::model::Dialogue;
use crate::error::{DialogenError, Result};
use crate::schema::SchemaModel;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const BLOB_MAGIC: [u8; 4] = *b"DGN1";
const BLOB_VERSION: u16 = 1;
const BLOB_HEADER_LEN: usize = 4 + 2 + 8;

fn encode_blob<T: Serialize>(root: &T) -> Result<Vec<u8>> {
    let payload =
        serde_json::to_vec(root).map_err(|e| DialogenError::internal(e.to_string()))?;

    let mut bytes = Vec::with_capacity(BLOB_HEADER_LEN + payload.len());
    bytes.extend_from_slice(&BLOB_MAGIC);
    bytes.extend_from_slice(&BLOB_VERSION.to_le_bytes());
    bytes.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

fn decode_blob<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    if bytes.len() < BLOB_HEADER_LEN {
        return Err(DialogenError::deserialization(format!(
            "blob too short: {} bytes, header needs {}",
            bytes.len(),
            BLOB_HEADER_LEN
        )));
    }
    if bytes[0..4] != BLOB_MAGIC {
        return Err(DialogenError::deserialization(
            "bad magic bytes, not a dialogue blob",
        ));
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != BLOB_VERSION {
        return Err(DialogenError::deserialization(format!(
            "unsupported blob version {} (expected {})",
            version, BLOB_VERSION
        )));
    }

    // Safe to unwrap because the header length was checked above
    let declared = u64::from_le_bytes(bytes[6..14].try_into().unwrap()) as usize;
    let payload = &bytes[BLOB_HEADER_LEN..];
    if payload.len() != declared {
        return Err(DialogenError::deserialization(format!(
            "payload length mismatch: header declares {} bytes, found {}",
            declared,
            payload.len()
        )));
    }

    serde_json::from_slice(payload)
        .map_err(|e| DialogenError::deserialization(format!("undecodable payload: {}", e)))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        DialogenError::io(format!("failed to read {:?}: {} (kind: {:?})", path, e, e.kind()))
    })
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| {
        DialogenError::io(format!("failed to write {:?}: {} (kind: {:?})", path, e, e.kind()))
    })
}

impl Dialogue {
    /// Saves the dialogue to a UTF-8 JSON file, creating or overwriting it.
    ///
    /// `pretty` selects indented output; the compact form is a single line.
    pub fn save_to_json(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json(pretty)?;
        write_bytes(path, text.as_bytes())?;
        tracing::debug!("Saved dialogue JSON to {:?} (pretty: {})", path, pretty);
        Ok(())
    }

    /// Loads a dialogue from a JSON file, validating it like construction.
    pub fn load_from_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            DialogenError::io(format!("failed to read {:?}: {} (kind: {:?})", path, e, e.kind()))
        })?;
        let dialogue = Self::from_json(&text)?;
        tracing::debug!("Loaded dialogue JSON from {:?}", path);
        Ok(dialogue)
    }

    /// Saves the dialogue as an opaque binary checkpoint.
    pub fn save_to_blob(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_bytes(path, &encode_blob(self)?)?;
        tracing::debug!("Saved dialogue blob to {:?}", path);
        Ok(())
    }

    /// Loads a dialogue from a binary checkpoint.
    ///
    /// Fails with `DialogenError::Deserialization` when the bytes are
    /// corrupt or were written by an incompatible encoder version.
    pub fn load_from_blob(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dialogue = decode_blob(&read_bytes(path)?)?;
        tracing::debug!("Loaded dialogue blob from {:?}", path);
        Ok(dialogue)
    }

    /// Saves an ordered batch of dialogues as a single binary checkpoint.
    pub fn save_batch_to_blob(dialogues: &[Dialogue], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_bytes(path, &encode_blob(&dialogues)?)?;
        tracing::debug!("Saved batch of {} dialogues to {:?}", dialogues.len(), path);
        Ok(())
    }

    /// Loads an ordered batch of dialogues from a binary checkpoint.
    pub fn load_batch_from_blob(path: impl AsRef<Path>) -> Result<Vec<Dialogue>> {
        let path = path.as_ref();
        let dialogues: Vec<Dialogue> = decode_blob(&read_bytes(path)?)?;
        tracing::debug!("Loaded batch of {} dialogues from {:?}", dialogues.len(), path);
        Ok(dialogues)
    }
}
