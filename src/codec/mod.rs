//! Payload codecs
//!
//! A codec turns the opaque payload handed to the analyzer into plaintext
//! bytes and back. The reference codec is a plain hex transport encoding;
//! a key-management backed implementation can be dropped in behind the same
//! trait when real confidentiality is needed.

pub mod hex_codec;

pub use hex_codec::HexCodec;

use crate::error::{GuardianError, Result};
use crate::models::PatientRecord;

/// Encoding and decoding of analysis payloads
pub trait PayloadCodec: Send + Sync {
    /// Name used in log output
    fn name(&self) -> &str;

    /// Turn plaintext bytes into a payload
    fn encode(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Turn a payload back into plaintext bytes
    fn decode(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// Decode a payload into a patient record
///
/// The payload is run through the codec and the resulting plaintext must be
/// a JSON document matching the patient record schema. Nothing is returned
/// unless every step succeeds.
pub fn decode_record(codec: &dyn PayloadCodec, payload: &[u8]) -> Result<PatientRecord> {
    let plaintext = codec.decode(payload)?;
    log::debug!(
        "Decoded {} payload bytes into {} plaintext bytes with {}",
        payload.len(),
        plaintext.len(),
        codec.name()
    );

    serde_json::from_slice(&plaintext)
        .map_err(|e| GuardianError::decode(format!("payload is not a valid patient record: {e}")))
}

/// Encode a patient record into a payload
pub fn encode_record(codec: &dyn PayloadCodec, record: &PatientRecord) -> Result<Vec<u8>> {
    let plaintext = serde_json::to_vec(record).map_err(|e| {
        GuardianError::EncodeError(format!("failed to serialize patient record: {e}"))
    })?;
    codec.encode(&plaintext)
}
