//! Hex transport encoding.

use crate::error::{GuardianError, Result};

use super::PayloadCodec;

/// `0x`-prefixed lowercase hex of the plaintext bytes
///
/// This is a transport encoding only. Anyone holding the payload can read
/// the record, so it offers no confidentiality whatsoever.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexCodec;

impl HexCodec {
    const PREFIX: &'static str = "0x";
}

impl PayloadCodec for HexCodec {
    fn name(&self) -> &str {
        "hex"
    }

    fn encode(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = String::with_capacity(Self::PREFIX.len() + plaintext.len() * 2);
        out.push_str(Self::PREFIX);
        out.push_str(&hex::encode(plaintext));
        Ok(out.into_bytes())
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let text = std::str::from_utf8(payload)
            .map_err(|e| GuardianError::decode(format!("hex payload is not ASCII: {e}")))?
            .trim();
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);

        hex::decode(digits).map_err(|e| GuardianError::decode(format!("invalid hex payload: {e}")))
    }
}
