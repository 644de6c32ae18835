use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CodecError, CodecResult};

/// Codec for converting raw image bytes to and from their stored text form.
///
/// The encoded form is standard base64: safe inside a JSON string value and
/// free of the storage layer's own delimiters. Encoding is lossless;
/// decoding reconstructs a byte-identical buffer.
pub struct ImageCodec;

impl ImageCodec {
    /// Encode a byte slice. Infallible for in-memory data.
    pub fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    /// Encode everything a reader yields.
    ///
    /// The reader is drained fully before any encoding happens, so a read
    /// failure partway through produces an error and no output.
    pub fn encode_reader<R: Read>(mut reader: R) -> CodecResult<String> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Self::encode(&buf))
    }

    /// Decode previously encoded data back into raw bytes.
    pub fn decode(encoded: &str) -> CodecResult<Vec<u8>> {
        STANDARD
            .decode(encoded)
            .map_err(|e| CodecError::Decode(e.to_string()))
    }
}
