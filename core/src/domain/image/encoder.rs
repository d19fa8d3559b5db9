use std::io::Read;

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::domain::image::errors::EncodeError;

/// Mime type assumed for bare base64 payloads; it is what the capture path produces.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Transport form of an image: a `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for EncodedImage {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

pub fn encode_bytes(data: &[u8], mime_type: &str) -> EncodedImage {
    let payload = general_purpose::STANDARD.encode(data);
    EncodedImage(format!("data:{};base64,{}", mime_type, payload))
}

/// Reads the whole source and encodes it. Reading is the only way this can fail.
pub fn encode_reader<R: Read>(mut source: R, mime_type: &str) -> Result<EncodedImage, EncodeError> {
    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .map_err(|e| EncodeError::Unreadable(e.to_string()))?;

    Ok(encode_bytes(&data, mime_type))
}

/// Accepts a data URI or a bare base64 string.
pub fn decode(encoded: &str) -> Result<DecodedImage, EncodeError> {
    let encoded = encoded.trim();

    let (mime_type, payload) = match encoded.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| EncodeError::Malformed("data URI has no payload".to_string()))?;
            let mime_type = header.strip_suffix(";base64").ok_or_else(|| {
                EncodeError::Malformed("only base64 data URIs are supported".to_string())
            })?;
            let mime_type = if mime_type.is_empty() {
                DEFAULT_IMAGE_MIME
            } else {
                mime_type
            };
            (mime_type.to_string(), payload)
        }
        None => (DEFAULT_IMAGE_MIME.to_string(), encoded),
    };

    let data = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| EncodeError::Malformed(e.to_string()))?;

    if data.is_empty() {
        return Err(EncodeError::Malformed("empty image payload".to_string()));
    }

    Ok(DecodedImage { mime_type, data })
}
