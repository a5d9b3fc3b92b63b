//! Request DTOs for the call cache API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::cache::Payload;

/// Request body for the STORE operation (PUT /store)
///
/// `data` may be a JSON string, integer, float, or array of byte values.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The payload to store
    pub data: Payload,
}

/// How GET /get/:key decodes the stored bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoding {
    /// UTF-8 text
    #[default]
    Str,
    /// Base-10 integer
    Int,
    /// Byte array
    Raw,
}

/// Query string for GET /get/:key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetQuery {
    #[serde(rename = "as", default)]
    pub decoding: Decoding,
}

/// Query string for GET /page and GET /count
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    pub url: String,
}

impl PageQuery {
    /// Validates the URL
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.url.is_empty() {
            return Some("URL cannot be empty".to_string());
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Some("URL must start with http:// or https://".to_string());
        }
        None
    }
}
