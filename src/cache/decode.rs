//! Decoders applied to raw stored bytes.
//!
//! Failures surface as [`CacheError::Decode`]; no default is substituted.

use crate::error::{CacheError, Result};

/// Decodes bytes as UTF-8 text.
pub fn utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| CacheError::Decode(format!("invalid UTF-8: {}", e)))
}

/// Decodes bytes as a base-10 signed integer, ignoring surrounding whitespace.
pub fn integer(bytes: &[u8]) -> Result<i64> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| CacheError::Decode(format!("invalid UTF-8: {}", e)))?;

    text.trim()
        .parse::<i64>()
        .map_err(|_| CacheError::Decode(format!("not an integer: {:?}", text)))
}

/// Returns the bytes unchanged.
pub fn raw(bytes: &[u8]) -> Result<Vec<u8>> {
    Ok(bytes.to_vec())
}
