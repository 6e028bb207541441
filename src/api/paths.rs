//! Decoding of the `path` query parameter.

#[derive(Debug, thiserror::Error)]
pub enum PathDecodeError {
    #[error("path is not valid UTF-8 after percent-decoding: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Decode a folder path received as a query parameter.
///
/// Blank input (empty or whitespace-only) passes through unchanged; anything
/// else is percent-decoded as UTF-8.
pub fn decode_content_path(path: &str) -> Result<String, PathDecodeError> {
    if path.trim().is_empty() {
        return Ok(path.to_owned());
    }
    Ok(urlencoding::decode(path)?.into_owned())
}
