use thiserror::Error;

/// Rejections raised before a submit ever reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input was empty or whitespace-only. The `Display` text doubles
    /// as the user-facing message.
    #[error("Please enter a URL to check")]
    Empty,
}

/// Trim surrounding whitespace and reject empty submissions.
///
/// URL syntax is deliberately not validated here; the scan backend owns
/// that contract and reports its own error for malformed URLs.
pub fn normalize(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed.to_owned())
}
