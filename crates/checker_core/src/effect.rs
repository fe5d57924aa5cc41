#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one scan request for a normalized URL.
    CheckUrl { url: String },
    /// Ask the presentation layer to focus the URL input.
    FocusInput,
    /// Write `text` to the clipboard; on success the platform reports back
    /// with `Msg::CopyCompleted { confirmation, .. }`. Failures are
    /// swallowed at the boundary.
    CopyToClipboard { text: String, confirmation: String },
}
