use checker_logging::checker_warn;

/// System clipboard access. Construction failure (headless session, no
/// display server) is tolerated; every copy then reports failure and the
/// caller simply skips the confirmation toast.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                checker_warn!("clipboard unavailable: {}", err);
                None
            }
        };
        Self { inner }
    }

    /// Returns `true` when the text landed on the clipboard.
    pub fn set_text(&mut self, text: &str) -> bool {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text).is_ok(),
            None => false,
        }
    }
}
