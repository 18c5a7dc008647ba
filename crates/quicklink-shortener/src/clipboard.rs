use crate::error::ClipboardError;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Destination for the copy affordance.
pub trait Clipboard: Send + Sync + 'static {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Arc<C> {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

/// The operating system clipboard.
///
/// A fresh handle is opened for every copy, so a clipboard that appears
/// after startup (e.g. a display server) is still picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        debug!(len = text.len(), "wrote text to system clipboard");
        Ok(())
    }
}

/// A process-local clipboard, for headless environments and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last copied text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_text() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.set_text("https://short.ly/abc123").unwrap();
        clipboard.set_text("https://short.ly/zzz999").unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("https://short.ly/zzz999"));
    }

    #[test]
    fn shared_clipboard_delegates() {
        let memory = Arc::new(MemoryClipboard::new());
        let clipboard: Arc<dyn Clipboard> = memory.clone();
        clipboard.set_text("x").unwrap();
        assert_eq!(memory.contents().as_deref(), Some("x"));
    }
}
