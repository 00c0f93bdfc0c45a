//! Callbacks into the launcher hosting the plugin.

use std::path::Path;

use arboard::Clipboard;
use tracing::debug;

use crate::error::{MacroError, Result};

/// What the plugin may ask of its host
pub trait HostApi {
    /// Replace the visible query text; `requery` re-runs it immediately
    fn change_query(&mut self, query: &str, requery: bool);

    /// Show a user-visible notification
    fn show_message(&mut self, title: &str, body: &str, icon: &Path);
}

/// Clipboard write primitive
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard
///
/// The handle is opened on first use and kept, since on X11 and Wayland the
/// copied text is only served while it is alive.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| MacroError::ClipboardUnavailable(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| MacroError::ClipboardUnavailable("clipboard not initialized".into()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| MacroError::ClipboardUnavailable(e.to_string()))?;
        debug!(bytes = text.len(), "Copied macro to clipboard");
        Ok(())
    }
}
