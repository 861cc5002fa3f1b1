//! System clipboard access for copying calculator results.

use arboard::Clipboard;

pub struct ClipboardService;

impl ClipboardService {
    /// Copies text to the system clipboard.
    ///
    /// Returns an error message suitable for the status bar on failure;
    /// clipboard availability varies by platform and session type.
    pub fn copy(text: &str) -> Result<(), String> {
        let mut clipboard =
            Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to copy to clipboard: {}", e))
    }
}
