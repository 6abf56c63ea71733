//! System clipboard through the terminal (OSC 52)
//!
//! Works over SSH and inside tmux (with `set-clipboard on`); terminals that
//! ignore OSC 52 silently drop the text.

use std::io::Write;

use campaigner_app::Clipboard;
use campaigner_core::prelude::*;
use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;

#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        execute!(stdout, CopyToClipboard::to_clipboard_from(text))
            .map_err(|e| Error::clipboard(format!("OSC 52 write failed: {e}")))?;
        stdout.flush()?;
        debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}
