//! Result presenter boundary: copy and read-aloud over injected OS
//! capabilities, reporting through transient notices.
//!
//! The OS integrations are capability traits so the core stays pure and the
//! presenter can be exercised with stubs.

use anyhow::Result;
use tracing::warn;

/// Severity of a transient user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// A transient notification (toast) for the UI to flash and drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }
}

/// OS clipboard capability.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// OS speech-synthesis capability. Fire-and-forget; unsupported
/// language/voice combinations are the collaborator's problem.
pub trait Speech {
    fn speak(&mut self, text: &str, lang_tag: &str);
}

/// System clipboard backed by arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self { inner: arboard::Clipboard::new()? })
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text.to_string())?;
        Ok(())
    }
}

/// Presents loaded translations: one copy action and one read-aloud action
/// per result entry.
pub struct Presenter<C: Clipboard, S: Speech> {
    clipboard: C,
    speech: S,
}

impl<C: Clipboard, S: Speech> Presenter<C, S> {
    pub fn new(clipboard: C, speech: S) -> Self {
        Self { clipboard, speech }
    }

    /// Copy a translated text to the clipboard.
    pub fn copy(&mut self, text: &str) -> Notice {
        match self.clipboard.write(text) {
            Ok(()) => Notice::success("Copied to clipboard!"),
            Err(e) => {
                warn!("Clipboard write failed: {:#}", e);
                Notice::error("Could not copy to clipboard")
            }
        }
    }

    /// Read a translated text aloud in the given language.
    pub fn read_aloud(&mut self, text: &str, lang_code: &str) {
        self.speech.speak(text, lang_code);
    }
}
