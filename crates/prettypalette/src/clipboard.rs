//! Utility module with the clipboard abstraction.
//!
//! Copy actions write text through the [`Clipboard`] trait. The terminal
//! viewer uses [`Osc52Clipboard`], which asks the terminal to update the
//! system clipboard with the `OSC 52` escape sequence. [`NoClipboard`] stands
//! in when that is not possible, e.g., because the terminal is dumb or the
//! user disabled clipboard access.
use crate::error::ClipboardError;

/// A destination for copied text.
pub trait Clipboard {
    /// Write the text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// An unavailable clipboard, which rejects all writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::unavailable())
    }
}

// ====================================================================================================================

/// The dynamic `SetClipboard(TEXT)` command.
///
/// Upon display, this command emits `OSC 52 ; c ; <base64> ST`, which updates
/// the system clipboard in terminals that support it.
#[cfg(feature = "tty")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetClipboard<'a>(pub &'a str);

#[cfg(feature = "tty")]
impl prettytty::Command for SetClipboard<'_> {}

#[cfg(feature = "tty")]
impl std::fmt::Display for SetClipboard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        f.write_str("\x1b]52;c;")?;
        f.write_str(&STANDARD.encode(self.0))?;
        f.write_str("\x1b\\")
    }
}

/// A clipboard that writes `OSC 52` sequences to terminal output.
///
/// The terminal neither confirms nor rejects the update. Hence this clipboard
/// only fails if writing to the output fails.
#[cfg(feature = "tty")]
#[derive(Debug)]
pub struct Osc52Clipboard<W: std::io::Write> {
    output: W,
}

#[cfg(feature = "tty")]
impl<W: std::io::Write> Osc52Clipboard<W> {
    /// Create a new clipboard writing to the given output.
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Consume this clipboard and return the output.
    pub fn into_inner(self) -> W {
        self.output
    }
}

#[cfg(feature = "tty")]
impl<W: std::io::Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        write!(self.output, "{}", SetClipboard(text))?;
        self.output.flush()?;
        Ok(())
    }
}

// ====================================================================================================================
