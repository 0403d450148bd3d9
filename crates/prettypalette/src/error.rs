//! Utility module with prettypalette's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=9` for the swatch indices of a
///     [`PaletteRow`](crate::palette::PaletteRow);
///   * `0..=21` for the index values of
///     [`ColorScheme`](crate::palette::ColorScheme).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous hexadecimal color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color that contains characters other than an optional leading `#`
    /// followed by hexadecimal digits. For example, `rgb(0, 0, 0)` is not a
    /// hexadecimal color at all.
    UnknownFormat,

    /// A color with an unexpected number of characters. For example, `#00`
    /// is missing a hexadecimal digit, whereas `#💩00` has a multi-byte
    /// character in place of the digits.
    UnexpectedCharacters,

    /// A color with a malformed hexadecimal coordinate. For example, `#00g000`
    /// has a malformed second coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color should be hexadecimal digits with optional leading `#`")
            }
            UnexpectedCharacters => {
                f.write_str("color should have 3 or 6 hexadecimal digits but has not")
            }
            MalformedHex => {
                f.write_str("color coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An invalid color model tag.
///
/// Prettypalette displays colors in four models only, `HEX`, `RGB`, `CMYK`,
/// and `HSL`. This error captures any other tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorModelError {
    tag: String,
}

impl ColorModelError {
    /// Create a new color model error for the given tag.
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self { tag: tag.into() }
    }

    /// Get the rejected tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl std::fmt::Display for ColorModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "color model should be HEX, RGB, CMYK, or HSL but is `{}`",
            self.tag
        )
    }
}

impl std::error::Error for ColorModelError {}

#[cfg(feature = "pyffi")]
impl From<ColorModelError> for PyErr {
    fn from(value: ColorModelError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous palette selection such as `Slate-550`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// A selection without the dash separating scheme and shade. For example,
    /// `Slate500` lacks the dash.
    MissingShade,

    /// A selection with an unknown scheme name. For example, `Mauve-500`
    /// names a scheme that is not part of the palette.
    UnknownScheme,

    /// A selection with a shade that is not a valid label. For example,
    /// `Slate-550` names a shade in between rows.
    UnknownShade,
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use SelectionError::*;

        f.write_str(match self {
            MissingShade => "selection should be <scheme>-<shade> but has no dash",
            UnknownScheme => "selection should start with a known scheme but does not",
            UnknownShade => "selection should end with 50, 100, 200, ..., or 900 but does not",
        })
    }
}

impl std::error::Error for SelectionError {}

#[cfg(feature = "pyffi")]
impl From<SelectionError> for PyErr {
    fn from(value: SelectionError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of errors while copying text to a clipboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardErrorKind {
    /// The clipboard is disabled or the terminal cannot access it.
    Unavailable,
    /// Writing the text failed.
    WriteText,
}

/// An error while copying text to a clipboard.
#[derive(Debug)]
pub struct ClipboardError {
    kind: ClipboardErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ClipboardError {
    /// Create a new error for an unavailable clipboard.
    pub fn unavailable() -> Self {
        Self {
            kind: ClipboardErrorKind::Unavailable,
            source: None,
        }
    }

    /// Create a new error for a failed write.
    pub fn write(source: std::io::Error) -> Self {
        Self {
            kind: ClipboardErrorKind::WriteText,
            source: Some(Box::new(source)),
        }
    }

    /// Get the kind of error.
    pub fn kind(&self) -> ClipboardErrorKind {
        self.kind
    }
}

impl From<std::io::Error> for ClipboardError {
    fn from(value: std::io::Error) -> Self {
        Self::write(value)
    }
}

impl From<ClipboardError> for std::io::Error {
    fn from(value: ClipboardError) -> Self {
        std::io::Error::other(value)
    }
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self.kind {
            ClipboardErrorKind::Unavailable => "clipboard is not available",
            ClipboardErrorKind::WriteText => "could not write text to clipboard",
        })
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}
