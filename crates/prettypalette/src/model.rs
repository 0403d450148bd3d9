//! Utility module with the color models and their channel metadata.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorModelError;
use crate::HexColor;

/// The enumeration of color models for displaying and copying colors.
///
/// The order of the variants is the order of the copy actions.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "prettypalette.palette")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Hashed hexadecimal, e.g., `#0EA5E9`.
    Hex,
    /// Red, green, and blue channels, e.g., `rgb(14, 165, 233)`.
    Rgb,
    /// Cyan, magenta, yellow, and key percentages, e.g., `cmyk(93, 29, 0, 8)`.
    Cmyk,
    /// Hue degrees with saturation and lightness percentages, e.g., `hsl(198,
    /// 88%, 48%)`.
    Hsl,
}

impl ColorModel {
    /// The number of color models.
    pub const COUNT: usize = 4;

    /// Get an iterator over all color models.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Hex, Self::Rgb, Self::Cmyk, Self::Hsl].into_iter()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorModel {
    /// Get this color model's tag, which also serves as its button label.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
            Self::Hsl => "HSL",
        }
    }

    /// Get the keyboard shortcut for copying in this color model.
    pub const fn shortcut(&self) -> char {
        match self {
            Self::Hex => '1',
            Self::Rgb => '2',
            Self::Cmyk => '3',
            Self::Hsl => '4',
        }
    }

    /// Get this color model's position among all color models.
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl std::str::FromStr for ColorModel {
    type Err = ColorModelError;

    /// Parse a color model tag, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|model| model.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorModelError::new(s))
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// The metadata for displaying one channel of a color model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMeta {
    /// The single-letter label.
    pub name: &'static str,
    /// The value displayed before any color has been converted.
    pub initial_text: &'static str,
    /// The color of label, ring, and value.
    pub fill_color: HexColor,
}

impl ChannelMeta {
    const fn new(name: &'static str, initial_text: &'static str, fill_color: HexColor) -> Self {
        Self {
            name,
            initial_text,
            fill_color,
        }
    }
}

/// The channels of the CMYK color model.
pub static CMYK_CHANNELS: [ChannelMeta; 4] = [
    ChannelMeta::new("C", "0", HexColor::new(0x06, 0xb6, 0xd4)),
    ChannelMeta::new("M", "0", HexColor::new(0xf4, 0x3f, 0x5e)),
    ChannelMeta::new("Y", "0", HexColor::new(0xfa, 0xcc, 0x15)),
    ChannelMeta::new("K", "0", HexColor::new(0x11, 0x18, 0x27)),
];

/// The channels of the RGB color model.
pub static RGB_CHANNELS: [ChannelMeta; 3] = [
    ChannelMeta::new("R", "255", HexColor::new(0xdc, 0x26, 0x26)),
    ChannelMeta::new("G", "255", HexColor::new(0x22, 0xc5, 0x5e)),
    ChannelMeta::new("B", "255", HexColor::new(0x25, 0x63, 0xeb)),
];

// ====================================================================================================================
