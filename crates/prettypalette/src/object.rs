#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{from_24bit, parse_hex, rgb_to_cmyk, rgb_to_hsl, to_channels};
use crate::error::{ColorFormatError, ColorModelError};
use crate::{ColorModel, Float};

/// A 24-bit color in hexadecimal notation.
///
/// Every swatch of the palette is a hexadecimal color and so is the currently
/// selected theme. A hexadecimal color has three coordinates, red, green, and
/// blue, each an unsigned byte. Since prettypalette only ever creates such
/// colors from the static palette or by parsing, all conversions are total:
/// Malformed input is rejected upfront with a [`ColorFormatError`].
///
/// # Conversions
///
/// [`HexColor::to_rgb`], [`HexColor::to_cmyk`], and [`HexColor::to_hsl`]
/// convert the color to the three color models displayed next to the palette.
/// RGB channels range `0..=255`, CMYK components `0..=1`, and HSL hue ranges
/// `0..360` degrees with saturation and lightness `0..=1`.
///
/// ```
/// # use prettypalette::HexColor;
/// # use std::str::FromStr;
/// let sky = HexColor::from_str("#0ea5e9")?;
/// assert_eq!(sky.to_rgb(), [14.0, 165.0, 233.0]);
/// # Ok::<(), prettypalette::error::ColorFormatError>(())
/// ```
///
/// # Formatting
///
/// The display trait formats the color in lowercase hashed hexadecimal, just
/// like the palette table itself. [`HexColor::format`] formats it in one of
/// the four [`ColorModel`]s, truncating all quantities.
///
/// ```
/// # use prettypalette::{ColorModel, HexColor};
/// let sky = HexColor::new(0x0e, 0xa5, 0xe9);
/// assert_eq!(sky.to_string(), "#0ea5e9");
/// assert_eq!(sky.format(ColorModel::Hex), "#0EA5E9");
/// assert_eq!(sky.format(ColorModel::Rgb), "rgb(14, 165, 233)");
/// assert_eq!(sky.format(ColorModel::Cmyk), "cmyk(93, 29, 0, 8)");
/// assert_eq!(sky.format(ColorModel::Hsl), "hsl(198, 88%, 48%)");
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #0ea5e9;"></div>
/// </div>
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "prettypalette.palette")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Pure white, the initially selected theme.
    pub const WHITE: HexColor = HexColor([0xff, 0xff, 0xff]);

    /// Pure black.
    pub const BLACK: HexColor = HexColor([0, 0, 0]);

    /// Create a new hexadecimal color from its coordinates.
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl HexColor {
    /// Create a new hexadecimal color from its coordinates.
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a hexadecimal color. <i class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as [`HexColor as
    /// FromStr`](struct.HexColor.html#impl-FromStr-for-HexColor) and is
    /// available in Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<HexColor, ColorFormatError> {
        use std::str::FromStr;

        HexColor::from_str(s)
    }

    /// Access this color's coordinates.
    #[inline]
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Get this color's RGB channels.
    ///
    /// Each channel ranges `0..=255`. The channels are floating point numbers
    /// because they are scaled back from the normalized coordinates used for
    /// all other conversions.
    pub fn to_rgb(&self) -> [Float; 3] {
        let [r, g, b] = self.0;
        to_channels(&from_24bit(r, g, b))
    }

    /// Get this color's CMYK components.
    ///
    /// Each component ranges `0..=1`. For pure black, cyan, magenta, and
    /// yellow are zero and the key is one.
    ///
    /// ```
    /// # use prettypalette::HexColor;
    /// assert_eq!(HexColor::BLACK.to_cmyk(), [0.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(HexColor::WHITE.to_cmyk(), [0.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn to_cmyk(&self) -> [Float; 4] {
        let [r, g, b] = self.0;
        rgb_to_cmyk(&from_24bit(r, g, b))
    }

    /// Get this color's HSL coordinates.
    ///
    /// Hue ranges `0..360` degrees. Saturation and lightness range `0..=1`.
    /// Achromatic colors have zero hue and saturation.
    pub fn to_hsl(&self) -> [Float; 3] {
        let [r, g, b] = self.0;
        rgb_to_hsl(&from_24bit(r, g, b))
    }

    /// Get this color's RGB channels and CMYK components in one go.
    pub fn to_channels(&self) -> ([Float; 3], [Float; 4]) {
        let [r, g, b] = self.0;
        let rgb = from_24bit(r, g, b);
        (to_channels(&rgb), rgb_to_cmyk(&rgb))
    }

    /// Determine whether this color is light, i.e., has a lightness of more
    /// than one half.
    ///
    /// Text drawn on top of a light color should be dark and vice versa.
    pub fn is_light(&self) -> bool {
        0.5 < self.to_hsl()[2]
    }

    /// Format this color in the given color model.
    pub fn format(&self, model: ColorModel) -> String {
        struct Formatted(ColorModel, [u8; 3]);

        impl std::fmt::Display for Formatted {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                crate::core::format(self.0, &self.1, f)
            }
        }

        Formatted(model, self.0).to_string()
    }

    /// Format this color in the color model with the given tag.
    ///
    /// Tags are `HEX`, `RGB`, `CMYK`, and `HSL`, ignoring ASCII case. This
    /// method fails for all other tags.
    pub fn format_tagged(&self, tag: &str) -> Result<String, ColorModelError> {
        tag.parse::<ColorModel>().map(|model| self.format(model))
    }

    /// Format this color in uppercase hashed hexadecimal.
    pub fn to_hex_upper(&self) -> String {
        self.format(ColorModel::Hex)
    }

    /// Convert this color in X Windows `rgb:` format, which terminals use for
    /// their color operating system commands.
    pub fn to_x_rgb(&self) -> String {
        let [r, g, b] = self.0;
        format!("rgb:{:02x}/{:02x}/{:02x}", r, g, b)
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the coordinate at the given index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        let [r, g, b] = self.0;
        format!("HexColor({}, {}, {})", r, g, b)
    }

    /// Convert this color to a string. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.to_string()
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl From<[u8; 3]> for HexColor {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<HexColor> for [u8; 3] {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Format the color in the given color model.
///
/// This function is the free-standing equivalent of [`HexColor::format`] and
/// exists mostly for Python.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn format_color(color: &HexColor, model: ColorModel) -> String {
    color.format(model)
}

/// Format the color in the color model with the given tag.
///
/// ```
/// # use prettypalette::{format_color_str, HexColor};
/// let teal = HexColor::new(0x14, 0xb8, 0xa6);
/// assert_eq!(format_color_str(&teal, "cmyk")?, "cmyk(89, 0, 9, 27)");
/// assert!(format_color_str(&teal, "lab").is_err());
/// # Ok::<(), prettypalette::error::ColorModelError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn format_color_str(color: &HexColor, tag: &str) -> Result<String, ColorModelError> {
    color.format_tagged(tag)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::HexColor;
    use crate::error::{ColorFormatError, ColorModelError};
    use crate::ColorModel::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str() -> Result<(), ColorFormatError> {
        assert_eq!(HexColor::from_str("#ffffff")?, HexColor::WHITE);
        assert_eq!(HexColor::from_str("000")?, HexColor::BLACK);
        assert_eq!(
            HexColor::from_str("#F8FAFC")?,
            HexColor::new(0xf8, 0xfa, 0xfc)
        );
        assert_eq!(
            HexColor::from_str("#f8fafg"),
            Err(ColorFormatError::MalformedHex)
        );
        Ok(())
    }

    #[test]
    fn test_hex_is_uppercase() -> Result<(), ColorFormatError> {
        for s in ["#abcdef", "abcdef", "#AbCdEf", "0ea5e9", "#be123c"] {
            let color = HexColor::from_str(s)?;
            let digits = s.strip_prefix('#').unwrap_or(s);
            assert_eq!(color.format(Hex), format!("#{}", digits.to_uppercase()));
        }
        Ok(())
    }

    #[test]
    fn test_primaries() {
        let red = HexColor::new(0xff, 0, 0);
        assert_eq!(red.to_rgb(), [255.0, 0.0, 0.0]);
        assert_eq!(red.to_hsl(), [0.0, 1.0, 0.5]);
        assert_eq!(red.format(Cmyk), "cmyk(0, 100, 100, 0)");
        assert_eq!(red.format(Hsl), "hsl(0, 100%, 50%)");

        assert_eq!(HexColor::WHITE.to_cmyk(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(HexColor::BLACK.to_cmyk(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(HexColor::BLACK.to_hsl(), [0.0, 0.0, 0.0]);
        assert_eq!(HexColor::BLACK.format(Cmyk), "cmyk(0, 0, 0, 100)");
        assert_eq!(HexColor::BLACK.format(Hsl), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn test_golden_strings() {
        let expected = [
            (
                HexColor::new(0xf8, 0xfa, 0xfc),
                "rgb(248, 250, 252)",
                "cmyk(1, 0, 0, 1)",
                "hsl(210, 40%, 98%)",
            ),
            (
                HexColor::new(0x14, 0xb8, 0xa6),
                "rgb(20, 184, 166)",
                "cmyk(89, 0, 9, 27)",
                "hsl(173, 80%, 40%)",
            ),
            (
                HexColor::new(0x7c, 0x3a, 0xed),
                "rgb(124, 58, 237)",
                "cmyk(47, 75, 0, 7)",
                "hsl(262, 83%, 57%)",
            ),
            (
                HexColor::new(0x4d, 0x7c, 0x0f),
                "rgb(77, 124, 15)",
                "cmyk(37, 0, 87, 51)",
                "hsl(85, 78%, 27%)",
            ),
            (
                HexColor::new(0xfa, 0xcc, 0x15),
                "rgb(250, 204, 21)",
                "cmyk(0, 18, 91, 1)",
                "hsl(47, 95%, 53%)",
            ),
            (
                HexColor::new(0xbe, 0x12, 0x3c),
                "rgb(190, 18, 60)",
                "cmyk(0, 90, 68, 25)",
                "hsl(345, 82%, 40%)",
            ),
            (
                HexColor::new(0x80, 0x80, 0x80),
                "rgb(128, 128, 128)",
                "cmyk(0, 0, 0, 49)",
                "hsl(0, 0%, 50%)",
            ),
        ];

        for (color, rgb, cmyk, hsl) in expected {
            assert_eq!(color.format(Rgb), rgb);
            assert_eq!(color.format(Cmyk), cmyk);
            assert_eq!(color.format(Hsl), hsl);
        }
    }

    #[test]
    fn test_format_tagged() {
        let color = HexColor::new(0xff, 0, 0);
        assert_eq!(color.format_tagged("RGB"), Ok("rgb(255, 0, 0)".to_string()));
        assert_eq!(color.format_tagged("hex"), Ok("#FF0000".to_string()));
        assert_eq!(
            color.format_tagged("LAB"),
            Err(ColorModelError::new("LAB"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(HexColor::new(0xf8, 0xfa, 0xfc).to_string(), "#f8fafc");
        assert_eq!(HexColor::new(0xf8, 0xfa, 0xfc).to_hex_upper(), "#F8FAFC");
        assert_eq!(HexColor::new(0x0e, 0xa5, 0xe9).to_x_rgb(), "rgb:0e/a5/e9");
        assert!(HexColor::WHITE.is_light());
        assert!(!HexColor::new(0x1e, 0x29, 0x3b).is_light());
    }
}
