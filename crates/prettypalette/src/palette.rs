//! Utility module with the static color palette.
//!
//! The palette comprises the 22 color schemes of Tailwind CSS' default
//! palette, each with ten shades. Shades are labelled 50, 100, 200, and so on
//! up to 900. Selecting a swatch produces a [`SelectedTheme`] titled with the
//! scheme, shade, and uppercase hexadecimal color, e.g., `Slate-50 (#F8FAFC)`.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::{OutOfBoundsError, SelectionError};
use crate::shell::SelectedTheme;
use crate::HexColor;

/// The number of shades per color scheme.
pub const SHADES: usize = 10;

/// Determine the label for the shade with the given index.
///
/// ```
/// # use prettypalette::palette::shade_label;
/// assert_eq!(shade_label(0), 50);
/// assert_eq!(shade_label(1), 100);
/// assert_eq!(shade_label(9), 900);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn shade_label(index: usize) -> usize {
    if index == 0 {
        50
    } else {
        index * 100
    }
}

/// Determine the index of the shade with the given label.
pub fn shade_index(label: usize) -> Option<usize> {
    (0..SHADES).find(|index| shade_label(*index) == label)
}

// ====================================================================================================================

/// The enumeration of color schemes.
///
/// The order of the variants is the order of the rows in the palette.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "prettypalette.palette")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorScheme {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl ColorScheme {
    /// The number of color schemes.
    pub const COUNT: usize = 22;

    /// Get an iterator over all color schemes.
    pub fn all() -> impl Iterator<Item = Self> {
        PALETTE.iter().map(|row| row.scheme)
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorScheme {
    /// Get this color scheme's name.
    pub const fn name(&self) -> &'static str {
        use ColorScheme::*;

        match self {
            Slate => "Slate",
            Gray => "Gray",
            Zinc => "Zinc",
            Neutral => "Neutral",
            Stone => "Stone",
            Red => "Red",
            Orange => "Orange",
            Amber => "Amber",
            Yellow => "Yellow",
            Lime => "Lime",
            Green => "Green",
            Emerald => "Emerald",
            Teal => "Teal",
            Cyan => "Cyan",
            Sky => "Sky",
            Blue => "Blue",
            Indigo => "Indigo",
            Violet => "Violet",
            Purple => "Purple",
            Fuchsia => "Fuchsia",
            Pink => "Pink",
            Rose => "Rose",
        }
    }

    /// Get this color scheme's row index.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Select the shade with the given index.
    pub fn select(&self, index: usize) -> Result<SelectedTheme, OutOfBoundsError> {
        self.row().select(index)
    }
}

impl ColorScheme {
    /// Get this color scheme's palette row.
    pub fn row(&self) -> &'static PaletteRow {
        &PALETTE[self.index()]
    }
}

impl TryFrom<usize> for ColorScheme {
    type Error = OutOfBoundsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PALETTE
            .get(value)
            .map(|row| row.scheme)
            .ok_or_else(|| OutOfBoundsError::new(value, 0..=21))
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = SelectionError;

    /// Parse a color scheme name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(SelectionError::UnknownScheme)
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A row of the palette, i.e., a color scheme with its ten shades.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteRow {
    /// The color scheme.
    pub scheme: ColorScheme,
    /// The shades from lightest to darkest.
    pub cells: [HexColor; SHADES],
}

impl PaletteRow {
    /// Select the shade with the given index.
    ///
    /// This method determines the hexadecimal color and the title of the
    /// resulting theme, which combines scheme name, shade label, and
    /// uppercase hexadecimal color. The theme also remembers the swatch.
    ///
    /// ```
    /// # use prettypalette::palette::ColorScheme;
    /// let theme = ColorScheme::Slate.row().select(0)?;
    /// assert_eq!(theme.color().to_string(), "#f8fafc");
    /// assert_eq!(theme.title(), "Slate-50 (#F8FAFC)");
    /// # Ok::<(), prettypalette::error::OutOfBoundsError>(())
    /// ```
    pub fn select(&self, index: usize) -> Result<SelectedTheme, OutOfBoundsError> {
        let color = self
            .cells
            .get(index)
            .copied()
            .ok_or_else(|| OutOfBoundsError::new(index, 0..=9))?;
        let title = format!(
            "{}-{} ({})",
            self.scheme.name(),
            shade_label(index),
            color.to_hex_upper()
        );

        Ok(SelectedTheme::new(color, title).with_swatch(self.scheme, index))
    }
}

/// Find the swatch named by scheme and shade label, e.g., `Slate-500`.
///
/// The scheme name is matched ignoring ASCII case.
pub fn locate(s: &str) -> Result<(ColorScheme, usize), SelectionError> {
    let (scheme, shade) = s.trim().split_once('-').ok_or(SelectionError::MissingShade)?;
    let scheme = scheme.parse::<ColorScheme>()?;
    let index = shade
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(shade_index)
        .ok_or(SelectionError::UnknownShade)?;

    Ok((scheme, index))
}

/// Select the swatch named by scheme and shade label, e.g., `Slate-500`.
pub fn find(s: &str) -> Result<SelectedTheme, SelectionError> {
    let (scheme, index) = locate(s)?;
    // Index is in range, since shade_index() only produces valid indices.
    scheme.select(index).map_err(|_| SelectionError::UnknownShade)
}

// ====================================================================================================================

/// Create a hexadecimal color from a 24-bit integer literal.
const fn hex(value: u32) -> HexColor {
    HexColor::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

macro_rules! row {
    ($scheme:ident: $($value:literal),+ $(,)?) => {
        PaletteRow {
            scheme: ColorScheme::$scheme,
            cells: [$(hex($value)),+],
        }
    };
}

/// The palette.
#[rustfmt::skip]
pub static PALETTE: [PaletteRow; ColorScheme::COUNT] = [
    row!(Slate: 0xf8fafc, 0xf1f5f9, 0xe2e8f0, 0xcbd5e1, 0x94a3b8,
        0x64748b, 0x475569, 0x334155, 0x1e293b, 0x0f172a),
    row!(Gray: 0xf9fafb, 0xf3f4f6, 0xe5e7eb, 0xd1d5db, 0x9ca3af,
        0x6b7280, 0x4b5563, 0x374151, 0x1f2937, 0x111827),
    row!(Zinc: 0xfafafa, 0xf4f4f5, 0xe4e4e7, 0xd4d4d8, 0xa1a1aa,
        0x71717a, 0x52525b, 0x3f3f46, 0x27272a, 0x18181b),
    row!(Neutral: 0xfafafa, 0xf5f5f5, 0xe5e5e5, 0xd4d4d4, 0xa3a3a3,
        0x737373, 0x525252, 0x404040, 0x262626, 0x171717),
    row!(Stone: 0xfafaf9, 0xf5f5f4, 0xe7e5e4, 0xd6d3d1, 0xa8a29e,
        0x78716c, 0x57534e, 0x44403c, 0x292524, 0x1c1917),
    row!(Red: 0xfef2f2, 0xfee2e2, 0xfecaca, 0xfca5a5, 0xf87171,
        0xef4444, 0xdc2626, 0xb91c1c, 0x991b1b, 0x7f1d1d),
    row!(Orange: 0xfff7ed, 0xffedd5, 0xfed7aa, 0xfdba74, 0xfb923c,
        0xf97316, 0xea580c, 0xc2410c, 0x9a3412, 0x7c2d12),
    row!(Amber: 0xfffbeb, 0xfef3c7, 0xfde68a, 0xfcd34d, 0xfbbf24,
        0xf59e0b, 0xd97706, 0xb45309, 0x92400e, 0x78350f),
    row!(Yellow: 0xfefce8, 0xfef9c3, 0xfef08a, 0xfde047, 0xfacc15,
        0xeab308, 0xca8a04, 0xa16207, 0x854d0e, 0x713f12),
    row!(Lime: 0xf7fee7, 0xecfccb, 0xd9f99d, 0xbef264, 0xa3e635,
        0x84cc16, 0x65a30d, 0x4d7c0f, 0x3f6212, 0x365314),
    row!(Green: 0xf0fdf4, 0xdcfce7, 0xbbf7d0, 0x86efac, 0x4ade80,
        0x22c55e, 0x16a34a, 0x15803d, 0x166534, 0x14532d),
    row!(Emerald: 0xecfdf5, 0xd1fae5, 0xa7f3d0, 0x6ee7b7, 0x34d399,
        0x10b981, 0x059669, 0x047857, 0x065f46, 0x064e3b),
    row!(Teal: 0xf0fdfa, 0xccfbf1, 0x99f6e4, 0x5eead4, 0x2dd4bf,
        0x14b8a6, 0x0d9488, 0x0f766e, 0x115e59, 0x134e4a),
    row!(Cyan: 0xecfeff, 0xcffafe, 0xa5f3fc, 0x67e8f9, 0x22d3ee,
        0x06b6d4, 0x0891b2, 0x0e7490, 0x155e75, 0x164e63),
    row!(Sky: 0xf0f9ff, 0xe0f2fe, 0xbae6fd, 0x7dd3fc, 0x38bdf8,
        0x0ea5e9, 0x0284c7, 0x0369a1, 0x075985, 0x0c4a6e),
    row!(Blue: 0xeff6ff, 0xdbeafe, 0xbfdbfe, 0x93c5fd, 0x60a5fa,
        0x3b82f6, 0x2563eb, 0x1d4ed8, 0x1e40af, 0x1e3a8a),
    row!(Indigo: 0xeef2ff, 0xe0e7ff, 0xc7d2fe, 0xa5b4fc, 0x818cf8,
        0x6366f1, 0x4f46e5, 0x4338ca, 0x3730a3, 0x312e81),
    row!(Violet: 0xf5f3ff, 0xede9fe, 0xddd6fe, 0xc4b5fd, 0xa78bfa,
        0x8b5cf6, 0x7c3aed, 0x6d28d9, 0x5b21b6, 0x4c1d95),
    row!(Purple: 0xfaf5ff, 0xf3e8ff, 0xe9d5ff, 0xd8b4fe, 0xc084fc,
        0xa855f7, 0x9333ea, 0x7e22ce, 0x6b21a8, 0x581c87),
    row!(Fuchsia: 0xfdf4ff, 0xfae8ff, 0xf5d0fe, 0xf0abfc, 0xe879f9,
        0xd946ef, 0xc026d3, 0xa21caf, 0x86198f, 0x701a75),
    row!(Pink: 0xfdf2f8, 0xfce7f3, 0xfbcfe8, 0xf9a8d4, 0xf472b6,
        0xec4899, 0xdb2777, 0xbe185d, 0x9d174d, 0x831843),
    row!(Rose: 0xfff1f2, 0xffe4e6, 0xfecdd3, 0xfda4af, 0xfb7185,
        0xf43f5e, 0xe11d48, 0xbe123c, 0x9f1239, 0x881337),
];

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_shade_label() {
        assert_eq!(shade_label(0), 50);
        assert_eq!(shade_label(1), 100);
        assert_eq!(shade_label(5), 500);
        assert_eq!(shade_label(9), 900);

        for index in 0..SHADES {
            assert_eq!(shade_index(shade_label(index)), Some(index));
        }
        assert_eq!(shade_index(0), None);
        assert_eq!(shade_index(550), None);
        assert_eq!(shade_index(1_000), None);
    }

    #[test]
    fn test_palette_order() {
        for (index, row) in PALETTE.iter().enumerate() {
            assert_eq!(row.scheme.index(), index);
            assert_eq!(ColorScheme::try_from(index), Ok(row.scheme));
        }
        assert_eq!(
            ColorScheme::try_from(22),
            Err(OutOfBoundsError::new(22_usize, 0..=21))
        );
    }

    #[test]
    fn test_palette_shades_darken() {
        for row in PALETTE.iter() {
            let lightness: Vec<_> = row.cells.iter().map(|c| c.to_hsl()[2]).collect();
            for pair in lightness.windows(2) {
                assert!(
                    pair[1] < pair[0],
                    "{} shades should get darker",
                    row.scheme
                );
            }
        }
    }

    #[test]
    fn test_select() -> Result<(), OutOfBoundsError> {
        let theme = ColorScheme::Slate.select(0)?;
        assert_eq!(theme.color(), HexColor::new(0xf8, 0xfa, 0xfc));
        assert_eq!(theme.title(), "Slate-50 (#F8FAFC)");

        let theme = ColorScheme::Rose.select(9)?;
        assert_eq!(theme.title(), "Rose-900 (#881337)");

        let theme = ColorScheme::Sky.select(5)?;
        assert_eq!(theme.title(), "Sky-500 (#0EA5E9)");

        assert_eq!(
            ColorScheme::Sky.select(10),
            Err(OutOfBoundsError::new(10_usize, 0..=9))
        );
        Ok(())
    }

    #[test]
    fn test_find() -> Result<(), SelectionError> {
        assert_eq!(find("Slate-500")?.title(), "Slate-500 (#64748B)");
        assert_eq!(find(" teal-50 ")?.color(), HexColor::new(0xf0, 0xfd, 0xfa));
        assert_eq!(locate("FUCHSIA-900")?, (ColorScheme::Fuchsia, 9));

        let theme = find("Neutral-50")?;
        assert_eq!(theme.title(), "Neutral-50 (#FAFAFA)");
        assert_eq!(theme.color(), find("Zinc-50")?.color());
        assert_eq!(theme.swatch(), Some((ColorScheme::Neutral, 0)));
        assert_ne!(theme, find("Zinc-50")?);

        assert_eq!(find("Slate500"), Err(SelectionError::MissingShade));
        assert_eq!(find("Mauve-500"), Err(SelectionError::UnknownScheme));
        assert_eq!(find("Slate-550"), Err(SelectionError::UnknownShade));
        assert_eq!(find("Slate-"), Err(SelectionError::UnknownShade));
        Ok(())
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!(ColorScheme::from_str("emerald"), Ok(ColorScheme::Emerald));
        assert_eq!(ColorScheme::from_str("Emerald"), Ok(ColorScheme::Emerald));
        assert_eq!(
            ColorScheme::from_str("Emerald City"),
            Err(SelectionError::UnknownScheme)
        );
    }
}
