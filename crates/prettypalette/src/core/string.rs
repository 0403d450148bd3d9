use super::{from_24bit, rgb_to_cmyk, rgb_to_hsl, to_channels};
use crate::error::ColorFormatError;
use crate::model::ColorModel;
use crate::Float;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes. It transparently handles
/// an optional leading `#` as well as single-digit coordinates.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() || !digits.is_ascii() {
        return Err(if digits.chars().any(|c| c.is_alphanumeric()) {
            ColorFormatError::UnexpectedCharacters
        } else {
            ColorFormatError::UnknownFormat
        });
    } else if digits.contains(|c: char| !c.is_ascii_alphanumeric()) {
        return Err(ColorFormatError::UnknownFormat);
    } else if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Truncate a non-negative quantity towards zero.
#[inline]
fn truncate(value: Float) -> u32 {
    value.floor() as u32
}

/// Format the 24-bit color in the given color model.
///
/// Hexadecimal colors are formatted with uppercase digits. For all other
/// models, this function truncates channel values, percentages, and degrees
/// instead of rounding them. That matches the numbers displayed by the
/// progress rings, which also are truncated.
pub(crate) fn format(
    model: ColorModel,
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *coordinates;
    let rgb = from_24bit(r, g, b);

    match model {
        ColorModel::Hex => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        ColorModel::Rgb => {
            let [r, g, b] = to_channels(&rgb);
            write!(f, "rgb({}, {}, {})", truncate(r), truncate(g), truncate(b))
        }
        ColorModel::Cmyk => {
            let [c, m, y, k] = rgb_to_cmyk(&rgb);
            write!(
                f,
                "cmyk({}, {}, {}, {})",
                truncate(c * 100.0),
                truncate(m * 100.0),
                truncate(y * 100.0),
                truncate(k * 100.0)
            )
        }
        ColorModel::Hsl => {
            let [h, s, l] = rgb_to_hsl(&rgb);
            write!(
                f,
                "hsl({}, {}%, {}%)",
                truncate(h),
                truncate(s * 100.0),
                truncate(l * 100.0)
            )
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("  #F8FAFC ")?, [0xf8_u8, 0xfa, 0xfc]);
        assert_eq!(parse_hex("#f8fafc")?, [0xf8_u8, 0xfa, 0xfc]);

        assert_eq!(parse_hex(""), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse_hex("#"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hex("rgb(0, 0, 0)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(parse_hex("#ff"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(
            parse_hex("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("#1122334"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hex("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#00g000"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }
}
