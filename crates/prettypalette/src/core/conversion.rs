use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Scale normalized RGB coordinates back to channel values `0..=255`.
///
/// The result is not rounded. For all 256 byte values, dividing and then
/// multiplying by 255 yields the original value again.
#[inline]
pub(crate) fn to_channels(rgb: &[Float; 3]) -> [Float; 3] {
    [rgb[0] * 255.0, rgb[1] * 255.0, rgb[2] * 255.0]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert normalized RGB coordinates to CMYK.
///
/// The key is the complement of the largest coordinate. The other three
/// components are the complements of the red, green, and blue coordinates,
/// minus the key, divided by the key's complement. For pure black, that
/// divisor is zero and the three components are zero as well.
pub(crate) fn rgb_to_cmyk(rgb: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *rgb;
    let k = 1.0 - r.max(g).max(b);

    if k == 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let divisor = 1.0 - k;
    [
        (1.0 - r - k) / divisor,
        (1.0 - g - k) / divisor,
        (1.0 - b - k) / divisor,
        k,
    ]
}

/// Convert normalized RGB coordinates to HSL.
///
/// Hue is in degrees `0..360`, whereas saturation and lightness are
/// fractions `0..=1`. Achromatic colors have zero hue and saturation. When two
/// channels tie for the maximum, red wins over green and green wins over
/// blue.
pub(crate) fn rgb_to_hsl(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta == 0.0 {
        return [0.0, 0.0, lightness];
    }

    let mut hue = if max == r {
        (60.0 * ((g - b) / delta)) % 360.0
    } else if max == g {
        (60.0 * ((b - r) / delta) + 120.0) % 360.0
    } else {
        (60.0 * ((r - g) / delta) + 240.0) % 360.0
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = if lightness <= 0.5 {
        delta / (2.0 * lightness)
    } else {
        delta / (2.0 - 2.0 * lightness)
    };

    [hue, saturation, lightness]
}

// ====================================================================================================================
