//! Utility module with the circular progress indicator.
//!
//! A [`ProgressRing`] visualizes a single channel of a color model as a ring
//! of radius 22 inside a 48×48 view box. The filled part of the ring is drawn
//! as a stroke-dash pattern, with the dash as long as the fill arc and the gap
//! making up the rest of the circumference. Web pages embed the ring as inline
//! SVG through [`ProgressRing::to_node`]. Terminals show one of five glyphs
//! instead, as selected by [`ProgressRing::glyph`].
use crate::page::{Element, Node};
use crate::{Float, HexColor};

/// The radius of the ring.
pub const RADIUS: Float = 22.0;

/// The circumference of the ring, i.e., the arc length of a full ring.
#[cfg(feature = "f64")]
pub const CIRCUMFERENCE: Float = 2.0 * std::f64::consts::PI * RADIUS;
#[cfg(not(feature = "f64"))]
pub const CIRCUMFERENCE: Float = 2.0 * std::f32::consts::PI * RADIUS;

/// The path for drawing the ring, starting at twelve o'clock and proceeding
/// clockwise.
const RING_PATH: &str = "M 24,24 m 0,-22 a 22,22 0 1 1 0,44 a 22,22 0 1 1 0,-44";

/// The glyphs for displaying rings in the terminal, from empty to full.
const GLYPHS: [char; 5] = ['○', '◔', '◑', '◕', '●'];

/// Determine the arc length for the value relative to the full scale.
///
/// ```
/// # use prettypalette::progress::{arc_length, CIRCUMFERENCE};
/// assert_eq!(arc_length(0.0, 1.0), 0.0);
/// assert_eq!(arc_length(255.0, 255.0), CIRCUMFERENCE);
/// ```
#[cfg_attr(feature = "pyffi", pyo3::pyfunction)]
#[inline]
pub fn arc_length(value: Float, full_scale: Float) -> Float {
    (value / full_scale) * CIRCUMFERENCE
}

/// A circular progress indicator.
///
/// Rings are purely presentational. They are created fresh for every
/// rendering and customized with the builder-style `with_` methods.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressRing {
    title: String,
    rail_color: HexColor,
    fill_color: HexColor,
    fill_arc: Float,
    stroke_width: u8,
}

impl ProgressRing {
    /// The default rail color.
    pub const RAIL_COLOR: HexColor = HexColor::new(0xa3, 0xa3, 0xa3);

    /// The default fill color.
    pub const FILL_COLOR: HexColor = HexColor::new(0x14, 0xb8, 0xa6);

    /// The default stroke width.
    pub const STROKE_WIDTH: u8 = 4;

    /// Create a new ring with the given label and fill arc.
    pub fn new<S: Into<String>>(title: S, fill_arc: Float) -> Self {
        Self {
            title: title.into(),
            rail_color: Self::RAIL_COLOR,
            fill_color: Self::FILL_COLOR,
            fill_arc,
            stroke_width: Self::STROKE_WIDTH,
        }
    }

    /// Use the given rail color.
    #[must_use = "method returns a new ring and does not mutate original value"]
    pub fn with_rail_color(self, rail_color: HexColor) -> Self {
        Self { rail_color, ..self }
    }

    /// Use the given fill color.
    #[must_use = "method returns a new ring and does not mutate original value"]
    pub fn with_fill_color(self, fill_color: HexColor) -> Self {
        Self { fill_color, ..self }
    }

    /// Use the given stroke width.
    #[must_use = "method returns a new ring and does not mutate original value"]
    pub fn with_stroke_width(self, stroke_width: u8) -> Self {
        Self {
            stroke_width,
            ..self
        }
    }

    /// Get the label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the rail color.
    pub fn rail_color(&self) -> HexColor {
        self.rail_color
    }

    /// Get the fill color.
    pub fn fill_color(&self) -> HexColor {
        self.fill_color
    }

    /// Get the fill arc.
    pub fn fill_arc(&self) -> Float {
        self.fill_arc
    }

    /// Get the stroke width.
    pub fn stroke_width(&self) -> u8 {
        self.stroke_width
    }

    /// Get the filled fraction of the ring, clamped to `0..=1`.
    pub fn fraction(&self) -> Float {
        (self.fill_arc / CIRCUMFERENCE).clamp(0.0, 1.0)
    }

    /// Get the stroke-dash pattern, i.e., the fill arc followed by the gap.
    ///
    /// The gap is computed from the fill arc clamped to the circumference
    /// and hence never is negative.
    ///
    /// ```
    /// # use prettypalette::progress::{ProgressRing, CIRCUMFERENCE};
    /// let ring = ProgressRing::new("0", 0.0);
    /// assert_eq!(ring.dash_array(), format!("0 {}", CIRCUMFERENCE));
    /// ```
    pub fn dash_array(&self) -> String {
        let gap = CIRCUMFERENCE - self.fill_arc.clamp(0.0, CIRCUMFERENCE);
        format!("{} {}", self.fill_arc, gap)
    }

    /// Get the terminal glyph approximating the filled fraction.
    pub fn glyph(&self) -> char {
        let index = (self.fraction() * 4.0).round() as usize;
        GLYPHS[index.min(GLYPHS.len() - 1)]
    }

    /// Render this ring as a render tree node.
    ///
    /// The node is a square container with the centered label on top of an
    /// inline SVG drawing of rail and fill.
    pub fn to_node(&self) -> Node {
        let stroke_width = self.stroke_width.to_string();

        let rail = Element::new("g").with_attr("opacity", "0.3").with_child(
            Element::new("path")
                .with_attr("fill", "none")
                .with_attr("stroke", self.rail_color.to_string())
                .with_attr("stroke-width", stroke_width.as_str())
                .with_attr("d", RING_PATH),
        );

        let fill = Element::new("g").with_child(
            Element::new("path")
                .with_attr("fill", "none")
                .with_attr("data-progress", "fill")
                .with_attr("stroke", self.fill_color.to_string())
                .with_attr("stroke-width", stroke_width)
                .with_attr("stroke-dasharray", self.dash_array())
                .with_attr("d", RING_PATH),
        );

        Element::new("div")
            .with_attr("class", "progress")
            .with_child(
                Element::new("div")
                    .with_attr("class", "progress-title")
                    .with_attr("style", format!("color: {}", self.fill_color))
                    .with_text(self.title.as_str()),
            )
            .with_child(
                Element::new("svg")
                    .with_attr("xmlns", "http://www.w3.org/2000/svg")
                    .with_attr("viewBox", "0 0 48 48")
                    .with_child(rail)
                    .with_child(fill),
            )
            .into()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_arc_length() {
        assert_close_enough!(CIRCUMFERENCE, 138.23007675795088);
        assert_eq!(arc_length(0.0, 255.0), 0.0);
        assert_eq!(arc_length(1.0, 1.0), CIRCUMFERENCE);
        assert_close_enough!(arc_length(0.5, 1.0), CIRCUMFERENCE / 2.0);
        assert_close_enough!(arc_length(14.0, 255.0), 7.589102253377695);
    }

    #[test]
    fn test_defaults() {
        let ring = ProgressRing::new("42", 10.0);
        assert_eq!(ring.title(), "42");
        assert_eq!(ring.rail_color().to_string(), "#a3a3a3");
        assert_eq!(ring.fill_color().to_string(), "#14b8a6");
        assert_eq!(ring.stroke_width(), 4);

        let ring = ring
            .with_fill_color(HexColor::new(0x06, 0xb6, 0xd4))
            .with_stroke_width(2);
        assert_eq!(ring.fill_color().to_string(), "#06b6d4");
        assert_eq!(ring.stroke_width(), 2);
        assert_eq!(ring.rail_color(), ProgressRing::RAIL_COLOR);
    }

    #[test]
    fn test_dash_array() {
        let ring = ProgressRing::new("100", CIRCUMFERENCE);
        assert_eq!(ring.dash_array(), format!("{} 0", CIRCUMFERENCE));

        let ring = ProgressRing::new("200", 2.0 * CIRCUMFERENCE);
        assert!(ring.dash_array().ends_with(" 0"));

        let ring = ProgressRing::new("-", -5.0);
        assert_eq!(ring.dash_array(), format!("-5 {}", CIRCUMFERENCE));
    }

    #[test]
    fn test_glyph() {
        let glyphs: Vec<_> = [0.0, 0.1, 0.25, 0.5, 0.7, 0.9, 1.0, 1.5]
            .into_iter()
            .map(|fraction| ProgressRing::new("", fraction * CIRCUMFERENCE).glyph())
            .collect();
        assert_eq!(glyphs, ['○', '○', '◔', '◑', '◕', '●', '●', '●']);
    }

    #[test]
    fn test_to_node() {
        let ring = ProgressRing::new("93", arc_length(0.5, 1.0))
            .with_fill_color(HexColor::new(0x06, 0xb6, 0xd4))
            .with_stroke_width(2);
        let html = ring.to_node().to_string();

        assert!(html.starts_with("<div class=\"progress\">"));
        assert!(html.contains("viewBox=\"0 0 48 48\""));
        assert!(html.contains("<g opacity=\"0.3\">"));
        assert!(html.contains("stroke=\"#a3a3a3\""));
        assert!(html.contains("stroke=\"#06b6d4\""));
        assert!(html.contains("stroke-width=\"2\""));
        assert!(html.contains(&format!("stroke-dasharray=\"{}\"", ring.dash_array())));
        assert!(html.contains(">93</div>"));
        assert_eq!(html.matches(RING_PATH).count(), 2);
    }
}
