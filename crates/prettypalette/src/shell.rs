//! Utility module with the viewer's state.
//!
//! The [`Shell`] owns the only mutable state, the [`SelectedTheme`]. Every
//! selection replaces the theme wholesale and synchronously recomputes the
//! [`Readout`], i.e., the per-channel arc values for CMYK and RGB as well as
//! the color formatted in all four color models. Afterwards, the shell
//! notifies all observers, which then redraw page or terminal.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::clipboard::Clipboard;
use crate::error::OutOfBoundsError;
use crate::model::{ChannelMeta, CMYK_CHANNELS, RGB_CHANNELS};
use crate::palette::ColorScheme;
use crate::progress::{arc_length, ProgressRing};
use crate::{ColorModel, Float, HexColor};

/// The title of the initial theme.
pub const DEFAULT_TITLE: &str = "Tailwind Default Palette";

/// The stroke width of the readout rings.
const READOUT_STROKE_WIDTH: u8 = 2;

/// The currently selected theme.
///
/// A theme combines a hexadecimal color with a human-readable title. Themes
/// selected from the palette also remember their swatch, since several
/// schemes share colors. The default theme is white titled `Tailwind Default
/// Palette`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, module = "prettypalette.palette")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedTheme {
    color: HexColor,
    title: String,
    swatch: Option<(ColorScheme, usize)>,
}

impl SelectedTheme {
    /// Create a new theme that is not a palette swatch.
    pub fn new<S: Into<String>>(color: HexColor, title: S) -> Self {
        Self {
            color,
            title: title.into(),
            swatch: None,
        }
    }

    /// Mark this theme as the swatch with the given scheme and shade index.
    #[must_use = "method returns a new theme and does not mutate original value"]
    pub fn with_swatch(mut self, scheme: ColorScheme, index: usize) -> Self {
        self.swatch = Some((scheme, index));
        self
    }

    /// Get the scheme and shade index of the selected swatch, if any.
    pub fn swatch(&self) -> Option<(ColorScheme, usize)> {
        self.swatch
    }

    /// Determine whether this theme is the swatch with the given scheme and
    /// shade index.
    pub fn is_swatch(&self, scheme: ColorScheme, index: usize) -> bool {
        self.swatch == Some((scheme, index))
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl SelectedTheme {
    /// Get the color.
    pub fn color(&self) -> HexColor {
        self.color
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Convert this theme to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("SelectedTheme({}, {:?})", self.color, self.title)
    }
}

impl Default for SelectedTheme {
    fn default() -> Self {
        Self::new(HexColor::WHITE, DEFAULT_TITLE)
    }
}

// ====================================================================================================================

/// The derived value for displaying a single channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcValue {
    /// The truncated value as text.
    pub title: String,
    /// The arc length of the filled ring.
    pub arc: Float,
}

impl ArcValue {
    /// Derive the arc value for a channel whose value has already been
    /// scaled for display.
    fn new(value: Float, scaled: Float, full_scale: Float) -> Self {
        Self {
            title: (scaled.floor() as i64).to_string(),
            arc: arc_length(value, full_scale),
        }
    }
}

/// All values derived from the selected theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    cmyk: [ArcValue; 4],
    rgb: [ArcValue; 3],
    formatted: [String; ColorModel::COUNT],
}

impl Readout {
    /// Compute the readout for the given color.
    ///
    /// CMYK components are displayed as truncated percentages, with arcs
    /// relative to one. RGB channels are displayed as truncated values, with
    /// arcs relative to 255.
    pub fn of(color: &HexColor) -> Self {
        let (rgb, cmyk) = color.to_channels();

        Self {
            cmyk: cmyk.map(|n| ArcValue::new(n, n * 100.0, 1.0)),
            rgb: rgb.map(|n| ArcValue::new(n, n, 255.0)),
            formatted: [
                color.format(ColorModel::Hex),
                color.format(ColorModel::Rgb),
                color.format(ColorModel::Cmyk),
                color.format(ColorModel::Hsl),
            ],
        }
    }

    /// Get the CMYK arc values.
    pub fn cmyk(&self) -> &[ArcValue; 4] {
        &self.cmyk
    }

    /// Get the RGB arc values.
    pub fn rgb(&self) -> &[ArcValue; 3] {
        &self.rgb
    }

    /// Get the color formatted in the given model.
    pub fn formatted(&self, model: ColorModel) -> &str {
        &self.formatted[model.index()]
    }
}

/// Create the readout rings for the channels.
fn rings<'a>(
    channels: &'a [ChannelMeta],
    values: &'a [ArcValue],
) -> impl Iterator<Item = ProgressRing> + 'a {
    channels.iter().zip(values).map(|(meta, value)| {
        ProgressRing::new(value.title.as_str(), value.arc)
            .with_fill_color(meta.fill_color)
            .with_stroke_width(READOUT_STROKE_WIDTH)
    })
}

// ====================================================================================================================

/// A callback invoked after every selection.
pub type Observer = Box<dyn FnMut(&SelectedTheme, &Readout)>;

/// The viewer's state.
///
/// ```
/// # use prettypalette::{palette::ColorScheme, shell::Shell, ColorModel};
/// let mut shell = Shell::new();
/// assert_eq!(shell.theme().title(), "Tailwind Default Palette");
///
/// shell.select_cell(ColorScheme::Teal, 5)?;
/// assert_eq!(shell.theme().title(), "Teal-500 (#14B8A6)");
/// assert_eq!(shell.readout().formatted(ColorModel::Cmyk), "cmyk(89, 0, 9, 27)");
/// # Ok::<(), prettypalette::error::OutOfBoundsError>(())
/// ```
pub struct Shell {
    theme: SelectedTheme,
    readout: Readout,
    observers: Vec<Observer>,
}

impl Shell {
    /// Create a new shell with the default theme.
    pub fn new() -> Self {
        Self::with_theme(SelectedTheme::default())
    }

    /// Create a new shell with the given theme.
    pub fn with_theme(theme: SelectedTheme) -> Self {
        let readout = Readout::of(&theme.color());
        Self {
            theme,
            readout,
            observers: Vec::new(),
        }
    }

    /// Get the selected theme.
    pub fn theme(&self) -> &SelectedTheme {
        &self.theme
    }

    /// Get the readout for the selected theme.
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Get the background color, which mirrors the selected theme.
    pub fn background(&self) -> HexColor {
        self.theme.color()
    }

    /// Register an observer.
    ///
    /// The observer is invoked exactly once after every selection, in the
    /// order of registration.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&SelectedTheme, &Readout) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Select the theme.
    ///
    /// This method replaces the current theme, recomputes the readout, and
    /// then notifies all observers.
    pub fn select(&mut self, theme: SelectedTheme) {
        log::debug!("select {} as theme {:?}", theme.color(), theme.title());

        self.readout = Readout::of(&theme.color());
        self.theme = theme;

        for observer in self.observers.iter_mut() {
            observer(&self.theme, &self.readout);
        }
    }

    /// Select the swatch with the given scheme and index.
    pub fn select_cell(&mut self, scheme: ColorScheme, index: usize) -> Result<(), OutOfBoundsError> {
        let theme = scheme.select(index)?;
        self.select(theme);
        Ok(())
    }

    /// Copy the selected theme formatted in the given color model.
    ///
    /// If the clipboard is unavailable or the write fails, this method logs
    /// the error at debug level and otherwise ignores it. The result indicates
    /// whether the text was copied.
    pub fn copy<C: Clipboard + ?Sized>(&self, model: ColorModel, clipboard: &mut C) -> bool {
        let text = self.readout.formatted(model);
        match clipboard.write_text(text) {
            Ok(()) => {
                log::debug!("copied {:?} to clipboard", text);
                true
            }
            Err(error) => {
                log::debug!("could not copy {:?}: {}", text, error);
                false
            }
        }
    }

    /// Get the rings for the CMYK readout.
    pub fn cmyk_rings(&self) -> impl Iterator<Item = ProgressRing> + '_ {
        rings(&CMYK_CHANNELS, self.readout.cmyk())
    }

    /// Get the rings for the RGB readout.
    pub fn rgb_rings(&self) -> impl Iterator<Item = ProgressRing> + '_ {
        rings(&RGB_CHANNELS, self.readout.rgb())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("theme", &self.theme)
            .field("readout", &self.readout)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ====================================================================================================================
