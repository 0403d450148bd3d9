//! The terminal viewer's screen layout.
//!
//! All rows and columns are 1-based, just like ANSI escape sequences and mouse
//! reports. The palette occupies the top of the screen, with one row of shade
//! labels followed by one row per color scheme. The card with title, readouts,
//! copy buttons, and status line follows below.
use std::fmt;

use prettytty::cmd::{
    DynMoveTo, DynSetBackground24, DynSetForeground24, EraseScreen, Format, ResetStyle,
};

use crate::model::{ChannelMeta, CMYK_CHANNELS, RGB_CHANNELS};
use crate::palette::{shade_label, ColorScheme, PALETTE, SHADES};
use crate::progress::ProgressRing;
use crate::shell::Shell;
use crate::{ColorModel, HexColor};

/// The width of the scheme names.
pub const LABEL_WIDTH: u16 = 9;
/// The width of a swatch including the trailing gap.
pub const CELL_WIDTH: u16 = 5;
/// The row with shade labels.
pub const HEADER_ROW: u16 = 1;
/// The row of the first color scheme.
pub const FIRST_SCHEME_ROW: u16 = 2;
/// The row with the theme's title.
pub const TITLE_ROW: u16 = FIRST_SCHEME_ROW + ColorScheme::COUNT as u16 + 1;
/// The row with the CMYK readout.
pub const CMYK_ROW: u16 = TITLE_ROW + 2;
/// The row with the RGB readout.
pub const RGB_ROW: u16 = CMYK_ROW + 1;
/// The row with the copy buttons.
pub const BUTTON_ROW: u16 = RGB_ROW + 2;
/// The row with the status message.
pub const STATUS_ROW: u16 = BUTTON_ROW + 2;

/// The position of the cursor over the palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// The index of the color scheme.
    pub scheme: usize,
    /// The index of the shade.
    pub shade: usize,
}

impl Cursor {
    /// Get the cursor's color scheme.
    pub fn color_scheme(&self) -> ColorScheme {
        PALETTE[self.scheme.min(ColorScheme::COUNT - 1)].scheme
    }
}

/// Something on screen that reacts to clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A palette swatch.
    Cell(Cursor),
    /// A copy button.
    Button(ColorModel),
}

/// Get the first column and width of every copy button.
pub fn button_spans() -> impl Iterator<Item = (u16, u16, ColorModel)> {
    let mut column = 1;
    ColorModel::all().map(move |model| {
        let start = column;
        let width = model.name().len() as u16 + 4;
        column += width + 1;
        (start, width, model)
    })
}

/// Determine what, if anything, is on screen at the given row and column.
pub fn hit_test(row: u16, column: u16) -> Option<Target> {
    let last_scheme_row = FIRST_SCHEME_ROW + ColorScheme::COUNT as u16;
    if (FIRST_SCHEME_ROW..last_scheme_row).contains(&row) && LABEL_WIDTH < column {
        let offset = column - LABEL_WIDTH - 1;
        let shade = (offset / CELL_WIDTH) as usize;
        if shade < SHADES && offset % CELL_WIDTH < CELL_WIDTH - 1 {
            return Some(Target::Cell(Cursor {
                scheme: (row - FIRST_SCHEME_ROW) as usize,
                shade,
            }));
        }
    } else if row == BUTTON_ROW {
        return button_spans()
            .find(|(start, width, _)| (*start..*start + *width).contains(&column))
            .map(|(_, _, model)| Target::Button(model));
    }

    None
}

// ====================================================================================================================

/// Helper to set the foreground to a hexadecimal color.
fn foreground(color: HexColor) -> DynSetForeground24 {
    let [r, g, b] = color.coordinates();
    DynSetForeground24(r, g, b)
}

/// Helper to set the background to a hexadecimal color.
fn background(color: HexColor) -> DynSetBackground24 {
    let [r, g, b] = color.coordinates();
    DynSetBackground24(r, g, b)
}

/// A complete rendering of the viewer's screen.
#[derive(Debug)]
pub struct Screen<'a> {
    /// The viewer's state.
    pub shell: &'a Shell,
    /// The cursor.
    pub cursor: Cursor,
    /// The status message.
    pub status: &'a str,
}

impl Screen<'_> {
    fn write_palette(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let theme = self.shell.theme();

        write!(
            f,
            "{}{:width$}",
            DynMoveTo(HEADER_ROW, 1),
            "",
            width = LABEL_WIDTH as usize
        )?;
        for index in 0..SHADES {
            write!(f, "{:<5}", shade_label(index))?;
        }

        for (scheme, row) in PALETTE.iter().enumerate() {
            write!(
                f,
                "{}{:<width$}",
                DynMoveTo(FIRST_SCHEME_ROW + scheme as u16, 1),
                row.scheme.name(),
                width = LABEL_WIDTH as usize
            )?;

            for (shade, cell) in row.cells.iter().enumerate() {
                let at_cursor = self.cursor == Cursor { scheme, shade };
                let marker = match (at_cursor, theme.is_swatch(row.scheme, shade)) {
                    (true, true) => "[<>]",
                    (true, false) => "[  ]",
                    (false, true) => " <> ",
                    (false, false) => "    ",
                };
                let ink = if cell.is_light() {
                    HexColor::BLACK
                } else {
                    HexColor::WHITE
                };

                write!(
                    f,
                    "{}{}{}{} ",
                    background(*cell),
                    foreground(ink),
                    marker,
                    ResetStyle
                )?;
            }
        }

        Ok(())
    }

    fn write_rings<I>(
        &self,
        f: &mut fmt::Formatter<'_>,
        row: u16,
        channels: &[ChannelMeta],
        rings: I,
    ) -> fmt::Result
    where
        I: Iterator<Item = ProgressRing>,
    {
        write!(f, "{}", DynMoveTo(row, 1))?;
        for (meta, ring) in channels.iter().zip(rings) {
            write!(
                f,
                "{}{} {} {:>3}{}  ",
                foreground(meta.fill_color),
                meta.name,
                ring.glyph(),
                ring.title(),
                ResetStyle
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ResetStyle, EraseScreen)?;
        self.write_palette(f)?;

        write!(
            f,
            "{}{}{}{}",
            DynMoveTo(TITLE_ROW, 1),
            Format::Bold,
            self.shell.theme().title(),
            ResetStyle
        )?;

        self.write_rings(f, CMYK_ROW, &CMYK_CHANNELS, self.shell.cmyk_rings())?;
        self.write_rings(f, RGB_ROW, &RGB_CHANNELS, self.shell.rgb_rings())?;

        for (start, _, model) in button_spans() {
            write!(f, "{}[ {} ]", DynMoveTo(BUTTON_ROW, start), model.name())?;
        }

        write!(f, "{}{}", DynMoveTo(STATUS_ROW, 1), self.status)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::OutOfBoundsError;

    #[test]
    fn test_rows() {
        assert_eq!(TITLE_ROW, 25);
        assert_eq!(CMYK_ROW, 27);
        assert_eq!(RGB_ROW, 28);
        assert_eq!(BUTTON_ROW, 30);
        assert_eq!(STATUS_ROW, 32);
    }

    #[test]
    fn test_button_spans() {
        let spans: Vec<_> = button_spans().collect();
        assert_eq!(
            spans,
            [
                (1, 7, ColorModel::Hex),
                (9, 7, ColorModel::Rgb),
                (17, 8, ColorModel::Cmyk),
                (26, 7, ColorModel::Hsl),
            ]
        );
    }

    #[test]
    fn test_hit_test() {
        let cell = |scheme, shade| Some(Target::Cell(Cursor { scheme, shade }));

        assert_eq!(hit_test(2, 10), cell(0, 0));
        assert_eq!(hit_test(2, 13), cell(0, 0));
        assert_eq!(hit_test(2, 14), None);
        assert_eq!(hit_test(2, 15), cell(0, 1));
        assert_eq!(hit_test(23, 58), cell(21, 9));
        assert_eq!(hit_test(23, 60), None);
        assert_eq!(hit_test(2, 9), None);
        assert_eq!(hit_test(1, 10), None);
        assert_eq!(hit_test(24, 10), None);

        assert_eq!(hit_test(30, 1), Some(Target::Button(ColorModel::Hex)));
        assert_eq!(hit_test(30, 8), None);
        assert_eq!(hit_test(30, 20), Some(Target::Button(ColorModel::Cmyk)));
        assert_eq!(hit_test(30, 32), Some(Target::Button(ColorModel::Hsl)));
        assert_eq!(hit_test(30, 33), None);
    }

    #[test]
    fn test_screen() -> Result<(), OutOfBoundsError> {
        let mut shell = Shell::new();
        shell.select_cell(ColorScheme::Sky, 5)?;

        let screen = Screen {
            shell: &shell,
            cursor: Cursor {
                scheme: ColorScheme::Sky.index(),
                shade: 5,
            },
            status: "ready",
        };
        let text = screen.to_string();

        assert!(text.contains("Sky-500 (#0EA5E9)"));
        assert!(text.contains("\x1b[2;1HSlate    "));
        assert!(text.contains("\x1b[48;2;14;165;233m\x1b[38;2;255;255;255m[<>]"));
        assert!(text.contains(" 93"));
        assert!(text.contains("233"));
        assert!(text.contains("\x1b[30;17H[ CMYK ]"));
        assert!(text.ends_with("\x1b[32;1Hready"));
        assert_eq!(text.matches("[  ]").count(), 0);
        Ok(())
    }

    #[test]
    fn test_screen_shared_color() -> Result<(), OutOfBoundsError> {
        let mut shell = Shell::new();
        shell.select_cell(ColorScheme::Neutral, 0)?;

        let screen = Screen {
            shell: &shell,
            cursor: Cursor::default(),
            status: "",
        };
        let text = screen.to_string();

        assert_eq!(text.matches("<>").count(), 1);
        assert!(text.contains("\x1b[5;1HNeutral  \x1b[48;2;250;250;250m\x1b[38;2;0;0;0m <> "));
        Ok(())
    }
}
