//! The interactive terminal viewer. <i class=tty-only>TTY only!</i>
//!
//! The viewer draws the palette and readouts with 24-bit colors, accepts
//! keyboard and SGR mouse input, mirrors the selected theme onto the
//! terminal's default background color, and copies through `OSC 52`. It runs
//! in the alternate screen and restores the terminal when done, even if the
//! event loop fails.
//!
//! ```no_run
//! # use prettypalette::{opt::ViewerOptions, shell::Shell, tui};
//! let options = ViewerOptions::from_environment().build();
//! let theme = tui::run(&options, Shell::new())?;
//! println!("{}", theme.title());
//! # Ok::<(), std::io::Error>(())
//! ```
mod input;
mod layout;
mod viewer;

use std::io::{ErrorKind, Result, Write};

use prettytty::cmd::{EnterAlternateScreen, EraseScreen, ExitAlternateScreen, HideCursor, ShowCursor};
use prettytty::{Connection, Output, Scan};

use crate::clipboard::{NoClipboard, Osc52Clipboard};
use crate::opt::ViewerOptions;
use crate::shell::{SelectedTheme, Shell};
use crate::HexColor;

pub use input::{decode, Action, Direction};
pub use layout::{button_spans, hit_test, Cursor, Screen, Target};
pub use viewer::{Flow, Viewer, HELP};

/// The dynamic `SetThemeBackground(COLOR)` command.
///
/// This command sets the terminal's default background color with `OSC 11`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetThemeBackground(pub HexColor);

impl prettytty::Command for SetThemeBackground {}

impl std::fmt::Display for SetThemeBackground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b]11;{}\x1b\\", self.0.to_x_rgb())
    }
}

/// The `ResetThemeBackground` command.
///
/// This command restores the terminal's default background color with
/// `OSC 111`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetThemeBackground;

impl prettytty::Command for ResetThemeBackground {}

impl std::fmt::Display for ResetThemeBackground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b]111\x1b\\")
    }
}

/// The `EnableMouse` command for button reports in SGR encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnableMouse;

impl prettytty::Command for EnableMouse {}

impl std::fmt::Display for EnableMouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b[?1000h\x1b[?1006h")
    }
}

/// The `DisableMouse` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisableMouse;

impl prettytty::Command for DisableMouse {}

impl std::fmt::Display for DisableMouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b[?1006l\x1b[?1000l")
    }
}

// ====================================================================================================================

/// Draw the viewer's screen.
fn draw(output: &mut Output<'_>, viewer: &Viewer, options: &ViewerOptions) -> Result<()> {
    if options.background() {
        write!(output, "{}", SetThemeBackground(viewer.shell().background()))?;
    }
    write!(output, "{}", viewer.screen())?;
    output.flush()
}

/// Run the event loop until the user quits.
fn event_loop(connection: &Connection, viewer: &mut Viewer, options: &ViewerOptions) -> Result<()> {
    let (mut input, mut output) = connection.io();
    let mut actions = Vec::new();

    loop {
        if viewer.take_dirty() {
            draw(&mut output, viewer, options)?;
        }

        match input.read_token() {
            Ok(token) => decode(&token, &mut actions),
            Err(error) if matches!(error.kind(), ErrorKind::Interrupted | ErrorKind::TimedOut) => {
                continue
            }
            Err(error) if error.kind() == ErrorKind::InvalidData => {
                // The scanner resets itself after malformed input.
                log::debug!("ignoring malformed input: {}", error);
                continue;
            }
            Err(error) => return Err(error),
        }

        for action in actions.drain(..) {
            let flow = if options.clipboard() {
                viewer.handle(action, &mut Osc52Clipboard::new(&mut output))
            } else {
                viewer.handle(action, &mut NoClipboard)
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }
}

/// Run the terminal viewer.
///
/// This function takes over the terminal until the user quits and then
/// returns the selected theme.
pub fn run(options: &ViewerOptions, shell: Shell) -> Result<SelectedTheme> {
    let connection = Connection::with_options(options.connection_options())?;
    log::info!(
        "terminal viewer is starting with mouse {} and clipboard {}",
        if options.mouse() { "on" } else { "off" },
        if options.clipboard() { "on" } else { "off" },
    );

    let mut viewer = Viewer::new(shell);
    {
        let mut output = connection.output();
        write!(output, "{}{}{}", EnterAlternateScreen, HideCursor, EraseScreen)?;
        if options.mouse() {
            write!(output, "{}", EnableMouse)?;
        }
        output.flush()?;
    }

    let result = event_loop(&connection, &mut viewer, options);

    // Always restore the terminal.
    let mut output = connection.output();
    if options.mouse() {
        write!(output, "{}", DisableMouse)?;
    }
    if options.background() {
        write!(output, "{}", ResetThemeBackground)?;
    }
    write!(output, "{}{}", ShowCursor, ExitAlternateScreen)?;
    output.flush()?;

    result?;
    log::info!("terminal viewer is done with {}", viewer.theme().title());
    Ok(viewer.theme().clone())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(
            SetThemeBackground(HexColor::new(0x0e, 0xa5, 0xe9)).to_string(),
            "\x1b]11;rgb:0e/a5/e9\x1b\\"
        );
        assert_eq!(ResetThemeBackground.to_string(), "\x1b]111\x1b\\");
        assert_eq!(EnableMouse.to_string(), "\x1b[?1000h\x1b[?1006h");
        assert_eq!(DisableMouse.to_string(), "\x1b[?1006l\x1b[?1000l");
    }
}
