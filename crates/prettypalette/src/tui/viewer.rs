//! The terminal viewer's state machine.
use std::cell::Cell;
use std::rc::Rc;

use super::input::{Action, Direction};
use super::layout::{hit_test, Cursor, Screen, Target};
use crate::clipboard::Clipboard;
use crate::palette::{ColorScheme, SHADES};
use crate::shell::{SelectedTheme, Shell};
use crate::ColorModel;

/// The status message shown before any copy action.
pub const HELP: &str = "arrows/hjkl move, enter selects, 1-4 copy HEX/RGB/CMYK/HSL, q quits";

/// The outcome of handling an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The state of the terminal viewer.
///
/// The viewer wraps the [`Shell`] and adds a cursor as well as a status
/// message. It subscribes to the shell so that every selection marks the
/// screen as dirty.
#[derive(Debug)]
pub struct Viewer {
    shell: Shell,
    cursor: Cursor,
    status: String,
    dirty: Rc<Cell<bool>>,
}

impl Viewer {
    /// Create a new viewer for the given shell.
    ///
    /// If the shell's theme is a palette swatch, the cursor starts on that
    /// swatch.
    pub fn new(mut shell: Shell) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        shell.subscribe(move |_, _| flag.set(true));

        let cursor = shell
            .theme()
            .swatch()
            .map(|(scheme, shade)| Cursor {
                scheme: scheme.index(),
                shade,
            })
            .unwrap_or_default();

        Self {
            shell,
            cursor,
            status: HELP.to_string(),
            dirty,
        }
    }

    /// Get the shell.
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Get the cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Get the status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Get the selected theme.
    pub fn theme(&self) -> &SelectedTheme {
        self.shell.theme()
    }

    /// Determine whether the screen needs redrawing and reset the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Get the screen for the current state.
    pub fn screen(&self) -> Screen<'_> {
        Screen {
            shell: &self.shell,
            cursor: self.cursor,
            status: &self.status,
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let Cursor { scheme, shade } = self.cursor;
        self.cursor = match direction {
            Direction::Up => Cursor {
                scheme: scheme.saturating_sub(1),
                shade,
            },
            Direction::Down => Cursor {
                scheme: (scheme + 1).min(ColorScheme::COUNT - 1),
                shade,
            },
            Direction::Left => Cursor {
                scheme,
                shade: shade.saturating_sub(1),
            },
            Direction::Right => Cursor {
                scheme,
                shade: (shade + 1).min(SHADES - 1),
            },
        };
        self.dirty.set(true);
    }

    fn select(&mut self) {
        let Cursor { shade, .. } = self.cursor;
        if let Err(error) = self.shell.select_cell(self.cursor.color_scheme(), shade) {
            log::warn!("cursor out of bounds: {}", error);
        }
    }

    fn copy<C: Clipboard + ?Sized>(&mut self, model: ColorModel, clipboard: &mut C) {
        let text = self.shell.readout().formatted(model);
        self.status = if self.shell.copy(model, clipboard) {
            format!("copied {}", text)
        } else {
            format!("could not copy {}", text)
        };
        self.dirty.set(true);
    }

    /// Handle the action.
    pub fn handle<C: Clipboard + ?Sized>(&mut self, action: Action, clipboard: &mut C) -> Flow {
        match action {
            Action::Move(direction) => self.move_cursor(direction),
            Action::Select => self.select(),
            Action::Copy(model) => self.copy(model, clipboard),
            Action::Click { row, column } => match hit_test(row, column) {
                Some(Target::Cell(cursor)) => {
                    self.cursor = cursor;
                    self.dirty.set(true);
                    self.select();
                }
                Some(Target::Button(model)) => self.copy(model, clipboard),
                None => (),
            },
            Action::Quit => return Flow::Quit,
        }

        Flow::Continue
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::clipboard::NoClipboard;
    use crate::error::{ClipboardError, SelectionError};
    use crate::palette::find;

    #[derive(Default)]
    struct RecordingClipboard(Vec<String>);

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_navigation() {
        let mut viewer = Viewer::new(Shell::new());
        let clipboard = &mut NoClipboard;
        assert!(viewer.take_dirty());
        assert!(!viewer.take_dirty());
        assert_eq!(viewer.cursor(), Cursor::default());

        viewer.handle(Action::Move(Direction::Up), clipboard);
        viewer.handle(Action::Move(Direction::Left), clipboard);
        assert_eq!(viewer.cursor(), Cursor::default());
        assert!(viewer.take_dirty());

        for _ in 0..30 {
            viewer.handle(Action::Move(Direction::Down), clipboard);
            viewer.handle(Action::Move(Direction::Right), clipboard);
        }
        assert_eq!(viewer.cursor(), Cursor { scheme: 21, shade: 9 });
        assert_eq!(viewer.theme().title(), "Tailwind Default Palette");
    }

    #[test]
    fn test_select() {
        let mut viewer = Viewer::new(Shell::new());
        let clipboard = &mut NoClipboard;
        viewer.take_dirty();

        viewer.handle(Action::Move(Direction::Down), clipboard);
        viewer.handle(Action::Move(Direction::Right), clipboard);
        viewer.take_dirty();

        assert_eq!(viewer.handle(Action::Select, clipboard), Flow::Continue);
        assert_eq!(viewer.theme().title(), "Gray-100 (#F3F4F6)");
        assert!(viewer.take_dirty());
        assert_eq!(viewer.shell().background().to_string(), "#f3f4f6");

        viewer.handle(Action::Click { row: 16, column: 35 }, clipboard);
        assert_eq!(viewer.cursor(), Cursor { scheme: 14, shade: 5 });
        assert_eq!(viewer.theme().title(), "Sky-500 (#0EA5E9)");

        viewer.handle(Action::Click { row: 16, column: 9 }, clipboard);
        assert_eq!(viewer.theme().title(), "Sky-500 (#0EA5E9)");
    }

    #[test]
    fn test_copy() -> Result<(), SelectionError> {
        let mut viewer = Viewer::new(Shell::with_theme(find("Teal-500")?));
        assert_eq!(viewer.cursor(), Cursor { scheme: 12, shade: 5 });
        assert_eq!(viewer.status(), HELP);

        let mut clipboard = RecordingClipboard::default();
        viewer.handle(Action::Copy(ColorModel::Cmyk), &mut clipboard);
        viewer.handle(Action::Click { row: 30, column: 9 }, &mut clipboard);
        assert_eq!(clipboard.0, ["cmyk(89, 0, 9, 27)", "rgb(20, 184, 166)"]);
        assert_eq!(viewer.status(), "copied rgb(20, 184, 166)");

        viewer.handle(Action::Copy(ColorModel::Hex), &mut NoClipboard);
        assert_eq!(viewer.status(), "could not copy #14B8A6");
        assert_eq!(viewer.theme().title(), "Teal-500 (#14B8A6)");

        assert_eq!(viewer.handle(Action::Quit, &mut NoClipboard), Flow::Quit);
        Ok(())
    }

    #[test]
    fn test_shared_color() -> Result<(), SelectionError> {
        let viewer = Viewer::new(Shell::with_theme(find("Neutral-50")?));
        assert_eq!(viewer.cursor(), Cursor { scheme: 3, shade: 0 });

        let viewer = Viewer::new(Shell::with_theme(find("Zinc-50")?));
        assert_eq!(viewer.cursor(), Cursor { scheme: 2, shade: 0 });
        Ok(())
    }
}
