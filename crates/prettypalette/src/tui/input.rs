//! Decoding terminal input into viewer actions.
use prettytty::{Control, Token};

use crate::ColorModel;

/// A direction for moving the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// An action requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor over the palette.
    Move(Direction),
    /// Select the swatch under the cursor.
    Select,
    /// Copy the selected theme in the given color model.
    Copy(ColorModel),
    /// Click on the 1-based row and column.
    Click { row: u16, column: u16 },
    /// Quit the viewer.
    Quit,
}

/// Decode a key press given as a single byte.
fn decode_key(byte: u8) -> Option<Action> {
    use self::Action::*;
    use self::Direction::*;

    if let Some(model) = ColorModel::all().find(|model| model.shortcut() == char::from(byte)) {
        return Some(Copy(model));
    }

    let action = match byte {
        b'k' | b'K' => Move(Up),
        b'j' | b'J' => Move(Down),
        b'h' | b'H' => Move(Left),
        b'l' | b'L' => Move(Right),
        b' ' | b'\r' | b'\n' => Select,
        b'x' | b'X' => Copy(ColorModel::Hex),
        b'r' | b'R' => Copy(ColorModel::Rgb),
        b'c' | b'C' => Copy(ColorModel::Cmyk),
        b's' | b'S' => Copy(ColorModel::Hsl),
        b'q' | b'Q' | 0x03 | 0x1b => Quit,
        _ => return None,
    };

    Some(action)
}

/// Decode the final byte of a cursor key sequence.
fn decode_cursor_key(payload: &[u8]) -> Option<Action> {
    use self::Direction::*;

    let direction = match payload.last()? {
        b'A' => Up,
        b'B' => Down,
        b'C' => Right,
        b'D' => Left,
        _ => return None,
    };

    Some(Action::Move(direction))
}

/// Decode an SGR mouse report such as `<0;12;5M`.
///
/// Only presses of the primary button produce clicks. Scrolling the wheel
/// moves the cursor up or down.
fn decode_mouse(payload: &[u8]) -> Option<Action> {
    let payload = payload.strip_prefix(b"<")?;
    let (params, is_press) = match payload.split_last()? {
        (b'M', params) => (params, true),
        (b'm', params) => (params, false),
        _ => return None,
    };

    let params = std::str::from_utf8(params).ok()?;
    let mut numbers = params.split(';').map(str::parse::<u16>);
    let button = numbers.next()?.ok()?;
    let column = numbers.next()?.ok()?;
    let row = numbers.next()?.ok()?;
    if numbers.next().is_some() || !is_press {
        return None;
    }

    match button {
        0 => Some(Action::Click { row, column }),
        64 => Some(Action::Move(Direction::Up)),
        65 => Some(Action::Move(Direction::Down)),
        _ => None,
    }
}

/// Decode the token into actions, appending them to the given vector.
///
/// Text tokens may contain several key presses. Unrecognized input is
/// ignored.
pub fn decode(token: &Token<'_>, actions: &mut Vec<Action>) {
    match *token {
        Token::Text(text) => actions.extend(text.iter().copied().filter_map(decode_key)),
        Token::Control(control) => actions.extend(control.first().copied().and_then(decode_key)),
        Token::Sequence(Control::CSI, payload) => {
            if payload.first() == Some(&b'<') {
                actions.extend(decode_mouse(payload));
            } else {
                actions.extend(decode_cursor_key(payload));
            }
        }
        Token::Sequence(Control::SS3, payload) => actions.extend(decode_cursor_key(payload)),
        Token::Sequence(_, _) => (),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{decode, Action, Direction};
    use crate::ColorModel;
    use prettytty::{Control, Token};

    fn decoded(token: Token<'_>) -> Vec<Action> {
        let mut actions = Vec::new();
        decode(&token, &mut actions);
        actions
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            decoded(Token::Text(b"jjh1z")),
            [
                Action::Move(Direction::Down),
                Action::Move(Direction::Down),
                Action::Move(Direction::Left),
                Action::Copy(ColorModel::Hex),
            ]
        );
        assert_eq!(decoded(Token::Text(b"q")), [Action::Quit]);
        for model in ColorModel::all() {
            let key = [model.shortcut() as u8];
            assert_eq!(decoded(Token::Text(&key)), [Action::Copy(model)]);
        }
        assert_eq!(decoded(Token::Text(b"s")), [Action::Copy(ColorModel::Hsl)]);
        assert_eq!(decoded(Token::Control(b"\x03")), [Action::Quit]);
        assert_eq!(decoded(Token::Control(b"\r")), [Action::Select]);
        assert_eq!(decoded(Token::Control(b"\x07")), Vec::<Action>::new());
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            decoded(Token::Sequence(Control::CSI, b"A")),
            [Action::Move(Direction::Up)]
        );
        assert_eq!(
            decoded(Token::Sequence(Control::CSI, b"1;2D")),
            [Action::Move(Direction::Left)]
        );
        assert_eq!(
            decoded(Token::Sequence(Control::SS3, b"C")),
            [Action::Move(Direction::Right)]
        );
        assert_eq!(decoded(Token::Sequence(Control::CSI, b"5~")), Vec::<Action>::new());
        assert_eq!(decoded(Token::Sequence(Control::OSC, b"A")), Vec::<Action>::new());
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            decoded(Token::Sequence(Control::CSI, b"<0;12;5M")),
            [Action::Click { row: 5, column: 12 }]
        );
        assert_eq!(decoded(Token::Sequence(Control::CSI, b"<0;12;5m")), Vec::<Action>::new());
        assert_eq!(decoded(Token::Sequence(Control::CSI, b"<2;12;5M")), Vec::<Action>::new());
        assert_eq!(
            decoded(Token::Sequence(Control::CSI, b"<65;1;1M")),
            [Action::Move(Direction::Down)]
        );
        assert_eq!(decoded(Token::Sequence(Control::CSI, b"<0;12M")), Vec::<Action>::new());
        assert_eq!(decoded(Token::Sequence(Control::CSI, b"<0;x;5M")), Vec::<Action>::new());
    }
}
