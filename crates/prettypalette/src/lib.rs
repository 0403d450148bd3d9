#![doc(
    html_logo_url = "https://repository-images.githubusercontent.com/796446264/7483a099-9280-489e-b1b0-119497d8c2da"
)]

//! # Pretty 🎨 Palette
//!
//! Prettypalette shows Tailwind's default color palette in HEX, RGB, CMYK, and
//! HSL, both as a web page and in the terminal.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python
integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Disable the `pyffi` feature for a version without Python
integration. "
)]
//!
//!
//! ## 1. Overview
//!
//! Prettypalette's main abstractions are:
//!
//!   * [`HexColor`] is a **24-bit color** parsed from its hexadecimal
//!     notation. It converts to RGB, CMYK, and HSL coordinates and formats
//!     itself in any [`ColorModel`] with [`format_color`].
//!   * The [`palette`] module holds the **static palette** of 22
//!     [`ColorScheme`](palette::ColorScheme)s with ten shades each, labelled
//!     50, 100, 200, and so on up to 900.
//!   * The [`progress`] module implements the **circular progress
//!     indicator** [`ProgressRing`](progress::ProgressRing), which visualizes
//!     one channel of a color model.
//!   * The [`shell`] module implements the **application state**, i.e., the
//!     [`Shell`](shell::Shell) with the currently
//!     [`SelectedTheme`](shell::SelectedTheme) and the
//!     [`Readout`](shell::Readout) derived from it. Every selection
//!     recomputes the readout and notifies the shell's observers.
//!   * The [`page`] module renders the shell as an **HTML document** with
//!     inline SVG, and the `tui` module runs the **interactive terminal
//!     viewer**.
//!
//!
//! ## 2. Select, Read, Copy
//!
//! Selecting a swatch replaces the shell's theme and recomputes the readout:
//!
//! ```
//! # use prettypalette::palette::ColorScheme;
//! # use prettypalette::shell::Shell;
//! # use prettypalette::ColorModel;
//! # fn main() -> Result<(), prettypalette::error::OutOfBoundsError> {
//! let mut shell = Shell::new();
//! shell.select_cell(ColorScheme::Sky, 5)?;
//!
//! assert_eq!(shell.theme().title(), "Sky-500 (#0EA5E9)");
//! assert_eq!(shell.readout().formatted(ColorModel::Cmyk), "cmyk(93, 29, 0, 8)");
//! assert_eq!(shell.readout().formatted(ColorModel::Hsl), "hsl(198, 88%, 48%)");
//! # Ok(())
//! # }
//! ```
//!
//! Copying writes the formatted color to a
//! [`Clipboard`](clipboard::Clipboard). A clipboard that is unavailable or
//! rejects the write does not fail the copy action; the shell only logs the
//! problem and reports it through its result.
//!
//! ```
//! # use prettypalette::clipboard::NoClipboard;
//! # use prettypalette::shell::Shell;
//! # use prettypalette::ColorModel;
//! let shell = Shell::new();
//! assert!(!shell.copy(ColorModel::Hex, &mut NoClipboard));
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Prettypalette supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`tty`** controls the terminal viewer, the `OSC 52` clipboard, and
//!     their implementation with the
//!     [prettytty](https://crates.io/crates/prettytty) terminal crate. This
//!     feature is enabled by default.
//!   - **`pyffi`** controls prettypalette's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//! Similarly, items only available with the `tty` feature are decorated with <i
//! class=tty-only>TTY only!</i>.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod clipboard;
mod core;
pub mod error;
pub mod model;
mod object;
pub mod opt;
pub mod page;
pub mod palette;
pub mod progress;
pub mod shell;
#[cfg(feature = "tty")]
pub mod tui;
mod util;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use model::ColorModel;
pub use object::{format_color, format_color_str, HexColor};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
#[pyo3(name = "palette")]
pub fn palette_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(progress::arc_length, m)?)?;
    m.add_function(wrap_pyfunction!(format_color, m)?)?;
    m.add_function(wrap_pyfunction!(format_color_str, m)?)?;
    m.add_function(wrap_pyfunction!(palette::shade_label, m)?)?;

    m.add_class::<ColorModel>()?;
    m.add_class::<HexColor>()?;
    m.add_class::<palette::ColorScheme>()?;
    m.add_class::<shell::SelectedTheme>()?;

    m.add("CIRCUMFERENCE", progress::CIRCUMFERENCE)?;
    Ok(())
}
