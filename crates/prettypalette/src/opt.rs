//! Helper module with the options for the terminal viewer.
//!
//! Defaults derive from the environment: `PRETTYPALETTE_CLIPBOARD=off` or
//! `TERM=dumb` disable copying through the terminal, `PRETTYPALETTE_MOUSE=off`
//! disables mouse reports, and `PRETTYPALETTE_BACKGROUND=off` leaves the
//! terminal's default background color alone.
//!
//! # Example
//!
//! ```
//! # use prettypalette::opt::ViewerOptions;
//! let options = ViewerOptions::builder()
//!     .clipboard(false)
//!     .timeout(2)
//!     .build();
//!
//! assert!(!options.clipboard());
//! assert_eq!(options.timeout(), 2);
//! ```
use crate::util::{Env, Environment};

#[derive(Clone, Debug, PartialEq, Eq)]
struct OptionData {
    clipboard: bool,
    mouse: bool,
    background: bool,
    timeout: u8,
    verbose: bool,
}

impl OptionData {
    const fn new() -> Self {
        Self {
            clipboard: true,
            mouse: true,
            background: true,
            timeout: 1,
            verbose: false,
        }
    }

    fn from_environment<E: Environment>(env: &E) -> Self {
        let mut data = Self::new();
        data.clipboard =
            !env.is_switched_off("PRETTYPALETTE_CLIPBOARD") && !env.has_value("TERM", "dumb");
        data.mouse = !env.is_switched_off("PRETTYPALETTE_MOUSE");
        data.background = !env.is_switched_off("PRETTYPALETTE_BACKGROUND");
        data
    }
}

/// A builder of viewer options.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Enable or disable copying through the terminal.
    pub fn clipboard(&mut self, clipboard: bool) -> &mut Self {
        self.0.clipboard = clipboard;
        self
    }

    /// Enable or disable mouse reports.
    pub fn mouse(&mut self, mouse: bool) -> &mut Self {
        self.0.mouse = mouse;
        self
    }

    /// Enable or disable mirroring the selected theme to the terminal's
    /// background color.
    pub fn background(&mut self, background: bool) -> &mut Self {
        self.0.background = background;
        self
    }

    /// Set the read timeout in deciseconds (0.1s).
    ///
    /// A timeout of zero is bumped to one, since the event loop relies on
    /// reads returning eventually.
    pub fn timeout(&mut self, timeout: u8) -> &mut Self {
        self.0.timeout = timeout.max(1);
        self
    }

    /// Enable or disable the terminal connection's diagnostic log.
    pub fn verbose(&mut self, verbose: bool) -> &mut Self {
        self.0.verbose = verbose;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> ViewerOptions {
        ViewerOptions(self.0.clone())
    }
}

/// The options for the terminal viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerOptions(OptionData);

impl Default for ViewerOptions {
    fn default() -> Self {
        Self(OptionData::new())
    }
}

impl ViewerOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Create a new builder with defaults determined by the environment.
    pub fn from_environment() -> OptionBuilder {
        OptionBuilder(OptionData::from_environment(&Env::default()))
    }

    /// Determine whether copying through the terminal is enabled.
    pub fn clipboard(&self) -> bool {
        self.0.clipboard
    }

    /// Determine whether mouse reports are enabled.
    pub fn mouse(&self) -> bool {
        self.0.mouse
    }

    /// Determine whether the terminal's background mirrors the selected
    /// theme.
    pub fn background(&self) -> bool {
        self.0.background
    }

    /// Get the read timeout in deciseconds.
    pub fn timeout(&self) -> u8 {
        self.0.timeout
    }

    /// Determine whether the terminal connection logs diagnostics.
    pub fn verbose(&self) -> bool {
        self.0.verbose
    }

    /// Get the options for connecting to the terminal. <i
    /// class=tty-only>TTY only!</i>
    ///
    /// The viewer uses raw mode, so that it receives every key press,
    /// including control-c.
    #[cfg(feature = "tty")]
    pub fn connection_options(&self) -> prettytty::opt::Options {
        use prettytty::opt::{Mode, Options, Volume};

        Options::builder()
            .mode(Mode::Raw)
            .timeout(self.0.timeout)
            .volume(if self.0.verbose {
                Volume::Regular
            } else {
                Volume::Silent
            })
            .build()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{OptionData, ViewerOptions};
    use crate::util::FakeEnv;

    #[test]
    fn test_defaults() {
        let options = ViewerOptions::default();
        assert!(options.clipboard());
        assert!(options.mouse());
        assert!(options.background());
        assert_eq!(options.timeout(), 1);
        assert!(!options.verbose());

        let options = ViewerOptions::builder().timeout(0).verbose(true).build();
        assert_eq!(options.timeout(), 1);
        assert!(options.verbose());
    }

    #[test]
    fn test_from_environment() {
        let env = &mut FakeEnv::new();
        assert_eq!(OptionData::from_environment(env), OptionData::new());

        env.set("TERM", "dumb");
        let data = OptionData::from_environment(env);
        assert!(!data.clipboard);
        assert!(data.mouse);

        env.set("TERM", "xterm-256color");
        env.set("PRETTYPALETTE_CLIPBOARD", "off");
        env.set("PRETTYPALETTE_MOUSE", "0");
        let data = OptionData::from_environment(env);
        assert!(!data.clipboard);
        assert!(!data.mouse);
        assert!(data.background);

        env.set("PRETTYPALETTE_CLIPBOARD", "on");
        env.set("PRETTYPALETTE_BACKGROUND", "no");
        let data = OptionData::from_environment(env);
        assert!(data.clipboard);
        assert!(!data.background);
    }

    #[cfg(feature = "tty")]
    #[test]
    fn test_connection_options() {
        use prettytty::opt::{Mode, Volume};

        let options = ViewerOptions::builder().timeout(3).build();
        let connection = options.connection_options();
        assert_eq!(connection.mode(), Mode::Raw);
        assert_eq!(connection.timeout(), 3);
        assert_eq!(connection.volume(), Volume::Silent);
    }
}
