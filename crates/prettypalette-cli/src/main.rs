//! The `prettypalette` command line tool.
//!
//! Without a subcommand, the tool runs the interactive terminal viewer.
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;

use prettypalette::opt::ViewerOptions;
use prettypalette::page::render_page;
use prettypalette::palette::find;
use prettypalette::shell::Shell;
use prettypalette::{tui, ColorModel, HexColor};

#[derive(Parser, Debug)]
#[command(name = "prettypalette")]
#[command(about = "Tailwind's default palette in HEX, RGB, CMYK, and HSL", long_about = None)]
#[command(version)]
struct Cli {
    /// Log diagnostics, including the terminal connection's
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the palette in the terminal
    View {
        /// Start with the given swatch selected, e.g., Sky-500
        #[arg(short, long)]
        select: Option<String>,
        /// Do not copy through the terminal
        #[arg(long)]
        no_clipboard: bool,
        /// Do not capture the mouse
        #[arg(long)]
        no_mouse: bool,
        /// Leave the terminal's background color alone
        #[arg(long)]
        no_background: bool,
    },
    /// Write the palette as an HTML page
    Html {
        /// Render the page with the given swatch selected, e.g., Sky-500
        #[arg(short, long)]
        select: Option<String>,
        /// Write to the file instead of standard out
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a hexadecimal color to the other color models
    Convert {
        /// The color, e.g., #0ea5e9
        color: String,
        /// The color model, one of HEX, RGB, CMYK, or HSL
        #[arg(short, long)]
        model: Option<String>,
    },
}

/// Create a shell, optionally with the named swatch selected.
fn shell_for(select: Option<&str>) -> Result<Shell, Box<dyn Error>> {
    match select {
        Some(name) => Ok(Shell::with_theme(find(name)?)),
        None => Ok(Shell::new()),
    }
}

fn view(
    verbose: bool,
    select: Option<&str>,
    no_clipboard: bool,
    no_mouse: bool,
    no_background: bool,
) -> Result<(), Box<dyn Error>> {
    let shell = shell_for(select)?;
    let mut builder = ViewerOptions::from_environment();
    builder.verbose(verbose);
    if no_clipboard {
        builder.clipboard(false);
    }
    if no_mouse {
        builder.mouse(false);
    }
    if no_background {
        builder.background(false);
    }

    let theme = tui::run(&builder.build(), shell)?;
    println!("{}", theme.title());
    Ok(())
}

fn html(select: Option<&str>, output: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let shell = shell_for(select)?;
    let page = render_page(&shell).to_string();

    match output {
        Some(path) => {
            fs::write(path, page)?;
            log::info!("wrote page to {}", path.display());
        }
        None => print!("{}", page),
    }
    Ok(())
}

fn convert(color: &str, model: Option<&str>) -> Result<(), Box<dyn Error>> {
    let color: HexColor = color.parse()?;
    match model {
        Some(tag) => println!("{}", color.format_tagged(tag)?),
        None => {
            for model in ColorModel::all() {
                println!("{:<5}{}", model.name(), color.format(model));
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        None => view(cli.verbose, None, false, false, false),
        Some(Command::View {
            select,
            no_clipboard,
            no_mouse,
            no_background,
        }) => view(
            cli.verbose,
            select.as_deref(),
            no_clipboard,
            no_mouse,
            no_background,
        ),
        Some(Command::Html { select, output }) => html(select.as_deref(), output.as_ref()),
        Some(Command::Convert { color, model }) => convert(&color, model.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("command failed: {:?}", error);
            eprintln!("prettypalette: {}", error);
            ExitCode::FAILURE
        }
    }
}

// ====================================================================================================================
