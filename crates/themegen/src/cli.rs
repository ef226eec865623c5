//! Command-line surface of `themegen`.
//!
//! With no arguments the command renders the built-in palette and writes it to
//! [`DEFAULT_OUTPUT_PATH`]. `--check` turns it into a CI guard that fails when
//! the committed stylesheet no longer matches the tables.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::debug;

use themegen_render::{
    check_stylesheet, render_stylesheet, write_stylesheet, Palette, DEFAULT_OUTPUT_PATH,
};

/// Printed after the stylesheet has been written.
pub const GENERATED_MESSAGE: &str = "Generated theme file.";

/// Printed when `--check` finds the stylesheet current.
pub const UP_TO_DATE_MESSAGE: &str = "Theme file is up to date.";

/// Generate the theme stylesheet from the token tables
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "themegen")]
#[command(version)]
#[command(about = "Generate CSS theme variables for the light, dark, black and auto themes")]
pub struct Cli {
    /// Stylesheet to write, or to compare against with --check
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub out: PathBuf,

    /// Read token tables from a YAML file instead of the built-in palette
    #[arg(short, long, value_name = "FILE")]
    pub tokens: Option<PathBuf>,

    /// Fail if the stylesheet on disk differs from the generated one
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the stylesheet instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    UpToDate(PathBuf),
    /// The rendered stylesheet, to be printed as-is.
    Printed(String),
}

/// Runs one generation according to `cli`.
///
/// # Errors
///
/// Fails when the token file cannot be loaded, the output cannot be written,
/// or, with `--check`, the output is missing or stale.
pub fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let palette = load_palette(cli.tokens.as_deref())?;
    debug!(
        root = palette.root.len(),
        child = palette.child.len(),
        "loaded palette"
    );

    let css = render_stylesheet(&palette);

    if cli.stdout {
        return Ok(Outcome::Printed(css));
    }

    if cli.check {
        check_stylesheet(&cli.out, &css).context("theme file check failed")?;
        return Ok(Outcome::UpToDate(cli.out.clone()));
    }

    write_stylesheet(&cli.out, &css).context("could not generate theme file")?;
    Ok(Outcome::Written(cli.out.clone()))
}

fn load_palette(tokens: Option<&Path>) -> anyhow::Result<Palette> {
    match tokens {
        Some(path) => Palette::from_file(path).context("could not load token file"),
        None => Ok(Palette::builtin()),
    }
}
