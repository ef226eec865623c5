//! The `themegen` command: regenerates `public/theme-generated.css`.
//!
//! The rendering itself lives in [`themegen_render`]; this crate adds argument
//! parsing, logging and exit status.

pub mod cli;
pub mod logging;

pub use cli::{run, Cli, Outcome, GENERATED_MESSAGE, UP_TO_DATE_MESSAGE};
