//! Writing the generated stylesheet to disk.
//!
//! A failed write is returned to the caller as-is. There is no retry, the
//! parent directory is not created, and a partially written file is left in
//! place.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::GenerateError;
use crate::palette::Palette;
use crate::render::render_stylesheet;

/// Where the stylesheet goes when no other path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./public/theme-generated.css";

/// Writes `css` to `path`, replacing any existing file.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<(), GenerateError> {
    fs::write(path, css).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = css.len(), "wrote stylesheet");
    Ok(())
}

/// Verifies that the file at `path` holds exactly `css`.
///
/// # Errors
///
/// [`GenerateError::Stale`] when the contents differ, [`GenerateError::Read`]
/// when the file cannot be read (including when it does not exist).
pub fn check_stylesheet(path: &Path, css: &str) -> Result<(), GenerateError> {
    let current = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if current != css {
        return Err(GenerateError::Stale {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), "stylesheet is up to date");
    Ok(())
}

/// Renders `palette` and writes it to `path`.
pub fn generate(palette: &Palette, path: &Path) -> Result<(), GenerateError> {
    write_stylesheet(path, &render_stylesheet(palette))
}
