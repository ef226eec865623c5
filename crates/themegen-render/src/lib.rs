//! # Themegen Render - CSS Theme Variable Generation
//!
//! `themegen-render` turns token tables into a static stylesheet of CSS custom
//! properties for the `light`, `dark`, `black` and `auto` body classes.
//!
//! This crate is the library behind the `themegen` command, which regenerates
//! `public/theme-generated.css` at build time.
//!
//! ## Core Concepts
//!
//! - [`Variant`]: Light, dark or black; selects one value from each token
//! - [`Token`] / [`TokenTable`]: Ordered name → `[light, dark, black]` values
//! - [`Palette`]: The root table (`body.<class>`) and child table
//!   (`body.<class> *`)
//! - [`shadow`]: Helpers composing `box-shadow` values for shadow tokens
//! - [`render_stylesheet`]: The complete generated document
//!
//! ## Quick Start
//!
//! ```rust
//! use themegen_render::{render_stylesheet, Palette, TokenTable};
//!
//! let palette = Palette::new(
//!     TokenTable::new().add("link-color", ["#0066ee", "#22aaff", "#22aaff"]),
//!     TokenTable::new(),
//! );
//!
//! let css = render_stylesheet(&palette);
//! assert!(css.starts_with("/* Generated file. DO NOT EDIT. */\n"));
//! assert!(css.contains("body.light {\n  --link-color: #0066ee;\n}"));
//! ```
//!
//! ## The `auto` Class
//!
//! `body.auto` follows the OS color scheme. Its plain rule uses the light
//! values; the rule inside `@media (prefers-color-scheme: dark)` uses the
//! black values. See [`AUTO_DEFAULT`] and [`AUTO_DARK_PREFERENCE`].
//!
//! ## Token Files
//!
//! Besides the built-in palette, tables can be loaded from YAML:
//!
//! ```rust
//! use themegen_render::{Palette, Variant};
//!
//! let palette = Palette::from_yaml(r##"
//! root:
//!   link-color: ["#0066ee", "#22aaff", "#22aaff"]
//! "##).unwrap();
//!
//! let token = palette.root.get("link-color").unwrap();
//! assert_eq!(token.value(Variant::Dark), "#22aaff");
//! ```

mod error;
pub mod output;
pub mod palette;
pub mod prelude;
pub mod render;
pub mod shadow;
pub mod token;
pub mod variant;

// Error types
pub use error::{GenerateError, TokenFileError};

pub use output::{check_stylesheet, generate, write_stylesheet, DEFAULT_OUTPUT_PATH};
pub use palette::Palette;
pub use render::{declarations, render_stylesheet, theme_block, DARK_PREFERENCE_QUERY, HEADER};
pub use token::{Token, TokenTable};
pub use variant::{Variant, AUTO_CLASS, AUTO_DARK_PREFERENCE, AUTO_DEFAULT};
