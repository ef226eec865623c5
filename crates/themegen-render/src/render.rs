//! Rendering palettes into CSS custom-property declarations.
//!
//! The generated stylesheet has one block per body class. Each block sets the
//! root tokens on `body.<class>` and the child tokens on `body.<class> *`:
//!
//! ```css
//! body.light {
//!   --link-color: #0066ee;
//! }
//! body.light * {
//!   --log-color: var(--light-log-color);
//! }
//! ```
//!
//! [`render_stylesheet`] writes the `auto` block twice: once with
//! [`AUTO_DEFAULT`] values and once, inside
//! `@media (prefers-color-scheme: dark)`, with [`AUTO_DARK_PREFERENCE`]
//! values. The explicit `light`, `dark` and `black` blocks follow.

use tracing::debug;

use crate::palette::Palette;
use crate::token::TokenTable;
use crate::variant::{Variant, AUTO_CLASS, AUTO_DARK_PREFERENCE, AUTO_DEFAULT};

/// First line of every generated stylesheet.
pub const HEADER: &str = "/* Generated file. DO NOT EDIT. */";

/// Opens the media query wrapping the dark-preference `auto` block.
pub const DARK_PREFERENCE_QUERY: &str = "@media (prefers-color-scheme: dark) {";

/// One `  --name: value;` line per token, each ending in a newline.
pub fn declarations(table: &TokenTable, variant: Variant) -> String {
    let mut out = String::new();
    for token in table {
        out.push_str("  --");
        out.push_str(token.name());
        out.push_str(": ");
        out.push_str(token.value(variant));
        out.push_str(";\n");
    }
    out
}

/// The root and child rules for one body class, without a trailing newline.
///
/// ```rust
/// use themegen_render::{theme_block, Palette, TokenTable, Variant};
///
/// let palette = Palette::new(
///     TokenTable::new().add("link-color", ["#0066ee", "#22aaff", "#22aaff"]),
///     TokenTable::new(),
/// );
///
/// assert_eq!(
///     theme_block("light", &palette, Variant::Light),
///     "body.light {\n  --link-color: #0066ee;\n}\nbody.light * {\n}",
/// );
/// ```
pub fn theme_block(class: &str, palette: &Palette, variant: Variant) -> String {
    debug!(class, %variant, "rendering theme block");
    format!(
        "body.{class} {{\n{}}}\nbody.{class} * {{\n{}}}",
        declarations(&palette.root, variant),
        declarations(&palette.child, variant),
    )
}

/// Renders the complete stylesheet.
///
/// The result starts with [`HEADER`], puts every block on its own lines and
/// ends with exactly one newline. Rendering the same palette twice yields the
/// same bytes.
pub fn render_stylesheet(palette: &Palette) -> String {
    let mut blocks = vec![
        HEADER.to_string(),
        theme_block(AUTO_CLASS, palette, AUTO_DEFAULT),
        DARK_PREFERENCE_QUERY.to_string(),
        theme_block(AUTO_CLASS, palette, AUTO_DARK_PREFERENCE),
        "}".to_string(),
    ];
    blocks.extend(
        Variant::ALL
            .iter()
            .map(|&variant| theme_block(variant.class_name(), palette, variant)),
    );

    let mut out = blocks.join("\n");
    out.push('\n');
    out
}
