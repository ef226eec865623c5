//! Theme variants and their position in a token's value triple.
//!
//! Every token carries exactly three values, one per [`Variant`]. The variant
//! decides which of them is emitted, so callers never index a triple by a bare
//! number.
//!
//! The `auto` stylesheet class is not a variant of its own. It pairs two
//! existing variants: [`AUTO_DEFAULT`] for the plain rule and
//! [`AUTO_DARK_PREFERENCE`] for the rule nested under
//! `@media (prefers-color-scheme: dark)`. The dark-preference rule uses the
//! black values, not the dark ones.

use std::fmt;

/// One of the three theme variants a token defines a value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Light,
    Dark,
    Black,
}

/// Variant emitted by the plain `body.auto` rule.
pub const AUTO_DEFAULT: Variant = Variant::Light;

/// Variant emitted by the `body.auto` rule inside the dark color-scheme media query.
pub const AUTO_DARK_PREFERENCE: Variant = Variant::Black;

/// Body class of the OS-preference driven block.
pub const AUTO_CLASS: &str = "auto";

impl Variant {
    /// All variants, in the order their values appear in a token triple.
    pub const ALL: [Variant; 3] = [Variant::Light, Variant::Dark, Variant::Black];

    /// Position of this variant's value in a token triple.
    pub const fn index(self) -> usize {
        match self {
            Variant::Light => 0,
            Variant::Dark => 1,
            Variant::Black => 2,
        }
    }

    /// The body class selecting this variant (`light`, `dark`, `black`).
    pub const fn class_name(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
            Variant::Black => "black",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
