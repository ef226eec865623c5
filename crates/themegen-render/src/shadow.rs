//! Builders for `box-shadow` value fragments.
//!
//! Shadow tokens are assembled from a few recurring pieces:
//!
//! - a hard-edged bevel ([`pseudo_3d_border`], [`Bevel`]): a zero-blur shadow
//!   offset by a subpixel amount, drawn dark below the element in light themes
//!   and light above it in dark themes
//! - a 1px ring ([`ff_render_fix`]) that hides Firefox's subpixel rendering
//!   error on the bevel
//! - [`inset`] to turn any fragment into an inner shadow
//! - [`list`] (or [`shadows!`](crate::shadows)) to stack fragments into one value
//!
//! Nothing here validates its input. A bad hex color or alpha simply ends up
//! in the generated CSS.
//!
//! ```rust
//! use themegen_render::shadow::{dark_ffrf, dark_p3d, inset, light_p3d};
//! use themegen_render::shadows;
//!
//! assert_eq!(light_p3d("40"), "0px 0.4px 0 0.8px #00000040");
//! assert_eq!(
//!     shadows![inset(dark_p3d("40")), inset(dark_ffrf())],
//!     "0px -0.33px 0 1px #ffffff40 inset, 0 0 0 1px #ffffff15 inset",
//! );
//! ```

use std::fmt;

/// Formats a zero-blur box-shadow: `{x}px {y}px 0 {thickness}px #{color}{alpha}`.
pub fn pseudo_3d_border(x: f64, y: f64, thickness: f64, color: &str, alpha: &str) -> String {
    format!("{}px {}px 0 {}px #{}{}", x, y, thickness, color, alpha)
}

/// A pseudo-3D bevel with variant-specific defaults.
///
/// Start from [`Bevel::light`] or [`Bevel::dark`] and override only what
/// differs:
///
/// ```rust
/// use themegen_render::shadow::Bevel;
///
/// let bevel = Bevel::light("30").offset(0.0, 0.5).thickness(1.0);
/// assert_eq!(bevel.to_string(), "0px 0.5px 0 1px #00000030");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bevel {
    x: f64,
    y: f64,
    thickness: f64,
    color: String,
    alpha: String,
}

impl Bevel {
    /// Dark shadow slightly below the element, for light themes.
    pub fn light(alpha: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.4,
            thickness: 0.8,
            color: "000000".to_string(),
            alpha: alpha.into(),
        }
    }

    /// Light highlight slightly above the element, for dark themes.
    pub fn dark(alpha: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: -0.33,
            thickness: 1.0,
            color: "ffffff".to_string(),
            alpha: alpha.into(),
        }
    }

    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Hex color without the leading `#`.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl fmt::Display for Bevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pseudo_3d_border(
            self.x,
            self.y,
            self.thickness,
            &self.color,
            &self.alpha,
        ))
    }
}

/// Light-theme bevel with default geometry.
pub fn light_p3d(alpha: &str) -> String {
    Bevel::light(alpha).to_string()
}

/// Dark-theme bevel with default geometry.
pub fn dark_p3d(alpha: &str) -> String {
    Bevel::dark(alpha).to_string()
}

/// A solid 1px ring: `0 0 0 1px #{color}{alpha}`.
pub fn ff_render_fix(alpha: &str, color: &str) -> String {
    format!("0 0 0 1px #{}{}", color, alpha)
}

pub fn light_ffrf() -> String {
    light_ffrf_alpha("12")
}

pub fn light_ffrf_alpha(alpha: &str) -> String {
    ff_render_fix(alpha, "000000")
}

pub fn dark_ffrf() -> String {
    dark_ffrf_alpha("15")
}

pub fn dark_ffrf_alpha(alpha: &str) -> String {
    ff_render_fix(alpha, "ffffff")
}

/// Appends the `inset` keyword.
pub fn inset(shadow: impl AsRef<str>) -> String {
    format!("{} inset", shadow.as_ref())
}

/// Joins fragments with `", "`. The first fragment is drawn on top.
pub fn list<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(part.as_ref());
    }
    out
}

/// Stacks one or more shadow fragments of mixed `&str`/`String` type.
///
/// ```rust
/// use themegen_render::shadow::light_ffrf;
/// use themegen_render::shadows;
///
/// let value = shadows!["0 4px 8px -3px #00000022", light_ffrf()];
/// assert_eq!(value, "0 4px 8px -3px #00000022, 0 0 0 1px #00000012");
/// ```
#[macro_export]
macro_rules! shadows {
    ($($part:expr),+ $(,)?) => {
        $crate::shadow::list([$(::std::convert::AsRef::<str>::as_ref(&$part)),+])
    };
}
