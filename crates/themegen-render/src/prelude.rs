//! Convenient imports for building palettes.
//!
//! ```rust
//! use themegen_render::prelude::*;
//!
//! let palette = Palette::new(
//!     TokenTable::new().add(
//!         "button-shadow",
//!         [
//!             shadows![light_p3d("40"), light_ffrf()],
//!             shadows![dark_p3d("30"), dark_ffrf()],
//!             shadows![dark_p3d("30"), dark_ffrf()],
//!         ],
//!     ),
//!     TokenTable::new(),
//! );
//! let css = render_stylesheet(&palette);
//! assert!(css.contains("--button-shadow: 0px 0.4px 0 0.8px #00000040, 0 0 0 1px #00000012;"));
//! ```

// Tables and rendering
pub use crate::palette::Palette;
pub use crate::render::render_stylesheet;
pub use crate::token::{Token, TokenTable};
pub use crate::variant::Variant;

// Shadow helpers
pub use crate::shadow::{
    dark_ffrf, dark_p3d, ff_render_fix, inset, light_ffrf, light_p3d, list, pseudo_3d_border,
    Bevel,
};
pub use crate::shadows;
