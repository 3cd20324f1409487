//! Value types carried by style properties.

mod color;
mod drawable;
mod value;

pub use color::{Color, ColorRegistry};
pub use drawable::{AtlasRegion, Drawable, DrawableAtlas, DrawableKind, NinePatchSplits};
pub use value::{Align, StyleValue};
