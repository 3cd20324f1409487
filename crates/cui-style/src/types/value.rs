//! Style property value types.
//!
//! # Example
//!
//! ```
//! use cui_style::prelude::{Align, StyleValue};
//!
//! // Explicit value
//! let pad: StyleValue<f32> = StyleValue::Set(4.0);
//! assert!(pad.is_set());
//!
//! // Unset is distinct from a zero value
//! let unset: StyleValue<f32> = StyleValue::Unset;
//! assert_eq!(unset.as_set(), None);
//!
//! assert_eq!("topLeft".parse::<Align>(), Ok(Align::TopLeft));
//! ```

use std::fmt;
use std::str::FromStr;

/// A style property value that is either declared or left unset.
///
/// `Unset` means "this rule says nothing about the property"; it is never
/// confused with a declared zero.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue<T> {
    /// An explicit value.
    Set(T),
    /// Not declared.
    Unset,
}

impl<T> Default for StyleValue<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> StyleValue<T> {
    /// Check if this value is explicitly set.
    pub fn is_set(&self) -> bool {
        matches!(self, StyleValue::Set(_))
    }

    /// Get the inner value if set.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            StyleValue::Set(v) => Some(v),
            StyleValue::Unset => None,
        }
    }

    /// Clear the value back to unset.
    pub fn clear(&mut self) {
        *self = StyleValue::Unset;
    }
}

impl<T: Clone> StyleValue<T> {
    /// Overlay `other` onto this value: a set `other` fully replaces it.
    pub fn overlay(&mut self, other: &StyleValue<T>) {
        if let StyleValue::Set(v) = other {
            *self = StyleValue::Set(v.clone());
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        StyleValue::Set(value)
    }
}

/// Content alignment within a widget's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Centered on both axes.
    #[default]
    Center,
    /// Left edge, vertically centered.
    Left,
    /// Right edge, vertically centered.
    Right,
    /// Top edge, horizontally centered.
    Top,
    /// Bottom edge, horizontally centered.
    Bottom,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Align {
    /// All alignments, in declaration order.
    pub const ALL: [Align; 9] = [
        Align::Center,
        Align::Left,
        Align::Right,
        Align::Top,
        Align::Bottom,
        Align::TopLeft,
        Align::TopRight,
        Align::BottomLeft,
        Align::BottomRight,
    ];

    /// The name used in stylesheets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::Left => "left",
            Align::Right => "right",
            Align::Top => "top",
            Align::Bottom => "bottom",
            Align::TopLeft => "topLeft",
            Align::TopRight => "topRight",
            Align::BottomLeft => "bottomLeft",
            Align::BottomRight => "bottomRight",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Align::ALL
            .into_iter()
            .find(|align| align.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
