//! Per-type behavior of style fields.
//!
//! Every field type in the schema implements [`FieldValue`], which says how
//! an unset declaration is zero-filled and how two resolved values blend
//! during a state transition.

use std::fmt;

use crate::types::{Align, Color, Drawable, StyleValue};

/// The value kind of a style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Floating point number.
    Number,
    /// Boolean flag.
    Flag,
    /// [`Align`] enumeration.
    Align,
    /// Color name or `#` literal.
    Color,
    /// Atlas drawable name.
    Drawable,
    /// Free text, such as a font name.
    Text,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Number => "number",
            PropertyKind::Flag => "flag",
            PropertyKind::Align => "alignment",
            PropertyKind::Color => "color",
            PropertyKind::Drawable => "drawable",
            PropertyKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// A decoded property value, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f32),
    Flag(bool),
    Align(Align),
    Color(Color),
    Drawable(Drawable),
    Text(String),
}

impl PropertyValue {
    /// The kind of this value.
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Number(_) => PropertyKind::Number,
            PropertyValue::Flag(_) => PropertyKind::Flag,
            PropertyValue::Align(_) => PropertyKind::Align,
            PropertyValue::Color(_) => PropertyKind::Color,
            PropertyValue::Drawable(_) => PropertyKind::Drawable,
            PropertyValue::Text(_) => PropertyKind::Text,
        }
    }

    /// The number, if this is a number value.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            PropertyValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

/// Zero-fill and interpolation rules for one field type.
pub trait FieldValue: Clone {
    /// Representation in a resolved style.
    type Computed: Clone + PartialEq + fmt::Debug;

    /// Resolve a possibly unset declaration to a concrete value.
    fn zero_fill(value: &StyleValue<Self>) -> Self::Computed;

    /// Blend two resolved values. `alpha` is 0 at `from` and 1 at `to`.
    fn interpolate(from: &Self::Computed, to: &Self::Computed, alpha: f32) -> Self::Computed;

    /// The declared value behind a resolved one, if any.
    fn declared(computed: &Self::Computed) -> Option<Self>;
}

/// Non-numeric values hold `from` until the transition completes.
fn snap<T: Clone>(from: &T, to: &T, alpha: f32) -> T {
    if alpha >= 1.0 { to.clone() } else { from.clone() }
}

impl FieldValue for f32 {
    type Computed = f32;

    fn zero_fill(value: &StyleValue<Self>) -> f32 {
        value.as_set().copied().unwrap_or(0.0)
    }

    fn interpolate(from: &f32, to: &f32, alpha: f32) -> f32 {
        from + (to - from) * alpha
    }

    fn declared(computed: &f32) -> Option<Self> {
        Some(*computed)
    }
}

impl FieldValue for bool {
    type Computed = bool;

    fn zero_fill(value: &StyleValue<Self>) -> bool {
        value.as_set().copied().unwrap_or(false)
    }

    fn interpolate(from: &bool, to: &bool, alpha: f32) -> bool {
        snap(from, to, alpha)
    }

    fn declared(computed: &bool) -> Option<Self> {
        Some(*computed)
    }
}

impl FieldValue for Align {
    type Computed = Align;

    fn zero_fill(value: &StyleValue<Self>) -> Align {
        value.as_set().copied().unwrap_or_default()
    }

    fn interpolate(from: &Align, to: &Align, alpha: f32) -> Align {
        snap(from, to, alpha)
    }

    fn declared(computed: &Align) -> Option<Self> {
        Some(*computed)
    }
}

impl FieldValue for Color {
    type Computed = Option<Color>;

    fn zero_fill(value: &StyleValue<Self>) -> Option<Color> {
        value.as_set().copied()
    }

    fn interpolate(from: &Option<Color>, to: &Option<Color>, alpha: f32) -> Option<Color> {
        match (from, to) {
            (Some(from), Some(to)) => Some(from.lerp(*to, alpha)),
            _ => snap(from, to, alpha),
        }
    }

    fn declared(computed: &Option<Color>) -> Option<Self> {
        *computed
    }
}

impl FieldValue for Drawable {
    type Computed = Option<Drawable>;

    fn zero_fill(value: &StyleValue<Self>) -> Option<Drawable> {
        value.as_set().cloned()
    }

    fn interpolate(from: &Option<Drawable>, to: &Option<Drawable>, alpha: f32) -> Option<Drawable> {
        snap(from, to, alpha)
    }

    fn declared(computed: &Option<Drawable>) -> Option<Self> {
        computed.clone()
    }
}

impl FieldValue for String {
    type Computed = Option<String>;

    fn zero_fill(value: &StyleValue<Self>) -> Option<String> {
        value.as_set().cloned()
    }

    fn interpolate(from: &Option<String>, to: &Option<String>, alpha: f32) -> Option<String> {
        snap(from, to, alpha)
    }

    fn declared(computed: &Option<String>) -> Option<Self> {
        computed.clone()
    }
}
