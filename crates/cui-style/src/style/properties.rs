//! Style property schema.
//!
//! The schema is declared once in `style_schema!`; the same declaration
//! generates [`PropertyId`], the declared [`StyleProperties`], the resolved
//! [`ComputedStyle`], and every per-field routine
//! (merge, clear, zero-fill, interpolation, typed assignment). Adding a
//! property is a one-line change to the list at the bottom of this file.

use super::field::{FieldValue, PropertyKind, PropertyValue};
use crate::types::{Align, Color, Drawable, StyleValue};
use crate::{Error, Result};

macro_rules! style_schema {
    ($(
        $(#[$doc:meta])*
        $id:ident => $field:ident : $ty:ty, $kind:ident, $name:literal;
    )+) => {
        /// Identifies one field of the style schema.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PropertyId {
            $( $(#[$doc])* $id, )+
        }

        impl PropertyId {
            /// Every property, in schema order.
            pub const ALL: &'static [PropertyId] = &[ $( PropertyId::$id, )+ ];

            /// The name used in stylesheet declarations.
            pub fn name(self) -> &'static str {
                match self {
                    $( PropertyId::$id => $name, )+
                }
            }

            /// The value kind of this property.
            pub fn kind(self) -> PropertyKind {
                match self {
                    $( PropertyId::$id => PropertyKind::$kind, )+
                }
            }

            /// Look up a property by its declaration name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(PropertyId::$id), )+
                    _ => None,
                }
            }
        }

        /// Declared style properties; any field may be unset.
        ///
        /// One value of this type is produced per stylesheet rule, and the
        /// cascade overlays them in order.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct StyleProperties {
            $( $(#[$doc])* pub $field: StyleValue<$ty>, )+
        }

        impl StyleProperties {
            /// Overlay every set field of `other` onto this one.
            pub fn merge(&mut self, other: &StyleProperties) {
                $( self.$field.overlay(&other.$field); )+
            }

            /// Reset every field to unset.
            pub fn clear(&mut self) {
                $( self.$field.clear(); )+
            }

            /// Check if a field is set.
            pub fn is_set(&self, id: PropertyId) -> bool {
                match id {
                    $( PropertyId::$id => self.$field.is_set(), )+
                }
            }

            /// The declared value of a field, if set.
            pub fn get(&self, id: PropertyId) -> Option<PropertyValue> {
                match id {
                    $( PropertyId::$id => self.$field.as_set().cloned().map(PropertyValue::$kind), )+
                }
            }

            /// Assign a decoded value to a field.
            ///
            /// Fails with [`Error::InvalidValue`] if the value kind does not
            /// match the field.
            pub fn set(&mut self, id: PropertyId, value: PropertyValue) -> Result<()> {
                match (id, value) {
                    $(
                        (PropertyId::$id, PropertyValue::$kind(v)) => {
                            self.$field = StyleValue::Set(v);
                            Ok(())
                        }
                    )+
                    (id, value) => Err(Error::invalid_value(
                        id.name(),
                        format!("expected {}, got {}", id.kind(), value.kind()),
                    )),
                }
            }
        }

        /// Fully resolved style handed to the drawing layer.
        ///
        /// Numbers, flags and alignment always hold a concrete value (zero,
        /// `false` and [`Align::Center`] when no rule declared them).
        /// Drawables, colors and fonts are `None` when no rule referenced one.
        #[derive(Debug, Clone, PartialEq)]
        pub struct ComputedStyle {
            $( $(#[$doc])* pub $field: <$ty as FieldValue>::Computed, )+
        }

        impl ComputedStyle {
            /// Resolve declared properties, zero-filling everything unset.
            pub fn from_properties(properties: &StyleProperties) -> Self {
                Self {
                    $( $field: <$ty as FieldValue>::zero_fill(&properties.$field), )+
                }
            }

            /// Blend towards `to`; `alpha` is 0 at `self` and 1 at `to`.
            ///
            /// Numbers (and colors present on both sides) are linearly
            /// interpolated; everything else keeps this style's value until
            /// `alpha` reaches 1.
            pub fn interpolate(&self, to: &ComputedStyle, alpha: f32) -> Self {
                Self {
                    $( $field: <$ty as FieldValue>::interpolate(&self.$field, &to.$field, alpha), )+
                }
            }

            /// Read a field by property id.
            ///
            /// Returns `None` only for reference fields with nothing declared.
            pub fn get(&self, id: PropertyId) -> Option<PropertyValue> {
                match id {
                    $( PropertyId::$id => <$ty as FieldValue>::declared(&self.$field).map(PropertyValue::$kind), )+
                }
            }
        }
    };
}

style_schema! {
    /// Left padding.
    PadLeft => pad_left: f32, Number, "padLeft";
    /// Top padding.
    PadTop => pad_top: f32, Number, "padTop";
    /// Right padding.
    PadRight => pad_right: f32, Number, "padRight";
    /// Bottom padding.
    PadBottom => pad_bottom: f32, Number, "padBottom";
    /// Left spacing to neighbouring widgets.
    SpaceLeft => space_left: f32, Number, "spaceLeft";
    /// Top spacing to neighbouring widgets.
    SpaceTop => space_top: f32, Number, "spaceTop";
    /// Right spacing to neighbouring widgets.
    SpaceRight => space_right: f32, Number, "spaceRight";
    /// Bottom spacing to neighbouring widgets.
    SpaceBottom => space_bottom: f32, Number, "spaceBottom";
    /// Minimum width.
    MinWidth => min_width: f32, Number, "minWidth";
    /// Minimum height.
    MinHeight => min_height: f32, Number, "minHeight";
    /// Font scale factor.
    FontScale => font_scale: f32, Number, "fontScale";
    /// Opacity multiplier.
    Alpha => alpha: f32, Number, "alpha";
    /// Seconds taken to transition into this style.
    Transition => transition: f32, Number, "transition";
    /// Fill available width.
    FillX => fill_x: bool, Flag, "fillX";
    /// Fill available height.
    FillY => fill_y: bool, Flag, "fillY";
    /// Content alignment.
    Align => align: Align, Align, "align";
    /// Background drawable.
    Background => background: Drawable, Drawable, "background";
    /// Foreground drawable, painted over the content.
    Foreground => foreground: Drawable, Drawable, "foreground";
    /// Tint color.
    Color => color: Color, Color, "color";
    /// Text color.
    FontColor => font_color: Color, Color, "fontColor";
    /// Font name.
    Font => font: String, Text, "font";
}

impl StyleProperties {
    /// Create empty style properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields that are set.
    pub fn set_count(&self) -> usize {
        PropertyId::ALL.iter().filter(|id| self.is_set(**id)).count()
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_default_is_unset() {
        let props = StyleProperties::new();
        assert!(props.is_empty());
        assert!(!props.pad_left.is_set());
        assert!(!props.background.is_set());
    }

    #[test]
    fn properties_merge_field_by_field() {
        let mut base = StyleProperties::new();
        base.pad_left = StyleValue::Set(4.0);
        base.font_color = StyleValue::Set(Color::BLACK);

        let mut overlay = StyleProperties::new();
        overlay.font_color = StyleValue::Set(Color::RED);
        overlay.alpha = StyleValue::Set(0.5);

        base.merge(&overlay);

        assert_eq!(base.pad_left.as_set(), Some(&4.0));
        assert_eq!(base.font_color.as_set(), Some(&Color::RED));
        assert_eq!(base.alpha.as_set(), Some(&0.5));
        assert_eq!(base.set_count(), 3);

        base.clear();
        assert!(base.is_empty());
    }

    #[test]
    fn names_cover_the_schema() {
        for id in PropertyId::ALL {
            assert_eq!(PropertyId::from_name(id.name()), Some(*id));
        }
        assert_eq!(PropertyId::from_name("padLeft"), Some(PropertyId::PadLeft));
        assert_eq!(PropertyId::from_name("pad_left"), None);
        assert_eq!(PropertyId::FontColor.kind(), PropertyKind::Color);
    }

    #[test]
    fn typed_assignment_checks_kind() {
        let mut props = StyleProperties::new();
        props
            .set(PropertyId::MinWidth, PropertyValue::Number(40.0))
            .unwrap();
        assert_eq!(props.get(PropertyId::MinWidth), Some(PropertyValue::Number(40.0)));

        let err = props
            .set(PropertyId::FillX, PropertyValue::Number(1.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref property, .. } if property == "fillX"));
        assert!(!props.fill_x.is_set());
    }
}
