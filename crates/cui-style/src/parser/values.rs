//! Decoding document values into typed property values.

use serde_json::Value;

use crate::error::ReferenceKind;
use crate::style::{PropertyId, PropertyKind, PropertyValue};
use crate::types::{Align, ColorRegistry, DrawableAtlas};
use crate::{Error, Result};

/// Read a number for `property`.
///
/// Shorthand expansions use this to validate their input.
pub fn number_value(property: &str, value: &Value) -> Result<f32> {
    let number = value
        .as_f64()
        .ok_or_else(|| mismatch(property, "a number", value))?;

    let number = number as f32;
    if !number.is_finite() {
        return Err(Error::invalid_value(property, "number out of range"));
    }
    Ok(number)
}

/// Read a string for `property`.
pub fn string_value<'v>(property: &str, value: &'v Value) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| mismatch(property, "a string", value))
}

fn mismatch(property: &str, expected: &str, found: &Value) -> Error {
    Error::invalid_value(
        property,
        format!("expected {}, found {}", expected, describe(found)),
    )
}

/// Short description of a value's JSON type, for error messages.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes raw values for schema fields, resolving drawable and color references.
#[derive(Debug, Clone, Copy)]
pub struct ValueDecoder<'a> {
    atlas: &'a DrawableAtlas,
    colors: &'a ColorRegistry,
}

impl<'a> ValueDecoder<'a> {
    /// Create a decoder over an atlas and a color registry.
    pub fn new(atlas: &'a DrawableAtlas, colors: &'a ColorRegistry) -> Self {
        Self { atlas, colors }
    }

    /// Decode `value` for property `id`.
    pub fn decode(&self, id: PropertyId, value: &Value) -> Result<PropertyValue> {
        let property = id.name();
        match id.kind() {
            PropertyKind::Number => number_value(property, value).map(PropertyValue::Number),
            PropertyKind::Flag => value
                .as_bool()
                .map(PropertyValue::Flag)
                .ok_or_else(|| mismatch(property, "a boolean", value)),
            PropertyKind::Align => {
                let name = string_value(property, value)?;
                name.parse::<Align>().map(PropertyValue::Align).map_err(|_| {
                    Error::invalid_value(property, format!("unknown alignment '{}'", name))
                })
            }
            PropertyKind::Color => {
                let name = string_value(property, value)?;
                self.colors
                    .resolve(name)
                    .map(PropertyValue::Color)
                    .ok_or_else(|| Error::unresolved(ReferenceKind::Color, name))
            }
            PropertyKind::Drawable => {
                let name = string_value(property, value)?;
                self.atlas
                    .get(name)
                    .cloned()
                    .map(PropertyValue::Drawable)
                    .ok_or_else(|| Error::unresolved(ReferenceKind::Drawable, name))
            }
            PropertyKind::Text => {
                string_value(property, value).map(|text| PropertyValue::Text(text.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AtlasRegion, Color, Drawable};
    use serde_json::json;

    fn decode(id: PropertyId, value: Value) -> Result<PropertyValue> {
        let atlas = DrawableAtlas::from_regions([AtlasRegion::new("button-up")]);
        let colors = ColorRegistry::with_defaults();
        ValueDecoder::new(&atlas, &colors).decode(id, &value)
    }

    #[test]
    fn decodes_each_kind() {
        assert_eq!(decode(PropertyId::PadTop, json!(2.5)).unwrap(), PropertyValue::Number(2.5));
        assert_eq!(decode(PropertyId::FillY, json!(true)).unwrap(), PropertyValue::Flag(true));
        assert_eq!(
            decode(PropertyId::Align, json!("bottomLeft")).unwrap(),
            PropertyValue::Align(Align::BottomLeft)
        );
        assert_eq!(
            decode(PropertyId::FontColor, json!("white")).unwrap(),
            PropertyValue::Color(Color::WHITE)
        );
        assert_eq!(
            decode(PropertyId::Color, json!("#FF000080")).unwrap(),
            PropertyValue::Color(Color::from_rgba8(255, 0, 0, 128))
        );
        assert_eq!(
            decode(PropertyId::Background, json!("button-up")).unwrap(),
            PropertyValue::Drawable(Drawable::region("button-up"))
        );
        assert_eq!(
            decode(PropertyId::Font, json!("pixel")).unwrap(),
            PropertyValue::Text("pixel".to_string())
        );
    }

    #[test]
    fn unresolved_references() {
        let err = decode(PropertyId::Background, json!("button-down")).unwrap_err();
        assert!(matches!(
            err,
            Error::UnresolvedReference { kind: ReferenceKind::Drawable, ref name } if name == "button-down"
        ));

        let err = decode(PropertyId::FontColor, json!("ultraviolet")).unwrap_err();
        assert!(matches!(err, Error::UnresolvedReference { kind: ReferenceKind::Color, .. }));

        let err = decode(PropertyId::FontColor, json!("#12")).unwrap_err();
        assert!(matches!(err, Error::UnresolvedReference { kind: ReferenceKind::Color, .. }));

        let err = decode(PropertyId::FontColor, json!("#+1+2+3")).unwrap_err();
        assert!(matches!(err, Error::UnresolvedReference { kind: ReferenceKind::Color, .. }));
    }

    #[test]
    fn type_mismatches() {
        let err = decode(PropertyId::PadLeft, json!("4")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for property 'padLeft': expected a number, found a string"
        );
        assert!(decode(PropertyId::FillX, json!(1)).is_err());

        let err = decode(PropertyId::MinWidth, json!(1e39)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for property 'minWidth': number out of range"
        );
        assert_eq!(number_value("pad", &json!(-3.5)).unwrap(), -3.5);
        assert!(decode(PropertyId::Align, json!("middle")).is_err());
        assert!(decode(PropertyId::Background, json!(null)).is_err());
    }
}
