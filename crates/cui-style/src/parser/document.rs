//! Walking a stylesheet document into rules.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};

use super::key::parse_key;
use super::values::{ValueDecoder, describe};
use crate::rules::StyleRule;
use crate::style::{Property, PropertyRegistry, StyleProperties};
use crate::types::{ColorRegistry, DrawableAtlas};
use crate::{Error, Result};

/// Top-level members of a stylesheet, in document order.
///
/// Unlike a JSON object, repeated declaration keys are all kept, so a
/// later declaration of the same key overrides the earlier one field by
/// field instead of replacing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations(Vec<(String, Value)>);

impl Declarations {
    /// Iterate over `(key, body)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, body)| (key.as_str(), body))
    }

    /// Get the number of declarations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Declarations {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl<'de> Deserialize<'de> for Declarations {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeclarationsVisitor;

        impl<'de> Visitor<'de> for DeclarationsVisitor {
            type Value = Declarations;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of style declarations")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Declarations, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(Declarations(entries))
            }
        }

        deserializer.deserialize_map(DeclarationsVisitor)
    }
}

/// Parses a stylesheet document into rules.
///
/// The document is a JSON object. Each member is one rule: the key is the
/// declaration key, the value maps property names to values. Parsing is
/// strict; the first bad declaration aborts with [`Error::Stylesheet`].
#[derive(Debug, Clone, Copy)]
pub struct RuleParser<'a> {
    registry: &'a PropertyRegistry,
    values: ValueDecoder<'a>,
}

impl<'a> RuleParser<'a> {
    /// Create a parser resolving references against `atlas` and `colors`.
    pub fn new(
        registry: &'a PropertyRegistry,
        atlas: &'a DrawableAtlas,
        colors: &'a ColorRegistry,
    ) -> Self {
        Self {
            registry,
            values: ValueDecoder::new(atlas, colors),
        }
    }

    /// Parse every declaration of `root`, in document order.
    pub fn parse(&self, root: &Value) -> Result<Vec<StyleRule>> {
        let Value::Object(declarations) = root else {
            return Err(Error::Document(format!(
                "expected an object at the root, found {}",
                describe(root)
            )));
        };

        self.parse_members(declarations.iter().map(|(key, body)| (key.as_str(), body)))
    }

    /// Parse declarations read from stylesheet text, repeated keys included.
    pub fn parse_declarations(&self, declarations: &Declarations) -> Result<Vec<StyleRule>> {
        self.parse_members(declarations.iter())
    }

    fn parse_members<'d>(
        &self,
        declarations: impl Iterator<Item = (&'d str, &'d Value)>,
    ) -> Result<Vec<StyleRule>> {
        let mut rules = Vec::new();
        for (order, (key, body)) in declarations.enumerate() {
            let rule = self
                .parse_rule(key, body, order as u32)
                .map_err(|e| Error::stylesheet(key, e))?;
            rules.push(rule);
        }

        tracing::debug!("Parsed {} style rules", rules.len());
        Ok(rules)
    }

    /// Parse one declaration.
    pub fn parse_rule(&self, key: &str, body: &Value, order: u32) -> Result<StyleRule> {
        let selector = parse_key(key)?;
        let Value::Object(members) = body else {
            return Err(Error::Document(format!(
                "expected an object of properties, found {}",
                describe(body)
            )));
        };

        let properties = self.parse_body(members)?;
        tracing::trace!("Rule '{}' sets {} properties", key, properties.set_count());

        Ok(StyleRule {
            name: key.to_string(),
            selector,
            properties,
            order,
        })
    }

    fn parse_body(&self, members: &Map<String, Value>) -> Result<StyleProperties> {
        let mut properties = StyleProperties::new();
        for (name, raw) in members {
            match self.registry.lookup(name)? {
                Property::Field(id) => {
                    let value = self.values.decode(id, raw)?;
                    properties.set(id, value)?;
                }
                Property::Shorthand(expand) => expand(raw, &mut properties)?,
            }
        }
        Ok(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceKind;
    use crate::types::{AtlasRegion, Color};
    use serde_json::json;

    fn parse(root: Value) -> Result<Vec<StyleRule>> {
        let registry = PropertyRegistry::new();
        let atlas = DrawableAtlas::from_regions([
            AtlasRegion::new("button-up"),
            AtlasRegion::with_splits("window", [4, 4, 4, 4]),
        ]);
        let colors = ColorRegistry::with_defaults();
        RuleParser::new(&registry, &atlas, &colors).parse(&root)
    }

    #[test]
    fn rules_keep_document_order() {
        let rules = parse(json!({
            "window": { "background": "window", "pad": 6 },
            "button": { "background": "button-up", "fontColor": "white" },
            "button;hover": { "padTop": 1, "transition": 0.25 },
        }))
        .unwrap();

        let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["window", "button", "button;hover"]);
        assert_eq!(rules[2].order, 2);
        assert_eq!(rules[2].selector.state.as_deref(), Some("hover"));

        assert!(rules[0].properties.background.as_set().unwrap().is_nine_patch());
        assert_eq!(rules[0].properties.pad_bottom.as_set(), Some(&6.0));
        assert_eq!(rules[1].properties.font_color.as_set(), Some(&Color::WHITE));
    }

    #[test]
    fn later_members_override_earlier_ones_within_a_rule() {
        let rules = parse(json!({ "label": { "pad": 4, "padLeft": 9 } })).unwrap();
        let props = &rules[0].properties;

        assert_eq!(props.pad_left.as_set(), Some(&9.0));
        assert_eq!(props.pad_right.as_set(), Some(&4.0));
    }

    #[test]
    fn failures_name_the_rule() {
        let err = parse(json!({
            "label": { "pad": 1 },
            "button": { "background": "missing" },
        }))
        .unwrap_err();

        assert_eq!(err.rule(), Some("button"));
        assert!(matches!(
            err.cause(),
            Error::UnresolvedReference { kind: ReferenceKind::Drawable, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Error parsing style 'button': No drawable found with name 'missing'"
        );
    }

    #[test]
    fn unknown_properties_and_bad_keys() {
        let err = parse(json!({ "label": { "margin": 2 } })).unwrap_err();
        assert!(matches!(err.cause(), Error::UnknownProperty { .. }));

        let err = parse(json!({ "label;": {} })).unwrap_err();
        assert_eq!(err.rule(), Some("label;"));
        assert!(matches!(err.cause(), Error::MalformedKey { .. }));
    }

    #[test]
    fn document_shape_errors() {
        assert!(matches!(parse(json!([1, 2])), Err(Error::Document(_))));

        let err = parse(json!({ "label": 3 })).unwrap_err();
        assert_eq!(err.rule(), Some("label"));
        assert!(matches!(err.cause(), Error::Document(_)));
    }

    #[test]
    fn repeated_keys_stay_separate_rules() {
        let declarations: Declarations = r#"{
            "button": { "pad": 1, "fillX": true },
            "toolbar.button": { "pad": 5 },
            "button": { "pad": 2 }
        }"#
        .parse()
        .unwrap();
        assert_eq!(declarations.len(), 3);

        let registry = PropertyRegistry::new();
        let atlas = DrawableAtlas::new();
        let colors = ColorRegistry::with_defaults();
        let rules = RuleParser::new(&registry, &atlas, &colors)
            .parse_declarations(&declarations)
            .unwrap();

        let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["button", "toolbar.button", "button"]);
        assert_eq!(rules[2].order, 2);
        assert_eq!(rules[0].properties.fill_x.as_set(), Some(&true));
        assert!(!rules[2].properties.fill_x.is_set());
    }

    #[test]
    fn declarations_need_an_object() {
        let err = "[1, 2]".parse::<Declarations>().unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!("{}".parse::<Declarations>().unwrap().is_empty());
    }

    #[test]
    fn empty_document_and_empty_body() {
        assert!(parse(json!({})).unwrap().is_empty());

        let rules = parse(json!({ "label": {} })).unwrap();
        assert!(rules[0].properties.is_empty());
    }
}
