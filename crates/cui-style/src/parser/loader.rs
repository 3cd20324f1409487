//! Loading stylesheets from text and files.

use std::path::Path;

use serde_json::Value;

use super::{Declarations, RuleParser};
use crate::rules::RuleStore;
use crate::style::PropertyRegistry;
use crate::types::{ColorRegistry, DrawableAtlas};
use crate::{Error, Result};

/// Loads stylesheets into rule stores.
///
/// Holds everything a stylesheet is parsed against: the drawable atlas,
/// the named colors and the property registry. Each load returns a new,
/// complete [`RuleStore`] or an error; a failed load produces nothing.
///
/// # Example
///
/// ```
/// use cui_style::prelude::*;
///
/// let atlas = DrawableAtlas::from_regions([AtlasRegion::new("button-up")]);
/// let loader = StylesheetLoader::new(atlas);
///
/// let store = loader
///     .load_str(r#"{ "button": { "background": "button-up", "pad": 4 } }"#)
///     .unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StylesheetLoader {
    registry: PropertyRegistry,
    atlas: DrawableAtlas,
    colors: ColorRegistry,
}

impl StylesheetLoader {
    /// Create a loader with the default shorthands and named colors.
    pub fn new(atlas: DrawableAtlas) -> Self {
        Self {
            registry: PropertyRegistry::new(),
            atlas,
            colors: ColorRegistry::with_defaults(),
        }
    }

    /// Replace the named colors.
    pub fn with_colors(mut self, colors: ColorRegistry) -> Self {
        self.colors = colors;
        self
    }

    /// Replace the property registry.
    pub fn with_registry(mut self, registry: PropertyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Mutable access to the property registry, for registering shorthands.
    pub fn registry_mut(&mut self) -> &mut PropertyRegistry {
        &mut self.registry
    }

    /// The drawable atlas references resolve against.
    pub fn atlas(&self) -> &DrawableAtlas {
        &self.atlas
    }

    /// The named colors references resolve against.
    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    /// Parse an already decoded document.
    ///
    /// A JSON object holds each key once, so repeated declaration keys have
    /// already collapsed here; [`load_str`](Self::load_str) keeps them.
    pub fn load_document(&self, root: &Value) -> Result<RuleStore> {
        let rules = self.parser().parse(root)?;
        Ok(RuleStore::from_rules(rules))
    }

    /// Parse stylesheet text.
    pub fn load_str(&self, text: &str) -> Result<RuleStore> {
        let declarations: Declarations = text.parse()?;
        let rules = self.parser().parse_declarations(&declarations)?;
        Ok(RuleStore::from_rules(rules))
    }

    fn parser(&self) -> RuleParser<'_> {
        RuleParser::new(&self.registry, &self.atlas, &self.colors)
    }

    /// Read and parse a stylesheet file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<RuleStore> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let store = self.load_str(&text)?.with_source_path(path);

        tracing::debug!(
            "Loaded {} style rules from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AtlasRegion, Color};
    use std::io::Write;

    fn loader() -> StylesheetLoader {
        StylesheetLoader::new(DrawableAtlas::from_regions([AtlasRegion::new("button-up")]))
    }

    #[test]
    fn load_str_builds_a_store() {
        let store = loader()
            .load_str(r#"{ "button": { "pad": 4 }, "button;hover": { "pad": 2 } }"#)
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup_by_name("button;hover").unwrap().order, 1);
        assert!(store.source_path().is_none());
    }

    #[test]
    fn invalid_json_is_a_document_error() {
        let err = loader().load_str(r#"{ "button": { "pad": 4 }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn custom_colors_and_shorthands() {
        let mut colors = ColorRegistry::new();
        colors.insert("Accent", Color::from_u32(0x3366FFFF));

        let mut loader = loader().with_colors(colors);
        loader.registry_mut().register_shorthand("size", |value, style| {
            let size = crate::parser::number_value("size", value)?;
            style.min_width = size.into();
            style.min_height = size.into();
            Ok(())
        });

        let store = loader
            .load_str(r#"{ "label": { "fontColor": "accent", "size": 12 } }"#)
            .unwrap();
        let props = &store.rules()[0].properties;
        assert_eq!(props.font_color.as_set(), Some(&Color::from_u32(0x3366FFFF)));
        assert_eq!(props.min_height.as_set(), Some(&12.0));

        // Defaults were replaced, not extended.
        assert!(loader.load_str(r#"{ "label": { "fontColor": "white" } }"#).is_err());
    }

    #[test]
    fn load_file_records_source_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "button": {{ "background": "button-up" }} }}"#).unwrap();

        let store = loader().load_file(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.source_path(), Some(file.path()));
    }

    #[test]
    fn load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = loader().load_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io { path: ref p, .. } if p == &path));
    }
}
