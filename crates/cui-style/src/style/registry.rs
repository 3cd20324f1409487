//! Property lookup and shorthand registration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{PropertyId, StyleProperties};
use crate::parser::number_value;
use crate::types::StyleValue;
use crate::{Error, Result};

/// Expands one shorthand declaration into one or more style fields.
pub type ShorthandFn = dyn Fn(&Value, &mut StyleProperties) -> Result<()> + Send + Sync;

/// What a declaration name refers to.
#[derive(Clone, Copy)]
pub enum Property<'a> {
    /// A field of the style schema.
    Field(PropertyId),
    /// A registered shorthand.
    Shorthand(&'a ShorthandFn),
}

impl fmt::Debug for Property<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Field(id) => f.debug_tuple("Field").field(id).finish(),
            Property::Shorthand(_) => f.write_str("Shorthand"),
        }
    }
}

/// Resolves declaration names to schema fields or shorthand expansions.
///
/// The schema itself is static; only shorthands are registered at runtime.
/// [`PropertyRegistry::new`] registers `pad` and `space`, which write the
/// same number to all four `pad*` / `space*` fields.
#[derive(Clone)]
pub struct PropertyRegistry {
    shorthands: HashMap<String, Arc<ShorthandFn>>,
}

impl PropertyRegistry {
    /// Create a registry with the default shorthands.
    pub fn new() -> Self {
        let mut registry = Self::without_shorthands();

        registry.register_shorthand("pad", |value, style| {
            let pad = StyleValue::Set(number_value("pad", value)?);
            style.pad_left = pad.clone();
            style.pad_top = pad.clone();
            style.pad_right = pad.clone();
            style.pad_bottom = pad;
            Ok(())
        });

        registry.register_shorthand("space", |value, style| {
            let space = StyleValue::Set(number_value("space", value)?);
            style.space_left = space.clone();
            style.space_top = space.clone();
            style.space_right = space.clone();
            style.space_bottom = space;
            Ok(())
        });

        registry
    }

    /// Create a registry that knows only the schema fields.
    pub fn without_shorthands() -> Self {
        Self {
            shorthands: HashMap::new(),
        }
    }

    /// Register a shorthand property.
    ///
    /// A shorthand registered under a schema field's name takes precedence
    /// over the field.
    pub fn register_shorthand<F>(&mut self, name: impl Into<String>, expand: F)
    where
        F: Fn(&Value, &mut StyleProperties) -> Result<()> + Send + Sync + 'static,
    {
        let name = name.into();
        if PropertyId::from_name(&name).is_some() {
            tracing::debug!("Shorthand '{}' shadows a style field", name);
        }
        self.shorthands.insert(name, Arc::new(expand));
    }

    /// Resolve a declaration name.
    pub fn lookup(&self, name: &str) -> Result<Property<'_>> {
        if let Some(expand) = self.shorthands.get(name) {
            return Ok(Property::Shorthand(expand.as_ref()));
        }
        PropertyId::from_name(name)
            .map(Property::Field)
            .ok_or_else(|| Error::unknown_property(name))
    }

    /// Check if a shorthand is registered under `name`.
    pub fn is_shorthand(&self, name: &str) -> bool {
        self.shorthands.contains_key(name)
    }

    /// Names of the registered shorthands.
    pub fn shorthand_names(&self) -> impl Iterator<Item = &str> {
        self.shorthands.keys().map(String::as_str)
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.shorthand_names().collect();
        names.sort_unstable();
        f.debug_struct("PropertyRegistry")
            .field("shorthands", &names)
            .finish()
    }
}
