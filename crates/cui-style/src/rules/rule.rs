//! Single style rule definition.

use crate::parser::parse_key;
use crate::selector::{Selector, SelectorMatcher};
use crate::style::StyleProperties;
use crate::widget::StyleNode;
use crate::Result;

/// A style rule mapping a selector to properties.
///
/// Rules are immutable once built; the cascade applies them in `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The declaration key, as written in the stylesheet.
    ///
    /// Widgets attach this rule explicitly by this name.
    pub name: String,
    /// The selector for matching widgets.
    pub selector: Selector,
    /// The style properties to apply.
    pub properties: StyleProperties,
    /// Source order; later rules override earlier ones.
    pub order: u32,
}

impl StyleRule {
    /// Create a rule from a selector. The name is the selector's key form.
    pub fn new(selector: Selector, properties: StyleProperties, order: u32) -> Self {
        Self {
            name: selector.to_string(),
            selector,
            properties,
            order,
        }
    }

    /// Create a rule from a declaration key such as `button.icon;hover`.
    pub fn parse(key: &str, properties: StyleProperties, order: u32) -> Result<Self> {
        Ok(Self {
            name: key.to_string(),
            selector: parse_key(key)?,
            properties,
            order,
        })
    }

    /// Create a rule with a single type selector.
    pub fn for_type(
        widget_type: impl Into<String>,
        properties: StyleProperties,
        order: u32,
    ) -> Self {
        Self::new(Selector::type_selector(widget_type), properties, order)
    }

    /// Check if this rule applies to a widget in the given resolution pass.
    pub fn matches(&self, node: &dyn StyleNode, state: Option<&str>) -> bool {
        SelectorMatcher::matches(&self.selector, node, state)
    }
}
