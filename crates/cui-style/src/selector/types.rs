//! Selector type definitions.

use std::fmt;

/// Separates the segments of a type-ancestry chain (`button.icon`).
pub const TYPE_SEPARATOR: char = '.';

/// Separates the selector from the interaction state (`button;hover`).
pub const STATE_SEPARATOR: char = ';';

/// A rule selector: a type-ancestry chain plus an optional state.
///
/// `type_names` is ordered root-most first; the last entry is matched
/// against the widget's own type, the one before it against the parent's
/// type, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Ancestry chain, leaf type last.
    pub type_names: Vec<String>,
    /// Interaction state this selector is restricted to.
    pub state: Option<String>,
}

impl Selector {
    /// Create a selector from an ancestry chain and optional state.
    pub fn new(type_names: Vec<String>, state: Option<String>) -> Self {
        Self { type_names, state }
    }

    /// Create a selector matching one widget type.
    pub fn type_selector(widget_type: impl Into<String>) -> Self {
        Self::new(vec![widget_type.into()], None)
    }

    /// Create a selector from an ancestry chain, root-most first.
    pub fn ancestry<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(types.into_iter().map(Into::into).collect(), None)
    }

    /// Restrict the selector to a state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// The type matched against the widget itself.
    pub fn leaf(&self) -> Option<&str> {
        self.type_names.last().map(String::as_str)
    }

    /// Number of ancestry segments.
    pub fn depth(&self) -> usize {
        self.type_names.len()
    }

    /// Check if the selector is restricted to a state.
    pub fn is_stateful(&self) -> bool {
        self.state.is_some()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, type_name) in self.type_names.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", TYPE_SEPARATOR)?;
            }
            write!(f, "{}", type_name)?;
        }
        if let Some(state) = &self.state {
            write!(f, "{}{}", STATE_SEPARATOR, state)?;
        }
        Ok(())
    }
}
