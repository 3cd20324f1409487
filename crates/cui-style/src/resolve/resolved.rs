//! Resolution results.

use crate::rules::RuleStore;
use crate::style::ComputedStyle;

/// Resolved styles for each state of a stateful widget.
///
/// Keeps the widget's state declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStyles {
    entries: Vec<(String, ComputedStyle)>,
}

impl StateStyles {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The style for `state`.
    pub fn get(&self, state: &str) -> Option<&ComputedStyle> {
        self.entries
            .iter()
            .find(|(name, _)| name == state)
            .map(|(_, style)| style)
    }

    /// Iterate over `(state, style)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComputedStyle)> {
        self.entries.iter().map(|(name, style)| (name.as_str(), style))
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Get the number of states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no states.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the contents, reusing existing allocations.
    pub(crate) fn refill<'s>(&mut self, styles: impl IntoIterator<Item = (&'s str, ComputedStyle)>) {
        let mut len = 0;
        for (state, style) in styles {
            match self.entries.get_mut(len) {
                Some((name, slot)) => {
                    name.clear();
                    name.push_str(state);
                    *slot = style;
                }
                None => self.entries.push((state.to_string(), style)),
            }
            len += 1;
        }
        self.entries.truncate(len);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The resolved base style of a widget plus one style per state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    /// Style for the widget outside of any state.
    pub base: ComputedStyle,
    /// Styles per interaction state; empty for stateless widgets.
    pub states: StateStyles,
    /// Generation of the rule store this was resolved against.
    pub generation: u64,
}

impl ResolvedStyle {
    /// The style for `state`.
    pub fn state(&self, state: &str) -> Option<&ComputedStyle> {
        self.states.get(state)
    }

    /// Check if this was resolved against `store`.
    ///
    /// A default-constructed value is never current.
    pub fn is_current(&self, store: &RuleStore) -> bool {
        self.generation == store.generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn style(pad: f32) -> ComputedStyle {
        ComputedStyle::from_properties(&Style::new().pad(pad).build())
    }

    #[test]
    fn refill_keeps_order_and_shrinks() {
        let mut states = StateStyles::new();
        states.refill([("up", style(1.0)), ("over", style(2.0)), ("down", style(3.0))]);
        assert_eq!(states.names().collect::<Vec<_>>(), ["up", "over", "down"]);

        states.refill([("checked", style(4.0))]);
        assert_eq!(states.len(), 1);
        assert_eq!(states.get("checked").map(|s| s.pad_left), Some(4.0));
        assert!(states.get("up").is_none());

        states.clear();
        assert!(states.is_empty());
    }

    #[test]
    fn default_is_never_current() {
        let resolved = ResolvedStyle::default();
        assert!(!resolved.is_current(&RuleStore::empty()));
        assert!(resolved.state("over").is_none());
    }
}
