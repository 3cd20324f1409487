//! Selector matching algorithm.

use super::Selector;
use crate::widget::StyleNode;

/// Selector matching engine.
#[derive(Debug)]
pub struct SelectorMatcher;

impl SelectorMatcher {
    /// Check if a selector applies to a widget in one resolution pass.
    ///
    /// `state` is `None` for the base pass and the state name for a
    /// per-state pass.
    pub fn matches(selector: &Selector, node: &dyn StyleNode, state: Option<&str>) -> bool {
        Self::state_matches(selector, state) && Self::ancestry_matches(selector, node)
    }

    /// Check if a selector belongs to a resolution pass.
    ///
    /// Stateless selectors only belong to the base pass; stateful selectors
    /// only to the pass for their exact state.
    pub fn state_matches(selector: &Selector, state: Option<&str>) -> bool {
        selector.state.as_deref() == state
    }

    /// Check the ancestry chain right to left against the widget and its parents.
    ///
    /// A chain longer than the widget's ancestry never matches, nor does an
    /// empty chain.
    pub fn ancestry_matches(selector: &Selector, node: &dyn StyleNode) -> bool {
        if selector.type_names.is_empty() {
            return false;
        }

        let mut current = Some(node);
        for type_name in selector.type_names.iter().rev() {
            match current {
                Some(n) if n.type_name() == type_name => current = n.parent(),
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::test_support::TestNode;

    #[test]
    fn leaf_type_matches() {
        let button = TestNode::new("button");

        assert!(SelectorMatcher::ancestry_matches(&Selector::type_selector("button"), &button));
        assert!(!SelectorMatcher::ancestry_matches(&Selector::type_selector("label"), &button));
    }

    #[test]
    fn ancestry_matches_parent_chain() {
        let button = TestNode::new("button");
        let icon = TestNode::new("icon").child_of(&button);

        let selector = Selector::ancestry(["button", "icon"]);
        assert!(SelectorMatcher::ancestry_matches(&selector, &icon));

        // The leaf must be the widget itself, not an ancestor.
        assert!(!SelectorMatcher::ancestry_matches(&selector, &button));
    }

    #[test]
    fn ancestry_requires_direct_parent() {
        let button = TestNode::new("button");
        let table = TestNode::new("table").child_of(&button);
        let icon = TestNode::new("icon").child_of(&table);

        // Parent type is `table`, so the grandparent being `button` is irrelevant.
        assert!(!SelectorMatcher::ancestry_matches(&Selector::ancestry(["button", "icon"]), &icon));
        assert!(SelectorMatcher::ancestry_matches(
            &Selector::ancestry(["button", "table", "icon"]),
            &icon
        ));
    }

    #[test]
    fn chain_longer_than_ancestry_never_matches() {
        let button = TestNode::new("button");
        let icon = TestNode::new("icon").child_of(&button);

        let selector = Selector::ancestry(["window", "button", "icon"]);
        assert!(!SelectorMatcher::ancestry_matches(&selector, &icon));
        assert!(!SelectorMatcher::ancestry_matches(&Selector::ancestry(Vec::<String>::new()), &icon));
    }

    #[test]
    fn state_passes_are_isolated() {
        let button = TestNode::new("button");
        let base = Selector::type_selector("button");
        let hover = Selector::type_selector("button").with_state("hover");

        assert!(SelectorMatcher::matches(&base, &button, None));
        assert!(!SelectorMatcher::matches(&base, &button, Some("hover")));
        assert!(SelectorMatcher::matches(&hover, &button, Some("hover")));
        assert!(!SelectorMatcher::matches(&hover, &button, Some("pressed")));
        assert!(!SelectorMatcher::matches(&hover, &button, None));
    }
}
