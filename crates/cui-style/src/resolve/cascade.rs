//! Property cascading logic.

use crate::rules::RuleStore;
use crate::style::StyleProperties;
use crate::widget::StyleNode;

/// Overlay every rule matching `node` in one resolution pass onto `target`.
///
/// Rules are applied in declaration order, so a later rule overrides an
/// earlier one field by field regardless of how long its selector is.
/// Only set fields are copied. Returns the number of rules applied.
pub fn cascade_matching(
    target: &mut StyleProperties,
    store: &RuleStore,
    node: &dyn StyleNode,
    state: Option<&str>,
) -> usize {
    let mut applied = 0;
    for rule in store.candidates(node.type_name()) {
        if rule.matches(node, state) {
            target.merge(&rule.properties);
            applied += 1;
        }
    }
    applied
}
