//! Main style resolution engine.

use super::cascade::cascade_matching;
use super::{ResolvedStyle, StateStyles};
use crate::rules::{RuleStore, StyleRule};
use crate::style::{ComputedStyle, StyleProperties};
use crate::widget::StyleNode;
use crate::Result;

/// Resolves widget styles against one rule store.
///
/// Resolution for a widget:
/// 1. overlay matching stateless rules in declaration order
/// 2. for a stateful widget, do the same per declared state with only the
///    rules for that exact state, zero-filling each result
/// 3. overlay the widget's attached style names, in order, onto the base
/// 4. zero-fill the base
///
/// Declaration order, not selector length, decides which rule wins.
#[derive(Debug, Clone, Copy)]
pub struct CascadeResolver<'s> {
    store: &'s RuleStore,
}

impl<'s> CascadeResolver<'s> {
    /// Create a resolver over `store`.
    pub fn new(store: &'s RuleStore) -> Self {
        Self { store }
    }

    /// The store rules are matched against.
    pub fn store(&self) -> &'s RuleStore {
        self.store
    }

    /// Resolve the styles of `node`.
    pub fn resolve(&self, node: &dyn StyleNode) -> Result<ResolvedStyle> {
        let mut resolved = ResolvedStyle::default();
        self.resolve_into(node, &mut resolved)?;
        Ok(resolved)
    }

    /// Resolve the styles of `node` into `out`, reusing its state storage.
    ///
    /// If an attached style name is missing, fails with
    /// [`Error::StyleNotFound`](crate::Error::StyleNotFound) and leaves
    /// `out` untouched.
    pub fn resolve_into(&self, node: &dyn StyleNode, out: &mut ResolvedStyle) -> Result<()> {
        let attached = node
            .extra_style_names()
            .iter()
            .map(|name| self.store.lookup_by_name(name))
            .collect::<Result<Vec<&StyleRule>>>()?;

        let mut base = StyleProperties::new();
        let matched = cascade_matching(&mut base, self.store, node, None);

        match node.stateful() {
            Some(stateful) => {
                let states = stateful.state_values();
                out.states.refill(
                    states
                        .iter()
                        .map(|state| (state.as_str(), self.resolve_state(node, state))),
                );
            }
            None => out.states.clear(),
        }

        for rule in &attached {
            base.merge(&rule.properties);
        }

        out.base = ComputedStyle::from_properties(&base);
        out.generation = self.store.generation();

        tracing::trace!(
            "Resolved '{}': {} rules, {} attached styles, {} states",
            node.type_name(),
            matched,
            attached.len(),
            out.states.len()
        );
        Ok(())
    }

    /// Resolve the style of one state, starting from nothing.
    pub fn resolve_state(&self, node: &dyn StyleNode, state: &str) -> ComputedStyle {
        let mut properties = StyleProperties::new();
        cascade_matching(&mut properties, self.store, node, Some(state));
        ComputedStyle::from_properties(&properties)
    }

    /// Resolve only the per-state styles of `node`.
    ///
    /// Empty for widgets without states.
    pub fn resolve_states(&self, node: &dyn StyleNode) -> StateStyles {
        let mut styles = StateStyles::new();
        if let Some(stateful) = node.stateful() {
            styles.refill(
                stateful
                    .state_values()
                    .iter()
                    .map(|state| (state.as_str(), self.resolve_state(node, state))),
            );
        }
        styles
    }
}
