//! Indexed, immutable rule collection.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::rules::StyleRule;
use crate::{Error, Result};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// All rules of one loaded stylesheet.
///
/// Rules keep their declaration order, which is the override order. Two
/// indexes sit on top: declaration key → rule, for explicitly attached
/// styles, and leaf type → rules, so a widget only tests rules whose last
/// selector segment is its own type.
///
/// A store is never mutated after construction. Reloading builds a new
/// store with a new [`generation`](Self::generation).
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules: Vec<StyleRule>,
    by_name: HashMap<String, usize>,
    by_leaf: HashMap<String, Vec<usize>>,
    generation: u64,
    source_path: Option<PathBuf>,
}

impl RuleStore {
    /// Build a store from rules in declaration order.
    ///
    /// Each rule's `order` is reset to its position. When two rules share a
    /// declaration key, name lookup finds the later one.
    pub fn from_rules(mut rules: Vec<StyleRule>) -> Self {
        let mut by_name = HashMap::with_capacity(rules.len());
        let mut by_leaf: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, rule) in rules.iter_mut().enumerate() {
            rule.order = index as u32;
            by_name.insert(rule.name.clone(), index);
            if let Some(leaf) = rule.selector.leaf() {
                by_leaf.entry(leaf.to_string()).or_default().push(index);
            }
        }

        Self {
            rules,
            by_name,
            by_leaf,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            source_path: None,
        }
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::from_rules(vec![])
    }

    /// Record the file this store was loaded from.
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Look up a rule by its declaration key.
    ///
    /// Fails with [`Error::StyleNotFound`]: a widget naming a style the
    /// stylesheet does not declare is a content error, not a no-op.
    pub fn lookup_by_name(&self, name: &str) -> Result<&StyleRule> {
        self.get(name).ok_or_else(|| Error::style_not_found(name))
    }

    /// Look up a rule by its declaration key.
    pub fn get(&self, name: &str) -> Option<&StyleRule> {
        self.by_name.get(name).map(|&index| &self.rules[index])
    }

    /// Rules whose leaf type is `leaf`, in declaration order.
    pub fn candidates<'a>(&'a self, leaf: &str) -> impl Iterator<Item = &'a StyleRule> + 'a {
        self.by_leaf
            .get(leaf)
            .into_iter()
            .flatten()
            .map(move |&index| &self.rules[index])
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Unique number identifying this rule set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Source file path, if loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Style, StyleProperties};

    fn rule(key: &str, pad: f32) -> StyleRule {
        StyleRule::parse(key, Style::new().pad(pad).build(), 99).unwrap()
    }

    #[test]
    fn rule_ordering() {
        let store = RuleStore::from_rules(vec![rule("a", 1.0), rule("b", 2.0), rule("c", 3.0)]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.rules()[0].order, 0);
        assert_eq!(store.rules()[1].order, 1);
        assert_eq!(store.rules()[2].order, 2);
    }

    #[test]
    fn lookup_by_name() {
        let store = RuleStore::from_rules(vec![rule("title", 1.0), rule("button;hover", 2.0)]);

        assert_eq!(store.lookup_by_name("button;hover").unwrap().order, 1);
        let err = store.lookup_by_name("button").unwrap_err();
        assert!(matches!(err, Error::StyleNotFound { ref name } if name == "button"));
    }

    #[test]
    fn duplicate_keys_resolve_to_later_rule() {
        let store = RuleStore::from_rules(vec![rule("title", 1.0), rule("title", 2.0)]);

        let found = store.lookup_by_name("title").unwrap();
        assert_eq!(found.order, 1);
        assert_eq!(found.properties.pad_left.as_set(), Some(&2.0));
    }

    #[test]
    fn candidates_by_leaf_keep_order() {
        let store = RuleStore::from_rules(vec![
            rule("icon", 1.0),
            rule("button", 2.0),
            rule("button.icon", 3.0),
            rule("icon;hover", 4.0),
        ]);

        let orders: Vec<u32> = store.candidates("icon").map(|r| r.order).collect();
        assert_eq!(orders, [0, 2, 3]);
        assert_eq!(store.candidates("label").count(), 0);
    }

    #[test]
    fn generations_are_unique() {
        let a = RuleStore::empty();
        let b = RuleStore::from_rules(vec![StyleRule::for_type("x", StyleProperties::default(), 0)]);

        assert_ne!(a.generation(), b.generation());
        assert!(a.is_empty());
        assert!(a.source_path().is_none());
        assert_eq!(
            b.with_source_path("ui/style.json").source_path(),
            Some(Path::new("ui/style.json"))
        );
    }
}
