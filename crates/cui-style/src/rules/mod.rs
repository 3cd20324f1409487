//! Style rules and the rule store.

mod rule;
mod store;

pub use rule::StyleRule;
pub use store::RuleStore;
