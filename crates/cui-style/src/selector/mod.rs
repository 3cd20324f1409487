//! Rule selectors and ancestry matching.

mod matcher;
mod types;

pub use matcher::SelectorMatcher;
pub use types::{STATE_SEPARATOR, Selector, TYPE_SEPARATOR};
