//! Style resolution engine.

mod cascade;
mod engine;
mod resolved;
mod transition;

pub use cascade::cascade_matching;
pub use engine::CascadeResolver;
pub use resolved::{ResolvedStyle, StateStyles};
pub use transition::TransitionEvaluator;
