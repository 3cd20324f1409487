//! Style properties, the property schema and computed styles.

mod builder;
mod computed;
mod field;
mod properties;
mod registry;

pub use builder::Style;
pub use field::{FieldValue, PropertyKind, PropertyValue};
pub use properties::{ComputedStyle, PropertyId, StyleProperties};
pub use registry::{Property, PropertyRegistry, ShorthandFn};
