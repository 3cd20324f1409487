//! Stylesheet parsing.
//!
//! A stylesheet is a JSON object mapping declaration keys to property maps:
//!
//! ```json
//! {
//!     "button": { "background": "button-up", "pad": 4 },
//!     "button;hover": { "background": "button-over", "transition": 0.2 },
//!     "button.icon": { "color": "#FFFFFFCC" }
//! }
//! ```

mod document;
mod key;
mod loader;
mod values;

pub use document::{Declarations, RuleParser};
pub use key::parse_key;
pub use loader::StylesheetLoader;
pub use values::{ValueDecoder, number_value, string_value};
