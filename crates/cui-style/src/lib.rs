//! Stylesheet cascade for CUI widgets.
//!
//! This crate resolves, for each widget, a fully typed style from a
//! stylesheet of rules matched on the widget's type ancestry, its
//! interaction state and style names attached to it:
//!
//! - **Rules**: declaration keys like `button.icon;over` select by parent
//!   chain and state
//! - **Cascading**: later declarations override earlier ones field by field;
//!   attached style names override everything
//! - **States**: one resolved style per interaction state, with timed
//!   transitions between them
//! - **Hot Reload**: reload stylesheets during development (`hot-reload`
//!   feature)
//! - **Type-safe DSL**: build styles programmatically with Rust
//!
//! # Example
//!
//! ```
//! use cui_style::prelude::*;
//!
//! struct Widget<'a> {
//!     type_name: &'a str,
//!     parent: Option<&'a Widget<'a>>,
//! }
//!
//! impl StyleNode for Widget<'_> {
//!     fn type_name(&self) -> &str {
//!         self.type_name
//!     }
//!
//!     fn parent(&self) -> Option<&dyn StyleNode> {
//!         self.parent.map(|p| p as &dyn StyleNode)
//!     }
//! }
//!
//! let atlas = DrawableAtlas::from_regions([AtlasRegion::with_splits("panel", [4, 4, 4, 4])]);
//! let store = StylesheetLoader::new(atlas).load_str(
//!     r#"{
//!         "button": { "pad": 4 },
//!         "button.icon": { "pad": 8, "background": "panel" }
//!     }"#,
//! )?;
//!
//! let button = Widget { type_name: "button", parent: None };
//! let icon = Widget { type_name: "icon", parent: Some(&button) };
//!
//! let resolved = CascadeResolver::new(&store).resolve(&icon)?;
//! assert_eq!(resolved.base.pad_left, 8.0);
//! assert!(resolved.base.background.unwrap().is_nine_patch());
//! # Ok::<(), cui_style::Error>(())
//! ```

pub mod types;
pub mod style;
pub mod selector;
pub mod rules;
pub mod resolve;
pub mod parser;
pub mod widget;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod error;

pub use error::{Error, ReferenceKind, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{
        Align, AtlasRegion, Color, ColorRegistry, Drawable, DrawableAtlas, StyleValue,
    };
    pub use crate::style::{ComputedStyle, PropertyRegistry, Style, StyleProperties};
    pub use crate::selector::Selector;
    pub use crate::rules::{RuleStore, StyleRule};
    pub use crate::parser::StylesheetLoader;
    pub use crate::resolve::{CascadeResolver, ResolvedStyle, StateStyles, TransitionEvaluator};
    pub use crate::widget::{InteractionState, StyleNode, Stateful};

    #[cfg(feature = "hot-reload")]
    pub use crate::hot_reload::StylesheetWatcher;
}
