//! Error types for the styling system.

use std::fmt;
use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of asset a style property refers to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A region or nine-patch in the drawable atlas.
    Drawable,
    /// A named color or color literal.
    Color,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Drawable => write!(f, "drawable"),
            ReferenceKind::Color => write!(f, "color"),
        }
    }
}

/// Errors that can occur in the styling system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A stylesheet declaration could not be parsed.
    ///
    /// Wraps the underlying cause and names the declaration it came from.
    #[error("Error parsing style '{rule}': {source}")]
    Stylesheet {
        rule: String,
        #[source]
        source: Box<Error>,
    },

    /// Declaration key does not follow `type(.type)*(;state)?`.
    #[error("Malformed style key '{key}': {message}")]
    MalformedKey { key: String, message: String },

    /// Property name is neither a style field nor a registered shorthand.
    #[error("Unknown style property '{property}'")]
    UnknownProperty { property: String },

    /// A drawable or color name could not be found.
    #[error("No {kind} found with name '{name}'")]
    UnresolvedReference { kind: ReferenceKind, name: String },

    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// Stylesheet text is not valid JSON.
    #[error("Invalid stylesheet document: {0}")]
    Json(#[from] serde_json::Error),

    /// Stylesheet document has the wrong shape.
    #[error("Invalid stylesheet document: {0}")]
    Document(String),

    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A widget references a style name the stylesheet does not declare.
    #[error("No style found with name '{name}'")]
    StyleNotFound { name: String },

    /// A widget is in a state that has no resolved style.
    #[error("No resolved style for state '{state}'")]
    UnknownState { state: String },

    /// Hot-reload error.
    #[cfg(feature = "hot-reload")]
    #[error("Hot-reload error: {0}")]
    HotReload(String),
}

impl Error {
    /// Wrap an error with the declaration key it was raised for.
    pub fn stylesheet(rule: impl Into<String>, source: Error) -> Self {
        Self::Stylesheet {
            rule: rule.into(),
            source: Box::new(source),
        }
    }

    /// Create a malformed key error.
    pub fn malformed_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedKey {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an unknown property error.
    pub fn unknown_property(property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
        }
    }

    /// Create an unresolved reference error.
    pub fn unresolved(kind: ReferenceKind, name: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            kind,
            name: name.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing style error.
    pub fn style_not_found(name: impl Into<String>) -> Self {
        Self::StyleNotFound { name: name.into() }
    }

    /// The declaration key a load error was raised for, if any.
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::Stylesheet { rule, .. } => Some(rule),
            _ => None,
        }
    }

    /// The innermost error, unwrapping any [`Error::Stylesheet`] layers.
    pub fn cause(&self) -> &Error {
        match self {
            Self::Stylesheet { source, .. } => source.cause(),
            other => other,
        }
    }
}
