//! Declaration key grammar: `type(.type)*(;state)?`.

use crate::selector::{STATE_SEPARATOR, Selector, TYPE_SEPARATOR};
use crate::{Error, Result};

/// Parse a declaration key into a selector.
///
/// ```
/// use cui_style::parser::parse_key;
///
/// let selector = parse_key("button.icon;hover").unwrap();
/// assert_eq!(selector.type_names, ["button", "icon"]);
/// assert_eq!(selector.state.as_deref(), Some("hover"));
/// ```
pub fn parse_key(key: &str) -> Result<Selector> {
    let (types, state) = match key.split_once(STATE_SEPARATOR) {
        Some((types, state)) => {
            if state.contains(STATE_SEPARATOR) {
                return Err(Error::malformed_key(key, "more than one state separator"));
            }
            (types, Some(identifier(key, state, "state name")?))
        }
        None => (key, None),
    };

    let type_names = types
        .split(TYPE_SEPARATOR)
        .map(|segment| identifier(key, segment, "type name").map(str::to_string))
        .collect::<Result<Vec<_>>>()?;

    Ok(Selector::new(type_names, state.map(str::to_string)))
}

fn identifier<'k>(key: &str, segment: &'k str, what: &str) -> Result<&'k str> {
    if segment.is_empty() {
        Err(Error::malformed_key(key, format!("empty {}", what)))
    } else if segment.chars().any(char::is_whitespace) {
        Err(Error::malformed_key(
            key,
            format!("{} '{}' contains whitespace", what, segment),
        ))
    } else {
        Ok(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(key: &str) -> String {
        match parse_key(key) {
            Err(Error::MalformedKey { message, .. }) => message,
            other => panic!("expected malformed key for {:?}, got {:?}", key, other),
        }
    }

    #[test]
    fn single_type() {
        let selector = parse_key("label").unwrap();
        assert_eq!(selector.type_names, ["label"]);
        assert_eq!(selector.state, None);
    }

    #[test]
    fn ancestry_chain_splits_on_dots() {
        let selector = parse_key("window.table.button").unwrap();
        assert_eq!(selector.type_names, ["window", "table", "button"]);
    }

    #[test]
    fn state_suffix() {
        let selector = parse_key("button;pressed").unwrap();
        assert_eq!(selector.type_names, ["button"]);
        assert_eq!(selector.state.as_deref(), Some("pressed"));
    }

    #[test]
    fn malformed_keys() {
        assert_eq!(malformed(""), "empty type name");
        assert_eq!(malformed("button."), "empty type name");
        assert_eq!(malformed(".button"), "empty type name");
        assert_eq!(malformed("button;"), "empty state name");
        assert_eq!(malformed("button;hover;down"), "more than one state separator");
        assert_eq!(malformed("big button"), "type name 'big button' contains whitespace");
    }
}
