use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetFormat(String),

    #[error("Component '{component}' cannot be empty in '{name}'.")]
    EmptyComponent {
        component: &'static str,
        name: String,
    },
}

/// Splits a `KEY=VALUE` override at the first `=`. Surrounding whitespace is
/// trimmed from the key only.
pub fn parse_set_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidSetFormat(kv_pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            name: kv_pair.to_string(),
        });
    }
    Ok((key, value))
}

/// Parses a comma-separated list such as `.pdb,-log.txt`.
pub fn parse_list(value: &str) -> Result<Vec<String>, ParseError> {
    let items: Vec<String> = value.split(',').map(|s| s.trim().to_string()).collect();
    if items.iter().any(|s| s.is_empty()) {
        return Err(ParseError::EmptyComponent {
            component: "list item",
            name: value.to_string(),
        });
    }
    Ok(items)
}
