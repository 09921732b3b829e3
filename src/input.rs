//! Parsing of integer lists typed on the command line.
//!
//! Accepts `5,2,8`, `5 2 8` and `[5, 2, 8]`. Empty input (or `[]`) is the
//! empty sequence.

use crate::error::{Result, SortError};

pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    let trimmed = text.trim();
    let body = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => return Err(SortError::UnbalancedBrackets(trimmed.to_string())),
    };

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| SortError::InvalidElement {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Renders a sequence as `[a, b, c]`.
pub fn format_sequence<T: std::fmt::Display>(data: &[T]) -> String {
    let items: Vec<String> = data.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
