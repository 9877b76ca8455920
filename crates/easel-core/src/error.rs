//! Error types for shape construction.

use thiserror::Error;

/// Errors raised while building shapes from caller-supplied content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_message() {
        let err = ShapeError::EmptyName { kind: "field" };
        assert_eq!(err.to_string(), "field name must not be empty");
    }
}
