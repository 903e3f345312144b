use thiserror::Error;

/// Errors produced by tree operations.
///
/// A missing element is never an error: `search` answers `None` and
/// `remove` is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    #[error("structure is empty")]
    EmptyStructure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            TreeError::InvalidArgument("element is absent").to_string(),
            "invalid argument: element is absent"
        );
        assert_eq!(
            TreeError::UnsupportedOperation("rotation").to_string(),
            "unsupported operation: rotation"
        );
        assert_eq!(TreeError::EmptyStructure.to_string(), "structure is empty");
    }
}
