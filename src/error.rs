use std::fmt;

/// Errors raised while decorating routes or resolving helper paths
///
/// Decoration-time failures (`InvalidTemplate`) surface when a route table
/// is compiled. Call-time failures (`MissingArgument`, `InvalidOption`) are
/// fatal to that single helper call only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// A dynamic segment had no usable value in the call options
    MissingArgument {
        /// Helper that was invoked
        helper: String,
        /// Name of the dynamic segment (without marker)
        segment: String,
    },
    /// The host framework supplied a path template we cannot decompose
    InvalidTemplate {
        /// The raw template as received
        template: String,
        /// What is wrong with it
        reason: String,
    },
    /// Two routes produced the same helper name and the registry rejects collisions
    DuplicateHelper {
        /// The colliding helper name
        name: String,
    },
    /// No helper with this name was installed
    UnknownHelper {
        /// The requested helper name
        name: String,
    },
    /// A call option value cannot be used for the key it was given under
    InvalidOption {
        /// Option key
        key: String,
        /// Why the value was refused
        reason: String,
    },
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperError::MissingArgument { helper, segment } => {
                write!(
                    f,
                    "missing argument '{}' for path helper '{}'",
                    segment, helper
                )
            }
            HelperError::InvalidTemplate { template, reason } => {
                write!(f, "invalid path template '{}': {}", template, reason)
            }
            HelperError::DuplicateHelper { name } => {
                write!(
                    f,
                    "path helper '{}' is already installed by another route",
                    name
                )
            }
            HelperError::UnknownHelper { name } => {
                write!(f, "no path helper named '{}'", name)
            }
            HelperError::InvalidOption { key, reason } => {
                write!(f, "invalid value for option '{}': {}", key, reason)
            }
        }
    }
}

impl std::error::Error for HelperError {}

/// Convenience alias used across the crate
pub type HelperResult<T> = Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_names_segment_and_helper() {
        let err = HelperError::MissingArgument {
            helper: "api_v1_cats_path".to_string(),
            segment: "id".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'id'"));
        assert!(msg.contains("api_v1_cats_path"));
    }

    #[test]
    fn test_invalid_template_display() {
        let err = HelperError::InvalidTemplate {
            template: "/cats/{id".to_string(),
            reason: "unterminated '{'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid path template '/cats/{id': unterminated '{'"
        );
    }
}
