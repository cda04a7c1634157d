//! # Error Types
//!
//! Structured error handling for the registration core using thiserror
//! instead of `Box<dyn Error>` patterns.
//!
//! Expected absence is never an error here: a model or cache entity that
//! cannot be resolved simply yields an absent reference. Only a missing
//! *target* controller surfaces as a reported failure, and even that is
//! non-fatal to the overall registration sequence.

use thiserror::Error;

/// Errors produced while resolving and installing minion registrations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImpressionistError {
    /// The named target controller is not present in the entity registry.
    /// Reported and skipped; subsequent registrations are unaffected.
    #[error("target controller not found for minion '{name}': looked up '{candidate}'")]
    UnresolvableTarget { name: String, candidate: String },

    /// A structurally required field was never supplied to the builder.
    #[error("resolved configuration is missing required field: {field}")]
    MissingField { field: &'static str },

    /// A registration manifest could not be loaded or parsed.
    #[error("configuration error: {component}: {message}")]
    Configuration { component: String, message: String },
}

impl ImpressionistError {
    /// Create an unresolvable-target error
    pub fn unresolvable_target(name: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self::UnresolvableTarget {
            name: name.into(),
            candidate: candidate.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            component: component.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImpressionistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolvable_target_names_the_candidate() {
        let err = ImpressionistError::unresolvable_target("widgets", "WidgetsController");
        assert_eq!(
            err.to_string(),
            "target controller not found for minion 'widgets': looked up 'WidgetsController'"
        );
    }
}
