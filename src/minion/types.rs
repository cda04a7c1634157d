//! # Registration Data Model
//!
//! The request and configuration types that flow through the resolution
//! pipeline.
//!
//! A [`RegistrationRequest`] is a request-scoped value object: it is built
//! per call, consumed by value, and nothing survives it between
//! registrations. A [`ResolvedConfig`] is the immutable output, shared as
//! `Arc<ResolvedConfig>` once installed and safe for unsynchronized
//! concurrent reads.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ALL_ACTIONS;
use crate::registry::EntityRef;

/// Opaque identifier for one instrumentable controller action.
///
/// The reserved `__all__` value is a sentinel meaning "expand to the full
/// default action set"; it never survives resolution.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `__all__` sentinel.
    pub fn wildcard() -> Self {
        Self(ALL_ACTIONS.to_string())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == ALL_ACTIONS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deduplicated, deterministically ordered set of resolved actions.
pub type ActionSet = BTreeSet<ActionId>;

/// When, relative to the target action, the instrumentation hook runs.
///
/// Parsing is total: unrecognized values are carried through as
/// [`HookTiming::Custom`] without interpretation. Rejecting them, if
/// anyone does, is the installer's call, not the resolver's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HookTiming {
    Before,
    After,
    Around,
    Custom(String),
}

impl HookTiming {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Before => "before",
            Self::After => "after",
            Self::Around => "around",
            Self::Custom(value) => value,
        }
    }

    /// Whether this is one of the timings the stock installer understands.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl Default for HookTiming {
    fn default() -> Self {
        Self::Before
    }
}

impl From<String> for HookTiming {
    fn from(value: String) -> Self {
        match value.as_str() {
            "before" => Self::Before,
            "after" => Self::After,
            "around" => Self::Around,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for HookTiming {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<HookTiming> for String {
    fn from(timing: HookTiming) -> Self {
        timing.as_str().to_string()
    }
}

impl fmt::Display for HookTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw value of the `unique` option: a flag or an explicit dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UniqueSetting {
    Flag(bool),
    Dimension(String),
}

/// Resolved deduplication mode for tracked events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Uniqueness {
    #[default]
    Disabled,
    /// Deduplicate by the named identifying attribute.
    By(String),
}

impl Uniqueness {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::By(_))
    }

    pub fn dimension(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::By(dimension) => Some(dimension),
        }
    }
}

/// The raw options bag of a registration request. Every field is optional;
/// resolution applies the documented default for each one independently.
///
/// Keys match the Rails engine's option hash (`unique`, `counter_cache`,
/// `class_name`, `cache_class`, `column_name`, `hook`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<UniqueSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<HookTiming>,
}

/// One registration request: target name, raw actions, raw options.
///
/// Consumed by value per call, so no transient state can leak between
/// registrations on a shared registrar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<ActionId>,
    #[serde(flatten)]
    pub options: MinionOptions,
}

impl RegistrationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: Vec::new(),
            options: MinionOptions::default(),
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionId>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    pub fn with_options(mut self, options: MinionOptions) -> Self {
        self.options = options;
        self
    }
}

/// Fully resolved, immutable registration configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub name: String,
    /// Never empty, never contains the `__all__` sentinel.
    pub actions: ActionSet,
    pub uniqueness: Uniqueness,
    pub counter_cache_enabled: bool,
    /// Absent when the model entity could not be resolved; consumers skip
    /// model-dependent behavior in that case.
    pub target_model: Option<EntityRef>,
    /// Absent when neither an explicit nor the built-in cache entity
    /// resolved.
    pub cache_target: Option<EntityRef>,
    pub counter_column: String,
    pub hook_timing: HookTiming,
    pub registered_at: DateTime<Utc>,
}

impl ResolvedConfig {
    /// Whether the given action is selected for instrumentation.
    pub fn tracks_action(&self, action: &ActionId) -> bool {
        self.actions.contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_timing_parses_permissively() {
        assert_eq!(HookTiming::from("before"), HookTiming::Before);
        assert_eq!(HookTiming::from("around"), HookTiming::Around);
        let odd = HookTiming::from("sometimes");
        assert_eq!(odd, HookTiming::Custom("sometimes".to_string()));
        assert!(!odd.is_recognized());
        assert_eq!(odd.as_str(), "sometimes");
    }

    #[test]
    fn unique_setting_deserializes_bool_or_string() {
        let flag: UniqueSetting = serde_json::from_str("true").unwrap();
        assert_eq!(flag, UniqueSetting::Flag(true));

        let dim: UniqueSetting = serde_json::from_str("\"session_id\"").unwrap();
        assert_eq!(dim, UniqueSetting::Dimension("session_id".to_string()));
    }

    #[test]
    fn request_deserializes_with_flattened_options() {
        let yaml = r#"
name: posts
actions: [index, show]
class_name: Article
unique: true
"#;
        let request: RegistrationRequest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(request.name, "posts");
        assert_eq!(request.actions, vec![ActionId::from("index"), ActionId::from("show")]);
        assert_eq!(request.options.class_name.as_deref(), Some("Article"));
        assert_eq!(request.options.unique, Some(UniqueSetting::Flag(true)));
        assert!(request.options.hook.is_none());
    }
}
