//! # System Constants
//!
//! Core constants that define the defaulting behavior of the registration
//! resolver.
//!
//! This module maintains compatibility with the Rails Impressionist engine:
//! the default action set mirrors the RESTful controller actions, and the
//! well-known names (counter column, cache class, uniqueness dimension) are
//! the ones the Rails side expects to find.

/// Sentinel action meaning "expand to the full default action set".
///
/// The Rails engine accepts `:__all__` as a shortcut for concatenating all
/// RESTful controller actions with whatever else was passed in.
pub const ALL_ACTIONS: &str = "__all__";

/// The RESTful controller actions tracked when a registration names none.
pub const DEFAULT_ACTIONS: [&str; 7] = [
    "index", "show", "edit", "new", "create", "update", "delete",
];

/// Counter column updated when counter caching is enabled.
pub const DEFAULT_COLUMN_NAME: &str = "impressions_total";

/// Uniqueness dimension used when `unique: true` is given without one.
pub const DEFAULT_UNIQUE_DIMENSION: &str = "ip_address";

/// Built-in cache entity consulted when no `cache_class` is given.
pub const DEFAULT_CACHE_CLASS: &str = "Impressionist::ImpressionsCache";

/// Suffix appended to a minion name before deriving its controller entity.
pub const CONTROLLER_SUFFIX: &str = "_controller";

/// Environment variables consulted, in order, to detect the runtime
/// environment (mirrors the Rails engine's detection chain).
pub const ENVIRONMENT_VARS: [&str; 4] = ["IMPRESSIONIST_ENV", "RAILS_ENV", "RACK_ENV", "APP_ENV"];
