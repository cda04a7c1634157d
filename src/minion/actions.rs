//! # Action-Set Resolution
//!
//! Expands a possibly-empty, possibly-shorthand action list into the
//! concrete set of actions to instrument. Pure and total: every input,
//! including an empty or sentinel-only list, yields a valid non-empty set.

use crate::constants::DEFAULT_ACTIONS;

use super::types::{ActionId, ActionSet};

/// The fixed default action set (the RESTful controller actions).
pub fn default_actions() -> ActionSet {
    DEFAULT_ACTIONS.iter().map(|name| ActionId::new(*name)).collect()
}

/// Resolve a raw action list.
///
/// - Empty input means "track everything": the default set is returned.
/// - A list containing the `__all__` sentinel unions the remaining explicit
///   actions with the default set.
/// - Otherwise the input is deduplicated and returned as-is.
pub fn resolve_actions(raw: &[ActionId]) -> ActionSet {
    if raw.is_empty() {
        return default_actions();
    }

    let mut resolved: ActionSet = raw
        .iter()
        .filter(|action| !action.is_wildcard())
        .cloned()
        .collect();

    if raw.iter().any(ActionId::is_wildcard) {
        resolved.extend(default_actions());
    }

    resolved
}
