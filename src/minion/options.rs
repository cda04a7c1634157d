//! # Options Resolution
//!
//! Applies the documented default for every optional setting of a
//! registration request. Each field resolves independently; entity lookups
//! are read-only queries against the [`EntityRegistry`] and a miss is a
//! valid outcome, never an error.

use std::sync::Arc;

use tracing::debug;

use crate::constants::{DEFAULT_CACHE_CLASS, DEFAULT_COLUMN_NAME, DEFAULT_UNIQUE_DIMENSION};
use crate::registry::{EntityRef, EntityRegistry, EntityType};
use crate::utils::inflect;

use super::types::{HookTiming, MinionOptions, UniqueSetting, Uniqueness};

/// Output of options resolution: every optional setting made concrete.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub uniqueness: Uniqueness,
    pub counter_cache_enabled: bool,
    pub target_model: Option<EntityRef>,
    pub cache_target: Option<EntityRef>,
    pub counter_column: String,
    pub hook_timing: HookTiming,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            uniqueness: Uniqueness::Disabled,
            counter_cache_enabled: false,
            target_model: None,
            cache_target: None,
            counter_column: DEFAULT_COLUMN_NAME.to_string(),
            hook_timing: HookTiming::Before,
        }
    }
}

/// Resolves a raw options bag against the entity registry.
#[derive(Debug, Clone)]
pub struct OptionsResolver {
    entities: Arc<EntityRegistry>,
}

impl OptionsResolver {
    pub fn new(entities: Arc<EntityRegistry>) -> Self {
        Self { entities }
    }

    /// Resolve every field of `options` for the minion named `name`.
    pub fn resolve(&self, options: &MinionOptions, name: &str) -> ResolvedOptions {
        ResolvedOptions {
            uniqueness: resolve_uniqueness(options.unique.as_ref()),
            counter_cache_enabled: options.counter_cache.unwrap_or(false),
            target_model: self.resolve_target_model(options, name),
            cache_target: self.resolve_cache_target(options),
            counter_column: options
                .column_name
                .clone()
                .unwrap_or_else(|| DEFAULT_COLUMN_NAME.to_string()),
            hook_timing: options.hook.clone().unwrap_or_default(),
        }
    }

    /// An explicit `class_name` is used as the reference directly; otherwise
    /// the conventional model name derived from the minion name is looked
    /// up, and a miss yields an absent reference.
    fn resolve_target_model(&self, options: &MinionOptions, name: &str) -> Option<EntityRef> {
        if let Some(class_name) = &options.class_name {
            return Some(Arc::new(EntityType::model(class_name.clone())));
        }

        let candidate = inflect::classify(name);
        let found = self.entities.lookup(&candidate);
        if found.is_none() {
            debug!(minion = %name, candidate = %candidate, "model entity not registered");
        }
        found
    }

    fn resolve_cache_target(&self, options: &MinionOptions) -> Option<EntityRef> {
        if let Some(cache_class) = &options.cache_class {
            return Some(Arc::new(EntityType::cache(cache_class.clone())));
        }

        self.entities.lookup(DEFAULT_CACHE_CLASS)
    }
}

fn resolve_uniqueness(unique: Option<&UniqueSetting>) -> Uniqueness {
    match unique {
        None | Some(UniqueSetting::Flag(false)) => Uniqueness::Disabled,
        Some(UniqueSetting::Flag(true)) => Uniqueness::By(DEFAULT_UNIQUE_DIMENSION.to_string()),
        Some(UniqueSetting::Dimension(dimension)) => Uniqueness::By(dimension.clone()),
    }
}
