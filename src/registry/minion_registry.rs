//! # Minion Registry
//!
//! Installed-hook table replacing the Rails engine's
//! `define_singleton_method` on live controller classes.
//!
//! ## Overview
//!
//! Installing a minion means recording an [`InstalledMinion`] descriptor
//! under the target's name. The dispatch layer queries [`config_for`] at
//! invocation time; before a target is registered the query returns
//! nothing. Keying by target name makes the one-hook-per-target invariant
//! structural: a repeat registration replaces the previous descriptor and
//! is logged.
//!
//! The [`InstrumentationInstaller`] trait is the seam to the host
//! framework's own hook machinery; `MinionRegistry` is the default,
//! in-memory implementation.
//!
//! [`config_for`]: MinionRegistry::config_for

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::Result;
use crate::minion::{HookTiming, ResolvedConfig};
use crate::registry::entity_registry::EntityRef;

/// Installs an instrumentation hook on a resolved target entity.
///
/// This core only selects *when* the hook runs and *what configuration* it
/// can read; execution semantics belong to the implementor. Implementations
/// must accept any timing value, including unrecognized ones.
pub trait InstrumentationInstaller: Send + Sync {
    fn install(
        &self,
        target: &EntityRef,
        timing: &HookTiming,
        config: Arc<ResolvedConfig>,
    ) -> Result<()>;
}

/// One installed instrumentation hook bound to a target entity.
#[derive(Debug, Clone)]
pub struct InstalledMinion {
    pub target: EntityRef,
    pub timing: HookTiming,
    pub config: Arc<ResolvedConfig>,
}

/// Table of installed minions keyed by target entity name.
///
/// Reads are unsynchronized-concurrency safe after startup: the descriptors
/// are immutable and handed out behind `Arc`.
#[derive(Debug, Default)]
pub struct MinionRegistry {
    minions: RwLock<HashMap<String, InstalledMinion>>,
}

impl MinionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved configuration attached to a target, if any.
    ///
    /// Absent before registration; the dispatch layer treats absence as
    /// "this target is not instrumented".
    pub fn config_for(&self, target_name: &str) -> Option<Arc<ResolvedConfig>> {
        self.minions
            .read()
            .get(target_name)
            .map(|minion| Arc::clone(&minion.config))
    }

    /// Full installed descriptor for a target, if any.
    pub fn get(&self, target_name: &str) -> Option<InstalledMinion> {
        self.minions.read().get(target_name).cloned()
    }

    /// Names of all targets with an installed minion.
    pub fn installed_targets(&self) -> Vec<String> {
        self.minions.read().keys().cloned().collect()
    }

    /// Counters over the installed set.
    pub fn stats(&self) -> MinionStats {
        let minions = self.minions.read();
        let mut stats = MinionStats {
            total_minions: minions.len(),
            ..MinionStats::default()
        };

        for minion in minions.values() {
            if minion.config.uniqueness.is_enabled() {
                stats.unique_tracking += 1;
            }
            if minion.config.counter_cache_enabled {
                stats.counter_caching += 1;
            }
        }

        stats
    }
}

impl InstrumentationInstaller for MinionRegistry {
    fn install(
        &self,
        target: &EntityRef,
        timing: &HookTiming,
        config: Arc<ResolvedConfig>,
    ) -> Result<()> {
        let installed = InstalledMinion {
            target: Arc::clone(target),
            timing: timing.clone(),
            config,
        };

        let previous = self
            .minions
            .write()
            .insert(target.name.clone(), installed);

        if previous.is_some() {
            warn!(target = %target.name, "replacing previously installed minion");
        } else {
            debug!(target = %target.name, timing = %timing, "installed minion hook");
        }

        Ok(())
    }
}

/// Statistics about installed minions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinionStats {
    pub total_minions: usize,
    pub unique_tracking: usize,
    pub counter_caching: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minion::{resolve_actions, ConfigBuilder, ResolvedOptions};
    use crate::registry::entity_registry::EntityType;

    fn sample_config(name: &str) -> Arc<ResolvedConfig> {
        let config = ConfigBuilder::new()
            .name(name)
            .actions(resolve_actions(&[]))
            .options(ResolvedOptions::default())
            .build()
            .expect("complete builder");
        Arc::new(config)
    }

    #[test]
    fn config_absent_before_installation() {
        let registry = MinionRegistry::new();
        assert!(registry.config_for("PostsController").is_none());
    }

    #[test]
    fn install_makes_config_readable() {
        let registry = MinionRegistry::new();
        let target = Arc::new(EntityType::controller("PostsController"));

        registry
            .install(&target, &HookTiming::Before, sample_config("posts"))
            .unwrap();

        let config = registry.config_for("PostsController").expect("installed");
        assert_eq!(config.name, "posts");
        assert_eq!(registry.stats().total_minions, 1);
    }

    #[test]
    fn reinstall_replaces_not_duplicates() {
        let registry = MinionRegistry::new();
        let target = Arc::new(EntityType::controller("PostsController"));

        registry
            .install(&target, &HookTiming::Before, sample_config("posts"))
            .unwrap();
        registry
            .install(&target, &HookTiming::After, sample_config("posts_v2"))
            .unwrap();

        assert_eq!(registry.installed_targets().len(), 1);
        let installed = registry.get("PostsController").unwrap();
        assert_eq!(installed.timing, HookTiming::After);
        assert_eq!(installed.config.name, "posts_v2");
    }
}
