//! # Minion Registrar
//!
//! The registration entry point: drives the resolution pipeline and
//! installs the resulting configuration on the resolved target.
//!
//! ## Overview
//!
//! One registrar instance serves every registration, typically sequentially
//! during application startup. It holds only immutable collaborators; each
//! call consumes its [`RegistrationRequest`] by value, so no transient
//! state exists to reset between calls and nothing can leak from one
//! registration into the next.
//!
//! An unresolvable target is reported as an error and logged, but it is
//! non-fatal: the registrar remains fully usable for subsequent calls.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use impressionist_core::minion::{MinionRegistrar, RegistrationRequest};
//! use impressionist_core::registry::{EntityRegistry, EntityType, MinionRegistry};
//!
//! let entities = Arc::new(EntityRegistry::with_default_cache());
//! entities.register(EntityType::controller("PostsController"));
//! entities.register(EntityType::model("Post"));
//!
//! let installer = Arc::new(MinionRegistry::new());
//! let registrar = MinionRegistrar::new(entities, installer.clone());
//!
//! let config = registrar.register(RegistrationRequest::new("posts")).unwrap();
//! assert_eq!(config.actions.len(), 7);
//! assert!(installer.config_for("PostsController").is_some());
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{ImpressionistError, Result};
use crate::registry::{EntityRegistry, InstrumentationInstaller};

use super::actions::resolve_actions;
use super::builder::ConfigBuilder;
use super::options::OptionsResolver;
use super::target::TargetLookup;
use super::types::{ActionId, MinionOptions, RegistrationRequest, ResolvedConfig};

pub struct MinionRegistrar {
    installer: Arc<dyn InstrumentationInstaller>,
    options_resolver: OptionsResolver,
    target_lookup: TargetLookup,
}

impl MinionRegistrar {
    pub fn new(
        entities: Arc<EntityRegistry>,
        installer: Arc<dyn InstrumentationInstaller>,
    ) -> Self {
        Self {
            installer,
            options_resolver: OptionsResolver::new(Arc::clone(&entities)),
            target_lookup: TargetLookup::new(entities),
        }
    }

    /// Resolve one registration request and install the hook on its target.
    ///
    /// Produces exactly one [`ResolvedConfig`] per call. Fails with
    /// [`ImpressionistError::UnresolvableTarget`] when the named controller
    /// is not registered; the failure is local to this call.
    pub fn register(&self, request: RegistrationRequest) -> Result<Arc<ResolvedConfig>> {
        let RegistrationRequest {
            name,
            actions,
            options,
        } = request;

        debug!(minion = %name, raw_actions = actions.len(), "resolving registration request");

        let actions = resolve_actions(&actions);
        let resolved = self.options_resolver.resolve(&options, &name);

        let Some(target) = self.target_lookup.resolve(&name) else {
            let candidate = TargetLookup::candidate(&name);
            warn!(
                minion = %name,
                candidate = %candidate,
                "target controller not found; minion skipped"
            );
            return Err(ImpressionistError::unresolvable_target(name, candidate));
        };

        let hook_timing = resolved.hook_timing.clone();
        let config = Arc::new(
            ConfigBuilder::new()
                .name(name)
                .actions(actions)
                .options(resolved)
                .build()?,
        );

        self.installer
            .install(&target, &hook_timing, Arc::clone(&config))?;

        info!(
            minion = %config.name,
            target = %target.name,
            timing = %config.hook_timing,
            actions = config.actions.len(),
            "minion registered"
        );

        Ok(config)
    }

    /// Convenience mirror of the Rails `impressionist` entry point:
    /// `register("posts", [:index, :show], options)`.
    pub fn register_with(
        &self,
        name: impl Into<String>,
        actions: &[ActionId],
        options: MinionOptions,
    ) -> Result<Arc<ResolvedConfig>> {
        self.register(
            RegistrationRequest::new(name)
                .with_actions(actions.iter().cloned())
                .with_options(options),
        )
    }
}
