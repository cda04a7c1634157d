//! # Minion Resolution Pipeline
//!
//! Turns a sparse registration request into a complete, internally
//! consistent configuration and installs it on its target.
//!
//! ## Overview
//!
//! A minion is one registered instrumentation configuration bound to a
//! target controller. The pipeline runs leaf-first:
//!
//! ```text
//! RegistrationRequest
//!   ├── actions::resolve_actions   (shorthand list -> concrete action set)
//!   ├── OptionsResolver            (defaults for every optional setting)
//!   ├── TargetLookup               (name -> controller entity, may miss)
//!   └── ConfigBuilder              (assembly into ResolvedConfig)
//! MinionRegistrar                  (drives the pipeline, installs the hook)
//! ```
//!
//! Every stage is synchronous and in-memory; the only queries are read-only
//! lookups against the entity registry.

pub mod actions;
pub mod builder;
pub mod options;
pub mod registrar;
pub mod target;
pub mod types;

pub use actions::{default_actions, resolve_actions};
pub use builder::ConfigBuilder;
pub use options::{OptionsResolver, ResolvedOptions};
pub use registrar::MinionRegistrar;
pub use target::TargetLookup;
pub use types::{
    ActionId, ActionSet, HookTiming, MinionOptions, RegistrationRequest, ResolvedConfig,
    UniqueSetting, Uniqueness,
};
