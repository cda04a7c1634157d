#![allow(clippy::doc_markdown)] // Allow technical terms like YAML, RESTful in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Impressionist Core Rust
//!
//! Rust implementation of the declarative registration core of the
//! Impressionist impression-tracking engine.
//!
//! ## Overview
//!
//! Impressionist Core Rust is designed to complement the Ruby on Rails
//! **Impressionist** engine: the Rails side owns hook execution, event
//! persistence, and counter updates, while this core owns the resolution
//! algorithm — turning a sparse registration request (a target name, a
//! shorthand action list, an options bag) into a complete, internally
//! consistent configuration — and the registration protocol that installs
//! exactly one instrumentation hook per target.
//!
//! ## Architecture
//!
//! Where the Rails engine constantizes strings and defines singleton
//! methods on live classes, this core uses explicit registries: a
//! name-to-entity table populated at startup, and a target-to-minion table
//! the dispatch layer queries at invocation time.
//!
//! ```text
//! RegistrationRequest
//!     -> minion resolution pipeline (actions, options, target, assembly)
//!     -> ResolvedConfig
//!     -> InstrumentationInstaller (MinionRegistry by default)
//! ```
//!
//! ## Module Organization
//!
//! - [`minion`] - Resolution pipeline and the registration entry point
//! - [`registry`] - Entity name registry and installed-minion registry
//! - [`config`] - Declarative YAML registration manifests
//! - [`constants`] - Default action set and well-known names
//! - [`error`] - Structured error handling
//! - [`logging`] - Environment-aware structured logging
//! - [`utils`] - Rails-style name inflection
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use impressionist_core::minion::{ActionId, MinionRegistrar, RegistrationRequest};
//! use impressionist_core::registry::{EntityRegistry, EntityType, MinionRegistry};
//!
//! // Startup: the host application declares its entities once.
//! let entities = Arc::new(EntityRegistry::with_default_cache());
//! entities.register(EntityType::controller("PostsController"));
//! entities.register(EntityType::model("Post"));
//!
//! let minions = Arc::new(MinionRegistry::new());
//! let registrar = MinionRegistrar::new(entities, minions.clone());
//!
//! // Register a minion: track index and show on PostsController.
//! let request = RegistrationRequest::new("posts")
//!     .with_actions([ActionId::from("index"), ActionId::from("show")]);
//! let config = registrar.register(request).unwrap();
//!
//! // The dispatch layer reads the attached configuration at invocation time.
//! let attached = minions.config_for("PostsController").unwrap();
//! assert!(attached.tracks_action(&ActionId::from("show")));
//! assert_eq!(config.counter_column, "impressions_total");
//! ```
//!
//! ## Concurrency
//!
//! Registration is a synchronous, in-memory computation expected to run
//! single-threaded at startup, one call at a time. After installation a
//! `ResolvedConfig` is immutable and safe for unsynchronized concurrent
//! reads by any number of consumers.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod minion;
pub mod registry;
pub mod utils;

pub use config::{ApplyReport, ImpressionistManifest, ManifestLoader};
pub use constants::{ALL_ACTIONS, DEFAULT_ACTIONS, DEFAULT_CACHE_CLASS, DEFAULT_COLUMN_NAME};
pub use error::{ImpressionistError, Result};
pub use minion::{
    ActionId, ActionSet, HookTiming, MinionOptions, MinionRegistrar, RegistrationRequest,
    ResolvedConfig, UniqueSetting, Uniqueness,
};
pub use registry::{
    EntityKind, EntityRef, EntityRegistry, EntityType, InstalledMinion, InstrumentationInstaller,
    MinionRegistry, MinionStats,
};
