//! # Entity Registry
//!
//! Explicit name-to-entity table standing in for Ruby's `safe_constantize`.
//!
//! ## Overview
//!
//! The Rails engine resolves class names dynamically and swallows misses.
//! Here the host application registers its controller, model, and cache
//! entities once at startup, and `lookup` is a total function: an unknown
//! name returns `None`, never an error. Absence is a normal outcome during
//! partial configuration or test setup.
//!
//! ## Usage
//!
//! ```
//! use impressionist_core::registry::{EntityRegistry, EntityType};
//!
//! let registry = EntityRegistry::new();
//! registry.register(EntityType::controller("PostsController"));
//! registry.register(EntityType::model("Post"));
//!
//! assert!(registry.lookup("Post").is_some());
//! assert!(registry.lookup("Widget").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_CACHE_CLASS;

/// What role a registered entity plays on the Rails side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Controller,
    Model,
    Cache,
}

/// A named entity type known to the host application.
///
/// Names are the conventional Ruby class names (`PostsController`,
/// `Article`, `Impressionist::ImpressionsCache`) so both sides of the
/// engine agree on identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub name: String,
    pub kind: EntityKind,
}

impl EntityType {
    pub fn controller(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Controller,
        }
    }

    pub fn model(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Model,
        }
    }

    pub fn cache(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Cache,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Shared reference to a registered entity type.
pub type EntityRef = Arc<EntityType>;

/// Name-keyed table of the entities the host application exposes.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: RwLock<HashMap<String, EntityRef>>,
}

impl EntityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in impressions cache pre-registered.
    pub fn with_default_cache() -> Self {
        let registry = Self::new();
        registry.register(EntityType::cache(DEFAULT_CACHE_CLASS));
        registry
    }

    /// Register an entity under its name, returning the shared reference.
    pub fn register(&self, entity: EntityType) -> EntityRef {
        let entity = Arc::new(entity);
        debug!(entity = %entity.name, kind = ?entity.kind, "registered entity");
        self.entities
            .write()
            .insert(entity.name.clone(), Arc::clone(&entity));
        entity
    }

    /// Register a batch of entities (startup convenience).
    pub fn register_all(&self, entities: impl IntoIterator<Item = EntityType>) {
        for entity in entities {
            self.register(entity);
        }
    }

    /// Total lookup: unknown names resolve to `None`, never an error.
    pub fn lookup(&self, name: &str) -> Option<EntityRef> {
        self.entities.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }
}
