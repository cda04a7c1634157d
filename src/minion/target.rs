//! # Target Lookup
//!
//! Derives the controller entity a minion attaches to and resolves it
//! through the entity registry. Absence is a normal, expected outcome
//! (partial configuration, test setup), not an error; the registrar decides
//! how to report it.

use std::sync::Arc;

use tracing::debug;

use crate::constants::CONTROLLER_SUFFIX;
use crate::registry::{EntityRef, EntityRegistry};
use crate::utils::inflect;

#[derive(Debug, Clone)]
pub struct TargetLookup {
    entities: Arc<EntityRegistry>,
}

impl TargetLookup {
    pub fn new(entities: Arc<EntityRegistry>) -> Self {
        Self { entities }
    }

    /// Conventional controller class name for a minion name:
    /// `posts` becomes `PostsController`.
    pub fn candidate(name: &str) -> String {
        inflect::classify(&format!("{name}{CONTROLLER_SUFFIX}"))
    }

    /// Resolve the target controller entity, if the host registered it.
    pub fn resolve(&self, name: &str) -> Option<EntityRef> {
        let candidate = Self::candidate(name);
        let found = self.entities.lookup(&candidate);
        if found.is_none() {
            debug!(minion = %name, candidate = %candidate, "target controller not registered");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EntityType;

    #[test]
    fn candidate_keeps_the_plural_prefix() {
        assert_eq!(TargetLookup::candidate("posts"), "PostsController");
        assert_eq!(TargetLookup::candidate("blog_posts"), "BlogPostsController");
    }

    #[test]
    fn resolves_registered_controllers() {
        let registry = EntityRegistry::new();
        registry.register(EntityType::controller("PostsController"));
        let lookup = TargetLookup::new(Arc::new(registry));

        assert!(lookup.resolve("posts").is_some());
        assert!(lookup.resolve("widgets").is_none());
    }
}
