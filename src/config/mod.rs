//! # Declarative Registration Manifests
//!
//! YAML manifests that declare minion registrations for application
//! startup, mirroring the Ruby side's configuration approach.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use impressionist_core::config::ImpressionistManifest;
//! use impressionist_core::minion::MinionRegistrar;
//! use impressionist_core::registry::{EntityRegistry, EntityType, MinionRegistry};
//!
//! let manifest = ImpressionistManifest::from_yaml(r#"
//! minions:
//!   - name: posts
//!     actions: [index, show]
//!     unique: true
//! "#).unwrap();
//!
//! let entities = Arc::new(EntityRegistry::with_default_cache());
//! entities.register(EntityType::controller("PostsController"));
//! let registrar = MinionRegistrar::new(entities, Arc::new(MinionRegistry::new()));
//!
//! let report = manifest.apply(&registrar);
//! assert_eq!(report.registered, vec!["posts".to_string()]);
//! ```

pub mod loader;

pub use loader::ManifestLoader;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ImpressionistError, Result};
use crate::minion::{MinionRegistrar, RegistrationRequest};

/// A declarative list of minion registrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpressionistManifest {
    #[serde(default)]
    pub minions: Vec<RegistrationRequest>,
}

/// Outcome of applying a manifest: which minions registered and which were
/// skipped (unresolvable targets are non-fatal to the sequence).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    pub registered: Vec<String>,
    pub skipped: Vec<String>,
}

impl ImpressionistManifest {
    /// Parse a manifest from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ImpressionistError::configuration("manifest", e.to_string()))
    }

    /// Register every declared minion, skipping (and logging) the ones whose
    /// targets cannot be resolved.
    pub fn apply(&self, registrar: &MinionRegistrar) -> ApplyReport {
        let mut report = ApplyReport::default();

        for request in &self.minions {
            let name = request.name.clone();
            match registrar.register(request.clone()) {
                Ok(_) => report.registered.push(name),
                Err(error) => {
                    warn!(minion = %name, %error, "manifest entry skipped");
                    report.skipped.push(name);
                }
            }
        }

        report
    }
}
