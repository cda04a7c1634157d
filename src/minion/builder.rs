//! # Config Assembly
//!
//! Pure assembly of a [`ResolvedConfig`] from the pipeline's resolved
//! parts. No lookups of its own; the only failure mode is a structurally
//! missing field, which the registrar pipeline never produces.

use chrono::Utc;

use crate::error::{ImpressionistError, Result};

use super::options::ResolvedOptions;
use super::types::{ActionSet, ResolvedConfig};

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    name: Option<String>,
    actions: Option<ActionSet>,
    options: Option<ResolvedOptions>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn actions(mut self, actions: ActionSet) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn options(mut self, options: ResolvedOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Assemble the immutable configuration record.
    pub fn build(self) -> Result<ResolvedConfig> {
        let name = self
            .name
            .ok_or(ImpressionistError::MissingField { field: "name" })?;
        let actions = self
            .actions
            .ok_or(ImpressionistError::MissingField { field: "actions" })?;
        let options = self
            .options
            .ok_or(ImpressionistError::MissingField { field: "options" })?;

        Ok(ResolvedConfig {
            name,
            actions,
            uniqueness: options.uniqueness,
            counter_cache_enabled: options.counter_cache_enabled,
            target_model: options.target_model,
            cache_target: options.cache_target,
            counter_column: options.counter_column,
            hook_timing: options.hook_timing,
            registered_at: Utc::now(),
        })
    }
}
