//! # Manifest Loader
//!
//! Environment-aware manifest discovery. Looks for
//! `impressionist.<environment>.yaml` first and falls back to
//! `impressionist.yaml`, with the environment detected from the same
//! variable chain the Rails engine consults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::ENVIRONMENT_VARS;
use crate::error::{ImpressionistError, Result};

use super::ImpressionistManifest;

const MANIFEST_BASENAME: &str = "impressionist";

pub struct ManifestLoader;

impl ManifestLoader {
    /// Load from the default `config/` directory with environment
    /// auto-detection.
    pub fn load() -> Result<ImpressionistManifest> {
        Self::load_from_directory(None)
    }

    /// Load from a specific directory (or the default) with environment
    /// auto-detection.
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> Result<ImpressionistManifest> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load with an explicit environment. Useful for tests that should not
    /// touch global environment variables.
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> Result<ImpressionistManifest> {
        let directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            environment = %environment,
            directory = %directory.display(),
            "loading registration manifest"
        );

        let path = Self::discover_manifest(&directory, environment).ok_or_else(|| {
            ImpressionistError::configuration(
                "loader",
                format!(
                    "no manifest found in '{}' for environment '{environment}'",
                    directory.display()
                ),
            )
        })?;

        let contents = fs::read_to_string(&path).map_err(|e| {
            ImpressionistError::configuration("loader", format!("{}: {e}", path.display()))
        })?;

        let manifest = ImpressionistManifest::from_yaml(&contents)?;
        debug!(
            manifest = %path.display(),
            minions = manifest.minions.len(),
            "registration manifest loaded"
        );
        Ok(manifest)
    }

    /// Environment from `IMPRESSIONIST_ENV`, `RAILS_ENV`, `RACK_ENV`, or
    /// `APP_ENV`, defaulting to `development`.
    pub fn detect_environment() -> String {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|var| env::var(var).ok())
            .unwrap_or_else(|| "development".to_string())
    }

    fn default_config_directory() -> PathBuf {
        PathBuf::from("config")
    }

    fn discover_manifest(directory: &Path, environment: &str) -> Option<PathBuf> {
        let candidates = [
            directory.join(format!("{MANIFEST_BASENAME}.{environment}.yaml")),
            directory.join(format!("{MANIFEST_BASENAME}.yaml")),
        ];
        candidates.into_iter().find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(dir: &Path, filename: &str, body: &str) {
        let mut file = fs::File::create(dir.join(filename)).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn environment_specific_manifest_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "impressionist.yaml", "minions:\n  - name: posts\n");
        write_manifest(
            dir.path(),
            "impressionist.test.yaml",
            "minions:\n  - name: widgets\n",
        );

        let manifest =
            ManifestLoader::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
                .unwrap();
        assert_eq!(manifest.minions[0].name, "widgets");
    }

    #[test]
    fn falls_back_to_the_base_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "impressionist.yaml", "minions:\n  - name: posts\n");

        let manifest = ManifestLoader::load_from_directory_with_env(
            Some(dir.path().to_path_buf()),
            "production",
        )
        .unwrap();
        assert_eq!(manifest.minions[0].name, "posts");
    }

    #[test]
    fn missing_manifest_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ManifestLoader::load_from_directory_with_env(
            Some(dir.path().to_path_buf()),
            "test",
        )
        .unwrap_err();
        assert!(matches!(err, ImpressionistError::Configuration { .. }));
    }
}
