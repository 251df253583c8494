//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/moltron/moltron.toml`
//! 3. Local config: `<dir>/.moltron.toml` (usually the working directory)
//! 4. Environment variables: `MOLTRON_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, Aesthetic, Toolchain};

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub runtime: Option<String>,
    pub runner: Option<String>,
    pub package_manager: Option<String>,
    pub app_name: Option<String>,
    pub default_aesthetic: Option<String>,
}

/// Unified configuration for moltron.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// JavaScript runtime queried for its version (default: node)
    pub runtime: String,
    /// Package runner for generators (default: npx)
    pub runner: String,
    /// Package manager for installs (default: npm)
    pub package_manager: String,
    /// Directory name the generator creates inside the project (default: my-app)
    pub app_name: String,
    /// Aesthetic used when `--aesthetic` is not given (default: cyber-neon)
    pub default_aesthetic: String,
}

impl Default for Settings {
    fn default() -> Self {
        let toolchain = Toolchain::default();
        Self {
            runtime: toolchain.runtime,
            runner: toolchain.runner,
            package_manager: toolchain.package_manager,
            app_name: toolchain.app_name,
            default_aesthetic: Aesthetic::default().id().to_string(),
        }
    }
}

/// Get the XDG config directory for moltron.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "moltron").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("moltron.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".moltron.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Executables and names for the scaffolding plan.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            runtime: self.runtime.clone(),
            runner: self.runner.clone(),
            package_manager: self.package_manager.clone(),
            app_name: self.app_name.clone(),
        }
    }

    /// Expand `~`, `$VAR` and `${VAR}` in executable fields.
    fn expand_paths(&mut self) {
        self.runtime = expand_env_vars(&self.runtime);
        self.runner = expand_env_vars(&self.runner);
        self.package_manager = expand_env_vars(&self.package_manager);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            runtime: overlay.runtime.clone().unwrap_or_else(|| self.runtime.clone()),
            runner: overlay.runner.clone().unwrap_or_else(|| self.runner.clone()),
            package_manager: overlay
                .package_manager
                .clone()
                .unwrap_or_else(|| self.package_manager.clone()),
            app_name: overlay
                .app_name
                .clone()
                .unwrap_or_else(|| self.app_name.clone()),
            default_aesthetic: overlay
                .default_aesthetic
                .clone()
                .unwrap_or_else(|| self.default_aesthetic.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.moltron.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        current.validate()?;

        Ok(current)
    }

    /// Apply MOLTRON_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOLTRON")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("runtime") {
            settings.runtime = val;
        }
        if let Ok(val) = config.get_string("runner") {
            settings.runner = val;
        }
        if let Ok(val) = config.get_string("package_manager") {
            settings.package_manager = val;
        }
        if let Ok(val) = config.get_string("app_name") {
            settings.app_name = val;
        }
        if let Ok(val) = config.get_string("default_aesthetic") {
            settings.default_aesthetic = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        let required = [
            ("runtime", &self.runtime),
            ("runner", &self.runner),
            ("package_manager", &self.package_manager),
            ("app_name", &self.app_name),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ApplicationError::Config {
                    message: format!("{} must not be empty", key),
                });
            }
        }
        Ok(())
    }

    /// Render as TOML (used by `moltron config`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
