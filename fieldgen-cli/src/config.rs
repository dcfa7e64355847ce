//! Configuration for project layout
//!
//! Controls where generated files are written and which registry files are
//! updated. The defaults describe the conventional layout:
//!
//! ```toml
//! [flutter]
//! marker = "pubspec.yaml"
//! lib_dir = "lib"
//! models_dir = "models"
//! extension = "dart"
//!
//! [server]
//! marker = "Cargo.toml"
//! src_dir = "src"
//! lib_registry = "lib.rs"
//! dao_registry = "dao.rs"
//! models_file = "models.rs"
//! module_anchor = "pub mod"
//! reexport_anchor = "pub use"
//! ```
//!
//! # Usage
//!
//! ```rust
//! use fieldgen_cli::config::FieldgenConfig;
//! use std::path::Path;
//!
//! let config = FieldgenConfig::default();
//! let path = config.flutter.model_path(Path::new("/app"), "user_profile");
//! assert_eq!(path, Path::new("/app/lib/models/user_profile.dart"));
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Flutter client project layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlutterSettings {
    /// File that marks the project root
    pub marker: String,

    /// Dart library directory, relative to the root
    pub lib_dir: PathBuf,

    /// Model directory, relative to `lib_dir`
    pub models_dir: PathBuf,

    /// Extension of generated model files
    pub extension: String,
}

impl Default for FlutterSettings {
    fn default() -> Self {
        Self {
            marker: "pubspec.yaml".to_string(),
            lib_dir: PathBuf::from("lib"),
            models_dir: PathBuf::from("models"),
            extension: "dart".to_string(),
        }
    }
}

impl FlutterSettings {
    /// Path of the model file for `module` under `root`
    #[must_use]
    pub fn model_path(&self, root: &Path, module: &str) -> PathBuf {
        root.join(&self.lib_dir)
            .join(&self.models_dir)
            .join(format!("{module}.{}", self.extension))
    }
}

/// Rust server project layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// File that marks the project root
    pub marker: String,

    /// Source directory, relative to the root
    pub src_dir: PathBuf,

    /// Crate root that declares modules, relative to `src_dir`
    pub lib_registry: PathBuf,

    /// File that re-exports DAO types, relative to `src_dir`
    pub dao_registry: PathBuf,

    /// File that DDL-derived models are appended to, relative to `src_dir`
    pub models_file: PathBuf,

    /// New module declarations are inserted after the last line containing this
    pub module_anchor: String,

    /// New re-exports are inserted after the last line containing this
    pub reexport_anchor: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            marker: "Cargo.toml".to_string(),
            src_dir: PathBuf::from("src"),
            lib_registry: PathBuf::from("lib.rs"),
            dao_registry: PathBuf::from("dao.rs"),
            models_file: PathBuf::from("models.rs"),
            module_anchor: "pub mod".to_string(),
            reexport_anchor: "pub use".to_string(),
        }
    }
}

impl ServerSettings {
    /// Path of a new DAO module file under `root`
    #[must_use]
    pub fn dao_path(&self, root: &Path, dao_module: &str) -> PathBuf {
        root.join(&self.src_dir).join(format!("{dao_module}.rs"))
    }

    /// Path of the crate root registry
    #[must_use]
    pub fn lib_registry_path(&self, root: &Path) -> PathBuf {
        root.join(&self.src_dir).join(&self.lib_registry)
    }

    /// Path of the DAO re-export registry
    #[must_use]
    pub fn dao_registry_path(&self, root: &Path) -> PathBuf {
        root.join(&self.src_dir).join(&self.dao_registry)
    }

    /// Path of the models file
    #[must_use]
    pub fn models_path(&self, root: &Path) -> PathBuf {
        root.join(&self.src_dir).join(&self.models_file)
    }
}

/// Complete fieldgen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldgenConfig {
    /// Flutter client layout
    #[serde(default)]
    pub flutter: FlutterSettings,

    /// Rust server layout
    #[serde(default)]
    pub server: ServerSettings,
}

impl FieldgenConfig {
    /// Load configuration
    ///
    /// Sources, lowest precedence first:
    /// 1. Defaults
    /// 2. `~/.config/fieldgen/config.toml`
    /// 3. `./fieldgen.toml`
    /// 4. `explicit`, when given (must exist)
    /// 5. Environment variables (`FIELDGEN_*`, use `__` for nesting)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - `explicit` does not exist
    /// - A configuration file contains invalid TOML
    /// - A value has the wrong type
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment =
            Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            tracing::debug!(path = %user_config.display(), "loading user config");
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./fieldgen.toml");
        if local_config.exists() {
            tracing::debug!(path = %local_config.display(), "loading local config");
            figment = figment.merge(Toml::file(&local_config));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }

        // `__` separates sections so that `FIELDGEN_SERVER__SRC_DIR` maps to `server.src_dir`
        figment = figment.merge(Env::prefixed("FIELDGEN_").split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// User-level config file location
    ///
    /// Returns: `~/.config/fieldgen/config.toml` (platform equivalent)
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./fieldgen.toml"),
            |config_dir| config_dir.join("fieldgen").join("config.toml"),
        )
    }
}
