use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, scope::validate_scope};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "supakit.toml";
/// Where table modules are generated, relative to the package root.
pub const DEFAULT_OUTPUT: &str = "src/lib/api";
/// Module exporting `Tables`, `TablesInsert` and `TablesUpdate`, relative to a table folder.
pub const DEFAULT_TYPES_MODULE: &str = "../../../types";
/// Module exporting the configured `supabase` client, relative to a table folder.
pub const DEFAULT_CLIENT_MODULE: &str = "../../../client";

/// Root of `supakit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub stripe: StripeConfig,
}

/// `[project]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// npm scope of the workspace packages (`@scope/supabase-core`).
    pub scope: Option<String>,
}

/// `[generate]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    pub types: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub schema: Option<String>,
    pub types_module: Option<String>,
    pub client_module: Option<String>,
}

/// `[stripe]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StripeConfig {
    pub target: Option<PathBuf>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse configuration text, naming `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        if let Some(scope) = &config.project.scope {
            validate_scope(scope)?;
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// With `required`, a missing file is an error instead.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self> {
        let path = path.as_ref();
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Output directory for generated table modules.
    pub fn output(&self) -> PathBuf {
        self.generate
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn types_module(&self) -> &str {
        self.generate
            .types_module
            .as_deref()
            .unwrap_or(DEFAULT_TYPES_MODULE)
    }

    pub fn client_module(&self) -> &str {
        self.generate
            .client_module
            .as_deref()
            .unwrap_or(DEFAULT_CLIENT_MODULE)
    }
}
