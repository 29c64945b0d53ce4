//! Configuration handling for doc-init.
//! Loads the YAML outline and the plain-text imports templates that are
//! prepended to every generated document.
//!
//! The structs here mirror the document as written. Required keys are kept
//! optional so that the validator can report every missing field at once
//! instead of failing on the first one.

use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root of the YAML configuration document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Top-level folder created under the base documentation path.
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub sections: Vec<RawContainer>,
    /// Extra imports, resolved against the directory of the config file.
    #[serde(default)]
    pub custom_imports_file: Option<PathBuf>,
}

/// A section or subsection as written in the document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawContainer {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub create_assets: bool,
    #[serde(default)]
    pub collapsible: Option<bool>,
    #[serde(default)]
    pub collapsed: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub files: Vec<RawFile>,
    #[serde(default)]
    pub subsections: Vec<RawContainer>,
}

/// A content document as written in the document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub create_assets: bool,
    #[serde(default)]
    pub initial_content: Option<String>,
}

impl Config {
    /// Parses a YAML document. `origin` is only used in the error message.
    pub fn from_yaml<P: AsRef<Path>>(content: &str, origin: P) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::MalformedConfig {
            path: origin.as_ref().to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Reads the configuration document and the imports templates it refers to.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    pub fn new<P: Into<PathBuf>>(config_path: P) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads and parses the YAML configuration.
    ///
    /// # Errors
    /// * `Error::ConfigNotFound` if the file does not exist
    /// * `Error::MalformedConfig` if the YAML cannot be parsed
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.is_file() {
            return Err(Error::ConfigNotFound {
                path: self.config_path.clone(),
            });
        }
        debug!("Loading configuration from {}", self.config_path.display());
        let content = fs::read_to_string(&self.config_path).map_err(Error::IoError)?;
        Config::from_yaml(&content, &self.config_path)
    }

    /// Reads the global imports template, trimmed.
    ///
    /// A missing or unreadable template is not fatal: a warning is logged
    /// and the documents are generated without imports.
    pub fn load_imports_template<P: AsRef<Path>>(&self, imports_path: P) -> String {
        let imports_path = imports_path.as_ref();
        if !imports_path.exists() {
            warn!("Imports file not found: {}", imports_path.display());
            return String::new();
        }
        read_trimmed(imports_path, "imports")
    }

    /// Reads `custom_imports_file`, if the configuration declares one.
    ///
    /// The path is resolved against the directory of the configuration file,
    /// not the working directory. Missing files degrade to an empty string.
    pub fn load_custom_imports(&self, config: &Config) -> String {
        let Some(custom) = &config.custom_imports_file else {
            return String::new();
        };
        let custom_imports_path = self.resolve_relative(custom);
        if !custom_imports_path.exists() {
            warn!(
                "Custom imports file not found: {}",
                custom_imports_path.display()
            );
            return String::new();
        }
        read_trimmed(&custom_imports_path, "custom imports")
    }

    /// Joins `path` onto the directory holding the configuration file.
    pub fn resolve_relative(&self, path: &Path) -> PathBuf {
        match self.config_path.parent() {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }
}

fn read_trimmed(path: &Path, what: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Loaded {} from {}", what, path.display());
            content.trim().to_string()
        }
        Err(e) => {
            warn!("Could not read {} file {}: {}", what, path.display(), e);
            String::new()
        }
    }
}
