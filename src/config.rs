//! Site configuration module.
//!
//! Handles loading and validating the vanity site description: the serving
//! domain, the documentation host, and the repositories mounted under the
//! domain.
//!
//! ## Config File
//!
//! TOML is the primary format (`vanity.toml`). A file ending in `.json` is read
//! as JSON and accepts the camelCase keys (`docsDomain`, `source`) used by the
//! older JSON layout.
//!
//! ```toml
//! domain = "example.com"
//! docs_domain = "pkg.go.dev"   # Optional, defaults to pkg.go.dev
//! stylesheet = "site.css"      # Optional, replaces the built-in CSS
//!
//! [[repositories]]
//! prefix = "pkg1"
//! main = true
//! url = "https://github.com/example/go-pkg1"
//! subs = ["subpkg1", { name = "internal/tool", hidden = true }]
//!
//! [[repositories]]
//! prefix = "pkg2"
//! type = "git"
//! url = "https://code.example.com/go-pkg2"
//!
//! [repositories.source_urls]
//! home = "https://code.example.com/go-pkg2"
//! dir = "https://code.example.com/go-pkg2/browse{/dir}"
//! file = "https://code.example.com/go-pkg2/browse{/dir}/{file}#{line}"
//!
//! [repositories.website]
//! url = "https://www.example.com/pkg2"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::Repository;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `vanity.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Serving domain, e.g. `example.com`. Required.
    pub domain: String,
    /// Documentation host for package home links. Empty means `pkg.go.dev`.
    #[serde(alias = "docsDomain")]
    pub docs_domain: String,
    /// Optional stylesheet replacing the built-in CSS, relative to the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,
    /// Mounted repositories, in listing order.
    pub repositories: Vec<Repository>,
}

impl SiteConfig {
    /// Validate the repository set.
    ///
    /// The renderers accept any input; these checks catch configs that would
    /// produce colliding or malformed package paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.is_empty() {
            return Err(ConfigError::Validation("domain must not be empty".into()));
        }
        if self.domain.contains("://") || self.domain.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "domain must be a bare host name, got '{}'",
                self.domain
            )));
        }

        let root_mounts = self
            .repositories
            .iter()
            .filter(|r| r.prefix.is_empty())
            .count();
        if root_mounts > 1 {
            return Err(ConfigError::Validation(
                "only one repository may have an empty prefix".into(),
            ));
        }

        let mut seen = HashSet::new();
        for repo in &self.repositories {
            if !repo.prefix.is_empty() && !is_clean_path(&repo.prefix) {
                return Err(ConfigError::Validation(format!(
                    "prefix '{}' must be '/'-separated names without empty, '.' or '..' segments",
                    repo.prefix
                )));
            }
            for sub in &repo.subs {
                if !is_clean_path(&sub.name) {
                    return Err(ConfigError::Validation(format!(
                        "sub-package '{}' of '{}' must be '/'-separated names without empty, '.' or '..' segments",
                        sub.name, repo.prefix
                    )));
                }
            }
            for path in repo.package_paths() {
                if !seen.insert(path.clone()) {
                    return Err(ConfigError::Validation(format!(
                        "package path '{path}' is declared more than once"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Find the repository serving package `pkg`.
    ///
    /// Matches the repository prefix itself or one of its sub-package paths.
    pub fn find_package(&self, pkg: &str) -> Option<&Repository> {
        self.repositories
            .iter()
            .find(|repo| repo.package_paths().iter().any(|path| path == pkg))
    }

    /// Repository mounted at the domain root, if any.
    pub fn root_repository(&self) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.prefix.is_empty())
    }
}

/// Package paths become output directories, so every segment must be a plain name.
fn is_clean_path(path: &str) -> bool {
    path.split('/')
        .all(|segment| !matches!(segment, "" | "." | ".."))
}

/// Parse config text, picking the format from the file extension.
pub fn parse_config(content: &str, path: &Path) -> Result<SiteConfig, ConfigError> {
    let is_json = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let config = if is_json {
        serde_json::from_str(content)?
    } else {
        toml::from_str(content)?
    };
    Ok(config)
}

/// Load and validate the config file at `path`.
///
/// A relative `stylesheet` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content, path)?;
    config.validate()?;

    if let Some(stylesheet) = config.stylesheet.take() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.stylesheet = Some(base.join(stylesheet));
    }
    Ok(config)
}

/// Returns a fully-commented stock `vanity.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Go Vanity Configuration
# ========================
# Describes the domain serving your Go packages and the repositories behind
# each import path. Unknown keys will cause an error.

# Domain the pages are served from (no scheme, no trailing slash).
domain = "example.com"

# Documentation host for each package's "Home" link.
# Leave empty to use pkg.go.dev.
docs_domain = ""

# Optional stylesheet replacing the built-in CSS, relative to this file.
# stylesheet = "site.css"

# ---------------------------------------------------------------------------
# Repositories
# ---------------------------------------------------------------------------
# Each repository is served at https://{domain}/{prefix}. A single repository
# may leave the prefix empty to be served from the domain root.
#
# GitHub and GitLab URLs get their type and source browsing templates filled
# in automatically. For other hosts, set [repositories.source_urls] or go-source
# will advertise no source browsing.
[[repositories]]
prefix = "pkg1"
# Listed first on the index page.
main = true
# Hide from the index page (the package page is still generated).
hidden = false
url = "https://github.com/example/go-pkg1"
# Sub-packages served from the same repository. Use a table to hide one:
#   { name = "internal/tool", hidden = true }
subs = ["subpkg1", "subpkg2"]

# [repositories.source_urls]
# home = "https://github.com/example/go-pkg1"
# dir = "https://github.com/example/go-pkg1/tree/master{/dir}"
# file = "https://github.com/example/go-pkg1/blob/master{/dir}/{file}#L{line}"

# [repositories.website]
# url = "https://www.example.com"
"##
}
