//! Repository data model shared by the config loader and the renderers.
//!
//! These records are read-only input. Default filling for source URLs happens
//! in [`crate::resolve`] on a separate value, never on the records themselves.

use serde::{Deserialize, Serialize};

/// One top-level package mount under the serving domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Repository {
    /// Path segment under the domain. Empty for a single module served at the root.
    pub prefix: String,
    /// Sub-packages, in display order.
    pub subs: Vec<Sub>,
    /// Listed first on the index page and styled as the primary package.
    pub main: bool,
    /// Left out of the index page, still rendered as its own page.
    pub hidden: bool,
    /// VCS kind, e.g. `git`.
    #[serde(rename = "type")]
    pub vcs: String,
    /// Canonical repository URL.
    pub url: String,
    #[serde(alias = "source", alias = "sourceURLs")]
    pub source_urls: SourceUrls,
    pub website: Website,
}

/// Source browsing URL templates advertised through `go-source`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceUrls {
    pub home: String,
    /// Directory template, `{/dir}` is substituted by the consumer.
    pub dir: String,
    /// File template with `{/dir}`, `{file}` and `{line}` placeholders.
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Website {
    /// Documentation landing page, overrides the docs host link.
    pub url: String,
}

/// A sub-package served from its parent repository.
///
/// Accepts the table form `{ name = "x", hidden = true }` or a bare string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SubDef")]
pub struct Sub {
    /// Path relative to the repository prefix, may contain slashes.
    pub name: String,
    pub hidden: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SubDef {
    Name(String),
    Full(SubTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SubTable {
    name: String,
    #[serde(default)]
    hidden: bool,
}

impl From<SubDef> for Sub {
    fn from(def: SubDef) -> Self {
        match def {
            SubDef::Name(name) => Sub {
                name,
                hidden: false,
            },
            SubDef::Full(SubTable { name, hidden }) => Sub { name, hidden },
        }
    }
}

impl Sub {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            hidden: false,
        }
    }

    pub fn hidden(name: &str) -> Self {
        Self {
            name: name.to_string(),
            hidden: true,
        }
    }
}

/// A visible sub-package, addressed by its position in [`Repository::subs`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubLink {
    pub index: usize,
    /// Package path relative to the domain, without a leading slash.
    pub path: String,
}

/// Join a repository prefix and a relative name into a package path.
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Full import path for a package: `domain` alone for the root package.
pub fn import_path(domain: &str, pkg: &str) -> String {
    if pkg.is_empty() {
        domain.to_string()
    } else {
        format!("{domain}/{pkg}")
    }
}

impl Repository {
    /// The prefix as it follows the domain in meta content: `""` or `"/prefix"`.
    pub fn prefix_path(&self) -> String {
        if self.prefix.is_empty() {
            String::new()
        } else {
            format!("/{}", self.prefix)
        }
    }

    /// Package path of the sub-package at `index`.
    pub fn sub_path(&self, index: usize) -> Option<String> {
        self.subs
            .get(index)
            .map(|sub| join_path(&self.prefix, &sub.name))
    }

    /// Non-hidden sub-packages in declaration order.
    pub fn visible_subs(&self) -> Vec<SubLink> {
        self.subs
            .iter()
            .enumerate()
            .filter(|(_, sub)| !sub.hidden)
            .map(|(index, sub)| SubLink {
                index,
                path: join_path(&self.prefix, &sub.name),
            })
            .collect()
    }

    /// Every package path this repository serves, hidden ones included.
    ///
    /// The repository's own path comes first, then each sub-package by position.
    pub fn package_paths(&self) -> Vec<String> {
        std::iter::once(self.prefix.clone())
            .chain(self.subs.iter().map(|sub| join_path(&self.prefix, &sub.name)))
            .collect()
    }
}
