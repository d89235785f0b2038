//! URL resolution for package pages.
//!
//! Turns a partially specified [`Repository`] into the complete set of URLs a
//! package page advertises. Rules are applied in order, first match wins per
//! field:
//!
//! 1. **Home URL**: `website.url` if set, otherwise
//!    `https://{docs_domain}/{domain}/{pkg}` (docs host defaults to
//!    [`DEFAULT_DOCS_DOMAIN`]).
//! 2. **Host defaults**: repositories on GitHub or GitLab get `git` as their
//!    type and the hosts' well-known tree/blob URL shapes.
//! 3. **Sentinel**: source templates still unset become [`NO_SOURCE`], which
//!    `go-source` consumers read as "no source browsing".
//!
//! Resolution is total and never fails. The input repository is left as is;
//! the resolved values are returned as a new [`ResolvedUrls`].

use crate::types::{Repository, SourceUrls};

/// Documentation host used when none is configured.
pub const DEFAULT_DOCS_DOMAIN: &str = "pkg.go.dev";

/// Placeholder for an unavailable `go-source` template.
pub const NO_SOURCE: &str = "_";

const DEFAULT_VCS: &str = "git";

/// URL prefixes whose browse URLs follow the `tree/master` + `blob/master` layout.
const KNOWN_HOSTS: [&str; 2] = ["https://github.com", "https://gitlab.com"];

/// Fully populated URLs for one package page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedUrls {
    /// Human documentation landing page.
    pub home: String,
    /// VCS kind for `go-import`. May stay empty for unknown hosts.
    pub vcs: String,
    /// Source templates for `go-source`, never empty.
    pub source: SourceUrls,
}

/// Resolve the URLs advertised for package `pkg` of `repo` served under `domain`.
pub fn resolve(repo: &Repository, domain: &str, docs_domain: &str, pkg: &str) -> ResolvedUrls {
    let home = home_url(repo, domain, docs_domain, pkg);

    let mut vcs = repo.vcs.clone();
    let mut source = repo.source_urls.clone();

    if is_known_host(&repo.url) {
        fill_if_empty(&mut vcs, || DEFAULT_VCS.to_string());
        fill_if_empty(&mut source.home, || repo.url.clone());
        fill_if_empty(&mut source.dir, || format!("{}/tree/master{{/dir}}", repo.url));
        fill_if_empty(&mut source.file, || {
            format!("{}/blob/master{{/dir}}/{{file}}#L{{line}}", repo.url)
        });
    }

    for template in [&mut source.home, &mut source.dir, &mut source.file] {
        fill_if_empty(template, || NO_SOURCE.to_string());
    }

    ResolvedUrls { home, vcs, source }
}

fn home_url(repo: &Repository, domain: &str, docs_domain: &str, pkg: &str) -> String {
    if !repo.website.url.is_empty() {
        return repo.website.url.clone();
    }
    let docs_domain = if docs_domain.is_empty() {
        DEFAULT_DOCS_DOMAIN
    } else {
        docs_domain
    };
    format!("https://{docs_domain}/{domain}/{pkg}")
}

/// Literal prefix match, so `https://github.com/...` and `https://gitlab.com/...` qualify.
fn is_known_host(url: &str) -> bool {
    KNOWN_HOSTS.iter().any(|host| url.starts_with(host))
}

fn fill_if_empty(value: &mut String, default: impl FnOnce() -> String) {
    if value.is_empty() {
        *value = default();
    }
}
