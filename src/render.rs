//! HTML rendering for the index page and package pages.
//!
//! ## Generated Pages
//!
//! - **Index page**: every visible repository and its visible sub-packages,
//!   `main` repositories first.
//! - **Package pages**: the `go-import` and `go-source` meta tags plus a small
//!   human-facing panel (install snippets, docs and source links, sibling
//!   sub-packages).
//!
//! ## Meta Tag Format
//!
//! ```text
//! <meta name="go-import" content="{domain}{/prefix} {type} {url}">
//! <meta name="go-source" content="{domain}{/prefix} {home} {dir} {file}">
//! ```
//!
//! Both tags always point at the repository root, also on sub-package pages.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Output is compact and byte-stable: the same inputs always produce the same
//! bytes, which the golden files under `tests/testdata/` pin down.

use crate::resolve::resolve;
use crate::types::{Repository, SubLink, import_path};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("loading stylesheet {}: {source}", path.display())]
    Loading {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("generating page: {0}")]
    Generating(#[source] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// CSS inlined into every page.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    css: String,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            css: CSS_STATIC.to_string(),
        }
    }
}

impl Stylesheet {
    /// Load a user stylesheet replacing the built-in one.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let css = fs::read_to_string(path).map_err(|source| RenderError::Loading {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { css })
    }

    pub fn as_str(&self) -> &str {
        &self.css
    }
}

/// Render the package page for `pkg` to `w`.
pub fn write_package<W: Write>(
    w: &mut W,
    domain: &str,
    docs_domain: &str,
    pkg: &str,
    repo: &Repository,
    stylesheet: &Stylesheet,
) -> Result<(), RenderError> {
    let page = render_package(domain, docs_domain, pkg, repo, stylesheet);
    w.write_all(page.into_string().as_bytes())
        .map_err(RenderError::Generating)
}

/// Render the index page listing `repos` to `w`.
pub fn write_index<W: Write>(
    w: &mut W,
    domain: &str,
    repos: &[Repository],
    stylesheet: &Stylesheet,
) -> Result<(), RenderError> {
    let page = render_index(domain, repos, stylesheet);
    w.write_all(page.into_string().as_bytes())
        .map_err(RenderError::Generating)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, extra_head: Markup, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                (extra_head)
                style { (PreEscaped(css)) }
            }
            body {
                div.content {
                    (content)
                }
            }
        }
    }
}

/// Link to a package page, labelled with its full import path.
fn package_link(domain: &str, path: &str) -> Markup {
    html! {
        a href={ "/" (path) } { (import_path(domain, path)) }
    }
}

/// Visible sub-packages of `repo`, or `None` when there is nothing to list.
fn sibling_list(repo: &Repository) -> Option<Vec<SubLink>> {
    let links = repo.visible_subs();
    (!links.is_empty()).then_some(links)
}

fn sub_package_items(domain: &str, links: &[SubLink]) -> Markup {
    html! {
        @for link in links {
            li { (package_link(domain, &link.path)) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a package page with its `go-import` and `go-source` meta tags.
pub fn render_package(
    domain: &str,
    docs_domain: &str,
    pkg: &str,
    repo: &Repository,
    stylesheet: &Stylesheet,
) -> Markup {
    let urls = resolve(repo, domain, docs_domain, pkg);
    let import = import_path(domain, pkg);
    let root = format!("{domain}{}", repo.prefix_path());

    let go_import = format!("{root} {} {}", urls.vcs, repo.url);
    let go_source = format!(
        "{root} {} {} {}",
        urls.source.home, urls.source.dir, urls.source.file
    );

    let meta = html! {
        meta name="go-import" content=(go_import);
        meta name="go-source" content=(go_source);
    };

    let content = html! {
        h2 { (import) }
        code { "go get " (import) }
        code { "import \"" (import) "\"" }
        "Home: " a href=(urls.home) { (urls.home) } br;
        "Source: " a href=(repo.url) { (repo.url) } br;
        @if let Some(links) = sibling_list(repo) {
            "Sub-packages:"
            ul { (sub_package_items(domain, &links)) }
        }
        a href={ "http://" (domain) } class="back" { "Back" }
    };

    base_document(&import, meta, stylesheet.as_str(), content)
}

/// Renders the index page listing visible repositories, `main` ones first.
pub fn render_index(domain: &str, repos: &[Repository], stylesheet: &Stylesheet) -> Markup {
    let (primary, rest): (Vec<&Repository>, Vec<&Repository>) =
        repos.iter().filter(|r| !r.hidden).partition(|r| r.main);

    let content = html! {
        h2 { (domain) }
        ul {
            @for repo in primary.iter().chain(rest.iter()) {
                li class=[repo.main.then_some("main")] {
                    (package_link(domain, &repo.prefix))
                    @if let Some(links) = sibling_list(repo) {
                        ul { (sub_package_items(domain, &links)) }
                    }
                }
            }
        }
    };

    base_document(domain, html! {}, stylesheet.as_str(), content)
}

// ============================================================================
// Tests
// ============================================================================
