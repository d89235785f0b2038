//! # Go Vanity
//!
//! A static site generator for Go vanity import paths. Given a domain and a
//! declarative list of repositories, it writes the HTML pages the go tool and
//! documentation hosts read to map `example.com/pkg` onto a version control
//! repository.
//!
//! # Architecture
//!
//! ```text
//! vanity.toml  →  SiteConfig  →  resolve  →  render  →  dist/
//!                 (config)       (URLs)      (maud)     (generate)
//! ```
//!
//! Everything between loading the config and writing files is pure: the same
//! repository description always renders to the same bytes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Repository data model and package path construction |
//! | [`resolve`] | Home URL, VCS type and `go-source` template resolution with host defaults |
//! | [`render`] | Index and package pages rendered with Maud |
//! | [`config`] | `vanity.toml` / JSON loading and validation |
//! | [`generate`] | Writes every page of the site to disk, in parallel |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Resolution Never Mutates
//!
//! Host defaults (GitHub, GitLab) and the `_` sentinel are applied to a new
//! [`resolve::ResolvedUrls`] value. The repository records stay exactly as
//! loaded, so rendering one package cannot leak defaults into another.
//!
//! ## Hidden Means Unlisted
//!
//! A hidden repository or sub-package is left out of the index page and of
//! sibling lists, but its own page is still generated: `go get` must keep
//! resolving it.
//!
//! ## Positional Sub-package Paths
//!
//! Sub-package paths are built from their position in the repository's `subs`
//! list, never looked up by name, so `subpkg2` and `subpkg2/subsubpkg1` can
//! coexist.

pub mod config;
pub mod generate;
pub mod output;
pub mod render;
pub mod resolve;
pub mod types;
