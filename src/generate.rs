//! Static site generation.
//!
//! Writes the index page and one page per package path to the output
//! directory. Every package path of every repository gets a page, including
//! hidden repositories and hidden sub-packages: hiding only removes them from
//! listings, `go get` still has to resolve them.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Package listing
//! ├── pkg1/
//! │   ├── index.html             # go-import page for example.com/pkg1
//! │   └── subpkg1/
//! │       └── index.html         # example.com/pkg1/subpkg1
//! └── pkg2/
//!     └── ...
//! ```
//!
//! When a repository is mounted at the domain root (empty prefix), its package
//! page takes the place of the listing at `index.html`, since the go tool
//! fetches `https://{domain}/?go-get=1` for the root module.
//!
//! ## Parallel Rendering
//!
//! Pages are independent, so they are rendered and written in parallel using
//! [rayon](https://docs.rs/rayon).

use crate::config::SiteConfig;
use crate::render::{RenderError, Stylesheet, write_index, write_package};
use crate::types::Repository;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What a generated page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageKind {
    /// The package listing.
    Index,
    /// The page for one package path.
    Package { path: String, hidden: bool },
}

/// One page written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub kind: PageKind,
    /// File path relative to the output directory.
    pub file: PathBuf,
}

#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
}

impl GenerateReport {
    pub fn package_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p.kind, PageKind::Package { .. }))
            .count()
    }
}

enum PageJob<'a> {
    Index,
    Package {
        repo: &'a Repository,
        path: String,
        hidden: bool,
    },
}

impl PageJob<'_> {
    fn file(&self) -> PathBuf {
        match self {
            PageJob::Index => page_file(""),
            PageJob::Package { path, .. } => page_file(path),
        }
    }

    fn into_kind(self) -> PageKind {
        match self {
            PageJob::Index => PageKind::Index,
            PageJob::Package { path, hidden, .. } => PageKind::Package { path, hidden },
        }
    }
}

/// Output file for a package path: `{path}/index.html`, or `index.html` at the root.
pub fn page_file(path: &str) -> PathBuf {
    if path.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(path).join("index.html")
    }
}

/// Every page the site consists of, listing first.
fn plan_pages(config: &SiteConfig) -> Vec<PageJob<'_>> {
    let mut jobs = Vec::new();

    if config.root_repository().is_none() {
        jobs.push(PageJob::Index);
    }

    for repo in &config.repositories {
        let subs = repo
            .subs
            .iter()
            .enumerate()
            .filter_map(|(index, sub)| repo.sub_path(index).map(|path| (path, sub.hidden)));

        for (path, sub_hidden) in std::iter::once((repo.prefix.clone(), false)).chain(subs) {
            jobs.push(PageJob::Package {
                repo,
                path,
                hidden: repo.hidden || sub_hidden,
            });
        }
    }

    jobs
}

/// Render the whole site into `output_dir`.
pub fn generate(
    config: &SiteConfig,
    stylesheet: &Stylesheet,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let pages = plan_pages(config)
        .into_par_iter()
        .map(|job| write_page(config, stylesheet, output_dir, job))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GenerateReport { pages })
}

fn write_page(
    config: &SiteConfig,
    stylesheet: &Stylesheet,
    output_dir: &Path,
    job: PageJob<'_>,
) -> Result<GeneratedPage, GenerateError> {
    let mut html = Vec::new();
    match &job {
        PageJob::Index => {
            write_index(&mut html, &config.domain, &config.repositories, stylesheet)?
        }
        PageJob::Package { repo, path, .. } => write_package(
            &mut html,
            &config.domain,
            &config.docs_domain,
            path,
            repo,
            stylesheet,
        )?,
    }

    let file = job.file();
    let target = output_dir.join(&file);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, html)?;

    Ok(GeneratedPage {
        kind: job.into_kind(),
        file,
    })
}
