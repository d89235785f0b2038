//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Packages
//! 001 example.com/pkg1 (main)
//!     Source: https://github.com/example/go-pkg1
//!     001 example.com/pkg1/subpkg1
//!     002 example.com/pkg1/internal (hidden)
//! 002 example.com/pkg2 (hidden)
//!     Source: https://code.example.com/go-pkg2
//! ```
//!
//! ## Generate
//!
//! ```text
//! Index → index.html
//! example.com/pkg1 → pkg1/index.html
//! example.com/pkg1/subpkg1 → pkg1/subpkg1/index.html
//!
//! Generated 2 package pages
//! ```

use crate::config::SiteConfig;
use crate::generate::{GenerateReport, PageKind};
use crate::types::import_path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn flags(main: bool, hidden: bool) -> String {
    let labels: Vec<&str> = [(main, "main"), (hidden, "hidden")]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect();
    if labels.is_empty() {
        String::new()
    } else {
        format!(" ({})", labels.join(", "))
    }
}

/// Format the package inventory shown by `check`.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Packages".to_string()];

    for (i, repo) in config.repositories.iter().enumerate() {
        lines.push(format!(
            "{} {}{}",
            format_index(i + 1),
            import_path(&config.domain, &repo.prefix),
            flags(repo.main, repo.hidden)
        ));
        if !repo.url.is_empty() {
            lines.push(format!("{}Source: {}", indent(1), repo.url));
        }
        for (j, sub) in repo.subs.iter().enumerate() {
            let path = repo.sub_path(j).unwrap_or_default();
            lines.push(format!(
                "{}{} {}{}",
                indent(1),
                format_index(j + 1),
                import_path(&config.domain, &path),
                flags(false, sub.hidden)
            ));
        }
    }

    lines
}

pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

/// Format the list of pages written by `generate`.
pub fn format_generate_output(domain: &str, report: &GenerateReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .map(|page| {
            let label = match &page.kind {
                PageKind::Index => "Index".to_string(),
                PageKind::Package { path, hidden } => {
                    format!("{}{}", import_path(domain, path), flags(false, *hidden))
                }
            };
            format!("{} → {}", label, page.file.display())
        })
        .collect();

    let count = report.package_count();
    lines.push(String::new());
    lines.push(format!(
        "Generated {} package {}",
        count,
        if count == 1 { "page" } else { "pages" }
    ));
    lines
}

pub fn print_generate_output(domain: &str, report: &GenerateReport) {
    for line in format_generate_output(domain, report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GeneratedPage;
    use crate::types::{Repository, Sub};
    use std::path::PathBuf;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn check_output_lists_repositories_and_subs() {
        let config = SiteConfig {
            domain: "example.com".to_string(),
            repositories: vec![
                Repository {
                    prefix: "pkg1".to_string(),
                    main: true,
                    url: "https://github.com/example/go-pkg1".to_string(),
                    subs: vec![Sub::new("subpkg1"), Sub::hidden("internal")],
                    ..Default::default()
                },
                Repository {
                    prefix: "pkg2".to_string(),
                    hidden: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let lines = format_check_output(&config);
        assert_eq!(
            lines,
            vec![
                "Packages",
                "001 example.com/pkg1 (main)",
                "    Source: https://github.com/example/go-pkg1",
                "    001 example.com/pkg1/subpkg1",
                "    002 example.com/pkg1/internal (hidden)",
                "002 example.com/pkg2 (hidden)",
            ]
        );
    }

    #[test]
    fn generate_output_lists_pages_and_summary() {
        let report = GenerateReport {
            pages: vec![
                GeneratedPage {
                    kind: PageKind::Index,
                    file: PathBuf::from("index.html"),
                },
                GeneratedPage {
                    kind: PageKind::Package {
                        path: "pkg1".to_string(),
                        hidden: false,
                    },
                    file: PathBuf::from("pkg1/index.html"),
                },
            ],
        };

        let lines = format_generate_output("example.com", &report);
        assert_eq!(lines[0], "Index → index.html");
        assert_eq!(lines[1], "example.com/pkg1 → pkg1/index.html");
        assert_eq!(lines.last().unwrap(), "Generated 1 package page");
    }

    #[test]
    fn flags_combine() {
        assert_eq!(flags(true, true), " (main, hidden)");
        assert_eq!(flags(false, false), "");
    }
}
