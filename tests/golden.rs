//! Golden-file tests for the rendered HTML.
//!
//! The meta tags are consumed by the go tool and documentation hosts, so the
//! exact bytes of every page are pinned in `tests/testdata/`.

use go_vanity::render::{Stylesheet, write_index, write_package};
use go_vanity::types::{Repository, SourceUrls, Sub, Website};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn load_golden(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to load golden file {}: {e}", path.display()))
}

const HOST_URL: &str = "https://repositoryhost.com/example/go-pkg1";
const GITHUB_URL: &str = "https://github.com/example/go-pkg1";
const GITLAB_URL: &str = "https://gitlab.com/example/go-pkg1";

fn subs(names: &[&str]) -> Vec<Sub> {
    names.iter().map(|n| Sub::new(n)).collect()
}

fn repo(prefix: &str, url: &str) -> Repository {
    Repository {
        prefix: prefix.to_string(),
        subs: subs(&["subpkg1", "subpkg2"]),
        url: url.to_string(),
        ..Default::default()
    }
}

fn custom_source() -> SourceUrls {
    SourceUrls {
        home: format!("{HOST_URL}/home"),
        dir: format!("{HOST_URL}/browser{{/dir}}"),
        file: format!("{HOST_URL}/view{{/dir}}{{/file}}"),
    }
}

fn branch_source() -> SourceUrls {
    SourceUrls {
        home: GITHUB_URL.to_string(),
        dir: format!("{GITHUB_URL}/tree/branch{{/dir}}"),
        file: format!("{GITHUB_URL}/blob/branch{{/dir}}/{{file}}#L{{line}}"),
    }
}

fn website() -> Website {
    Website {
        url: "https://www.example.com".to_string(),
    }
}

fn git(mut r: Repository) -> Repository {
    r.vcs = "git".to_string();
    r
}

struct PackageCase {
    description: &'static str,
    docs_domain: &'static str,
    pkg: &'static str,
    repo: Repository,
    golden: &'static str,
}

fn package_cases() -> Vec<PackageCase> {
    vec![
        PackageCase {
            description: "simple",
            docs_domain: "godoc.org",
            pkg: "pkg1",
            repo: git(repo("pkg1", HOST_URL)),
            golden: "simple.pkgs.golden.html",
        },
        PackageCase {
            description: "hidden",
            docs_domain: "godoc.org",
            pkg: "pkg1",
            repo: Repository {
                hidden: true,
                ..git(repo("pkg1", HOST_URL))
            },
            golden: "hidden.pkgs.golden.html",
        },
        PackageCase {
            description: "custom source urls",
            docs_domain: "pkg.go.dev",
            pkg: "pkg1",
            repo: Repository {
                source_urls: custom_source(),
                website: website(),
                ..git(repo("pkg1", HOST_URL))
            },
            golden: "custom-source-urls.pkgs.golden.html",
        },
        PackageCase {
            description: "sub-package",
            docs_domain: "",
            pkg: "pkg1/subpkg1",
            repo: Repository {
                source_urls: custom_source(),
                website: website(),
                ..git(repo("pkg1", HOST_URL))
            },
            golden: "sub-package.pkgs.golden.html",
        },
        PackageCase {
            description: "sub-package hidden",
            docs_domain: "",
            pkg: "pkg1/subpkg1",
            repo: Repository {
                subs: vec![Sub::new("subpkg1"), Sub::new("subpkg2"), Sub::hidden("subpkg3")],
                source_urls: custom_source(),
                website: website(),
                ..git(repo("pkg1", HOST_URL))
            },
            golden: "sub-package-hidden.pkgs.golden.html",
        },
        PackageCase {
            description: "github defaults",
            docs_domain: "pkg.go.dev",
            pkg: "pkg1",
            repo: repo("pkg1", GITHUB_URL),
            golden: "github-defaults.pkgs.golden.html",
        },
        PackageCase {
            description: "sub-package github defaults",
            docs_domain: "pkg.go.dev",
            pkg: "pkg1/subpkg1",
            repo: repo("pkg1", GITHUB_URL),
            golden: "sub-package-github-defaults.pkgs.golden.html",
        },
        PackageCase {
            description: "gitlab defaults",
            docs_domain: "",
            pkg: "pkg1",
            repo: repo("pkg1", GITLAB_URL),
            golden: "gitlab-defaults.pkgs.golden.html",
        },
        PackageCase {
            description: "sub-package gitlab defaults",
            docs_domain: "pkg.go.dev",
            pkg: "pkg1/subpkg1",
            repo: repo("pkg1", GITLAB_URL),
            golden: "sub-package-gitlab-defaults.pkgs.golden.html",
        },
        PackageCase {
            description: "github defaults with custom source",
            docs_domain: "",
            pkg: "pkg1",
            repo: Repository {
                source_urls: branch_source(),
                website: website(),
                ..git(repo("pkg1", GITHUB_URL))
            },
            golden: "github-defaults-custom-source.pkgs.golden.html",
        },
        PackageCase {
            description: "single module deployment without a prefix",
            docs_domain: "",
            pkg: "",
            repo: Repository {
                source_urls: branch_source(),
                website: website(),
                ..git(repo("", GITHUB_URL))
            },
            golden: "single-module-deployment-no-prefix.pkgs.golden.html",
        },
    ]
}

#[test]
fn package_pages_match_golden_files() {
    for case in package_cases() {
        let mut out = Vec::new();
        write_package(
            &mut out,
            "example.com",
            case.docs_domain,
            case.pkg,
            &case.repo,
            &Stylesheet::default(),
        )
        .unwrap_or_else(|e| panic!("{}: {e}", case.description));

        let actual = String::from_utf8(out).unwrap();
        assert_eq!(
            load_golden(case.golden),
            actual,
            "output mismatch for {:?}",
            case.description
        );
    }
}

#[test]
fn package_pages_are_deterministic() {
    for case in package_cases() {
        let render = || {
            let mut out = Vec::new();
            write_package(
                &mut out,
                "example.com",
                case.docs_domain,
                case.pkg,
                &case.repo,
                &Stylesheet::default(),
            )
            .unwrap();
            out
        };
        assert_eq!(render(), render(), "{}", case.description);
    }
}

fn index_repo(prefix: &str, sub_list: Vec<Sub>) -> Repository {
    Repository {
        prefix: prefix.to_string(),
        subs: sub_list,
        ..Default::default()
    }
}

fn render_index(repos: &[Repository]) -> String {
    let mut out = Vec::new();
    write_index(&mut out, "example.com", repos, &Stylesheet::default()).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn index_basic() {
    let repos = vec![
        Repository {
            main: true,
            ..index_repo("pkg1", subs(&["subpkg1", "subpkg2"]))
        },
        index_repo("pkg2", subs(&["subpkg1", "subpkg2/subsubpkg1"])),
        Repository {
            hidden: true,
            ..index_repo("pkg3", vec![])
        },
    ];
    assert_eq!(load_golden("basic.index.golden.html"), render_index(&repos));
}

#[test]
fn index_hidden_sub_package() {
    let repos = vec![
        Repository {
            main: true,
            ..index_repo(
                "pkg1",
                vec![Sub::new("subpkg1"), Sub::new("subpkg2"), Sub::hidden("subpkg3")],
            )
        },
        index_repo(
            "pkg2",
            vec![
                Sub::new("subpkg1"),
                Sub::new("subpkg2/subsubpkg1"),
                Sub::hidden("subpkg2/subsubpkg2"),
            ],
        ),
    ];
    assert_eq!(
        load_golden("hidden-sub-package.index.golden.html"),
        render_index(&repos)
    );
}

#[test]
fn index_main_repository_first() {
    let repos = vec![
        index_repo("pkg1", vec![]),
        Repository {
            main: true,
            ..index_repo("pkg2", subs(&["subpkg1"]))
        },
    ];
    assert_eq!(
        load_golden("main-first.index.golden.html"),
        render_index(&repos)
    );
}

#[test]
fn end_to_end_scenario() {
    let mut out = Vec::new();
    write_package(
        &mut out,
        "example.com",
        "godoc.org",
        "pkg1",
        &git(repo("pkg1", HOST_URL)),
        &Stylesheet::default(),
    )
    .unwrap();
    let html = String::from_utf8(out).unwrap();

    assert!(html.contains(
        r#"content="example.com/pkg1 git https://repositoryhost.com/example/go-pkg1""#
    ));
    assert!(html.contains(r#"href="/pkg1/subpkg1""#));
    assert!(html.contains(r#"href="/pkg1/subpkg2""#));
}
