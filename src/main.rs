use clap::{Parser, Subcommand};
use go_vanity::render::{self, Stylesheet};
use go_vanity::{config, generate, output};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "go-vanity")]
#[command(about = "Static site generator for Go vanity import paths")]
#[command(long_about = "\
Static site generator for Go vanity import paths

Reads a list of repositories from vanity.toml and writes one page per
package carrying the go-import and go-source meta tags, plus an index page
listing every visible package.

Output structure:

  dist/
  ├── index.html                   # Package listing
  └── pkg1/
      ├── index.html               # example.com/pkg1
      └── subpkg1/
          └── index.html           # example.com/pkg1/subpkg1

GitHub and GitLab repositories get their VCS type and source browsing
templates filled in automatically.

Run 'go-vanity gen-config' to generate a documented vanity.toml.")]
#[command(version)]
struct Cli {
    /// Config file (TOML, or JSON when the name ends in .json)
    #[arg(long, default_value = "vanity.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the index page and every package page
    Generate,
    /// Validate the config and list the packages it declares
    Check,
    /// Render a single package page to stdout
    Page {
        /// Package path under the domain, e.g. pkg1/subpkg1 (empty for the root module)
        #[arg(default_value = "")]
        package: String,
    },
    /// Print a stock vanity.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            let site = config::load_config(&cli.config)?;
            let stylesheet = load_stylesheet(&site)?;
            println!("==> Generating {} → {}", site.domain, cli.output.display());
            let report = generate::generate(&site, &stylesheet, &cli.output)?;
            output::print_generate_output(&site.domain, &report);
        }
        Command::Check => {
            let site = config::load_config(&cli.config)?;
            println!("==> Checking {}", cli.config.display());
            output::print_check_output(&site);
            println!("==> Config is valid");
        }
        Command::Page { package } => {
            let site = config::load_config(&cli.config)?;
            let stylesheet = load_stylesheet(&site)?;
            let repo = site
                .find_package(&package)
                .ok_or_else(|| format!("package '{package}' is not declared in the config"))?;
            let mut stdout = std::io::stdout().lock();
            render::write_package(
                &mut stdout,
                &site.domain,
                &site.docs_domain,
                &package,
                repo,
                &stylesheet,
            )?;
            stdout.flush()?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// The configured stylesheet, or the built-in one.
fn load_stylesheet(site: &config::SiteConfig) -> Result<Stylesheet, render::RenderError> {
    match &site.stylesheet {
        Some(path) => Stylesheet::load(path),
        None => Ok(Stylesheet::default()),
    }
}
