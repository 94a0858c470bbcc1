//! portfolio-site: static export and maintenance commands for the portfolio.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use constants::site::{DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_PUBLIC_DIR};
use constants::screenshot::DEFAULT_BROWSER;
use portfolio_core::Catalog;
use site_generator::routes::static_routes;
use site_generator::screenshots::{ChromiumCapture, update_screenshots, write_catalog};
use site_generator::{SiteConfig, SiteGenerator};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(version)]
#[command(about = "Static export and maintenance for the portfolio site")]
struct Cli {
    /// Project catalog (repos.json)
    #[arg(long, global = true, env = "PORTFOLIO_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every page, the shared assets and the site manifest
    Build {
        /// Export root
        #[arg(short, long, env = "PORTFOLIO_OUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,

        /// Compiled scene bundle to copy under scene/
        #[arg(long, env = "PORTFOLIO_SCENE_DIR")]
        scene_dir: Option<PathBuf>,

        /// Static files copied verbatim (screenshots live here)
        #[arg(long, default_value = DEFAULT_PUBLIC_DIR)]
        public_dir: PathBuf,

        /// Prefix for every link when hosted below the domain root
        #[arg(long, env = "PORTFOLIO_BASE_PATH", default_value = "")]
        base_path: String,

        /// Fail when a generated page links to a page that does not exist
        #[arg(long)]
        strict_links: bool,
    },

    /// Capture homepage screenshots and record their paths in the catalog
    UpdateScreenshots {
        /// Directory receiving screenshots/<name>.png
        #[arg(long, default_value = DEFAULT_PUBLIC_DIR)]
        public_dir: PathBuf,

        /// Headless browser binary
        #[arg(long, env = "PORTFOLIO_CHROMIUM", default_value = DEFAULT_BROWSER)]
        browser: String,
    },

    /// Print every pre-generated route
    Routes,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            out_dir,
            scene_dir,
            public_dir,
            base_path,
            strict_links,
        } => {
            let config = SiteConfig {
                catalog_path: cli.catalog,
                output_dir: out_dir,
                scene_dir,
                public_dir: Some(public_dir),
                strict_links,
                ..SiteConfig::default()
            }
            .with_base_path(&base_path);

            let manifest = SiteGenerator::new(config)
                .build()
                .context("site generation failed")?;
            tracing::info!(pages = manifest.pages.len(), "export complete");
        }

        Commands::UpdateScreenshots {
            public_dir,
            browser,
        } => {
            let catalog = Catalog::load(&cli.catalog)
                .with_context(|| format!("loading {}", cli.catalog.display()))?;
            let mut capture = ChromiumCapture::with_browser(browser);
            let (catalog, _report) = update_screenshots(catalog, &public_dir, &mut capture)
                .context("screenshot update failed")?;
            write_catalog(&cli.catalog, &catalog)
                .with_context(|| format!("writing {}", cli.catalog.display()))?;
        }

        Commands::Routes => {
            let catalog = Catalog::load(&cli.catalog)
                .with_context(|| format!("loading {}", cli.catalog.display()))?;
            for route in static_routes(&catalog) {
                println!("{}\t{}", route.path(), route.output_file().display());
            }
        }
    }

    Ok(())
}
