//! Static export pipeline: load inputs once, render every page in parallel,
//! write the tree, check internal links and finish with the site manifest.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use portfolio_core::messages::MessageCatalog;
use portfolio_core::partition::partition;
use portfolio_core::Catalog;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::assets::write_assets;
use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::html::link_targets;
use crate::manifest::{ManifestEntry, SectionCounts, SiteManifest, portable_path};
use crate::pages::{RenderContext, RenderedPage, render_fallbacks, render_route};
use crate::progress::progress_bar;
use crate::routes::{path_to_file, static_routes};

/// A link in a generated page that no generated file answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    pub page: String,
    pub href: String,
}

pub struct SiteGenerator {
    config: SiteConfig,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Runs the whole export and returns the manifest it wrote.
    pub fn build(&self) -> Result<SiteManifest> {
        tracing::info!(
            catalog = %self.config.catalog_path.display(),
            output = %self.config.output_dir.display(),
            "generating static site"
        );

        let catalog = Catalog::load(&self.config.catalog_path)?;
        let messages = MessageCatalog::builtin()?;
        messages.validate()?;
        self.build_from(&catalog, &messages)
    }

    /// Export from already-loaded inputs.
    pub fn build_from(&self, catalog: &Catalog, messages: &MessageCatalog) -> Result<SiteManifest> {
        let groups = partition(catalog, &self.config.highlights);
        let ctx = RenderContext {
            config: &self.config,
            messages,
            catalog,
            groups: &groups,
        };

        let mut pages = self.render_pages(&ctx, catalog)?;
        pages.extend(render_fallbacks(&ctx)?);

        let output_dir = &self.config.output_dir;
        create_dir(output_dir)?;
        for page in &pages {
            write_file(&output_dir.join(&page.file), &page.html)?;
        }

        let assets = write_assets(output_dir)?;

        let mut served: HashSet<String> = pages.iter().map(|p| portable_path(&p.file)).collect();
        served.extend(assets.iter().map(|p| portable_path(p)));

        let public_files = match &self.config.public_dir {
            Some(dir) if dir.is_dir() => copy_tree(dir, output_dir, Path::new(""), &mut served)?,
            Some(dir) => {
                tracing::debug!(dir = %dir.display(), "public directory absent, skipping");
                0
            }
            None => 0,
        };
        let scene_files = match &self.config.scene_dir {
            Some(dir) => copy_tree(
                dir,
                output_dir,
                Path::new(constants::site::SCENE_DIR),
                &mut served,
            )?,
            None => 0,
        };

        let broken = self.check_links(&pages, &served);
        if !broken.is_empty() {
            for link in &broken {
                tracing::warn!(page = %link.page, href = %link.href, "broken internal link");
            }
            if self.config.strict_links {
                return Err(SiteError::BrokenLinks {
                    count: broken.len(),
                });
            }
        }

        let manifest = SiteManifest {
            base_path: self.config.base_path.clone(),
            locales: portfolio_core::Locale::ALL
                .iter()
                .map(|l| l.as_str().to_string())
                .collect(),
            project_count: catalog.len(),
            sections: SectionCounts {
                featured: groups.featured.len(),
                deployed: groups.deployed.len(),
                archived: groups.archived.len(),
            },
            pages: pages
                .iter()
                .map(|page| ManifestEntry {
                    path: page.path.clone(),
                    file: portable_path(&page.file),
                    kind: page.kind,
                })
                .collect(),
            assets: assets.iter().map(|p| portable_path(p)).collect(),
            scene_files,
            public_files,
        };
        manifest.write(output_dir)?;
        Ok(manifest)
    }

    fn render_pages(&self, ctx: &RenderContext<'_>, catalog: &Catalog) -> Result<Vec<RenderedPage>> {
        let routes = static_routes(catalog);
        let pb = progress_bar(routes.len(), "pages", "Rendering pages");

        let pages = routes
            .par_iter()
            .map(|route| {
                let page = render_route(ctx, route);
                pb.inc(1);
                page
            })
            .collect::<Result<Vec<_>>>()?;

        pb.finish_with_message("Pages rendered");
        Ok(pages)
    }

    /// Internal links and embeds whose target is not among `served` output
    /// files.
    pub fn check_links(&self, pages: &[RenderedPage], served: &HashSet<String>) -> Vec<BrokenLink> {
        let mut broken = Vec::new();
        for page in pages {
            for href in link_targets(&page.html) {
                let Some(path) = self.config.strip_base(&href) else {
                    continue;
                };
                let path = path.split(['?', '#']).next().unwrap_or_default();
                let target = portable_path(&path_to_file(path));
                if !served.contains(&target) {
                    broken.push(BrokenLink {
                        page: page.path.clone(),
                        href: href.clone(),
                    });
                }
            }
        }
        broken
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| SiteError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, contents).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies every file under `source` into `output_dir/prefix`, recording each
/// copied file (relative to the export root) in `served`. Returns the count.
fn copy_tree(
    source: &Path,
    output_dir: &Path,
    prefix: &Path,
    served: &mut HashSet<String>,
) -> Result<usize> {
    let target = output_dir.join(prefix);
    let pb = progress_bar(0, "files", "Copying");
    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|err| SiteError::Walk {
            path: source.to_path_buf(),
            source: err,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let destination = target.join(relative);
        if let Some(parent) = destination.parent() {
            create_dir(parent)?;
        }
        fs::copy(entry.path(), &destination).map_err(|source| SiteError::Write {
            path: destination.clone(),
            source,
        })?;

        served.insert(portable_path(&prefix.join(relative)));
        copied += 1;
        pb.inc_length(1);
        pb.inc(1);
    }

    pb.finish_and_clear();
    tracing::debug!(from = %source.display(), to = %target.display(), copied, "copied tree");
    Ok(copied)
}
