use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use site_generator::routes::RouteKind;
use site_generator::{SiteConfig, SiteError, SiteGenerator};
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {
    "name": "aibou",
    "description": "Companion app",
    "url": "https://github.com/hamzaabamboo/aibou",
    "homepageUrl": "https://aibou.example",
    "languages": [{"size": 10, "node": {"name": "TypeScript"}}],
    "openGraphImageUrl": "https://og.example/aibou.png",
    "screenshotPath": "/screenshots/aibou.png"
  },
  {
    "name": "dashboard",
    "description": null,
    "url": "https://github.com/hamzaabamboo/dashboard",
    "homepageUrl": "https://dash.example",
    "languages": [],
    "openGraphImageUrl": "https://og.example/dashboard.png"
  },
  {
    "name": "some-lib",
    "description": "Utility crate",
    "url": "https://github.com/hamzaabamboo/some-lib",
    "homepageUrl": "",
    "languages": [{"size": 10, "node": {"name": "Rust"}}],
    "openGraphImageUrl": ""
  }
]"#;

fn setup() -> (TempDir, SiteConfig) {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("repos.json");
    fs::write(&catalog_path, CATALOG).unwrap();

    let scene = dir.path().join("scene-dist");
    fs::create_dir_all(&scene).unwrap();
    fs::write(scene.join("index.html"), "<canvas id=\"bevy\"></canvas>").unwrap();
    fs::write(scene.join("scene_renderer_bg.wasm"), [0u8, 97, 115, 109]).unwrap();

    let public = dir.path().join("public");
    fs::create_dir_all(public.join("screenshots")).unwrap();
    fs::write(public.join("screenshots/aibou.png"), [137u8, 80, 78, 71]).unwrap();

    let config = SiteConfig {
        catalog_path,
        output_dir: dir.path().join("out"),
        scene_dir: Some(scene),
        public_dir: Some(public),
        strict_links: true,
        ..SiteConfig::default()
    };
    (dir, config)
}

fn read(out: &Path, file: &str) -> String {
    fs::read_to_string(out.join(file)).unwrap_or_else(|e| panic!("{file}: {e}"))
}

#[test]
fn writes_one_page_per_route_plus_fallbacks() {
    let (_dir, config) = setup();
    let out = config.output_dir.clone();
    let manifest = SiteGenerator::new(config).build().unwrap();

    assert_eq!(manifest.count(RouteKind::Home), 2);
    assert_eq!(manifest.count(RouteKind::Project), 6);
    assert_eq!(manifest.count(RouteKind::NotFound), 1);
    assert_eq!(manifest.count(RouteKind::Redirect), 1);
    assert_eq!(manifest.project_count, 3);
    assert_eq!(manifest.sections.featured, 1);
    assert_eq!(manifest.sections.deployed, 1);
    assert_eq!(manifest.sections.archived, 1);
    assert_eq!(manifest.scene_files, 2);
    assert_eq!(manifest.public_files, 1);

    for page in &manifest.pages {
        assert!(out.join(&page.file).is_file(), "missing {}", page.file);
    }
    assert!(out.join("404.html").is_file());
    assert!(out.join("scene/index.html").is_file());
    assert!(out.join("screenshots/aibou.png").is_file());
    assert!(out.join("site-manifest.json").is_file());
}

#[test]
fn pages_render_localized_sections() {
    let (_dir, config) = setup();
    let out = config.output_dir.clone();
    SiteGenerator::new(config).build().unwrap();

    let en = read(&out, "en/index.html");
    assert!(en.contains("<h2>Featured</h2>"));
    assert!(en.contains("<h2>The Archives</h2>"));
    assert!(en.contains(r#"src="/screenshots/aibou.png""#));

    let ja = read(&out, "ja/index.html");
    assert!(ja.contains(r#"<html lang="ja""#));
    assert!(ja.contains("<h2>アーカイブ</h2>"));

    let detail = read(&out, "ja/project/dashboard/index.html");
    assert!(detail.contains("<h1>dashboard</h1>"));
    assert!(detail.contains("説明はありません。"));
    assert!(detail.contains("サイトを見る"));

    let redirect = read(&out, "index.html");
    assert!(redirect.contains("url=/en/"));
}

#[test]
fn manifest_round_trips_from_disk() {
    let (_dir, config) = setup();
    let out = config.output_dir.clone();
    let manifest = SiteGenerator::new(config).build().unwrap();

    let on_disk: site_generator::manifest::SiteManifest =
        serde_json::from_str(&read(&out, "site-manifest.json")).unwrap();
    assert_eq!(on_disk, manifest);
    assert!(on_disk.pages.iter().any(|p| p.file == "en/project/some-lib/index.html"));
}

#[test]
fn base_path_prefixes_every_internal_link() {
    let (_dir, config) = setup();
    let out = config.output_dir.clone();
    SiteGenerator::new(config.with_base_path("/portfolio")).build().unwrap();

    let en = read(&out, "en/index.html");
    assert!(en.contains(r#"href="/portfolio/ja/""#));
    assert!(en.contains(r#"href="/portfolio/en/project/aibou/""#));
    assert!(en.contains(r#"src="/portfolio/screenshots/aibou.png""#));
    assert!(en.contains("/portfolio/scene/index.html?variant=scroll"));
}

#[test]
fn duplicate_names_fail_the_build() {
    let (dir, config) = setup();
    let duplicated = CATALOG.replace("\"dashboard\"", "\"aibou\"");
    fs::write(dir.path().join("repos.json"), duplicated).unwrap();

    let err = SiteGenerator::new(config).build().unwrap_err();
    assert!(matches!(
        err,
        SiteError::Portfolio(portfolio_core::PortfolioError::DuplicateName(ref name)) if name == "aibou"
    ));
}

#[test]
fn missing_scene_bundle_is_a_broken_embed() {
    let (_dir, mut config) = setup();
    config.scene_dir = None;

    let err = SiteGenerator::new(config.clone()).build().unwrap_err();
    assert!(matches!(err, SiteError::BrokenLinks { count } if count > 0));

    config.strict_links = false;
    let manifest = SiteGenerator::new(config).build().unwrap();
    assert_eq!(manifest.scene_files, 0);
}

#[test]
fn theme_resolves_in_the_page_head() {
    let (_dir, mut config) = setup();
    config.scene_dir = None;
    config.strict_links = false;
    let out = config.output_dir.clone();
    SiteGenerator::new(config).build().unwrap();

    for file in ["en/index.html", "ja/project/aibou/index.html", "404.html"] {
        let html = read(&out, file);
        let (head, body) = html.split_once("</head>").unwrap();
        assert!(head.contains("window.portfolioTheme"), "{file}");
        assert!(head.contains(r#"root.classList.toggle("dark", dark)"#), "{file}");
        assert!(!body.contains("window.portfolioTheme"), "{file}");
    }
}

#[test]
fn names_outside_one_path_segment_fail_the_build() {
    let (dir, config) = setup();
    let out = config.output_dir.clone();
    let escaping = CATALOG.replace("\"dashboard\"", "\"../dashboard\"");
    fs::write(dir.path().join("repos.json"), escaping).unwrap();

    let err = SiteGenerator::new(config).build().unwrap_err();
    assert!(matches!(
        err,
        SiteError::Portfolio(portfolio_core::PortfolioError::InvalidName(ref name)) if name == "../dashboard"
    ));
    assert!(!out.exists());
}
