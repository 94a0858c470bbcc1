//! Static assets shared by every page: the stylesheet and the host-side scene
//! bridge. Both are compiled in and written once per build.

use std::fs;
use std::path::{Path, PathBuf};

use constants::palette::{ACCENT, PAGE_BACKGROUND_DARK, PAGE_BACKGROUND_LIGHT};
use constants::site::THEME_STORAGE_KEY;
use portfolio_core::ThemePreference;

use crate::error::{Result, SiteError};

pub const ASSET_DIR: &str = "assets";

/// Host side of the scene bridge. Reveals the theme toggle for the theme the
/// head script already resolved, persists toggle clicks, and forwards scroll,
/// pointer and theme changes to the scene iframe as JSON-RPC 2.0 strings.
pub const BRIDGE_JS: &str = r#"(() => {
  "use strict";
  const root = document.documentElement;
  const theme = window.portfolioTheme;
  const frame = document.querySelector("iframe.scene");
  const toggle = document.querySelector("[data-theme-toggle]");
  const prefersDark = window.matchMedia("(prefers-color-scheme: dark)");
  let preference = root.dataset.themePreference || "system";

  const post = (method, params, id) => {
    if (!frame || !frame.contentWindow) return;
    const message = { jsonrpc: "2.0", method, params: params ?? {} };
    if (id !== undefined) message.id = id;
    frame.contentWindow.postMessage(JSON.stringify(message), "*");
  };

  const scrollProgress = () => {
    const max = root.scrollHeight - window.innerHeight;
    return max > 0 ? window.scrollY / max : 0;
  };

  const showToggle = () => {
    if (!toggle || !theme) return;
    const rule = theme.rules[preference];
    toggle.textContent = rule.label;
    toggle.dataset.next = rule.next;
    toggle.hidden = false;
  };
  showToggle();

  if (toggle && theme) {
    toggle.addEventListener("click", () => {
      preference = toggle.dataset.next;
      try {
        window.localStorage.setItem(theme.storageKey, preference);
      } catch (_) {}
      theme.apply(preference);
      showToggle();
      post("set_theme", { preference });
    });
  }

  window.addEventListener(
    "scroll",
    () => post("scroll_changed", { progress: scrollProgress() }),
    { passive: true },
  );
  window.addEventListener(
    "pointermove",
    (event) =>
      post("pointer_moved", {
        x: (event.clientX / window.innerWidth) * 2 - 1,
        y: -(event.clientY / window.innerHeight) * 2 + 1,
      }),
    { passive: true },
  );
  prefersDark.addEventListener("change", (event) => {
    if (theme) theme.apply(preference);
    post("ambient_theme_changed", { ambient: event.matches ? "dark" : "light" });
  });

  window.addEventListener("message", (event) => {
    if (!frame || event.source !== frame.contentWindow) return;
    if (typeof event.data !== "string") return;
    let message;
    try {
      message = JSON.parse(event.data);
    } catch {
      return;
    }
    if (message.jsonrpc !== "2.0") return;

    switch (message.method) {
      case "theme_resolved":
        // The scene follows the page: bring it in line and sync its camera.
        if (message.params.preference !== preference) {
          post("set_theme", { preference });
        }
        post("scroll_changed", { progress: scrollProgress() });
        break;
      case "scene_unavailable":
        frame.hidden = true;
        break;
      default:
        if (message.error) console.warn("scene rpc error", message.error);
    }
  });
})();
"#;

/// Inline `<head>` script that resolves the session theme before first paint:
/// the stored preference combined with `prefers-color-scheme`. It applies the
/// `dark` class, marks the theme resolved and exposes the toggle rules to the
/// bridge. The rules table is generated from [`ThemePreference`].
pub fn theme_boot_script() -> String {
    let rules: serde_json::Map<String, serde_json::Value> = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ]
    .into_iter()
    .map(|preference| {
        (
            preference.as_str().to_string(),
            serde_json::json!({
                "label": preference.toggle_label(),
                "next": preference.toggled().as_str(),
            }),
        )
    })
    .collect();

    format!(
        r#"(() => {{
  const rules = {rules};
  const storageKey = {key};
  const root = document.documentElement;
  const prefersDark = window.matchMedia("(prefers-color-scheme: dark)");
  const apply = (preference) => {{
    const dark = preference === "dark" || (preference === "system" && prefersDark.matches);
    root.classList.toggle("dark", dark);
    root.dataset.themePreference = preference;
    root.dataset.themeState = "resolved";
    return dark ? "dark" : "light";
  }};
  let stored = null;
  try {{
    stored = window.localStorage.getItem(storageKey);
  }} catch (_) {{}}
  apply(Object.prototype.hasOwnProperty.call(rules, stored) ? stored : "system");
  window.portfolioTheme = {{ rules, storageKey, apply }};
}})();"#,
        rules = serde_json::Value::Object(rules),
        key = serde_json::Value::from(THEME_STORAGE_KEY),
    )
}

/// Colour variables that come from the shared palette.
pub fn palette_css() -> String {
    format!(
        ":root {{\n  --bg: {};\n  --accent-strong: {};\n}}\nhtml.dark {{\n  --bg: {};\n}}\n",
        PAGE_BACKGROUND_LIGHT.to_hex(),
        ACCENT.to_hex(),
        PAGE_BACKGROUND_DARK.to_hex(),
    )
}

/// The stylesheet: palette variables first, then the static rules.
pub fn site_css() -> String {
    palette_css() + SITE_CSS_RULES
}

const SITE_CSS_RULES: &str = r#":root {
  color-scheme: light dark;
  --fg: #18181b;
  --muted: #52525b;
  --accent: #0891b2;
  --line: rgba(0, 0, 0, 0.1);
  --chip: rgba(0, 0, 0, 0.06);
  --card: rgba(244, 244, 245, 0.5);
  font-family: ui-sans-serif, system-ui, sans-serif;
}
html.dark {
  --fg: #ffffff;
  --muted: #d4d4d8;
  --accent: #22d3ee;
  --line: rgba(255, 255, 255, 0.1);
  --chip: rgba(255, 255, 255, 0.08);
  --card: rgba(24, 24, 27, 0.5);
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--fg); }
a { color: inherit; text-decoration: none; }
img { display: block; width: 100%; height: 100%; object-fit: cover; }
iframe.scene {
  position: fixed; inset: 0; width: 100vw; height: 100vh;
  border: 0; z-index: 0; pointer-events: none;
}
main { position: relative; z-index: 1; padding: 2.5rem; }
body.page-project::after {
  content: ""; position: fixed; inset: 0; z-index: 0; pointer-events: none;
  background: rgba(250, 250, 250, 0.8); backdrop-filter: blur(2px);
}
html.dark body.page-project::after { background: rgba(0, 0, 0, 0.8); }
.toggles { position: absolute; top: 2.5rem; right: 2.5rem; display: flex; gap: 1rem; z-index: 2; }
.locales { display: flex; gap: 0.5rem; }
.chip {
  padding: 0.5rem 0.9rem; border-radius: 999px; font-size: 0.75rem;
  background: var(--chip); border: 1px solid var(--line); cursor: pointer;
  color: inherit; letter-spacing: 0.2em; text-transform: uppercase;
}
.chip[aria-current="page"] { border-color: var(--accent); }
.hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; }
.hero h1 { font-size: clamp(2.5rem, 8vw, 6rem); font-weight: 900; letter-spacing: -0.05em; margin: 0 0 1rem; }
.subtitle { color: var(--accent); letter-spacing: 0.5em; font-weight: 300; }
.scroll-hint { margin-top: 5rem; animation: bounce 1s infinite; }
@keyframes bounce { 50% { transform: translateY(-25%); } }
section { padding: 5rem 0; }
section > h2 { font-size: 2.25rem; border-bottom: 1px solid var(--line); padding-bottom: 1rem; }
.featured > h2 { text-align: center; text-transform: uppercase; letter-spacing: 0.2em; font-size: 3.75rem; border: 0; }
.featured-list { display: flex; flex-direction: column; gap: 8rem; max-width: 72rem; margin: 0 auto; }
.featured-item { display: flex; gap: 2.5rem; align-items: center; }
.featured-item.row-reverse { flex-direction: row-reverse; }
.featured-media { flex: 1; height: 28rem; border-radius: 1.5rem; overflow: hidden; border: 1px solid var(--line); }
.featured-info { flex: 1; }
.featured-info h3 { font-size: 3rem; font-weight: 900; text-transform: uppercase; margin: 0; }
.description { color: var(--muted); line-height: 1.6; }
.featured-info .description, .project-info .description { border-left: 4px solid var(--accent-strong); padding-left: 1.5rem; font-size: 1.25rem; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { padding: 0.4rem 0.9rem; border-radius: 999px; background: var(--chip); border: 1px solid var(--line); font-size: 0.8rem; text-transform: uppercase; color: var(--accent); }
.tag-small { font-size: 0.6rem; border-radius: 0.25rem; }
.tag-mono { font-family: ui-monospace, monospace; border-radius: 0.5rem; text-transform: none; }
.launch, .source {
  display: inline-block; padding: 1rem 2.5rem; border-radius: 999px; font-weight: 900;
  text-transform: uppercase; letter-spacing: 0.1em;
}
.launch { background: var(--accent-strong); color: #000; }
.source { border: 1px solid var(--line); }
.source.wide { width: 100%; text-align: center; }
.actions { display: flex; gap: 1rem; padding-top: 1rem; }
.grid { display: grid; gap: 1.5rem; }
.grid-3 { grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); }
.card { position: relative; height: 20rem; border-radius: 0.75rem; overflow: hidden; background: var(--card); border: 1px solid var(--line); }
.card img { opacity: 0.6; }
.card-body { position: absolute; inset: auto 0 0 0; padding: 1.5rem; background: linear-gradient(transparent, var(--bg)); }
.archive { padding: 1.5rem; border-radius: 0.5rem; background: var(--chip); border: 1px solid var(--line); }
.archive h3 { font-family: ui-monospace, monospace; color: var(--accent); }
.footer { text-align: center; padding: 5rem 0; font-size: 0.75rem; letter-spacing: 0.5em; text-transform: uppercase; color: var(--muted); }
.project { max-width: 80rem; margin: 0 auto; padding: 6rem 1.5rem; }
.back a { text-transform: uppercase; letter-spacing: 0.2em; font-weight: 700; color: var(--muted); }
.project-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 6rem; margin-top: 6rem; }
.project-media { aspect-ratio: 16 / 9; border-radius: 1.5rem; overflow: hidden; border: 1px solid var(--line); }
.project-info h1 { font-size: clamp(3rem, 7vw, 6rem); font-weight: 900; text-transform: uppercase; line-height: 0.9; overflow-wrap: anywhere; }
.languages h2 { font-size: 0.85rem; letter-spacing: 0.2em; text-transform: uppercase; border-bottom: 1px solid var(--line); }
.repo-id { padding-top: 2rem; font-family: ui-monospace, monospace; font-size: 0.75rem; color: var(--muted); }
.not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; }
.not-found h1 { font-size: 6rem; margin: 0; color: var(--accent); }
@media (max-width: 64rem) {
  .featured-item, .featured-item.row-reverse { flex-direction: column; }
  .featured-media { width: 100%; }
}
"#;

/// Writes the shared assets and returns their paths relative to `output_dir`.
pub fn write_assets(output_dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = output_dir.join(ASSET_DIR);
    fs::create_dir_all(&dir).map_err(|source| SiteError::Write {
        path: dir.clone(),
        source,
    })?;

    let mut written = Vec::new();
    let css = site_css();
    for (name, contents) in [("site.css", css.as_str()), ("bridge.js", BRIDGE_JS)] {
        let path = dir.join(name);
        fs::write(&path, contents).map_err(|source| SiteError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(Path::new(ASSET_DIR).join(name));
    }
    Ok(written)
}
