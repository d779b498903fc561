// backend_chakra_site/src/site.rs
use rocket::fs::NamedFile;
use rocket::State;
use serde::Serialize;
use std::{env, fs, io, path::{Path, PathBuf}};

pub const DEFAULT_SITE_ROOT: &str = "/usr/share/nginx/html";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub root: PathBuf,
    pub asset_url: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            root: env::var("SITE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SITE_ROOT)),
            asset_url: env::var("ASSET_URL").unwrap_or_default(),
        }
    }
}

/// The document the SPA fetches from `/config/config.json` at startup.
#[derive(Serialize)]
struct FrontendConfig<'a> {
    asset_url: &'a str,
}

pub fn config_path(site: &SiteConfig) -> PathBuf {
    site.root.join("config").join("config.json")
}

pub fn write_frontend_config(site: &SiteConfig) -> io::Result<PathBuf> {
    let path = config_path(site);
    if let Some(config_dir) = path.parent() {
        fs::create_dir_all(config_dir)?;
    }
    let config = FrontendConfig {
        asset_url: &site.asset_url,
    };
    let json = serde_json::to_string_pretty(&config).map_err(io::Error::other)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Lines logged once the server is up.
pub fn startup_summary(site: &SiteConfig) -> Vec<String> {
    let assets = if site.asset_url.is_empty() {
        "🖼️ Serving assets from the site origin".to_string()
    } else {
        format!("🖼️ Serving assets from {}", site.asset_url)
    };
    vec![
        format!("📝 Frontend config written to {}", config_path(site).display()),
        assets,
    ]
}

/// Paths the SPA router owns: anything without a file extension.
pub fn is_client_route(path: &Path) -> bool {
    path.extension().is_none()
}

/// History API fallback: `/about`, `/products`, `/contact` all load the SPA.
#[get("/<path..>", rank = 20)]
pub async fn spa_fallback(path: PathBuf, site: &State<SiteConfig>) -> Option<NamedFile> {
    if !is_client_route(&path) {
        warn!("🔍 No asset at /{}", path.display());
        return None;
    }
    NamedFile::open(site.root.join("index.html")).await.ok()
}
