use gloo::console::{error, log};
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// Runtime config shared with the page through a `ContextProvider`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FrontendConfig {
    #[serde(default)]
    pub asset_url: String,
}

impl FrontendConfig {
    /// The config from a previous visit, if any.
    pub fn cached() -> Self {
        LocalStorage::get(CONFIG_KEY).unwrap_or_default()
    }

    pub fn asset(&self, path: &str) -> String {
        join_asset(&self.asset_url, path)
    }
}

const CONFIG_PATH: &str = "/config/config.json";
const CONFIG_KEY: &str = "frontend_config";

async fn fetch_config() -> Result<FrontendConfig, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {CONFIG_PATH}: {e:?}"))?;

    if !response.ok() {
        return Err(format!("Fetching {CONFIG_PATH} failed with status: {}", response.status()));
    }

    response
        .json::<FrontendConfig>()
        .await
        .map_err(|e| format!("Failed to parse {CONFIG_PATH}: {e:?}"))
}

/// Fetches the runtime config and caches it in local storage for the next
/// visit. A missing or broken config leaves assets on the page's own origin.
pub async fn load_config() -> FrontendConfig {
    let config = match fetch_config().await {
        Ok(config) => config,
        Err(e) => {
            error!(e);
            FrontendConfig::default()
        }
    };

    log!("Asset base:", if config.asset_url.is_empty() { "(same origin)" } else { config.asset_url.as_str() });

    if let Err(e) = LocalStorage::set(CONFIG_KEY, &config) {
        error!(format!("failed to write {CONFIG_KEY} to localStorage: {e:?}"));
    }

    config
}

/// Joins a site-relative asset reference onto a base URL.
pub fn join_asset(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_keeps_path() {
        assert_eq!(join_asset("", "/hero-saffron.jpg"), "/hero-saffron.jpg");
    }

    #[test]
    fn base_and_path_joined_with_one_slash() {
        assert_eq!(
            join_asset("https://cdn.example.com/", "/team-ankit.jpg"),
            "https://cdn.example.com/team-ankit.jpg"
        );
        assert_eq!(
            join_asset("https://cdn.example.com", "team-ankit.jpg"),
            "https://cdn.example.com/team-ankit.jpg"
        );
    }

    #[test]
    fn config_resolves_assets_against_its_base() {
        let config = FrontendConfig {
            asset_url: "https://cdn.example.com".to_string(),
        };
        assert_eq!(config.asset("/hero-saffron.jpg"), "https://cdn.example.com/hero-saffron.jpg");
        assert_eq!(FrontendConfig::default().asset("/hero-saffron.jpg"), "/hero-saffron.jpg");
    }

    #[test]
    fn config_without_asset_url_defaults_to_empty() {
        let config: FrontendConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FrontendConfig::default());
    }
}
