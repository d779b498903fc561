// backend_chakra_site/src/main.rs
#[macro_use] extern crate rocket;

mod site;

use rocket::{fairing::AdHoc, fs::FileServer, Build, Rocket};
use site::SiteConfig;

const STARTUP_FAIRING: &str = "Startup summary";

fn build(site: SiteConfig) -> Rocket<Build> {
    let root = site.root.clone();
    rocket::build()
        .manage(site)
        // Rocket's logger is only installed at ignite
        .attach(AdHoc::on_liftoff(STARTUP_FAIRING, |rocket| Box::pin(async move {
            if let Some(site) = rocket.state::<SiteConfig>() {
                for line in site::startup_summary(site) {
                    info!("{}", line);
                }
            }
        })))
        .mount("/", routes![site::spa_fallback])
        // Anything under the site root is always available under /
        .mount("/", FileServer::from(root))
}

#[launch]
fn rocket() -> _ {
    let site = SiteConfig::from_env();

    site::write_frontend_config(&site).expect("Failed to write frontend config");
    build(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use std::fs;
    use std::path::Path;

    const INDEX: &str = "<!DOCTYPE html><html><body>chakra</body></html>";

    fn site_in(dir: &Path, asset_url: &str) -> SiteConfig {
        fs::write(dir.join("index.html"), INDEX).unwrap();
        let site = SiteConfig {
            root: dir.to_path_buf(),
            asset_url: asset_url.to_string(),
        };
        site::write_frontend_config(&site).unwrap();
        site
    }

    #[test]
    fn serves_frontend_config() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::tracked(build(site_in(dir.path(), "https://cdn.example.com"))).unwrap();

        let response = client.get("/config/config.json").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JSON));

        let body: serde_json::Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["asset_url"], "https://cdn.example.com");
    }

    #[test]
    fn client_routes_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::tracked(build(site_in(dir.path(), ""))).unwrap();

        for route in ["/about", "/products", "/contact", "/some/deep/link"] {
            let response = client.get(route).dispatch();
            assert_eq!(response.status(), Status::Ok, "{route}");
            assert_eq!(response.into_string().as_deref(), Some(INDEX), "{route}");
        }
    }

    #[test]
    fn missing_assets_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::tracked(build(site_in(dir.path(), ""))).unwrap();

        let response = client.get("/team-ankit.jpg").dispatch();
        assert_eq!(response.status(), Status::NotFound);
    }

    #[test]
    fn existing_assets_are_served() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path(), "");
        fs::write(dir.path().join("hero-saffron.jpg"), b"jpeg").unwrap();
        let client = Client::tracked(build(site)).unwrap();

        let response = client.get("/hero-saffron.jpg").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_bytes().as_deref(), Some(&b"jpeg"[..]));
    }

    #[test]
    fn empty_asset_url_is_written_as_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        site_in(dir.path(), "");
        let written = fs::read_to_string(dir.path().join("config/config.json")).unwrap();
        let body: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(body["asset_url"], "");
    }

    #[test]
    fn startup_summary_reads_managed_site_config() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::tracked(build(site_in(dir.path(), "https://cdn.example.com"))).unwrap();

        let site = client.rocket().state::<SiteConfig>().unwrap();
        let summary = site::startup_summary(site);
        assert_eq!(summary.len(), 2);
        assert!(summary[0].contains(&dir.path().join("config").join("config.json").display().to_string()));
        assert!(summary[1].ends_with("https://cdn.example.com"));
    }

    #[test]
    fn startup_summary_names_same_origin_assets() {
        let dir = tempfile::tempdir().unwrap();
        let summary = site::startup_summary(&site_in(dir.path(), ""));
        assert!(summary[1].contains("site origin"));
    }
}
