// Router tests driven through tower's oneshot

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use dashboard_core::{CsvOptions, Dataset, Theme};
use dashboard_web_ui::config::DashboardConfig;
use dashboard_web_ui::pages::{exports_page, hello_page};
use dashboard_web_ui::{router, PageRegistry};
use std::fs;
use tower::ServiceExt;

const EXPORTS_CSV: &str = "state,beef,total exports\n\
                           Alabama,34.4,1390.63\n\
                           Alaska,0.2,13.31\n\
                           Arizona,71.3,1463.17\n";

const GDP_CSV: &str = "country,continent,population,life expectancy,gdp per capita\n\
                       Japan,Asia,127467972,82.603,31656.07\n\
                       Kenya,Africa,35610177,54.11,1463.25\n";

fn registry() -> PageRegistry {
    let exports = Dataset::from_csv_reader(EXPORTS_CSV.as_bytes(), &CsvOptions::default()).unwrap();
    let mut registry = PageRegistry::new();
    registry.insert("hello", hello_page(&Theme::dark()).unwrap());
    registry.insert("exports", exports_page(&exports, 2));
    registry
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = router(registry())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["pages"], 2);
}

#[tokio::test]
async fn test_index_links_pages() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/pages/hello\""));
    assert!(body.contains("href=\"/pages/exports\""));
}

#[tokio::test]
async fn test_exports_page_html() {
    let (status, body) = get("/pages/exports").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h4>US Agriculture Exports (2011)</h4>"));
    assert!(body.contains("<th>total exports</th>"));
    assert!(body.contains("<td>Alaska</td>"));
    assert!(!body.contains("Arizona"));
}

#[tokio::test]
async fn test_layout_json() {
    let (status, body) = get("/api/pages/exports/layout").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["title"], "US Agriculture Exports (2011)");
    assert_eq!(json["root"]["tag"], "div");
    assert_eq!(json["root"]["children"][1]["tag"], "table");
}

#[tokio::test]
async fn test_list_pages() {
    let (_, body) = get("/api/pages").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json[0]["slug"], "hello");
    assert_eq!(json[0]["title"], "Hello Dash");
}

#[tokio::test]
async fn test_unknown_page_is_404() {
    let (status, body) = get("/pages/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found: nope"));

    let (status, _) = get("/api/pages/nope/layout").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn test_registry_from_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("gdp.csv"), GDP_CSV).unwrap();
    fs::write(dir.path().join("exports.csv"), EXPORTS_CSV).unwrap();

    let mut config = DashboardConfig::default();
    config.data.dir = dir.path().to_path_buf();
    config.data.gdp_file = "gdp.csv".to_string();
    config.data.exports_file = "exports.csv".to_string();
    config.table.max_rows = 1;

    let registry = PageRegistry::from_config(&config).unwrap();
    let slugs: Vec<_> = registry.pages().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["hello", "gdp", "exports"]);
}

#[test]
fn test_registry_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = DashboardConfig::default();
    config.data.dir = dir.path().to_path_buf();

    let err = PageRegistry::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("gdp-life-exp-2007.csv"));
}
