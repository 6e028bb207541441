mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_lists_endpoints() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert!(body["data"]["endpoints"]["pages"].is_string());
    Ok(())
}

#[tokio::test]
async fn pages_list_is_empty_for_a_fresh_store() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/v1/content/pages?store=DEFAULT&lang=en",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn missing_page_is_404() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/v1/content/pages/unknown", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn summary_and_boxes_expose_the_same_listing() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for endpoint in ["summary", "boxes"] {
        let res = client
            .get(format!("{}/api/v1/content/{}", server.base_url, endpoint))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "endpoint {}", endpoint);
        let body = res.json::<Value>().await?;
        assert_eq!(body, serde_json::json!([]), "endpoint {}", endpoint);
    }
    Ok(())
}

#[tokio::test]
async fn missing_box_is_404() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/v1/content/boxes/unknown", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn folder_listing_defaults_to_the_root() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/v1/content/folder", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["path"], "/");
    assert_eq!(body["files"], serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn folder_path_is_percent_decoded() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/v1/content/folder?path=a%2Fb",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["path"], "/a/b");
    Ok(())
}

#[tokio::test]
async fn unknown_store_is_404() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/v1/content/pages?store=NOPE",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unsupported_language_is_400() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/v1/content/pages?lang=zz",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn store_scoped_images_resolve_the_path_segment() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // The store query parameter is ignored on store-scoped routes
    let res = client
        .get(format!(
            "{}/api/v1/DEFAULT/content/images?store=NOPE",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["path"], "/");

    let res = client
        .get(format!("{}/api/v1/NOPE/content/images", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn store_scoped_box_lookup_misses_are_404() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/v1/DEFAULT/content/unknown", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
