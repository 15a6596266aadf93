mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn search_names(server: &common::TestServer, needle: &str) -> Result<Vec<String>> {
    let res = server
        .client
        .get(server.url(&format!("/colleges/search/{}", needle)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "unexpected status: {}", res.status());

    let body = res.json::<Value>().await?;
    Ok(body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|c| c["name"].as_str().map(str::to_string))
        .collect())
}

#[tokio::test]
async fn search_is_case_insensitive_substring() -> Result<()> {
    let server = common::spawn_server().await?;
    server.create_college(json!({ "name": "Alpha Tech", "location": "Dhaka" })).await?;
    server.create_college(json!({ "name": "beta", "location": "Sylhet" })).await?;

    assert_eq!(search_names(&server, "alpha").await?, vec!["Alpha Tech"]);
    assert_eq!(search_names(&server, "TECH").await?, vec!["Alpha Tech"]);
    assert_eq!(search_names(&server, "ET").await?, vec!["beta"]);
    Ok(())
}

#[tokio::test]
async fn search_without_match_is_empty_not_404() -> Result<()> {
    let server = common::spawn_server().await?;
    server.create_college(json!({ "name": "Alpha Tech", "location": "Dhaka" })).await?;

    assert!(search_names(&server, "gamma").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn search_matches_percent_encoded_segment() -> Result<()> {
    let server = common::spawn_server().await?;
    server.create_college(json!({ "name": "Alpha Tech", "location": "Dhaka" })).await?;

    assert_eq!(search_names(&server, "alpha%20te").await?, vec!["Alpha Tech"]);
    Ok(())
}
