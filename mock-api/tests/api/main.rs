use reqwest::StatusCode;
use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn list_skips_unknown_ids() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = reqwest::get(app.url("character/2,0,9999,826")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await?;
    let ids: Vec<i64> = body
        .as_array()
        .expect("list response")
        .iter()
        .filter_map(|c| c["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![2, 826]);
    Ok(())
}

#[tokio::test]
async fn single_id_returns_object() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body: serde_json::Value =
        reqwest::get(app.url("character/7")).await?.json().await?;

    assert_eq!(body["id"], 7);
    assert_eq!(body["name"], "Abradolf Lincler");
    assert_eq!(
        body["image"],
        "https://rickandmortyapi.com/api/character/avatar/7.jpeg"
    );
    Ok(())
}

#[tokio::test]
async fn malformed_ids_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = reqwest::get(app.url("character/1,two")).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let text = response.text().await?;
    assert!(text.starts_with("Bad request: Invalid character id"));
    Ok(())
}

#[tokio::test]
async fn unknown_single_id_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = reqwest::get(app.url("character/827")).await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
