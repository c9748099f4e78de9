use client::{CharacterId, ClientError, MAX_CHARACTER_ID, Sample};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app, unreachable_address};

#[tokio::test]
async fn fetch_sampled_characters() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut rng = StdRng::seed_from_u64(3);
    let ids = Sample::draw(&mut rng, 6, 1, MAX_CHARACTER_ID);

    let characters = app.client.characters(&ids).await?;

    let returned: Vec<i64> = characters.iter().map(|c| c.id.0).collect();
    assert_eq!(returned, ids.values());
    Ok(())
}

#[tokio::test]
async fn single_character_is_unwrapped() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut rng = StdRng::seed_from_u64(0);
    let ids = Sample::draw(&mut rng, 1, 1, 1);

    let characters = app.client.characters(&ids).await?;

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, CharacterId(1));
    assert_eq!(characters[0].name, "Rick Sanchez");
    Ok(())
}

#[tokio::test]
async fn unknown_single_character_is_not_found() {
    let app = spawn_app().await;
    let result = app
        .resource_client()
        .get_json::<serde_json::Value>(&app.url("character/9999"))
        .await;

    assert_status_code(result, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_error_message_has_status() {
    let app = spawn_app().await;
    let error = app
        .resource_client()
        .get_json::<serde_json::Value>(&app.url("no_such_route"))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Error: 404 Not Found");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let address = unreachable_address().await;
    let client = client::ResourceClient::default();

    let result = client
        .get_json::<serde_json::Value>(&format!("{address}/character/1"))
        .await;

    assert!(matches!(result, Err(ClientError::Network(_))));
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let app = spawn_app().await;

    // health_check answers with plain text
    let result = app
        .resource_client()
        .get_json::<Vec<client::Character>>(&app.url("health_check"))
        .await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}
