use client::{Character, FetchResource, FetchStatus, ResourceClient};

use test_helpers::{spawn_app, unreachable_address};

#[tokio::test]
async fn successful_fetch_stores_parsed_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let resource = FetchResource::<Vec<Character>>::from_url(
        app.resource_client(),
        app.url("character/1,2,3"),
    );

    assert_eq!(resource.status(), FetchStatus::Idle);
    assert!(resource.load().await);

    assert!(!resource.is_loading());
    assert_eq!(resource.error(), None);
    let names: Vec<String> = resource
        .data()
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Rick Sanchez", "Morty Smith", "Summer Smith"]);
    Ok(())
}

#[tokio::test]
async fn not_found_records_status_and_keeps_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let resource = FetchResource::<serde_json::Value>::from_url(
        app.resource_client(),
        app.url("character/9999"),
    );

    resource.load().await;

    assert!(!resource.is_loading());
    assert_eq!(resource.data(), None);
    let error = resource.error().unwrap_or_default();
    assert!(error.contains("404"), "unexpected error: {error}");
    Ok(())
}

#[tokio::test]
async fn transport_failure_records_underlying_message() {
    let address = unreachable_address().await;
    let url = format!("{address}/character/1,2");
    let client = ResourceClient::default();
    let resource =
        FetchResource::<Vec<Character>>::from_url(client.clone(), url.clone());

    resource.load().await;

    let expected = client
        .get_json::<Vec<Character>>(&url)
        .await
        .unwrap_err()
        .to_string();
    assert!(!resource.is_loading());
    assert_eq!(resource.data(), None);
    assert_eq!(resource.error(), Some(expected));
}

#[tokio::test]
async fn refetch_after_failure_recovers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.resource_client();
    let healthy = app.url("character/4,5");
    let fail_next = std::rc::Rc::new(std::cell::Cell::new(false));

    let resource = FetchResource::<Vec<Character>>::new({
        let url = healthy.clone();
        let missing = app.url("character/not-a-number");
        let fail_next = fail_next.clone();
        move || {
            let client = client.clone();
            let url = if fail_next.get() {
                missing.clone()
            } else {
                url.clone()
            };
            async move {
                client
                    .get_json::<Vec<Character>>(&url)
                    .await
                    .map_err(|e| e.to_string())
            }
        }
    });

    resource.load().await;
    let first = resource.data();
    assert_eq!(first.as_ref().map(Vec::len), Some(2));

    fail_next.set(true);
    let attempt = resource.refetch();
    assert!(resource.is_loading());
    attempt.await;
    assert!(resource.error().unwrap_or_default().contains("400"));
    assert_eq!(resource.data(), first);

    fail_next.set(false);
    let attempt = resource.refetch();
    assert!(resource.is_loading());
    assert_eq!(resource.error(), None);
    attempt.await;
    assert!(matches!(resource.status(), FetchStatus::Success(_)));
    Ok(())
}
