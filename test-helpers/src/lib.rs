use client::{CharacterClient, ClientError, ResourceClient};
use mock_api::{Config, telemetry};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    /// Base address of the api, including the `/api` prefix.
    pub address: String,
    pub client: CharacterClient,
}

impl TestApp {
    /// Absolute url for a path below the api prefix.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.address)
    }

    pub fn resource_client(&self) -> ResourceClient {
        ResourceClient {
            inner_client: self.client.inner_client.clone(),
        }
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error");
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };

    let server = mock_api::build(&mut config).unwrap();
    tokio::spawn(server);

    let address = format!("http://127.0.0.1:{}/api", config.port);
    TestApp {
        port: config.port,
        address: address.clone(),
        client: CharacterClient {
            address,
            inner_client: reqwest::Client::new(),
        },
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// An address nothing is listening on, for exercising transport failures.
pub async fn unreachable_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::Http(code)) => assert_eq!(code, expected),
        _ => panic!("Expected ClientError::Http"),
    };
}
