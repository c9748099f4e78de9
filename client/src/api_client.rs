use crate::{Character, Sample};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Plain JSON reads from arbitrary URLs.
#[derive(Clone, Default)]
pub struct ResourceClient {
    pub inner_client: reqwest::Client,
}

impl ResourceClient {
    async fn get(&self, url: &str) -> ReqwestResult {
        self.inner_client.get(url).send().await
    }

    /// GET `url` and parse the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ClientError> {
        let response = self.get(url).await?;
        ok_body(response).await
    }
}

/// A client for the character API.
#[derive(Clone)]
pub struct CharacterClient {
    /// Base address including the api prefix, eg
    /// `https://rickandmortyapi.com/api`.
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl CharacterClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }
}

/// Methods on the character API
impl CharacterClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Fetch the characters for `ids`.
    ///
    /// The API answers a single id with a bare object rather than a list, so
    /// that case is wrapped here.
    pub async fn characters(
        &self,
        ids: &Sample,
    ) -> Result<Vec<Character>, ClientError> {
        let response = self.empty_get(&format!("character/{ids}")).await?;
        if ids.len() == 1 {
            let character: Character = ok_body(response).await?;
            return Ok(vec![character]);
        }
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("Error: {0}")]
    Http(StatusCode),
    /// The request never produced a response.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::Http(response.status()));
    }
    response.json::<T>().await.map_err(ClientError::Decode)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::Http(response.status()));
    }
    Ok(())
}
