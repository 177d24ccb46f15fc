//! Typed HTTP client for the advertisement API

use super::common::{ApiVersion, paths};
use super::config::ClientConfig;
use adboard::{AdboardError, Advertisement, AdvertisementPayload, Statistics};
use log::{debug, trace};
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Thin wrapper over `reqwest::Client` bound to one service base URL.
///
/// The raw methods hand back the `Response` untouched so callers can assert on
/// any status. The typed methods expect the success contract and turn anything
/// else into [`AdboardError::UnexpectedStatus`].
#[derive(Debug, Clone)]
pub struct AdboardClient {
    client: reqwest::Client,
    base_url: String,
}

impl AdboardClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AdboardError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdboardError::transport("build http client", e))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // RAW CALLS
    // =========================================================================

    pub async fn health(&self) -> Result<Response, AdboardError> {
        let url = self.url(paths::HEALTH);
        trace!("GET {url}");
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdboardError::transport("health check", e))
    }

    /// Accepts any serializable body so malformed payloads can be sent as-is.
    pub async fn create_item<T>(&self, payload: &T) -> Result<Response, AdboardError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.url(paths::CREATE_ITEM);
        trace!("POST {url}");
        self.client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| AdboardError::transport("create item", e))
    }

    pub async fn get_item(&self, id: &str) -> Result<Response, AdboardError> {
        let url = self.url(&paths::item(id));
        trace!("GET {url}");
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdboardError::transport("get item", e))
    }

    pub async fn list_seller_items(
        &self,
        seller_id: impl fmt::Display,
    ) -> Result<Response, AdboardError> {
        let url = self.url(&paths::seller_items(&seller_id.to_string()));
        trace!("GET {url}");
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdboardError::transport("list seller items", e))
    }

    pub async fn get_statistics(
        &self,
        version: ApiVersion,
        id: &str,
    ) -> Result<Response, AdboardError> {
        let url = self.url(&paths::statistics(version, id));
        trace!("GET {url}");
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdboardError::transport("get statistics", e))
    }

    pub async fn delete_item(&self, id: &str) -> Result<Response, AdboardError> {
        let url = self.url(&paths::delete_item(id));
        trace!("DELETE {url}");
        self.client
            .delete(&url)
            .send()
            .await
            .map_err(|e| AdboardError::transport("delete item", e))
    }

    // =========================================================================
    // TYPED CALLS
    // =========================================================================

    pub async fn create_advertisement(
        &self,
        payload: &AdvertisementPayload,
    ) -> Result<Advertisement, AdboardError> {
        let response = self.create_item(payload).await?;
        let advertisement: Advertisement =
            expect_json(response, StatusCode::OK, "create item").await?;
        debug!(
            "Created advertisement {} for seller {}",
            advertisement.id, advertisement.seller_id
        );
        Ok(advertisement)
    }

    pub async fn fetch_advertisement(&self, id: &str) -> Result<Vec<Advertisement>, AdboardError> {
        let response = self.get_item(id).await?;
        expect_json(response, StatusCode::OK, "get item").await
    }

    pub async fn fetch_seller_advertisements(
        &self,
        seller_id: impl fmt::Display,
    ) -> Result<Vec<Advertisement>, AdboardError> {
        let response = self.list_seller_items(seller_id).await?;
        expect_json(response, StatusCode::OK, "list seller items").await
    }

    pub async fn fetch_statistics(
        &self,
        version: ApiVersion,
        id: &str,
    ) -> Result<Vec<Statistics>, AdboardError> {
        let response = self.get_statistics(version, id).await?;
        expect_json(response, StatusCode::OK, "get statistics").await
    }

    pub async fn remove_advertisement(&self, id: &str) -> Result<(), AdboardError> {
        let response = self.delete_item(id).await?;
        expect_status(response, StatusCode::OK, "delete item").await?;
        debug!("Deleted advertisement {id}");
        Ok(())
    }
}

/// Checks the status and returns the body text.
pub async fn expect_status(
    response: Response,
    expected: StatusCode,
    context: &str,
) -> Result<String, AdboardError> {
    let actual = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AdboardError::decode(context, e))?;
    if actual != expected {
        return Err(AdboardError::UnexpectedStatus {
            context: context.to_string(),
            expected: expected.as_u16(),
            actual: actual.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Checks the status and decodes the body as `T`.
pub async fn expect_json<T>(
    response: Response,
    expected: StatusCode,
    context: &str,
) -> Result<T, AdboardError>
where
    T: DeserializeOwned,
{
    let body = expect_status(response, expected, context).await?;
    serde_json::from_str(&body).map_err(|e| AdboardError::decode(context, format!("{e}: {body}")))
}
