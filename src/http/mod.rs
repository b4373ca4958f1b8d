pub mod error;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::AppConfig,
    model::{Song, SongFormData, SongId, Statistics},
};

pub use error::{ApiError, Result};

/// The catalog's REST surface. Side-effect handlers only talk to this trait.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_songs(&self) -> Result<Vec<Song>>;
    async fn fetch_song(&self, id: &SongId) -> Result<Song>;
    async fn create_song(&self, draft: &SongFormData) -> Result<Song>;
    async fn update_song(&self, id: &SongId, draft: &SongFormData) -> Result<Song>;
    async fn delete_song(&self, id: &SongId) -> Result<()>;
    async fn fetch_statistics(&self) -> Result<Statistics>;
}

pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_timeout(&config.api_url, config.request_timeout)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let mut builder = Client::builder().user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "api response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        Ok(self.send(request).await?.json().await?)
    }
}

#[async_trait]
impl CatalogApi for ApiService {
    async fn fetch_songs(&self) -> Result<Vec<Song>> {
        self.send_json(self.client.get(self.url("/songs"))).await
    }

    async fn fetch_song(&self, id: &SongId) -> Result<Song> {
        self.send_json(self.client.get(self.url(&format!("/songs/{id}"))))
            .await
    }

    async fn create_song(&self, draft: &SongFormData) -> Result<Song> {
        self.send_json(self.client.post(self.url("/songs")).json(draft))
            .await
    }

    async fn update_song(&self, id: &SongId, draft: &SongFormData) -> Result<Song> {
        self.send_json(
            self.client
                .put(self.url(&format!("/songs/{id}")))
                .json(draft),
        )
        .await
    }

    async fn delete_song(&self, id: &SongId) -> Result<()> {
        self.send(self.client.delete(self.url(&format!("/songs/{id}"))))
            .await?;
        Ok(())
    }

    async fn fetch_statistics(&self) -> Result<Statistics> {
        self.send_json(self.client.get(self.url("/statistics"))).await
    }
}
