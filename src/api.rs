//! Remote Item Store Client
//!
//! Thin typed wrapper over the PostgREST interface of the hosted `items`
//! table. Every operation is scoped to the session's list code; callers only
//! log errors and surface a per-operation message.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Item, NewItem};

/// Failures of a single store operation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store rejected the request with status {0}")]
    Status(u16),
}

/// Client for the remote `items` table. Cheap to clone.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    base_url: String,
    anon_key: String,
    list_code: String,
}

impl StoreClient {
    pub fn new(base_url: &str, anon_key: &str, list_code: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            list_code: list_code.to_string(),
        }
    }

    /// Client for the session's configured store and list code.
    ///
    /// The underlying fetch handle is not `Send` on wasm, so UI closures
    /// build the client inside their spawned future instead of capturing it.
    pub fn from_config() -> Self {
        Self::new(
            crate::config::store_url(),
            crate::config::store_anon_key(),
            crate::config::list_code(),
        )
    }

    pub fn list_code(&self) -> &str {
        &self.list_code
    }

    /// All rows for the session's list code, most recently created first
    pub async fn fetch_items(&self) -> Result<Vec<Item>, StoreError> {
        let url = format!(
            "{}?select=*&list_code=eq.{}&order=created_at.desc",
            self.items_url(),
            encode(&self.list_code),
        );
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json::<Vec<Item>>().await?)
    }

    /// Insert one row. The store assigns `id` and `created_at`; the caller
    /// re-fetches rather than reading them back here.
    pub async fn insert_item(&self, payload: &NewItem) -> Result<(), StoreError> {
        let response = self
            .http
            .post(self.items_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(payload)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// Delete one row by id. Deleting an id that no longer exists is not an
    /// error at the store level.
    pub async fn delete_item(&self, id: Uuid) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.items_url(), id);
        let response = self
            .http
            .delete(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// Delete every row carrying the session's list code
    pub async fn clear_list(&self) -> Result<(), StoreError> {
        let url = format!(
            "{}?list_code=eq.{}",
            self.items_url(),
            encode(&self.list_code),
        );
        let response = self
            .http
            .delete(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    fn items_url(&self) -> String {
        format!("{}/rest/v1/items", self.base_url)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status(response.status().as_u16()))
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
