//! This module provides a client to connect to the remote task API

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use url::Url;

use crate::error::StoreError;
use crate::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::traits::TaskStore;

/// Normalize a client-side failure (the request never yielded a usable
/// response), logging the normalized message before handing it to the caller.
///
/// Decode failures of a 2xx body take this branch as well.
fn transport_error(err: reqwest::Error) -> StoreError {
    let normalized = StoreError::Transport(err.to_string());
    log::error!("{}", normalized);
    normalized
}

/// Normalize a non-2xx response, logging the normalized message before handing
/// it to the caller. The response body becomes the error message; an empty body
/// falls back to the canonical status reason.
async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() == false {
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            body
        };
        let normalized = StoreError::Server { status: status.as_u16(), message };
        log::error!("{}", normalized);
        return Err(normalized);
    }
    Ok(response)
}

/// A task store that fetches its data from a remote REST backend
pub struct Client {
    base_url: Url,
}

impl Client {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:5173/api`).
    /// This does not start a connection.
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, suffix: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}/{}", self.base_url.path().trim_end_matches('/'), suffix));
        url
    }

    fn collection_path(&self) -> Url {
        self.url_for("tasks")
    }

    fn item_path(&self, id: TaskId) -> Url {
        self.url_for(&format!("tasks/{}", id))
    }

    fn health_path(&self) -> Url {
        self.url_for("health")
    }

    /// Probe the backend's liveness endpoint
    pub async fn health(&self) -> Result<HealthCheck, StoreError> {
        let response = reqwest::Client::new()
            .get(self.health_path())
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        response.json().await.map_err(transport_error)
    }
}

#[async_trait]
impl TaskStore for Client {
    async fn get_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let response = reqwest::Client::new()
            .get(self.collection_path())
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        response.json().await.map_err(transport_error)
    }

    async fn create_task(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let response = reqwest::Client::new()
            .post(self.collection_path())
            .json(&draft)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        response.json().await.map_err(transport_error)
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Task, StoreError> {
        let response = reqwest::Client::new()
            .patch(self.item_path(id))
            .json(&patch)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        response.json().await.map_err(transport_error)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError> {
        let response = reqwest::Client::new()
            .delete(self.item_path(id))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }
}

/// What the backend's health endpoint reports
#[derive(Clone, Debug, Deserialize)]
pub struct HealthCheck {
    status: String,
    database: String,
    timestamp: String,
}

impl HealthCheck {
    pub fn status(&self) -> &str    { &self.status }
    pub fn database(&self) -> &str  { &self.database }
    pub fn timestamp(&self) -> &str { &self.timestamp }
}
