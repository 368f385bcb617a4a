//! HTTP client for the upstream lessons API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{LessonApi, LessonsPage, Reply, StepsPage};
use crate::error::{Error, Result};

// == HTTP Lesson API ==
/// `LessonApi` backed by reqwest.
///
/// Every request carries the configured timeout; a timed-out request surfaces
/// as `Error::Upstream`.
#[derive(Debug, Clone)]
pub struct HttpLessonApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLessonApi {
    /// Creates a client rooted at `base_url` (for example `https://stepik.org`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Upstream(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Reply<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "upstream request");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "upstream request failed");
            Error::from(e)
        })?;

        match response.status() {
            StatusCode::OK => {
                let body = response.json::<T>().await.map_err(|e| {
                    warn!(%url, error = %e, "upstream body could not be decoded");
                    Error::from(e)
                })?;
                Ok(Reply::Ok(body))
            }
            StatusCode::FORBIDDEN => Ok(Reply::Forbidden),
            status => {
                debug!(%url, status = status.as_u16(), "upstream returned non-success status");
                Ok(Reply::Status(status.as_u16()))
            }
        }
    }
}

#[async_trait]
impl LessonApi for HttpLessonApi {
    async fn fetch_lesson(&self, lesson_id: &str) -> Result<Reply<LessonsPage>> {
        self.get_json(&format!("/api/lessons/{}", lesson_id)).await
    }

    async fn fetch_step(&self, step_id: u64) -> Result<Reply<StepsPage>> {
        self.get_json(&format!("/api/steps/{}", step_id)).await
    }
}
