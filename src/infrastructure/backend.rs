use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use thiserror::Error;

use crate::cache::CachedUser;
use crate::config::Config;
use crate::session::SESSION_COOKIE;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// 后端 API 客户端
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        Self::new(config.api_url_server.clone(), config.api_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 以会话 Cookie 调用 `/users/me`，非 2xx 返回 `None`
    pub async fn fetch_current_user(&self, token: &str) -> Result<Option<CachedUser>, BackendError> {
        let res = self
            .http
            .get(format!("{}/users/me", self.base_url))
            .header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            if status != StatusCode::UNAUTHORIZED {
                tracing::warn!("backend /users/me returned {}", status);
            }
            return Ok(None);
        }

        Ok(Some(res.json::<CachedUser>().await?))
    }
}
