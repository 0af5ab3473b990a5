//! Thin REST client for the Appwrite-compatible storage backend.

use anyhow::Context;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::AppwriteConfig;

const RESPONSE_FORMAT: &str = "1.5.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppwriteAuth {
    /// Server key: full access, used for admin actions.
    ApiKey,
    /// A user's session secret: acts as that user.
    Session(String),
}

#[derive(Debug, Clone)]
pub struct AppwriteClient {
    pub config: AppwriteConfig,
    auth: AppwriteAuth,
    http: reqwest::Client,
}

impl AppwriteClient {
    pub fn admin(config: AppwriteConfig) -> Self {
        Self { config, auth: AppwriteAuth::ApiKey, http: reqwest::Client::new() }
    }

    pub fn session(config: AppwriteConfig, secret: impl Into<String>) -> Self {
        Self { config, auth: AppwriteAuth::Session(secret.into()), http: reqwest::Client::new() }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.endpoint, path);
        let builder = self
            .http
            .request(method, url)
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Response-Format", RESPONSE_FORMAT);
        match &self.auth {
            AppwriteAuth::ApiKey => builder.header("X-Appwrite-Key", &self.config.api_key),
            AppwriteAuth::Session(secret) => builder.header("X-Appwrite-Session", secret),
        }
    }

    async fn send(builder: RequestBuilder) -> anyhow::Result<(StatusCode, String)> {
        let response = builder.send().await.context("storage backend request failed")?;
        let status = response.status();
        let response_txt = response.text().await?;
        Ok((status, response_txt))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> anyhow::Result<T> {
        let (status, response_txt) = Self::send(builder).await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let parsed = serde_json::from_str(&response_txt)
            .with_context(|| format!("unexpected storage backend response: {response_txt}"))?;
        Ok(parsed)
    }

    /// GET `path` with `queries[]` parameters.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, queries: &[String]) -> anyhow::Result<T> {
        let params = queries.iter().map(|q| ("queries[]", q.as_str())).collect::<Vec<_>>();
        Self::send_json(self.request(Method::GET, path).query(&params)).await
    }

    /// Like [`Self::get_json`], but an unauthorized or missing resource is `None`.
    pub async fn get_json_optional<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Option<T>> {
        let (status, response_txt) = Self::send(self.request(Method::GET, path)).await?;
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(Some(serde_json::from_str(&response_txt)?))
    }

    pub async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &serde_json::Value) -> anyhow::Result<T> {
        Self::send_json(self.request(Method::POST, path).json(body)).await
    }

    pub async fn patch_json<T: DeserializeOwned>(&self, path: &str, body: &serde_json::Value) -> anyhow::Result<T> {
        Self::send_json(self.request(Method::PATCH, path).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<()> {
        let (status, response_txt) = Self::send(self.request(Method::DELETE, path)).await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(())
    }
}
