//! API Layer - HTTP Transport
//!
//! Thin reqwest wrapper shared by all entity adapters. Responsible for auth
//! headers, error normalization and body decoding; it knows nothing about
//! entities or pagination.

use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::{ApiConfig, Session};
use crate::domain::{ApiError, ApiResult};

/// Authenticated HTTP client for one backend session
pub struct HttpClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session,
}

impl HttpClient {
    pub fn new(config: ApiConfig, session: Session) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Fetch { message: e.to_string() })?;
        Ok(Self { http, config, session })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request, mapping transport failures and non-success statuses
    /// into the error taxonomy
    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| ApiError::Fetch { message: e.to_string() })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), status.canonical_reason(), &body);
        log::warn!("backend request failed: {}", err);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Fetch { message: format!("invalid response body: {}", e) })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        log::debug!("GET {} {:?}", path, query);
        let response = self.execute(self.http.get(self.url(path)).query(query)).await?;
        Self::decode(response).await
    }

    /// GET where only the status matters (e.g. triggering a download)
    pub async fn get_ok(&self, path: &str) -> ApiResult<()> {
        self.execute(self.http.get(self.url(path))).await?;
        Ok(())
    }

    pub async fn patch_json<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        log::debug!("PATCH {}", path);
        self.execute(self.http.patch(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        log::debug!("DELETE {}", path);
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// DELETE with a JSON body, used by batch endpoints taking `{ids: [...]}`
    pub async fn delete_json<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        log::debug!("DELETE {} (bulk)", path);
        self.execute(self.http.delete(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ApiResult<T> {
        log::debug!("POST {} (multipart)", path);
        let response = self.execute(self.http.post(self.url(path)).multipart(form)).await?;
        Self::decode(response).await
    }
}
