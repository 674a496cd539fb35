//! REST API client for the asset-management backend
//!
//! Provides typed HTTP requests using gloo-net. Cross-cutting policy lives
//! here once, not at call sites: a bearer token is attached to every request
//! when present, and any 401 response triggers the injected unauthorized hook
//! before the call resolves as an error. All other failures propagate to the
//! caller unchanged; there is no retry or backoff.

use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::session;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401; the unauthorized hook has already run by the time this surfaces.
    #[error("session expired")]
    Unauthorized,

    /// Any other non-2xx response. `message` is the raw response body, so
    /// server-provided texts (e.g. 409 conflicts) can be shown verbatim.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
}

impl ApiError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Status { status: 403, .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Status { status: 409, .. })
    }

    /// The server's own message, when it sent a non-empty body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Shared HTTP client. Cheap to clone; all clones use the same base URL and
/// unauthorized hook.
#[derive(Clone)]
pub struct Api {
    base_url: Rc<str>,
    on_unauthorized: Rc<dyn Fn()>,
}

impl Api {
    /// Create a client with an explicit unauthorized hook. The hook is
    /// injected rather than hard-wired so the 401 policy is testable and the
    /// redirect stays out of this module.
    pub fn new(base_url: impl Into<String>, on_unauthorized: impl Fn() + 'static) -> Self {
        Self {
            base_url: Rc::from(base_url.into()),
            on_unauthorized: Rc::new(on_unauthorized),
        }
    }

    /// Client wired with the standard policy: clear the stored token and
    /// force-navigate to the login route.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_base(), session::force_login_redirect)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match session::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Central response policy: 401 fires the hook, other non-2xx become
    /// [`ApiError::Status`] carrying the body verbatim.
    async fn check(&self, resp: Response) -> Result<Response, ApiError> {
        if resp.status() == 401 {
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let status = resp.status();
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }
        Ok(resp)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.authorize(Request::get(&self.url(path))).send().await?;
        Ok(self.check(resp).await?.json().await?)
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Request::get(&self.url(path))
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        let resp = self.authorize(builder).send().await?;
        Ok(self.check(resp).await?.json().await?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .authorize(Request::post(&self.url(path)))
            .json(body)?
            .send()
            .await?;
        Ok(self.check(resp).await?.json().await?)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .authorize(Request::put(&self.url(path)))
            .json(body)?
            .send()
            .await?;
        Ok(self.check(resp).await?.json().await?)
    }

    /// PUT with query parameters and no body (the status-toggle endpoint).
    pub async fn put_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Request::put(&self.url(path))
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        let resp = self.authorize(builder).send().await?;
        Ok(self.check(resp).await?.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await?;
        self.check(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let api = Api::new("http://localhost:8080/api/v1", || {});
        assert_eq!(
            api.url("/assets/stats"),
            "http://localhost:8080/api/v1/assets/stats"
        );
    }

    #[test]
    fn forbidden_and_conflict_predicates() {
        let forbidden = ApiError::Status {
            status: 403,
            message: String::new(),
        };
        assert!(forbidden.is_forbidden());
        assert!(!forbidden.is_conflict());
        assert_eq!(forbidden.server_message(), None);

        let conflict = ApiError::Status {
            status: 409,
            message: "You cannot disable your own account".into(),
        };
        assert!(conflict.is_conflict());
        assert_eq!(
            conflict.server_message(),
            Some("You cannot disable your own account")
        );
    }
}
