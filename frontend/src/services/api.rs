use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ApiBody, ApiError, AuthUser, LoginRequest, SignUpRequest};

use crate::services::session::{AuthTokens, Session};

/// API client for communicating with the backend server. Every method
/// funnels failures through the response normalizer and returns a flat
/// `ApiError`; callers never see raw transport errors.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:3000".to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            session: Session,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Sign up a new account. Token headers from the response are
    /// persisted in the session store.
    pub async fn sign_up(&self, payload: &SignUpRequest) -> Result<AuthUser, ApiError> {
        self.authenticate("/api/v1/auth", serde_json::to_value(payload))
            .await
    }

    /// Log in to an existing account; same token header contract as
    /// sign-up.
    pub async fn sign_in(&self, payload: &LoginRequest) -> Result<AuthUser, ApiError> {
        self.authenticate("/api/v1/auth/sign_in", serde_json::to_value(payload))
            .await
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    async fn authenticate(
        &self,
        path: &str,
        payload: Result<Value, serde_json::Error>,
    ) -> Result<AuthUser, ApiError> {
        let payload = payload.map_err(|_| ApiError::unexpected())?;
        let request = self
            .apply_headers(Request::post(&self.url(path)))
            .json(&payload)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {e}")))?;

        self.capture_tokens(&response);

        let body = self.read_body(response).await?;
        decode(body.into_data()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach stored auth tokens and the active locale to a request.
    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let mut request = request.header("Accept-Language", self.session.locale().code());
        if let Some(tokens) = self.session.get() {
            request = request
                .header("access-token", &tokens.access_token)
                .header("client", &tokens.client)
                .header("uid", &tokens.uid);
            if let Some(expiry) = &tokens.expiry {
                request = request.header("expiry", expiry);
            }
            if let Some(token_type) = &tokens.token_type {
                request = request.header("token-type", token_type);
            }
        }
        request
    }

    fn capture_tokens(&self, response: &Response) {
        let headers = response.headers();
        let (Some(access_token), Some(client), Some(uid)) = (
            headers.get("access-token"),
            headers.get("client"),
            headers.get("uid"),
        ) else {
            return;
        };
        self.session.set(&AuthTokens {
            access_token,
            client,
            uid,
            expiry: headers.get("expiry"),
            token_type: headers.get("token-type"),
        });
    }

    pub(crate) async fn get_body(&self, path: &str) -> Result<ApiBody, ApiError> {
        let response = self
            .apply_headers(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {e}")))?;
        self.read_body(response).await
    }

    pub(crate) async fn post_body(&self, path: &str, payload: &Value) -> Result<ApiBody, ApiError> {
        self.send_json(Request::post(&self.url(path)), payload).await
    }

    pub(crate) async fn put_body(&self, path: &str, payload: &Value) -> Result<ApiBody, ApiError> {
        self.send_json(Request::put(&self.url(path)), payload).await
    }

    pub(crate) async fn delete_body(&self, path: &str) -> Result<ApiBody, ApiError> {
        let response = self
            .apply_headers(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {e}")))?;
        self.read_body(response).await
    }

    async fn send_json(
        &self,
        request: RequestBuilder,
        payload: &Value,
    ) -> Result<ApiBody, ApiError> {
        let request = self
            .apply_headers(request)
            .json(payload)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Network error: {e}")))?;
        self.read_body(response).await
    }

    /// Decode a raw response into the uniform body contract. HTTP error
    /// statuses are normalized through the legacy-aware error mapping.
    async fn read_body(&self, response: Response) -> Result<ApiBody, ApiError> {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|_| ApiError::unexpected())?
        };

        if !(200..300).contains(&status) {
            return Err(ApiError::from_error_body(&body));
        }
        ApiBody::decode(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialize a normalized payload into its typed form; a payload the
/// type does not recognize is an unexpected shape.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|_| ApiError::unexpected())
}
