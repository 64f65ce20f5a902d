use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Method, Request, StatusCode, Uri, header};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::Serialize;
use tracing::{debug, warn};

use shared::types::api::{ApiResponse, codes};
use shared::types::portal_config::ApiConfig;
use shared::types::{CreateAdminRequest, VerifyOutcome};

use super::{AdminApi, ApiError};

/// Backend routes, relative to the configured origin.
const CREATE_ADMIN_PATH: &str = "/superadmin/create_admin";
const VERIFY_EMAIL_PATH: &str = "/auth/verify-email";
const RESEND_VERIFICATION_PATH: &str = "/auth/resend-verification";

#[derive(Serialize)]
struct TokenPayload<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct EmailPayload<'a> {
    email: &'a str,
}

/// [`AdminApi`] over HTTP/1 against the hotel backend.
pub struct HttpAdminApi {
    client: Client<HttpConnector, Full<Bytes>>,
    base_url: String,
    timeout: Duration,
}

impl HttpAdminApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            base_url: config
                .resolved_base_url()
                .trim_end_matches('/')
                .to_string(),
            timeout: config.timeout(),
        }
    }

    /// POST a JSON body and hand back the status plus the raw response
    /// bytes. The configured timeout bounds the whole exchange, headers
    /// and body both.
    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(StatusCode, Bytes), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let uri: Uri = url.parse().map_err(|_| ApiError::InvalidUrl(url.clone()))?;

        let payload = serde_json::to_vec(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(Full::new(Bytes::from(payload)))
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        debug!("POST {}", url);

        let exchange = async {
            let response = self
                .client
                .request(request)
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status();
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .to_bytes();

            Ok((status, body))
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| ApiError::Timeout(self.timeout))?
    }

    /// Decode the status-tagged envelope; any other body shape is an
    /// unexpected response.
    fn parse_envelope(status: StatusCode, body: &[u8]) -> Result<ApiResponse, ApiError> {
        serde_json::from_slice::<ApiResponse>(body).map_err(|e| {
            warn!("Unparseable response from the admin api ({}): {}", status, e);
            ApiError::Unexpected {
                status: status.as_u16(),
            }
        })
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn create_super_admin(&self, request: &CreateAdminRequest) -> Result<(), ApiError> {
        let (status, body) = self.post_json(CREATE_ADMIN_PATH, request).await?;
        match Self::parse_envelope(status, &body)? {
            ApiResponse::Success { .. } => Ok(()),
            ApiResponse::Error { code, message } => Err(ApiError::Rejected { code, message }),
        }
    }

    async fn verify_email(&self, token: &str) -> Result<VerifyOutcome, ApiError> {
        let (status, body) = self
            .post_json(VERIFY_EMAIL_PATH, &TokenPayload { token })
            .await?;
        match Self::parse_envelope(status, &body)? {
            ApiResponse::Success { .. } => Ok(VerifyOutcome::Valid),
            ApiResponse::Error { code, .. } if code == codes::TOKEN_EXPIRED => {
                Ok(VerifyOutcome::Expired)
            }
            ApiResponse::Error { code, .. } => {
                debug!("Token rejected with code {}", code);
                Ok(VerifyOutcome::Invalid)
            }
        }
    }

    async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        let (status, body) = self
            .post_json(RESEND_VERIFICATION_PATH, &EmailPayload { email })
            .await?;
        match Self::parse_envelope(status, &body)? {
            ApiResponse::Success { .. } => Ok(()),
            ApiResponse::Error { code, message } => Err(ApiError::Rejected { code, message }),
        }
    }
}
