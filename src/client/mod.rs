//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{BearerToken, MessageId, SendEmail, SendSms};
use crate::transport::{self, EMAIL_PATH, SMS_PATH};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    url: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.post(request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            let response = builder.body(request.body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`RavenClient`].
///
/// Every failure is returned as-is; the client never retries.
pub enum RavenError {
    /// The request payload could not be encoded as JSON. No request was sent.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Request construction or HTTP transport failure (DNS, connect, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Raven answered with a status other than 200/201.
    ///
    /// The message is the raw response body, verbatim.
    #[error("{body}")]
    Remote { status: u16, body: String },

    /// A success status was returned but the body is not `{"MessageId": "..."}`.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

impl RavenError {
    /// HTTP status of a [`RavenError::Remote`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`RavenClient`].
///
/// Use this when you need a request timeout or a custom user-agent.
pub struct RavenClientBuilder {
    base_url: String,
    token: BearerToken,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RavenClientBuilder {
    /// Create a builder with no timeout/user-agent override.
    pub fn new(base_url: impl Into<String>, token: impl Into<BearerToken>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`RavenClient`].
    pub fn build(self) -> Result<RavenClient, RavenError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| RavenError::Transport(Box::new(err)))?;

        Ok(RavenClient {
            base_url: self.base_url,
            token: self.token,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Raven messaging client.
///
/// Sends emails to `{base_url}messaging/email` and text messages to
/// `{base_url}messaging/sms`, authenticating with a bearer token. The base URL is
/// joined with the endpoint path by plain concatenation, so it should end with `/`.
///
/// One HTTP connection pool is shared by all calls and all clones of a client.
/// Calls are independent and may run concurrently.
pub struct RavenClient {
    base_url: String,
    token: BearerToken,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for RavenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RavenClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl RavenClient {
    /// Create a client. Performs no I/O and no validation; a bad base URL or
    /// token surfaces as an error from the first call.
    ///
    /// For more customization, use [`RavenClient::builder`].
    pub fn new(base_url: impl Into<String>, token: impl Into<BearerToken>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        base_url: impl Into<String>,
        token: impl Into<BearerToken>,
    ) -> RavenClientBuilder {
        RavenClientBuilder::new(base_url, token)
    }

    /// Base URL the endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Queue an email and return the id Raven assigned to it.
    ///
    /// Default templating and message encryption are always disabled.
    ///
    /// Errors:
    /// - [`RavenError::Transport`] when the request cannot be sent,
    /// - [`RavenError::Remote`] for any status other than 200/201,
    /// - [`RavenError::Parse`] when a success body has no usable `MessageId`.
    pub async fn send_mail(
        &self,
        recipient: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<MessageId, RavenError> {
        let request = SendEmail::new(recipient, from, subject, body);
        self.send_email_request(&request).await
    }

    /// Queue a prebuilt [`SendEmail`]. Same contract as [`RavenClient::send_mail`].
    pub async fn send_email_request(&self, request: &SendEmail) -> Result<MessageId, RavenError> {
        let body = transport::encode_send_email_json(request).map_err(RavenError::Serialize)?;
        self.post_message(EMAIL_PATH, body).await
    }

    /// Queue a text message and return the id Raven assigned to it.
    ///
    /// Errors are reported exactly as for [`RavenClient::send_mail`].
    pub async fn send_sms(
        &self,
        phone: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<MessageId, RavenError> {
        let request = SendSms::new(phone, text);
        self.send_sms_request(&request).await
    }

    /// Queue a prebuilt [`SendSms`]. Same contract as [`RavenClient::send_sms`].
    pub async fn send_sms_request(&self, request: &SendSms) -> Result<MessageId, RavenError> {
        let body = transport::encode_send_sms_json(request).map_err(RavenError::Serialize)?;
        self.post_message(SMS_PATH, body).await
    }

    async fn post_message(&self, path: &str, body: Vec<u8>) -> Result<MessageId, RavenError> {
        let url = transport::endpoint_url(&self.base_url, path);
        tracing::debug!(endpoint = %url, bytes = body.len(), "sending request");

        let response = self
            .http
            .post(HttpRequest {
                url,
                headers: transport::request_headers(&self.token),
                body,
            })
            .await
            .map_err(RavenError::Transport)?;

        tracing::debug!(endpoint = path, status = response.status, "received response");

        if !matches!(response.status, 200 | 201) {
            return Err(RavenError::Remote {
                status: response.status,
                body: response.body,
            });
        }

        transport::decode_message_id_json_response(&response.body)
            .map_err(|err| RavenError::Parse(Box::new(err)))
    }
}
