//! Authorization code exchange against the BigCommerce token endpoint.

use crate::auth::oauth::OAuthError;
use crate::auth::AuthSession;
use crate::config::{AppConfig, ClientId, ClientSecret, TokenUrl};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Grant type for the authorization code exchange.
const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";

/// Library version sent in the `User-Agent` header.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exchanges an authorization code for an [`AuthSession`].
#[async_trait]
pub trait OAuthClient: Send + Sync {
    /// Exchanges the values BigCommerce sent to the install callback.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::TokenExchangeFailed`] on a non-success status and
    /// [`OAuthError::Transport`] on network failures.
    async fn exchange(
        &self,
        code: &str,
        context: &str,
        scope: &str,
        redirect_uri: &str,
    ) -> Result<AuthSession, OAuthError>;
}

#[async_trait]
impl<T: OAuthClient + ?Sized> OAuthClient for Arc<T> {
    async fn exchange(
        &self,
        code: &str,
        context: &str,
        scope: &str,
        redirect_uri: &str,
    ) -> Result<AuthSession, OAuthError> {
        (**self).exchange(code, context, scope, redirect_uri).await
    }
}

/// Request body for the authorization code exchange.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    context: &'a str,
    scope: &'a str,
    grant_type: &'a str,
    redirect_uri: &'a str,
}

/// [`OAuthClient`] that posts to the BigCommerce token endpoint.
///
/// The client ID and secret are bound at construction. Each exchange is a
/// single `POST` with a JSON body; the successful response is returned as an
/// [`AuthSession`] without further validation.
///
/// No timeout or retry is applied. To bound the exchange, build the client
/// with [`BigCommerceOAuthClient::with_http_client`] and a configured
/// `reqwest::Client`.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_app_auth::{AppConfig, ClientId, ClientSecret};
/// use bigcommerce_app_auth::auth::oauth::{BigCommerceOAuthClient, OAuthClient};
///
/// let config = AppConfig::builder()
///     .client_id(ClientId::new("client-id").unwrap())
///     .client_secret(ClientSecret::new("client-secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = BigCommerceOAuthClient::new(&config);
/// let session = client
///     .exchange("code", "stores/abc123", "store_v2_products", "https://app.example.com/auth")
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct BigCommerceOAuthClient {
    client_id: ClientId,
    client_secret: ClientSecret,
    token_url: TokenUrl,
    user_agent: String,
    http: reqwest::Client,
}

impl BigCommerceOAuthClient {
    /// Creates a client from the app configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Creates a client that sends requests through `http`.
    #[must_use]
    pub fn with_http_client(config: &AppConfig, http: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent()
            .map_or(String::new(), |prefix| format!("{prefix} | "));

        Self {
            client_id: config.client_id().clone(),
            client_secret: config.client_secret().clone(),
            token_url: config.token_url().clone(),
            user_agent: format!("{user_agent_prefix}bigcommerce-app-auth v{LIBRARY_VERSION}"),
            http,
        }
    }

    /// Returns the token endpoint this client posts to.
    #[must_use]
    pub const fn token_url(&self) -> &TokenUrl {
        &self.token_url
    }
}

#[async_trait]
impl OAuthClient for BigCommerceOAuthClient {
    async fn exchange(
        &self,
        code: &str,
        context: &str,
        scope: &str,
        redirect_uri: &str,
    ) -> Result<AuthSession, OAuthError> {
        let request_body = TokenRequest {
            client_id: self.client_id.as_ref(),
            client_secret: self.client_secret.as_ref(),
            code,
            context,
            scope,
            grant_type: AUTHORIZATION_CODE_GRANT_TYPE,
            redirect_uri,
        };

        tracing::debug!(
            "Exchanging authorization code at {} for {}",
            self.token_url.as_ref(),
            context
        );

        let response = self
            .http
            .post(self.token_url.as_ref())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "BigCommerce token exchange for {} failed with status {}",
                context,
                status
            );
            return Err(OAuthError::TokenExchangeFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json::<AuthSession>().await?)
    }
}

// Verify the client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceOAuthClient>();
};
