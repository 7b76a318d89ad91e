/*
[INPUT]:  OAuth client credentials and HTTP client
[OUTPUT]: Managed access tokens, refreshed before they lapse
[POS]:    Auth layer - orchestrates the token grant lifecycle
[UPDATE]: When grant flows or caching rules change
*/

use chrono::Duration;

use crate::auth::{Credentials, TokenStore};
use crate::http::{Result, RinglineClient, RinglineError};
use crate::types::TokenGrant;

/// Tokens within this window of expiry are replaced early, so a request
/// never leaves with a token about to lapse mid-flight.
const EXPIRY_SKEW_SECONDS: i64 = 30;

/// OAuth application credentials
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub scope: Option<String>,
}

impl OAuthConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scope: None,
        }
    }
}

/// Manages the client-credentials grant lifecycle
#[derive(Debug)]
pub struct OAuthManager {
    client: RinglineClient,
    config: OAuthConfig,
    token_store: TokenStore,
}

impl OAuthManager {
    pub fn new(client: RinglineClient, config: OAuthConfig) -> Self {
        Self {
            client,
            config,
            token_store: TokenStore::new(),
        }
    }

    /// Get the token store
    pub fn token_store(&self) -> &TokenStore {
        &self.token_store
    }

    /// Request a fresh grant with the configured client credentials
    pub async fn authenticate(&self) -> Result<TokenGrant> {
        let grant = self
            .client
            .request_token(
                &self.config.client_id,
                &self.config.client_secret,
                self.config.scope.as_deref(),
            )
            .await?;
        self.token_store.store_grant(&grant);
        Ok(grant)
    }

    /// Replace the current token, via the refresh grant when the server
    /// issued a refresh token and from scratch otherwise
    pub async fn refresh(&self) -> Result<TokenGrant> {
        match self.token_store.refresh_token() {
            Some(refresh_token) => {
                let grant = self
                    .client
                    .refresh_token_grant(
                        &self.config.client_id,
                        &self.config.client_secret,
                        &refresh_token,
                    )
                    .await?;
                self.token_store.store_grant(&grant);
                Ok(grant)
            }
            None => self.authenticate().await,
        }
    }

    /// Current credentials without touching the network
    pub fn credentials(&self) -> Result<Credentials> {
        if self.token_store.is_expired() {
            return Err(RinglineError::TokenExpired);
        }
        match self.token_store.access_token() {
            Some(token) => Ok(Credentials::AccessToken(token)),
            None => Err(RinglineError::TokenExpired),
        }
    }

    /// Get a bearer token, minting or refreshing one when needed
    pub async fn bearer(&self) -> Result<String> {
        if !self
            .token_store
            .expires_within(Duration::seconds(EXPIRY_SKEW_SECONDS))
        {
            if let Some(token) = self.token_store.access_token() {
                return Ok(token);
            }
        }

        let grant = self.refresh().await?;
        Ok(grant.access_token)
    }

    /// Clone the inner client with a valid access token as its credentials
    pub async fn authorized_client(&self) -> Result<RinglineClient> {
        let token = self.bearer().await?;
        let mut client = self.client.clone();
        client.set_credentials(Credentials::AccessToken(token));
        Ok(client)
    }
}
