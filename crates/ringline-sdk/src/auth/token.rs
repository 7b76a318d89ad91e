/*
[INPUT]:  OAuth token grants and expiration timestamps
[OUTPUT]: Token retrieval and expiration status
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When adding token refresh or changing storage strategy
*/

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};

use crate::types::TokenGrant;

/// Stored token data with metadata
#[derive(Debug, Clone)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// Thread-safe OAuth token store
#[derive(Debug, Clone)]
pub struct TokenStore {
    data: Arc<RwLock<Option<StoredToken>>>,
}

impl TokenStore {
    /// Create a new empty token store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store the outcome of a token grant
    pub fn store_grant(&self, grant: &TokenGrant) {
        let expires_at = Utc::now() + Duration::seconds(grant.expires_in as i64);
        let token = StoredToken {
            access_token: grant.access_token.clone(),
            refresh_token: grant.refresh_token.clone(),
            scope: grant.scope.clone(),
            expires_at,
        };

        let mut guard = self.data.write().unwrap();
        *guard = Some(token);
    }

    /// Get the current access token if available
    pub fn access_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|token| token.access_token.clone())
    }

    /// Get the current refresh token if the server issued one
    pub fn refresh_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().and_then(|token| token.refresh_token.clone())
    }

    /// Check if the token is expired (an empty store counts as expired)
    pub fn is_expired(&self) -> bool {
        self.expires_within(Duration::zero())
    }

    /// Check if the token expires within the given window
    pub fn expires_within(&self, window: Duration) -> bool {
        let guard = self.data.read().unwrap();
        match guard.as_ref() {
            Some(token) => Utc::now() + window > token.expires_at,
            None => true,
        }
    }

    /// Get token data if available
    pub fn token_data(&self) -> Option<StoredToken> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Clear the stored token
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
