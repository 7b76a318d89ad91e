/*
[INPUT]:  OAuth client credentials, refresh tokens, bearer tokens
[OUTPUT]: Token grants and token metadata
[POS]:    HTTP layer - OAuth token endpoints (form-encoded, no envelope)
[UPDATE]: When adding grant types or changing token response format
*/

use reqwest::Method;

use crate::http::{Result, RinglineClient};
use crate::types::{GrantType, TokenGrant, TokenInfo};

impl RinglineClient {
    /// Exchange client credentials for an access token
    ///
    /// POST /oauth/token
    pub async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
        scope: Option<&str>,
    ) -> Result<TokenGrant> {
        let mut form = vec![("grant_type", grant_value(GrantType::ClientCredentials))];
        if let Some(scope) = scope {
            form.push(("scope", scope.to_string()));
        }

        let builder = self
            .plain_request(Method::POST, "/oauth/token")?
            .basic_auth(client_id, Some(client_secret))
            .form(&form);
        self.send_json(builder).await
    }

    /// Exchange a refresh token for a fresh access token
    ///
    /// POST /oauth/token
    pub async fn refresh_token_grant(
        &self,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<TokenGrant> {
        let form = vec![
            ("grant_type", grant_value(GrantType::RefreshToken)),
            ("refresh_token", refresh_token.to_string()),
        ];

        let builder = self
            .plain_request(Method::POST, "/oauth/token")?
            .basic_auth(client_id, Some(client_secret))
            .form(&form);
        self.send_json(builder).await
    }

    /// Describe the bearer token presented on this request
    ///
    /// GET /oauth/token
    pub async fn describe_token(&self) -> Result<TokenInfo> {
        let builder = self.api_request(Method::GET, "/oauth/token")?;
        self.send_json(builder).await
    }

    /// Introspect an arbitrary token as a resource server
    ///
    /// POST /oauth/introspect
    pub async fn introspect_token(
        &self,
        client_id: &str,
        client_secret: &str,
        token: &str,
    ) -> Result<TokenInfo> {
        let form = vec![("token", token.to_string())];
        let builder = self
            .plain_request(Method::POST, "/oauth/introspect")?
            .basic_auth(client_id, Some(client_secret))
            .form(&form);
        self.send_json(builder).await
    }
}

/// Render a grant type through its serde wire name.
fn grant_value(grant: GrantType) -> String {
    serde_json::to_string(&grant)
        .unwrap_or_default()
        .trim_matches('"')
        .to_string()
}
