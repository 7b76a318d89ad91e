/*
[INPUT]:  API keys or OAuth access tokens
[OUTPUT]: Bearer values for the Authorization header
[POS]:    Auth layer - credential representation
[UPDATE]: When adding credential kinds or changing header format
*/

use std::fmt;

/// What goes after `Bearer ` on every authenticated request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Long-lived API key from the account portal
    ApiKey(String),
    /// Short-lived OAuth access token
    AccessToken(String),
}

impl Credentials {
    pub fn bearer(&self) -> &str {
        match self {
            Credentials::ApiKey(key) => key,
            Credentials::AccessToken(token) => token,
        }
    }
}

// Secrets stay out of logs; Debug prints the kind only.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("Credentials::ApiKey(***)"),
            Credentials::AccessToken(_) => f.write_str("Credentials::AccessToken(***)"),
        }
    }
}
