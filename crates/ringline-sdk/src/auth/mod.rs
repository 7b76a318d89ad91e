/*
[INPUT]:  Authentication configuration and credentials
[OUTPUT]: Bearer credentials and managed OAuth tokens
[POS]:    Auth layer - handles Ringline API authentication
[UPDATE]: When auth flow or credential kinds change
*/

pub mod credentials;
pub mod oauth;
pub mod token;

pub use credentials::Credentials;
pub use oauth::{OAuthConfig, OAuthManager};
pub use token::{StoredToken, TokenStore};
