/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Ringline SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;
pub mod webhooks;

// Re-export commonly used types from auth
pub use auth::{
    Credentials,
    OAuthConfig,
    OAuthManager,
    StoredToken,
    TokenStore,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Result,
    RinglineClient,
    RinglineError,
};

// Re-export all types
pub use types::*;

// Re-export commonly used types from webhooks
pub use webhooks::{
    EventData,
    EventType,
    WebhookEvent,
    WebhookVerifier,
};
