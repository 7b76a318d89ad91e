/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod assistants;
pub mod calls;
pub mod client;
pub mod conferences;
pub mod error;
pub mod messages;
pub mod missions;
pub mod numbers;
pub mod oauth;
pub mod paging;

pub use error::{Result, RinglineError};
pub use paging::stream_pages;

pub use client::{ClientConfig, RinglineClient};
