/*
[INPUT]:  Webhook deliveries (body plus signature headers)
[OUTPUT]: Verified, typed platform events
[POS]:    Webhook layer - inbound event handling
[UPDATE]: When event catalogue or verification scheme changes
*/

pub mod event;
pub mod verifier;

pub use event::{DeliveryMeta, EventData, EventType, WebhookEvent};
pub use verifier::{SIGNATURE_HEADER, TIMESTAMP_HEADER, WebhookVerifier};
