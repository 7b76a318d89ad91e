/*
[INPUT]:  Raw webhook body, signature and timestamp headers
[OUTPUT]: Verified (and optionally parsed) webhook events
[POS]:    Webhook layer - Ed25519 signature verification
[UPDATE]: When changing signing scheme or freshness policy
*/

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, Utc};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::http::{Result, RinglineError};
use crate::webhooks::WebhookEvent;

/// Header carrying the base64 Ed25519 signature
pub const SIGNATURE_HEADER: &str = "ringline-signature-ed25519";
/// Header carrying the unix-epoch timestamp the signature covers
pub const TIMESTAMP_HEADER: &str = "ringline-timestamp";

const DEFAULT_TOLERANCE_SECONDS: i64 = 300;

/// Verifies webhook deliveries against the account's public key.
///
/// The platform signs `"{timestamp}|{body}"`; both the signature and
/// the timestamp come from request headers.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    verifying_key: VerifyingKey,
    tolerance: Duration,
}

impl WebhookVerifier {
    /// Build a verifier from the base64 public key shown in the portal
    pub fn from_public_key_base64(public_key: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(public_key.trim())
            .map_err(|e| RinglineError::Config(format!("Invalid webhook public key: {e}")))?;
        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| RinglineError::Config("Webhook public key must be 32 bytes".to_string()))?;
        let verifying_key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| RinglineError::Config(format!("Invalid webhook public key: {e}")))?;

        Ok(Self {
            verifying_key,
            tolerance: Duration::seconds(DEFAULT_TOLERANCE_SECONDS),
        })
    }

    /// Override the replay-protection window (default 5 minutes)
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check freshness and signature for a raw webhook body
    pub fn verify(&self, payload: &[u8], signature: &str, timestamp: &str) -> Result<()> {
        let timestamp = timestamp.trim();
        let epoch: i64 = timestamp.parse().map_err(|_| {
            RinglineError::InvalidResponse(format!(
                "Webhook timestamp is not a unix epoch: {timestamp}"
            ))
        })?;

        let age_secs = Utc::now().timestamp() - epoch;
        if age_secs.abs() > self.tolerance.num_seconds() {
            return Err(RinglineError::StaleWebhook { age_secs });
        }

        let signature_bytes = STANDARD
            .decode(signature.trim())
            .map_err(|_| RinglineError::InvalidSignature)?;
        let signature =
            Signature::from_slice(&signature_bytes).map_err(|_| RinglineError::InvalidSignature)?;

        let mut message = Vec::with_capacity(timestamp.len() + 1 + payload.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.push(b'|');
        message.extend_from_slice(payload);

        self.verifying_key
            .verify(&message, &signature)
            .map_err(|_| RinglineError::InvalidSignature)
    }

    /// Verify a delivery and deserialize its body into an event
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature: &str,
        timestamp: &str,
    ) -> Result<WebhookEvent> {
        self.verify(payload, signature, timestamp)?;
        serde_json::from_slice(payload).map_err(RinglineError::from)
    }
}
