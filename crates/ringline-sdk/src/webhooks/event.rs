/*
[INPUT]:  Webhook JSON payloads delivered by the platform
[OUTPUT]: Typed event records with resource payload access
[POS]:    Webhook layer - event envelope and event type catalogue
[UPDATE]: When the platform adds event types or envelope fields
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::http::{Result, RinglineError};

/// Known webhook event types; unrecognized ones land in `Unknown`
/// so new platform events never break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "call.initiated")]
    CallInitiated,
    #[serde(rename = "call.answered")]
    CallAnswered,
    #[serde(rename = "call.bridged")]
    CallBridged,
    #[serde(rename = "call.hangup")]
    CallHangup,
    #[serde(rename = "call.speak.ended")]
    CallSpeakEnded,
    #[serde(rename = "call.recording.saved")]
    CallRecordingSaved,
    #[serde(rename = "conference.created")]
    ConferenceCreated,
    #[serde(rename = "conference.ended")]
    ConferenceEnded,
    #[serde(rename = "conference.participant.joined")]
    ConferenceParticipantJoined,
    #[serde(rename = "conference.participant.left")]
    ConferenceParticipantLeft,
    #[serde(rename = "message.sent")]
    MessageSent,
    #[serde(rename = "message.finalized")]
    MessageFinalized,
    #[serde(rename = "message.received")]
    MessageReceived,
    #[serde(rename = "mission.run.started")]
    MissionRunStarted,
    #[serde(rename = "mission.run.completed")]
    MissionRunCompleted,
    #[serde(other)]
    Unknown,
}

/// Webhook envelope as delivered to the receiving endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub data: EventData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<DeliveryMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    pub id: String,
    pub record_type: String,
    pub event_type: EventType,
    pub occurred_at: String,
    /// Resource snapshot; its shape depends on `event_type`.
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMeta {
    pub attempt: u32,
    pub delivered_to: String,
}

impl EventData {
    /// Deserialize the payload into a concrete resource type
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.payload.clone()).map_err(RinglineError::from)
    }
}
