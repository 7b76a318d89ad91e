/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - resource records returned by the API
[UPDATE]: When API schema changes or new resources are added
[UPDATE]: 2026-07-30 tolerate null tags/media arrays on messages and numbers
[UPDATE]: 2026-08-25 fold null/empty money amounts to zero
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{
    CallDirection, CallState, ConferenceStatus, DeliveryStatus, MessageDirection, MessageKind,
    MissionRunStatus, MissionStatus, ParticipantStatus, PhoneNumberFeature, PhoneNumberStatus,
    RecordingChannels, RecordingFormat,
};
use super::responses::ApiErrorDetail;

/// Monetary amount as the API reports it: a string decimal plus currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    // Freshly rated records report the amount as null or "".
    #[serde(
        default,
        deserialize_with = "serde_helpers::decimal_or_zero",
        serialize_with = "serde_helpers::decimal_as_string"
    )]
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub call_control_id: String,
    pub call_leg_id: String,
    pub call_session_id: String,
    pub record_type: String,
    #[serde(default)]
    pub is_alive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<CallDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CallState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_duration_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
}

/// Identifies the leg that terminated a conference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndedBy {
    pub call_control_id: String,
    pub call_leg_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub id: String,
    pub record_type: String,
    pub name: String,
    pub status: ConferenceStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_by: Option<EndedBy>,
}

/// Conference reference embedded in participant records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub record_type: String,
    pub call_control_id: String,
    pub call_leg_id: String,
    pub conference: ConferenceRef,
    pub status: ParticipantStatus,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub on_hold: bool,
    #[serde(default)]
    pub end_conference_on_exit: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub whisper_call_control_ids: Vec<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageAddress {
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
}

/// Per-recipient delivery state inside a message record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDelivery {
    pub phone_number: String,
    pub status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageMedia {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub record_type: String,
    pub direction: MessageDirection,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_profile_id: Option<String>,
    pub from: MessageAddress,
    pub to: Vec<MessageDelivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub media: Vec<MessageMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<u32>,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: String,
    pub record_type: String,
    pub phone_number: String,
    pub status: PhoneNumberStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_group_id: Option<String>,
    #[serde(default)]
    pub emergency_enabled: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecordingSettings {
    #[serde(default)]
    pub inbound_call_recording_enabled: bool,
    pub inbound_call_recording_format: RecordingFormat,
    pub inbound_call_recording_channels: RecordingChannels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnamListing {
    #[serde(default)]
    pub cnam_listing_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnam_listing_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub id: String,
    pub record_type: String,
    #[serde(default)]
    pub tech_prefix_enabled: bool,
    // The API reports an unset translation as an empty string.
    #[serde(
        default,
        deserialize_with = "serde_helpers::empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub translated_number: Option<String>,
    #[serde(default)]
    pub caller_id_name_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_recording: Option<CallRecordingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnam_listing: Option<CnamListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub region_type: String,
    pub region_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInformation {
    #[serde(
        default,
        deserialize_with = "serde_helpers::decimal_or_zero",
        serialize_with = "serde_helpers::decimal_as_string"
    )]
    pub monthly_cost: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::decimal_or_zero",
        serialize_with = "serde_helpers::decimal_as_string"
    )]
    pub upfront_cost: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailablePhoneNumber {
    pub record_type: String,
    pub phone_number: String,
    #[serde(default)]
    pub reservable: bool,
    #[serde(default)]
    pub quickship: bool,
    #[serde(default)]
    pub best_effort: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub features: Vec<PhoneNumberFeature>,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub region_information: Vec<RegionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_information: Option<CostInformation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedAccount {
    pub id: String,
    pub record_type: String,
    pub email: String,
    pub api_user: String,
    pub manager_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    // Only present on the create response; never returned again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default)]
    pub managed_account_allow_custom_pricing: bool,
    #[serde(default)]
    pub rollup_billing: bool,
    #[serde(default)]
    pub disabled: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub to: String,
}

/// Tool attached to an assistant, discriminated by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantTool {
    Webhook {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        method: Option<String>,
    },
    Transfer {
        targets: Vec<TransferTarget>,
    },
    Hangup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assistant {
    pub id: String,
    pub record_type: String,
    pub name: String,
    pub model: String,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_to_default")]
    pub tools: Vec<AssistantTool>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub record_type: String,
    pub assistant_id: String,
    pub name: String,
    pub objective: String,
    pub status: MissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_at: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRun {
    pub id: String,
    pub record_type: String,
    pub mission_id: String,
    pub status: MissionRunStatus,
    #[serde(default)]
    pub attempt: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_control_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub reviewed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

mod serde_helpers {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(value.unwrap_or_default())
    }

    pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.trim().is_empty()))
    }

    pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("expected a decimal string or number"))
    }

    pub fn decimal_as_string<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}
