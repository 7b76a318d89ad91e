/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - params objects, one per operation with a body or query
[UPDATE]: When API schema changes or new operations are added
*/

use serde::{Deserialize, Serialize};

use super::enums::{
    AnsweringMachineDetection, BeepMode, ConferenceStatus, MessageKind, MissionRunStatus,
    MissionStatus, PhoneNumberFeature, PhoneNumberStatus, RecordingChannels, RecordingFormat,
    SortOrder, SupervisorRole,
};
use super::models::{AssistantTool, CallRecordingSettings, CnamListing};

/// SIP header forwarded verbatim on an outbound leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomHeader {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialParams {
    pub to: String,
    pub from: String,
    pub connection_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answering_machine_detection: Option<AnsweringMachineDetection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<CustomHeader>,
}

impl DialParams {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        connection_id: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            connection_id: connection_id.into(),
            from_display_name: None,
            timeout_secs: None,
            time_limit_secs: None,
            answering_machine_detection: None,
            webhook_url: None,
            client_state: None,
            command_id: None,
            custom_headers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HangupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeParams {
    /// Leg to bridge with.
    pub call_control_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_after_unbridge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

impl BridgeParams {
    pub fn new(call_control_id: impl Into<String>) -> Self {
        Self {
            call_control_id: call_control_id.into(),
            park_after_unbridge: None,
            client_state: None,
            command_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakParams {
    /// Text or SSML to synthesize.
    pub payload: String,
    pub voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

impl SpeakParams {
    pub fn new(payload: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            voice: voice.into(),
            language: None,
            payload_type: None,
            client_state: None,
            command_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStartParams {
    pub format: RecordingFormat,
    pub channels: RecordingChannels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_beep: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

impl RecordStartParams {
    pub fn new(format: RecordingFormat, channels: RecordingChannels) -> Self {
        Self {
            format,
            channels,
            play_beep: None,
            max_length_secs: None,
            timeout_secs: None,
            client_state: None,
            command_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordStopParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceCreateParams {
    /// Leg the conference is created from.
    pub call_control_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beep_enabled: Option<BeepMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort_noise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_conference_on_create: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

impl ConferenceCreateParams {
    pub fn new(call_control_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            call_control_id: call_control_id.into(),
            name: name.into(),
            beep_enabled: None,
            comfort_noise: None,
            max_participants: None,
            start_conference_on_create: None,
            duration_minutes: None,
            hold_audio_url: None,
            client_state: None,
            command_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConferenceListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_name: Option<String>,
    pub filter_status: Option<ConferenceStatus>,
}

impl ConferenceListParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_page(&mut params, self.page_number, self.page_size);
        query::push_opt(&mut params, "filter[name]", self.filter_name.as_ref());
        query::push_opt(
            &mut params,
            "filter[status]",
            self.filter_status.as_ref().map(query::wire_value),
        );
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_muted: Option<bool>,
    pub filter_on_hold: Option<bool>,
}

impl ParticipantListParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_page(&mut params, self.page_number, self.page_size);
        query::push_opt(&mut params, "filter[muted]", self.filter_muted);
        query::push_opt(&mut params, "filter[on_hold]", self.filter_on_hold);
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinParams {
    pub call_control_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beep_enabled: Option<BeepMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_conference_on_exit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_conference_on_enter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_role: Option<SupervisorRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whisper_call_control_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

impl JoinParams {
    pub fn new(call_control_id: impl Into<String>) -> Self {
        Self {
            call_control_id: call_control_id.into(),
            beep_enabled: None,
            end_conference_on_exit: None,
            start_conference_on_enter: None,
            mute: None,
            hold: None,
            hold_audio_url: None,
            supervisor_role: None,
            whisper_call_control_ids: Vec::new(),
            client_state: None,
            command_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveParams {
    pub call_control_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beep_enabled: Option<BeepMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
}

impl LeaveParams {
    pub fn new(call_control_id: impl Into<String>) -> Self {
        Self {
            call_control_id: call_control_id.into(),
            beep_enabled: None,
            command_id: None,
        }
    }
}

/// An empty list addresses every participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuteParams {
    pub call_control_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnmuteParams {
    pub call_control_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldParams {
    pub call_control_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Unhold requires naming the legs; there is no unhold-everyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnholdParams {
    pub call_control_ids: Vec<String>,
}

impl UnholdParams {
    pub fn new(call_control_ids: Vec<String>) -> Self {
        Self { call_control_ids }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSendParams {
    pub to: String,
    /// One of `from` or `messaging_profile_id` must be set; the server enforces it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_urls: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_profile_webhooks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

impl MessageSendParams {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: None,
            messaging_profile_id: None,
            text: None,
            subject: None,
            media_urls: Vec::new(),
            kind: None,
            webhook_url: None,
            use_profile_webhooks: None,
            valid_until: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_phone_number_contains: Option<String>,
    pub filter_status: Option<PhoneNumberStatus>,
    pub filter_connection_id: Option<String>,
    pub filter_tag: Option<String>,
}

impl PhoneNumberListParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_page(&mut params, self.page_number, self.page_size);
        query::push_opt(
            &mut params,
            "filter[phone_number][contains]",
            self.filter_phone_number_contains.as_ref(),
        );
        query::push_opt(
            &mut params,
            "filter[status]",
            self.filter_status.as_ref().map(query::wire_value),
        );
        query::push_opt(
            &mut params,
            "filter[connection_id]",
            self.filter_connection_id.as_ref(),
        );
        query::push_opt(&mut params, "filter[tag]", self.filter_tag.as_ref());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd_voice_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettingsUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_prefix_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_id_name_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_recording: Option<CallRecordingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnam_listing: Option<CnamListing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableNumberSearchParams {
    pub filter_country_code: Option<String>,
    pub filter_features: Vec<PhoneNumberFeature>,
    pub filter_phone_number_contains: Option<String>,
    pub filter_locality: Option<String>,
    pub filter_administrative_area: Option<String>,
    pub filter_limit: Option<u32>,
    pub filter_best_effort: Option<bool>,
    pub filter_quickship: Option<bool>,
    pub filter_reservable: Option<bool>,
}

impl AvailableNumberSearchParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_opt(
            &mut params,
            "filter[country_code]",
            self.filter_country_code.as_ref(),
        );
        for feature in &self.filter_features {
            query::push(&mut params, "filter[features][]", query::wire_value(feature));
        }
        query::push_opt(
            &mut params,
            "filter[phone_number][contains]",
            self.filter_phone_number_contains.as_ref(),
        );
        query::push_opt(&mut params, "filter[locality]", self.filter_locality.as_ref());
        query::push_opt(
            &mut params,
            "filter[administrative_area]",
            self.filter_administrative_area.as_ref(),
        );
        query::push_opt(&mut params, "filter[limit]", self.filter_limit);
        query::push_opt(&mut params, "filter[best_effort]", self.filter_best_effort);
        query::push_opt(&mut params, "filter[quickship]", self.filter_quickship);
        query::push_opt(&mut params, "filter[reservable]", self.filter_reservable);
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedAccountCreateParams {
    pub business_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_account_allow_custom_pricing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollup_billing: Option<bool>,
}

impl ManagedAccountCreateParams {
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            email: None,
            password: None,
            managed_account_allow_custom_pricing: None,
            rollup_billing: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedAccountListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_email_contains: Option<String>,
    pub filter_organization_name_contains: Option<String>,
    pub include_cancelled_accounts: Option<bool>,
    pub sort_created_at: Option<SortOrder>,
}

impl ManagedAccountListParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_page(&mut params, self.page_number, self.page_size);
        query::push_opt(
            &mut params,
            "filter[email][contains]",
            self.filter_email_contains.as_ref(),
        );
        query::push_opt(
            &mut params,
            "filter[organization_name][contains]",
            self.filter_organization_name_contains.as_ref(),
        );
        query::push_opt(
            &mut params,
            "include_cancelled_accounts",
            self.include_cancelled_accounts,
        );
        query::push_opt(
            &mut params,
            "sort[created_at]",
            self.sort_created_at.as_ref().map(query::wire_value),
        );
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedAccountUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_account_allow_custom_pricing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnableManagedAccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reenable_all_connections: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantCreateParams {
    pub name: String,
    pub model: String,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<AssistantTool>,
}

impl AssistantCreateParams {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            instructions: instructions.into(),
            greeting: None,
            description: None,
            tools: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<AssistantTool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl AssistantListParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_page(&mut params, self.page_number, self.page_size);
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionCreateParams {
    pub assistant_id: String,
    pub name: String,
    pub objective: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_at: Option<String>,
}

impl MissionCreateParams {
    pub fn new(
        assistant_id: impl Into<String>,
        name: impl Into<String>,
        objective: impl Into<String>,
    ) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            name: name.into(),
            objective: objective.into(),
            phone_number_id: None,
            max_attempts: None,
            schedule_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_assistant_id: Option<String>,
    pub filter_status: Option<MissionStatus>,
}

impl MissionListParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_page(&mut params, self.page_number, self.page_size);
        query::push_opt(
            &mut params,
            "filter[assistant_id]",
            self.filter_assistant_id.as_ref(),
        );
        query::push_opt(
            &mut params,
            "filter[status]",
            self.filter_status.as_ref().map(query::wire_value),
        );
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionRunListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub filter_status: Option<MissionRunStatus>,
}

impl MissionRunListParams {
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        query::push_page(&mut params, self.page_number, self.page_size);
        query::push_opt(
            &mut params,
            "filter[status]",
            self.filter_status.as_ref().map(query::wire_value),
        );
        params
    }
}

/// Partial update; only `canceled` is accepted as a target status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionRunUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MissionRunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed: Option<bool>,
}

mod query {
    use serde::Serialize;

    /// Render an enum through its serde wire name.
    pub fn wire_value<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value)
            .unwrap_or_default()
            .trim_matches('"')
            .to_string()
    }

    pub fn push(params: &mut Vec<(String, String)>, key: &str, value: impl ToString) {
        params.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt(params: &mut Vec<(String, String)>, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            push(params, key, value);
        }
    }

    pub fn push_page(params: &mut Vec<(String, String)>, number: Option<u32>, size: Option<u32>) {
        push_opt(params, "page[number]", number);
        push_opt(params, "page[size]", size);
    }
}
