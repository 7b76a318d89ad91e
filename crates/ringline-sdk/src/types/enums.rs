/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - fixed string sets for API communication
[UPDATE]: When API schema changes or new values are documented
[UPDATE]: 2026-08-25 carriers report canceled recipients in both spellings
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallState {
    Queued,
    Ringing,
    Answered,
    Bridging,
    Bridged,
    Hangup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConferenceStatus {
    Init,
    InProgress,
    Completed,
}

/// When a notification tone is played to a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeepMode {
    Always,
    Never,
    OnEnter,
    OnExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnsweringMachineDetection {
    Disabled,
    Detect,
    DetectBeep,
    DetectWords,
    GreetingEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingFormat {
    Wav,
    Mp3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingChannels {
    Single,
    Dual,
}

/// Wire values are upper-case for historic reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "MMS")]
    Mms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "queued")]
    Queued,
    #[serde(rename = "sending")]
    Sending,
    #[serde(rename = "sent")]
    Sent,
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "sending_failed")]
    SendingFailed,
    #[serde(rename = "delivery_failed")]
    DeliveryFailed,
    #[serde(rename = "delivery_unconfirmed")]
    DeliveryUnconfirmed,
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "canceled", alias = "cancelled")]
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneNumberStatus {
    PurchasePending,
    Active,
    PortPending,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneNumberFeature {
    Sms,
    Mms,
    Voice,
    Fax,
    Emergency,
}

/// Role a supervisor leg takes when joining a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupervisorRole {
    Barge,
    Monitor,
    Whisper,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Joining,
    Joined,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionRunStatus {
    #[serde(rename = "queued")]
    Queued,
    #[serde(rename = "dialing")]
    Dialing,
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "canceled", alias = "cancelled")]
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    ClientCredentials,
    RefreshToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn wire(value: impl serde::Serialize) -> String {
        serde_json::to_string(&value)
            .unwrap()
            .trim_matches('"')
            .to_string()
    }

    #[rstest]
    #[case(CallState::Queued, "queued")]
    #[case(CallState::Bridged, "bridged")]
    #[case(CallState::Hangup, "hangup")]
    fn call_state_wire_values(#[case] state: CallState, #[case] expected: &str) {
        assert_eq!(wire(state), expected);
    }

    #[rstest]
    #[case(ConferenceStatus::Init, "init")]
    #[case(ConferenceStatus::InProgress, "in_progress")]
    #[case(ConferenceStatus::Completed, "completed")]
    fn conference_status_wire_values(#[case] status: ConferenceStatus, #[case] expected: &str) {
        assert_eq!(wire(status), expected);
    }

    #[rstest]
    #[case(MessageKind::Sms, "SMS")]
    #[case(MessageKind::Mms, "MMS")]
    fn message_kind_is_upper_case(#[case] kind: MessageKind, #[case] expected: &str) {
        assert_eq!(wire(kind), expected);
    }

    #[rstest]
    #[case(AnsweringMachineDetection::DetectBeep, "detect_beep")]
    #[case(AnsweringMachineDetection::GreetingEnd, "greeting_end")]
    #[case(AnsweringMachineDetection::Disabled, "disabled")]
    fn amd_wire_values(#[case] amd: AnsweringMachineDetection, #[case] expected: &str) {
        assert_eq!(wire(amd), expected);
    }

    #[test]
    fn mission_run_status_accepts_both_spellings() {
        let canonical: MissionRunStatus = serde_json::from_str(r#""canceled""#).unwrap();
        let british: MissionRunStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(canonical, MissionRunStatus::Canceled);
        assert_eq!(british, MissionRunStatus::Canceled);
        assert_eq!(wire(MissionRunStatus::Canceled), "canceled");
    }

    #[test]
    fn grant_type_wire_values() {
        assert_eq!(wire(GrantType::ClientCredentials), "client_credentials");
        assert_eq!(wire(GrantType::RefreshToken), "refresh_token");
    }

    #[test]
    fn delivery_status_accepts_both_spellings() {
        let canonical: DeliveryStatus = serde_json::from_str(r#""canceled""#).unwrap();
        let british: DeliveryStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(canonical, DeliveryStatus::Canceled);
        assert_eq!(british, DeliveryStatus::Canceled);
        assert_eq!(wire(DeliveryStatus::Canceled), "canceled");
    }

    #[test]
    fn unknown_delivery_status_is_rejected() {
        let result = serde_json::from_str::<DeliveryStatus>(r#""teleported""#);
        assert!(result.is_err());
    }
}
