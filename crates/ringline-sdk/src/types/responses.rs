/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response wrappers with serialization support
[POS]:    Data layer - envelopes, pagination, and error payloads
[UPDATE]: When API schema changes or new wrappers are added
*/

use serde::{Deserialize, Serialize};

use super::models::AvailablePhoneNumber;

/// Single-resource envelope: `{"data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total_pages: u32,
    pub total_results: u64,
    pub page_number: u32,
    pub page_size: u32,
}

/// List envelope: `{"data": [...], "meta": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Response body of call-control and conference commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub result: String,
}

impl CommandResult {
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }
}

/// Number search meta differs from list pagination: no page bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableNumbersMeta {
    pub total_results: u64,
    #[serde(default)]
    pub best_effort_results: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableNumbersPage {
    pub data: Vec<AvailablePhoneNumber>,
    pub meta: AvailableNumbersMeta,
}

/// Bare token response from `POST /oauth/token` (RFC 6749 shape, no envelope).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Bare introspection response (RFC 7662 shape, no envelope).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// One entry of the `errors` array the API returns on 4xx/5xx.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorsEnvelope {
    pub errors: Vec<ApiErrorDetail>,
}

impl<T> Envelope<T> {
    /// Unwrap the inner record.
    pub fn into_inner(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paginated_envelope_deserializes() {
        let value = json!({
            "data": [{ "id": "c-1" }, { "id": "c-2" }],
            "meta": {
                "total_pages": 3,
                "total_results": 42,
                "page_number": 1,
                "page_size": 2
            }
        });

        #[derive(Debug, PartialEq, Deserialize)]
        struct Row {
            id: String,
        }

        let page: Paginated<Row> = serde_json::from_value(value).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.total_results, 42);
    }

    #[test]
    fn command_result_ok_helper() {
        let ok: CommandResult = serde_json::from_value(json!({ "result": "ok" })).unwrap();
        let rejected: CommandResult =
            serde_json::from_value(json!({ "result": "rejected" })).unwrap();
        assert!(ok.is_ok());
        assert!(!rejected.is_ok());
    }

    #[test]
    fn errors_envelope_keeps_every_entry() {
        let value = json!({
            "errors": [
                {
                    "code": "10015",
                    "title": "Bad Request",
                    "detail": "The `to` number is invalid.",
                    "source": { "pointer": "/to" }
                },
                {
                    "code": "10031",
                    "title": "Parameter out of range",
                    "source": { "parameter": "page[size]" }
                }
            ]
        });

        let envelope: ErrorsEnvelope = serde_json::from_value(value).unwrap();
        assert_eq!(envelope.errors.len(), 2);
        assert_eq!(envelope.errors[0].code, "10015");
        assert_eq!(
            envelope.errors[1].source.as_ref().unwrap().parameter.as_deref(),
            Some("page[size]")
        );
    }

    #[test]
    fn token_grant_round_trips_without_refresh_token() {
        let grant = TokenGrant {
            access_token: "at-123".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            refresh_token: None,
            scope: Some("messages calls".to_string()),
        };

        let wire = serde_json::to_value(&grant).unwrap();
        assert!(wire.get("refresh_token").is_none());

        let parsed: TokenGrant = serde_json::from_value(wire).unwrap();
        assert_eq!(parsed, grant);
    }
}
