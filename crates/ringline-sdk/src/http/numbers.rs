/*
[INPUT]:  Phone number ids, search filters, routing settings
[OUTPUT]: Owned number records, voice settings, search inventory
[POS]:    HTTP layer - number inventory, settings, and search
[UPDATE]: When adding number features or changing response format
*/

use futures_util::stream::Stream;
use reqwest::Method;

use crate::http::paging::stream_pages;
use crate::http::{Result, RinglineClient};
use crate::types::{
    AvailableNumberSearchParams, AvailableNumbersPage, Paginated, PhoneNumber,
    PhoneNumberListParams, PhoneNumberUpdateParams, VoiceSettings, VoiceSettingsUpdateParams,
};

impl RinglineClient {
    /// List phone numbers owned by the account
    ///
    /// GET /v2/phone_numbers
    pub async fn list_phone_numbers(
        &self,
        params: &PhoneNumberListParams,
    ) -> Result<Paginated<PhoneNumber>> {
        let builder = self
            .api_request(Method::GET, "/v2/phone_numbers")?
            .query(&params.query());
        self.send_json(builder).await
    }

    /// Stream owned phone numbers across every page of results
    pub fn list_phone_numbers_stream(
        &self,
        params: PhoneNumberListParams,
    ) -> impl Stream<Item = Result<PhoneNumber>> + '_ {
        stream_pages(move |page_number| {
            let params = PhoneNumberListParams {
                page_number: Some(page_number),
                ..params.clone()
            };
            async move { self.list_phone_numbers(&params).await }
        })
    }

    /// Retrieve a single owned phone number
    ///
    /// GET /v2/phone_numbers/{phone_number_id}
    pub async fn retrieve_phone_number(&self, phone_number_id: &str) -> Result<PhoneNumber> {
        let endpoint = format!("/v2/phone_numbers/{}", phone_number_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Update routing and tagging for an owned phone number
    ///
    /// PATCH /v2/phone_numbers/{phone_number_id}
    pub async fn update_phone_number(
        &self,
        phone_number_id: &str,
        params: &PhoneNumberUpdateParams,
    ) -> Result<PhoneNumber> {
        let endpoint = format!("/v2/phone_numbers/{}", phone_number_id);
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }

    /// Release an owned phone number; returns the final record
    ///
    /// DELETE /v2/phone_numbers/{phone_number_id}
    pub async fn delete_phone_number(&self, phone_number_id: &str) -> Result<PhoneNumber> {
        let endpoint = format!("/v2/phone_numbers/{}", phone_number_id);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Retrieve voice-specific settings for an owned number
    ///
    /// GET /v2/phone_numbers/{phone_number_id}/voice
    pub async fn retrieve_voice_settings(&self, phone_number_id: &str) -> Result<VoiceSettings> {
        let endpoint = format!("/v2/phone_numbers/{}/voice", phone_number_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Update voice-specific settings for an owned number
    ///
    /// PATCH /v2/phone_numbers/{phone_number_id}/voice
    pub async fn update_voice_settings(
        &self,
        phone_number_id: &str,
        params: &VoiceSettingsUpdateParams,
    ) -> Result<VoiceSettings> {
        let endpoint = format!("/v2/phone_numbers/{}/voice", phone_number_id);
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }

    /// Search purchasable inventory
    ///
    /// GET /v2/available_phone_numbers
    pub async fn search_available_numbers(
        &self,
        params: &AvailableNumberSearchParams,
    ) -> Result<AvailableNumbersPage> {
        let builder = self
            .api_request(Method::GET, "/v2/available_phone_numbers")?
            .query(&params.query());
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, RinglineClient};
    use crate::types::{
        AvailableNumberSearchParams, PhoneNumberFeature, PhoneNumberListParams,
        PhoneNumberStatus, PhoneNumberUpdateParams, VoiceSettingsUpdateParams,
    };
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> RinglineClient {
        RinglineClient::with_config_and_base_url(
            Credentials::ApiKey("test-key".to_string()),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_list_phone_numbers() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": [
                {
                    "id": "pn-1",
                    "record_type": "phone_number",
                    "phone_number": "+15550001111",
                    "status": "active",
                    "connection_id": "conn-1",
                    "tags": ["support"],
                    "created_at": "2026-01-15T00:00:00Z"
                }
            ],
            "meta": {
                "total_pages": 1,
                "total_results": 1,
                "page_number": 1,
                "page_size": 20
            }
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/phone_numbers"))
            .and(query_param("filter[status]", "active"))
            .and(query_param("filter[tag]", "support"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = PhoneNumberListParams {
            filter_status: Some(PhoneNumberStatus::Active),
            filter_tag: Some("support".to_string()),
            ..PhoneNumberListParams::default()
        };
        let page = client
            .list_phone_numbers(&params)
            .await
            .expect("list_phone_numbers failed");

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].phone_number, "+15550001111");
        assert_eq!(page.data[0].status, PhoneNumberStatus::Active);
        assert_eq!(page.data[0].tags, vec!["support".to_string()]);
    }

    #[tokio::test]
    async fn test_update_phone_number() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "pn-1",
                "record_type": "phone_number",
                "phone_number": "+15550001111",
                "status": "active",
                "connection_id": "conn-9",
                "tags": ["support", "after-hours"],
                "created_at": "2026-01-15T00:00:00Z",
                "updated_at": "2026-05-02T12:00:00Z"
            }
        }"#;

        let params = PhoneNumberUpdateParams {
            connection_id: Some("conn-9".to_string()),
            tags: Some(vec!["support".to_string(), "after-hours".to_string()]),
            ..PhoneNumberUpdateParams::default()
        };

        let _mock = Mock::given(method("PATCH"))
            .and(path("/v2/phone_numbers/pn-1"))
            .and(body_json(&params))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .update_phone_number("pn-1", &params)
            .await
            .expect("update_phone_number failed");

        assert_eq!(response.connection_id.as_deref(), Some("conn-9"));
        assert_eq!(response.tags.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_phone_number_returns_final_record() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "pn-2",
                "record_type": "phone_number",
                "phone_number": "+15550004444",
                "status": "deleted",
                "created_at": "2026-01-15T00:00:00Z"
            }
        }"#;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/v2/phone_numbers/pn-2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .delete_phone_number("pn-2")
            .await
            .expect("delete_phone_number failed");

        assert_eq!(response.status, PhoneNumberStatus::Deleted);
    }

    #[tokio::test]
    async fn test_update_voice_settings() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "pn-1",
                "record_type": "voice_settings",
                "tech_prefix_enabled": true,
                "translated_number": "",
                "caller_id_name_enabled": true
            }
        }"#;

        let params = VoiceSettingsUpdateParams {
            tech_prefix_enabled: Some(true),
            caller_id_name_enabled: Some(true),
            ..VoiceSettingsUpdateParams::default()
        };

        let _mock = Mock::given(method("PATCH"))
            .and(path("/v2/phone_numbers/pn-1/voice"))
            .and(body_json(&params))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .update_voice_settings("pn-1", &params)
            .await
            .expect("update_voice_settings failed");

        assert!(response.tech_prefix_enabled);
        assert_eq!(response.translated_number, None);
    }

    #[tokio::test]
    async fn test_search_available_numbers() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": [
                {
                    "record_type": "available_phone_number",
                    "phone_number": "+15550887766",
                    "reservable": true,
                    "quickship": true,
                    "best_effort": false,
                    "features": ["sms", "voice"],
                    "region_information": [
                        { "region_type": "country_code", "region_name": "US" }
                    ],
                    "cost_information": {
                        "monthly_cost": "1.00",
                        "upfront_cost": "1.00",
                        "currency": "USD"
                    }
                }
            ],
            "meta": { "total_results": 1, "best_effort_results": 0 }
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/available_phone_numbers"))
            .and(query_param("filter[country_code]", "US"))
            .and(query_param("filter[features][]", "sms"))
            .and(query_param("filter[limit]", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = AvailableNumberSearchParams {
            filter_country_code: Some("US".to_string()),
            filter_features: vec![PhoneNumberFeature::Sms, PhoneNumberFeature::Voice],
            filter_limit: Some(5),
            ..AvailableNumberSearchParams::default()
        };
        let page = client
            .search_available_numbers(&params)
            .await
            .expect("search_available_numbers failed");

        assert_eq!(page.data.len(), 1);
        assert!(page.data[0].features.contains(&PhoneNumberFeature::Voice));
        assert_eq!(page.meta.total_results, 1);
        assert_eq!(page.meta.best_effort_results, 0);
    }
}
