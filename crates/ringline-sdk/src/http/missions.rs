/*
[INPUT]:  Mission and run ids, outbound campaign parameters
[OUTPUT]: Mission and run records for assistant-driven call campaigns
[POS]:    HTTP layer - AI mission scheduling and run review
[UPDATE]: When adding mission operations or changing response format
*/

use reqwest::Method;

use crate::http::{Result, RinglineClient};
use crate::types::{
    Mission, MissionCreateParams, MissionListParams, MissionRun, MissionRunListParams,
    MissionRunUpdateParams, Paginated,
};

impl RinglineClient {
    /// Create an outbound calling mission for an assistant
    ///
    /// POST /v2/ai/missions
    pub async fn create_mission(&self, params: &MissionCreateParams) -> Result<Mission> {
        let builder = self
            .api_request(Method::POST, "/v2/ai/missions")?
            .json(params);
        self.send_enveloped(builder).await
    }

    /// List missions
    ///
    /// GET /v2/ai/missions
    pub async fn list_missions(&self, params: &MissionListParams) -> Result<Paginated<Mission>> {
        let builder = self
            .api_request(Method::GET, "/v2/ai/missions")?
            .query(&params.query());
        self.send_json(builder).await
    }

    /// Retrieve a single mission
    ///
    /// GET /v2/ai/missions/{mission_id}
    pub async fn retrieve_mission(&self, mission_id: &str) -> Result<Mission> {
        let endpoint = format!("/v2/ai/missions/{}", mission_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Delete a mission; queued runs are canceled by the server.
    /// Returns the final state of the record.
    ///
    /// DELETE /v2/ai/missions/{mission_id}
    pub async fn delete_mission(&self, mission_id: &str) -> Result<Mission> {
        let endpoint = format!("/v2/ai/missions/{}", mission_id);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// List the runs of a mission
    ///
    /// GET /v2/ai/missions/{mission_id}/runs
    pub async fn list_mission_runs(
        &self,
        mission_id: &str,
        params: &MissionRunListParams,
    ) -> Result<Paginated<MissionRun>> {
        let endpoint = format!("/v2/ai/missions/{}/runs", mission_id);
        let builder = self
            .api_request(Method::GET, &endpoint)?
            .query(&params.query());
        self.send_json(builder).await
    }

    /// Retrieve a single mission run
    ///
    /// GET /v2/ai/missions/{mission_id}/runs/{run_id}
    pub async fn retrieve_mission_run(
        &self,
        mission_id: &str,
        run_id: &str,
    ) -> Result<MissionRun> {
        let endpoint = format!("/v2/ai/missions/{}/runs/{}", mission_id, run_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Update a run: cancel it, attach notes, or mark it reviewed
    ///
    /// PATCH /v2/ai/missions/{mission_id}/runs/{run_id}
    pub async fn update_mission_run(
        &self,
        mission_id: &str,
        run_id: &str,
        params: &MissionRunUpdateParams,
    ) -> Result<MissionRun> {
        let endpoint = format!("/v2/ai/missions/{}/runs/{}", mission_id, run_id);
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, RinglineClient};
    use crate::types::{
        MissionCreateParams, MissionRunListParams, MissionRunStatus, MissionRunUpdateParams,
        MissionStatus,
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
    async fn test_create_mission() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "mis-1",
                "record_type": "mission",
                "assistant_id": "asst-1",
                "name": "renewal-outreach",
                "objective": "Remind customers about plan renewal.",
                "status": "draft",
                "phone_number_id": "pn-1",
                "max_attempts": 3,
                "created_at": "2026-05-01T00:00:00Z"
            }
        }"#;

        let params = MissionCreateParams {
            phone_number_id: Some("pn-1".to_string()),
            max_attempts: Some(3),
            ..MissionCreateParams::new(
                "asst-1",
                "renewal-outreach",
                "Remind customers about plan renewal.",
            )
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/v2/ai/missions"))
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
            .create_mission(&params)
            .await
            .expect("create_mission failed");

        assert_eq!(response.id, "mis-1");
        assert_eq!(response.status, MissionStatus::Draft);
        assert_eq!(response.max_attempts, Some(3));
    }

    #[tokio::test]
    async fn test_list_mission_runs() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": [
                {
                    "id": "run-1",
                    "record_type": "mission_run",
                    "mission_id": "mis-1",
                    "status": "completed",
                    "attempt": 1,
                    "call_control_id": "v3:call-9",
                    "outcome": "customer renewed",
                    "started_at": "2026-05-02T09:00:00Z",
                    "completed_at": "2026-05-02T09:04:00Z"
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
            .and(path("/v2/ai/missions/mis-1/runs"))
            .and(query_param("filter[status]", "completed"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = MissionRunListParams {
            filter_status: Some(MissionRunStatus::Completed),
            ..MissionRunListParams::default()
        };
        let page = client
            .list_mission_runs("mis-1", &params)
            .await
            .expect("list_mission_runs failed");

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].status, MissionRunStatus::Completed);
        assert_eq!(page.data[0].outcome.as_deref(), Some("customer renewed"));
    }

    #[tokio::test]
    async fn test_update_mission_run_cancels() {
        let server = MockServer::start().await;
        // Older API versions report the British spelling.
        let mock_response = r#"{
            "data": {
                "id": "run-2",
                "record_type": "mission_run",
                "mission_id": "mis-1",
                "status": "cancelled",
                "attempt": 0,
                "notes": "customer asked to stop",
                "reviewed": true
            }
        }"#;

        let params = MissionRunUpdateParams {
            status: Some(MissionRunStatus::Canceled),
            notes: Some("customer asked to stop".to_string()),
            reviewed: Some(true),
        };

        let _mock = Mock::given(method("PATCH"))
            .and(path("/v2/ai/missions/mis-1/runs/run-2"))
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
            .update_mission_run("mis-1", "run-2", &params)
            .await
            .expect("update_mission_run failed");

        assert_eq!(response.status, MissionRunStatus::Canceled);
        assert!(response.reviewed);
    }

    #[tokio::test]
    async fn test_delete_mission_returns_final_record() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "mis-1",
                "record_type": "mission",
                "assistant_id": "asst-1",
                "name": "renewal-outreach",
                "objective": "Remind customers about plan renewal.",
                "status": "completed",
                "created_at": "2026-05-01T00:00:00Z",
                "updated_at": "2026-05-06T00:00:00Z"
            }
        }"#;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/v2/ai/missions/mis-1"))
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
            .delete_mission("mis-1")
            .await
            .expect("delete_mission failed");

        assert_eq!(response.id, "mis-1");
        assert_eq!(response.status, MissionStatus::Completed);
    }
}
