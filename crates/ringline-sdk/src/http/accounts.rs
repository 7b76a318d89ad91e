/*
[INPUT]:  Managed account ids and provisioning parameters
[OUTPUT]: Managed account records for reseller hierarchies
[POS]:    HTTP layer - sub-account provisioning and lifecycle
[UPDATE]: When adding account operations or changing response format
*/

use reqwest::Method;

use crate::http::{Result, RinglineClient};
use crate::types::{
    EnableManagedAccountParams, ManagedAccount, ManagedAccountCreateParams,
    ManagedAccountListParams, ManagedAccountUpdateParams, Paginated,
};

impl RinglineClient {
    /// Provision a new managed sub-account
    ///
    /// POST /v2/managed_accounts
    pub async fn create_managed_account(
        &self,
        params: &ManagedAccountCreateParams,
    ) -> Result<ManagedAccount> {
        let builder = self
            .api_request(Method::POST, "/v2/managed_accounts")?
            .json(params);
        self.send_enveloped(builder).await
    }

    /// List managed accounts under this manager account
    ///
    /// GET /v2/managed_accounts
    pub async fn list_managed_accounts(
        &self,
        params: &ManagedAccountListParams,
    ) -> Result<Paginated<ManagedAccount>> {
        let builder = self
            .api_request(Method::GET, "/v2/managed_accounts")?
            .query(&params.query());
        self.send_json(builder).await
    }

    /// Retrieve a single managed account
    ///
    /// GET /v2/managed_accounts/{account_id}
    pub async fn retrieve_managed_account(&self, account_id: &str) -> Result<ManagedAccount> {
        let endpoint = format!("/v2/managed_accounts/{}", account_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Update a managed account's profile
    ///
    /// PATCH /v2/managed_accounts/{account_id}
    pub async fn update_managed_account(
        &self,
        account_id: &str,
        params: &ManagedAccountUpdateParams,
    ) -> Result<ManagedAccount> {
        let endpoint = format!("/v2/managed_accounts/{}", account_id);
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }

    /// Re-enable a disabled managed account
    ///
    /// POST /v2/managed_accounts/{account_id}/actions/enable
    pub async fn enable_managed_account(
        &self,
        account_id: &str,
        params: &EnableManagedAccountParams,
    ) -> Result<ManagedAccount> {
        let endpoint = format!("/v2/managed_accounts/{}/actions/enable", account_id);
        let builder = self.api_request(Method::POST, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }

    /// Disable a managed account, suspending its traffic
    ///
    /// POST /v2/managed_accounts/{account_id}/actions/disable
    pub async fn disable_managed_account(&self, account_id: &str) -> Result<ManagedAccount> {
        let endpoint = format!("/v2/managed_accounts/{}/actions/disable", account_id);
        let builder = self.api_request(Method::POST, &endpoint)?;
        self.send_enveloped(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, RinglineClient};
    use crate::types::{
        EnableManagedAccountParams, ManagedAccountCreateParams, ManagedAccountListParams,
        SortOrder,
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
    async fn test_create_managed_account_exposes_api_token_once() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "acct-1",
                "record_type": "managed_account",
                "email": "ops@acme.example",
                "api_user": "ops@acme.example",
                "manager_account_id": "acct-root",
                "organization_name": "Acme Support",
                "api_token": "KEY-created-once",
                "managed_account_allow_custom_pricing": false,
                "rollup_billing": true,
                "created_at": "2026-05-01T00:00:00Z"
            }
        }"#;

        let params = ManagedAccountCreateParams {
            email: Some("ops@acme.example".to_string()),
            rollup_billing: Some(true),
            ..ManagedAccountCreateParams::new("Acme Support")
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/v2/managed_accounts"))
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
            .create_managed_account(&params)
            .await
            .expect("create_managed_account failed");

        assert_eq!(response.api_token.as_deref(), Some("KEY-created-once"));
        assert!(response.rollup_billing);
        assert!(!response.disabled);
    }

    #[tokio::test]
    async fn test_list_managed_accounts() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": [
                {
                    "id": "acct-1",
                    "record_type": "managed_account",
                    "email": "ops@acme.example",
                    "api_user": "ops@acme.example",
                    "manager_account_id": "acct-root",
                    "disabled": true,
                    "created_at": "2026-05-01T00:00:00Z"
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
            .and(path("/v2/managed_accounts"))
            .and(query_param("include_cancelled_accounts", "true"))
            .and(query_param("sort[created_at]", "desc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = ManagedAccountListParams {
            include_cancelled_accounts: Some(true),
            sort_created_at: Some(SortOrder::Desc),
            ..ManagedAccountListParams::default()
        };
        let page = client
            .list_managed_accounts(&params)
            .await
            .expect("list_managed_accounts failed");

        assert_eq!(page.data.len(), 1);
        assert!(page.data[0].disabled);
        // The token never comes back after creation.
        assert_eq!(page.data[0].api_token, None);
    }

    #[tokio::test]
    async fn test_enable_managed_account() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "acct-1",
                "record_type": "managed_account",
                "email": "ops@acme.example",
                "api_user": "ops@acme.example",
                "manager_account_id": "acct-root",
                "disabled": false,
                "created_at": "2026-05-01T00:00:00Z",
                "updated_at": "2026-05-03T00:00:00Z"
            }
        }"#;

        let params = EnableManagedAccountParams {
            reenable_all_connections: Some(true),
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/v2/managed_accounts/acct-1/actions/enable"))
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
            .enable_managed_account("acct-1", &params)
            .await
            .expect("enable_managed_account failed");

        assert!(!response.disabled);
    }

    #[tokio::test]
    async fn test_disable_managed_account() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "data": {
                "id": "acct-1",
                "record_type": "managed_account",
                "email": "ops@acme.example",
                "api_user": "ops@acme.example",
                "manager_account_id": "acct-root",
                "disabled": true,
                "created_at": "2026-05-01T00:00:00Z"
            }
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/v2/managed_accounts/acct-1/actions/disable"))
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
            .disable_managed_account("acct-1")
            .await
            .expect("disable_managed_account failed");

        assert!(response.disabled);
    }
}
