/*
[INPUT]:  Assistant ids and configuration (model, instructions, tools)
[OUTPUT]: Assistant records for AI-driven voice agents
[POS]:    HTTP layer - AI assistant configuration endpoints
[UPDATE]: When adding assistant capabilities or changing response format
*/

use reqwest::Method;

use crate::http::{Result, RinglineClient};
use crate::types::{
    Assistant, AssistantCreateParams, AssistantListParams, AssistantUpdateParams, Paginated,
};

impl RinglineClient {
    /// Create an AI assistant
    ///
    /// POST /v2/ai/assistants
    pub async fn create_assistant(&self, params: &AssistantCreateParams) -> Result<Assistant> {
        let builder = self
            .api_request(Method::POST, "/v2/ai/assistants")?
            .json(params);
        self.send_enveloped(builder).await
    }

    /// List AI assistants
    ///
    /// GET /v2/ai/assistants
    pub async fn list_assistants(
        &self,
        params: &AssistantListParams,
    ) -> Result<Paginated<Assistant>> {
        let builder = self
            .api_request(Method::GET, "/v2/ai/assistants")?
            .query(&params.query());
        self.send_json(builder).await
    }

    /// Retrieve a single assistant
    ///
    /// GET /v2/ai/assistants/{assistant_id}
    pub async fn retrieve_assistant(&self, assistant_id: &str) -> Result<Assistant> {
        let endpoint = format!("/v2/ai/assistants/{}", assistant_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Update an assistant's configuration
    ///
    /// PATCH /v2/ai/assistants/{assistant_id}
    pub async fn update_assistant(
        &self,
        assistant_id: &str,
        params: &AssistantUpdateParams,
    ) -> Result<Assistant> {
        let endpoint = format!("/v2/ai/assistants/{}", assistant_id);
        let builder = self.api_request(Method::PATCH, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }

    /// Delete an assistant; fails while missions still reference it.
    /// Returns the final state of the record.
    ///
    /// DELETE /v2/ai/assistants/{assistant_id}
    pub async fn delete_assistant(&self, assistant_id: &str) -> Result<Assistant> {
        let endpoint = format!("/v2/ai/assistants/{}", assistant_id);
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        self.send_enveloped(builder).await
    }
}
