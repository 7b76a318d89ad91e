/*
[INPUT]:  Message parameters (recipients, text, media)
[OUTPUT]: Message records with per-recipient delivery state
[POS]:    HTTP layer - outbound messaging and message lookup
[UPDATE]: When adding new messaging endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{Result, RinglineClient};
use crate::types::{Message, MessageSendParams};

impl RinglineClient {
    /// Send an SMS or MMS message
    ///
    /// POST /v2/messages
    pub async fn send_message(&self, params: &MessageSendParams) -> Result<Message> {
        let builder = self.api_request(Method::POST, "/v2/messages")?.json(params);
        self.send_enveloped(builder).await
    }

    /// Retrieve a previously sent or received message
    ///
    /// GET /v2/messages/{message_id}
    pub async fn retrieve_message(&self, message_id: &str) -> Result<Message> {
        let endpoint = format!("/v2/messages/{}", message_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }
}
