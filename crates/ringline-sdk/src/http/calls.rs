/*
[INPUT]:  Call control ids and call command parameters
[OUTPUT]: Call records and command acknowledgements
[POS]:    HTTP layer - voice call creation and in-call commands
[UPDATE]: When adding new call commands or changing response format
*/

use reqwest::Method;

use crate::http::{Result, RinglineClient};
use crate::types::{
    AnswerParams, BridgeParams, Call, CommandResult, DialParams, HangupParams, RecordStartParams,
    RecordStopParams, SpeakParams,
};

impl RinglineClient {
    /// Dial an outbound call
    ///
    /// POST /v2/calls
    pub async fn dial(&self, params: &DialParams) -> Result<Call> {
        let builder = self.api_request(Method::POST, "/v2/calls")?.json(params);
        self.send_enveloped(builder).await
    }

    /// Retrieve the current state of a call leg
    ///
    /// GET /v2/calls/{call_control_id}
    pub async fn retrieve_call(&self, call_control_id: &str) -> Result<Call> {
        let endpoint = format!("/v2/calls/{}", call_control_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// Answer an incoming call
    ///
    /// POST /v2/calls/{call_control_id}/actions/answer
    pub async fn answer_call(
        &self,
        call_control_id: &str,
        params: &AnswerParams,
    ) -> Result<CommandResult> {
        self.call_action(call_control_id, "answer", params).await
    }

    /// Hang up a call leg
    ///
    /// POST /v2/calls/{call_control_id}/actions/hangup
    pub async fn hangup_call(
        &self,
        call_control_id: &str,
        params: &HangupParams,
    ) -> Result<CommandResult> {
        self.call_action(call_control_id, "hangup", params).await
    }

    /// Bridge two call legs together
    ///
    /// POST /v2/calls/{call_control_id}/actions/bridge
    pub async fn bridge_call(
        &self,
        call_control_id: &str,
        params: &BridgeParams,
    ) -> Result<CommandResult> {
        self.call_action(call_control_id, "bridge", params).await
    }

    /// Speak synthesized text on a call
    ///
    /// POST /v2/calls/{call_control_id}/actions/speak
    pub async fn speak_text(
        &self,
        call_control_id: &str,
        params: &SpeakParams,
    ) -> Result<CommandResult> {
        self.call_action(call_control_id, "speak", params).await
    }

    /// Start recording a call
    ///
    /// POST /v2/calls/{call_control_id}/actions/record_start
    pub async fn start_recording(
        &self,
        call_control_id: &str,
        params: &RecordStartParams,
    ) -> Result<CommandResult> {
        self.call_action(call_control_id, "record_start", params)
            .await
    }

    /// Stop an in-progress call recording
    ///
    /// POST /v2/calls/{call_control_id}/actions/record_stop
    pub async fn stop_recording(
        &self,
        call_control_id: &str,
        params: &RecordStopParams,
    ) -> Result<CommandResult> {
        self.call_action(call_control_id, "record_stop", params)
            .await
    }

    async fn call_action<P: serde::Serialize>(
        &self,
        call_control_id: &str,
        action: &str,
        params: &P,
    ) -> Result<CommandResult> {
        let endpoint = format!("/v2/calls/{}/actions/{}", call_control_id, action);
        let builder = self.api_request(Method::POST, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }
}
