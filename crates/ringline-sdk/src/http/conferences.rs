/*
[INPUT]:  Conference ids, participant selections, room parameters
[OUTPUT]: Conference and participant records, command acknowledgements
[POS]:    HTTP layer - conference rooms and participant commands
[UPDATE]: When adding new conference commands or changing response format
*/

use futures_util::stream::Stream;
use reqwest::Method;

use crate::http::paging::stream_pages;
use crate::http::{Result, RinglineClient};
use crate::types::{
    CommandResult, Conference, ConferenceCreateParams, ConferenceListParams, HoldParams,
    JoinParams, LeaveParams, MuteParams, Paginated, Participant, ParticipantListParams,
    UnholdParams, UnmuteParams,
};

impl RinglineClient {
    /// Create a conference from an existing call leg
    ///
    /// POST /v2/conferences
    pub async fn create_conference(&self, params: &ConferenceCreateParams) -> Result<Conference> {
        let builder = self
            .api_request(Method::POST, "/v2/conferences")?
            .json(params);
        self.send_enveloped(builder).await
    }

    /// List conferences, newest first
    ///
    /// GET /v2/conferences
    pub async fn list_conferences(
        &self,
        params: &ConferenceListParams,
    ) -> Result<Paginated<Conference>> {
        let builder = self
            .api_request(Method::GET, "/v2/conferences")?
            .query(&params.query());
        self.send_json(builder).await
    }

    /// Stream conferences across every page of results
    pub fn list_conferences_stream(
        &self,
        params: ConferenceListParams,
    ) -> impl Stream<Item = Result<Conference>> + '_ {
        stream_pages(move |page_number| {
            let params = ConferenceListParams {
                page_number: Some(page_number),
                ..params.clone()
            };
            async move { self.list_conferences(&params).await }
        })
    }

    /// Retrieve a single conference
    ///
    /// GET /v2/conferences/{conference_id}
    pub async fn retrieve_conference(&self, conference_id: &str) -> Result<Conference> {
        let endpoint = format!("/v2/conferences/{}", conference_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_enveloped(builder).await
    }

    /// List the participants of a conference
    ///
    /// GET /v2/conferences/{conference_id}/participants
    pub async fn list_participants(
        &self,
        conference_id: &str,
        params: &ParticipantListParams,
    ) -> Result<Paginated<Participant>> {
        let endpoint = format!("/v2/conferences/{}/participants", conference_id);
        let builder = self
            .api_request(Method::GET, &endpoint)?
            .query(&params.query());
        self.send_json(builder).await
    }

    /// Join a call leg into a conference
    ///
    /// POST /v2/conferences/{conference_id}/actions/join
    pub async fn join_conference(
        &self,
        conference_id: &str,
        params: &JoinParams,
    ) -> Result<CommandResult> {
        self.conference_action(conference_id, "join", params).await
    }

    /// Remove a call leg from a conference
    ///
    /// POST /v2/conferences/{conference_id}/actions/leave
    pub async fn leave_conference(
        &self,
        conference_id: &str,
        params: &LeaveParams,
    ) -> Result<CommandResult> {
        self.conference_action(conference_id, "leave", params).await
    }

    /// Mute participants (all of them when the id list is empty)
    ///
    /// POST /v2/conferences/{conference_id}/actions/mute
    pub async fn mute_participants(
        &self,
        conference_id: &str,
        params: &MuteParams,
    ) -> Result<CommandResult> {
        self.conference_action(conference_id, "mute", params).await
    }

    /// Unmute participants (all of them when the id list is empty)
    ///
    /// POST /v2/conferences/{conference_id}/actions/unmute
    pub async fn unmute_participants(
        &self,
        conference_id: &str,
        params: &UnmuteParams,
    ) -> Result<CommandResult> {
        self.conference_action(conference_id, "unmute", params)
            .await
    }

    /// Place participants on hold (all of them when the id list is empty)
    ///
    /// POST /v2/conferences/{conference_id}/actions/hold
    pub async fn hold_participants(
        &self,
        conference_id: &str,
        params: &HoldParams,
    ) -> Result<CommandResult> {
        self.conference_action(conference_id, "hold", params).await
    }

    /// Take named participants off hold
    ///
    /// POST /v2/conferences/{conference_id}/actions/unhold
    pub async fn unhold_participants(
        &self,
        conference_id: &str,
        params: &UnholdParams,
    ) -> Result<CommandResult> {
        self.conference_action(conference_id, "unhold", params)
            .await
    }

    async fn conference_action<P: serde::Serialize>(
        &self,
        conference_id: &str,
        action: &str,
        params: &P,
    ) -> Result<CommandResult> {
        let endpoint = format!("/v2/conferences/{}/actions/{}", conference_id, action);
        let builder = self.api_request(Method::POST, &endpoint)?.json(params);
        self.send_enveloped(builder).await
    }
}
