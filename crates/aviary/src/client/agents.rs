//! Agent endpoints.

use aviary_protocol::{
    Agent, AgentListQuery, CreateAgentRequest, DeleteResponse, Page, UpdateAgentRequest,
};

use super::PlatformClient;
use crate::error::{ClientError, ClientResult};

impl PlatformClient {
    /// List agents, optionally filtered by status and type.
    ///
    /// Page and page size default server-side (1 and 10) when unset.
    pub async fn list_agents(&self, query: &AgentListQuery) -> ClientResult<Page<Agent>> {
        let response = self
            .authorize(self.client.get(self.url("/agents")))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch one agent.
    pub async fn get_agent(&self, id: &str) -> ClientResult<Agent> {
        let response = self
            .authorize(self.client.get(self.url(&format!("/agents/{id}"))))
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("agent", id))
    }

    /// Create an agent. The server assigns id, version, status, and
    /// timestamps.
    pub async fn create_agent(&self, request: &CreateAgentRequest) -> ClientResult<Agent> {
        if request.name.trim().is_empty() {
            return Err(ClientError::Validation("agent name is required".to_string()));
        }

        let response = self
            .authorize(self.client.post(self.url("/agents")))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Partially update an agent. Only the set fields are overwritten
    /// server-side; everything else keeps its prior value.
    pub async fn update_agent(
        &self,
        id: &str,
        request: &UpdateAgentRequest,
    ) -> ClientResult<Agent> {
        let response = self
            .authorize(self.client.put(self.url(&format!("/agents/{id}"))))
            .json(request)
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("agent", id))
    }

    /// Delete an agent. Conversations that reference it are left in place;
    /// deleting an id that does not exist fails with not-found.
    pub async fn delete_agent(&self, id: &str) -> ClientResult<DeleteResponse> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("/agents/{id}"))))
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("agent", id))
    }
}
