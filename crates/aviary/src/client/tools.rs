//! Tool endpoints.

use aviary_protocol::{CreateToolRequest, DeleteResponse, Page, Tool, ToolListQuery};

use super::PlatformClient;
use crate::error::{ClientError, ClientResult};

impl PlatformClient {
    /// List tools, optionally filtered by type and category.
    pub async fn list_tools(&self, query: &ToolListQuery) -> ClientResult<Page<Tool>> {
        let response = self
            .authorize(self.client.get(self.url("/tools")))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch one tool by id.
    pub async fn get_tool(&self, id: &str) -> ClientResult<Tool> {
        let response = self
            .authorize(self.client.get(self.url(&format!("/tools/{id}"))))
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("tool", id))
    }

    /// Register a tool. The server assigns id, version and timestamps.
    pub async fn create_tool(&self, request: &CreateToolRequest) -> ClientResult<Tool> {
        if request.name.trim().is_empty() {
            return Err(ClientError::Validation("tool name is required".to_string()));
        }

        let response = self
            .authorize(self.client.post(self.url("/tools")))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a tool. Agents that reference it are left in place.
    pub async fn delete_tool(&self, id: &str) -> ClientResult<DeleteResponse> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("/tools/{id}"))))
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("tool", id))
    }
}
