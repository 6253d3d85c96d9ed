//! Conversation endpoints.

use aviary_protocol::{
    Conversation, ConversationListQuery, CreateConversationRequest, Page, SendMessageRequest,
    SendMessageResponse,
};

use super::PlatformClient;
use crate::error::{ClientError, ClientResult};

impl PlatformClient {
    /// List conversations, optionally restricted to one agent.
    pub async fn list_conversations(
        &self,
        query: &ConversationListQuery,
    ) -> ClientResult<Page<Conversation>> {
        let response = self
            .authorize(self.client.get(self.url("/conversations")))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch one conversation with its full message log.
    pub async fn get_conversation(&self, id: &str) -> ClientResult<Conversation> {
        let response = self
            .authorize(self.client.get(self.url(&format!("/conversations/{id}"))))
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("conversation", id))
    }

    /// Start a conversation with an agent. The title defaults server-side
    /// when absent.
    pub async fn create_conversation(
        &self,
        request: &CreateConversationRequest,
    ) -> ClientResult<Conversation> {
        if request.agent_id.trim().is_empty() {
            return Err(ClientError::Validation("agent id is required".to_string()));
        }

        let response = self
            .authorize(self.client.post(self.url("/conversations")))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Send a message into a conversation.
    ///
    /// The response carries every message the exchange produced, in log
    /// order: the stored user message plus the assistant reply (or more).
    /// Nothing is echoed back optimistically.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        request: &SendMessageRequest,
    ) -> ClientResult<SendMessageResponse> {
        let response = self
            .authorize(
                self.client
                    .post(self.url(&format!("/conversations/{conversation_id}/messages"))),
            )
            .json(request)
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("conversation", conversation_id))
    }
}
