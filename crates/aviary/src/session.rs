//! Conversation session model.
//!
//! A [`ConversationSession`] owns one conversation's message log and the
//! model binding of the agent behind it. The backend is authoritative for
//! both: the session never mutates local state until the corresponding
//! call has succeeded, and it appends exactly the messages the server
//! returns, in server order.

use std::sync::Arc;

use async_trait::async_trait;
use aviary_protocol::{
    shallow_merge, Agent, Conversation, MetaMap, MetaValue, Message, SendMessageRequest,
    SendMessageResponse, UpdateAgentRequest,
};
use tracing::debug;

use crate::client::PlatformClient;
use crate::error::{ClientError, ClientResult};

/// Model bound when an agent's configuration does not name one.
pub const FALLBACK_MODEL: &str = "deepseek-ai/DeepSeek-V3";

/// The platform calls a conversation session performs, abstracted for
/// testability.
#[async_trait]
pub trait ConversationApi: Send + Sync {
    async fn get_conversation(&self, id: &str) -> ClientResult<Conversation>;
    async fn get_agent(&self, id: &str) -> ClientResult<Agent>;
    async fn update_agent(&self, id: &str, request: &UpdateAgentRequest) -> ClientResult<Agent>;
    async fn send_message(
        &self,
        conversation_id: &str,
        request: &SendMessageRequest,
    ) -> ClientResult<SendMessageResponse>;
}

#[async_trait]
impl ConversationApi for PlatformClient {
    async fn get_conversation(&self, id: &str) -> ClientResult<Conversation> {
        PlatformClient::get_conversation(self, id).await
    }

    async fn get_agent(&self, id: &str) -> ClientResult<Agent> {
        PlatformClient::get_agent(self, id).await
    }

    async fn update_agent(&self, id: &str, request: &UpdateAgentRequest) -> ClientResult<Agent> {
        PlatformClient::update_agent(self, id, request).await
    }

    async fn send_message(
        &self,
        conversation_id: &str,
        request: &SendMessageRequest,
    ) -> ClientResult<SendMessageResponse> {
        PlatformClient::send_message(self, conversation_id, request).await
    }
}

/// One open conversation and its agent's model binding.
///
/// Holds a transient, non-authoritative copy of the server state. The
/// message log is append-only for the lifetime of the session; the model
/// binding is re-derived from the agent whenever the agent is refetched.
pub struct ConversationSession {
    api: Arc<dyn ConversationApi>,
    conversation_id: String,
    agent_id: String,
    title: Option<String>,
    messages: Vec<Message>,
    model_config: MetaMap,
    selected_model: String,
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("conversation_id", &self.conversation_id)
            .field("agent_id", &self.agent_id)
            .field("title", &self.title)
            .field("messages", &self.messages)
            .field("model_config", &self.model_config)
            .field("selected_model", &self.selected_model)
            .finish_non_exhaustive()
    }
}

impl ConversationSession {
    /// Open a session: fetch the conversation, fetch its agent, and bind
    /// the model from the agent's configuration.
    pub async fn open(
        api: Arc<dyn ConversationApi>,
        conversation_id: &str,
    ) -> ClientResult<Self> {
        let conversation = api.get_conversation(conversation_id).await?;
        let agent = api.get_agent(&conversation.agent_id).await?;

        let selected_model = derive_model(&agent.model_config);
        debug!(
            conversation_id = %conversation.id,
            agent_id = %conversation.agent_id,
            model = %selected_model,
            "opened conversation session"
        );

        Ok(Self {
            api,
            conversation_id: conversation.id,
            agent_id: conversation.agent_id,
            title: conversation.title,
            messages: conversation.messages,
            model_config: agent.model_config,
            selected_model,
        })
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The message log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The currently bound model identifier.
    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    /// The agent's full model configuration.
    pub fn model_config(&self) -> &MetaMap {
        &self.model_config
    }

    /// Bind a different model.
    ///
    /// Persists the change by updating the agent's model configuration
    /// with only the `model` key replaced; every other key in the map is
    /// carried over unchanged. Local state moves only after the update
    /// succeeds, so a failed call leaves the previous binding intact.
    pub async fn change_model(&mut self, model: &str) -> ClientResult<()> {
        let mut config = self.model_config.clone();
        let mut overlay = MetaMap::new();
        overlay.insert("model".to_string(), MetaValue::from(model));
        shallow_merge(&mut config, overlay);

        let request = UpdateAgentRequest::model_config(config);
        let agent = self.api.update_agent(&self.agent_id, &request).await?;

        self.model_config = agent.model_config;
        self.selected_model = derive_model(&self.model_config);
        debug!(agent_id = %self.agent_id, model = %self.selected_model, "model changed");
        Ok(())
    }

    /// Send a user message and append the server's reply messages.
    ///
    /// The server stores the user message and produces the assistant
    /// reply in one call; both come back in the response and are appended
    /// here in the order received. Nothing is appended optimistically, so
    /// a failure leaves the log untouched. Returns the newly appended
    /// tail.
    pub async fn send_message(&mut self, content: &str) -> ClientResult<&[Message]> {
        if content.trim().is_empty() {
            return Err(ClientError::Validation(
                "message content is required".to_string(),
            ));
        }

        let request = SendMessageRequest::user(content);
        let response = self
            .api
            .send_message(&self.conversation_id, &request)
            .await?;

        let start = self.messages.len();
        self.messages.extend(response.messages);
        Ok(&self.messages[start..])
    }

    /// Refetch the conversation and agent, replacing local state.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let conversation = self.api.get_conversation(&self.conversation_id).await?;
        let agent = self.api.get_agent(&conversation.agent_id).await?;

        self.agent_id = conversation.agent_id;
        self.title = conversation.title;
        self.messages = conversation.messages;
        self.model_config = agent.model_config;
        self.selected_model = derive_model(&self.model_config);
        Ok(())
    }
}

/// The model an agent configuration binds, or the fallback.
fn derive_model(config: &MetaMap) -> String {
    config
        .get("model")
        .and_then(MetaValue::as_str)
        .filter(|model| !model.trim().is_empty())
        .unwrap_or(FALLBACK_MODEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use aviary_protocol::{AgentStatus, AgentType, ConversationStatus, MessageRole};
    use chrono::Utc;

    use super::*;

    fn sample_agent(model_config: MetaMap) -> Agent {
        Agent {
            id: "agent-1".to_string(),
            name: "Support Bot".to_string(),
            description: String::new(),
            agent_type: AgentType::Single,
            model_config,
            tools: Vec::new(),
            knowledge_bases: Vec::new(),
            prompt_template: String::new(),
            parameters: MetaMap::new(),
            status: AgentStatus::Published,
            version: "1.0.0".to_string(),
            created_by: String::new(),
            tags: Vec::new(),
            folder: String::new(),
            is_public: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_conversation(messages: Vec<Message>) -> Conversation {
        Conversation {
            id: "conv-1".to_string(),
            agent_id: "agent-1".to_string(),
            user_id: "user-1".to_string(),
            title: Some("Test".to_string()),
            messages,
            context: MetaMap::new(),
            metadata: MetaMap::new(),
            status: ConversationStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_message_at: None,
        }
    }

    struct FakePlatform {
        conversation: Mutex<Conversation>,
        agent: Mutex<Agent>,
        sent: Mutex<Vec<SendMessageRequest>>,
        fail_updates: bool,
    }

    impl FakePlatform {
        fn new(conversation: Conversation, agent: Agent) -> Self {
            Self {
                conversation: Mutex::new(conversation),
                agent: Mutex::new(agent),
                sent: Mutex::new(Vec::new()),
                fail_updates: false,
            }
        }

        fn failing_updates(mut self) -> Self {
            self.fail_updates = true;
            self
        }
    }

    #[async_trait]
    impl ConversationApi for FakePlatform {
        async fn get_conversation(&self, _id: &str) -> ClientResult<Conversation> {
            Ok(self.conversation.lock().unwrap().clone())
        }

        async fn get_agent(&self, _id: &str) -> ClientResult<Agent> {
            Ok(self.agent.lock().unwrap().clone())
        }

        async fn update_agent(
            &self,
            _id: &str,
            request: &UpdateAgentRequest,
        ) -> ClientResult<Agent> {
            if self.fail_updates {
                return Err(ClientError::Api {
                    code: 500,
                    message: "update failed".to_string(),
                });
            }

            let mut agent = self.agent.lock().unwrap();
            if let Some(config) = &request.model_config {
                agent.model_config = config.clone();
            }
            Ok(agent.clone())
        }

        async fn send_message(
            &self,
            _conversation_id: &str,
            request: &SendMessageRequest,
        ) -> ClientResult<SendMessageResponse> {
            self.sent.lock().unwrap().push(request.clone());

            let user = Message::user(request.content.as_str());
            let assistant = Message::assistant(format!("echo: {}", request.content));
            let mut conversation = self.conversation.lock().unwrap();
            conversation.messages.push(user.clone());
            conversation.messages.push(assistant.clone());

            Ok(SendMessageResponse {
                conversation_id: conversation.id.clone(),
                messages: vec![user, assistant],
            })
        }
    }

    fn fake_session_parts(model_config: MetaMap, messages: Vec<Message>) -> Arc<FakePlatform> {
        Arc::new(FakePlatform::new(
            sample_conversation(messages),
            sample_agent(model_config),
        ))
    }

    #[tokio::test]
    async fn test_open_binds_configured_model() {
        let mut config = MetaMap::new();
        config.insert("model".to_string(), MetaValue::from("gpt-4o"));
        let fake = fake_session_parts(config, Vec::new());

        let session = ConversationSession::open(fake, "conv-1").await.unwrap();

        assert_eq!(session.selected_model(), "gpt-4o");
        assert_eq!(session.agent_id(), "agent-1");
    }

    #[tokio::test]
    async fn test_open_falls_back_when_model_absent() {
        let fake = fake_session_parts(MetaMap::new(), Vec::new());

        let session = ConversationSession::open(fake, "conv-1").await.unwrap();

        assert_eq!(session.selected_model(), FALLBACK_MODEL);
    }

    #[tokio::test]
    async fn test_open_with_empty_log_yields_no_messages() {
        let fake = fake_session_parts(MetaMap::new(), Vec::new());

        let session = ConversationSession::open(fake, "conv-1").await.unwrap();

        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn test_send_message_appends_server_reply_in_order() {
        let existing = vec![Message::user("earlier"), Message::assistant("noted")];
        let fake = fake_session_parts(MetaMap::new(), existing.clone());

        let mut session = ConversationSession::open(fake, "conv-1").await.unwrap();
        let appended = session.send_message("hello").await.unwrap();

        assert_eq!(appended.len(), 2);
        assert_eq!(appended[0].role, MessageRole::User);
        assert_eq!(appended[0].content, "hello");
        assert_eq!(appended[1].role, MessageRole::Assistant);
        assert_eq!(appended[1].content, "echo: hello");

        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.messages()[0].content, existing[0].content);
        assert_eq!(session.messages()[1].content, existing[1].content);
    }

    #[tokio::test]
    async fn test_send_message_rejects_blank_content() {
        let fake = fake_session_parts(MetaMap::new(), vec![Message::user("earlier")]);

        let mut session = ConversationSession::open(fake.clone(), "conv-1")
            .await
            .unwrap();
        let err = session.send_message("   \n").await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(session.messages().len(), 1);
        assert!(fake.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_change_model_preserves_other_config_keys() {
        let mut config = MetaMap::new();
        config.insert("model".to_string(), MetaValue::from("gpt-4o"));
        config.insert("temperature".to_string(), MetaValue::from(0.7));
        let fake = fake_session_parts(config, Vec::new());

        let mut session = ConversationSession::open(fake.clone(), "conv-1")
            .await
            .unwrap();
        session
            .change_model("claude-3-5-sonnet-20241022")
            .await
            .unwrap();

        assert_eq!(session.selected_model(), "claude-3-5-sonnet-20241022");
        assert_eq!(
            session.model_config().get("temperature"),
            Some(&MetaValue::from(0.7))
        );

        let stored = fake.agent.lock().unwrap();
        assert_eq!(
            stored.model_config.get("model"),
            Some(&MetaValue::from("claude-3-5-sonnet-20241022"))
        );
        assert_eq!(
            stored.model_config.get("temperature"),
            Some(&MetaValue::from(0.7))
        );
    }

    #[tokio::test]
    async fn test_change_model_failure_keeps_previous_binding() {
        let mut config = MetaMap::new();
        config.insert("model".to_string(), MetaValue::from("gpt-4o"));
        let fake = Arc::new(
            FakePlatform::new(sample_conversation(Vec::new()), sample_agent(config))
                .failing_updates(),
        );

        let mut session = ConversationSession::open(fake, "conv-1").await.unwrap();
        let err = session.change_model("deepseek-chat").await.unwrap_err();

        assert!(matches!(err, ClientError::Api { code: 500, .. }));
        assert_eq!(session.selected_model(), "gpt-4o");
        assert_eq!(
            session.model_config().get("model"),
            Some(&MetaValue::from("gpt-4o"))
        );
    }

    #[tokio::test]
    async fn test_refresh_rebinds_model_from_server() {
        let fake = fake_session_parts(MetaMap::new(), Vec::new());

        let mut session = ConversationSession::open(fake.clone(), "conv-1")
            .await
            .unwrap();
        assert_eq!(session.selected_model(), FALLBACK_MODEL);

        fake.agent
            .lock()
            .unwrap()
            .model_config
            .insert("model".to_string(), MetaValue::from("deepseek-chat"));
        session.refresh().await.unwrap();

        assert_eq!(session.selected_model(), "deepseek-chat");
    }
}
