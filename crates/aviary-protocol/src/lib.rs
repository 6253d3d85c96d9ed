//! Canonical protocol types for the Aviary agent platform API.
//!
//! Every type here serializes to the exact JSON shape the platform speaks:
//! entities and their request/response payloads, the uniform response
//! envelope, pagination, and the closed metadata value type used for the
//! free-form maps (model configuration, context, metadata).
//!
//! The binary wire contract in `aviary-wire` mirrors these types
//! field-for-field; keep the two in sync when the API grows.

pub mod agent;
pub mod auth;
pub mod conversation;
pub mod envelope;
pub mod knowledge;
pub mod pagination;
pub mod tool;
pub mod value;

pub use agent::{Agent, AgentListQuery, AgentStatus, AgentType, CreateAgentRequest, UpdateAgentRequest};
pub use auth::{LoginRequest, LoginResponse, UserInfo};
pub use conversation::{
    Conversation, ConversationListQuery, ConversationStatus, CreateConversationRequest, Message,
    MessageRole, SendMessageRequest, SendMessageResponse,
};
pub use envelope::{DeleteResponse, Envelope};
pub use knowledge::{
    CreateKnowledgeBaseRequest, Document, KnowledgeBase, KnowledgeBaseListQuery,
    KnowledgeBaseType, UploadDocumentRequest, DEFAULT_EMBEDDING_MODEL,
};
pub use pagination::Page;
pub use tool::{CreateToolRequest, Tool, ToolListQuery, ToolType};
pub use value::{shallow_merge, MetaMap, MetaValue};
