//! Bridges between the wire messages and the canonical types.
//!
//! Canonical → wire is infallible. Wire → canonical re-validates the
//! string-typed enum fields and requires the entity timestamps, so a
//! malformed payload surfaces as a [`ConvertError`] instead of leaking
//! into the application types.

use chrono::{DateTime, Utc};
use prost_types::value::Kind;
use prost_types::{ListValue, Struct, Timestamp, Value};
use thiserror::Error;

use aviary_protocol::{
    Agent, Conversation, Document, KnowledgeBase, Message, MetaMap, MetaValue,
    SendMessageResponse, Tool, DEFAULT_EMBEDDING_MODEL,
};

use crate::v1;

/// Why a wire message could not be turned into its canonical form.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid {field}: {value:?}")]
    InvalidEnum { field: &'static str, value: String },

    #[error("timestamp field {0} is out of range")]
    InvalidTimestamp(&'static str),

    #[error("missing required field {0}")]
    MissingField(&'static str),
}

/// Canonical metadata map → `google.protobuf.Struct`.
pub fn meta_to_struct(map: &MetaMap) -> Struct {
    Struct {
        fields: map
            .iter()
            .map(|(key, value)| (key.clone(), meta_to_value(value)))
            .collect(),
    }
}

/// `google.protobuf.Struct` → canonical metadata map.
pub fn struct_to_meta(value: Struct) -> MetaMap {
    value
        .fields
        .into_iter()
        .map(|(key, value)| (key, value_to_meta(value)))
        .collect()
}

fn meta_to_value(value: &MetaValue) -> Value {
    let kind = match value {
        MetaValue::Null => Kind::NullValue(0),
        MetaValue::Bool(b) => Kind::BoolValue(*b),
        MetaValue::Number(n) => Kind::NumberValue(*n),
        MetaValue::String(s) => Kind::StringValue(s.clone()),
        MetaValue::List(items) => Kind::ListValue(ListValue {
            values: items.iter().map(meta_to_value).collect(),
        }),
        MetaValue::Map(map) => Kind::StructValue(meta_to_struct(map)),
    };
    Value { kind: Some(kind) }
}

fn value_to_meta(value: Value) -> MetaValue {
    match value.kind {
        // An absent kind decodes the same way proto3 JSON treats it.
        None | Some(Kind::NullValue(_)) => MetaValue::Null,
        Some(Kind::BoolValue(b)) => MetaValue::Bool(b),
        Some(Kind::NumberValue(n)) => MetaValue::Number(n),
        Some(Kind::StringValue(s)) => MetaValue::String(s),
        Some(Kind::ListValue(list)) => {
            MetaValue::List(list.values.into_iter().map(value_to_meta).collect())
        }
        Some(Kind::StructValue(inner)) => MetaValue::Map(struct_to_meta(inner)),
    }
}

/// Canonical UTC instant → wire timestamp.
pub fn datetime_to_timestamp(value: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: value.timestamp(),
        nanos: value.timestamp_subsec_nanos() as i32,
    }
}

/// Wire timestamp → canonical UTC instant.
pub fn timestamp_to_datetime(
    value: &Timestamp,
    field: &'static str,
) -> Result<DateTime<Utc>, ConvertError> {
    u32::try_from(value.nanos)
        .ok()
        .and_then(|nanos| DateTime::from_timestamp(value.seconds, nanos))
        .ok_or(ConvertError::InvalidTimestamp(field))
}

/// Empty maps ride as an unset Struct field.
fn opt_struct(map: &MetaMap) -> Option<Struct> {
    if map.is_empty() {
        None
    } else {
        Some(meta_to_struct(map))
    }
}

fn meta_or_default(value: Option<Struct>) -> MetaMap {
    value.map(struct_to_meta).unwrap_or_default()
}

fn required_datetime(
    value: Option<Timestamp>,
    field: &'static str,
) -> Result<DateTime<Utc>, ConvertError> {
    let timestamp = value.ok_or(ConvertError::MissingField(field))?;
    timestamp_to_datetime(&timestamp, field)
}

fn parse_enum<T: std::str::FromStr>(
    value: String,
    field: &'static str,
) -> Result<T, ConvertError> {
    value
        .parse()
        .map_err(|_| ConvertError::InvalidEnum { field, value })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

impl From<Message> for v1::Message {
    fn from(message: Message) -> Self {
        v1::Message {
            id: message.id,
            role: message.role.to_string(),
            content: message.content,
            metadata: message.metadata.as_ref().map(meta_to_struct),
            timestamp: Some(datetime_to_timestamp(message.timestamp)),
        }
    }
}

impl TryFrom<v1::Message> for Message {
    type Error = ConvertError;

    fn try_from(message: v1::Message) -> Result<Self, Self::Error> {
        Ok(Message {
            id: message.id,
            role: parse_enum(message.role, "role")?,
            content: message.content,
            timestamp: required_datetime(message.timestamp, "timestamp")?,
            metadata: message.metadata.map(struct_to_meta),
        })
    }
}

impl From<Agent> for v1::Agent {
    fn from(agent: Agent) -> Self {
        v1::Agent {
            id: agent.id,
            name: agent.name,
            description: agent.description,
            r#type: agent.agent_type.to_string(),
            model_config: opt_struct(&agent.model_config),
            tools: agent.tools,
            knowledge_bases: agent.knowledge_bases,
            prompt_template: agent.prompt_template,
            parameters: opt_struct(&agent.parameters),
            status: agent.status.to_string(),
            version: agent.version,
            created_by: agent.created_by,
            tags: agent.tags,
            folder: agent.folder,
            created_at: Some(datetime_to_timestamp(agent.created_at)),
            updated_at: Some(datetime_to_timestamp(agent.updated_at)),
        }
    }
}

impl TryFrom<v1::Agent> for Agent {
    type Error = ConvertError;

    fn try_from(agent: v1::Agent) -> Result<Self, Self::Error> {
        Ok(Agent {
            id: agent.id,
            name: agent.name,
            description: agent.description,
            agent_type: parse_enum(agent.r#type, "type")?,
            model_config: meta_or_default(agent.model_config),
            tools: agent.tools,
            knowledge_bases: agent.knowledge_bases,
            prompt_template: agent.prompt_template,
            parameters: meta_or_default(agent.parameters),
            status: parse_enum(agent.status, "status")?,
            version: agent.version,
            created_by: agent.created_by,
            tags: agent.tags,
            folder: agent.folder,
            // The wire Agent does not carry visibility.
            is_public: false,
            created_at: required_datetime(agent.created_at, "created_at")?,
            updated_at: required_datetime(agent.updated_at, "updated_at")?,
        })
    }
}

impl From<Conversation> for v1::Conversation {
    fn from(conversation: Conversation) -> Self {
        v1::Conversation {
            id: conversation.id,
            agent_id: conversation.agent_id,
            user_id: conversation.user_id,
            title: conversation.title.unwrap_or_default(),
            messages: conversation.messages.into_iter().map(Into::into).collect(),
            context: opt_struct(&conversation.context),
            status: conversation.status.to_string(),
            created_at: Some(datetime_to_timestamp(conversation.created_at)),
            updated_at: Some(datetime_to_timestamp(conversation.updated_at)),
            last_message_at: conversation.last_message_at.map(datetime_to_timestamp),
        }
    }
}

impl TryFrom<v1::Conversation> for Conversation {
    type Error = ConvertError;

    fn try_from(conversation: v1::Conversation) -> Result<Self, Self::Error> {
        Ok(Conversation {
            id: conversation.id,
            agent_id: conversation.agent_id,
            user_id: conversation.user_id,
            title: non_empty(conversation.title),
            messages: conversation
                .messages
                .into_iter()
                .map(Message::try_from)
                .collect::<Result<_, _>>()?,
            context: meta_or_default(conversation.context),
            // The wire Conversation does not carry metadata.
            metadata: MetaMap::new(),
            status: parse_enum(conversation.status, "status")?,
            created_at: required_datetime(conversation.created_at, "created_at")?,
            updated_at: required_datetime(conversation.updated_at, "updated_at")?,
            last_message_at: conversation
                .last_message_at
                .map(|timestamp| timestamp_to_datetime(&timestamp, "last_message_at"))
                .transpose()?,
        })
    }
}

impl From<SendMessageResponse> for v1::SendMessageResponse {
    fn from(response: SendMessageResponse) -> Self {
        v1::SendMessageResponse {
            conversation_id: response.conversation_id,
            messages: response.messages.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<v1::SendMessageResponse> for SendMessageResponse {
    type Error = ConvertError;

    fn try_from(response: v1::SendMessageResponse) -> Result<Self, Self::Error> {
        Ok(SendMessageResponse {
            conversation_id: response.conversation_id,
            messages: response
                .messages
                .into_iter()
                .map(Message::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<Tool> for v1::Tool {
    fn from(tool: Tool) -> Self {
        v1::Tool {
            id: tool.id,
            name: tool.name,
            description: tool.description,
            r#type: tool.tool_type.to_string(),
            schema: opt_struct(&tool.schema),
            implementation: tool.implementation,
            version: tool.version,
            is_public: tool.is_public,
            created_by: tool.created_by,
            category: tool.category,
            tags: tool.tags,
            created_at: Some(datetime_to_timestamp(tool.created_at)),
            updated_at: Some(datetime_to_timestamp(tool.updated_at)),
        }
    }
}

impl TryFrom<v1::Tool> for Tool {
    type Error = ConvertError;

    fn try_from(tool: v1::Tool) -> Result<Self, Self::Error> {
        Ok(Tool {
            id: tool.id,
            name: tool.name,
            description: tool.description,
            tool_type: parse_enum(tool.r#type, "type")?,
            schema: meta_or_default(tool.schema),
            implementation: tool.implementation,
            version: tool.version,
            is_public: tool.is_public,
            created_by: tool.created_by,
            category: tool.category,
            tags: tool.tags,
            created_at: required_datetime(tool.created_at, "created_at")?,
            updated_at: required_datetime(tool.updated_at, "updated_at")?,
        })
    }
}

impl From<KnowledgeBase> for v1::KnowledgeBase {
    fn from(kb: KnowledgeBase) -> Self {
        v1::KnowledgeBase {
            id: kb.id,
            name: kb.name,
            description: kb.description,
            r#type: kb.kb_type.to_string(),
            embedding_model: kb.embedding_model,
            chunk_config: opt_struct(&kb.chunk_config),
            created_by: kb.created_by,
            document_count: kb.document_count as i32,
            vector_count: kb.vector_count as i32,
            created_at: Some(datetime_to_timestamp(kb.created_at)),
            updated_at: Some(datetime_to_timestamp(kb.updated_at)),
        }
    }
}

impl TryFrom<v1::KnowledgeBase> for KnowledgeBase {
    type Error = ConvertError;

    fn try_from(kb: v1::KnowledgeBase) -> Result<Self, Self::Error> {
        Ok(KnowledgeBase {
            id: kb.id,
            name: kb.name,
            description: kb.description,
            kb_type: parse_enum(kb.r#type, "type")?,
            // Same fallback the JSON decode applies.
            embedding_model: if kb.embedding_model.is_empty() {
                DEFAULT_EMBEDDING_MODEL.to_string()
            } else {
                kb.embedding_model
            },
            chunk_config: meta_or_default(kb.chunk_config),
            created_by: kb.created_by,
            document_count: i64::from(kb.document_count),
            vector_count: i64::from(kb.vector_count),
            created_at: required_datetime(kb.created_at, "created_at")?,
            updated_at: required_datetime(kb.updated_at, "updated_at")?,
        })
    }
}

impl From<Document> for v1::Document {
    fn from(document: Document) -> Self {
        v1::Document {
            id: document.id,
            knowledge_base_id: document.knowledge_base_id,
            title: document.title,
            content: document.content,
            metadata: opt_struct(&document.metadata),
            status: document.status,
            created_at: Some(datetime_to_timestamp(document.created_at)),
            updated_at: Some(datetime_to_timestamp(document.updated_at)),
        }
    }
}

impl TryFrom<v1::Document> for Document {
    type Error = ConvertError;

    fn try_from(document: v1::Document) -> Result<Self, Self::Error> {
        Ok(Document {
            id: document.id,
            knowledge_base_id: document.knowledge_base_id,
            title: document.title,
            content: document.content,
            metadata: meta_or_default(document.metadata),
            status: document.status,
            created_at: required_datetime(document.created_at, "created_at")?,
            updated_at: required_datetime(document.updated_at, "updated_at")?,
        })
    }
}
