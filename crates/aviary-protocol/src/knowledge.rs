//! Knowledge base and document types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::MetaMap;

/// Embedding model the server falls back to when a knowledge base is
/// created without one.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Knowledge base variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeBaseType {
    /// Uploaded documents, chunked and embedded.
    Document,
    /// Backed by a live database.
    Database,
    /// Backed by an external API.
    Api,
}

impl std::fmt::Display for KnowledgeBaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnowledgeBaseType::Document => write!(f, "document"),
            KnowledgeBaseType::Database => write!(f, "database"),
            KnowledgeBaseType::Api => write!(f, "api"),
        }
    }
}

impl std::str::FromStr for KnowledgeBaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" => Ok(KnowledgeBaseType::Document),
            "database" => Ok(KnowledgeBaseType::Database),
            "api" => Ok(KnowledgeBaseType::Api),
            _ => Err(format!("unknown knowledge base type: {}", s)),
        }
    }
}

/// A retrieval corpus agents can search at generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kb_type: KnowledgeBaseType,
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// Chunking parameters (size, overlap, ...).
    #[serde(default)]
    pub chunk_config: MetaMap,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub document_count: i64,
    #[serde(default)]
    pub vector_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_embedding_model() -> String {
    DEFAULT_EMBEDDING_MODEL.to_string()
}

/// A document stored inside one knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub knowledge_base_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub metadata: MetaMap,
    /// Processing status as reported by the server.
    #[serde(default)]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /knowledge-bases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKnowledgeBaseRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub kb_type: KnowledgeBaseType,
    /// Defaults to [`DEFAULT_EMBEDDING_MODEL`] server-side when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(default, skip_serializing_if = "MetaMap::is_empty")]
    pub chunk_config: MetaMap,
}

impl CreateKnowledgeBaseRequest {
    pub fn new(name: impl Into<String>, kb_type: KnowledgeBaseType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kb_type,
            embedding_model: None,
            chunk_config: MetaMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn embedding_model(mut self, embedding_model: impl Into<String>) -> Self {
        self.embedding_model = Some(embedding_model.into());
        self
    }
}

/// Body of `POST /knowledge-bases/{id}/documents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadDocumentRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "MetaMap::is_empty")]
    pub metadata: MetaMap,
}

impl UploadDocumentRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            metadata: MetaMap::new(),
        }
    }
}

/// Query parameters of `GET /knowledge-bases`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBaseListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kb_type: Option<KnowledgeBaseType>,
}
