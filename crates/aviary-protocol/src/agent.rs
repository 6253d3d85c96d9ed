//! Agent entity and its request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::MetaMap;

/// Agent variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    /// One model, one prompt.
    Single,
    /// Orchestrates multiple sub-agents.
    Multi,
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentType::Single => write!(f, "single"),
            AgentType::Multi => write!(f, "multi"),
        }
    }
}

impl std::str::FromStr for AgentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(AgentType::Single),
            "multi" => Ok(AgentType::Multi),
            _ => Err(format!("unknown agent type: {}", s)),
        }
    }
}

impl TryFrom<String> for AgentType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Agent lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Being edited, not yet usable in conversations.
    Draft,
    /// Live and selectable.
    Published,
    /// Retired but kept for history.
    Archived,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentStatus::Draft => write!(f, "draft"),
            AgentStatus::Published => write!(f, "published"),
            AgentStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for AgentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(AgentStatus::Draft),
            "published" => Ok(AgentStatus::Published),
            "archived" => Ok(AgentStatus::Archived),
            _ => Err(format!("unknown agent status: {}", s)),
        }
    }
}

impl TryFrom<String> for AgentStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A configured AI assistant definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent ID, assigned by the server.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Model binding: holds at least a `model` identifier string and a
    /// `temperature` number when configured.
    #[serde(default)]
    pub model_config: MetaMap,
    /// IDs of enabled tools, in display order. Weak references.
    #[serde(default)]
    pub tools: Vec<String>,
    /// IDs of attached knowledge bases, in display order. Weak references.
    #[serde(default)]
    pub knowledge_bases: Vec<String>,
    /// System prompt template.
    #[serde(default)]
    pub prompt_template: String,
    /// Free-form generation parameters.
    #[serde(default)]
    pub parameters: MetaMap,
    pub status: AgentStatus,
    /// Server-assigned version, "1.0.0" on create.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Folder path for console organization.
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Agent {
    /// The bound model identifier, when `model_config` carries one.
    pub fn configured_model(&self) -> Option<&str> {
        self.model_config.get("model").and_then(|v| v.as_str())
    }
}

/// Body of `POST /agents`. The server assigns id, version, status, and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    #[serde(default, skip_serializing_if = "MetaMap::is_empty")]
    pub model_config: MetaMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub knowledge_bases: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt_template: String,
    #[serde(default, skip_serializing_if = "MetaMap::is_empty")]
    pub parameters: MetaMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub folder: String,
}

impl CreateAgentRequest {
    pub fn new(name: impl Into<String>, agent_type: AgentType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            agent_type,
            model_config: MetaMap::new(),
            tools: Vec::new(),
            knowledge_bases: Vec::new(),
            prompt_template: String::new(),
            parameters: MetaMap::new(),
            tags: Vec::new(),
            folder: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn model_config(mut self, model_config: MetaMap) -> Self {
        self.model_config = model_config;
        self
    }

    pub fn prompt_template(mut self, prompt_template: impl Into<String>) -> Self {
        self.prompt_template = prompt_template.into();
        self
    }
}

/// Body of `PUT /agents/{id}`. Only the fields that are set are sent, and
/// only those keys are overwritten server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAgentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_config: Option<MetaMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_bases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<MetaMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
}

impl UpdateAgentRequest {
    /// An update that replaces only the model configuration.
    pub fn model_config(model_config: MetaMap) -> Self {
        Self {
            model_config: Some(model_config),
            ..Self::default()
        }
    }
}

/// Query parameters of `GET /agents`. Unset fields are not sent; the server
/// defaults to page 1, page size 10, no filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<AgentType>,
}
