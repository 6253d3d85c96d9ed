//! Tool entity and its request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::MetaMap;

/// Tool variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    /// Inline function executed by the platform.
    Function,
    /// External HTTP API.
    Api,
    /// Installed plugin.
    Plugin,
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolType::Function => write!(f, "function"),
            ToolType::Api => write!(f, "api"),
            ToolType::Plugin => write!(f, "plugin"),
        }
    }
}

impl std::str::FromStr for ToolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "function" => Ok(ToolType::Function),
            "api" => Ok(ToolType::Api),
            "plugin" => Ok(ToolType::Plugin),
            _ => Err(format!("unknown tool type: {}", s)),
        }
    }
}

/// A capability an agent can invoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    /// Input/output schema of the tool.
    #[serde(default)]
    pub schema: MetaMap,
    /// Where the implementation lives (code reference or endpoint).
    #[serde(default)]
    pub implementation: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /tools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateToolRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    #[serde(default, skip_serializing_if = "MetaMap::is_empty")]
    pub schema: MetaMap,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub implementation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CreateToolRequest {
    pub fn new(name: impl Into<String>, tool_type: ToolType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tool_type,
            schema: MetaMap::new(),
            implementation: String::new(),
            category: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Query parameters of `GET /tools`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tool_type: Option<ToolType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
