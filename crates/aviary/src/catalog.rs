//! Static model catalog.
//!
//! Purely presentational: maps model identifiers to display labels and
//! provider names for table output. Unknown identifiers are shown as-is
//! rather than rejected, so the catalog never constrains what an agent's
//! model configuration may hold.

use std::fmt;

/// Upstream provider a model identifier routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
    SiliconFlow,
    Unknown,
}

impl Provider {
    pub fn label(self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::SiliconFlow => "SiliconFlow",
            Provider::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Route a model identifier to its provider.
///
/// Substring matches, mirroring how the backend dispatches chat
/// requests: any DeepSeek model is served through SiliconFlow, and the
/// legacy `text-` completion models route to OpenAI.
pub fn provider_for(model: &str) -> Provider {
    let model = model.to_lowercase();
    if model.contains("deepseek") {
        Provider::SiliconFlow
    } else if model.contains("claude") {
        Provider::Anthropic
    } else if model.contains("gpt") || model.contains("text-") {
        Provider::OpenAi
    } else {
        Provider::Unknown
    }
}

/// One catalog row.
#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Chat models the platform is known to serve.
pub const MODEL_CATALOG: &[ModelEntry] = &[
    ModelEntry {
        id: "gpt-4o",
        label: "GPT-4o",
    },
    ModelEntry {
        id: "gpt-3.5-turbo",
        label: "GPT-3.5 Turbo",
    },
    ModelEntry {
        id: "deepseek-ai/DeepSeek-V3",
        label: "DeepSeek V3",
    },
    ModelEntry {
        id: "deepseek-chat",
        label: "DeepSeek Chat",
    },
    ModelEntry {
        id: "claude-3-5-sonnet-20241022",
        label: "Claude 3.5 Sonnet",
    },
    ModelEntry {
        id: "claude-3-haiku-20240307",
        label: "Claude 3 Haiku",
    },
];

/// Look up a catalog row by exact identifier.
pub fn catalog_entry(model: &str) -> Option<&'static ModelEntry> {
    MODEL_CATALOG.iter().find(|entry| entry.id == model)
}

/// Display label for a model, falling back to the raw identifier.
pub fn display_label(model: &str) -> &str {
    catalog_entry(model).map_or(model, |entry| entry.label)
}
