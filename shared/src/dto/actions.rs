use serde::{Deserialize, Deserializer, Serialize};

use super::common::de_text;

/// An available action before it is claimed.
///
/// Entries with an empty `tipo` or `target_url` are not actionable and are
/// filtered by the list view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
    #[serde(default, deserialize_with = "de_text")]
    pub tipo: String,
    #[serde(default, deserialize_with = "de_text")]
    pub target_url: String,
}

impl ActionItem {
    /// Both the type code and the target are present
    pub fn is_actionable(&self) -> bool {
        !self.tipo.trim().is_empty() && !self.target_url.trim().is_empty()
    }
}

/// Action inventory returned by both the service and the actions endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionsResponse {
    #[serde(default, deserialize_with = "de_entries")]
    pub acoes: Vec<ActionItem>,
}

/// Null entries (or a null list) are skipped rather than failing the response.
fn de_entries<'de, D>(deserializer: D) -> Result<Vec<ActionItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<ActionItem>>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().flatten().collect())
}

/// `POST /api/acoes` body for browsing the inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListActionsRequest {
    pub origem: String,
    pub acao: String,
}

impl ListActionsRequest {
    pub fn listar(origem: impl Into<String>) -> Self {
        Self {
            origem: origem.into(),
            acao: "listar".to_string(),
        }
    }
}

/// Body posted to the actions endpoint when a claim's link is about to be opened
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionLookupRequest {
    pub claim_id: serde_json::Value,
    pub origem: String,
    pub botao: String,
}
