use serde::{Deserialize, Serialize};

use super::common::de_amount;

/// Review outcome of a submitted action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    Pending,
}

impl Validity {
    /// Unknown or missing values are pending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("valid") => Validity::Valid,
            Some("invalid") => Validity::Invalid,
            _ => Validity::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Validity::Valid => "Válida",
            Validity::Invalid => "Inválida",
            Validity::Pending => "Pendente",
        }
    }
}

/// One row of `GET /api/historico-acoes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub id: i64,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub claimed_at: Option<String>,
    #[serde(default)]
    pub type_code: Option<String>,
    #[serde(default)]
    pub profile_username: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub payout_amount: f64,
    #[serde(default)]
    pub validity: Option<String>,
}

impl HistoryItem {
    /// Submission time, falling back to the claim time
    pub fn date(&self) -> &str {
        self.submitted_at
            .as_deref()
            .or(self.claimed_at.as_deref())
            .unwrap_or("")
    }

    pub fn validity(&self) -> Validity {
        Validity::parse(self.validity.as_deref())
    }
}

/// `GET /api/historico-acoes` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub items: Vec<HistoryItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_defaults_to_pending() {
        assert_eq!(Validity::parse(Some("VALID")), Validity::Valid);
        assert_eq!(Validity::parse(Some("invalid")), Validity::Invalid);
        assert_eq!(Validity::parse(Some("whatever")), Validity::Pending);
        assert_eq!(Validity::parse(None), Validity::Pending);
    }

    #[test]
    fn test_history_date_prefers_submission() {
        let item: HistoryItem = serde_json::from_str(
            r#"{"id":1,"submitted_at":null,"claimed_at":"2024-05-01T10:00:00","payout_amount":0.01}"#,
        )
        .unwrap();
        assert_eq!(item.date(), "2024-05-01T10:00:00");
    }
}
