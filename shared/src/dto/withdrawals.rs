use serde::{Deserialize, Serialize};

use super::common::de_amount;

/// Payout method name meaning "instant transfer to a key"; hides bank details
pub const PAYOUT_METHOD_PIX: &str = "PIX";

/// `GET /api/payout-profile` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutProfile {
    #[serde(default)]
    pub payout_method: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
}

impl PayoutProfile {
    /// Missing method counts as PIX
    pub fn is_pix(&self) -> bool {
        self.payout_method.as_deref().unwrap_or(PAYOUT_METHOD_PIX) == PAYOUT_METHOD_PIX
    }
}

/// One row of `GET /api/withdraws`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalItem {
    pub id: i64,
    #[serde(default)]
    pub requested_at: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
}

/// `GET /api/withdraws` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalsResponse {
    #[serde(default)]
    pub items: Vec<WithdrawalItem>,
}

/// `POST /api/withdraw` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawRequest {
    pub amount: f64,
}
