use serde::{Deserialize, Serialize};

use super::common::de_amount;

/// Wallet balances shown on the dashboard and the withdrawals page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    #[serde(default, deserialize_with = "de_amount")]
    pub saldo_disponivel: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub saldo_bloqueado: f64,
}

/// User summary embedded in the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

/// One day of earnings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyEarning {
    pub date: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub amount: f64,
}

/// `GET /api/dashboard`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardResponse {
    #[serde(default)]
    pub wallet: Wallet,
    #[serde(default)]
    pub user: DashboardUser,
    #[serde(default)]
    pub daily_earnings: Vec<DailyEarning>,
}
