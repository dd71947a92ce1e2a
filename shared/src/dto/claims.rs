use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::common::{de_amount, de_flag};

/// Opaque, stable claim identifier.
///
/// The service issues integers, but the client only ever echoes the value back
/// (in URLs and request bodies), so it is kept as text. It serializes as a JSON
/// number whenever the text is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// JSON form expected by the actions endpoint
    pub fn to_json(&self) -> serde_json::Value {
        match self.0.parse::<i64>() {
            Ok(n) => serde_json::Value::from(n),
            Err(_) => serde_json::Value::from(self.0.clone()),
        }
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ClaimId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClaimId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => ClaimId(n.to_string()),
            Raw::Text(s) => ClaimId(s),
        })
    }
}

/// Externally owned claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Claimed,
    Pending,
    Submitted,
    Expired,
    #[serde(other)]
    Unknown,
}

/// `POST /api/claims` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateClaimRequest {
    pub origem: String,
}

/// `POST /api/claims` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateClaimResponse {
    pub claim_id: ClaimId,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// `GET /api/claims/{id}` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimDetails {
    #[serde(default)]
    pub id: Option<ClaimId>,
    #[serde(default)]
    pub action_tipo: Option<String>,
    #[serde(default)]
    pub action_target_url: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub payout_amount: f64,
    pub expires_at: String,
    #[serde(default, deserialize_with = "de_flag")]
    pub opened_link: bool,
    #[serde(default)]
    pub status: Option<ClaimStatus>,
}

impl ClaimDetails {
    /// Server-issued deadline.
    ///
    /// Accepts RFC 3339 and naive ISO-8601; naive values are UTC.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_server_timestamp(&self.expires_at)
    }
}

/// Parse a timestamp as written by the service
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// `POST /api/claims/{id}/confirm` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmClaimRequest {
    pub opened_link: bool,
}
