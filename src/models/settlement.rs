use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SettlementStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A recorded real-world payment between two members. Only confirmed
/// settlements offset computed balances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub group_id: String,
    pub payer_id: String,
    pub payee_id: String,
    pub amount: f64,
    pub status: SettlementStatus,
    pub recorded_by: String,
    pub recorded_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
}

impl Settlement {
    pub fn is_pending(&self) -> bool {
        self.status == SettlementStatus::Pending
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == SettlementStatus::Confirmed
    }
}
