use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One pairwise obligation implied by a group's net balances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Debt {
    pub group_id: String,
    pub debtor_id: String,
    pub creditor_id: String,
    pub amount: f64,
    pub computed_at: DateTime<Utc>,
}

/// One payment in a reduced settlement plan. Never persisted; paying one
/// out is recorded as a new settlement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimplifiedTransaction {
    pub from_member_id: String,
    pub to_member_id: String,
    pub amount: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DebtSummary {
    pub original_count: usize,
    pub simplified_count: usize,
    pub transactions_saved: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Simplification {
    pub transactions: Vec<SimplifiedTransaction>,
    pub summary: DebtSummary,
}
