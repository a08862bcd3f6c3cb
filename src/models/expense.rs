use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitType {
    Even,
    Custom,
}

/// How to divide an expense among participants. `Custom` carries one
/// percentage (0-100) per participant.
#[derive(Clone, Debug)]
pub enum SplitSpec {
    Even { participants: Vec<String> },
    Custom { percentages: Vec<(String, f64)> },
}

impl SplitSpec {
    pub fn split_type(&self) -> SplitType {
        match self {
            SplitSpec::Even { .. } => SplitType::Even,
            SplitSpec::Custom { .. } => SplitType::Custom,
        }
    }
}

/// One participant's slice of an expense. Share amounts of an expense sum
/// to the expense total within one cent; the rounding remainder goes to
/// the first participant in split order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub member_id: String,
    pub amount: f64,
    pub percentage: Option<f64>,
}

impl ExpenseShare {
    /// Divides `amount` evenly, in whole cents, among `participants`.
    pub fn even_split(amount: f64, participants: &[String]) -> Vec<ExpenseShare> {
        if participants.is_empty() {
            return Vec::new();
        }
        let total_cents = (amount * 100.0).round() as i64;
        let count = participants.len() as i64;
        let per_head = total_cents / count;
        let remainder = total_cents - per_head * count;

        participants
            .iter()
            .enumerate()
            .map(|(idx, member_id)| {
                let cents = if idx == 0 { per_head + remainder } else { per_head };
                ExpenseShare {
                    member_id: member_id.clone(),
                    amount: cents as f64 / 100.0,
                    percentage: None,
                }
            })
            .collect()
    }

    /// Derives shares from percentages of `amount`, rounded to whole
    /// cents. Any leftover cent from rounding is folded into the first
    /// participant so the total is preserved exactly.
    pub fn from_percentages(amount: f64, percentages: &[(String, f64)]) -> Vec<ExpenseShare> {
        if percentages.is_empty() {
            return Vec::new();
        }
        let total_cents = (amount * 100.0).round() as i64;
        let mut cents: Vec<i64> = percentages
            .iter()
            .map(|(_, pct)| (total_cents as f64 * pct / 100.0).round() as i64)
            .collect();
        let assigned: i64 = cents.iter().sum();
        cents[0] += total_cents - assigned;

        percentages
            .iter()
            .zip(cents)
            .map(|((member_id, pct), c)| ExpenseShare {
                member_id: member_id.clone(),
                amount: c as f64 / 100.0,
                percentage: Some(*pct),
            })
            .collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    pub payer_id: String,
    pub split_type: SplitType,
    pub shares: Vec<ExpenseShare>,
    pub created_by: String,
    pub occurred_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
