use super::settle_net_positions;
use crate::models::Debt;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Converts net balances into concrete pairwise debt records whose net
/// effect reproduces the same balances.
///
/// Creditors are matched against debtors largest-outstanding-first, so a
/// group of D debtors and C creditors settles in at most D + C - 1
/// records. Members whose balance is within one cent of zero are settled
/// and produce nothing; a fully settled (or empty) group yields an empty
/// list.
///
/// `computed_at` is stamped onto every record by the caller; the
/// computation itself never reads the clock.
pub fn materialize_debts(
    group_id: &str,
    balances: &HashMap<String, f64>,
    computed_at: DateTime<Utc>,
) -> Vec<Debt> {
    settle_net_positions(balances)
        .into_iter()
        .map(|(debtor_id, creditor_id, amount)| Debt {
            group_id: group_id.to_string(),
            debtor_id,
            creditor_id,
            amount,
            computed_at,
        })
        .collect()
}
