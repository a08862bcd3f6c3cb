use crate::models::{Expense, Settlement};
use std::collections::HashMap;

/// Folds a group's expense and settlement history into one signed net
/// balance per member. Positive means the member is owed money, negative
/// means they owe.
///
/// Each live expense credits its payer with the full amount and debits
/// every participant by their share; a participant who also paid nets to
/// roughly zero for that expense. A confirmed settlement where A pays B
/// moves A's balance up and B's balance down, cancelling existing debt;
/// pending and cancelled settlements are ignored. Removed expenses are
/// skipped.
///
/// Empty input yields an empty map. The fold is pure and insensitive to
/// input order, so recomputing over the same history always returns the
/// same balances.
pub fn compute_balances(expenses: &[Expense], settlements: &[Settlement]) -> HashMap<String, f64> {
    let mut balances: HashMap<String, f64> = HashMap::new();

    for expense in expenses.iter().filter(|e| e.deleted_at.is_none()) {
        *balances.entry(expense.payer_id.clone()).or_insert(0.0) += expense.amount;
        for share in &expense.shares {
            *balances.entry(share.member_id.clone()).or_insert(0.0) -= share.amount;
        }
    }

    for settlement in settlements.iter().filter(|s| s.is_confirmed()) {
        *balances.entry(settlement.payer_id.clone()).or_insert(0.0) += settlement.amount;
        *balances.entry(settlement.payee_id.clone()).or_insert(0.0) -= settlement.amount;
    }

    balances
}
