use super::settle_net_positions;
use crate::models::{Debt, DebtSummary, Simplification, SimplifiedTransaction};
use std::collections::HashMap;

/// Reduces a list of pairwise debts to a smaller set of payments with the
/// same net effect, plus a before/after summary.
///
/// The debt list does not have to come from
/// [`materialize_debts`](crate::ledger::materialize_debts); any
/// hand-built list works, e.g. for what-if analysis. Net positions are
/// recomputed directly from the debts, then matched greedily
/// largest-vs-largest. For N members with a nonzero net position the
/// result has at most N - 1 payments, and the money flowing through it
/// never exceeds the total of the original list.
///
/// The greedy matching is a heuristic: it does not guarantee the globally
/// minimal payment count for every balance configuration, and the summary
/// reports its savings, not a proof of optimality. An empty debt list
/// simply produces an empty plan; there is no failure path.
pub fn simplify_debts(debts: &[Debt]) -> Simplification {
    let mut net: HashMap<String, f64> = HashMap::new();
    for debt in debts {
        *net.entry(debt.creditor_id.clone()).or_insert(0.0) += debt.amount;
        *net.entry(debt.debtor_id.clone()).or_insert(0.0) -= debt.amount;
    }

    let transactions: Vec<SimplifiedTransaction> = settle_net_positions(&net)
        .into_iter()
        .map(|(from_member_id, to_member_id, amount)| SimplifiedTransaction {
            from_member_id,
            to_member_id,
            amount,
        })
        .collect();

    let summary = DebtSummary {
        original_count: debts.len(),
        simplified_count: transactions.len(),
        transactions_saved: debts.len().saturating_sub(transactions.len()),
    };

    Simplification {
        transactions,
        summary,
    }
}
