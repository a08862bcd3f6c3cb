//! Pure ledger computations: expense history to net balances, balances to
//! pairwise debts, debts to a reduced payment plan. No I/O, no shared
//! state; every function recomputes from the full history it is given.

mod balances;
mod debts;
mod simplify;

pub use balances::compute_balances;
pub use debts::materialize_debts;
pub use simplify::simplify_debts;

use crate::constants::BALANCE_EPSILON;
use std::collections::HashMap;

pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Greedy largest-vs-largest matching over net positions. Returns
/// `(debtor, creditor, amount)` triples whose net effect reproduces the
/// input balances. Ties on amount break on member id so the emission
/// order is total and repeatable.
///
/// Amounts are rounded to whole cents at emission only; the running
/// remainders stay unrounded so repeated matching cannot compound
/// rounding error. Positions within one cent of zero are already settled
/// and never matched.
fn settle_net_positions(net: &HashMap<String, f64>) -> Vec<(String, String, f64)> {
    let mut creditors: Vec<(&str, f64)> = net
        .iter()
        .filter(|(_, balance)| **balance > BALANCE_EPSILON)
        .map(|(id, &balance)| (id.as_str(), balance))
        .collect();
    let mut debtors: Vec<(&str, f64)> = net
        .iter()
        .filter(|(_, balance)| **balance < -BALANCE_EPSILON)
        .map(|(id, &balance)| (id.as_str(), -balance))
        .collect();

    creditors.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    debtors.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut matched = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let settled = debtors[i].1.min(creditors[j].1);

        if settled > BALANCE_EPSILON {
            matched.push((
                debtors[i].0.to_string(),
                creditors[j].0.to_string(),
                round_cents(settled),
            ));
        }

        debtors[i].1 -= settled;
        creditors[j].1 -= settled;

        if debtors[i].1 < BALANCE_EPSILON {
            i += 1;
        }
        if creditors[j].1 < BALANCE_EPSILON {
            j += 1;
        }
    }

    matched
}
