use crate::audit::AuditLogger;
use crate::constants::{
    BALANCES_QUERIED, DEBTS_QUERIED, DEBTS_SIMPLIFIED, EXPENSE_RECORDED, EXPENSE_REMOVED,
    EXPENSE_UPDATED, MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, SETTLEMENT_CANCELLED,
    SETTLEMENT_CONFIRMED, SETTLEMENT_RECORDED, SPLIT_TOLERANCE,
};
use crate::error::LedgerError;
use crate::ledger;
use crate::models::{
    AuditEntry, Debt, Expense, ExpenseShare, Settlement, SettlementStatus, Simplification,
    SplitSpec,
};
use crate::storage::Storage;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Stateless orchestration over the pure ledger computations. Holds no
/// domain state of its own; every query reloads the group's full history
/// and recomputes from scratch.
pub struct LedgerService<S: Storage, A: AuditLogger> {
    storage: S,
    audit: A,
}

impl<S: Storage, A: AuditLogger> LedgerService<S, A> {
    pub fn new(storage: S, audit: A) -> Self {
        LedgerService { storage, audit }
    }

    // EXPENSES

    pub async fn record_expense(
        &self,
        group_id: &str,
        description: String,
        amount: f64,
        payer_id: &str,
        split: SplitSpec,
        recorded_by: &str,
    ) -> Result<Expense, LedgerError> {
        info!(group_id, payer_id, amount, "recording expense");
        Self::validate_description(&description)?;
        Self::validate_amount("amount", amount)?;
        let shares = Self::build_shares(amount, &split)?;

        let now = Utc::now();
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            description,
            amount,
            payer_id: payer_id.to_string(),
            split_type: split.split_type(),
            shares,
            created_by: recorded_by.to_string(),
            occurred_at: now,
            updated_at: now,
            deleted_at: None,
        };

        self.storage.save_expense(expense.clone()).await?;
        self.audit
            .log_action(
                EXPENSE_RECORDED,
                json!({
                    "expense_id": expense.id,
                    "group_id": group_id,
                    "description": expense.description,
                    "amount": expense.amount,
                    "payer_id": payer_id,
                }),
                Some(recorded_by),
            )
            .await?;

        Ok(expense)
    }

    /// Replaces an expense's description, amount, and shares. Only the
    /// member who recorded the expense may edit it; balances pick up the
    /// change on the next recompute.
    pub async fn update_expense(
        &self,
        expense_id: &str,
        description: String,
        amount: f64,
        split: SplitSpec,
        edited_by: &str,
    ) -> Result<Expense, LedgerError> {
        let mut expense = self.get_live_expense(expense_id).await?;
        if expense.created_by != edited_by {
            warn!(expense_id, edited_by, "edit rejected: not the recorder");
            return Err(LedgerError::NotExpenseCreator(
                edited_by.to_string(),
                expense_id.to_string(),
            ));
        }

        Self::validate_description(&description)?;
        Self::validate_amount("amount", amount)?;
        let shares = Self::build_shares(amount, &split)?;

        expense.description = description;
        expense.amount = amount;
        expense.split_type = split.split_type();
        expense.shares = shares;
        expense.updated_at = Utc::now();

        self.storage.save_expense(expense.clone()).await?;
        self.audit
            .log_action(
                EXPENSE_UPDATED,
                json!({
                    "expense_id": expense.id,
                    "group_id": expense.group_id,
                    "amount": expense.amount,
                }),
                Some(edited_by),
            )
            .await?;

        Ok(expense)
    }

    /// Soft-deletes an expense so it no longer contributes to balances.
    /// Creator-only, like editing.
    pub async fn remove_expense(
        &self,
        expense_id: &str,
        removed_by: &str,
    ) -> Result<Expense, LedgerError> {
        let mut expense = self.get_live_expense(expense_id).await?;
        if expense.created_by != removed_by {
            warn!(expense_id, removed_by, "removal rejected: not the recorder");
            return Err(LedgerError::NotExpenseCreator(
                removed_by.to_string(),
                expense_id.to_string(),
            ));
        }

        let now = Utc::now();
        expense.deleted_at = Some(now);
        expense.updated_at = now;

        self.storage.save_expense(expense.clone()).await?;
        self.audit
            .log_action(
                EXPENSE_REMOVED,
                json!({ "expense_id": expense.id, "group_id": expense.group_id }),
                Some(removed_by),
            )
            .await?;

        Ok(expense)
    }

    // SETTLEMENTS

    /// Records a real-world payment as a pending settlement. It only
    /// starts offsetting balances once the payee confirms it.
    pub async fn record_settlement(
        &self,
        group_id: &str,
        payer_id: &str,
        payee_id: &str,
        amount: f64,
        recorded_by: &str,
    ) -> Result<Settlement, LedgerError> {
        info!(group_id, payer_id, payee_id, amount, "recording settlement");
        if payer_id == payee_id {
            return Err(LedgerError::SelfSettlement);
        }
        Self::validate_amount("amount", amount)?;

        let settlement = Settlement {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            payer_id: payer_id.to_string(),
            payee_id: payee_id.to_string(),
            amount,
            status: SettlementStatus::Pending,
            recorded_by: recorded_by.to_string(),
            recorded_at: Utc::now(),
            resolved_at: None,
            resolved_by: None,
        };

        self.storage.save_settlement(settlement.clone()).await?;
        self.audit
            .log_action(
                SETTLEMENT_RECORDED,
                json!({
                    "settlement_id": settlement.id,
                    "group_id": group_id,
                    "payer_id": payer_id,
                    "payee_id": payee_id,
                    "amount": amount,
                }),
                Some(recorded_by),
            )
            .await?;

        Ok(settlement)
    }

    /// Confirms a pending settlement. Only the payee may confirm, since
    /// confirmation asserts the money actually arrived.
    pub async fn confirm_settlement(
        &self,
        settlement_id: &str,
        confirmed_by: &str,
    ) -> Result<Settlement, LedgerError> {
        let mut settlement = self.get_pending_settlement(settlement_id).await?;
        if settlement.payee_id != confirmed_by {
            warn!(settlement_id, confirmed_by, "confirmation rejected");
            return Err(LedgerError::UnauthorizedSettlementConfirmation(
                confirmed_by.to_string(),
                settlement_id.to_string(),
            ));
        }

        settlement.status = SettlementStatus::Confirmed;
        settlement.resolved_at = Some(Utc::now());
        settlement.resolved_by = Some(confirmed_by.to_string());

        self.storage.save_settlement(settlement.clone()).await?;
        self.audit
            .log_action(
                SETTLEMENT_CONFIRMED,
                json!({ "settlement_id": settlement.id, "group_id": settlement.group_id }),
                Some(confirmed_by),
            )
            .await?;

        Ok(settlement)
    }

    /// Cancels a pending settlement. The payer, payee, or the member who
    /// recorded it may cancel; cancelled settlements never touch balances.
    pub async fn cancel_settlement(
        &self,
        settlement_id: &str,
        cancelled_by: &str,
    ) -> Result<Settlement, LedgerError> {
        let mut settlement = self.get_pending_settlement(settlement_id).await?;
        let involved = cancelled_by == settlement.payer_id
            || cancelled_by == settlement.payee_id
            || cancelled_by == settlement.recorded_by;
        if !involved {
            warn!(settlement_id, cancelled_by, "cancellation rejected");
            return Err(LedgerError::UnauthorizedSettlementCancellation(
                cancelled_by.to_string(),
                settlement_id.to_string(),
            ));
        }

        settlement.status = SettlementStatus::Cancelled;
        settlement.resolved_at = Some(Utc::now());
        settlement.resolved_by = Some(cancelled_by.to_string());

        self.storage.save_settlement(settlement.clone()).await?;
        self.audit
            .log_action(
                SETTLEMENT_CANCELLED,
                json!({ "settlement_id": settlement.id, "group_id": settlement.group_id }),
                Some(cancelled_by),
            )
            .await?;

        Ok(settlement)
    }

    // LEDGER QUERIES

    /// Net balance per member for one group, recomputed from the full
    /// expense and settlement history.
    pub async fn group_balances(
        &self,
        group_id: &str,
        queried_by: &str,
    ) -> Result<HashMap<String, f64>, LedgerError> {
        let balances = self.load_group_balances(group_id).await?;
        debug!(group_id, members = balances.len(), "balances computed");

        self.audit
            .log_action(
                BALANCES_QUERIED,
                json!({ "group_id": group_id }),
                Some(queried_by),
            )
            .await?;

        Ok(balances)
    }

    /// Pairwise who-owes-whom records for one group, stamped with the
    /// query time.
    pub async fn group_debts(
        &self,
        group_id: &str,
        queried_by: &str,
    ) -> Result<Vec<Debt>, LedgerError> {
        let balances = self.load_group_balances(group_id).await?;
        let debts = ledger::materialize_debts(group_id, &balances, Utc::now());
        debug!(group_id, count = debts.len(), "debts materialized");

        self.audit
            .log_action(
                DEBTS_QUERIED,
                json!({ "group_id": group_id, "debt_count": debts.len() }),
                Some(queried_by),
            )
            .await?;

        Ok(debts)
    }

    /// Full pipeline: history to balances to debts to a reduced payment
    /// plan with its savings summary. For what-if analysis over a
    /// hand-built debt list, call [`ledger::simplify_debts`] directly.
    pub async fn simplified_debts(
        &self,
        group_id: &str,
        queried_by: &str,
    ) -> Result<Simplification, LedgerError> {
        let balances = self.load_group_balances(group_id).await?;
        let debts = ledger::materialize_debts(group_id, &balances, Utc::now());
        let simplification = ledger::simplify_debts(&debts);
        debug!(
            group_id,
            original = simplification.summary.original_count,
            simplified = simplification.summary.simplified_count,
            "debts simplified"
        );

        self.audit
            .log_action(
                DEBTS_SIMPLIFIED,
                json!({
                    "group_id": group_id,
                    "original_count": simplification.summary.original_count,
                    "simplified_count": simplification.summary.simplified_count,
                }),
                Some(queried_by),
            )
            .await?;

        Ok(simplification)
    }

    pub async fn audit_entries(&self) -> Result<Vec<AuditEntry>, LedgerError> {
        self.audit.get_entries().await
    }

    // HELPERS

    async fn load_group_balances(
        &self,
        group_id: &str,
    ) -> Result<HashMap<String, f64>, LedgerError> {
        let expenses = self.storage.expenses_for_group(group_id).await?;
        let settlements = self.storage.settlements_for_group(group_id).await?;
        Ok(ledger::compute_balances(&expenses, &settlements))
    }

    async fn get_live_expense(&self, expense_id: &str) -> Result<Expense, LedgerError> {
        let expense = self
            .storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))?;
        if expense.deleted_at.is_some() {
            return Err(LedgerError::ExpenseAlreadyRemoved(expense_id.to_string()));
        }
        Ok(expense)
    }

    async fn get_pending_settlement(&self, settlement_id: &str) -> Result<Settlement, LedgerError> {
        let settlement = self
            .storage
            .get_settlement(settlement_id)
            .await?
            .ok_or_else(|| LedgerError::SettlementNotFound(settlement_id.to_string()))?;
        if !settlement.is_pending() {
            return Err(LedgerError::SettlementNotPending(settlement_id.to_string()));
        }
        Ok(settlement)
    }

    fn build_shares(amount: f64, split: &SplitSpec) -> Result<Vec<ExpenseShare>, LedgerError> {
        match split {
            SplitSpec::Even { participants } => {
                if participants.is_empty() {
                    return Err(LedgerError::InvalidSplit(
                        "even split needs at least one participant".to_string(),
                    ));
                }
                Ok(ExpenseShare::even_split(amount, participants))
            }
            SplitSpec::Custom { percentages } => {
                if percentages.is_empty() {
                    return Err(LedgerError::InvalidSplit(
                        "custom split needs at least one participant".to_string(),
                    ));
                }
                let total: f64 = percentages.iter().map(|(_, pct)| pct).sum();
                if (total - 100.0).abs() > SPLIT_TOLERANCE {
                    warn!(total, "custom split percentages do not sum to 100");
                    return Err(LedgerError::InvalidSplit(format!(
                        "percentages sum to {total}, expected 100"
                    )));
                }
                Ok(ExpenseShare::from_percentages(amount, percentages))
            }
        }
    }

    fn validate_description(description: &str) -> Result<(), LedgerError> {
        if description.trim().is_empty() {
            return Err(LedgerError::InvalidDescription(
                "description cannot be empty".to_string(),
            ));
        }
        if description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(LedgerError::InvalidDescription(format!(
                "description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
            )));
        }
        Ok(())
    }

    fn validate_amount(field: &str, amount: f64) -> Result<(), LedgerError> {
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount {
                field: field.to_string(),
                reason: "amount must be a finite number".to_string(),
            });
        }
        if amount <= 0.0 {
            return Err(LedgerError::InvalidAmount {
                field: field.to_string(),
                reason: "amount must be greater than 0".to_string(),
            });
        }
        if amount > MAX_AMOUNT {
            return Err(LedgerError::InvalidAmount {
                field: field.to_string(),
                reason: format!("amount cannot exceed {MAX_AMOUNT}"),
            });
        }
        let cents = amount * 100.0;
        if (cents - cents.round()).abs() > 1e-6 {
            return Err(LedgerError::InvalidAmount {
                field: field.to_string(),
                reason: "amount cannot have more than 2 decimal places".to_string(),
            });
        }
        Ok(())
    }
}
