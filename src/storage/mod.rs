use crate::error::LedgerError;
use crate::models::{Expense, Settlement};
use async_trait::async_trait;

/// Persistence collaborator for domain records, scoped queries per group.
/// Records handed back are owned copies; callers never share state with
/// the store.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError>;
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError>;
    async fn expenses_for_group(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError>;

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), LedgerError>;
    async fn get_settlement(&self, settlement_id: &str) -> Result<Option<Settlement>, LedgerError>;
    async fn settlements_for_group(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError>;
}

pub mod in_memory;
