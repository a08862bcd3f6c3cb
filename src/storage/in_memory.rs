use crate::error::LedgerError;
use crate::models::{Expense, Settlement};
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct InMemoryStorage {
    expenses: Mutex<HashMap<String, Expense>>,
    settlements: Mutex<HashMap<String, Settlement>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            expenses: Mutex::new(HashMap::new()),
            settlements: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError> {
        self.expenses
            .lock()
            .await
            .insert(expense.id.clone(), expense);
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError> {
        Ok(self.expenses.lock().await.get(expense_id).cloned())
    }

    async fn expenses_for_group(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError> {
        // For production: use a database query with an index on group_id
        Ok(self
            .expenses
            .lock()
            .await
            .values()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), LedgerError> {
        self.settlements
            .lock()
            .await
            .insert(settlement.id.clone(), settlement);
        Ok(())
    }

    async fn get_settlement(&self, settlement_id: &str) -> Result<Option<Settlement>, LedgerError> {
        Ok(self.settlements.lock().await.get(settlement_id).cloned())
    }

    async fn settlements_for_group(&self, group_id: &str) -> Result<Vec<Settlement>, LedgerError> {
        Ok(self
            .settlements
            .lock()
            .await
            .values()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect())
    }
}
