use crate::error::LedgerError;
use crate::models::AuditEntry;
use async_trait::async_trait;

/// Audit trail collaborator. Every state change and query the service
/// performs is logged as one action with structured details.
#[async_trait]
pub trait AuditLogger: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        actor: Option<&str>,
    ) -> Result<(), LedgerError>;

    async fn get_entries(&self) -> Result<Vec<AuditEntry>, LedgerError>;
}

pub mod in_memory;
