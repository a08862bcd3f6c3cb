use crate::audit::AuditLogger;
use crate::error::LedgerError;
use crate::models::AuditEntry;
use async_trait::async_trait;
use tokio::sync::Mutex;

pub struct InMemoryAuditLogger {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        InMemoryAuditLogger {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogger for InMemoryAuditLogger {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        actor: Option<&str>,
    ) -> Result<(), LedgerError> {
        // For production: batch writes
        let mut entries = self.entries.lock().await;
        entries.push(AuditEntry::new(action, details, actor));
        Ok(())
    }

    async fn get_entries(&self) -> Result<Vec<AuditEntry>, LedgerError> {
        Ok(self.entries.lock().await.clone())
    }
}
