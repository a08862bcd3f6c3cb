mod settlement_tests;

use crate::audit::in_memory::InMemoryAuditLogger;
use crate::service::LedgerService;
use crate::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> LedgerService<InMemoryStorage, InMemoryAuditLogger> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    LedgerService::new(InMemoryStorage::new(), InMemoryAuditLogger::new())
}
