use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub action: String,
    pub actor: Option<String>,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(action: &str, details: serde_json::Value, actor: Option<&str>) -> Self {
        AuditEntry {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            actor: actor.map(String::from),
            details,
            timestamp: Utc::now(),
        }
    }
}
