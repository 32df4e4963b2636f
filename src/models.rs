use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};

/// One todo entry. Serialized as a single JSON Lines record, field order as declared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<FixedOffset>, // RFC3339
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: now_fixed_offset(),
        }
    }
}

// Local time, keeping the current system offset
pub fn now_fixed_offset() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
