use serde::{Deserialize, Serialize};

/// Millisecond timestamp supplied by the host clock with every command
/// that emits chat.
pub type Timestamp = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub text: String,
    pub sent_at: Timestamp,
}
