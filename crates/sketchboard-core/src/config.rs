//! Board configuration.

use serde::{Deserialize, Serialize};

/// When pointer-move frames of a drag become undo steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Every move frame commits its own history entry.
    #[default]
    EveryMove,
    /// The first edit of a gesture commits; later frames of the same gesture
    /// overwrite that entry, so one drag is one undo step.
    PerGesture,
}

/// Configuration for a [`crate::Board`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub commit_policy: CommitPolicy,
    /// Maximum number of history entries kept (`None` = unbounded).
    pub history_limit: Option<usize>,
}

impl BoardConfig {
    pub fn with_commit_policy(mut self, policy: CommitPolicy) -> Self {
        self.commit_policy = policy;
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}
