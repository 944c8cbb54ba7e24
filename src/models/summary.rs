use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label shown in place of a missing or empty title.
pub const UNTITLED_LABEL: &str = "Untitled summary";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryNote {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl SummaryNote {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNTITLED_LABEL)
    }
}

/// Lifecycle of a summarization request on the summarize screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Requesting,
    Ready,
    Failed,
}
