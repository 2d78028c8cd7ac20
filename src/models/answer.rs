use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A respondent's pick of one choice. `created_at` is filled in by the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub choice_id: i64,
    pub created_at: DateTime<Utc>,
}
