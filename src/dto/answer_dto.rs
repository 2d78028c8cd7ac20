use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::input::flexible_id;
use crate::models::answer::Answer;

/// Only the choice is accepted; a client-sent `created_at` is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAnswerPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub choice: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponse {
    pub id: i64,
    pub choice: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Answer> for AnswerResponse {
    fn from(value: Answer) -> Self {
        Self {
            id: value.id,
            choice: value.choice_id,
            created_at: value.created_at,
        }
    }
}
