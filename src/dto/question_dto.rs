use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::input::{
    flexible_id, flexible_optional_id, no_null_chars, trim_optional_string, trim_string,
};
use crate::models::question::Question;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    /// Id of the owning survey.
    #[serde(deserialize_with = "flexible_id")]
    pub survey: i64,
    #[serde(deserialize_with = "trim_string")]
    #[validate(
        length(min = 1, max = 200, message = "text must be 1 to 200 characters"),
        custom(function = "no_null_chars")
    )]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateQuestionPayload {
    #[serde(default, deserialize_with = "flexible_optional_id")]
    pub survey: Option<i64>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    #[validate(
        length(min = 1, max = 200, message = "text must be 1 to 200 characters"),
        custom(function = "no_null_chars")
    )]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i64,
    pub survey: i64,
    pub text: String,
}

impl From<Question> for QuestionResponse {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            survey: value.survey_id,
            text: value.text,
        }
    }
}
