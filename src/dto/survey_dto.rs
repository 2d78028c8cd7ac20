use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::input::{no_null_chars, trim_optional_string, trim_string};
use crate::models::survey::Survey;

/// Body of `POST /surveys/` and `PUT /surveys/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSurveyPayload {
    #[serde(deserialize_with = "trim_string")]
    #[validate(
        length(min = 1, max = 200, message = "title must be 1 to 200 characters"),
        custom(function = "no_null_chars")
    )]
    pub title: String,
    #[serde(deserialize_with = "trim_string")]
    #[validate(
        length(min = 1, message = "description may not be blank"),
        custom(function = "no_null_chars")
    )]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSurveyPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    #[validate(
        length(min = 1, max = 200, message = "title must be 1 to 200 characters"),
        custom(function = "no_null_chars")
    )]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "trim_optional_string")]
    #[validate(
        length(min = 1, message = "description may not be blank"),
        custom(function = "no_null_chars")
    )]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SurveyResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl From<Survey> for SurveyResponse {
    fn from(value: Survey) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_longer_than_200_chars_is_rejected() {
        let payload = CreateSurveyPayload {
            title: "x".repeat(201),
            description: "D".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn title_of_exactly_200_chars_is_accepted() {
        let payload = CreateSurveyPayload {
            title: "x".repeat(200),
            description: "D".into(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn blank_description_is_rejected() {
        let payload = CreateSurveyPayload {
            title: "T".into(),
            description: String::new(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn whitespace_title_is_trimmed_then_rejected() {
        let payload: CreateSurveyPayload =
            serde_json::from_value(serde_json::json!({ "title": "   ", "description": " D " }))
                .unwrap();
        assert_eq!(payload.description, "D");
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn nul_in_patch_description_is_rejected() {
        let payload = UpdateSurveyPayload {
            title: None,
            description: Some("a\0b".into()),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(UpdateSurveyPayload::default().validate().is_ok());
    }
}
