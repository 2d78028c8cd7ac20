use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value as JsonValue};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid field {field}: {message}")]
    Field { field: &'static str, message: String },

    #[error("Invalid payload field {field}: {message}")]
    Payload { field: String, message: String },

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Error::Field {
            field,
            message: message.into(),
        }
    }

    /// Message for a reference to a row that does not exist.
    pub fn missing_parent(field: &'static str, id: i64) -> Self {
        Error::field(field, format!("Invalid pk \"{}\" - object does not exist.", id))
    }

    /// A foreign key violation on write means the parent vanished after it was checked.
    pub fn or_missing_parent(err: sqlx::Error, field: &'static str, id: i64) -> Self {
        let fk_violation = err
            .as_database_error()
            .is_some_and(|db| db.is_foreign_key_violation());
        if fk_violation {
            Error::missing_parent(field, id)
        } else {
            err.into()
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_)
            | Error::Validation(_)
            | Error::Field { .. }
            | Error::Payload { .. }
            | Error::Duplicate(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Config(_)
            | Error::Database(_)
            | Error::Migrate(_)
            | Error::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn field_messages(errors: &validator::ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body: JsonValue = match self {
            Error::Validation(errors) => json!({
                "error": "Validation failed",
                "fields": field_messages(&errors),
            }),
            Error::Field { field, message } => json!({
                "error": message.clone(),
                "fields": { field: [message] },
            }),
            Error::Payload { field, message } => json!({
                "error": message.clone(),
                "fields": { field: [message] },
            }),
            Error::BadRequest(msg)
            | Error::Duplicate(msg)
            | Error::Unauthorized(msg)
            | Error::Forbidden(msg)
            | Error::NotFound(msg) => json!({ "error": msg }),
            other => {
                tracing::error!(error = ?other, "request failed");
                json!({ "error": "An unexpected error occurred" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Not found.".to_string()),
            other => Error::Database(other),
        }
    }
}

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Picks the offending field out of a serde error such as
/// "missing field `text` at line 1 column 2" or "survey: invalid type: ...".
fn data_error_field(detail: &str) -> Option<(String, String)> {
    if let Some(rest) = detail.split_once("missing field `").map(|(_, r)| r) {
        let name = rest.split('`').next()?;
        return Some((name.to_string(), "This field is required.".to_string()));
    }
    let (path, message) = detail.split_once(": ")?;
    let is_field = !path.is_empty() && path.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_field.then(|| (path.to_string(), message.to_string()))
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        if let JsonRejection::JsonDataError(err) = &rejection {
            let text = err.body_text();
            let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(&text);
            if let Some((field, message)) = data_error_field(detail) {
                return Error::Payload { field, message };
            }
        }
        Error::BadRequest(rejection.body_text())
    }
}

// Ids only ever come from the path, so a non-numeric id is treated as an unknown row.
impl From<PathRejection> for Error {
    fn from(_: PathRejection) -> Self {
        Error::NotFound("Not found.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::Validate;

    #[derive(Debug)]
    struct FakeDbError {
        foreign_key: bool,
    }

    impl std::fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake database error")
        }
    }

    impl std::error::Error for FakeDbError {}

    impl sqlx::error::DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(if self.foreign_key { "23503" } else { "XX000" }))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            if self.foreign_key {
                sqlx::error::ErrorKind::ForeignKeyViolation
            } else {
                sqlx::error::ErrorKind::Other
            }
        }
    }

    #[derive(Validate)]
    struct Titled {
        #[validate(length(min = 1, max = 5, message = "too long"))]
        title: String,
    }

    #[test]
    fn client_errors_map_to_their_status() {
        assert_eq!(Error::Duplicate("dup".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::field("survey", "bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::Unauthorized("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::Forbidden("x".into()).status(), StatusCode::FORBIDDEN);
        assert_eq!(Error::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn row_not_found_becomes_not_found() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_collect_field_messages() {
        let errors = Titled {
            title: "far too long".into(),
        }
        .validate()
        .unwrap_err();
        let fields = field_messages(&errors);
        assert_eq!(fields.get("title"), Some(&vec!["too long".to_string()]));
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        assert_eq!(
            Error::Database(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Config("missing".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn foreign_key_violation_becomes_parent_field_error() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { foreign_key: true }));
        match Error::or_missing_parent(err, "survey", 4) {
            Error::Field { field, message } => {
                assert_eq!(field, "survey");
                assert_eq!(message, "Invalid pk \"4\" - object does not exist.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { foreign_key: false }));
        let err = Error::or_missing_parent(err, "survey", 4);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_field_is_named() {
        let (field, message) =
            data_error_field("missing field `question` at line 1 column 12").unwrap();
        assert_eq!(field, "question");
        assert_eq!(message, "This field is required.");
    }

    #[test]
    fn mistyped_field_is_named() {
        let (field, _) =
            data_error_field("text: invalid type: integer `5`, expected a string at line 1 column 9")
                .unwrap();
        assert_eq!(field, "text");
        assert!(data_error_field("invalid type: integer `5`, expected a map").is_none());
    }
}
