use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    dto::question_dto::{CreateQuestionPayload, QuestionResponse, UpdateQuestionPayload},
    error::Result,
    extract::{Id, JsonBody},
    AppState,
};

#[utoipa::path(
    get,
    path = "/questions/",
    tag = "questions",
    responses(
        (status = 200, description = "All questions, ordered by text", body = [QuestionResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let questions = state.question_service.list().await?;
    let items: Vec<QuestionResponse> = questions.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/questions/",
    tag = "questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 400, description = "Invalid payload, unknown survey or duplicate text"),
        (status = 401, description = "Not authenticated")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

#[utoipa::path(
    get,
    path = "/questions/{id}/",
    tag = "questions",
    params(("id" = i64, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn get_question(State(state): State<AppState>, Id(id): Id) -> Result<impl IntoResponse> {
    let question = state.question_service.get_by_id(id).await?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    put,
    path = "/questions/{id}/",
    tag = "questions",
    params(("id" = i64, Path, description = "Question ID")),
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question replaced", body = QuestionResponse),
        (status = 400, description = "Invalid payload or unknown survey"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn replace_question(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(payload): JsonBody<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_service.replace(id, payload).await?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    patch,
    path = "/questions/{id}/",
    tag = "questions",
    params(("id" = i64, Path, description = "Question ID")),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question updated", body = QuestionResponse),
        (status = 400, description = "Invalid payload or unknown survey"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(payload): JsonBody<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_service.update(id, payload).await?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}/",
    tag = "questions",
    params(("id" = i64, Path, description = "Question ID")),
    responses(
        (status = 204, description = "Question, its choices and their answers deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Id(id): Id,
) -> Result<impl IntoResponse> {
    state.question_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
