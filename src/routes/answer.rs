use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::answer_dto::{AnswerResponse, CreateAnswerPayload},
    error::Result,
    extract::{Id, JsonBody},
    AppState,
};

#[utoipa::path(
    get,
    path = "/answers/",
    tag = "answers",
    responses(
        (status = 200, description = "All answers, most recent first", body = [AnswerResponse]),
        (status = 401, description = "Not authenticated")
    )
)]
#[axum::debug_handler]
pub async fn list_answers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let answers = state.answer_service.list().await?;
    let items: Vec<AnswerResponse> = answers.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/answers/",
    tag = "answers",
    request_body = CreateAnswerPayload,
    responses(
        (status = 201, description = "Answer recorded", body = AnswerResponse),
        (status = 400, description = "Missing or unknown choice")
    )
)]
#[axum::debug_handler]
pub async fn create_answer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAnswerPayload>,
) -> Result<impl IntoResponse> {
    let answer = state.answer_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(AnswerResponse::from(answer))))
}

#[utoipa::path(
    get,
    path = "/answers/{id}/",
    tag = "answers",
    params(("id" = i64, Path, description = "Answer ID")),
    responses(
        (status = 200, description = "Answer found", body = AnswerResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Answer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_answer(State(state): State<AppState>, Id(id): Id) -> Result<impl IntoResponse> {
    let answer = state.answer_service.get_by_id(id).await?;
    Ok(Json(AnswerResponse::from(answer)))
}
