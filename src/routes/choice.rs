use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    dto::choice_dto::{ChoiceResponse, CreateChoicePayload, UpdateChoicePayload},
    error::Result,
    extract::{Id, JsonBody},
    AppState,
};

#[utoipa::path(
    get,
    path = "/choices/",
    tag = "choices",
    responses(
        (status = 200, description = "All choices, ordered by text", body = [ChoiceResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_choices(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let choices = state.choice_service.list().await?;
    let items: Vec<ChoiceResponse> = choices.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/choices/",
    tag = "choices",
    request_body = CreateChoicePayload,
    responses(
        (status = 201, description = "Choice created", body = ChoiceResponse),
        (status = 400, description = "Invalid payload, unknown question or duplicate text"),
        (status = 401, description = "Not authenticated")
    )
)]
#[axum::debug_handler]
pub async fn create_choice(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateChoicePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let choice = state.choice_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ChoiceResponse::from(choice))))
}

#[utoipa::path(
    get,
    path = "/choices/{id}/",
    tag = "choices",
    params(("id" = i64, Path, description = "Choice ID")),
    responses(
        (status = 200, description = "Choice found", body = ChoiceResponse),
        (status = 404, description = "Choice not found")
    )
)]
#[axum::debug_handler]
pub async fn get_choice(State(state): State<AppState>, Id(id): Id) -> Result<impl IntoResponse> {
    let choice = state.choice_service.get_by_id(id).await?;
    Ok(Json(ChoiceResponse::from(choice)))
}

#[utoipa::path(
    put,
    path = "/choices/{id}/",
    tag = "choices",
    params(("id" = i64, Path, description = "Choice ID")),
    request_body = CreateChoicePayload,
    responses(
        (status = 200, description = "Choice replaced", body = ChoiceResponse),
        (status = 400, description = "Invalid payload or unknown question"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Choice not found")
    )
)]
#[axum::debug_handler]
pub async fn replace_choice(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(payload): JsonBody<CreateChoicePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let choice = state.choice_service.replace(id, payload).await?;
    Ok(Json(ChoiceResponse::from(choice)))
}

#[utoipa::path(
    patch,
    path = "/choices/{id}/",
    tag = "choices",
    params(("id" = i64, Path, description = "Choice ID")),
    request_body = UpdateChoicePayload,
    responses(
        (status = 200, description = "Choice updated", body = ChoiceResponse),
        (status = 400, description = "Invalid payload or unknown question"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Choice not found")
    )
)]
#[axum::debug_handler]
pub async fn update_choice(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(payload): JsonBody<UpdateChoicePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let choice = state.choice_service.update(id, payload).await?;
    Ok(Json(ChoiceResponse::from(choice)))
}

#[utoipa::path(
    delete,
    path = "/choices/{id}/",
    tag = "choices",
    params(("id" = i64, Path, description = "Choice ID")),
    responses(
        (status = 204, description = "Choice and its answers deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Choice not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_choice(
    State(state): State<AppState>,
    Id(id): Id,
) -> Result<impl IntoResponse> {
    state.choice_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
