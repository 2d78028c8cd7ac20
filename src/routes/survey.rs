use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    dto::survey_dto::{CreateSurveyPayload, SurveyResponse, UpdateSurveyPayload},
    error::Result,
    extract::{Id, JsonBody},
    AppState,
};

#[utoipa::path(
    get,
    path = "/surveys/",
    tag = "surveys",
    responses(
        (status = 200, description = "All surveys, ordered by title", body = [SurveyResponse]),
        (status = 401, description = "Not authenticated")
    )
)]
#[axum::debug_handler]
pub async fn list_surveys(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let surveys = state.survey_service.list().await?;
    let items: Vec<SurveyResponse> = surveys.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/surveys/",
    tag = "surveys",
    request_body = CreateSurveyPayload,
    responses(
        (status = 201, description = "Survey created", body = SurveyResponse),
        (status = 400, description = "Invalid payload or duplicate title"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required")
    )
)]
#[axum::debug_handler]
pub async fn create_survey(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateSurveyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let survey = state.survey_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(SurveyResponse::from(survey))))
}

#[utoipa::path(
    get,
    path = "/surveys/{id}/",
    tag = "surveys",
    params(("id" = i64, Path, description = "Survey ID")),
    responses(
        (status = 200, description = "Survey found", body = SurveyResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Survey not found")
    )
)]
#[axum::debug_handler]
pub async fn get_survey(State(state): State<AppState>, Id(id): Id) -> Result<impl IntoResponse> {
    let survey = state.survey_service.get_by_id(id).await?;
    Ok(Json(SurveyResponse::from(survey)))
}

#[utoipa::path(
    put,
    path = "/surveys/{id}/",
    tag = "surveys",
    params(("id" = i64, Path, description = "Survey ID")),
    request_body = CreateSurveyPayload,
    responses(
        (status = 200, description = "Survey replaced", body = SurveyResponse),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Survey not found")
    )
)]
#[axum::debug_handler]
pub async fn replace_survey(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(payload): JsonBody<CreateSurveyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let survey = state.survey_service.replace(id, payload).await?;
    Ok(Json(SurveyResponse::from(survey)))
}

#[utoipa::path(
    patch,
    path = "/surveys/{id}/",
    tag = "surveys",
    params(("id" = i64, Path, description = "Survey ID")),
    request_body = UpdateSurveyPayload,
    responses(
        (status = 200, description = "Survey updated", body = SurveyResponse),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Survey not found")
    )
)]
#[axum::debug_handler]
pub async fn update_survey(
    State(state): State<AppState>,
    Id(id): Id,
    JsonBody(payload): JsonBody<UpdateSurveyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let survey = state.survey_service.update(id, payload).await?;
    Ok(Json(SurveyResponse::from(survey)))
}

#[utoipa::path(
    delete,
    path = "/surveys/{id}/",
    tag = "surveys",
    params(("id" = i64, Path, description = "Survey ID")),
    responses(
        (status = 204, description = "Survey and everything under it deleted"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Survey not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_survey(State(state): State<AppState>, Id(id): Id) -> Result<impl IntoResponse> {
    state.survey_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
