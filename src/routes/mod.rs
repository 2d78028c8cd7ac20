pub mod answer;
pub mod choice;
pub mod docs;
pub mod health;
pub mod question;
pub mod survey;

use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{
    access::{enforce_access, Resource},
    cors::api_cors,
    request_id::request_id_middleware,
};
use crate::AppState;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Every resource router is wrapped in its own access check, so the policy
/// runs before extraction and before any query.
pub fn router(state: AppState) -> Router {
    let surveys = Router::new()
        .route(
            "/surveys/",
            get(survey::list_surveys).post(survey::create_survey),
        )
        .route(
            "/surveys/:id/",
            get(survey::get_survey)
                .put(survey::replace_survey)
                .patch(survey::update_survey)
                .delete(survey::delete_survey),
        )
        .route_layer(from_fn_with_state(Resource::Survey, enforce_access));

    let questions = Router::new()
        .route(
            "/questions/",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/questions/:id/",
            get(question::get_question)
                .put(question::replace_question)
                .patch(question::update_question)
                .delete(question::delete_question),
        )
        .route_layer(from_fn_with_state(Resource::Question, enforce_access));

    let choices = Router::new()
        .route(
            "/choices/",
            get(choice::list_choices).post(choice::create_choice),
        )
        .route(
            "/choices/:id/",
            get(choice::get_choice)
                .put(choice::replace_choice)
                .patch(choice::update_choice)
                .delete(choice::delete_choice),
        )
        .route_layer(from_fn_with_state(Resource::Choice, enforce_access));

    let answers = Router::new()
        .route(
            "/answers/",
            get(answer::list_answers).post(answer::create_answer),
        )
        .route("/answers/:id/", get(answer::get_answer))
        .route_layer(from_fn_with_state(Resource::Answer, enforce_access));

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi))
        .merge(surveys)
        .merge(questions)
        .merge(choices)
        .merge(answers)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(api_cors())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
}
