use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    answer_dto::{AnswerResponse, CreateAnswerPayload},
    choice_dto::{ChoiceResponse, CreateChoicePayload, UpdateChoicePayload},
    question_dto::{CreateQuestionPayload, QuestionResponse, UpdateQuestionPayload},
    survey_dto::{CreateSurveyPayload, SurveyResponse, UpdateSurveyPayload},
};
use crate::routes::{answer, choice, health, question, survey};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        survey::list_surveys,
        survey::create_survey,
        survey::get_survey,
        survey::replace_survey,
        survey::update_survey,
        survey::delete_survey,
        question::list_questions,
        question::create_question,
        question::get_question,
        question::replace_question,
        question::update_question,
        question::delete_question,
        choice::list_choices,
        choice::create_choice,
        choice::get_choice,
        choice::replace_choice,
        choice::update_choice,
        choice::delete_choice,
        answer::list_answers,
        answer::create_answer,
        answer::get_answer,
    ),
    components(
        schemas(
            CreateSurveyPayload,
            UpdateSurveyPayload,
            SurveyResponse,
            CreateQuestionPayload,
            UpdateQuestionPayload,
            QuestionResponse,
            CreateChoicePayload,
            UpdateChoicePayload,
            ChoiceResponse,
            CreateAnswerPayload,
            AnswerResponse,
        )
    ),
    tags(
        (name = "surveys", description = "Survey definitions; admin-managed"),
        (name = "questions", description = "Questions belonging to a survey"),
        (name = "choices", description = "Selectable options of a question"),
        (name = "answers", description = "Submitted answers"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
