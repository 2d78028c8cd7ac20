pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    answer_service::AnswerService, choice_service::ChoiceService,
    question_service::QuestionService, survey_service::SurveyService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub survey_service: SurveyService,
    pub question_service: QuestionService,
    pub choice_service: ChoiceService,
    pub answer_service: AnswerService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let survey_service = SurveyService::new(pool.clone());
        let question_service = QuestionService::new(pool.clone());
        let choice_service = ChoiceService::new(pool.clone());
        let answer_service = AnswerService::new(pool.clone());

        Self {
            pool,
            survey_service,
            question_service,
            choice_service,
            answer_service,
        }
    }
}
