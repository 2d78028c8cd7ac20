pub mod answer_service;
pub mod choice_service;
pub mod question_service;
pub mod survey_service;
