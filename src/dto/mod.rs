pub mod answer_dto;
pub mod choice_dto;
pub mod input;
pub mod question_dto;
pub mod survey_dto;
