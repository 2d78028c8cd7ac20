pub mod answer;
pub mod choice;
pub mod question;
pub mod survey;
