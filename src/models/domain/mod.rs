pub mod quiz;
pub mod quiz_question;
pub use quiz::{QuizData, QUIZ_QUESTION_COUNT};
pub use quiz_question::{QuizQuestion, QuizShapeError, CHOICES_PER_QUESTION};
