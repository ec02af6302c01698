use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::{QuizQuestion, QuizShapeError};

pub const QUIZ_QUESTION_COUNT: usize = 10;

/// A validated quiz: exactly ten questions, each with four choices and one
/// correct answer. Only obtainable through [`QuizData::try_from`], including
/// when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QuizQuestion>", into = "Vec<QuizQuestion>")]
pub struct QuizData(Vec<QuizQuestion>);

impl QuizData {
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Re-runs the shape checks. Used where quiz data crosses a component
    /// boundary.
    pub fn validate(&self) -> Result<(), QuizShapeError> {
        validate_questions(&self.0)
    }

    pub fn into_questions(self) -> Vec<QuizQuestion> {
        self.0
    }
}

fn validate_questions(questions: &[QuizQuestion]) -> Result<(), QuizShapeError> {
    if questions.len() != QUIZ_QUESTION_COUNT {
        return Err(QuizShapeError::WrongQuestionCount {
            expected: QUIZ_QUESTION_COUNT,
            found: questions.len(),
        });
    }

    questions
        .iter()
        .enumerate()
        .try_for_each(|(i, q)| q.validate(i + 1).map(|_| ()))
}

impl TryFrom<Vec<QuizQuestion>> for QuizData {
    type Error = QuizShapeError;

    fn try_from(questions: Vec<QuizQuestion>) -> Result<Self, Self::Error> {
        validate_questions(&questions)?;
        Ok(QuizData(questions))
    }
}

impl From<QuizData> for Vec<QuizQuestion> {
    fn from(quiz: QuizData) -> Self {
        quiz.0
    }
}
