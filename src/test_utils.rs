use crate::models::domain::{QuizData, QuizQuestion};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::constants::page_template::QUIZ_DATA_ASSIGNMENT_PREFIX;

    /// Creates a valid question; `n` varies the text so questions are distinct.
    pub fn sample_question(n: usize) -> QuizQuestion {
        QuizQuestion {
            question: format!("Question {n}: which statement matches the lecture?"),
            choices: (0..4).map(|c| format!("Choice {c} for question {n}")).collect(),
            correct_index: Some(n % 4),
            correct_answer: None,
        }
    }

    /// Ten valid questions.
    pub fn sample_questions() -> Vec<QuizQuestion> {
        (0..10).map(sample_question).collect()
    }

    pub fn sample_quiz_data() -> QuizData {
        QuizData::try_from(sample_questions()).expect("sample questions are valid")
    }

    /// The model reply a well-behaved model would give.
    pub fn sample_quiz_json() -> String {
        serde_json::to_string(&sample_questions()).expect("sample questions serialize")
    }

    /// A minimal page template carrying all four placeholders.
    pub fn sample_template() -> String {
        r#"<!DOCTYPE html>
<html>
<body>
<h1>{{VIDEO_DESCRIPTION}}</h1>
<iframe src="{{VIDEO_URL}}"></iframe>
<p>{{TRANSCRIPT}}</p>
<script>
let quizData = [];
renderQuiz(quizData);
</script>
</body>
</html>
"#
        .to_string()
    }

    /// Parses the quiz literal embedded in a rendered page.
    pub fn extract_quiz_literal(rendered: &str) -> QuizData {
        let start = rendered
            .find(QUIZ_DATA_ASSIGNMENT_PREFIX)
            .expect("rendered page should contain the quiz assignment")
            + QUIZ_DATA_ASSIGNMENT_PREFIX.len();

        serde_json::Deserializer::from_str(&rendered[start..])
            .into_iter::<QuizData>()
            .next()
            .expect("quiz literal should be present")
            .expect("quiz literal should parse")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quiz_is_valid() {
        let quiz = sample_quiz_data();
        assert_eq!(quiz.len(), 10);
        assert!(quiz.validate().is_ok());
    }

    #[test]
    fn test_fixtures_template_has_all_placeholders() {
        let template = sample_template();
        for token in [
            "{{VIDEO_DESCRIPTION}}",
            "{{VIDEO_URL}}",
            "{{TRANSCRIPT}}",
            "let quizData = [];",
        ] {
            assert_eq!(template.matches(token).count(), 1, "{token}");
        }
    }
}
