use once_cell::sync::Lazy;

use crate::models::domain::QuizQuestion;

const QUIZ_INSTRUCTIONS: &str = "You are a quiz author. Create exactly 10 multiple-choice questions from the transcript supplied by the user.

### Rules:

1. **Count:** Exactly 10 questions. Not 9, not 11.
2. **Choices:** Each question has exactly 4 answer choices.
3. **Correct answer:** Exactly one choice is correct. Mark it with `correctIndex`, the zero-based position of the correct choice in `choices`.
4. **Grounding:** Every question must be answerable from the transcript alone. Incorrect choices should be plausible but clearly wrong given the transcript.

### Output format:

Respond ONLY with a valid JSON array of 10 question objects. No markdown formatting, no code fences, no extra text before or after the array.

Example element:
{\"question\": \"What is discussed first?\", \"choices\": [\"A\", \"B\", \"C\", \"D\"], \"correctIndex\": 2}

Each element must conform to this JSON Schema:
";

/// System message fixing the output contract of the quiz generator.
pub static QUIZ_SYSTEM_PROMPT: Lazy<String> = Lazy::new(|| {
    let schema = serde_json::to_string_pretty(&schemars::schema_for!(QuizQuestion))
        .unwrap_or_default();
    format!("{QUIZ_INSTRUCTIONS}{schema}")
});

pub fn quiz_user_prompt(transcript: &str) -> String {
    format!("Transcript: {transcript}")
}
