use std::borrow::Cow;

use crate::{
    config::{SubstitutionMode, TextEscaping},
    constants::page_template::{
        QUIZ_DATA_ASSIGNMENT_PREFIX, QUIZ_DATA_PLACEHOLDER, TRANSCRIPT_PLACEHOLDER,
        VIDEO_DESCRIPTION_PLACEHOLDER, VIDEO_URL_PLACEHOLDER,
    },
    errors::MaterializationFailure,
    models::domain::QuizData,
};

/// Values substituted into the page template.
#[derive(Debug, Clone, Copy)]
pub struct QuizPage<'a> {
    pub video_description: &'a str,
    pub video_url: &'a str,
    pub transcript: &'a str,
    pub quiz: &'a QuizData,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRenderer {
    mode: SubstitutionMode,
    escaping: TextEscaping,
}

impl PageRenderer {
    pub fn new(mode: SubstitutionMode, escaping: TextEscaping) -> Self {
        Self { mode, escaping }
    }

    /// Replaces the first occurrence of each placeholder in `template`.
    ///
    /// Placeholders are located in the template before anything is inserted,
    /// so substituted text is never scanned for further placeholders.
    pub fn render(&self, template: &str, page: &QuizPage<'_>) -> Result<String, MaterializationFailure> {
        let quiz_assignment = format!(
            "{QUIZ_DATA_ASSIGNMENT_PREFIX}{};",
            quiz_data_literal(page.quiz)?
        );

        let substitutions = [
            (VIDEO_DESCRIPTION_PLACEHOLDER, self.escape(page.video_description)),
            (VIDEO_URL_PLACEHOLDER, self.escape(page.video_url)),
            (TRANSCRIPT_PLACEHOLDER, self.escape(page.transcript)),
            (QUIZ_DATA_PLACEHOLDER, Cow::Owned(quiz_assignment)),
        ];

        let mut found = Vec::with_capacity(substitutions.len());
        for (token, value) in substitutions {
            match template.find(token) {
                Some(position) => found.push((position, token, value)),
                None if self.mode == SubstitutionMode::Strict => {
                    return Err(MaterializationFailure::PlaceholderMissing(token));
                }
                None => log::warn!("Template placeholder {} not found; substitution skipped", token),
            }
        }
        found.sort_by_key(|(position, _, _)| *position);

        let extra: usize = found.iter().map(|(_, _, value)| value.len()).sum();
        let mut rendered = String::with_capacity(template.len() + extra);
        let mut cursor = 0;
        for (position, token, value) in found {
            if position < cursor {
                continue;
            }
            rendered.push_str(&template[cursor..position]);
            rendered.push_str(&value);
            cursor = position + token.len();
        }
        rendered.push_str(&template[cursor..]);

        Ok(rendered)
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.escaping {
            TextEscaping::Verbatim => Cow::Borrowed(text),
            TextEscaping::Html => escape_html(text),
        }
    }
}

/// Serializes the quiz as a JSON literal safe to place inside a `<script>`
/// element. `<\/` is an ordinary JSON escape, so the literal still parses back
/// to the same data.
pub fn quiz_data_literal(quiz: &QuizData) -> Result<String, MaterializationFailure> {
    let json = serde_json::to_string(quiz)
        .map_err(|err| MaterializationFailure::QuizEncoding(err.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
