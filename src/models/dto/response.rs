use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizResponse {
    pub success: bool,
    pub quiz_url: String,
}

impl CreateQuizResponse {
    pub fn new(quiz_url: String) -> Self {
        Self {
            success: true,
            quiz_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    pub message: String,
}
