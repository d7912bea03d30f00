use answer_highlighter::Reference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub session_id: &'a str,
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub references: Vec<Reference>,
}

#[derive(Debug, Serialize)]
pub struct RunRequest<'a> {
    pub documents: &'a str,
    pub questions: &'a [String],
}

/// One entry of a batch run. Current backends return the same object as the
/// ask endpoint; older ones return the bare answer text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RunAnswer {
    Detailed(AskResponse),
    Text(String),
}

impl RunAnswer {
    pub fn into_ask_response(self, question: &str) -> AskResponse {
        match self {
            RunAnswer::Detailed(response) => response,
            RunAnswer::Text(answer) => AskResponse {
                question: question.to_string(),
                answer,
                references: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RunResponse {
    pub answers: Vec<RunAnswer>,
}

#[derive(Debug, Serialize)]
pub struct VideoRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct VideoResponse {
    pub video_url: String,
    #[serde(default)]
    pub job_id: Option<String>,
}

/// FastAPI error body. `detail` is a string for raised errors and a list for
/// request validation failures.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}
