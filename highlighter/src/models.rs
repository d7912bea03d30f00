use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    #[serde(alias = "assistant")]
    Bot,
}

/// A rendered chat message. Only `text`, `role` and `question` are read by the
/// highlighter; `id` and `references` travel through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: SenderRole,
    pub text: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: SenderRole::User,
            text: text.into(),
            question: None,
            references: Vec::new(),
        }
    }

    pub fn bot(text: impl Into<String>, question: impl Into<String>, references: Vec<Reference>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: SenderRole::Bot,
            text: text.into(),
            question: Some(question.into()),
            references,
        }
    }

    /// The answer/question pair to highlight, present only for generated answers.
    pub fn answer_record(&self) -> Option<AnswerRecord<'_>> {
        match (self.role, self.question.as_deref()) {
            (SenderRole::Bot, Some(question)) => Some(AnswerRecord {
                text: &self.text,
                question,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord<'a> {
    pub text: &'a str,
    pub question: &'a str,
}

/// A policy excerpt the backend cites next to an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default = "unknown_page")]
    pub page: Value,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub text: String,
}

fn unknown_page() -> Value {
    Value::String("Unknown".to_string())
}

impl Reference {
    pub fn preview(&self, max_chars: usize) -> String {
        let page = match &self.page {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        let excerpt = if self.text.chars().count() > max_chars {
            format!("{}...", self.text.chars().take(max_chars).collect::<String>())
        } else {
            self.text.clone()
        };

        format!("Page {} : Section {} : {}", page, self.section, excerpt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    NumericDuration,
    WordDuration,
    Percentage,
    Amount,
    QuestionKeyword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub span: String,
    /// Byte offset of `span` within the answer text.
    pub start_index: usize,
    pub tier: MatchTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSegment {
    pub content: String,
    pub emphasized: bool,
}

impl RenderSegment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            emphasized: true,
        }
    }
}
