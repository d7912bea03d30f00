use crate::payloads::{AskResponse, RunResponse};
use answer_highlighter::render::{to_ansi, to_markdown};
use answer_highlighter::{highlight_message, ChatMessage, SenderRole};

const REFERENCE_PREVIEW_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Ansi,
    Markdown,
}

/// Messages exchanged against one uploaded document, in display order.
#[derive(Debug)]
pub struct ChatSession {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
        }
    }

    /// Appends the question as asked and the backend's answer to it.
    pub fn record_exchange(&mut self, response: AskResponse) {
        self.messages.push(ChatMessage::user(response.question.as_str()));
        self.messages.push(ChatMessage::bot(
            response.answer.trim(),
            response.question,
            response.references,
        ));
    }

    /// Records a batch run, pairing answers with the questions in request order.
    pub fn record_run(&mut self, questions: &[String], run: RunResponse) {
        for (question, answer) in questions.iter().zip(run.answers) {
            self.record_exchange(answer.into_ask_response(question));
        }
    }

    pub fn render_transcript(&self, style: RenderStyle) -> String {
        let mut transcript = String::new();

        for message in &self.messages {
            let segments = highlight_message(message);
            let body = match style {
                RenderStyle::Ansi => to_ansi(&segments),
                RenderStyle::Markdown => to_markdown(&segments),
            };

            let speaker = match message.role {
                SenderRole::User => "You",
                SenderRole::Bot => "Answer",
            };
            transcript.push_str(&format!("{}: {}\n", speaker, body));

            for reference in &message.references {
                transcript.push_str(&format!("  - {}\n", reference.preview(REFERENCE_PREVIEW_CHARS)));
            }
        }

        transcript
    }
}
