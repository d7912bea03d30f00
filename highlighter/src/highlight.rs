use crate::detector::detect_keyword;
use crate::models::{AnswerRecord, ChatMessage, RenderSegment};
use crate::segmenter::segment;

/// Segments a chat message for display. Only generated answers are
/// highlighted; anything else comes back as one plain segment.
pub fn highlight_message(message: &ChatMessage) -> Vec<RenderSegment> {
    match message.answer_record() {
        Some(record) => highlight_answer(&record),
        None => vec![RenderSegment::plain(message.text.as_str())],
    }
}

pub fn highlight_answer(record: &AnswerRecord<'_>) -> Vec<RenderSegment> {
    match detect_keyword(record.text, record.question) {
        Some(candidate) => segment(record.text, &candidate.span),
        None => vec![RenderSegment::plain(record.text)],
    }
}
