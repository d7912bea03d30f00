use answer_highlighter::{
    detect_keyword, highlight_answer, highlight_message, AnswerRecord, ChatMessage, MatchTier,
    RenderSegment,
};

fn joined(segments: &[RenderSegment]) -> String {
    segments.iter().map(|s| s.content.as_str()).collect()
}

fn emphasized(segments: &[RenderSegment]) -> Vec<&str> {
    segments
        .iter()
        .filter(|s| s.emphasized)
        .map(|s| s.content.as_str())
        .collect()
}

const SAMPLES: &[(&str, &str)] = &[
    ("What is the grace period?", "A grace period of thirty days, i.e. a 30-day grace period, applies."),
    ("What is the co-payment?", "A 15% co-payment applies to claims above $10,000.50."),
    ("What is the sum insured?", "The sum insured is 5,00,000 for the policy year."),
    ("Define hospitalization", "Hospitalization means admission for 24 consecutive hours."),
    ("Is maternity covered?", "Maternity expenses are covered. maternity waiting periods apply."),
    ("short", "No specific keyword here"),
    ("", ""),
    ("Are Zürich hospitals covered?", "Treatment in Zürich is fine, ZÜRICH too."),
    ("Is a short stay covered?", "A \u{17f}hort stay of 2 días."),
    ("What about AYUSH?", "Ayurveda, Yoga, Unani, Siddha and Homeopathy (AYUSH) treatment."),
];

#[test]
fn user_messages_are_never_segmented() {
    for (question, answer) in SAMPLES {
        let mut message = ChatMessage::user(*answer);
        message.question = Some(question.to_string());

        assert_eq!(highlight_message(&message), vec![RenderSegment::plain(*answer)]);
    }
}

#[test]
fn segments_reconstruct_the_answer() {
    for (question, answer) in SAMPLES {
        let record = AnswerRecord { text: answer, question };
        assert_eq!(joined(&highlight_answer(&record)), *answer);
    }
}

#[test]
fn digit_duration_beats_other_candidates() {
    let record = AnswerRecord {
        text: "Premium of $2,000 is due; a 30-day grace period follows, then 50% penalty.",
        question: "What is the grace period for premium payment?",
    };

    assert_eq!(emphasized(&highlight_answer(&record)), vec!["30-day"]);
}

#[test]
fn percentage_beats_amount() {
    let record = AnswerRecord {
        text: "Claims above $5,000 attract a 15% co-payment.",
        question: "What is the co-payment?",
    };

    assert_eq!(emphasized(&highlight_answer(&record)), vec!["15%"]);
}

#[test]
fn spelled_duration_beats_question_keyword() {
    let candidate = detect_keyword(
        "The waiting period is two years from policy inception.",
        "What is the waiting period for cataract surgery?",
    )
    .unwrap();

    assert_eq!(candidate.span, "two years");
    assert_eq!(candidate.tier, MatchTier::WordDuration);
}

#[test]
fn hours_fall_through_the_duration_tiers() {
    let answer = "Hospitalization means admission in a hospital for a minimum of 24 consecutive hours.";
    let candidate = detect_keyword(answer, "Define hospitalization").unwrap();

    assert_ne!(candidate.tier, MatchTier::NumericDuration);
    assert_ne!(candidate.tier, MatchTier::WordDuration);
    assert_eq!(candidate.span, "24");

    let without_digits = "Hospitalization means admission in a hospital for consecutive hours.";
    let candidate = detect_keyword(without_digits, "Define hospitalization").unwrap();
    assert_eq!(candidate.tier, MatchTier::QuestionKeyword);
    assert_eq!(candidate.span, "Hospitalization");
}

#[test]
fn no_candidate_keeps_text_whole() {
    let record = AnswerRecord {
        text: "No specific keyword here",
        question: "short",
    };

    assert!(detect_keyword(record.text, record.question).is_none());
    assert_eq!(
        highlight_answer(&record),
        vec![RenderSegment::plain("No specific keyword here")]
    );
}

#[test]
fn keyword_is_emphasized_everywhere() {
    let message = ChatMessage::bot(
        "Maternity expenses are covered. maternity waiting periods apply.",
        "Is maternity covered?",
        Vec::new(),
    );

    assert_eq!(
        highlight_message(&message),
        vec![
            RenderSegment::plain(""),
            RenderSegment::emphasized("Maternity"),
            RenderSegment::plain(" expenses are covered. "),
            RenderSegment::emphasized("maternity"),
            RenderSegment::plain(" waiting periods apply."),
        ]
    );
}
