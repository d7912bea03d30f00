pub mod models;
pub mod detector;
pub mod segmenter;
pub mod highlight;
pub mod render;

pub use models::*;
pub use detector::{detect_keyword, question_keywords};
pub use segmenter::segment;
pub use highlight::{highlight_answer, highlight_message};
