//! Text renderers for highlighted segments.

use crate::models::RenderSegment;

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

pub fn to_markdown(segments: &[RenderSegment]) -> String {
    wrap_emphasized(segments, "**", "**")
}

pub fn to_ansi(segments: &[RenderSegment]) -> String {
    wrap_emphasized(segments, ANSI_BOLD, ANSI_RESET)
}

fn wrap_emphasized(segments: &[RenderSegment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.emphasized {
            out.push_str(open);
            out.push_str(&segment.content);
            out.push_str(close);
        } else {
            out.push_str(&segment.content);
        }
    }
    out
}
