use crate::models::RenderSegment;
use regex::RegexBuilder;

/// Splits `text` around every case-insensitive occurrence of `span`.
///
/// Plain and emphasized segments alternate, starting and ending with a plain
/// segment that may be empty. Joining the contents gives back `text`.
/// Case folding is ASCII only; other characters must match exactly.
pub fn segment(text: &str, span: &str) -> Vec<RenderSegment> {
    if span.is_empty() {
        return vec![RenderSegment::plain(text)];
    }

    let regex = match RegexBuilder::new(&regex::escape(span))
        .case_insensitive(true)
        .unicode(false)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            log::warn!("Cannot split on {:?}: {}", span, e);
            return vec![RenderSegment::plain(text)];
        }
    };

    let mut segments = Vec::new();
    let mut last_end = 0;

    for m in regex.find_iter(text) {
        segments.push(RenderSegment::plain(&text[last_end..m.start()]));
        segments.push(RenderSegment::emphasized(m.as_str()));
        last_end = m.end();
    }
    segments.push(RenderSegment::plain(&text[last_end..]));

    segments
}
