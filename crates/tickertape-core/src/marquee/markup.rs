//! Minimal inline markup for ticker items.
//!
//! Recognised: `**bold**`, `_italic_` and `` `code` ``. Everything else is
//! literal text; unterminated delimiters stay as typed.

use std::sync::OnceLock;

use regex::Regex;

/// Style flags of a markup run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentStyle {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SegmentStyle::default(),
        }
    }
}

fn inline_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\*\*(?P<bold>[^*]+)\*\*|_(?P<italic>[^_]+)_|`(?P<code>[^`]+)`")
            .expect("inline markup pattern is valid")
    })
}

/// Split markup into styled segments
pub fn parse(markup: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in inline_pattern().captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last_end {
            segments.push(Segment::plain(&markup[last_end..whole.start()]));
        }

        let (text, style) = if let Some(m) = caps.name("bold") {
            (m.as_str(), SegmentStyle { bold: true, ..Default::default() })
        } else if let Some(m) = caps.name("italic") {
            (m.as_str(), SegmentStyle { italic: true, ..Default::default() })
        } else if let Some(m) = caps.name("code") {
            (m.as_str(), SegmentStyle { code: true, ..Default::default() })
        } else {
            (whole.as_str(), SegmentStyle::default())
        };
        segments.push(Segment {
            text: text.to_string(),
            style,
        });
        last_end = whole.end();
    }

    if last_end < markup.len() {
        segments.push(Segment::plain(&markup[last_end..]));
    }
    segments
}

/// Visible text of the markup, delimiters removed
pub fn strip(markup: &str) -> String {
    parse(markup).into_iter().map(|s| s.text).collect()
}
