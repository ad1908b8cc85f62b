//! Fixed-width text helpers for terminal reports.
//!
//! Widths are measured in terminal columns, so wide characters (CJK, emoji)
//! count as two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Wide enough that html2text never wraps inside a comment.
const HTML_WRAP_WIDTH: usize = 4096;

/// Longest prefix of `s` that fits in `max_width` columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            return &s[..idx];
        }
        width += w;
    }
    s
}

/// Left-aligns `s` in a column of exactly `width` columns, cutting it with
/// an ellipsis when it does not fit.
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    let cell = if s.width() <= width {
        s.to_string()
    } else if width < ELLIPSIS.len() {
        truncate_to_width(s, width).to_string()
    } else {
        format!("{}{ELLIPSIS}", truncate_to_width(s, width - ELLIPSIS.len()))
    };
    let padding = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(padding))
}

/// One-line plain-text preview of an HTML comment body.
///
/// The HTML is rendered to text (entities decoded, tags dropped), whitespace
/// runs collapse to a single space, and the result is cut to `max_width`
/// columns with a trailing ellipsis.
pub fn body_preview(html: &str, max_width: usize) -> String {
    let text = html_to_plain_text(html);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.width() <= max_width {
        collapsed
    } else {
        format!("{}{ELLIPSIS}", truncate_to_width(&collapsed, max_width))
    }
}

/// Falls back to the raw markup when html2text cannot render it.
fn html_to_plain_text(html: &str) -> String {
    html2text::from_read(html.as_bytes(), HTML_WRAP_WIDTH).unwrap_or_else(|_| html.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fits("hello", 10, "hello")]
    #[case::exact("hello", 5, "hello")]
    #[case::cut("hello world", 5, "hello")]
    #[case::empty("", 5, "")]
    #[case::zero("hello", 0, "")]
    #[case::cjk("日本語", 4, "日本")]
    #[case::cjk_odd("日本語", 5, "日本")]
    fn test_truncate_to_width(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_to_width(input, width), expected);
    }

    #[rstest]
    #[case::pads("bob", 6, "bob   ")]
    #[case::exact("alice", 5, "alice")]
    #[case::ellipsis("longusername", 8, "longu...")]
    #[case::too_narrow_for_ellipsis("alice", 2, "al")]
    #[case::cjk_padding("日本", 6, "日本  ")]
    #[case::cjk_ellipsis("日本語テスト", 8, "日本... ")]
    fn test_pad_or_truncate(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(pad_or_truncate(input, width), expected);
    }

    #[rstest]
    #[case::plain("Nice game", 20, "Nice game")]
    #[case::paragraphs("<p>First</p><p>Second</p>", 40, "First Second")]
    #[case::line_break("one<br>two<br/>three", 40, "one two three")]
    #[case::inline_tags("<p>So <span>plain</span> text</p>", 40, "So plain text")]
    #[case::named_entities("<p>Tom &amp; Jerry &lt;3</p>", 40, "Tom & Jerry <3")]
    #[case::numeric_and_typographic_entities(
        "<p>It&#8217;s a &mdash; &#x27;win&#x27;</p>",
        70,
        "It\u{2019}s a \u{2014} 'win'"
    )]
    #[case::whitespace("  lots\n\n of   space ", 40, "lots of space")]
    #[case::cut("<p>abcdefghij</p>", 4, "abcd...")]
    #[case::empty("", 10, "")]
    fn test_body_preview(#[case] html: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(body_preview(html, width), expected);
    }
}
