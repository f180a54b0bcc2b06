//! Display-width-aware text fitting for trigger and menu rows.

use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit `text` into `width` terminal columns, truncating with an ellipsis.
///
/// Returns the text unchanged when it already fits. Wide (CJK, fullwidth)
/// characters count by their display width, not their char count.
pub fn fit(text: &str, width: usize) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let budget = width - 1; // one column for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_borrowed() {
        assert!(matches!(fit("abc", 10), Cow::Borrowed("abc")));
        assert!(matches!(fit("abc", 3), Cow::Borrowed("abc")));
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        assert_eq!(fit("strawberry", 6), "straw…");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn wide_chars_count_double() {
        // Each ideograph is two columns; three of them don't fit in five.
        assert_eq!(fit("日本語", 5), "日本…");
        assert_eq!(fit("日本語", 6), "日本語");
    }
}
