//! Typeahead: prefix search over option labels plus the debounced buffer
//! that accumulates typed characters.
//!
//! Matching is ordinal and case-insensitive — no locale-aware collation.

use std::time::Duration;

/// Idle time after which an accumulated search string resets.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Find the next label index whose lowercase form starts with `query`.
///
/// The search begins at `start` and wraps past the end of `labels` so every
/// label is considered exactly once. Callers pass one-past-the-focused-index
/// so repeated taps of the same letter cycle forward.
///
/// If nothing matches and the query is a single repeated character (`"bb"`,
/// `"ccc"`), the search retries with the single character, which is what
/// makes repeated-letter cycling land on the *next* match rather than dead-
/// ending once the doubled prefix stops matching.
pub fn index_by_letters(labels: &[&str], query: &str, start: usize) -> Option<usize> {
    if labels.is_empty() || query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    if let Some(found) = search_from(labels, &query, start) {
        return Some(found);
    }

    let mut chars = query.chars();
    let first = chars.next()?;
    if query.chars().count() > 1 && chars.all(|c| c == first) {
        return search_from(labels, &first.to_string(), start);
    }
    None
}

fn search_from(labels: &[&str], lowercase_query: &str, start: usize) -> Option<usize> {
    let n = labels.len();
    (0..n)
        .map(|step| (start + step) % n)
        .find(|&i| labels[i].to_lowercase().starts_with(lowercase_query))
}

/// The accumulated typeahead string, tagged with a generation counter that
/// implements cancel-on-rearm debouncing.
///
/// Every mutation bumps the generation and returns it; the caller arms a
/// one-shot timer carrying that value. When the timer fires, [`expire`]
/// clears the buffer only if the generation still matches — an expiry
/// carrying a stale generation *is* the cancelled timer, so an in-progress
/// multi-character search is never truncated. At most one generation is live
/// per widget at a time.
///
/// [`expire`]: SearchBuffer::expire
#[derive(Debug, Default)]
pub struct SearchBuffer {
    buffer: String,
    generation: u64,
}

impl SearchBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated search string.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The generation of the most recent mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Append a character. Returns the new generation to arm a timer with.
    pub fn push(&mut self, c: char) -> u64 {
        self.buffer.push(c);
        self.generation += 1;
        self.generation
    }

    /// Erase the most recent character. Returns the new generation.
    pub fn erase(&mut self) -> u64 {
        self.buffer.pop();
        self.generation += 1;
        self.generation
    }

    /// Reset the buffer unconditionally (focus moved by other means),
    /// invalidating any armed timer.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.generation += 1;
    }

    /// Handle a debounce timer firing for `generation`.
    ///
    /// Clears the buffer and returns `true` when the generation is current;
    /// a stale generation means the timer was superseded and the buffer is
    /// left alone.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation {
            self.buffer.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: &[&str] = &["Apple", "Banana", "Blueberry", "Cherry"];

    #[test]
    fn finds_prefix_from_start() {
        assert_eq!(index_by_letters(FRUIT, "b", 0), Some(1));
        assert_eq!(index_by_letters(FRUIT, "ch", 0), Some(3));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(index_by_letters(FRUIT, "BLUE", 0), Some(2));
        assert_eq!(index_by_letters(FRUIT, "a", 0), Some(0));
    }

    #[test]
    fn search_wraps_around() {
        // Start past the last "b" label: wraps to Banana.
        assert_eq!(index_by_letters(FRUIT, "b", 3), Some(1));
        assert_eq!(index_by_letters(FRUIT, "a", 1), Some(0));
    }

    #[test]
    fn repeated_letter_cycles_forward() {
        // Focus on Banana (index 1), second "b" press: buffer "bb" has no
        // prefix match, collapses to "b", search from 2 finds Blueberry.
        assert_eq!(index_by_letters(FRUIT, "bb", 2), Some(2));
        // Third press from Blueberry wraps back to Banana.
        assert_eq!(index_by_letters(FRUIT, "bbb", 3), Some(1));
    }

    #[test]
    fn distinct_multi_char_query_does_not_collapse() {
        assert_eq!(index_by_letters(FRUIT, "bl", 0), Some(2));
        assert_eq!(index_by_letters(FRUIT, "bx", 0), None);
    }

    #[test]
    fn no_match_reports_not_found() {
        assert_eq!(index_by_letters(FRUIT, "z", 0), None);
        assert_eq!(index_by_letters(FRUIT, "zz", 0), None);
        assert_eq!(index_by_letters(&[], "a", 0), None);
        assert_eq!(index_by_letters(FRUIT, "", 0), None);
    }

    #[test]
    fn buffer_accumulates_and_reports_generations() {
        let mut buf = SearchBuffer::new();
        let g1 = buf.push('b');
        let g2 = buf.push('l');
        assert_eq!(buf.as_str(), "bl");
        assert!(g2 > g1);
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut buf = SearchBuffer::new();
        let g1 = buf.push('b');
        let _g2 = buf.push('l');
        // The timer armed for g1 fires after a rearm: it was cancelled.
        assert!(!buf.expire(g1));
        assert_eq!(buf.as_str(), "bl");
    }

    #[test]
    fn current_expiry_clears() {
        let mut buf = SearchBuffer::new();
        let gen = buf.push('b');
        assert!(buf.expire(gen));
        assert!(buf.is_empty());
    }

    #[test]
    fn erase_drops_last_char() {
        let mut buf = SearchBuffer::new();
        buf.push('b');
        buf.push('l');
        buf.erase();
        assert_eq!(buf.as_str(), "b");
        // Erasing an empty buffer is harmless.
        buf.erase();
        buf.erase();
        assert!(buf.is_empty());
    }

    #[test]
    fn clear_invalidates_armed_timer() {
        let mut buf = SearchBuffer::new();
        let gen = buf.push('b');
        buf.clear();
        assert!(!buf.expire(gen));
    }
}
