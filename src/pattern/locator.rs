// Tue Jan 13 2026 - Alex

use crate::pattern::feature::Position;

/// Finds every occurrence of a pattern inside a sequence.
///
/// Matching is plain containment on the raw text. Overlapping matches are
/// reported separately: every character offset at which the pattern starts
/// yields one position, so `"aa"` occurs twice in `"aaa"`. Offsets count
/// characters, not bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccurrenceLocator;

impl OccurrenceLocator {
    pub fn new() -> Self {
        Self
    }

    pub fn locate(&self, sequence: &str, pattern: &str) -> Vec<Position> {
        let mut results = Vec::new();

        if pattern.is_empty() || sequence.len() < pattern.len() {
            return results;
        }

        let first_byte = pattern.as_bytes()[0];
        let pattern_chars = pattern.chars().count();
        let bytes = sequence.as_bytes();

        for (char_offset, (byte_offset, _)) in sequence.char_indices().enumerate() {
            if bytes.len() - byte_offset < pattern.len() {
                break;
            }
            if bytes[byte_offset] == first_byte && sequence[byte_offset..].starts_with(pattern) {
                results.push([char_offset, char_offset + pattern_chars]);
            }
        }

        results
    }

    pub fn count(&self, sequence: &str, pattern: &str) -> usize {
        self.locate(sequence, pattern).len()
    }
}
