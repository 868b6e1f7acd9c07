// Tue Jan 13 2026 - Alex

use indexmap::IndexSet;

/// Produces every distinct run of consecutive tokens of a sequence whose
/// length lies within the configured bounds.
///
/// Tokens are obtained by splitting on the separator, or per character when
/// the separator is empty. Since the tokens of a run are contiguous in the
/// input and separated by exactly one separator, the re-joined run is the
/// corresponding slice of the input itself.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    separator: String,
    min_length: usize,
    max_length: Option<usize>,
}

impl CandidateGenerator {
    pub fn new(separator: &str, min_length: usize, max_length: Option<usize>) -> Self {
        Self {
            separator: separator.to_string(),
            min_length: min_length.max(1),
            max_length,
        }
    }

    /// Byte spans of the tokens of `sequence`.
    pub fn tokenize(&self, sequence: &str) -> Vec<(usize, usize)> {
        if self.separator.is_empty() {
            return sequence.char_indices()
                .map(|(start, c)| (start, start + c.len_utf8()))
                .collect();
        }

        let mut spans = Vec::new();
        let mut offset = 0;
        for token in sequence.split(self.separator.as_str()) {
            spans.push((offset, offset + token.len()));
            offset += token.len() + self.separator.len();
        }
        spans
    }

    pub fn generate<'a>(&self, sequence: &'a str) -> IndexSet<&'a str> {
        let tokens = self.tokenize(sequence);
        let token_count = tokens.len();
        let longest = self.max_length
            .map_or(token_count, |max| max.min(token_count));

        let mut candidates = IndexSet::new();
        if self.min_length > longest {
            return candidates;
        }

        for first in 0..token_count {
            let available = token_count - first;
            for length in self.min_length..=longest.min(available) {
                let start = tokens[first].0;
                let end = tokens[first + length - 1].1;
                let text = &sequence[start..end];
                if !text.is_empty() {
                    candidates.insert(text);
                }
            }
        }

        candidates
    }

    pub fn generate_owned(&self, sequence: &str) -> Vec<String> {
        self.generate(sequence)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
