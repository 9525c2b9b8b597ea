//! Chunker: splits input text into size-bounded, word-aligned segments.
//!
//! Chunk boundaries never fall inside a word. Whitespace between words is
//! normalized to single spaces, so joining the chunk texts back together
//! with single-space separators reproduces the original word sequence
//! (exact original spacing is not preserved).

/// An ordered, size-bounded, word-aligned segment of the input text.
///
/// Indices are contiguous `0..N-1` in original order; reassembly is
/// strictly by index, independent of translation completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the original ordering (0-based, contiguous).
    pub index: usize,
    /// Whole words separated by single spaces.
    pub text: String,
}

impl Chunk {
    /// Number of whitespace-separated words in this chunk.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Split `text` into chunks of at most `max_chunk_size` characters.
///
/// Words are accumulated greedily with single-space separators; a chunk is
/// closed when appending the next word would exceed the bound. A single
/// word longer than `max_chunk_size` is emitted whole as its own chunk
/// rather than being truncated. Empty or whitespace-only input yields
/// zero chunks.
///
/// Lengths are measured in `char`s, so multi-byte scripts chunk by
/// visible character count rather than byte count.
pub fn split_into_chunks(text: &str, max_chunk_size: usize) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        if current_len + 1 + word_len <= max_chunk_size {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            chunks.push(Chunk {
                index: chunks.len(),
                text: std::mem::take(&mut current),
            });
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk {
            index: chunks.len(),
            text: current,
        });
    }

    chunks
}
