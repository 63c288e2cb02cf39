use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, DocumentId};

pub const DEFAULT_MAX_CHUNK_SIZE: usize = 3000;
pub const DEFAULT_OVERLAP: usize = 30;

/// Fixed windows of `max_chunk_size` characters. Window starts advance by the
/// full size; each window except the last is extended by `overlap`
/// characters of look-ahead when that extension stays strictly inside the
/// text. The last window takes whatever remains.
#[derive(Debug, Clone)]
pub struct OverlapChunker {
    max_chunk_size: usize,
    overlap: usize,
}

impl OverlapChunker {
    pub fn new(max_chunk_size: usize, overlap: usize) -> Result<Self, TextSplitterError> {
        if max_chunk_size == 0 {
            return Err(TextSplitterError::InvalidChunkSize);
        }
        Ok(Self {
            max_chunk_size,
            overlap,
        })
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }
}

impl Default for OverlapChunker {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl TextSplitter for OverlapChunker {
    fn split(&self, text: &str, document_id: DocumentId) -> Vec<Chunk> {
        let chars: Vec<char> = text.chars().collect();
        let total_len = chars.len();
        let mut chunks = Vec::with_capacity(total_len.div_ceil(self.max_chunk_size));

        let mut start = 0;
        while start < total_len {
            let core_end = start + self.max_chunk_size;
            let end = if core_end >= total_len {
                total_len
            } else if core_end + self.overlap < total_len {
                core_end + self.overlap
            } else {
                core_end
            };

            let chunk_text: String = chars[start..end].iter().collect();
            chunks.push(Chunk::new(chunks.len(), chunk_text, document_id, start));

            start = core_end;
        }

        chunks
    }
}
