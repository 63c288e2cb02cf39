use super::DocumentId;

/// A contiguous slice of a document's extracted text.
///
/// `offset` is the character index of the first character in the source
/// text. `sequence_index` is the position of the chunk in source order and
/// is what results are re-sorted on after concurrent classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub sequence_index: usize,
    pub text: String,
    pub document_id: DocumentId,
    pub offset: usize,
}

impl Chunk {
    pub fn new(sequence_index: usize, text: String, document_id: DocumentId, offset: usize) -> Self {
        Self {
            sequence_index,
            text,
            document_id,
            offset,
        }
    }
}
