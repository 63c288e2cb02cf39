mod chunk;
mod decision;
mod document;
mod extraction;
mod keyword;
mod message;
mod message_role;
mod verdict;

pub use chunk::Chunk;
pub use decision::{FinalDecision, SafetyStatus};
pub use document::{Document, DocumentFormat, DocumentId};
pub use extraction::{ExtractedText, ExtractionOutcome, MediaPresence};
pub use keyword::Keyword;
pub use message::ChatMessage;
pub use message_role::MessageRole;
pub use verdict::{ChunkVerdict, DocumentVerdict, Finding, LABEL_SEPARATOR, Label, LabelEntry};
