mod content_classifier;
mod file_loader;
mod keyword_repository;
mod llm_client;
mod repository_error;
mod text_splitter;

pub use content_classifier::{ClassifierError, ContentClassifier};
pub use file_loader::{FileLoader, FileLoaderError};
pub use keyword_repository::KeywordRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use text_splitter::{TextSplitter, TextSplitterError};
