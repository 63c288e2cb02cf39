mod keyword_classifier;
mod llama_guard_classifier;

pub use keyword_classifier::KeywordClassifier;
pub use llama_guard_classifier::LlamaGuardClassifier;
