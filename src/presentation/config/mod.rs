mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChunkingSettings, ClassificationSettings, ExtractionSettings, KeywordSettings, LlmSettings,
    LoggingSettings, OfficeHelperSettings, ServerSettings, Settings, SourceSettings,
};
