//! Loading, classification, and artifact extraction over exported chat
//! transcripts.

mod classify;
mod config;
mod error;
mod extract;
mod literal;
mod load;
mod model;

pub use classify::{assistant_specs, categories, scene_related};
pub use config::{load_config, KeywordConfig};
pub use error::{ConfigError, DuplicateMessageId, LoadError, ParseError};
pub use extract::{extract_message, fenced_blocks};
pub use literal::{
    balanced_literals, balanced_literals_with, BraceScan, LiteralOptions, DEFAULT_LITERAL_FILTER,
};
pub use load::{load_transcript, parse_transcript};
pub use model::{Category, Chat, ExtractionResult, History, Message, Role, Transcript};
