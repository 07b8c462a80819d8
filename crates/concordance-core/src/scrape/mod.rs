mod adapter;
mod aggregator;
mod normalizer;
mod service;
mod sources;

pub use adapter::{SourceAdapter, SourceId, SourceResult};
pub use aggregator::{AggregateResult, Aggregator, NO_SENTENCES_PLACEHOLDER};
pub use normalizer::{
    canonical_form, normalize, number_sentences, NormalizedSentence, MAX_SENTENCES_PER_SOURCE,
};
pub use service::{
    BatchOutput, QueryService, WordEntry, DEFAULT_LIMIT, MAX_BATCH_WORDS, MAX_LIMIT, MIN_LIMIT,
};
pub use sources::{CambridgeAdapter, SentenceDictAdapter, YourDictionaryAdapter};
