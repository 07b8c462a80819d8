pub mod network;
pub mod scrape;
pub mod word;

pub use network::{FetchConfig, FetchError, SiteFetcher};
pub use scrape::{
    AggregateResult, Aggregator, BatchOutput, CambridgeAdapter, NormalizedSentence, QueryService,
    SentenceDictAdapter, SourceAdapter, SourceId, SourceResult, WordEntry, YourDictionaryAdapter,
    DEFAULT_LIMIT, MAX_BATCH_WORDS, MAX_LIMIT, MIN_LIMIT, NO_SENTENCES_PLACEHOLDER,
};
pub use word::{InputError, Word};
