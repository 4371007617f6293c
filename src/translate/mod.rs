//! Translation lookups
//!
//! Fetches a word's translation plus the translations of its synonyms
//! from the Datamuse and MyMemory HTTP services.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod models;

pub use client::{DatamuseClient, MyMemoryClient, http_client};
pub use error::FetchError;
pub use fetcher::{Fetch, SynonymSource, TranslationFetcher, Translator};
pub use models::Translations;
