//! Joins synonym and translation lookups into one fetch per quiz word

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use tracing::instrument;

use super::client::{DatamuseClient, MyMemoryClient, http_client};
use super::error::FetchError;
use super::models::Translations;
use crate::config::Config;

/// Source-language synonym lookup
#[async_trait]
pub trait SynonymSource: Send + Sync {
    /// Up to `max` synonyms for `word`, best first
    async fn synonyms(&self, word: &str, max: usize) -> Result<Vec<String>, FetchError>;
}

/// Single-text translation into the target language
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, FetchError>;
}

/// Anything that can produce the accepted translations for a word.
///
/// This is the seam the quiz controller depends on.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, word: &str) -> Result<Translations, FetchError>;
}

/// Synonyms first, then every translation concurrently; one failure fails the whole fetch
pub struct TranslationFetcher<S, T> {
    synonyms: S,
    translator: T,
    max_synonyms: usize,
}

impl<S: SynonymSource, T: Translator> TranslationFetcher<S, T> {
    pub fn new(synonyms: S, translator: T, max_synonyms: usize) -> Self {
        Self { synonyms, translator, max_synonyms }
    }
}

impl TranslationFetcher<DatamuseClient, MyMemoryClient> {
    /// Fetcher wired to the configured HTTP services
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = http_client(config.request_timeout())?;
        Ok(Self::new(
            DatamuseClient::from_config(client.clone(), config),
            MyMemoryClient::from_config(client, config),
            config.max_synonyms,
        ))
    }

    /// Same as `from_config`, boxed for the controller
    pub fn shared(config: &Config) -> Result<Arc<dyn Fetch>, reqwest::Error> {
        Ok(Arc::new(Self::from_config(config)?))
    }
}

#[async_trait]
impl<S: SynonymSource, T: Translator> Fetch for TranslationFetcher<S, T> {
    #[instrument(skip(self))]
    async fn fetch(&self, word: &str) -> Result<Translations, FetchError> {
        let synonyms = self.synonyms.synonyms(word, self.max_synonyms).await?;
        tracing::debug!("{} synonyms for {:?}", synonyms.len(), word);

        let requests = std::iter::once(word)
            .chain(synonyms.iter().map(String::as_str))
            .map(|text| self.translator.translate(text));

        let mut responses = try_join_all(requests).await?.into_iter();
        let authoritative = responses.next().ok_or_else(|| FetchError::Malformed {
            service: "translation",
            detail: "no response for the word itself".to_string(),
        })?;

        Ok(Translations { authoritative, synonyms, synonym_translations: responses.collect() })
    }
}
