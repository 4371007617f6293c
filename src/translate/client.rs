//! HTTP clients for the synonym and translation services

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::error::FetchError;
use super::fetcher::{SynonymSource, Translator};
use super::models::{SynonymEntry, TranslationResponse};
use crate::config::Config;

/// Build the HTTP client shared by both services
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Turn a non-success response into an error, keeping the body as the message
async fn check_status(service: &'static str, response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(FetchError::Api { service, status: status.as_u16(), message })
}

/// Datamuse synonym lookup (`/words?rel_syn=...`)
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: Client,
    endpoint: String,
}

impl DatamuseClient {
    const SERVICE: &'static str = "datamuse";

    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.synonym_endpoint.clone())
    }
}

#[async_trait]
impl SynonymSource for DatamuseClient {
    async fn synonyms(&self, word: &str, max: usize) -> Result<Vec<String>, FetchError> {
        let max_param = max.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("rel_syn", word), ("max", max_param.as_str())])
            .send()
            .await
            .map_err(|source| FetchError::Request { service: Self::SERVICE, source })?;

        let response = check_status(Self::SERVICE, response).await?;
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { service: Self::SERVICE, source })?;
        let entries: Vec<SynonymEntry> = serde_json::from_str(&body)?;

        Ok(entries
            .into_iter()
            .map(|entry| entry.word.trim().to_string())
            .filter(|word| !word.is_empty())
            .take(max)
            .collect())
    }
}

/// MyMemory translation lookup (`/get?q=...&langpair=src|dst`)
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    client: Client,
    endpoint: String,
    language_pair: String,
}

impl MyMemoryClient {
    const SERVICE: &'static str = "mymemory";

    pub fn new(client: Client, endpoint: impl Into<String>, language_pair: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into(), language_pair: language_pair.into() }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.translation_endpoint.clone(), config.language_pair())
    }
}

#[async_trait]
impl Translator for MyMemoryClient {
    async fn translate(&self, text: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", self.language_pair.as_str())])
            .send()
            .await
            .map_err(|source| FetchError::Request { service: Self::SERVICE, source })?;

        let response = check_status(Self::SERVICE, response).await?;
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { service: Self::SERVICE, source })?;
        let parsed: TranslationResponse = serde_json::from_str(&body)?;

        // MyMemory reports quota and language-pair problems with HTTP 200
        if let Some(status) = parsed.status().filter(|s| *s != 200) {
            let message = parsed
                .response_details
                .or(parsed.response_data.translated_text)
                .unwrap_or_default();
            return Err(FetchError::Api { service: Self::SERVICE, status, message });
        }

        match parsed.response_data.translated_text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(FetchError::Malformed {
                service: Self::SERVICE,
                detail: format!("no translation for {:?}", text),
            }),
        }
    }
}
