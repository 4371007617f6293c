//! Wire formats of the upstream services and the fetch result

use serde::{Deserialize, Serialize};

/// One entry of a Datamuse `/words` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SynonymEntry {
    pub word: String,
}

/// MyMemory `/get` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslationResponse {
    pub response_data: TranslationData,
    /// Sent as a number on success and sometimes as a string on failure
    #[serde(default)]
    pub response_status: Option<serde_json::Value>,
    #[serde(default)]
    pub response_details: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslationData {
    #[serde(default)]
    pub translated_text: Option<String>,
}

impl TranslationResponse {
    /// Status reported inside the body, if any
    pub fn status(&self) -> Option<u16> {
        match self.response_status.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Everything fetched for one quiz word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translations {
    /// The word's own translation
    pub authoritative: String,
    /// Source-language synonyms, for display only; never accepted as answers
    pub synonyms: Vec<String>,
    /// Translation of each synonym, in the same order as `synonyms`
    pub synonym_translations: Vec<String>,
}
