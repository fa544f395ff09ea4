use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::deck::Deck;
use crate::error::{AnkiError, Result};

pub const DEFAULT_URL: &str = "http://localhost:8765";

/// AnkiConnect protocol version sent with every request
pub const API_VERSION: u32 = 6;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Result<Self> {
        // AnkiConnect listens on loopback, a system proxy would only get in the way
        let client = reqwest::Client::builder().no_proxy().build()?;

        Ok(Self::with_http_client(base_url, client))
    }

    pub fn with_http_client(base_url: String, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        self.invoke("version", &NoParams {}).await
    }

    /// Get list of deck names
    pub async fn deck_names(&self) -> Result<Vec<String>> {
        self.invoke("deckNames", &NoParams {}).await
    }

    /// Get deck names with their ids, sorted by name
    pub async fn deck_names_and_ids(&self) -> Result<Vec<(String, u64)>> {
        let decks: Map<String, Value> = self.invoke("deckNamesAndIds", &NoParams {}).await?;

        decks
            .into_iter()
            .map(|(name, id)| {
                serde_json::from_value(id)
                    .map(|id| (name, id))
                    .map_err(|source| AnkiError::UnexpectedResult {
                        action: "deckNamesAndIds".to_string(),
                        source,
                    })
            })
            .collect()
    }

    /// Create a deck, returning its id. Existing decks are left untouched.
    pub async fn create_deck(&self, deck: &str) -> Result<u64> {
        #[derive(Serialize)]
        struct Params<'a> {
            deck: &'a str,
        }

        self.invoke("createDeck", &Params { deck }).await
    }

    pub async fn delete_decks(&self, decks: &[String], cards_too: bool) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'a> {
            decks: &'a [String],
            cards_too: bool,
        }

        self.invoke("deleteDecks", &Params { decks, cards_too })
            .await
    }

    /// Get list of model (note type) names
    pub async fn model_names(&self) -> Result<Vec<String>> {
        self.invoke("modelNames", &NoParams {}).await
    }

    /// Bind a deck name to this client. No request is made.
    pub fn open_deck(&self, deck_name: impl Into<String>) -> Deck<'_> {
        Deck::new(self, deck_name.into())
    }

    /// Invoke an AnkiConnect action and decode its result into `T`
    pub async fn invoke<P, T>(&self, action: &str, params: &P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let result = self.invoke_raw(action, params).await?;

        serde_json::from_value(result).map_err(|source| AnkiError::UnexpectedResult {
            action: action.to_string(),
            source,
        })
    }

    /// Invoke an AnkiConnect action and return its untouched `result` value
    pub async fn invoke_raw<P>(&self, action: &str, params: &P) -> Result<Value>
    where
        P: Serialize,
    {
        if action.is_empty() {
            return Err(AnkiError::EmptyAction);
        }

        let request = AnkiRequest {
            action,
            version: API_VERSION,
            params,
        };

        tracing::debug!(action, url = %self.base_url, "invoking AnkiConnect");

        let body = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await?
            .bytes()
            .await?;

        let envelope: Map<String, Value> = serde_json::from_slice(&body)?;

        AnkiResponse::try_from(envelope)?.into_result()
    }
}

/// Serializes to `{}`
#[derive(Serialize)]
pub(crate) struct NoParams {}

#[derive(Serialize)]
struct AnkiRequest<'a, P> {
    action: &'a str,
    version: u32,
    params: &'a P,
}

#[derive(Debug)]
struct AnkiResponse {
    error: Value,
    result: Value,
}

impl TryFrom<Map<String, Value>> for AnkiResponse {
    type Error = AnkiError;

    fn try_from(mut envelope: Map<String, Value>) -> Result<Self> {
        if envelope.len() != 2 {
            return Err(AnkiError::UnexpectedFieldCount(envelope.len()));
        }

        let error = envelope
            .remove("error")
            .ok_or(AnkiError::MissingErrorField)?;
        let result = envelope
            .remove("result")
            .ok_or(AnkiError::MissingResultField)?;

        Ok(Self { error, result })
    }
}

impl AnkiResponse {
    fn into_result(self) -> Result<Value> {
        match self.error {
            Value::Null => Ok(self.result),
            Value::String(message) => Err(AnkiError::Remote(message)),
            other => Err(AnkiError::Remote(other.to_string())),
        }
    }
}
