/// Errors produced while talking to AnkiConnect.
#[derive(Debug, thiserror::Error)]
pub enum AnkiError {
    #[error("action name must not be empty")]
    EmptyAction,

    #[error("response has an unexpected number of fields: {0}")]
    UnexpectedFieldCount(usize),

    #[error("response is missing required error field")]
    MissingErrorField,

    #[error("response is missing required result field")]
    MissingResultField,

    /// The `error` field of the response was not null.
    #[error("AnkiConnect error: {0}")]
    Remote(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse AnkiConnect response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected result for {action}: {source}")]
    UnexpectedResult {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AnkiError {
    /// True for the three envelope shape violations.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            AnkiError::UnexpectedFieldCount(_)
                | AnkiError::MissingErrorField
                | AnkiError::MissingResultField
        )
    }
}

pub type Result<T> = std::result::Result<T, AnkiError>;
