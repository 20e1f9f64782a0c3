/// Errors from the chat-completions layer.
///
/// [`LlmProvider`](crate::LlmProvider) turns every one of these into
/// fallback data; they only reach logs.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("LLM API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The completion carried no message content.
    #[error("LLM returned an empty completion")]
    EmptyResponse,

    /// The message content was not the JSON we asked for.
    #[error("LLM returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON parsed but does not have the expected shape.
    #[error("LLM response has unexpected shape: {0}")]
    UnexpectedShape(String),

    /// The API key cannot be used as an HTTP header value.
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,
}
