use thiserror::Error;

/// Reasons generated content could not be used.
///
/// Never reaches the page: every variant is logged and replaced by the
/// fallback copy.
#[derive(Debug, Error)]
pub enum ContentError {
	#[error("no API key configured")]
	MissingCredential,

	#[error("request failed: {0}")]
	Transport(String),

	#[error("service responded with HTTP {0}")]
	Status(u16),

	#[error("response contained no generated text")]
	EmptyResponse,

	#[error("malformed response: {0}")]
	Decode(#[from] serde_json::Error),
}
