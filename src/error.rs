use thiserror::Error;

/// Failures talking to the backend.
#[derive(Error, Debug)]
pub enum ApiError {
	#[error("HTTP request error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status}")]
	Status { status: u16 },

	#[error("JSON error: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("Unexpected response shape: {0}")]
	UnexpectedShape(&'static str),

	#[error("Invalid URL: {0}")]
	InvalidUrl(String),

	#[error("Invalid member id: {0:?}")]
	InvalidId(String),
}

impl ApiError {
	pub fn is_not_found(&self) -> bool {
		matches!(self, ApiError::Status { status: 404 })
	}
}
