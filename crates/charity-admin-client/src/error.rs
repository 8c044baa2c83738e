//! Error types for the admin client

use charity_admin_types::ProjectFormError;
use thiserror::Error;

/// Failure of a credential store
#[derive(Debug, Error)]
pub enum CredentialError {
	/// The token file could not be read or written
	#[error("token file {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
}

/// Failure of a backend call
#[derive(Debug, Error)]
pub enum ApiError {
	/// No token is stored; raised before any request is sent
	#[error("not logged in")]
	Unauthenticated,

	/// The backend answered 401; stored credentials have been cleared
	#[error("session expired, please log in again")]
	SessionExpired,

	/// Any other non-2xx answer
	#[error("server returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
	Server { status: u16, message: Option<String> },

	#[error("request timed out")]
	Timeout,

	#[error("network error: {0}")]
	Network(String),

	/// The response body did not have the expected shape
	#[error("failed to decode response: {0}")]
	Decode(String),

	#[error("invalid url: {0}")]
	InvalidUrl(String),

	/// The active endpoint contract cannot express the requested filters
	#[error("unsupported query: {0}")]
	UnsupportedQuery(String),

	/// A login answered 2xx without a token
	#[error("login response did not contain a token")]
	MissingToken,

	/// An add-project form failed validation; nothing was sent
	#[error(transparent)]
	Form(#[from] ProjectFormError),

	#[error("failed to build HTTP client: {0}")]
	Client(String),

	#[error(transparent)]
	Credentials(#[from] CredentialError),
}

impl ApiError {
	/// Message supplied by the backend, if any
	pub fn backend_message(&self) -> Option<&str> {
		match self {
			Self::Server { message, .. } => message.as_deref(),
			_ => None,
		}
	}

	/// Whether the caller should send the user back to the login screen
	pub fn requires_login(&self) -> bool {
		matches!(self, Self::Unauthenticated | Self::SessionExpired)
	}

	pub(crate) fn from_transport(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			Self::Timeout
		} else if err.is_decode() {
			Self::Decode(err.to_string())
		} else {
			Self::Network(err.to_string())
		}
	}
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
