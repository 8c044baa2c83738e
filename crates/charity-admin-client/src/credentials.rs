//! Bearer token storage
//!
//! The token is written once at login and cleared at logout or when the
//! backend answers 401. The HTTP adapter reads it through [`CredentialStore`]
//! on every authenticated request.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};

use crate::error::CredentialError;

/// Opaque session token
pub struct BearerToken(SecretString);

impl BearerToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(SecretString::from(token.into()))
	}

	/// The raw token, for the `Authorization` header only
	pub fn expose(&self) -> &str {
		self.0.expose_secret()
	}
}

impl Clone for BearerToken {
	fn clone(&self) -> Self {
		Self::new(self.expose())
	}
}

impl PartialEq for BearerToken {
	fn eq(&self, other: &Self) -> bool {
		self.expose() == other.expose()
	}
}

impl fmt::Debug for BearerToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("BearerToken(***)")
	}
}

/// Where the session token lives between requests
pub trait CredentialStore: Send + Sync {
	fn token(&self) -> Option<BearerToken>;

	fn store(&self, token: BearerToken) -> Result<(), CredentialError>;

	/// Removes the token; clearing an empty store is not an error
	fn clear(&self) -> Result<(), CredentialError>;
}

/// Process-wide token cell
#[derive(Default)]
pub struct MemoryCredentialStore {
	token: RwLock<Option<BearerToken>>,
}

impl MemoryCredentialStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// A store that starts logged in
	pub fn with_token(token: impl Into<String>) -> Self {
		Self {
			token: RwLock::new(Some(BearerToken::new(token))),
		}
	}
}

impl CredentialStore for MemoryCredentialStore {
	fn token(&self) -> Option<BearerToken> {
		self.token.read().clone()
	}

	fn store(&self, token: BearerToken) -> Result<(), CredentialError> {
		*self.token.write() = Some(token);
		Ok(())
	}

	fn clear(&self) -> Result<(), CredentialError> {
		self.token.write().take();
		Ok(())
	}
}

/// Token persisted in a file so a login outlives the process
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
	path: PathBuf,
}

impl FileCredentialStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_error(&self, source: std::io::Error) -> CredentialError {
		CredentialError::Io {
			path: self.path.display().to_string(),
			source,
		}
	}
}

impl CredentialStore for FileCredentialStore {
	/// Unreadable or empty files count as logged out
	fn token(&self) -> Option<BearerToken> {
		let raw = fs::read_to_string(&self.path).ok()?;
		let token = raw.trim();
		(!token.is_empty()).then(|| BearerToken::new(token))
	}

	fn store(&self, token: BearerToken) -> Result<(), CredentialError> {
		if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
		}
		fs::write(&self.path, token.expose()).map_err(|e| self.io_error(e))
	}

	fn clear(&self) -> Result<(), CredentialError> {
		match fs::remove_file(&self.path) {
			Ok(()) => Ok(()),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
			Err(e) => Err(self.io_error(e)),
		}
	}
}
