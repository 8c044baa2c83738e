//! Client settings
//!
//! Values come from `CHARITY_ADMIN_*` environment variables or from the
//! builder methods:
//!
//! | Variable | Default |
//! |---|---|
//! | `CHARITY_ADMIN_SERVER_URL` | `http://localhost:8000/api/` |
//! | `CHARITY_ADMIN_SERVICE_NAME` | `default-service` |
//! | `CHARITY_ADMIN_TIMEOUT_SECS` | `10` |
//! | `CHARITY_ADMIN_FILTER_CONTRACT` | `filter-bag` |
//! | `CHARITY_ADMIN_STORAGE_URL` | server URL with `api` replaced by `storage` |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Prefix shared by every setting variable
pub const ENV_PREFIX: &str = "CHARITY_ADMIN_";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/api/";
pub const DEFAULT_SERVICE_NAME: &str = "default-service";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Invalid setting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {variable}={value:?}: {reason}")]
pub struct SettingsError {
	pub variable: String,
	pub value: String,
	pub reason: String,
}

impl SettingsError {
	fn new(key: &str, value: &str, reason: impl fmt::Display) -> Self {
		Self {
			variable: format!("{ENV_PREFIX}{key}"),
			value: value.to_string(),
			reason: reason.to_string(),
		}
	}
}

/// Which listing endpoints the backend exposes for projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndpointContract {
	/// `getProjectsByFilters` with a `{status, priority, type, duration_type}` query
	#[default]
	FilterBag,
	/// `getProjectsByType/{type}` and `filterProjectByStatus/{status}`
	PerDimension,
}

impl FromStr for EndpointContract {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"filter-bag" | "filters" => Ok(Self::FilterBag),
			"per-dimension" | "legacy" => Ok(Self::PerDimension),
			other => Err(format!("expected filter-bag or per-dimension, got {other}")),
		}
	}
}

impl fmt::Display for EndpointContract {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::FilterBag => "filter-bag",
			Self::PerDimension => "per-dimension",
		})
	}
}

/// Connection settings of [`AdminApi`](crate::AdminApi)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
	/// Base URL every path is joined to; always ends with `/`
	pub server_url: Url,
	/// Sent as `X-Service-Name`
	pub service_name: String,
	pub timeout: Duration,
	pub contract: EndpointContract,
	/// Base of project photo URLs
	pub storage_url: Url,
}

impl Default for ClientSettings {
	fn default() -> Self {
		let server_url = Url::parse(DEFAULT_SERVER_URL).expect("default server url is valid");
		Self {
			storage_url: storage_for(&server_url),
			server_url,
			service_name: DEFAULT_SERVICE_NAME.to_string(),
			timeout: DEFAULT_TIMEOUT,
			contract: EndpointContract::default(),
		}
	}
}

impl ClientSettings {
	/// Settings for a server URL, other values left at their defaults
	pub fn new(server_url: &str) -> Result<Self, SettingsError> {
		Self::default().with_server_url(server_url)
	}

	/// Reads the process environment
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads settings through `lookup`, which receives full variable names
	pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |key: &str| {
			lookup(&format!("{ENV_PREFIX}{key}")).filter(|value| !value.trim().is_empty())
		};

		let mut settings = match read("SERVER_URL") {
			Some(url) => Self::new(&url)?,
			None => Self::default(),
		};
		if let Some(name) = read("SERVICE_NAME") {
			settings.service_name = name.trim().to_string();
		}
		if let Some(secs) = read("TIMEOUT_SECS") {
			let parsed = secs
				.trim()
				.parse::<u64>()
				.map_err(|e| SettingsError::new("TIMEOUT_SECS", &secs, e))?;
			if parsed == 0 {
				return Err(SettingsError::new("TIMEOUT_SECS", &secs, "must be positive"));
			}
			settings.timeout = Duration::from_secs(parsed);
		}
		if let Some(contract) = read("FILTER_CONTRACT") {
			settings.contract = contract
				.parse()
				.map_err(|e: String| SettingsError::new("FILTER_CONTRACT", &contract, e))?;
		}
		if let Some(storage) = read("STORAGE_URL") {
			settings.storage_url = parse_base(&storage)
				.map_err(|e| SettingsError::new("STORAGE_URL", &storage, e))?;
		}
		Ok(settings)
	}

	/// Sets the server URL; the storage URL follows unless set afterwards
	pub fn with_server_url(mut self, server_url: &str) -> Result<Self, SettingsError> {
		self.server_url =
			parse_base(server_url).map_err(|e| SettingsError::new("SERVER_URL", server_url, e))?;
		self.storage_url = storage_for(&self.server_url);
		Ok(self)
	}

	pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
		self.service_name = service_name.into();
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_contract(mut self, contract: EndpointContract) -> Self {
		self.contract = contract;
		self
	}

	pub fn with_storage_url(mut self, storage_url: &str) -> Result<Self, SettingsError> {
		self.storage_url =
			parse_base(storage_url).map_err(|e| SettingsError::new("STORAGE_URL", storage_url, e))?;
		Ok(self)
	}
}

/// Parses an http(s) URL and normalizes it to end with `/`
fn parse_base(raw: &str) -> Result<Url, String> {
	let mut url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(format!("unsupported scheme {}", url.scheme()));
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	Ok(url)
}

/// `http://host/api/` becomes `http://host/storage/`
fn storage_for(server_url: &Url) -> Url {
	let mut storage = server_url.clone();
	let path = server_url.path().trim_end_matches('/');
	let prefix = path.strip_suffix("/api").unwrap_or(path);
	storage.set_path(&format!("{prefix}/storage/"));
	storage.set_query(None);
	storage
}
