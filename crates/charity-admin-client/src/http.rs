//! HTTP adapter
//!
//! Single attempt per call, no retry. Failures carry the backend's message
//! when it sent one.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::credentials::CredentialStore;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionListener;
use crate::settings::ClientSettings;

/// Header carrying the configured service name
pub const SERVICE_NAME_HEADER: &str = "X-Service-Name";

/// Content type of JSON request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// A path relative to the server URL, with optional path segments and query.
///
/// Segments and query values are percent-encoded when the URL is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	path: &'static str,
	segments: Vec<String>,
	query: Vec<(&'static str, String)>,
}

impl Route {
	pub fn new(path: &'static str) -> Self {
		Self {
			path,
			segments: Vec::new(),
			query: Vec::new(),
		}
	}

	/// Appends a path segment; empty segments are skipped
	pub fn segment(mut self, segment: impl Into<String>) -> Self {
		let segment = segment.into();
		if !segment.is_empty() {
			self.segments.push(segment);
		}
		self
	}

	pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
		self.query.push((key, value.to_string()));
		self
	}

	pub fn queries(mut self, pairs: impl IntoIterator<Item = (&'static str, String)>) -> Self {
		self.query.extend(pairs);
		self
	}

	/// Resolves the route against `base`
	pub fn url(&self, base: &Url) -> ApiResult<Url> {
		let mut url = base.clone();
		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|_| ApiError::InvalidUrl(base.to_string()))?;
			segments
				.pop_if_empty()
				.extend(self.path.split('/').filter(|part| !part.is_empty()))
				.extend(&self.segments);
		}
		if !self.query.is_empty() {
			url.query_pairs_mut()
				.extend_pairs(self.query.iter().map(|(key, value)| (*key, value.as_str())));
		}
		Ok(url)
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path)?;
		for segment in &self.segments {
			write!(f, "/{segment}")?;
		}
		for (index, (key, value)) in self.query.iter().enumerate() {
			let separator = if index == 0 { '?' } else { '&' };
			write!(f, "{separator}{key}={value}")?;
		}
		Ok(())
	}
}

/// Request payload
pub enum Body {
	Empty,
	/// Pre-encoded JSON, sent as [`JSON_CONTENT_TYPE`]
	Json(Vec<u8>),
	/// Multipart form; reqwest picks the content type and boundary
	Multipart(reqwest::multipart::Form),
}

impl Body {
	pub fn json<T: Serialize + ?Sized>(value: &T) -> ApiResult<Self> {
		serde_json::to_vec(value)
			.map(Self::Json)
			.map_err(|e| ApiError::Decode(format!("failed to encode request body: {e}")))
	}
}

impl fmt::Debug for Body {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => f.write_str("Empty"),
			Self::Json(bytes) => write!(f, "Json({} bytes)", bytes.len()),
			Self::Multipart(_) => f.write_str("Multipart"),
		}
	}
}

/// Shared HTTP client of every service
pub struct HttpClient {
	client: reqwest::Client,
	settings: ClientSettings,
	credentials: Arc<dyn CredentialStore>,
	listener: RwLock<Option<Arc<dyn SessionListener>>>,
}

impl HttpClient {
	pub fn new(settings: ClientSettings, credentials: Arc<dyn CredentialStore>) -> ApiResult<Self> {
		let client = reqwest::Client::builder()
			.timeout(settings.timeout)
			.build()
			.map_err(|e| ApiError::Client(e.to_string()))?;

		Ok(Self {
			client,
			settings,
			credentials,
			listener: RwLock::new(None),
		})
	}

	pub fn settings(&self) -> &ClientSettings {
		&self.settings
	}

	pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
		&self.credentials
	}

	/// Installs the listener told about expired sessions, replacing any previous one
	pub fn set_session_listener(&self, listener: Arc<dyn SessionListener>) {
		*self.listener.write() = Some(listener);
	}

	/// Authenticated GET decoding a JSON body
	pub async fn get<T: DeserializeOwned>(&self, route: &Route) -> ApiResult<T> {
		self.fetch(Method::GET, route, Body::Empty).await
	}

	/// Authenticated request decoding a JSON body
	pub async fn fetch<T: DeserializeOwned>(&self, method: Method, route: &Route, body: Body) -> ApiResult<T> {
		let response = self.send(method, route, body, true).await?;
		decode(response).await
	}

	/// Authenticated request whose response body is ignored
	pub async fn execute(&self, method: Method, route: &Route, body: Body) -> ApiResult<()> {
		self.send(method, route, body, true).await.map(drop)
	}

	/// Request without a token. A 401 here is a plain server error.
	pub async fn fetch_public<T: DeserializeOwned>(
		&self,
		method: Method,
		route: &Route,
		body: Body,
	) -> ApiResult<T> {
		let response = self.send(method, route, body, false).await?;
		decode(response).await
	}

	async fn send(
		&self,
		method: Method,
		route: &Route,
		body: Body,
		authenticated: bool,
	) -> ApiResult<Response> {
		let token = if authenticated {
			Some(self.credentials.token().ok_or(ApiError::Unauthenticated)?)
		} else {
			None
		};
		let url = route.url(&self.settings.server_url)?;
		debug!(method = %method, path = %route, body = ?body, "sending request");

		let mut request = self
			.client
			.request(method, url)
			.header(ACCEPT, "application/json")
			.header(SERVICE_NAME_HEADER, &self.settings.service_name);
		if let Some(token) = &token {
			request = request.bearer_auth(token.expose());
		}
		request = match body {
			Body::Empty => request,
			Body::Json(bytes) => request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(bytes),
			Body::Multipart(form) => request.multipart(form),
		};

		let response = request.send().await.map_err(ApiError::from_transport)?;
		let status = response.status();

		if status == StatusCode::UNAUTHORIZED && authenticated {
			warn!(path = %route, "session rejected by server");
			self.expire_session();
			return Err(ApiError::SessionExpired);
		}
		if !status.is_success() {
			let text = response.text().await.unwrap_or_default();
			return Err(ApiError::Server {
				status: status.as_u16(),
				message: backend_message(&text),
			});
		}
		Ok(response)
	}

	fn expire_session(&self) {
		if let Err(err) = self.credentials.clear() {
			warn!(error = %err, "failed to clear credentials");
		}
		let listener = self.listener.read().clone();
		if let Some(listener) = listener {
			listener.session_expired();
		}
	}
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
	let text = response.text().await.map_err(ApiError::from_transport)?;
	serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extracts a human message from an error body: `message`, `error`, or the
/// first string under `errors`.
fn backend_message(text: &str) -> Option<String> {
	let value: Value = serde_json::from_str(text).ok()?;
	let direct = ["message", "error"].iter().find_map(|key| {
		value
			.get(key)
			.and_then(Value::as_str)
			.map(str::trim)
			.filter(|message| !message.is_empty())
			.map(str::to_string)
	});
	direct.or_else(|| value.get("errors").and_then(first_text))
}

fn first_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
		Value::Array(items) => items.iter().find_map(first_text),
		Value::Object(map) => map.values().find_map(first_text),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn base() -> Url {
		Url::parse("http://localhost:8000/api/").unwrap()
	}

	#[rstest]
	#[case(Route::new("statistics"), "http://localhost:8000/api/statistics")]
	#[case(
		Route::new("admin/deleteProject").query("id", 5),
		"http://localhost:8000/api/admin/deleteProject?id=5"
	)]
	#[case(
		Route::new("filterVolunteersByBan").segment("false"),
		"http://localhost:8000/api/filterVolunteersByBan/false"
	)]
	#[case(
		Route::new("getFilteredBeneficiaryRequests").segment("").segment("x"),
		"http://localhost:8000/api/getFilteredBeneficiaryRequests/x"
	)]
	fn test_route_url(#[case] route: Route, #[case] expected: &str) {
		assert_eq!(route.url(&base()).unwrap().as_str(), expected);
	}

	#[rstest]
	fn test_route_encodes_arabic_segment() {
		let url = Route::new("getProjectsByType").segment("عن بعد").url(&base()).unwrap();
		assert_eq!(
			url.path(),
			"/api/getProjectsByType/%D8%B9%D9%86%20%D8%A8%D8%B9%D8%AF"
		);
	}

	#[rstest]
	fn test_route_display_is_readable() {
		let route = Route::new("admin/donateToProject").query("id", 3).query("amount", 50);
		assert_eq!(route.to_string(), "admin/donateToProject?id=3&amount=50");
	}

	#[rstest]
	#[case(r#"{"message": "المشروع غير موجود"}"#, Some("المشروع غير موجود"))]
	#[case(r#"{"errors": {"amount": ["المبلغ مطلوب"]}}"#, Some("المبلغ مطلوب"))]
	#[case(r#"{"error": "forbidden"}"#, Some("forbidden"))]
	#[case(r#"{"message": ""}"#, None)]
	#[case("<html>502</html>", None)]
	fn test_backend_message(#[case] body: &str, #[case] expected: Option<&str>) {
		assert_eq!(backend_message(body).as_deref(), expected);
	}
}
