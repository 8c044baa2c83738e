use reqwest::Method;
use tracing::info;

use charity_admin_types::{Credentials, LoginResponse};

use super::LogFailure;
use crate::credentials::BearerToken;
use crate::error::{ApiError, ApiResult};
use crate::http::{Body, HttpClient, Route};

/// Login and logout
pub struct AuthService<'a> {
	http: &'a HttpClient,
}

impl<'a> AuthService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	/// Exchanges credentials for a token and stores it
	pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
		let credentials = Credentials::new(email.trim(), password);
		let response: LoginResponse = self
			.http
			.fetch_public(Method::POST, &Route::new("admin/login"), Body::json(&credentials)?)
			.await
			.log_failure("auth.login")?;

		let token = response
			.token
			.filter(|token| !token.trim().is_empty())
			.ok_or(ApiError::MissingToken)
			.log_failure("auth.login")?;
		self.http.credentials().store(BearerToken::new(token))?;
		info!(email = %credentials.email, "logged in");
		Ok(())
	}

	/// Forgets the stored token; the backend is not contacted
	pub fn logout(&self) -> ApiResult<()> {
		self.http.credentials().clear()?;
		info!("logged out");
		Ok(())
	}

	pub fn is_authenticated(&self) -> bool {
		self.http.credentials().token().is_some()
	}
}
