//! Entry point bundling the HTTP adapter and the resource services

use std::sync::Arc;

use crate::credentials::{CredentialStore, MemoryCredentialStore};
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::services::{
	AuthService, BeneficiaryService, FeedbackService, GiftService, MonthlyDonationService,
	ProjectService, StatisticsService, VolunteerService,
};
use crate::session::SessionListener;
use crate::settings::ClientSettings;

/// Handle to the admin backend. Cloning shares the connection pool and the
/// credential store.
#[derive(Clone)]
pub struct AdminApi {
	http: Arc<HttpClient>,
}

impl AdminApi {
	/// Client with an in-memory credential store
	pub fn new(settings: ClientSettings) -> ApiResult<Self> {
		Self::with_credentials(settings, Arc::new(MemoryCredentialStore::new()))
	}

	pub fn with_credentials(
		settings: ClientSettings,
		credentials: Arc<dyn CredentialStore>,
	) -> ApiResult<Self> {
		Ok(Self {
			http: Arc::new(HttpClient::new(settings, credentials)?),
		})
	}

	pub fn settings(&self) -> &ClientSettings {
		self.http.settings()
	}

	pub fn http(&self) -> &HttpClient {
		&self.http
	}

	/// See [`HttpClient::set_session_listener`]
	pub fn set_session_listener(&self, listener: Arc<dyn SessionListener>) {
		self.http.set_session_listener(listener);
	}

	pub fn is_authenticated(&self) -> bool {
		self.http.credentials().token().is_some()
	}

	pub fn auth(&self) -> AuthService<'_> {
		AuthService::new(&self.http)
	}

	pub fn projects(&self) -> ProjectService<'_> {
		ProjectService::new(&self.http)
	}

	pub fn volunteers(&self) -> VolunteerService<'_> {
		VolunteerService::new(&self.http)
	}

	pub fn beneficiaries(&self) -> BeneficiaryService<'_> {
		BeneficiaryService::new(&self.http)
	}

	pub fn gifts(&self) -> GiftService<'_> {
		GiftService::new(&self.http)
	}

	pub fn feedback(&self) -> FeedbackService<'_> {
		FeedbackService::new(&self.http)
	}

	pub fn statistics(&self) -> StatisticsService<'_> {
		StatisticsService::new(&self.http)
	}

	pub fn monthly(&self) -> MonthlyDonationService<'_> {
		MonthlyDonationService::new(&self.http)
	}
}
