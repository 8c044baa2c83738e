//! Login form

use std::sync::Arc;

use futures_signals::signal::Mutable;

use charity_admin_client::AdminApi;

use crate::error::{ViewError, ViewResult};
use crate::messages::{self, Action};

pub struct LoginState {
	api: AdminApi,
	pub email: Mutable<String>,
	pub password: Mutable<String>,
	pub is_submitting: Mutable<bool>,
	pub error: Mutable<Option<String>>,
}

impl LoginState {
	pub fn new(api: AdminApi) -> Arc<Self> {
		Arc::new(Self {
			api,
			email: Mutable::new(String::new()),
			password: Mutable::new(String::new()),
			is_submitting: Mutable::new(false),
			error: Mutable::new(None),
		})
	}

	/// Submits the form; the password field is cleared on success
	pub async fn submit(&self) -> ViewResult<()> {
		if self.is_submitting.replace(true) {
			return Err(ViewError::ActionInFlight);
		}
		self.error.set(None);
		let email = self.email.get_cloned();
		let password = self.password.get_cloned();
		let result = self.api.auth().login(&email, &password).await;
		self.is_submitting.set(false);

		match result {
			Ok(()) => {
				self.password.set(String::new());
				Ok(())
			}
			Err(err) => {
				let err = ViewError::from(err);
				self.error.set(Some(messages::failure(Action::Login, &err)));
				Err(err)
			}
		}
	}

	pub fn logout(&self) -> ViewResult<()> {
		self.api.auth().logout()?;
		Ok(())
	}
}
