//! Login redirect on session expiry

use std::sync::Arc;

use charity_admin_client::{AdminApi, SessionListener};
use futures_signals::signal::{Mutable, Signal};
use tracing::info;

/// Raised when the backend rejects the session; the shell shows the login route
#[derive(Default)]
pub struct SessionRedirect {
	pub login_required: Mutable<bool>,
}

impl SessionRedirect {
	/// Creates the redirect flag and registers it with `api`
	pub fn install(api: &AdminApi) -> Arc<Self> {
		let redirect = Arc::new(Self::default());
		api.set_session_listener(redirect.clone());
		redirect
	}

	pub fn login_required(&self) -> bool {
		self.login_required.get()
	}

	pub fn login_required_signal(&self) -> impl Signal<Item = bool> + use<> {
		self.login_required.signal()
	}

	/// Called once the login route is shown
	pub fn acknowledge(&self) {
		self.login_required.set(false);
	}
}

impl SessionListener for SessionRedirect {
	fn session_expired(&self) {
		info!("session expired, redirecting to login");
		self.login_required.set(true);
	}
}
