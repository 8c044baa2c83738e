//! Session expiry notification

/// Notified when the backend rejects the stored token.
///
/// A UI shell implements this to route the user to the login screen.
pub trait SessionListener: Send + Sync {
	fn session_expired(&self);
}

impl<F> SessionListener for F
where
	F: Fn() + Send + Sync,
{
	fn session_expired(&self) {
		self()
	}
}
