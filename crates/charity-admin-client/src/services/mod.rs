//! One service per backend resource
//!
//! Services are thin request/response mappers. Each call checks for a token,
//! performs exactly one request and returns the decoded payload. Failures are
//! logged here and handed back unchanged.

mod auth;
mod beneficiaries;
mod feedback;
mod gifts;
mod monthly;
mod projects;
mod statistics;
mod volunteers;

pub use auth::AuthService;
pub use beneficiaries::BeneficiaryService;
pub use feedback::FeedbackService;
pub use gifts::GiftService;
pub use monthly::MonthlyDonationService;
pub use projects::{ProjectListing, ProjectService};
pub use statistics::StatisticsService;
pub use volunteers::VolunteerService;

use tracing::error;

use crate::error::ApiResult;

/// Logs a failed call under `action` before returning it
pub(crate) trait LogFailure {
	fn log_failure(self, action: &'static str) -> Self;
}

impl<T> LogFailure for ApiResult<T> {
	fn log_failure(self, action: &'static str) -> Self {
		if let Err(err) = &self {
			error!(action, error = %err, "request failed");
		}
		self
	}
}

/// Path segment form of a boolean filter
pub(crate) fn flag_segment(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}
