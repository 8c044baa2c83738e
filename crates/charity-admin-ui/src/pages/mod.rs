//! One view-model per dashboard page

mod beneficiaries;
mod beneficiary_requests;
mod dashboard;
mod feedback;
mod gifts;
mod login;
mod projects;
mod volunteer_requests;
mod volunteers;

pub use beneficiaries::BeneficiariesPage;
pub use beneficiary_requests::BeneficiaryRequestsPage;
pub use dashboard::DashboardState;
pub use feedback::FeedbackPage;
pub use gifts::GiftDonationsPage;
pub use login::LoginState;
pub use projects::{ProjectCommand, ProjectsPage};
pub use volunteer_requests::VolunteerRequestsPage;
pub use volunteers::VolunteersPage;

use charity_admin_types::{ReviewStatus, Choice};

/// Review decisions waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCommand {
	Accept(u64),
	Reject(u64),
}

impl ReviewCommand {
	pub fn id(self) -> u64 {
		match self {
			Self::Accept(id) | Self::Reject(id) => id,
		}
	}

	/// Status the entry takes once the decision is applied
	pub fn outcome(self) -> ReviewStatus {
		match self {
			Self::Accept(_) => ReviewStatus::Accepted,
			Self::Reject(_) => ReviewStatus::Rejected,
		}
	}
}

/// Statuses to fetch for a review tab; `All` expands to every known status
pub(crate) fn statuses_to_fetch(choice: &Choice<ReviewStatus>) -> Vec<ReviewStatus> {
	match choice {
		Choice::All => ReviewStatus::known(),
		Choice::Only(status) => vec![status.clone()],
	}
}
