//! User-facing messages
//!
//! A failure shows the backend's message when it sent one, otherwise the
//! generic message of the action that failed.

use charity_admin_client::ApiError;

use crate::error::ViewError;

/// Every user-triggered operation that can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	LoadProjects,
	DeleteProject,
	CompleteProject,
	Donate,
	ChangeProjectStatus,
	AddProject,
	LoadVolunteers,
	BanVolunteer,
	UnblockVolunteer,
	LoadBeneficiaries,
	BanBeneficiary,
	UnblockBeneficiary,
	LoadVolunteerRequests,
	LoadBeneficiaryRequests,
	ShowRequest,
	AcceptRequest,
	RejectRequest,
	LoadGifts,
	MarkDelivered,
	LoadFeedback,
	AcceptFeedback,
	RejectFeedback,
	LoadStatistics,
	MonthlyDonations,
	Login,
}

impl Action {
	/// Generic failure message
	pub fn failure_message(self) -> &'static str {
		match self {
			Self::LoadProjects => "فشل تحميل المشاريع",
			Self::DeleteProject => "فشل حذف المشروع",
			Self::CompleteProject => "فشل في إكمال المشروع",
			Self::Donate => "فشل في التبرع للمشروع",
			Self::ChangeProjectStatus => "فشل تغيير حالة المشروع",
			Self::AddProject => "حدث خطأ أثناء إضافة المشروع",
			Self::LoadVolunteers => "فشل تحميل المتطوعين",
			Self::BanVolunteer => "فشل في حظر المتطوع",
			Self::UnblockVolunteer => "فشل في فك حظر المتطوع",
			Self::LoadBeneficiaries => "فشل تحميل المستفيدين",
			Self::BanBeneficiary => "فشل في حظر المستفيد",
			Self::UnblockBeneficiary => "فشل في فك حظر المستفيد",
			Self::LoadVolunteerRequests => "فشل تحميل طلبات التطوع",
			Self::LoadBeneficiaryRequests => "فشل تحميل طلبات التبرع",
			Self::ShowRequest => "فشل تحميل تفاصيل الطلب",
			Self::AcceptRequest => "فشل قبول الطلب",
			Self::RejectRequest => "فشل رفض الطلب",
			Self::LoadGifts => "فشل تحميل الهدايا",
			Self::MarkDelivered => "فشل تسجيل التسليم",
			Self::LoadFeedback => "فشل تحميل الآراء",
			Self::AcceptFeedback => "فشل قبول الرأي",
			Self::RejectFeedback => "فشل رفض الرأي",
			Self::LoadStatistics => "حدث خطأ أثناء تحميل الإحصائيات",
			Self::MonthlyDonations => "فشل تنفيذ التبرعات الشهرية",
			Self::Login => "فشل تسجيل الدخول",
		}
	}
}

pub const CONFIRM_DELETE_PROJECT: &str = "هل أنت متأكد من حذف هذا المشروع؟";
pub const CONFIRM_COMPLETE_PROJECT: &str = "هل أنت متأكد من أن المشروع قد اكتمل؟";
pub const CONFIRM_BAN_VOLUNTEER: &str = "هل أنت متأكد من حظر هذا المتطوع؟";
pub const CONFIRM_BAN_BENEFICIARY: &str = "هل أنت متأكد من حظر هذا المستفيد؟";
pub const CONFIRM_ACCEPT_REQUEST: &str = "هل أنت متأكد من قبول هذا الطلب؟";
pub const CONFIRM_REJECT_REQUEST: &str = "هل أنت متأكد من رفض هذا الطلب؟";

pub const REQUEST_ACCEPTED: &str = "تم قبول الطلب بنجاح";
pub const REQUEST_REJECTED: &str = "تم رفض الطلب بنجاح";
pub const PROJECT_ADDED: &str = "تم إضافة المشروع بنجاح!";

/// Success notice after a donation
pub fn donation_succeeded(amount: impl std::fmt::Display) -> String {
	format!("تم التبرع بمبلغ {amount}$ للمشروع بنجاح!")
}

/// Text for the error slot after `action` failed with `err`
pub fn failure(action: Action, err: &ViewError) -> String {
	match err {
		ViewError::Api(ApiError::Server {
			message: Some(message),
			..
		}) => message.clone(),
		ViewError::Api(_) => action.failure_message().to_string(),
		ViewError::InvalidAmount(amount) => amount.to_string(),
		ViewError::Form(form) => form.to_string(),
		_ => action.failure_message().to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::AmountError;
	use rstest::rstest;

	#[rstest]
	fn test_backend_message_wins() {
		let err = ViewError::Api(ApiError::Server {
			status: 400,
			message: Some("المشروع مكتمل".into()),
		});
		assert_eq!(failure(Action::Donate, &err), "المشروع مكتمل");
	}

	#[rstest]
	#[case(ViewError::Api(ApiError::Timeout), "فشل حذف المشروع")]
	#[case(ViewError::Api(ApiError::Server { status: 500, message: None }), "فشل حذف المشروع")]
	#[case(ViewError::ActionInFlight, "فشل حذف المشروع")]
	#[case(ViewError::InvalidAmount(AmountError::NotPositive), "يرجى إدخال مبلغ صحيح")]
	fn test_generic_messages(#[case] err: ViewError, #[case] expected: &str) {
		assert_eq!(failure(Action::DeleteProject, &err), expected);
	}

	#[rstest]
	fn test_donation_notice() {
		assert_eq!(donation_succeeded(50), "تم التبرع بمبلغ 50$ للمشروع بنجاح!");
	}
}
