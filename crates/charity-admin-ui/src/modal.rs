//! Modal view-models

use charity_admin_types::{Decimal, Project};
use futures_signals::signal::Mutable;
use parking_lot::Mutex;

use crate::error::{AmountError, ViewError, ViewResult};

/// At most one selected entity plus an open flag
pub struct DetailModalState<T> {
	pub is_open: Mutable<bool>,
	pub selected: Mutable<Option<T>>,
}

impl<T: Clone> DetailModalState<T> {
	pub fn new() -> Self {
		Self {
			is_open: Mutable::new(false),
			selected: Mutable::new(None),
		}
	}

	pub fn open(&self, entity: T) {
		self.selected.set(Some(entity));
		self.is_open.set(true);
	}

	pub fn close(&self) {
		self.is_open.set(false);
		self.selected.set(None);
	}

	pub fn selected(&self) -> Option<T> {
		self.selected.get_cloned()
	}

	pub fn is_open(&self) -> bool {
		self.is_open.get()
	}

	/// Replaces the selected entity if the modal is still open
	pub fn refresh(&self, entity: T) {
		if self.is_open.get() {
			self.selected.set(Some(entity));
		}
	}
}

impl<T: Clone> Default for DetailModalState<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Confirmation step in front of a destructive action.
///
/// ```
/// use charity_admin_ui::ConfirmModalState;
///
/// let modal = ConfirmModalState::new();
/// modal.show("حذف", "هل أنت متأكد من حذف هذا المشروع؟", 42_u64);
/// assert_eq!(modal.confirm(), Some(42));
/// assert!(!modal.is_visible.get());
/// ```
pub struct ConfirmModalState<A> {
	/// Whether the modal is currently visible
	pub is_visible: Mutable<bool>,
	pub title: Mutable<String>,
	pub message: Mutable<String>,
	pending: Mutex<Option<A>>,
}

impl<A> ConfirmModalState<A> {
	pub fn new() -> Self {
		Self {
			is_visible: Mutable::new(false),
			title: Mutable::new(String::new()),
			message: Mutable::new(String::new()),
			pending: Mutex::new(None),
		}
	}

	/// Shows the modal holding `action` until it is confirmed or cancelled
	pub fn show(&self, title: impl Into<String>, message: impl Into<String>, action: A) {
		self.title.set(title.into());
		self.message.set(message.into());
		*self.pending.lock() = Some(action);
		self.is_visible.set(true);
	}

	/// Hides the modal and hands back the pending action
	pub fn confirm(&self) -> Option<A> {
		let action = self.pending.lock().take();
		self.is_visible.set(false);
		action
	}

	/// Hides the modal and drops the pending action
	pub fn cancel(&self) {
		self.pending.lock().take();
		self.is_visible.set(false);
	}

	pub fn is_pending(&self) -> bool {
		self.pending.lock().is_some()
	}
}

impl<A> Default for ConfirmModalState<A> {
	fn default() -> Self {
		Self::new()
	}
}

/// Preset amounts offered next to the amount field
pub const QUICK_AMOUNTS: [u32; 3] = [10, 50, 100];

/// Checks a donation against what the project still needs
pub fn validate_donation(project: &Project, amount: Decimal) -> Result<(), AmountError> {
	if amount <= Decimal::ZERO {
		return Err(AmountError::NotPositive);
	}
	match project.remaining_amount() {
		Some(remaining) if amount > remaining => Err(AmountError::ExceedsRemaining),
		_ => Ok(()),
	}
}

/// Donation dialog of one project
pub struct DonateModalState {
	pub project: Mutable<Option<Project>>,
	/// Raw text of the amount field
	pub amount_input: Mutable<String>,
	pub error: Mutable<Option<String>>,
	pub is_submitting: Mutable<bool>,
}

impl DonateModalState {
	pub fn new() -> Self {
		Self {
			project: Mutable::new(None),
			amount_input: Mutable::new(String::new()),
			error: Mutable::new(None),
			is_submitting: Mutable::new(false),
		}
	}

	pub fn open(&self, project: Project) {
		self.amount_input.set(String::new());
		self.error.set(None);
		self.project.set(Some(project));
	}

	pub fn close(&self) {
		self.project.set(None);
		self.amount_input.set(String::new());
		self.error.set(None);
	}

	pub fn is_open(&self) -> bool {
		self.project.lock_ref().is_some()
	}

	pub fn set_amount(&self, input: impl Into<String>) {
		self.amount_input.set(input.into());
	}

	/// Parses and validates the amount field. The message is also written to `error`.
	pub fn validated_amount(&self) -> ViewResult<(Project, Decimal)> {
		let project = self.project.get_cloned().ok_or(ViewError::NothingSelected)?;
		let checked = self
			.amount_input
			.lock_ref()
			.trim()
			.parse::<Decimal>()
			.map_err(|_| AmountError::NotPositive)
			.and_then(|amount| validate_donation(&project, amount).map(|()| amount));
		match checked {
			Ok(amount) => {
				self.error.set(None);
				Ok((project, amount))
			}
			Err(err) => {
				self.error.set(Some(err.to_string()));
				Err(err.into())
			}
		}
	}
}

impl Default for DonateModalState {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use charity_admin_types::{ProjectStatus, TypeRef, ProjectType};
	use rstest::rstest;

	fn project(total: i64, current: i64) -> Project {
		serde_json::from_value(serde_json::json!({
			"id": 1,
			"type": TypeRef::from(ProjectType::Health),
			"name": "p",
			"description": "",
			"total_amount": total,
			"current_amount": current,
			"status": ProjectStatus::Ongoing,
			"duration_type": "مؤقت"
		}))
		.unwrap()
	}

	#[rstest]
	#[case("100", Err(AmountError::ExceedsRemaining))]
	#[case("50", Ok(()))]
	#[case("0", Err(AmountError::NotPositive))]
	#[case("-5", Err(AmountError::NotPositive))]
	#[case("abc", Err(AmountError::NotPositive))]
	#[case("", Err(AmountError::NotPositive))]
	fn test_donate_validation(#[case] input: &str, #[case] expected: Result<(), AmountError>) {
		let modal = DonateModalState::new();
		modal.open(project(500, 450));
		modal.set_amount(input);

		let result = modal.validated_amount().map(|_| ());
		match (result, expected) {
			(Ok(()), Ok(())) => assert_eq!(modal.error.get_cloned(), None),
			(Err(ViewError::InvalidAmount(actual)), Err(expected)) => {
				assert_eq!(actual, expected);
				assert_eq!(modal.error.get_cloned(), Some(expected.to_string()));
			}
			(other, expected) => panic!("got {other:?}, expected {expected:?}"),
		}
	}

	#[rstest]
	fn test_donate_without_project() {
		let modal = DonateModalState::new();
		modal.set_amount("10");
		assert!(matches!(modal.validated_amount(), Err(ViewError::NothingSelected)));
	}

	#[rstest]
	fn test_detail_modal_open_close() {
		let modal = DetailModalState::new();
		modal.open(project(10, 0));
		assert!(modal.is_open());
		assert_eq!(modal.selected().map(|p| p.id), Some(1));

		modal.close();
		assert!(!modal.is_open());
		assert!(modal.selected().is_none());

		modal.refresh(project(10, 5));
		assert!(modal.selected().is_none());
	}

	#[rstest]
	fn test_confirm_cancel_drops_action() {
		let modal = ConfirmModalState::new();
		modal.show("t", "m", "ban");
		assert!(modal.is_pending());
		modal.cancel();
		assert!(!modal.is_visible.get());
		assert_eq!(modal.confirm(), None);
	}
}
