//! Errors surfaced by the view-models

use charity_admin_client::ApiError;
use charity_admin_types::ProjectFormError;
use thiserror::Error;

/// Why a donation amount was refused before sending anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
	/// Not a number, zero or negative
	#[error("يرجى إدخال مبلغ صحيح")]
	NotPositive,
	#[error("لا يمكن التبرع بمبلغ أكبر من المطلوب")]
	ExceedsRemaining,
}

#[derive(Debug, Error)]
pub enum ViewError {
	#[error(transparent)]
	Api(#[from] ApiError),

	#[error(transparent)]
	InvalidAmount(#[from] AmountError),

	#[error(transparent)]
	Form(#[from] ProjectFormError),

	/// The same item already has a request outstanding
	#[error("an action is already running for this item")]
	ActionInFlight,

	/// The modal has no entity, or the confirmation has no pending action
	#[error("nothing selected")]
	NothingSelected,

	/// The key is not part of the loaded collection
	#[error("item is not in the list")]
	UnknownItem,

	#[error("this project does not accept donations")]
	NotDonatable,

	/// The entity's state does not offer this action
	#[error("action not available for this item")]
	ActionUnavailable,
}

impl ViewError {
	pub fn api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(err) => Some(err),
			_ => None,
		}
	}
}

pub type ViewResult<T> = Result<T, ViewError>;
