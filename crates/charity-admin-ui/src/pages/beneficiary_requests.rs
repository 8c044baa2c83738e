//! Beneficiary requests page

use std::sync::Arc;

use async_trait::async_trait;
use futures_signals::signal::Mutable;

use charity_admin_client::{AdminApi, ApiResult};
use charity_admin_types::{
	BeneficiaryRequest, BeneficiaryRequestFilters, Dimension, Dimensions, Reviewable,
};

use super::{ReviewCommand, statuses_to_fetch};
use crate::error::{ViewError, ViewResult};
use crate::list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
use crate::messages::{self, Action};
use crate::modal::{ConfirmModalState, DetailModalState};

struct BeneficiaryRequestSource {
	api: AdminApi,
}

#[async_trait]
impl ListSource<BeneficiaryRequest, BeneficiaryRequestFilters> for BeneficiaryRequestSource {
	async fn fetch(
		&self,
		filters: &BeneficiaryRequestFilters,
	) -> ApiResult<Fetched<BeneficiaryRequest>> {
		let beneficiaries = self.api.beneficiaries();
		let mut requests = Vec::new();
		for status in statuses_to_fetch(&filters.status) {
			let narrowed = filters.clone().with_status(status);
			requests.extend(beneficiaries.requests(&narrowed).await?);
		}
		Ok(Fetched::new(
			requests,
			Dimensions::from([Dimension::Type, Dimension::Status]),
		))
	}
}

pub struct BeneficiaryRequestsPage {
	api: AdminApi,
	list: Arc<ListViewState<BeneficiaryRequest, BeneficiaryRequestFilters>>,
	/// Full request as returned by the show endpoint
	pub detail: DetailModalState<BeneficiaryRequest>,
	pub confirm: ConfirmModalState<ReviewCommand>,
	pub notice: Mutable<Option<String>>,
}

impl BeneficiaryRequestsPage {
	pub fn new(api: AdminApi) -> Arc<Self> {
		let source: Arc<dyn ListSource<BeneficiaryRequest, BeneficiaryRequestFilters>> =
			Arc::new(BeneficiaryRequestSource { api: api.clone() });
		Arc::new(Self {
			list: ListViewState::new(
				source,
				BeneficiaryRequestFilters::default(),
				Action::LoadBeneficiaryRequests,
			),
			api,
			detail: DetailModalState::new(),
			confirm: ConfirmModalState::new(),
			notice: Mutable::new(None),
		})
	}

	pub fn list(&self) -> &ListViewState<BeneficiaryRequest, BeneficiaryRequestFilters> {
		&self.list
	}

	pub async fn load(&self) -> ViewResult<()> {
		self.list.load().await
	}

	pub async fn set_filters(&self, filters: BeneficiaryRequestFilters) -> ViewResult<()> {
		self.list.set_filters(filters).await
	}

	/// Fetches the full request and opens it in the detail modal
	pub async fn show_request(&self, id: u64) -> ViewResult<()> {
		match self.api.beneficiaries().show_request(id).await {
			Ok(request) => {
				self.detail.open(request);
				Ok(())
			}
			Err(err) => {
				let err = ViewError::from(err);
				self.list
					.set_error(messages::failure(Action::ShowRequest, &err));
				Err(err)
			}
		}
	}

	pub fn request_review(&self, command: ReviewCommand) -> ViewResult<()> {
		let request = self.list.get(&command.id()).ok_or(ViewError::UnknownItem)?;
		if !request.review_status().is_open() {
			return Err(ViewError::ActionUnavailable);
		}
		let (title, message) = match command {
			ReviewCommand::Accept(_) => ("قبول الطلب", messages::CONFIRM_ACCEPT_REQUEST),
			ReviewCommand::Reject(_) => ("رفض الطلب", messages::CONFIRM_REJECT_REQUEST),
		};
		self.confirm.show(title, message, command);
		Ok(())
	}

	pub async fn confirm(&self) -> ViewResult<()> {
		let command = self.confirm.confirm().ok_or(ViewError::NothingSelected)?;
		let id = command.id();
		let outcome = command.outcome();
		let beneficiaries = self.api.beneficiaries();
		let patch = Patch::update(move |request: &mut BeneficiaryRequest| {
			request.set_review_status(outcome)
		});

		let notice = match command {
			ReviewCommand::Accept(_) => {
				self.list
					.mutate(
						id,
						patch,
						Action::AcceptRequest,
						AfterSuccess::Keep,
						beneficiaries.accept_request(id),
					)
					.await?;
				messages::REQUEST_ACCEPTED
			}
			ReviewCommand::Reject(_) => {
				self.list
					.mutate(
						id,
						patch,
						Action::RejectRequest,
						AfterSuccess::Keep,
						beneficiaries.reject_request(id),
					)
					.await?;
				messages::REQUEST_REJECTED
			}
		};
		self.notice.set(Some(notice.to_string()));
		self.detail.close();
		Ok(())
	}
}
