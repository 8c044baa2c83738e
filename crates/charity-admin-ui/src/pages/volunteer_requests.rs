//! Volunteer requests page

use std::sync::Arc;

use async_trait::async_trait;
use futures_signals::signal::Mutable;
use tracing::info;

use charity_admin_client::{AdminApi, ApiResult};
use charity_admin_types::{Dimension, Dimensions, Reviewable, ReviewFilter, VolunteerRequest};

use super::{ReviewCommand, statuses_to_fetch};
use crate::error::{ViewError, ViewResult};
use crate::list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
use crate::messages::{self, Action};
use crate::modal::{ConfirmModalState, DetailModalState};

struct VolunteerRequestSource {
	api: AdminApi,
}

#[async_trait]
impl ListSource<VolunteerRequest, ReviewFilter> for VolunteerRequestSource {
	async fn fetch(&self, filter: &ReviewFilter) -> ApiResult<Fetched<VolunteerRequest>> {
		let volunteers = self.api.volunteers();
		let mut requests = Vec::new();
		for status in statuses_to_fetch(&filter.status) {
			requests.extend(volunteers.requests_by_status(&status).await?);
		}
		Ok(Fetched::new(requests, Dimensions::from([Dimension::Status])))
	}
}

pub struct VolunteerRequestsPage {
	api: AdminApi,
	list: Arc<ListViewState<VolunteerRequest, ReviewFilter>>,
	pub detail: DetailModalState<VolunteerRequest>,
	pub confirm: ConfirmModalState<ReviewCommand>,
	pub notice: Mutable<Option<String>>,
}

impl VolunteerRequestsPage {
	pub fn new(api: AdminApi) -> Arc<Self> {
		let source: Arc<dyn ListSource<VolunteerRequest, ReviewFilter>> =
			Arc::new(VolunteerRequestSource { api: api.clone() });
		Arc::new(Self {
			list: ListViewState::new(
				source,
				ReviewFilter::default(),
				Action::LoadVolunteerRequests,
			),
			api,
			detail: DetailModalState::new(),
			confirm: ConfirmModalState::new(),
			notice: Mutable::new(None),
		})
	}

	pub fn list(&self) -> &ListViewState<VolunteerRequest, ReviewFilter> {
		&self.list
	}

	pub async fn load(&self) -> ViewResult<()> {
		self.list.load().await
	}

	pub async fn set_filter(&self, filter: ReviewFilter) -> ViewResult<()> {
		self.list.set_filters(filter).await
	}

	pub fn open_detail(&self, id: u64) -> ViewResult<()> {
		let request = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		self.detail.open(request);
		Ok(())
	}

	/// Asks for confirmation of an accept or reject decision
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
		let volunteers = self.api.volunteers();
		let patch = Patch::update(move |request: &mut VolunteerRequest| {
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
						volunteers.approve_request(id),
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
						volunteers.reject_request(id),
					)
					.await?;
				messages::REQUEST_REJECTED
			}
		};
		info!(id, ?command, "volunteer request reviewed");
		self.notice.set(Some(notice.to_string()));
		self.detail.close();
		Ok(())
	}
}
