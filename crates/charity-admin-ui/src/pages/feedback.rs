//! Feedback moderation page

use std::sync::Arc;

use async_trait::async_trait;

use charity_admin_client::{AdminApi, ApiResult};
use charity_admin_types::{
	Dimension, Dimensions, Feedback, ReviewFilter, ReviewStatus, Reviewable,
};

use super::statuses_to_fetch;
use crate::error::{ViewError, ViewResult};
use crate::list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
use crate::messages::Action;

struct FeedbackSource {
	api: AdminApi,
}

#[async_trait]
impl ListSource<Feedback, ReviewFilter> for FeedbackSource {
	async fn fetch(&self, filter: &ReviewFilter) -> ApiResult<Fetched<Feedback>> {
		let service = self.api.feedback();
		let mut entries = Vec::new();
		for status in statuses_to_fetch(&filter.status) {
			entries.extend(service.by_status(&status).await?);
		}
		Ok(Fetched::new(entries, Dimensions::from([Dimension::Status])))
	}
}

pub struct FeedbackPage {
	api: AdminApi,
	list: Arc<ListViewState<Feedback, ReviewFilter>>,
}

impl FeedbackPage {
	pub fn new(api: AdminApi) -> Arc<Self> {
		let source: Arc<dyn ListSource<Feedback, ReviewFilter>> =
			Arc::new(FeedbackSource { api: api.clone() });
		Arc::new(Self {
			list: ListViewState::new(source, ReviewFilter::default(), Action::LoadFeedback),
			api,
		})
	}

	pub fn list(&self) -> &ListViewState<Feedback, ReviewFilter> {
		&self.list
	}

	pub async fn load(&self) -> ViewResult<()> {
		self.list.load().await
	}

	pub async fn set_filter(&self, filter: ReviewFilter) -> ViewResult<()> {
		self.list.set_filters(filter).await
	}

	pub async fn accept(&self, id: u64) -> ViewResult<()> {
		self.ensure_open(id)?;
		let service = self.api.feedback();
		self.list
			.mutate(
				id,
				Patch::update(|entry: &mut Feedback| {
					entry.set_review_status(ReviewStatus::Accepted)
				}),
				Action::AcceptFeedback,
				AfterSuccess::Reload,
				service.accept(id),
			)
			.await
	}

	pub async fn reject(&self, id: u64) -> ViewResult<()> {
		self.ensure_open(id)?;
		let service = self.api.feedback();
		self.list
			.mutate(
				id,
				Patch::update(|entry: &mut Feedback| {
					entry.set_review_status(ReviewStatus::Rejected)
				}),
				Action::RejectFeedback,
				AfterSuccess::Reload,
				service.reject(id),
			)
			.await
	}

	fn ensure_open(&self, id: u64) -> ViewResult<()> {
		let entry = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		if entry.review_status().is_open() {
			Ok(())
		} else {
			Err(ViewError::ActionUnavailable)
		}
	}
}
