use reqwest::Method;

use charity_admin_types::{Feedback, ReviewStatus};

use super::LogFailure;
use crate::error::ApiResult;
use crate::http::{Body, HttpClient, Route};

pub struct FeedbackService<'a> {
	http: &'a HttpClient,
}

impl<'a> FeedbackService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	pub async fn by_status(&self, status: &ReviewStatus) -> ApiResult<Vec<Feedback>> {
		let route = Route::new("getFilteredFeedbacks").segment(status.as_wire());
		self.http.get(&route).await.log_failure("feedback.by_status")
	}

	pub async fn accept(&self, id: u64) -> ApiResult<()> {
		let route = Route::new("admin/acceptFeedback").query("id", id);
		self.http
			.execute(Method::POST, &route, Body::Empty)
			.await
			.log_failure("feedback.accept")
	}

	pub async fn reject(&self, id: u64) -> ApiResult<()> {
		let route = Route::new("admin/rejectFeedback").query("id", id);
		self.http
			.execute(Method::POST, &route, Body::Empty)
			.await
			.log_failure("feedback.reject")
	}
}
