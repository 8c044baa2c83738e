use reqwest::Method;

use charity_admin_types::{IdBody, ReviewStatus, Volunteer, VolunteerRequest};

use super::{LogFailure, flag_segment};
use crate::error::ApiResult;
use crate::http::{Body, HttpClient, Route};

/// Volunteer applications and volunteer accounts
pub struct VolunteerService<'a> {
	http: &'a HttpClient,
}

impl<'a> VolunteerService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	pub async fn requests_by_status(&self, status: &ReviewStatus) -> ApiResult<Vec<VolunteerRequest>> {
		let route = Route::new("getVolunteerRequestsByStatus").segment(status.as_wire());
		self.http.get(&route).await.log_failure("volunteers.requests_by_status")
	}

	pub async fn approve_request(&self, id: u64) -> ApiResult<()> {
		self.post_id("admin/approveVolunteerRequest", id)
			.await
			.log_failure("volunteers.approve_request")
	}

	pub async fn reject_request(&self, id: u64) -> ApiResult<()> {
		self.post_id("admin/rejectVolunteerRequest", id)
			.await
			.log_failure("volunteers.reject_request")
	}

	pub async fn by_ban(&self, banned: bool) -> ApiResult<Vec<Volunteer>> {
		let route = Route::new("filterVolunteersByBan").segment(flag_segment(banned));
		self.http.get(&route).await.log_failure("volunteers.by_ban")
	}

	pub async fn ban(&self, id: u64) -> ApiResult<()> {
		self.post_id("admin/banVolunteer", id)
			.await
			.log_failure("volunteers.ban")
	}

	pub async fn unblock(&self, id: u64) -> ApiResult<()> {
		self.post_id("admin/unblockVolunteer", id)
			.await
			.log_failure("volunteers.unblock")
	}

	async fn post_id(&self, path: &'static str, id: u64) -> ApiResult<()> {
		self.http
			.execute(Method::POST, &Route::new(path), Body::json(&IdBody { id })?)
			.await
	}
}
