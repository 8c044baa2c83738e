use reqwest::Method;

use charity_admin_types::{Beneficiary, BeneficiaryRequest, BeneficiaryRequestFilters, PhoneBody};

use super::{LogFailure, flag_segment};
use crate::error::ApiResult;
use crate::http::{Body, HttpClient, Route};

/// Beneficiary applications and beneficiary accounts
pub struct BeneficiaryService<'a> {
	http: &'a HttpClient,
}

impl<'a> BeneficiaryService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	/// `getFilteredBeneficiaryRequests/{type}/{status}`; an `All` dimension drops its segment
	pub async fn requests(&self, filters: &BeneficiaryRequestFilters) -> ApiResult<Vec<BeneficiaryRequest>> {
		let route = Route::new("getFilteredBeneficiaryRequests")
			.segment(filters.request_type.as_only().map(|t| t.as_wire()).unwrap_or_default())
			.segment(filters.status.as_only().map(|s| s.as_wire()).unwrap_or_default());
		self.http.get(&route).await.log_failure("beneficiaries.requests")
	}

	pub async fn show_request(&self, id: u64) -> ApiResult<BeneficiaryRequest> {
		let route = Route::new("showBeneficiaryRequest").query("id", id);
		self.http.get(&route).await.log_failure("beneficiaries.show_request")
	}

	pub async fn accept_request(&self, id: u64) -> ApiResult<()> {
		let route = Route::new("admin/acceptBeneficiaryRequest").query("id", id);
		self.http
			.execute(Method::POST, &route, Body::Empty)
			.await
			.log_failure("beneficiaries.accept_request")
	}

	pub async fn reject_request(&self, id: u64) -> ApiResult<()> {
		let route = Route::new("admin/rejectBeneficiaryRequest").query("id", id);
		self.http
			.execute(Method::POST, &route, Body::Empty)
			.await
			.log_failure("beneficiaries.reject_request")
	}

	pub async fn by_ban(&self, banned: bool) -> ApiResult<Vec<Beneficiary>> {
		let route = Route::new("filterBeneficiaryByBan").segment(flag_segment(banned));
		self.http.get(&route).await.log_failure("beneficiaries.by_ban")
	}

	pub async fn ban(&self, phone_number: &str) -> ApiResult<()> {
		self.post_phone("admin/banBeneficiary", phone_number)
			.await
			.log_failure("beneficiaries.ban")
	}

	pub async fn unblock(&self, phone_number: &str) -> ApiResult<()> {
		self.post_phone("admin/unblockBeneficiary", phone_number)
			.await
			.log_failure("beneficiaries.unblock")
	}

	async fn post_phone(&self, path: &'static str, phone_number: &str) -> ApiResult<()> {
		let body = Body::json(&PhoneBody {
			phone_number: phone_number.to_string(),
		})?;
		self.http.execute(Method::POST, &Route::new(path), body).await
	}
}
