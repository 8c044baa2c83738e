use charity_admin_types::{BeneficiariesPerYear, Statistics};

use super::LogFailure;
use crate::error::ApiResult;
use crate::http::{HttpClient, Route};

/// Read-only dashboard aggregates
pub struct StatisticsService<'a> {
	http: &'a HttpClient,
}

impl<'a> StatisticsService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	pub async fn snapshot(&self) -> ApiResult<Statistics> {
		self.http
			.get(&Route::new("statistics"))
			.await
			.log_failure("statistics.snapshot")
	}

	pub async fn beneficiaries_per_year(&self) -> ApiResult<Vec<BeneficiariesPerYear>> {
		self.http
			.get(&Route::new("beneficiariesPerYear"))
			.await
			.log_failure("statistics.beneficiaries_per_year")
	}
}
