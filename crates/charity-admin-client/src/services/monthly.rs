use reqwest::Method;
use serde_json::json;
use tracing::info;

use charity_admin_types::MonthlyDonationReport;

use super::LogFailure;
use crate::error::ApiResult;
use crate::http::{Body, HttpClient, Route};

/// Recurring donations
pub struct MonthlyDonationService<'a> {
	http: &'a HttpClient,
}

impl<'a> MonthlyDonationService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	/// Runs every due monthly donation and returns the backend's summary
	pub async fn run(&self) -> ApiResult<MonthlyDonationReport> {
		let report: MonthlyDonationReport = self
			.http
			.fetch(
				Method::POST,
				&Route::new("admin/doAllMonthlyDonations"),
				Body::json(&json!({}))?,
			)
			.await
			.log_failure("monthly.run")?;
		info!(message = %report.message, "monthly donations executed");
		Ok(report)
	}
}
