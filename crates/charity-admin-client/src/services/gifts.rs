use reqwest::Method;

use charity_admin_types::GiftDonation;

use super::{LogFailure, flag_segment};
use crate::error::ApiResult;
use crate::http::{Body, HttpClient, Route};

pub struct GiftService<'a> {
	http: &'a HttpClient,
}

impl<'a> GiftService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	pub async fn filtered(&self, delivered: bool) -> ApiResult<Vec<GiftDonation>> {
		let route = Route::new("getFilteredGiftDelivered").segment(flag_segment(delivered));
		self.http.get(&route).await.log_failure("gifts.filtered")
	}

	pub async fn mark_delivered(&self, id: u64) -> ApiResult<()> {
		let route = Route::new("admin/giftDelivered").query("id", id);
		self.http
			.execute(Method::POST, &route, Body::Empty)
			.await
			.log_failure("gifts.mark_delivered")
	}
}
