//! Gift donations page

use std::sync::Arc;

use async_trait::async_trait;

use charity_admin_client::{AdminApi, ApiResult};
use charity_admin_types::{DeliveredFilter, Dimension, Dimensions, GiftDonation};

use crate::error::{ViewError, ViewResult};
use crate::list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
use crate::messages::Action;

struct GiftSource {
	api: AdminApi,
}

#[async_trait]
impl ListSource<GiftDonation, DeliveredFilter> for GiftSource {
	async fn fetch(&self, filter: &DeliveredFilter) -> ApiResult<Fetched<GiftDonation>> {
		let gifts = self.api.gifts().filtered(filter.delivered).await?;
		Ok(Fetched::new(gifts, Dimensions::from([Dimension::Delivered])))
	}
}

pub struct GiftDonationsPage {
	api: AdminApi,
	list: Arc<ListViewState<GiftDonation, DeliveredFilter>>,
}

impl GiftDonationsPage {
	pub fn new(api: AdminApi) -> Arc<Self> {
		let source: Arc<dyn ListSource<GiftDonation, DeliveredFilter>> =
			Arc::new(GiftSource { api: api.clone() });
		Arc::new(Self {
			list: ListViewState::new(source, DeliveredFilter::default(), Action::LoadGifts),
			api,
		})
	}

	pub fn list(&self) -> &ListViewState<GiftDonation, DeliveredFilter> {
		&self.list
	}

	pub async fn load(&self) -> ViewResult<()> {
		self.list.load().await
	}

	pub async fn show_delivered(&self, delivered: bool) -> ViewResult<()> {
		self.list
			.set_filters(DeliveredFilter::delivered(delivered))
			.await
	}

	/// Records the hand-over; delivered gifts cannot go back
	pub async fn mark_delivered(&self, id: u64) -> ViewResult<()> {
		let gift = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		if gift.delivered {
			return Err(ViewError::ActionUnavailable);
		}
		let gifts = self.api.gifts();
		self.list
			.mutate(
				id,
				Patch::update(|gift: &mut GiftDonation| gift.delivered = true),
				Action::MarkDelivered,
				AfterSuccess::Keep,
				gifts.mark_delivered(id),
			)
			.await
	}
}
