//! Beneficiaries page
//!
//! Beneficiaries are addressed by phone number, which is also what the ban
//! endpoints take.

use std::sync::Arc;

use async_trait::async_trait;

use charity_admin_client::{AdminApi, ApiResult};
use charity_admin_types::{BanFilter, Bannable, Beneficiary, Dimension, Dimensions};

use crate::error::{ViewError, ViewResult};
use crate::list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
use crate::messages::{self, Action};
use crate::modal::ConfirmModalState;

struct BeneficiarySource {
	api: AdminApi,
}

#[async_trait]
impl ListSource<Beneficiary, BanFilter> for BeneficiarySource {
	async fn fetch(&self, filter: &BanFilter) -> ApiResult<Fetched<Beneficiary>> {
		let beneficiaries = self.api.beneficiaries().by_ban(filter.banned).await?;
		Ok(Fetched::new(beneficiaries, Dimensions::from([Dimension::Ban])))
	}
}

pub struct BeneficiariesPage {
	api: AdminApi,
	list: Arc<ListViewState<Beneficiary, BanFilter>>,
	/// Holds the phone number to ban
	pub confirm: ConfirmModalState<String>,
}

impl BeneficiariesPage {
	pub fn new(api: AdminApi) -> Arc<Self> {
		let source: Arc<dyn ListSource<Beneficiary, BanFilter>> =
			Arc::new(BeneficiarySource { api: api.clone() });
		Arc::new(Self {
			list: ListViewState::new(source, BanFilter::default(), Action::LoadBeneficiaries),
			api,
			confirm: ConfirmModalState::new(),
		})
	}

	pub fn list(&self) -> &ListViewState<Beneficiary, BanFilter> {
		&self.list
	}

	pub async fn load(&self) -> ViewResult<()> {
		self.list.load().await
	}

	pub async fn show_banned(&self, banned: bool) -> ViewResult<()> {
		self.list.set_filters(BanFilter::banned(banned)).await
	}

	pub fn request_ban(&self, phone_number: &str) -> ViewResult<()> {
		let key = phone_number.to_string();
		let beneficiary = self.list.get(&key).ok_or(ViewError::UnknownItem)?;
		if beneficiary.is_banned() {
			return Err(ViewError::ActionUnavailable);
		}
		self.confirm
			.show("حظر المستفيد", messages::CONFIRM_BAN_BENEFICIARY, key);
		Ok(())
	}

	pub async fn confirm_ban(&self) -> ViewResult<()> {
		let phone_number = self.confirm.confirm().ok_or(ViewError::NothingSelected)?;
		let beneficiaries = self.api.beneficiaries();
		self.list
			.mutate(
				phone_number.clone(),
				Patch::update(|beneficiary: &mut Beneficiary| beneficiary.set_banned(true)),
				Action::BanBeneficiary,
				AfterSuccess::Keep,
				beneficiaries.ban(&phone_number),
			)
			.await
	}

	pub async fn unblock(&self, phone_number: &str) -> ViewResult<()> {
		let beneficiaries = self.api.beneficiaries();
		self.list
			.mutate(
				phone_number.to_string(),
				Patch::update(|beneficiary: &mut Beneficiary| beneficiary.set_banned(false)),
				Action::UnblockBeneficiary,
				AfterSuccess::Keep,
				beneficiaries.unblock(phone_number),
			)
			.await
	}
}
