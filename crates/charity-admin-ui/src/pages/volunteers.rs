//! Volunteers page

use std::sync::Arc;

use async_trait::async_trait;

use charity_admin_client::{AdminApi, ApiResult};
use charity_admin_types::{BanFilter, Bannable, Dimension, Dimensions, Volunteer};

use crate::error::{ViewError, ViewResult};
use crate::list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
use crate::messages::{self, Action};
use crate::modal::{ConfirmModalState, DetailModalState};

struct VolunteerSource {
	api: AdminApi,
}

#[async_trait]
impl ListSource<Volunteer, BanFilter> for VolunteerSource {
	async fn fetch(&self, filter: &BanFilter) -> ApiResult<Fetched<Volunteer>> {
		let volunteers = self.api.volunteers().by_ban(filter.banned).await?;
		Ok(Fetched::new(volunteers, Dimensions::from([Dimension::Ban])))
	}
}

pub struct VolunteersPage {
	api: AdminApi,
	list: Arc<ListViewState<Volunteer, BanFilter>>,
	pub detail: DetailModalState<Volunteer>,
	/// Holds the id of the volunteer to ban
	pub confirm: ConfirmModalState<u64>,
}

impl VolunteersPage {
	pub fn new(api: AdminApi) -> Arc<Self> {
		let source: Arc<dyn ListSource<Volunteer, BanFilter>> =
			Arc::new(VolunteerSource { api: api.clone() });
		Arc::new(Self {
			list: ListViewState::new(source, BanFilter::default(), Action::LoadVolunteers),
			api,
			detail: DetailModalState::new(),
			confirm: ConfirmModalState::new(),
		})
	}

	pub fn list(&self) -> &ListViewState<Volunteer, BanFilter> {
		&self.list
	}

	pub async fn load(&self) -> ViewResult<()> {
		self.list.load().await
	}

	/// Switches between the banned and not banned tabs
	pub async fn show_banned(&self, banned: bool) -> ViewResult<()> {
		self.list.set_filters(BanFilter::banned(banned)).await
	}

	pub fn open_detail(&self, id: u64) -> ViewResult<()> {
		let volunteer = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		self.detail.open(volunteer);
		Ok(())
	}

	pub fn request_ban(&self, id: u64) -> ViewResult<()> {
		let volunteer = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		if volunteer.is_banned() {
			return Err(ViewError::ActionUnavailable);
		}
		self.confirm
			.show("حظر المتطوع", messages::CONFIRM_BAN_VOLUNTEER, id);
		Ok(())
	}

	/// Bans the volunteer held by the confirmation modal
	pub async fn confirm_ban(&self) -> ViewResult<()> {
		let id = self.confirm.confirm().ok_or(ViewError::NothingSelected)?;
		let volunteers = self.api.volunteers();
		self.list
			.mutate(
				id,
				Patch::update(|volunteer: &mut Volunteer| volunteer.set_banned(true)),
				Action::BanVolunteer,
				AfterSuccess::Keep,
				volunteers.ban(id),
			)
			.await?;
		self.close_detail_of(id);
		Ok(())
	}

	/// Lifts a ban; no confirmation step
	pub async fn unblock(&self, id: u64) -> ViewResult<()> {
		let volunteers = self.api.volunteers();
		self.list
			.mutate(
				id,
				Patch::update(|volunteer: &mut Volunteer| volunteer.set_banned(false)),
				Action::UnblockVolunteer,
				AfterSuccess::Keep,
				volunteers.unblock(id),
			)
			.await
	}

	fn close_detail_of(&self, id: u64) {
		if self.detail.selected().is_some_and(|volunteer| volunteer.id == id) {
			self.detail.close();
		}
	}
}
