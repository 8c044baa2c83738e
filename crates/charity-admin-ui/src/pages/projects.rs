//! Projects page

use std::sync::Arc;

use async_trait::async_trait;
use futures_signals::signal::Mutable;
use tracing::info;

use charity_admin_client::{AdminApi, ApiError, ApiResult};
use charity_admin_types::{
	Decimal, NewCharityProject, NewVolunteerProject, Project, ProjectFilters, ProjectStatus,
};

use crate::actions::ProjectActions;
use crate::error::{ViewError, ViewResult};
use crate::list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
use crate::messages::{self, Action};
use crate::modal::{ConfirmModalState, DetailModalState, DonateModalState};

struct ProjectSource {
	api: AdminApi,
}

#[async_trait]
impl ListSource<Project, ProjectFilters> for ProjectSource {
	async fn fetch(&self, filters: &ProjectFilters) -> ApiResult<Fetched<Project>> {
		let listing = self.api.projects().list(filters).await?;
		Ok(Fetched::new(listing.projects, listing.applied))
	}
}

/// Destructive project actions waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCommand {
	Delete(u64),
	Complete(u64),
}

pub struct ProjectsPage {
	api: AdminApi,
	list: Arc<ListViewState<Project, ProjectFilters>>,
	pub detail: DetailModalState<Project>,
	pub donate: DonateModalState,
	pub confirm: ConfirmModalState<ProjectCommand>,
	/// Last success message
	pub notice: Mutable<Option<String>>,
}

impl ProjectsPage {
	pub fn new(api: AdminApi) -> Arc<Self> {
		Self::with_filters(api, ProjectFilters::default())
	}

	pub fn with_filters(api: AdminApi, filters: ProjectFilters) -> Arc<Self> {
		let source: Arc<dyn ListSource<Project, ProjectFilters>> =
			Arc::new(ProjectSource { api: api.clone() });
		Arc::new(Self {
			list: ListViewState::new(source, filters, Action::LoadProjects),
			api,
			detail: DetailModalState::new(),
			donate: DonateModalState::new(),
			confirm: ConfirmModalState::new(),
			notice: Mutable::new(None),
		})
	}

	pub fn list(&self) -> &ListViewState<Project, ProjectFilters> {
		&self.list
	}

	pub async fn load(&self) -> ViewResult<()> {
		self.list.load().await
	}

	pub async fn set_filters(&self, filters: ProjectFilters) -> ViewResult<()> {
		self.list.set_filters(filters).await
	}

	/// Storage URL of a project's photo
	pub fn photo_url(&self, project: &Project) -> Option<String> {
		project.photo_url(self.api.settings().storage_url.as_str())
	}

	pub fn open_detail(&self, id: u64) -> ViewResult<()> {
		let project = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		self.detail.open(project);
		Ok(())
	}

	pub fn close_detail(&self) {
		self.detail.close();
	}

	/// Asks for confirmation before deleting
	pub fn request_delete(&self, id: u64) -> ViewResult<()> {
		let project = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		if !ProjectActions::for_project(&project).can_delete {
			return Err(ViewError::ActionUnavailable);
		}
		self.confirm.show(
			"حذف المشروع",
			messages::CONFIRM_DELETE_PROJECT,
			ProjectCommand::Delete(id),
		);
		Ok(())
	}

	/// Asks for confirmation before marking a volunteer project completed
	pub fn request_complete(&self, id: u64) -> ViewResult<()> {
		let project = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		if !ProjectActions::for_project(&project).can_complete {
			return Err(ViewError::ActionUnavailable);
		}
		self.confirm.show(
			"إكمال المشروع",
			messages::CONFIRM_COMPLETE_PROJECT,
			ProjectCommand::Complete(id),
		);
		Ok(())
	}

	/// Runs the action held by the confirmation modal
	pub async fn confirm(&self) -> ViewResult<()> {
		match self.confirm.confirm().ok_or(ViewError::NothingSelected)? {
			ProjectCommand::Delete(id) => self.delete(id).await,
			ProjectCommand::Complete(id) => self.complete(id).await,
		}
	}

	async fn delete(&self, id: u64) -> ViewResult<()> {
		let projects = self.api.projects();
		self.list
			.mutate(
				id,
				Patch::remove(),
				Action::DeleteProject,
				AfterSuccess::Keep,
				projects.delete(id),
			)
			.await?;
		self.close_detail_of(id);
		info!(id, "project deleted");
		Ok(())
	}

	async fn complete(&self, id: u64) -> ViewResult<()> {
		let projects = self.api.projects();
		self.list
			.mutate(
				id,
				Patch::update(Project::mark_completed),
				Action::CompleteProject,
				AfterSuccess::Keep,
				projects.mark_volunteer_completed(id),
			)
			.await?;
		self.close_detail_of(id);
		Ok(())
	}

	/// Opens the donation dialog of a donatable project
	pub fn open_donate(&self, id: u64) -> ViewResult<()> {
		let project = self.list.get(&id).ok_or(ViewError::UnknownItem)?;
		if !ProjectActions::for_project(&project).can_donate {
			return Err(ViewError::NotDonatable);
		}
		self.donate.open(project);
		Ok(())
	}

	/// Donates the amount typed in the dialog
	pub async fn submit_donation(&self) -> ViewResult<()> {
		let (project, amount) = self.donate.validated_amount()?;
		self.donate_amount(project.id, amount).await
	}

	/// Donates a preset amount; goes through the same validation as typed amounts
	pub async fn quick_donate(&self, preset: u32) -> ViewResult<()> {
		self.donate.set_amount(preset.to_string());
		self.submit_donation().await
	}

	async fn donate_amount(&self, id: u64, amount: Decimal) -> ViewResult<()> {
		if self.donate.is_submitting.replace(true) {
			return Err(ViewError::ActionInFlight);
		}
		let projects = self.api.projects();
		let result = self
			.list
			.mutate(
				id,
				Patch::update(move |project: &mut Project| project.apply_donation(amount)),
				Action::Donate,
				AfterSuccess::Keep,
				projects.donate(id, amount),
			)
			.await;
		self.donate.is_submitting.set(false);

		match result {
			Ok(()) => {
				self.notice
					.set(Some(messages::donation_succeeded(amount.normalize())));
				self.donate.close();
				self.close_detail_of(id);
				Ok(())
			}
			Err(err) => {
				self.donate
					.error
					.set(Some(messages::failure(Action::Donate, &err)));
				Err(err)
			}
		}
	}

	pub async fn change_status(&self, id: u64, status: ProjectStatus) -> ViewResult<()> {
		let projects = self.api.projects();
		let next = status.clone();
		self.list
			.mutate(
				id,
				Patch::update(move |project: &mut Project| project.status = next),
				Action::ChangeProjectStatus,
				AfterSuccess::Keep,
				projects.change_status(id, status),
			)
			.await
	}

	pub async fn add_charity_project(&self, project: &NewCharityProject) -> ViewResult<()> {
		let result = self.api.projects().add_charity_project(project).await;
		self.after_add(result).await
	}

	pub async fn add_volunteer_project(&self, project: &NewVolunteerProject) -> ViewResult<()> {
		let result = self.api.projects().add_volunteer_project(project).await;
		self.after_add(result).await
	}

	async fn after_add(&self, result: ApiResult<()>) -> ViewResult<()> {
		match result {
			Ok(()) => {
				self.notice.set(Some(messages::PROJECT_ADDED.to_string()));
				self.list.load().await
			}
			Err(err) => {
				let err = match err {
					ApiError::Form(form) => ViewError::Form(form),
					other => ViewError::Api(other),
				};
				self.list.set_error(messages::failure(Action::AddProject, &err));
				Err(err)
			}
		}
	}

	/// Closes the detail modal if it shows project `id`
	fn close_detail_of(&self, id: u64) {
		if self.detail.selected().is_some_and(|project| project.id == id) {
			self.detail.close();
		}
	}
}
