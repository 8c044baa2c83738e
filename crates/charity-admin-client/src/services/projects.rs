use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use charity_admin_types::{
	Decimal, Dimension, Dimensions, NewCharityProject, NewVolunteerProject, PhotoUpload, Project,
	ProjectFilters, ProjectStatus, ProjectType, StatusChange,
};

use super::LogFailure;
use crate::error::{ApiError, ApiResult};
use crate::http::{Body, HttpClient, Route};
use crate::settings::EndpointContract;

/// Projects fetched for a set of filters
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListing {
	pub projects: Vec<Project>,
	/// Dimensions the server already narrowed; the rest apply locally
	pub applied: Dimensions,
}

pub struct ProjectService<'a> {
	http: &'a HttpClient,
}

impl<'a> ProjectService<'a> {
	pub(crate) fn new(http: &'a HttpClient) -> Self {
		Self { http }
	}

	pub async fn by_type(&self, project_type: &ProjectType) -> ApiResult<Vec<Project>> {
		let route = Route::new("getProjectsByType").segment(project_type.as_wire());
		self.http.get(&route).await.log_failure("projects.by_type")
	}

	pub async fn by_status(&self, status: &ProjectStatus) -> ApiResult<Vec<Project>> {
		let route = Route::new("filterProjectByStatus").segment(status.as_wire());
		self.http.get(&route).await.log_failure("projects.by_status")
	}

	/// Filter-bag endpoint; `All` dimensions are left out of the query
	pub async fn by_filters(&self, filters: &ProjectFilters) -> ApiResult<Vec<Project>> {
		let route = Route::new("getProjectsByFilters").queries(filters.query_pairs());
		self.http.get(&route).await.log_failure("projects.by_filters")
	}

	/// Fetches projects through whichever endpoints the backend exposes.
	///
	/// The per-dimension contract can push a single dimension: the type when
	/// one is selected, otherwise the status.
	pub async fn list(&self, filters: &ProjectFilters) -> ApiResult<ProjectListing> {
		match self.http.settings().contract {
			EndpointContract::FilterBag => Ok(ProjectListing {
				projects: self.by_filters(filters).await?,
				applied: Dimension::PROJECT.into_iter().collect(),
			}),
			EndpointContract::PerDimension => {
				if let Some(project_type) = filters.project_type.as_only() {
					Ok(ProjectListing {
						projects: self.by_type(project_type).await?,
						applied: Dimensions::from([Dimension::Type]),
					})
				} else if let Some(status) = filters.status.as_only() {
					Ok(ProjectListing {
						projects: self.by_status(status).await?,
						applied: Dimensions::from([Dimension::Status]),
					})
				} else {
					Err(ApiError::UnsupportedQuery(
						"per-dimension endpoints need a project type or a status".to_string(),
					))
					.log_failure("projects.list")
				}
			}
		}
	}

	pub async fn delete(&self, id: u64) -> ApiResult<()> {
		let route = Route::new("admin/deleteProject").query("id", id);
		self.http
			.execute(Method::DELETE, &route, Body::Empty)
			.await
			.log_failure("projects.delete")
	}

	pub async fn mark_volunteer_completed(&self, id: u64) -> ApiResult<()> {
		let route = Route::new("admin/markVolunteerProjectAsCompleted").query("id", id);
		self.http
			.execute(Method::POST, &route, Body::json(&json!({}))?)
			.await
			.log_failure("projects.mark_volunteer_completed")
	}

	pub async fn donate(&self, id: u64, amount: Decimal) -> ApiResult<()> {
		let route = Route::new("admin/donateToProject")
			.query("id", id)
			.query("amount", amount.normalize());
		self.http
			.execute(Method::POST, &route, Body::Empty)
			.await
			.log_failure("projects.donate")
	}

	pub async fn change_status(&self, id: u64, status: ProjectStatus) -> ApiResult<()> {
		let body = Body::json(&StatusChange {
			project_id: id,
			status,
		})?;
		self.http
			.execute(Method::POST, &Route::new("admin/changeProjectStatus"), body)
			.await
			.log_failure("projects.change_status")
	}

	/// Validates the form, then uploads it with its photo
	pub async fn add_charity_project(&self, project: &NewCharityProject) -> ApiResult<()> {
		project.validate()?;
		let form = multipart(project.text_fields(), project.photo.as_ref())?;
		self.http
			.execute(
				Method::POST,
				&Route::new("admin/addCharityProject"),
				Body::Multipart(form),
			)
			.await
			.log_failure("projects.add_charity_project")
	}

	pub async fn add_volunteer_project(&self, project: &NewVolunteerProject) -> ApiResult<()> {
		project.validate()?;
		let form = multipart(project.text_fields(), project.photo.as_ref())?;
		self.http
			.execute(
				Method::POST,
				&Route::new("admin/addVolunteerProject"),
				Body::Multipart(form),
			)
			.await
			.log_failure("projects.add_volunteer_project")
	}
}

fn multipart(fields: Vec<(&'static str, String)>, photo: Option<&PhotoUpload>) -> ApiResult<Form> {
	let mut form = fields
		.into_iter()
		.fold(Form::new(), |form, (name, value)| form.text(name, value));
	if let Some(photo) = photo {
		let part = Part::bytes(photo.bytes.clone())
			.file_name(photo.file_name.clone())
			.mime_str(&photo.mime)
			.map_err(|e| ApiError::Client(e.to_string()))?;
		form = form.part("photo", part);
	}
	Ok(form)
}
