//! Request and response bodies

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{Priority, ProjectStatus, ProjectType};

/// Login form
#[derive(Clone, Serialize)]
pub struct Credentials {
	pub email: String,
	pub password: String,
}

impl Credentials {
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			password: password.into(),
		}
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("email", &self.email)
			.field("password", &"***")
			.finish()
	}
}

/// `admin/login` response; a missing token is a failed login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
	#[serde(default)]
	pub token: Option<String>,
}

/// `admin/changeProjectStatus` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChange {
	pub project_id: u64,
	pub status: ProjectStatus,
}

/// `{id}` body used by volunteer actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdBody {
	pub id: u64,
}

/// `{phone_number}` body used by beneficiary ban actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneBody {
	pub phone_number: String,
}

/// An image attached to a new project
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
	pub file_name: String,
	pub mime: String,
	pub bytes: Vec<u8>,
}

impl PhotoUpload {
	/// Builds an upload, deriving the MIME type from the file extension.
	/// Only png, jpg, jpeg and gif are accepted.
	pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ProjectFormError> {
		let file_name = file_name.into();
		let extension = file_name
			.rsplit_once('.')
			.map(|(_, ext)| ext.to_ascii_lowercase())
			.unwrap_or_default();
		let mime = match extension.as_str() {
			"png" => "image/png",
			"jpg" | "jpeg" => "image/jpeg",
			"gif" => "image/gif",
			_ => return Err(ProjectFormError::UnsupportedPhoto),
		};
		Ok(Self {
			file_name,
			mime: mime.to_string(),
			bytes,
		})
	}
}

impl fmt::Debug for PhotoUpload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PhotoUpload")
			.field("file_name", &self.file_name)
			.field("mime", &self.mime)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// Validation failures of the add-project forms, worded for the admin
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectFormError {
	#[error("يرجى اختيار نوع المشروع")]
	MissingType,
	#[error("يرجى إدخال اسم المشروع")]
	MissingName,
	#[error("يرجى إدخال وصف المشروع")]
	MissingDescription,
	#[error("يرجى إدخال المبلغ الكلي بشكل صحيح")]
	InvalidTotal,
	#[error("يرجى اختيار أولوية المشروع")]
	MissingPriority,
	#[error("يجب إضافة صورة للمشروع")]
	MissingPhoto,
	#[error("يجب أن يكون الملف من نوع: png, jpg, jpeg, gif")]
	UnsupportedPhoto,
}

/// Multipart payload of `admin/addCharityProject`
#[derive(Debug, Clone, Default)]
pub struct NewCharityProject {
	/// Sent as the type's label in the `type_id` field
	pub project_type: Option<ProjectType>,
	pub name: String,
	pub description: String,
	pub total_amount: Option<Decimal>,
	pub current_amount: Decimal,
	pub priority: Option<Priority>,
	pub photo: Option<PhotoUpload>,
}

impl NewCharityProject {
	/// Checks the form in the order the fields appear
	pub fn validate(&self) -> Result<(), ProjectFormError> {
		if self.project_type.is_none() {
			return Err(ProjectFormError::MissingType);
		}
		if self.name.trim().is_empty() {
			return Err(ProjectFormError::MissingName);
		}
		if self.description.trim().is_empty() {
			return Err(ProjectFormError::MissingDescription);
		}
		match self.total_amount {
			Some(total) if total > Decimal::ZERO => {}
			_ => return Err(ProjectFormError::InvalidTotal),
		}
		if self.priority.is_none() {
			return Err(ProjectFormError::MissingPriority);
		}
		if self.photo.is_none() {
			return Err(ProjectFormError::MissingPhoto);
		}
		Ok(())
	}

	/// Text fields of the multipart form, photo excluded
	pub fn text_fields(&self) -> Vec<(&'static str, String)> {
		vec![
			("type_id", label(&self.project_type)),
			("name", self.name.trim().to_string()),
			("description", self.description.trim().to_string()),
			(
				"total_amount",
				self.total_amount.map(|t| t.to_string()).unwrap_or_default(),
			),
			("current_amount", self.current_amount.to_string()),
			("priority", label(&self.priority)),
		]
	}
}

/// Multipart payload of `admin/addVolunteerProject`
#[derive(Debug, Clone, Default)]
pub struct NewVolunteerProject {
	pub project_type: Option<ProjectType>,
	pub name: String,
	pub description: String,
	pub total_amount: Option<Decimal>,
	pub volunteer_hours: String,
	pub required_tasks: String,
	pub location: String,
	pub photo: Option<PhotoUpload>,
}

impl NewVolunteerProject {
	pub fn validate(&self) -> Result<(), ProjectFormError> {
		if self.project_type.is_none() {
			return Err(ProjectFormError::MissingType);
		}
		if self.name.trim().is_empty() {
			return Err(ProjectFormError::MissingName);
		}
		if self.description.trim().is_empty() {
			return Err(ProjectFormError::MissingDescription);
		}
		if self.total_amount.is_some_and(|total| total < Decimal::ZERO) {
			return Err(ProjectFormError::InvalidTotal);
		}
		if self.photo.is_none() {
			return Err(ProjectFormError::MissingPhoto);
		}
		Ok(())
	}

	pub fn text_fields(&self) -> Vec<(&'static str, String)> {
		vec![
			("type_id", label(&self.project_type)),
			("name", self.name.trim().to_string()),
			("description", self.description.trim().to_string()),
			(
				"total_amount",
				self.total_amount.map(|t| t.to_string()).unwrap_or_default(),
			),
			("volunteer_hours", self.volunteer_hours.clone()),
			("required_tasks", self.required_tasks.clone()),
			("location", self.location.clone()),
		]
	}
}

fn label<T: fmt::Display>(value: &Option<T>) -> String {
	value.as_ref().map(ToString::to_string).unwrap_or_default()
}
