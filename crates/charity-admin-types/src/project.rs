//! Projects as returned by the listing endpoints

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{DurationType, Priority, ProjectStatus, ProjectType};
use crate::wire;

/// Type reference embedded in projects and beneficiary requests.
///
/// Most endpoints send `{id, name}`; a few send the bare label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTypeRef")]
pub struct TypeRef {
	pub id: Option<u64>,
	pub name: ProjectType,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeRef {
	Object {
		#[serde(default)]
		id: Option<u64>,
		name: ProjectType,
	},
	Label(ProjectType),
}

impl From<RawTypeRef> for TypeRef {
	fn from(raw: RawTypeRef) -> Self {
		match raw {
			RawTypeRef::Object { id, name } => Self { id, name },
			RawTypeRef::Label(name) => Self { id: None, name },
		}
	}
}

impl From<ProjectType> for TypeRef {
	fn from(name: ProjectType) -> Self {
		Self { id: None, name }
	}
}

/// A charity or volunteer project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
	pub id: u64,
	#[serde(default)]
	pub user_id: Option<u64>,
	#[serde(default)]
	pub type_id: Option<u64>,
	#[serde(default, rename = "type")]
	pub project_type: Option<TypeRef>,
	#[serde(default, deserialize_with = "wire::text")]
	pub name: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub description: String,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub photo: Option<String>,
	/// Absent for volunteer projects
	#[serde(default)]
	pub total_amount: Option<Decimal>,
	#[serde(default)]
	pub current_amount: Decimal,
	pub status: ProjectStatus,
	#[serde(default)]
	pub priority: Option<Priority>,
	#[serde(default)]
	pub duration_type: Option<DurationType>,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub location: Option<String>,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub volunteer_hours: Option<String>,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub required_tasks: Option<String>,
	#[serde(default)]
	pub created_at: Option<String>,
	#[serde(default)]
	pub updated_at: Option<String>,
}

impl Entity for Project {
	type Key = u64;

	fn key(&self) -> u64 {
		self.id
	}
}

impl Project {
	/// The project's type label, when the payload embedded one
	pub fn type_name(&self) -> Option<&ProjectType> {
		self.project_type.as_ref().map(|type_ref| &type_ref.name)
	}

	/// A project without an embedded type matches any type; the server already narrowed it.
	pub fn matches_type(&self, project_type: &ProjectType) -> bool {
		self.type_name().is_none_or(|name| name == project_type)
	}

	pub fn is_duration(&self, duration: &DurationType) -> bool {
		self.duration_type.as_ref() == Some(duration)
	}

	/// Amount still needed, never negative. `None` when there is no target.
	pub fn remaining_amount(&self) -> Option<Decimal> {
		self.total_amount
			.map(|total| (total - self.current_amount).max(Decimal::ZERO))
	}

	/// Funding progress for display, clamped to `0..=100`
	pub fn progress_percent(&self) -> Option<u32> {
		let total = self.total_amount.filter(|total| !total.is_zero())?;
		(self.current_amount * Decimal::ONE_HUNDRED / total)
			.round()
			.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
			.to_u32()
	}

	/// Whether cards render a progress bar for this project
	pub fn shows_progress(&self) -> bool {
		matches!(
			self.duration_type,
			Some(DurationType::Individual) | Some(DurationType::Temporary)
		)
	}

	/// Public URL of the project photo under the storage base
	pub fn photo_url(&self, storage_base: &str) -> Option<String> {
		let photo = self.photo.as_deref().filter(|photo| !photo.is_empty())?;
		Some(format!(
			"{}/{}",
			storage_base.trim_end_matches('/'),
			photo.trim_start_matches('/')
		))
	}

	/// Adds a donation locally: the amount is clamped to the target and the
	/// project becomes finished once the target is reached.
	pub fn apply_donation(&mut self, amount: Decimal) {
		let raised = self.current_amount + amount;
		match self.total_amount {
			Some(total) => {
				self.current_amount = raised.min(total);
				if self.current_amount == total {
					self.status = ProjectStatus::Finished;
				}
			}
			None => self.current_amount = raised,
		}
	}

	pub fn mark_completed(&mut self) {
		self.status = ProjectStatus::Finished;
	}
}
