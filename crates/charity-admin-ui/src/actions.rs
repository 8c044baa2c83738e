//! Which project actions the dashboard offers

use charity_admin_types::{DurationType, Project, ProjectStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectActions {
	/// Ongoing, neither permanent nor volunteer, target not reached
	pub can_donate: bool,
	/// Ongoing volunteer project
	pub can_complete: bool,
	pub can_delete: bool,
}

impl ProjectActions {
	pub fn for_project(project: &Project) -> Self {
		let ongoing = project.status == ProjectStatus::Ongoing;
		let fundable = !matches!(
			project.duration_type,
			Some(DurationType::Permanent) | Some(DurationType::Volunteer)
		);
		let below_target = project
			.total_amount
			.is_some_and(|total| project.current_amount < total);

		Self {
			can_donate: ongoing && fundable && below_target,
			can_complete: ongoing && project.is_duration(&DurationType::Volunteer),
			can_delete: project.status != ProjectStatus::Deleted,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn project(status: &str, duration: &str, total: Option<i64>, current: i64) -> Project {
		serde_json::from_value(json!({
			"id": 1,
			"name": "p",
			"total_amount": total,
			"current_amount": current,
			"status": status,
			"duration_type": duration
		}))
		.unwrap()
	}

	#[rstest]
	#[case("جاري", "مؤقت", Some(100), 10, true, false)]
	#[case("جاري", "فردي", Some(100), 10, true, false)]
	#[case("جاري", "مؤقت", Some(100), 100, false, false)]
	#[case("جاري", "دائم", Some(100), 10, false, false)]
	#[case("جاري", "تطوعي", None, 0, false, true)]
	#[case("منتهي", "تطوعي", None, 0, false, false)]
	#[case("معلق", "مؤقت", Some(100), 10, false, false)]
	fn test_actions(
		#[case] status: &str,
		#[case] duration: &str,
		#[case] total: Option<i64>,
		#[case] current: i64,
		#[case] can_donate: bool,
		#[case] can_complete: bool,
	) {
		let actions = ProjectActions::for_project(&project(status, duration, total, current));
		assert_eq!(actions.can_donate, can_donate);
		assert_eq!(actions.can_complete, can_complete);
		assert!(actions.can_delete);
	}

	#[rstest]
	fn test_deleted_project_cannot_be_deleted_again() {
		let actions = ProjectActions::for_project(&project("محذوف", "مؤقت", Some(1), 0));
		assert!(!actions.can_delete);
	}
}
