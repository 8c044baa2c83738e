//! Volunteer and beneficiary applications awaiting review

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::{Entity, Reviewable};
use crate::enums::{ProjectType, ReviewStatus};
use crate::project::TypeRef;
use crate::wire;

/// An application to volunteer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerRequest {
	pub id: u64,
	#[serde(default, deserialize_with = "wire::text")]
	pub full_name: String,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub phone_number: Option<String>,
	#[serde(default, deserialize_with = "wire::text")]
	pub age: String,
	pub volunteer_status: ReviewStatus,
	#[serde(default, deserialize_with = "wire::text")]
	pub place_of_residence: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub gender: String,
	#[serde(
		default,
		rename = "your_last_educational_qualification",
		deserialize_with = "wire::text"
	)]
	pub last_educational_qualification: String,
	#[serde(default, rename = "your_studying_domain", deserialize_with = "wire::text")]
	pub studying_domain: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub volunteering_hours: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub purpose_of_volunteering: String,
}

impl Entity for VolunteerRequest {
	type Key = u64;

	fn key(&self) -> u64 {
		self.id
	}
}

impl Reviewable for VolunteerRequest {
	fn review_status(&self) -> &ReviewStatus {
		&self.volunteer_status
	}

	fn set_review_status(&mut self, status: ReviewStatus) {
		self.volunteer_status = status;
	}
}

/// An application for support.
///
/// Request forms differ per type (housing, education, food...); fields this
/// struct does not name are kept in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryRequest {
	pub id: u64,
	#[serde(default, deserialize_with = "wire::text")]
	pub full_name: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub phone_number: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub age: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub place_of_residence: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub gender: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub family_size: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub health_status: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub income_source: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub description: String,
	pub status: ReviewStatus,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub severity_level: Option<String>,
	#[serde(default)]
	pub type_id: Option<u64>,
	#[serde(default, rename = "type")]
	pub request_type: Option<TypeRef>,
	#[serde(default)]
	pub created_at: Option<String>,
	#[serde(default)]
	pub updated_at: Option<String>,
	#[serde(flatten)]
	pub details: Map<String, Value>,
}

impl BeneficiaryRequest {
	pub fn type_name(&self) -> Option<&ProjectType> {
		self.request_type.as_ref().map(|type_ref| &type_ref.name)
	}

	/// Extra form fields rendered as label/value text, skipping nulls
	pub fn detail_fields(&self) -> impl Iterator<Item = (&str, String)> {
		self.details.iter().filter_map(|(key, value)| match value {
			Value::Null => None,
			Value::String(text) => Some((key.as_str(), text.clone())),
			other => Some((key.as_str(), other.to_string())),
		})
	}
}

impl Entity for BeneficiaryRequest {
	type Key = u64;

	fn key(&self) -> u64 {
		self.id
	}
}

impl Reviewable for BeneficiaryRequest {
	fn review_status(&self) -> &ReviewStatus {
		&self.status
	}

	fn set_review_status(&mut self, status: ReviewStatus) {
		self.status = status;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_volunteer_request_renames() {
		let json = r#"{
			"id": 3,
			"full_name": "أحمد",
			"phone_number": null,
			"age": 24,
			"volunteer_status": "معلق",
			"place_of_residence": "دمشق",
			"gender": "ذكر",
			"your_last_educational_qualification": "جامعي",
			"your_studying_domain": "هندسة",
			"volunteering_hours": "10",
			"purpose_of_volunteering": "المساعدة"
		}"#;
		let decoded: VolunteerRequest = serde_json::from_str(json).unwrap();
		assert_eq!(decoded.age, "24");
		assert_eq!(decoded.last_educational_qualification, "جامعي");
		assert_eq!(decoded.studying_domain, "هندسة");
		assert!(decoded.review_status().is_open());
	}

	#[rstest]
	fn test_beneficiary_request_keeps_unknown_fields() {
		let json = r#"{
			"id": 9,
			"full_name": "سارة",
			"phone_number": "0999",
			"status": "مقبول",
			"severity_level": "عالي",
			"type_id": 4,
			"type": {"id": 4, "name": "سكني"},
			"housing_type": "إيجار",
			"rooms": 2,
			"notes": null
		}"#;
		let decoded: BeneficiaryRequest = serde_json::from_str(json).unwrap();
		assert_eq!(decoded.type_name(), Some(&ProjectType::Housing));
		assert_eq!(decoded.status, ReviewStatus::Accepted);

		let mut details: Vec<(&str, String)> = decoded.detail_fields().collect();
		details.sort();
		assert_eq!(
			details,
			vec![("housing_type", "إيجار".to_string()), ("rooms", "2".to_string())]
		);
	}
}
