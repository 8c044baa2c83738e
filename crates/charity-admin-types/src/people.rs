//! Registered volunteers and beneficiaries

use serde::{Deserialize, Serialize};

use crate::entity::{Bannable, Entity};
use crate::enums::ReviewStatus;
use crate::wire;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
	pub id: u64,
	#[serde(default, deserialize_with = "wire::text")]
	pub full_name: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub email: String,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub phone_number: Option<String>,
	#[serde(default, deserialize_with = "wire::text")]
	pub role: String,
	#[serde(default)]
	pub volunteer_status: Option<ReviewStatus>,
	#[serde(default, deserialize_with = "wire::flag")]
	pub ban: bool,
}

impl Entity for Volunteer {
	type Key = u64;

	fn key(&self) -> u64 {
		self.id
	}
}

impl Bannable for Volunteer {
	fn is_banned(&self) -> bool {
		self.ban
	}

	fn set_banned(&mut self, banned: bool) {
		self.ban = banned;
	}
}

/// A beneficiary account. The backend addresses beneficiaries by phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
	#[serde(default)]
	pub id: Option<u64>,
	#[serde(default, deserialize_with = "wire::text")]
	pub full_name: String,
	#[serde(deserialize_with = "wire::text")]
	pub phone_number: String,
	#[serde(default, deserialize_with = "wire::opt_text")]
	pub email: Option<String>,
	#[serde(default, deserialize_with = "wire::flag")]
	pub ban: bool,
}

impl Entity for Beneficiary {
	type Key = String;

	fn key(&self) -> String {
		self.phone_number.clone()
	}
}

impl Bannable for Beneficiary {
	fn is_banned(&self) -> bool {
		self.ban
	}

	fn set_banned(&mut self, banned: bool) {
		self.ban = banned;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(r#"{"id": 1, "full_name": "علي", "email": "a@b.c", "role": "volunteer", "ban": 1}"#, true)]
	#[case(r#"{"id": 1, "full_name": "علي", "email": "a@b.c", "role": "volunteer", "ban": 0}"#, false)]
	fn test_volunteer_ban_flag(#[case] json: &str, #[case] banned: bool) {
		let volunteer: Volunteer = serde_json::from_str(json).unwrap();
		assert_eq!(volunteer.is_banned(), banned);
		assert_eq!(volunteer.volunteer_status, None);
	}

	#[rstest]
	fn test_beneficiary_keyed_by_phone() {
		let beneficiary: Beneficiary =
			serde_json::from_str(r#"{"full_name": "منى", "phone_number": 944123, "ban": "0"}"#)
				.unwrap();
		assert_eq!(beneficiary.key(), "944123");
		assert!(!beneficiary.is_banned());
	}
}
