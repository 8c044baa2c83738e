//! Beneficiary feedback moderated before publication

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Reviewable};
use crate::enums::ReviewStatus;
use crate::wire;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
	pub id: u64,
	#[serde(default, deserialize_with = "wire::text")]
	pub user_name: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub message: String,
	pub status: ReviewStatus,
	#[serde(default)]
	pub created_at: Option<String>,
}

impl Entity for Feedback {
	type Key = u64;

	fn key(&self) -> u64 {
		self.id
	}
}

impl Reviewable for Feedback {
	fn review_status(&self) -> &ReviewStatus {
		&self.status
	}

	fn set_review_status(&mut self, status: ReviewStatus) {
		self.status = status;
	}
}
