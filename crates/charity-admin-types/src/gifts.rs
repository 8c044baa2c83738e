//! Gift donations addressed to a named recipient

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::wire;

/// A gift paid by a donor and handed over by the organization.
///
/// `delivered` only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftDonation {
	pub id: u64,
	#[serde(default, deserialize_with = "wire::text")]
	pub recipient_name: String,
	#[serde(default, deserialize_with = "wire::text")]
	pub recipient_number: String,
	#[serde(default)]
	pub amount: Decimal,
	#[serde(default, deserialize_with = "wire::flag")]
	pub delivered: bool,
	/// Donor name
	#[serde(default, deserialize_with = "wire::text")]
	pub full_name: String,
	/// Donor email
	#[serde(default, deserialize_with = "wire::text")]
	pub email: String,
}

impl Entity for GiftDonation {
	type Key = u64;

	fn key(&self) -> u64 {
		self.id
	}
}
