//! Dashboard aggregates

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wire;

/// Snapshot returned by `statistics`. Missing fields decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
	pub total_donations: Decimal,
	pub accepted_volunteers: u64,
	pub beneficiaries: u64,
	pub donors: u64,
	pub projects_count: u64,
	pub health_projects_balance: Decimal,
	pub educational_projects_balance: Decimal,
	pub nutritional_projects_balance: Decimal,
	pub housing_projects_balance: Decimal,
	pub religious_projects_balance: Decimal,
}

impl Statistics {
	/// Balance per project category, in dashboard order
	pub fn balances(&self) -> [(&'static str, Decimal); 5] {
		[
			("health", self.health_projects_balance),
			("educational", self.educational_projects_balance),
			("nutritional", self.nutritional_projects_balance),
			("housing", self.housing_projects_balance),
			("religious", self.religious_projects_balance),
		]
	}

	pub fn total_balance(&self) -> Decimal {
		self.balances().iter().map(|(_, balance)| *balance).sum()
	}
}

/// One point of the beneficiaries-per-year series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiariesPerYear {
	#[serde(deserialize_with = "wire::text")]
	pub year: String,
	#[serde(default)]
	pub beneficiaries: u64,
}

impl BeneficiariesPerYear {
	pub fn total(series: &[Self]) -> u64 {
		series.iter().map(|point| point.beneficiaries).sum()
	}
}

/// Result of running the monthly donation batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDonationReport {
	#[serde(default, deserialize_with = "wire::text")]
	pub message: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_partial_snapshot_defaults_to_zero() {
		let stats: Statistics = serde_json::from_str(
			r#"{"total_donations": 1200.5, "donors": 4, "health_projects_balance": 100, "housing_projects_balance": "50.5"}"#,
		)
		.unwrap();
		assert_eq!(stats.donors, 4);
		assert_eq!(stats.projects_count, 0);
		assert_eq!(stats.total_balance(), Decimal::new(1505, 1));
	}

	#[rstest]
	fn test_series_total() {
		let series: Vec<BeneficiariesPerYear> = serde_json::from_str(
			r#"[{"year": 2023, "beneficiaries": 10}, {"year": "2024", "beneficiaries": 32}]"#,
		)
		.unwrap();
		assert_eq!(series[0].year, "2023");
		assert_eq!(BeneficiariesPerYear::total(&series), 42);
	}
}
