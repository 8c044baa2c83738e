//! Statistics dashboard

use std::sync::Arc;

use futures_signals::signal::Mutable;
use tracing::info;

use charity_admin_client::AdminApi;
use charity_admin_types::{BeneficiariesPerYear, Statistics};

use crate::error::{ViewError, ViewResult};
use crate::messages::{self, Action};

pub struct DashboardState {
	api: AdminApi,
	pub statistics: Mutable<Option<Statistics>>,
	/// Beneficiaries per year, oldest first as sent by the backend
	pub series: Mutable<Vec<BeneficiariesPerYear>>,
	pub is_loading: Mutable<bool>,
	pub error: Mutable<Option<String>>,
	/// Backend message of the last monthly batch
	pub monthly_message: Mutable<Option<String>>,
	pub running_monthly: Mutable<bool>,
}

impl DashboardState {
	pub fn new(api: AdminApi) -> Arc<Self> {
		Arc::new(Self {
			api,
			statistics: Mutable::new(None),
			series: Mutable::new(Vec::new()),
			is_loading: Mutable::new(false),
			error: Mutable::new(None),
			monthly_message: Mutable::new(None),
			running_monthly: Mutable::new(false),
		})
	}

	/// Loads the snapshot and the yearly series
	pub async fn load(&self) -> ViewResult<()> {
		self.is_loading.set(true);
		self.error.set(None);
		let statistics = self.api.statistics();
		let result = futures::try_join!(statistics.snapshot(), statistics.beneficiaries_per_year())
			.map_err(ViewError::from);
		self.is_loading.set(false);

		match result {
			Ok((snapshot, series)) => {
				self.statistics.set(Some(snapshot));
				self.series.set(series);
				Ok(())
			}
			Err(err) => {
				self.error
					.set(Some(messages::failure(Action::LoadStatistics, &err)));
				Err(err)
			}
		}
	}

	pub fn total_beneficiaries(&self) -> u64 {
		BeneficiariesPerYear::total(&self.series.lock_ref())
	}

	/// Runs the monthly donation batch once; a second call while it runs is refused
	pub async fn run_monthly(&self) -> ViewResult<String> {
		if self.running_monthly.replace(true) {
			return Err(ViewError::ActionInFlight);
		}
		let result = self.api.monthly().run().await;
		self.running_monthly.set(false);

		match result {
			Ok(report) => {
				info!(message = %report.message, "monthly donations executed");
				self.monthly_message.set(Some(report.message.clone()));
				Ok(report.message)
			}
			Err(err) => {
				let err = ViewError::from(err);
				self.error
					.set(Some(messages::failure(Action::MonthlyDonations, &err)));
				Err(err)
			}
		}
	}
}
