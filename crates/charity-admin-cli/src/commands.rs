//! Subcommand execution
//!
//! Every command builds the page view-model the dashboard would use, loads it
//! and then drives the same operations a click would.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::debug;

use charity_admin_client::{AdminApi, ApiError, ClientSettings, FileCredentialStore};
use charity_admin_types::{
	BeneficiaryRequestFilters, Choice, Entity, FilterSet, ProjectFilters, ProjectStatus,
	ReviewFilter, ReviewStatus,
};
use charity_admin_ui::{
	BeneficiariesPage, BeneficiaryRequestsPage, ConfirmModalState, DashboardState,
	FeedbackPage, GiftDonationsPage, ListViewState, LoginState, ProjectsPage, ReviewCommand,
	ViewError, VolunteerRequestsPage, VolunteersPage,
};

use crate::output;
use crate::prompt;
use crate::{
	BeneficiaryCommands, BeneficiaryRequestCommands, Commands, FeedbackCommands, GiftCommands,
	ProjectCommands, VolunteerCommands, VolunteerRequestCommands,
};

pub struct Context {
	pub assume_yes: bool,
	pub token_file: PathBuf,
}

impl Context {
	fn api(&self) -> Result<AdminApi> {
		let settings = ClientSettings::from_env().context("invalid CHARITY_ADMIN_* settings")?;
		debug!(server = %settings.server_url, token_file = %self.token_file.display(), "client settings");
		let credentials = Arc::new(FileCredentialStore::new(self.token_file.clone()));
		Ok(AdminApi::with_credentials(settings, credentials)?)
	}

	/// Asks about the pending confirmation; a refusal cancels it
	fn approves<A>(&self, modal: &ConfirmModalState<A>) -> Result<bool> {
		if self.assume_yes || prompt::confirm(&modal.message.get_cloned())? {
			return Ok(true);
		}
		modal.cancel();
		println!("cancelled");
		Ok(false)
	}
}

pub async fn run(command: Commands, context: &Context) -> Result<()> {
	let api = context.api()?;
	match command {
		Commands::Login { email, password } => login(&api, email, password).await,
		Commands::Logout => {
			LoginState::new(api).logout()?;
			output::success("logged out");
			Ok(())
		}
		Commands::Stats => stats(&api).await,
		Commands::MonthlyDonations => {
			let message = DashboardState::new(api).run_monthly().await?;
			output::success(&message);
			Ok(())
		}
		Commands::Projects { command } => projects(&api, command, context).await,
		Commands::Volunteers { command } => volunteers(&api, command, context).await,
		Commands::Beneficiaries { command } => beneficiaries(&api, command, context).await,
		Commands::VolunteerRequests { command } => {
			volunteer_requests(&api, command, context).await
		}
		Commands::BeneficiaryRequests { command } => {
			beneficiary_requests(&api, command, context).await
		}
		Commands::Gifts { command } => gifts(&api, command).await,
		Commands::Feedback { command } => feedback(&api, command).await,
	}
}

async fn login(api: &AdminApi, email: String, password: Option<String>) -> Result<()> {
	let state = LoginState::new(api.clone());
	state.email.set(email);
	state.password.set(match password {
		Some(password) => password,
		None => prompt::password()?,
	});
	if let Err(err) = state.submit().await {
		return Err(surface(err, state.error.get_cloned()));
	}
	output::success("logged in");
	Ok(())
}

async fn stats(api: &AdminApi) -> Result<()> {
	let dashboard = DashboardState::new(api.clone());
	if let Err(err) = dashboard.load().await {
		return Err(surface(err, dashboard.error.get_cloned()));
	}
	if let Some(statistics) = dashboard.statistics.get_cloned() {
		for line in output::statistics(&statistics, &dashboard.series.lock_ref()) {
			println!("{line}");
		}
	}
	Ok(())
}

/// Prints one page of a list after showing `page` pages
fn print_list<T, F>(list: &ListViewState<T, F>, page: usize, row: impl Fn(&T) -> String)
where
	T: Entity,
	F: FilterSet<T>,
{
	for _ in 1..page {
		if !list.load_more() {
			break;
		}
	}
	let visible = list.visible();
	if visible.is_empty() {
		output::empty();
		return;
	}
	for item in &visible {
		println!("{}", row(item));
	}
	println!(
		"{}",
		output::footer(visible.len(), list.filtered_count(), list.has_more())
	);
}

/// The view-model's message when it wrote one, else the error itself
fn surface(err: ViewError, message: Option<String>) -> anyhow::Error {
	match message {
		Some(message) => anyhow::Error::new(err).context(message),
		None => anyhow::Error::new(err),
	}
}

async fn projects(api: &AdminApi, command: ProjectCommands, context: &Context) -> Result<()> {
	match command {
		ProjectCommands::List {
			status,
			project_type,
			priority,
			duration,
			page,
		} => {
			let filters = ProjectFilters {
				status,
				project_type,
				priority,
				duration,
			};
			let view = ProjectsPage::with_filters(api.clone(), filters);
			if let Err(err) = view.load().await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			print_list(view.list(), page, output::project);
			Ok(())
		}
		action => project_action(api, action, context).await,
	}
}

async fn project_action(api: &AdminApi, command: ProjectCommands, context: &Context) -> Result<()> {
	let view = projects_for_action(api).await?;
	let result = match command {
		ProjectCommands::List { .. } => return Ok(()),
		ProjectCommands::Donate { id, amount } => {
			view.open_donate(id)?;
			view.donate.set_amount(amount);
			view.submit_donation().await.map_err(|err| {
				let message = view.donate.error.get_cloned();
				surface(err, message)
			})?;
			if let Some(notice) = view.notice.get_cloned() {
				output::success(&notice);
			}
			return Ok(());
		}
		ProjectCommands::Complete { id } => {
			view.request_complete(id)?;
			if !context.approves(&view.confirm)? {
				return Ok(());
			}
			view.confirm().await
		}
		ProjectCommands::Delete { id } => {
			view.request_delete(id)?;
			if !context.approves(&view.confirm)? {
				return Ok(());
			}
			view.confirm().await
		}
		ProjectCommands::Status { id, status } => view.change_status(id, status).await,
	};
	if let Err(err) = result {
		return Err(surface(err, view.list().error.get_cloned()));
	}
	output::success("done");
	Ok(())
}

/// Loads every project the action may address.
///
/// The per-dimension endpoints cannot list everything; ongoing projects are
/// the ones actions apply to.
async fn projects_for_action(api: &AdminApi) -> Result<Arc<ProjectsPage>> {
	let view = ProjectsPage::with_filters(api.clone(), ProjectFilters::all());
	match view.load().await {
		Ok(()) => Ok(view),
		Err(ViewError::Api(ApiError::UnsupportedQuery(_))) => {
			let view = ProjectsPage::with_filters(
				api.clone(),
				ProjectFilters::all().with_status(ProjectStatus::Ongoing),
			);
			view.load().await?;
			Ok(view)
		}
		Err(err) => Err(surface(err, view.list().error.get_cloned())),
	}
}

async fn volunteers(api: &AdminApi, command: VolunteerCommands, context: &Context) -> Result<()> {
	let view = VolunteersPage::new(api.clone());
	match command {
		VolunteerCommands::List { banned, page } => {
			if let Err(err) = view.show_banned(banned).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			print_list(view.list(), page, output::volunteer);
		}
		VolunteerCommands::Ban { id } => {
			view.load().await?;
			view.request_ban(id).context("volunteer is not in the active tab")?;
			if !context.approves(&view.confirm)? {
				return Ok(());
			}
			if let Err(err) = view.confirm_ban().await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			output::success("volunteer banned");
		}
		VolunteerCommands::Unblock { id } => {
			view.show_banned(true).await?;
			if let Err(err) = view.unblock(id).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			output::success("volunteer unblocked");
		}
	}
	Ok(())
}

async fn beneficiaries(
	api: &AdminApi,
	command: BeneficiaryCommands,
	context: &Context,
) -> Result<()> {
	let view = BeneficiariesPage::new(api.clone());
	match command {
		BeneficiaryCommands::List { banned, page } => {
			if let Err(err) = view.show_banned(banned).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			print_list(view.list(), page, output::beneficiary);
		}
		BeneficiaryCommands::Ban { phone_number } => {
			view.load().await?;
			view.request_ban(&phone_number)
				.context("beneficiary is not in the active tab")?;
			if !context.approves(&view.confirm)? {
				return Ok(());
			}
			if let Err(err) = view.confirm_ban().await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			output::success("beneficiary banned");
		}
		BeneficiaryCommands::Unblock { phone_number } => {
			view.show_banned(true).await?;
			if let Err(err) = view.unblock(&phone_number).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			output::success("beneficiary unblocked");
		}
	}
	Ok(())
}

async fn volunteer_requests(
	api: &AdminApi,
	command: VolunteerRequestCommands,
	context: &Context,
) -> Result<()> {
	let view = VolunteerRequestsPage::new(api.clone());
	let review = match command {
		VolunteerRequestCommands::List { status, page } => {
			if let Err(err) = view.set_filter(ReviewFilter::status(status)).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			print_list(view.list(), page, output::volunteer_request);
			return Ok(());
		}
		VolunteerRequestCommands::Approve { id } => ReviewCommand::Accept(id),
		VolunteerRequestCommands::Reject { id } => ReviewCommand::Reject(id),
	};

	view.load().await?;
	view.request_review(review)
		.context("request is not pending")?;
	if !context.approves(&view.confirm)? {
		return Ok(());
	}
	if let Err(err) = view.confirm().await {
		return Err(surface(err, view.list().error.get_cloned()));
	}
	if let Some(notice) = view.notice.get_cloned() {
		output::success(&notice);
	}
	Ok(())
}

async fn beneficiary_requests(
	api: &AdminApi,
	command: BeneficiaryRequestCommands,
	context: &Context,
) -> Result<()> {
	let view = BeneficiaryRequestsPage::new(api.clone());
	let review = match command {
		BeneficiaryRequestCommands::List {
			request_type,
			status,
			page,
		} => {
			let filters = BeneficiaryRequestFilters {
				request_type,
				status,
			};
			if let Err(err) = view.set_filters(filters).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			print_list(view.list(), page, output::beneficiary_request);
			return Ok(());
		}
		BeneficiaryRequestCommands::Show { id } => {
			if let Err(err) = view.show_request(id).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			if let Some(request) = view.detail.selected() {
				for line in output::beneficiary_request_detail(&request) {
					println!("{line}");
				}
			}
			return Ok(());
		}
		BeneficiaryRequestCommands::Accept { id } => ReviewCommand::Accept(id),
		BeneficiaryRequestCommands::Reject { id } => ReviewCommand::Reject(id),
	};

	let pending = BeneficiaryRequestFilters::default()
		.with_type(Choice::All)
		.with_status(ReviewStatus::Pending);
	view.set_filters(pending).await?;
	view.request_review(review)
		.context("request is not pending")?;
	if !context.approves(&view.confirm)? {
		return Ok(());
	}
	if let Err(err) = view.confirm().await {
		return Err(surface(err, view.list().error.get_cloned()));
	}
	if let Some(notice) = view.notice.get_cloned() {
		output::success(&notice);
	}
	Ok(())
}

async fn gifts(api: &AdminApi, command: GiftCommands) -> Result<()> {
	let view = GiftDonationsPage::new(api.clone());
	match command {
		GiftCommands::List { delivered, page } => {
			if let Err(err) = view.show_delivered(delivered).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			print_list(view.list(), page, output::gift);
		}
		GiftCommands::Deliver { id } => {
			view.load().await?;
			if let Err(err) = view.mark_delivered(id).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			output::success("gift marked as delivered");
		}
	}
	Ok(())
}

async fn feedback(api: &AdminApi, command: FeedbackCommands) -> Result<()> {
	let view = FeedbackPage::new(api.clone());
	let result = match command {
		FeedbackCommands::List { status, page } => {
			if let Err(err) = view.set_filter(ReviewFilter::status(status)).await {
				return Err(surface(err, view.list().error.get_cloned()));
			}
			print_list(view.list(), page, output::feedback);
			return Ok(());
		}
		FeedbackCommands::Accept { id } => {
			view.load().await?;
			view.accept(id).await
		}
		FeedbackCommands::Reject { id } => {
			view.load().await?;
			view.reject(id).await
		}
	};
	if let Err(err) = result {
		return Err(surface(err, view.list().error.get_cloned()));
	}
	output::success("done");
	Ok(())
}
