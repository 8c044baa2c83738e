//! Charity Admin CLI
//!
//! Terminal shell over the dashboard view-models. Settings come from
//! `CHARITY_ADMIN_*` variables (a `.env` file is read first); the login token
//! is kept in `CHARITY_ADMIN_TOKEN_FILE` between invocations.
//!
//! ## Usage
//!
//! ```bash
//! charity-admin login admin@example.org
//! charity-admin projects list --type education --status all --page 2
//! charity-admin projects donate 12 50
//! charity-admin volunteers ban 7 --yes
//! ```

mod commands;
mod output;
mod prompt;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use charity_admin_types::{
	Choice, DurationType, Priority, ProjectStatus, ProjectType, ReviewStatus,
};

pub(crate) const TOKEN_FILE_VAR: &str = "CHARITY_ADMIN_TOKEN_FILE";
pub(crate) const DEFAULT_TOKEN_FILE: &str = ".charity-admin-token";

#[derive(Parser)]
#[command(name = "charity-admin")]
#[command(about = "Administration shell for the charity dashboard", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,

	/// Answer yes to every confirmation
	#[arg(short, long, global = true)]
	yes: bool,

	/// Token file (defaults to $CHARITY_ADMIN_TOKEN_FILE or .charity-admin-token)
	#[arg(long, value_name = "PATH", global = true)]
	token_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
	/// Log in and keep the token for later commands
	Login {
		#[arg(value_name = "EMAIL")]
		email: String,

		/// Read from stdin when omitted
		#[arg(long)]
		password: Option<String>,
	},

	/// Forget the stored token
	Logout,

	/// Show the dashboard statistics
	Stats,

	/// Execute the monthly donation batch
	MonthlyDonations,

	/// Browse and manage projects
	Projects {
		#[command(subcommand)]
		command: ProjectCommands,
	},

	/// Browse, ban and unblock volunteers
	Volunteers {
		#[command(subcommand)]
		command: VolunteerCommands,
	},

	/// Browse, ban and unblock beneficiaries (by phone number)
	Beneficiaries {
		#[command(subcommand)]
		command: BeneficiaryCommands,
	},

	/// Review volunteer applications
	VolunteerRequests {
		#[command(subcommand)]
		command: VolunteerRequestCommands,
	},

	/// Review beneficiary applications
	BeneficiaryRequests {
		#[command(subcommand)]
		command: BeneficiaryRequestCommands,
	},

	/// Gift donations waiting for hand-over
	Gifts {
		#[command(subcommand)]
		command: GiftCommands,
	},

	/// Moderate feedback
	Feedback {
		#[command(subcommand)]
		command: FeedbackCommands,
	},
}

#[derive(Subcommand)]
pub(crate) enum ProjectCommands {
	/// List projects matching the filters
	List {
		/// Status slug or label, or `all`
		#[arg(long, default_value = "ongoing")]
		status: Choice<ProjectStatus>,

		/// Project type slug or label, or `all`
		#[arg(long = "type", default_value = "health")]
		project_type: Choice<ProjectType>,

		#[arg(long, default_value = "all")]
		priority: Choice<Priority>,

		#[arg(long, default_value = "all")]
		duration: Choice<DurationType>,

		/// Pages to show
		#[arg(long, default_value_t = 1)]
		page: usize,
	},

	/// Donate to a project
	Donate {
		id: u64,
		/// Amount in dollars
		amount: String,
	},

	/// Mark a volunteer project as completed
	Complete { id: u64 },

	/// Delete a project
	Delete { id: u64 },

	/// Set the status of a project
	Status { id: u64, status: ProjectStatus },
}

#[derive(Subcommand)]
pub(crate) enum VolunteerCommands {
	List {
		/// Show the banned tab
		#[arg(long)]
		banned: bool,

		#[arg(long, default_value_t = 1)]
		page: usize,
	},

	Ban { id: u64 },

	Unblock { id: u64 },
}

#[derive(Subcommand)]
pub(crate) enum BeneficiaryCommands {
	List {
		/// Show the banned tab
		#[arg(long)]
		banned: bool,

		#[arg(long, default_value_t = 1)]
		page: usize,
	},

	Ban { phone_number: String },

	Unblock { phone_number: String },
}

#[derive(Subcommand)]
pub(crate) enum VolunteerRequestCommands {
	List {
		/// Review status slug or label, or `all`
		#[arg(long, default_value = "pending")]
		status: Choice<ReviewStatus>,

		#[arg(long, default_value_t = 1)]
		page: usize,
	},

	Approve { id: u64 },

	Reject { id: u64 },
}

#[derive(Subcommand)]
pub(crate) enum BeneficiaryRequestCommands {
	List {
		#[arg(long = "type", default_value = "health")]
		request_type: Choice<ProjectType>,

		#[arg(long, default_value = "pending")]
		status: Choice<ReviewStatus>,

		#[arg(long, default_value_t = 1)]
		page: usize,
	},

	/// Show every field of one request
	Show { id: u64 },

	Accept { id: u64 },

	Reject { id: u64 },
}

#[derive(Subcommand)]
pub(crate) enum GiftCommands {
	List {
		/// Show the delivered tab
		#[arg(long)]
		delivered: bool,

		#[arg(long, default_value_t = 1)]
		page: usize,
	},

	/// Record that a gift was handed over
	Deliver { id: u64 },
}

#[derive(Subcommand)]
pub(crate) enum FeedbackCommands {
	List {
		#[arg(long, default_value = "pending")]
		status: Choice<ReviewStatus>,

		#[arg(long, default_value_t = 1)]
		page: usize,
	},

	Accept { id: u64 },

	Reject { id: u64 },
}

/// `RUST_LOG` wins; otherwise `-v` raises the level of the workspace crates
fn init_tracing(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!(
			"charity_admin_client={level},charity_admin_ui={level},charity_admin_cli={level}"
		))
	});
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

#[tokio::main]
async fn main() {
	dotenv::dotenv().ok();
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let context = commands::Context {
		assume_yes: cli.yes,
		token_file: cli.token_file.unwrap_or_else(|| {
			std::env::var_os(TOKEN_FILE_VAR)
				.map(PathBuf::from)
				.unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE))
		}),
	};

	if let Err(e) = commands::run(cli.command, &context).await {
		eprintln!("{} {:#}", "Error:".red(), e);
		process::exit(1);
	}
}
