//! Terminal rendering of entities

use colored::Colorize;

use charity_admin_types::{
	BeneficiariesPerYear, Beneficiary, BeneficiaryRequest, Feedback, GiftDonation, Project,
	Statistics, Volunteer, VolunteerRequest,
};
use charity_admin_ui::ProjectActions;

/// Footer under a paginated listing
pub fn footer(shown: usize, total: usize, has_more: bool) -> String {
	let summary = format!("{shown} of {total}");
	if has_more {
		format!("{} (use --page to see more)", summary.dimmed())
	} else {
		summary.dimmed().to_string()
	}
}

pub fn empty() {
	println!("{}", "nothing to show".dimmed());
}

pub fn success(message: &str) {
	println!("{} {}", "✓".green(), message);
}

pub fn project(project: &Project) -> String {
	let progress = match (project.shows_progress(), project.progress_percent()) {
		(true, Some(percent)) => format!(
			" {}/{} ({percent}%)",
			project.current_amount,
			project.total_amount.unwrap_or_default()
		),
		_ => String::new(),
	};
	let actions = ProjectActions::for_project(project);
	let mut tags = Vec::new();
	if actions.can_donate {
		tags.push("donate");
	}
	if actions.can_complete {
		tags.push("complete");
	}
	format!(
		"{:>5}  {}  [{}] {}{}  {}",
		project.id.to_string().bright_blue(),
		project.name.bold(),
		project.status,
		project
			.type_name()
			.map(ToString::to_string)
			.unwrap_or_default(),
		progress,
		tags.join(",").dimmed()
	)
}

pub fn volunteer(volunteer: &Volunteer) -> String {
	format!(
		"{:>5}  {}  {}  {}{}",
		volunteer.id.to_string().bright_blue(),
		volunteer.full_name.bold(),
		volunteer.email,
		volunteer.phone_number.as_deref().unwrap_or("-"),
		banned_tag(volunteer.ban)
	)
}

pub fn beneficiary(beneficiary: &Beneficiary) -> String {
	format!(
		"{}  {}  {}{}",
		beneficiary.phone_number.bright_blue(),
		beneficiary.full_name.bold(),
		beneficiary.email.as_deref().unwrap_or("-"),
		banned_tag(beneficiary.ban)
	)
}

fn banned_tag(banned: bool) -> String {
	if banned {
		format!("  {}", "banned".red())
	} else {
		String::new()
	}
}

pub fn volunteer_request(request: &VolunteerRequest) -> String {
	format!(
		"{:>5}  {}  [{}]  {}  {}h  {}",
		request.id.to_string().bright_blue(),
		request.full_name.bold(),
		request.volunteer_status,
		request.studying_domain,
		request.volunteering_hours,
		request.purpose_of_volunteering.dimmed()
	)
}

pub fn beneficiary_request(request: &BeneficiaryRequest) -> String {
	format!(
		"{:>5}  {}  [{}] {}  {}",
		request.id.to_string().bright_blue(),
		request.full_name.bold(),
		request.status,
		request
			.type_name()
			.map(ToString::to_string)
			.unwrap_or_default(),
		request.phone_number
	)
}

/// Every field of a request, one per line
pub fn beneficiary_request_detail(request: &BeneficiaryRequest) -> Vec<String> {
	let mut lines = vec![beneficiary_request(request)];
	let known = [
		("age", &request.age),
		("place_of_residence", &request.place_of_residence),
		("gender", &request.gender),
		("family_size", &request.family_size),
		("health_status", &request.health_status),
		("income_source", &request.income_source),
		("description", &request.description),
	];
	for (label, value) in known {
		if !value.is_empty() {
			lines.push(format!("  {}: {}", label.dimmed(), value));
		}
	}
	if let Some(severity) = &request.severity_level {
		lines.push(format!("  {}: {}", "severity_level".dimmed(), severity));
	}
	for (label, value) in request.detail_fields() {
		lines.push(format!("  {}: {}", label.dimmed(), value));
	}
	lines
}

pub fn gift(gift: &GiftDonation) -> String {
	let state = if gift.delivered {
		"delivered".green().to_string()
	} else {
		"pending".yellow().to_string()
	};
	format!(
		"{:>5}  {} ({})  ${}  from {}  {}",
		gift.id.to_string().bright_blue(),
		gift.recipient_name.bold(),
		gift.recipient_number,
		gift.amount,
		gift.full_name,
		state
	)
}

pub fn feedback(entry: &Feedback) -> String {
	format!(
		"{:>5}  {}  [{}]  {}",
		entry.id.to_string().bright_blue(),
		entry.user_name.bold(),
		entry.status,
		entry.message
	)
}

pub fn statistics(statistics: &Statistics, series: &[BeneficiariesPerYear]) -> Vec<String> {
	let mut lines = vec![
		format!("{:<22}{}", "total donations", statistics.total_donations),
		format!("{:<22}{}", "donors", statistics.donors),
		format!("{:<22}{}", "accepted volunteers", statistics.accepted_volunteers),
		format!("{:<22}{}", "beneficiaries", statistics.beneficiaries),
		format!("{:<22}{}", "projects", statistics.projects_count),
		String::new(),
	];
	for (category, balance) in statistics.balances() {
		lines.push(format!("{:<22}{}", format!("{category} balance"), balance));
	}
	lines.push(format!(
		"{:<22}{}",
		"total balance".bold(),
		statistics.total_balance()
	));
	if !series.is_empty() {
		lines.push(String::new());
		for point in series {
			lines.push(format!("{:<22}{}", point.year, point.beneficiaries));
		}
	}
	lines
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_footer_mentions_paging_only_when_more() {
		colored::control::set_override(false);
		assert_eq!(footer(6, 6, false), "6 of 6");
		assert_eq!(footer(6, 9, true), "6 of 9 (use --page to see more)");
	}

	#[rstest]
	fn test_statistics_lines_include_total_balance() {
		colored::control::set_override(false);
		let snapshot = Statistics {
			health_projects_balance: 10.into(),
			housing_projects_balance: 5.into(),
			..Statistics::default()
		};
		let lines = statistics(&snapshot, &[]);
		assert!(lines.iter().any(|line| line.starts_with("total balance") && line.ends_with("15")));
	}
}
