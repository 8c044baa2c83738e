//! Filter dimensions and per-resource filter sets
//!
//! Every list narrows its collection along a fixed set of dimensions. A
//! dimension is either `All` or pinned to one value; an item is shown only when
//! it matches every pinned dimension.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::entity::{Bannable, Reviewable};
use crate::enums::{DurationType, Priority, ProjectStatus, ProjectType, ReviewStatus};
use crate::gifts::GiftDonation;
use crate::project::Project;
use crate::requests::BeneficiaryRequest;

/// Label of the "all" choice in filter controls
pub const ALL_LABEL: &str = "الكل";

/// Value of a single filter dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Choice<T> {
	/// Matches everything
	#[default]
	All,
	Only(T),
}

impl<T: PartialEq> Choice<T> {
	pub fn accepts(&self, value: &T) -> bool {
		match self {
			Self::All => true,
			Self::Only(expected) => expected == value,
		}
	}

	/// Like [`accepts`](Self::accepts) for a field the payload may omit.
	/// A missing value only passes `All`.
	pub fn accepts_opt(&self, value: Option<&T>) -> bool {
		match (self, value) {
			(Self::All, _) => true,
			(Self::Only(expected), Some(value)) => expected == value,
			(Self::Only(_), None) => false,
		}
	}
}

impl<T> Choice<T> {
	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}

	pub fn as_only(&self) -> Option<&T> {
		match self {
			Self::All => None,
			Self::Only(value) => Some(value),
		}
	}
}

impl<T> From<T> for Choice<T> {
	fn from(value: T) -> Self {
		Self::Only(value)
	}
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str(ALL_LABEL),
			Self::Only(value) => value.fmt(f),
		}
	}
}

impl<T: FromStr> FromStr for Choice<T> {
	type Err = T::Err;

	/// `all` (any case) or the "all" label select everything
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.eq_ignore_ascii_case("all") || trimmed == ALL_LABEL {
			return Ok(Self::All);
		}
		trimmed.parse().map(Self::Only)
	}
}

/// A filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
	Status,
	Type,
	Priority,
	Duration,
	Ban,
	Delivered,
}

impl Dimension {
	/// The four dimensions of the projects list
	pub const PROJECT: [Dimension; 4] = [
		Dimension::Status,
		Dimension::Type,
		Dimension::Priority,
		Dimension::Duration,
	];
}

/// A set of dimensions, e.g. those a fetch pushed to the server
pub type Dimensions = BTreeSet<Dimension>;

/// The active filters of one list
pub trait FilterSet<T>: Clone + PartialEq + Send + Sync + 'static {
	/// AND over every pinned dimension
	fn matches(&self, item: &T) -> bool;

	/// Dimensions whose value differs between `self` and `other`
	fn changed_dimensions(&self, other: &Self) -> Dimensions;
}

/// Filters of the projects page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilters {
	pub status: Choice<ProjectStatus>,
	pub project_type: Choice<ProjectType>,
	pub priority: Choice<Priority>,
	pub duration: Choice<DurationType>,
}

impl Default for ProjectFilters {
	/// Ongoing health projects of any priority and duration
	fn default() -> Self {
		Self {
			status: Choice::Only(ProjectStatus::Ongoing),
			project_type: Choice::Only(ProjectType::Health),
			priority: Choice::All,
			duration: Choice::All,
		}
	}
}

impl ProjectFilters {
	/// No dimension pinned
	pub fn all() -> Self {
		Self {
			status: Choice::All,
			project_type: Choice::All,
			priority: Choice::All,
			duration: Choice::All,
		}
	}

	pub fn with_status(mut self, status: impl Into<Choice<ProjectStatus>>) -> Self {
		self.status = status.into();
		self
	}

	pub fn with_type(mut self, project_type: impl Into<Choice<ProjectType>>) -> Self {
		self.project_type = project_type.into();
		self
	}

	pub fn with_priority(mut self, priority: impl Into<Choice<Priority>>) -> Self {
		self.priority = priority.into();
		self
	}

	pub fn with_duration(mut self, duration: impl Into<Choice<DurationType>>) -> Self {
		self.duration = duration.into();
		self
	}

	/// Whether `dimension` is pinned to a value
	pub fn is_pinned(&self, dimension: Dimension) -> bool {
		match dimension {
			Dimension::Status => !self.status.is_all(),
			Dimension::Type => !self.project_type.is_all(),
			Dimension::Priority => !self.priority.is_all(),
			Dimension::Duration => !self.duration.is_all(),
			Dimension::Ban | Dimension::Delivered => false,
		}
	}

	/// Query string of the filter-bag endpoint. `All` dimensions are omitted.
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::new();
		if let Some(status) = self.status.as_only() {
			pairs.push(("status", status.to_string()));
		}
		if let Some(priority) = self.priority.as_only() {
			pairs.push(("priority", priority.to_string()));
		}
		if let Some(project_type) = self.project_type.as_only() {
			pairs.push(("type", project_type.to_string()));
		}
		if let Some(duration) = self.duration.as_only() {
			pairs.push(("duration_type", duration.to_string()));
		}
		pairs
	}
}

impl FilterSet<Project> for ProjectFilters {
	fn matches(&self, project: &Project) -> bool {
		let type_matches = match &self.project_type {
			Choice::All => true,
			Choice::Only(project_type) => project.matches_type(project_type),
		};
		self.status.accepts(&project.status)
			&& type_matches
			&& self.priority.accepts_opt(project.priority.as_ref())
			&& self.duration.accepts_opt(project.duration_type.as_ref())
	}

	fn changed_dimensions(&self, other: &Self) -> Dimensions {
		let mut changed = Dimensions::new();
		if self.status != other.status {
			changed.insert(Dimension::Status);
		}
		if self.project_type != other.project_type {
			changed.insert(Dimension::Type);
		}
		if self.priority != other.priority {
			changed.insert(Dimension::Priority);
		}
		if self.duration != other.duration {
			changed.insert(Dimension::Duration);
		}
		changed
	}
}

/// Banned / not banned tab of the people pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BanFilter {
	pub banned: bool,
}

impl BanFilter {
	pub fn banned(banned: bool) -> Self {
		Self { banned }
	}
}

impl<T: Bannable> FilterSet<T> for BanFilter {
	fn matches(&self, person: &T) -> bool {
		person.is_banned() == self.banned
	}

	fn changed_dimensions(&self, other: &Self) -> Dimensions {
		if self.banned == other.banned {
			Dimensions::new()
		} else {
			Dimensions::from([Dimension::Ban])
		}
	}
}

/// Delivered / not delivered tab of the gifts page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveredFilter {
	pub delivered: bool,
}

impl DeliveredFilter {
	pub fn delivered(delivered: bool) -> Self {
		Self { delivered }
	}
}

impl FilterSet<GiftDonation> for DeliveredFilter {
	fn matches(&self, gift: &GiftDonation) -> bool {
		gift.delivered == self.delivered
	}

	fn changed_dimensions(&self, other: &Self) -> Dimensions {
		if self.delivered == other.delivered {
			Dimensions::new()
		} else {
			Dimensions::from([Dimension::Delivered])
		}
	}
}

/// Review status tab of volunteer requests and feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFilter {
	pub status: Choice<ReviewStatus>,
}

impl Default for ReviewFilter {
	fn default() -> Self {
		Self {
			status: Choice::Only(ReviewStatus::Pending),
		}
	}
}

impl ReviewFilter {
	pub fn status(status: impl Into<Choice<ReviewStatus>>) -> Self {
		Self {
			status: status.into(),
		}
	}
}

impl<T: Reviewable> FilterSet<T> for ReviewFilter {
	fn matches(&self, item: &T) -> bool {
		self.status.accepts(item.review_status())
	}

	fn changed_dimensions(&self, other: &Self) -> Dimensions {
		if self.status == other.status {
			Dimensions::new()
		} else {
			Dimensions::from([Dimension::Status])
		}
	}
}

/// Filters of the beneficiary requests page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeneficiaryRequestFilters {
	pub request_type: Choice<ProjectType>,
	pub status: Choice<ReviewStatus>,
}

impl Default for BeneficiaryRequestFilters {
	fn default() -> Self {
		Self {
			request_type: Choice::Only(ProjectType::Health),
			status: Choice::Only(ReviewStatus::Pending),
		}
	}
}

impl BeneficiaryRequestFilters {
	pub fn with_type(mut self, request_type: impl Into<Choice<ProjectType>>) -> Self {
		self.request_type = request_type.into();
		self
	}

	pub fn with_status(mut self, status: impl Into<Choice<ReviewStatus>>) -> Self {
		self.status = status.into();
		self
	}
}

impl FilterSet<BeneficiaryRequest> for BeneficiaryRequestFilters {
	fn matches(&self, request: &BeneficiaryRequest) -> bool {
		let type_matches = match (&self.request_type, request.type_name()) {
			(Choice::All, _) | (Choice::Only(_), None) => true,
			(Choice::Only(expected), Some(actual)) => expected == actual,
		};
		type_matches && self.status.accepts(&request.status)
	}

	fn changed_dimensions(&self, other: &Self) -> Dimensions {
		let mut changed = Dimensions::new();
		if self.request_type != other.request_type {
			changed.insert(Dimension::Type);
		}
		if self.status != other.status {
			changed.insert(Dimension::Status);
		}
		changed
	}
}
