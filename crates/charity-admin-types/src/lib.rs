//! Data model of the charity admin backend
//!
//! Entities mirror the JSON the backend returns; closed value sets decode from
//! their Arabic wire labels. Filter sets narrow a fetched collection the way
//! the dashboard lists do.

pub mod bodies;
pub mod entity;
pub mod enums;
pub mod feedback;
pub mod filters;
pub mod gifts;
pub mod people;
pub mod project;
pub mod requests;
pub mod statistics;
pub mod wire;

pub use bodies::{
	Credentials, IdBody, LoginResponse, NewCharityProject, NewVolunteerProject, PhoneBody,
	PhotoUpload, ProjectFormError, StatusChange,
};
pub use entity::{Bannable, Entity, Reviewable};
pub use enums::{DurationType, Priority, ProjectStatus, ProjectType, ReviewStatus};
pub use feedback::Feedback;
pub use filters::{
	BanFilter, BeneficiaryRequestFilters, Choice, DeliveredFilter, Dimension, Dimensions,
	FilterSet, ProjectFilters, ReviewFilter,
};
pub use gifts::GiftDonation;
pub use people::{Beneficiary, Volunteer};
pub use project::{Project, TypeRef};
pub use requests::{BeneficiaryRequest, VolunteerRequest};
pub use statistics::{BeneficiariesPerYear, MonthlyDonationReport, Statistics};
pub use wire::WireParseError;

pub use rust_decimal::Decimal;
