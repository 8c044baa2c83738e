//! Closed value sets exchanged with the backend

use crate::wire::wire_enum;

wire_enum! {
	/// Lifecycle status of a project. `Deleted` is a soft status, the row stays.
	pub enum ProjectStatus {
		/// Accepting donations or volunteers
		Ongoing => ("جاري", "ongoing"),
		/// Waiting for review
		Pending => ("معلق", "pending"),
		/// Fully funded or completed
		Finished => ("منتهي", "finished"),
		/// Logically removed
		Deleted => ("محذوف", "deleted"),
	}
}

wire_enum! {
	/// Project priority
	pub enum Priority {
		Low => ("منخفض", "low"),
		Medium => ("متوسط", "medium"),
		High => ("مرتفع", "high"),
		Critical => ("حرج", "critical"),
	}
}

wire_enum! {
	/// How a project runs over time
	pub enum DurationType {
		/// Funded once, then finished
		Temporary => ("مؤقت", "temporary"),
		/// Funded continuously
		Permanent => ("دائم", "permanent"),
		/// Staffed by volunteers, completed manually
		Volunteer => ("تطوعي", "volunteer"),
		/// A single beneficiary's need
		Individual => ("فردي", "individual"),
	}
}

wire_enum! {
	/// Category a project or beneficiary request belongs to
	pub enum ProjectType {
		Health => ("صحي", "health"),
		Religious => ("ديني", "religious"),
		Education => ("تعليمي", "education"),
		Housing => ("سكني", "housing"),
		Food => ("غذائي", "food"),
		Field => ("ميداني", "field"),
		Remote => ("عن بعد", "remote"),
	}
}

wire_enum! {
	/// Review state shared by volunteer requests, beneficiary requests and feedback.
	///
	/// Transitions are one-way: `Pending` to `Accepted` or `Rejected`.
	pub enum ReviewStatus {
		Pending => ("معلق", "pending"),
		Accepted => ("مقبول", "accepted"),
		Rejected => ("مرفوض", "rejected"),
	}
}

impl ReviewStatus {
	/// Whether an admin may still accept or reject
	pub fn is_open(&self) -> bool {
		matches!(self, Self::Pending)
	}
}
