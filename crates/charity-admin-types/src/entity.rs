//! Capabilities shared by listable entities

use std::fmt::Debug;
use std::hash::Hash;

use crate::enums::ReviewStatus;

/// An entity a list view can hold and address by key
pub trait Entity: Clone + Send + Sync + 'static {
	/// Identity used for in-flight tracking and optimistic patches
	type Key: Clone + Eq + Hash + Debug + Send + Sync + 'static;

	fn key(&self) -> Self::Key;
}

/// A person that can be banned and unblocked
pub trait Bannable: Entity {
	fn is_banned(&self) -> bool;

	fn set_banned(&mut self, banned: bool);
}

/// An entry that goes through the pending/accepted/rejected review
pub trait Reviewable: Entity {
	fn review_status(&self) -> &ReviewStatus;

	fn set_review_status(&mut self, status: ReviewStatus);
}
