//! Load-more pagination
//!
//! Lists grow by a fixed page size; nothing is re-fetched when a page is added.

/// Items added per "load more"
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	/// Number of items per page
	pub per_page: usize,
	/// Pages currently shown (1-indexed)
	pub current_page: usize,
}

impl Default for Pagination {
	fn default() -> Self {
		Self::new(PAGE_SIZE)
	}
}

impl Pagination {
	pub fn new(per_page: usize) -> Self {
		Self {
			per_page: per_page.max(1),
			current_page: 1,
		}
	}

	/// Upper bound of shown items
	pub fn limit(&self) -> usize {
		self.current_page.saturating_mul(self.per_page)
	}

	/// `min(page × per_page, total)`
	pub fn visible_count(&self, total: usize) -> usize {
		self.limit().min(total)
	}

	pub fn has_more(&self, total: usize) -> bool {
		self.visible_count(total) < total
	}

	/// Shows one more page if there is anything left
	pub fn load_more(&mut self, total: usize) -> bool {
		if self.has_more(total) {
			self.current_page += 1;
			true
		} else {
			false
		}
	}

	pub fn reset(&mut self) {
		self.current_page = 1;
	}
}
