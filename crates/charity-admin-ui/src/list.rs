//! List view-model
//!
//! Holds one fetched collection and derives what the page shows: items
//! matching every active filter, in fetch order, cut to the pages loaded so
//! far. Mutations patch the collection before the request completes and put
//! the original back if it fails.

use std::collections::HashSet;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures_signals::signal::{Mutable, Signal};
use futures_signals::signal_vec::MutableVec;
use tracing::{debug, warn};

use charity_admin_client::ApiResult;
use charity_admin_types::{Dimensions, Entity, FilterSet};

use crate::error::{ViewError, ViewResult};
use crate::messages::{self, Action};
use crate::pagination::Pagination;

/// Result of one fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
	pub items: Vec<T>,
	/// Dimensions the server already narrowed
	pub applied: Dimensions,
}

impl<T> Fetched<T> {
	pub fn new(items: Vec<T>, applied: Dimensions) -> Self {
		Self { items, applied }
	}
}

/// Where a list gets its collection from
#[async_trait]
pub trait ListSource<T, F>: Send + Sync {
	async fn fetch(&self, filters: &F) -> ApiResult<Fetched<T>>;
}

/// Local effect of a mutation
pub enum Patch<T> {
	Update(Box<dyn FnOnce(&mut T) + Send>),
	Remove,
}

impl<T> Patch<T> {
	pub fn update(patch: impl FnOnce(&mut T) + Send + 'static) -> Self {
		Self::Update(Box::new(patch))
	}

	pub fn remove() -> Self {
		Self::Remove
	}
}

/// What happens after a mutation succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterSuccess {
	/// Trust the local patch
	#[default]
	Keep,
	/// Reload the collection
	Reload,
}

pub struct ListViewState<T: Entity, F: FilterSet<T>> {
	/// Fetched collection, in server order
	pub items: MutableVec<T>,
	pub filters: Mutable<F>,
	pub pagination: Mutable<Pagination>,
	/// Keys whose description is expanded
	pub expanded: Mutable<HashSet<T::Key>>,
	pub is_loading: Mutable<bool>,
	/// Error message for the page
	pub error: Mutable<Option<String>>,
	/// Keys with an outstanding request
	pub in_flight: Mutable<HashSet<T::Key>>,
	/// Dimensions the last fetch pushed to the server; `None` before the first fetch
	applied: Mutable<Option<Dimensions>>,
	generation: AtomicU64,
	source: Arc<dyn ListSource<T, F>>,
	load_action: Action,
}

impl<T, F> ListViewState<T, F>
where
	T: Entity,
	F: FilterSet<T>,
{
	pub fn new(source: Arc<dyn ListSource<T, F>>, filters: F, load_action: Action) -> Arc<Self> {
		Arc::new(Self {
			items: MutableVec::new(),
			filters: Mutable::new(filters),
			pagination: Mutable::new(Pagination::default()),
			expanded: Mutable::new(HashSet::new()),
			is_loading: Mutable::new(false),
			error: Mutable::new(None),
			in_flight: Mutable::new(HashSet::new()),
			applied: Mutable::new(None),
			generation: AtomicU64::new(0),
			source,
			load_action,
		})
	}

	/// Fetches the collection for the current filters.
	///
	/// A response superseded by a newer fetch is dropped and this returns `Ok`.
	pub async fn load(&self) -> ViewResult<()> {
		let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
		let filters = self.filters.get_cloned();
		self.is_loading.set(true);
		self.error.set(None);

		let result = self.source.fetch(&filters).await;

		if self.generation.load(Ordering::SeqCst) != generation {
			warn!(generation, "dropping stale list response");
			return Ok(());
		}
		self.is_loading.set(false);

		match result {
			Ok(fetched) => {
				debug!(count = fetched.items.len(), "list loaded");
				self.prune_expanded(&fetched.items);
				self.items.lock_mut().replace_cloned(fetched.items);
				self.applied.set(Some(fetched.applied));
				Ok(())
			}
			Err(err) => {
				let err = ViewError::from(err);
				self.error.set(Some(messages::failure(self.load_action, &err)));
				Err(err)
			}
		}
	}

	/// Replaces the filters and resets to the first page.
	///
	/// Fetches when nothing was loaded yet or a dimension the server applied
	/// changed, otherwise filters the loaded collection locally.
	pub async fn set_filters(&self, filters: F) -> ViewResult<()> {
		let previous = self.filters.replace(filters.clone());
		self.pagination.lock_mut().reset();

		let changed = previous.changed_dimensions(&filters);
		let needs_fetch = match &*self.applied.lock_ref() {
			None => true,
			Some(applied) => changed.iter().any(|dimension| applied.contains(dimension)),
		};
		if needs_fetch {
			self.load().await
		} else {
			debug!(?changed, "filtering locally");
			Ok(())
		}
	}

	/// Items the page shows
	pub fn visible(&self) -> Vec<T> {
		let limit = self.pagination.get().limit();
		let filters = self.filters.lock_ref();
		self.items
			.lock_ref()
			.iter()
			.filter(|item| filters.matches(item))
			.take(limit)
			.cloned()
			.collect()
	}

	/// Items matching the filters, ignoring pagination
	pub fn filtered_count(&self) -> usize {
		let filters = self.filters.lock_ref();
		self.items
			.lock_ref()
			.iter()
			.filter(|item| filters.matches(item))
			.count()
	}

	pub fn visible_count(&self) -> usize {
		self.pagination.get().visible_count(self.filtered_count())
	}

	/// Whether "load more" is offered
	pub fn has_more(&self) -> bool {
		self.pagination.get().has_more(self.filtered_count())
	}

	/// Shows one more page; returns `false` when everything is shown
	pub fn load_more(&self) -> bool {
		let total = self.filtered_count();
		self.pagination.lock_mut().load_more(total)
	}

	pub fn get(&self, key: &T::Key) -> Option<T> {
		self.items
			.lock_ref()
			.iter()
			.find(|item| &item.key() == key)
			.cloned()
	}

	pub fn len(&self) -> usize {
		self.items.lock_ref().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn toggle_expanded(&self, key: &T::Key) {
		let mut expanded = self.expanded.lock_mut();
		if !expanded.remove(key) {
			expanded.insert(key.clone());
		}
	}

	pub fn is_expanded(&self, key: &T::Key) -> bool {
		self.expanded.lock_ref().contains(key)
	}

	pub fn is_in_flight(&self, key: &T::Key) -> bool {
		self.in_flight.lock_ref().contains(key)
	}

	pub fn set_error(&self, message: impl Into<String>) {
		self.error.set(Some(message.into()));
	}

	pub fn clear_error(&self) {
		self.error.set(None);
	}

	pub fn is_loading_signal(&self) -> impl Signal<Item = bool> + use<T, F> {
		self.is_loading.signal()
	}

	pub fn error_signal(&self) -> impl Signal<Item = Option<String>> + use<T, F> {
		self.error.signal_cloned()
	}

	/// Applies `patch` to the item under `key`, then awaits `request`.
	///
	/// A second mutation of the same key while one is outstanding is refused.
	/// On failure the original item is put back at its position, the error slot
	/// receives the message for `action` and the collection is reloaded.
	pub async fn mutate<Fut>(
		&self,
		key: T::Key,
		patch: Patch<T>,
		action: Action,
		after: AfterSuccess,
		request: Fut,
	) -> ViewResult<()>
	where
		Fut: Future<Output = ApiResult<()>>,
	{
		if !self.in_flight.lock_mut().insert(key.clone()) {
			return Err(ViewError::ActionInFlight);
		}

		let snapshot = {
			let mut items = self.items.lock_mut();
			let found = items
				.iter()
				.position(|item| item.key() == key)
				.map(|index| (index, items[index].clone()));
			if let Some((index, original)) = &found {
				match patch {
					Patch::Update(apply) => {
						let mut patched = original.clone();
						apply(&mut patched);
						items.set_cloned(*index, patched);
					}
					Patch::Remove => {
						items.remove(*index);
						self.expanded.lock_mut().remove(&key);
					}
				}
			}
			found
		};
		let Some((index, original)) = snapshot else {
			self.in_flight.lock_mut().remove(&key);
			return Err(ViewError::UnknownItem);
		};

		let result = {
			let _guard = InFlightGuard {
				in_flight: &self.in_flight,
				key: &key,
			};
			request.await
		};

		match result {
			Ok(()) => {
				if after == AfterSuccess::Reload {
					if let Err(err) = self.load().await {
						debug!(error = %err, "reload after mutation failed");
					}
				}
				Ok(())
			}
			Err(err) => {
				warn!(?key, ?action, error = %err, "reverting optimistic update");
				self.restore(index, original);
				let err = ViewError::from(err);
				let resync = !err.api().is_some_and(|api| api.requires_login());
				if resync {
					if let Err(reload) = self.load().await {
						debug!(error = %reload, "resync after failed mutation failed");
					}
				}
				self.error.set(Some(messages::failure(action, &err)));
				Err(err)
			}
		}
	}

	fn prune_expanded(&self, items: &[T]) {
		let mut expanded = self.expanded.lock_mut();
		if expanded.is_empty() {
			return;
		}
		let keys: HashSet<T::Key> = items.iter().map(Entity::key).collect();
		expanded.retain(|key| keys.contains(key));
	}

	fn restore(&self, index: usize, original: T) {
		let key = original.key();
		let mut items = self.items.lock_mut();
		match items.iter().position(|item| item.key() == key) {
			Some(current) => {
				items.set_cloned(current, original);
			}
			None => {
				let at = index.min(items.len());
				items.insert_cloned(at, original);
			}
		}
	}
}

/// Releases an in-flight key even when the mutation future is dropped
struct InFlightGuard<'a, K: Eq + Hash> {
	in_flight: &'a Mutable<HashSet<K>>,
	key: &'a K,
}

impl<K: Eq + Hash> Drop for InFlightGuard<'_, K> {
	fn drop(&mut self) {
		self.in_flight.lock_mut().remove(self.key);
	}
}
