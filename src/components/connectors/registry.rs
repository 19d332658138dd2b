//! Shared map from item id to the element rendered for it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Id-keyed handles to mounted anchor elements.
///
/// The presentation layer registers an element when its menu entry mounts and
/// unregisters it on unmount. The layout engine only reads. Clones share the
/// same slots.
pub struct AnchorRegistry<H> {
	slots: Rc<RefCell<HashMap<String, H>>>,
}

impl<H> AnchorRegistry<H> {
	/// Empty registry.
	pub fn new() -> Self {
		Self {
			slots: Rc::new(RefCell::new(HashMap::new())),
		}
	}

	/// Stores `handle` under `id`, returning the handle it replaced.
	pub fn register(&self, id: impl Into<String>, handle: H) -> Option<H> {
		self.slots.borrow_mut().insert(id.into(), handle)
	}

	/// Removes the handle for `id`, returning it if one was registered.
	pub fn unregister(&self, id: &str) -> Option<H> {
		self.slots.borrow_mut().remove(id)
	}

	/// Drops every entry whose id is rejected by `keep`.
	pub fn retain_ids(&self, mut keep: impl FnMut(&str) -> bool) {
		self.slots.borrow_mut().retain(|id, _| keep(id));
	}
}

impl<H: Clone> AnchorRegistry<H> {
	/// Handle registered for `id`. A registry that is being written to at the
	/// same moment reads as empty.
	pub fn get(&self, id: &str) -> Option<H> {
		self.slots.try_borrow().ok()?.get(id).cloned()
	}
}

impl<H> Clone for AnchorRegistry<H> {
	fn clone(&self) -> Self {
		Self {
			slots: Rc::clone(&self.slots),
		}
	}
}

impl<H> Default for AnchorRegistry<H> {
	fn default() -> Self {
		Self::new()
	}
}

impl<H> fmt::Debug for AnchorRegistry<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let ids: Vec<String> = self
			.slots
			.try_borrow()
			.map(|slots| slots.keys().cloned().collect())
			.unwrap_or_default();
		f.debug_struct("AnchorRegistry").field("ids", &ids).finish()
	}
}
