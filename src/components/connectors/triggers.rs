//! Layout-invalidation sources and their scoped registration.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ResizeObserver, Window};

/// A source of layout invalidation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
	/// `resize` on the window.
	WindowResize,
	/// Capture-phase `scroll` on the window, so nested scroll containers count.
	AncestorScroll,
	/// Box-size change of the observed container.
	ContainerResize,
}

impl Trigger {
	/// Every source, in registration order.
	pub const ALL: [Trigger; 3] = [
		Trigger::WindowResize,
		Trigger::AncestorScroll,
		Trigger::ContainerResize,
	];
}

impl fmt::Display for Trigger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Trigger::WindowResize => "window resize",
			Trigger::AncestorScroll => "ancestor scroll",
			Trigger::ContainerResize => "container resize",
		})
	}
}

/// How a trigger reaches the recompute entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dispatch {
	/// Recompute inside every trigger.
	Immediate,
	/// Coalesce bursts into one recompute on the next animation frame.
	#[default]
	PerFrame,
}

/// Failure to wire the triggers up.
#[derive(Debug, Error)]
pub enum AttachError {
	/// Not running in a browser window.
	#[error("no window available")]
	NoWindow,
	/// The browser rejected a listener or observer.
	#[error("failed to register {trigger} trigger: {message}")]
	Register {
		/// Source that failed.
		trigger: Trigger,
		/// Browser-provided reason.
		message: String,
	},
}

impl AttachError {
	fn register(trigger: Trigger, err: JsValue) -> Self {
		AttachError::Register {
			trigger,
			message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
		}
	}
}

/// Collapses many requests per frame into a single call.
struct FrameCoalescer {
	window: Window,
	recompute: Rc<dyn Fn()>,
	pending: Cell<Option<i32>>,
	on_frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameCoalescer {
	fn new(window: Window, recompute: Rc<dyn Fn()>) -> Rc<Self> {
		let coalescer = Rc::new(Self {
			window,
			recompute,
			pending: Cell::new(None),
			on_frame: RefCell::new(None),
		});
		let weak: Weak<Self> = Rc::downgrade(&coalescer);
		*coalescer.on_frame.borrow_mut() = Some(Closure::new(move || {
			if let Some(c) = weak.upgrade() {
				c.pending.set(None);
				(c.recompute)();
			}
		}));
		coalescer
	}

	fn request(&self) {
		if self.pending.get().is_some() {
			return;
		}
		let on_frame = self.on_frame.borrow();
		let Some(cb) = on_frame.as_ref() else {
			return;
		};
		match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(handle) => self.pending.set(Some(handle)),
			Err(err) => {
				warn!("requestAnimationFrame rejected ({err:?}), recomputing inline");
				(self.recompute)();
			}
		}
	}
}

impl Drop for FrameCoalescer {
	fn drop(&mut self) {
		if let Some(handle) = self.pending.take() {
			let _ = self.window.cancel_animation_frame(handle);
		}
	}
}

/// Every registered trigger, released on drop.
pub struct TriggerSubscription {
	window: Window,
	route: Rc<dyn Fn()>,
	listener: Closure<dyn FnMut()>,
	observer: Option<ResizeObserver>,
	registered: Vec<Trigger>,
}

impl TriggerSubscription {
	/// Routes all three triggers to `recompute`.
	///
	/// On error the triggers registered so far are released before returning.
	pub fn attach(
		container: &Element,
		recompute: Rc<dyn Fn()>,
		dispatch: Dispatch,
	) -> Result<Self, AttachError> {
		let window = web_sys::window().ok_or(AttachError::NoWindow)?;
		let route: Rc<dyn Fn()> = match dispatch {
			Dispatch::Immediate => recompute,
			Dispatch::PerFrame => {
				let coalescer = FrameCoalescer::new(window.clone(), recompute);
				Rc::new(move || coalescer.request()) as Rc<dyn Fn()>
			}
		};
		let route_listener = route.clone();
		let listener = Closure::<dyn FnMut()>::new(move || route_listener());

		let mut subscription = Self {
			window,
			route,
			listener,
			observer: None,
			registered: Vec::with_capacity(Trigger::ALL.len()),
		};
		for trigger in Trigger::ALL {
			subscription.register(trigger, container)?;
		}
		info!("connector triggers attached ({dispatch:?})");
		Ok(subscription)
	}

	fn register(&mut self, trigger: Trigger, container: &Element) -> Result<(), AttachError> {
		let callback: &js_sys::Function = self.listener.as_ref().unchecked_ref();
		match trigger {
			Trigger::WindowResize => self
				.window
				.add_event_listener_with_callback("resize", callback),
			Trigger::AncestorScroll => self
				.window
				.add_event_listener_with_callback_and_bool("scroll", callback, true),
			Trigger::ContainerResize => ResizeObserver::new(callback).map(|observer| {
				observer.observe(container);
				self.observer = Some(observer);
			}),
		}
		.map_err(|err| AttachError::register(trigger, err))?;
		self.registered.push(trigger);
		Ok(())
	}

	/// Requests a recompute the same way a trigger would.
	pub fn fire(&self) {
		(self.route)();
	}

	/// Removes every registered trigger, returning how many were released.
	fn release(&mut self) -> usize {
		let callback: &js_sys::Function = self.listener.as_ref().unchecked_ref();
		let registered = std::mem::take(&mut self.registered);
		for &trigger in &registered {
			let released = match trigger {
				Trigger::WindowResize => self
					.window
					.remove_event_listener_with_callback("resize", callback),
				Trigger::AncestorScroll => self
					.window
					.remove_event_listener_with_callback_and_bool("scroll", callback, true),
				Trigger::ContainerResize => {
					if let Some(observer) = self.observer.take() {
						observer.disconnect();
					}
					Ok(())
				}
			};
			if let Err(err) = released {
				warn!("failed to release {trigger} trigger: {err:?}");
			}
		}
		registered.len()
	}
}

impl Drop for TriggerSubscription {
	fn drop(&mut self) {
		if self.release() > 0 {
			info!("connector triggers detached");
		}
	}
}
