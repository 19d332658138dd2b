//! Reactive wiring of the layout engine into a Leptos component.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Nav;
use leptos::prelude::*;
use leptos::svg::Svg;
use log::{debug, trace, warn};
use send_wrapper::SendWrapper;
use web_sys::Element;

use super::dom::DomGeometry;
use super::engine::ConnectorLayoutEngine;
use super::layout::FanStyle;
use super::registry::AnchorRegistry;
use super::triggers::{Dispatch, TriggerSubscription};
use super::types::{AnchorItem, ConnectorCurve, ConvergencePoint};

/// Fixed layout inputs of the connector fan.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConnectorConfig {
	/// Where every connector ends.
	pub convergence: ConvergencePoint,
	/// Shape and colors of the fan.
	pub style: FanStyle,
	/// How triggers reach the recompute.
	pub dispatch: Dispatch,
}

/// Keeps a curve list in sync with the rendered menu.
///
/// Curves are laid out once `surface` and `container` mount, then again on
/// every window resize, ancestor scroll, container resize and item-list
/// change. The returned signal is owned by the calling component and the
/// triggers are released when it unmounts.
pub fn use_connector_layout(
	items: Signal<Vec<AnchorItem>>,
	anchors: AnchorRegistry<Element>,
	surface: NodeRef<Svg>,
	container: NodeRef<Nav>,
	config: ConnectorConfig,
) -> ReadSignal<Vec<ConnectorCurve>> {
	let (curves, set_curves) = signal(Vec::<ConnectorCurve>::new());
	let subscription: Rc<RefCell<Option<TriggerSubscription>>> = Rc::new(RefCell::new(None));
	let (subscription_attach, subscription_items) = (subscription.clone(), subscription.clone());

	Effect::new(move |_| {
		let (Some(surface), Some(container)) = (surface.get(), container.get()) else {
			return;
		};
		let (surface, container): (Element, Element) = (surface.into(), container.into());
		let engine = ConnectorLayoutEngine::new(
			DomGeometry::new(surface, anchors.clone()),
			config.convergence,
			config.style,
		);
		let recompute: Rc<dyn Fn()> = Rc::new(move || publish(&engine, items, curves, set_curves));

		// release the old triggers before wiring new ones
		subscription_attach.borrow_mut().take();
		match TriggerSubscription::attach(&container, recompute.clone(), config.dispatch) {
			Ok(attached) => *subscription_attach.borrow_mut() = Some(attached),
			Err(err) => warn!("connector layout will not track changes: {err}"),
		}
		recompute();
	});

	Effect::new(move |_| {
		items.track();
		if let Some(attached) = subscription_items.borrow().as_ref() {
			attached.fire();
		}
	});

	let teardown = SendWrapper::new(subscription);
	on_cleanup(move || {
		teardown.borrow_mut().take();
	});

	curves
}

fn publish(
	engine: &ConnectorLayoutEngine<DomGeometry>,
	items: Signal<Vec<AnchorItem>>,
	curves: ReadSignal<Vec<ConnectorCurve>>,
	set_curves: WriteSignal<Vec<ConnectorCurve>>,
) {
	let Some(next) = items.with_untracked(|items| engine.recompute(items)) else {
		trace!("drawing surface detached, keeping previous connectors");
		return;
	};
	if curves.with_untracked(|prev| *prev != next) {
		debug!("publishing {} connectors", next.len());
		set_curves.set(next);
	}
}

/// Draws the published curves. Must be placed inside the surface `<svg>`.
#[component]
pub fn ConnectorPaths(
	/// Curves to draw, in order.
	#[prop(into)]
	curves: Signal<Vec<ConnectorCurve>>,
) -> impl IntoView {
	view! {
		<g class="connector-curves">
			{move || {
				curves
					.get()
					.into_iter()
					.map(|curve| {
						view! {
							<path
								d=curve.path.to_svg_path()
								stroke=curve.color
								stroke-width="2.2"
								stroke-linecap="round"
								stroke-linejoin="round"
								fill="none"
								opacity="0.78"
								filter="url(#glow)"
							/>
						}
					})
					.collect_view()
			}}
		</g>
	}
}
