//! Source menu whose entries register themselves as connector anchors.

use leptos::html::{Button, Nav};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::Element;

use crate::components::connectors::{AnchorItem, AnchorRegistry};

type SharedRegistry = SendWrapper<AnchorRegistry<Element>>;

/// Vertical list of sources; each entry is a connector anchor.
#[component]
pub fn SourceMenu(
	/// Sources, in display order.
	#[prop(into)]
	items: Signal<Vec<AnchorItem>>,
	/// Receives each entry's button while it is mounted.
	anchors: AnchorRegistry<Element>,
	/// Bound to the `<nav>`, whose resizes relayout the connectors.
	container: NodeRef<Nav>,
) -> impl IntoView {
	let anchors: SharedRegistry = SendWrapper::new(anchors);
	let prune = anchors.clone();

	// entries removed from the list unregister on cleanup; this catches ids
	// that vanish before their entry ever mounted
	Effect::new(move |_| {
		items.with(|items| prune.retain_ids(|id| items.iter().any(|item| item.id == id)));
	});

	view! {
		<nav class="source-menu" node_ref=container>
			{move || {
				items
					.get()
					.into_iter()
					.map(|item| view! { <MenuAnchor item=item anchors=anchors.clone() /> })
					.collect_view()
			}}
		</nav>
	}
}

#[component]
fn MenuAnchor(item: AnchorItem, anchors: SharedRegistry) -> impl IntoView {
	let button_ref = NodeRef::<Button>::new();
	let (register_id, register) = (item.id.clone(), anchors.clone());
	Effect::new(move |_| {
		if let Some(button) = button_ref.get() {
			register.register(register_id.clone(), button.into());
		}
	});

	let release_id = item.id.clone();
	on_cleanup(move || {
		anchors.unregister(&release_id);
	});

	view! {
		<button node_ref=button_ref class="menu-entry" data-anchor=item.id>
			<ShieldIcon color=item.color_token />
			<span class="menu-label">{item.label}</span>
		</button>
	}
}

/// Lucide-style shield glyph.
#[component]
pub fn ShieldIcon(
	/// Stroke color.
	#[prop(into)]
	color: String,
) -> impl IntoView {
	view! {
		<svg
			class="menu-icon"
			viewBox="0 0 24 24"
			width="16"
			height="16"
			fill="none"
			stroke=color
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
		>
			<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
		</svg>
	}
}

/// Non-anchor entry at the foot of the sidebar.
#[component]
pub fn SettingsEntry() -> impl IntoView {
	view! {
		<div class="sidebar-footer">
			<button class="menu-entry">
				<svg
					class="menu-icon"
					viewBox="0 0 24 24"
					width="16"
					height="16"
					fill="none"
					stroke="currentColor"
					stroke-width="2"
				>
					<circle cx="12" cy="12" r="3" />
					<path d="M12 2v3M12 19v3M2 12h3M19 12h3M4.9 4.9l2.1 2.1M17 17l2.1 2.1M4.9 19.1 7 17M17 7l2.1-2.1" />
				</svg>
				<span class="menu-label">"Settings"</span>
			</button>
		</div>
	}
}
