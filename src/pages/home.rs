use leptos::html::Nav;
use leptos::prelude::*;
use leptos::svg::Svg;
use web_sys::Element;

use crate::components::connectors::{
	AnchorItem, AnchorRegistry, ConnectorConfig, ConnectorPaths, use_connector_layout,
};
use crate::components::dashboard::{
	NetworkBackdrop, OutcomePanels, SettingsEntry, SourceMenu, StatBar, SurfaceDefs,
};

const HUB_RADIUS: f64 = 15.0;

/// Sources listed in the sidebar, top to bottom.
fn source_items() -> Vec<AnchorItem> {
	[
		("sentinel", "SentinelOne", "#a855f7"),
		("crowdstrike", "CrowdStrike", "#3b82f6"),
		("checkpoint", "CheckPoint", "#ef4444"),
		("paloalto", "Palo Alto", "#f97316"),
		("fortinet", "Fortinet", "#eab308"),
		("proofpoint", "Proofpoint", "#ec4899"),
		("azure", "Azure", "#06b6d4"),
		("okta", "Okta", "#22c55e"),
		("aws", "AWS", "#fb923c"),
		("gcp", "GCP", "#60a5fa"),
		("trendmicro", "TrendMicro", "#f87171"),
		("other", "Other Sources", "#94a3b8"),
	]
	.into_iter()
	.map(|(id, label, color)| AnchorItem::new(id, label, color))
	.collect()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let items = Signal::derive(source_items);
	let anchors = AnchorRegistry::<Element>::new();
	let menu_ref = NodeRef::<Nav>::new();
	let surface_ref = NodeRef::<Svg>::new();
	let config = ConnectorConfig::default();
	let hub = (config.convergence.center.x, config.convergence.center.y);

	let curves = use_connector_layout(items, anchors.clone(), surface_ref, menu_ref, config);

	view! {
		<div class="dashboard">
			<StatBar />
			<div class="dashboard-body">
				<aside class="sidebar">
					<SourceMenu items=items anchors=anchors container=menu_ref />
					<SettingsEntry />
				</aside>
				<section class="visualization">
					<svg node_ref=surface_ref class="network-surface">
						<SurfaceDefs />
						<ConnectorPaths curves=curves />
						<NetworkBackdrop hub=hub hub_radius=HUB_RADIUS />
					</svg>
					<OutcomePanels />
				</section>
			</div>
		</div>
	}
}
