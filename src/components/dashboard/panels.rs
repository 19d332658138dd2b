//! Headline figures above and outcome totals beside the visualization.

use leptos::prelude::*;

struct Stat {
	title: &'static str,
	value: &'static str,
	tone: &'static str,
	detail: Option<(&'static str, &'static str)>,
}

const STATS: &[Stat] = &[
	Stat {
		title: "Threat Signal Volume",
		value: "338",
		tone: "#22d3ee",
		detail: Some(("Vertical Threats", "295")),
	},
	Stat {
		title: "Non-Malicious Detections",
		value: "7",
		tone: "#4ade80",
		detail: Some(("MTTI", "4.9s")),
	},
	Stat {
		title: "Escalation",
		value: "0",
		tone: "#f87171",
		detail: Some(("MTTE", "19.2min")),
	},
	Stat {
		title: "MTTI",
		value: "19.2min",
		tone: "#facc15",
		detail: None,
	},
	Stat {
		title: "MTTR",
		value: "14.18min",
		tone: "#c084fc",
		detail: None,
	},
	Stat {
		title: "Cost Saved",
		value: "$7,325",
		tone: "#60a5fa",
		detail: None,
	},
	Stat {
		title: "FTE Saved",
		value: "0.61",
		tone: "#f472b6",
		detail: None,
	},
];

const OUTCOMES: &[(&str, &str, &str)] = &[
	("Escalated", "0", "#4ade80"),
	("Autoresolved", "302", "#facc15"),
];

/// Row of headline metrics.
#[component]
pub fn StatBar() -> impl IntoView {
	let stats = STATS
		.iter()
		.map(|stat| {
			let detail = stat.detail.map(|(label, value)| {
				view! {
					<span class="stat-detail-label">{label}</span>
					<span class="stat-detail-value">{value}</span>
				}
			});
			view! {
				<div class="stat">
					<span class="stat-title">{stat.title}</span>
					<span class="stat-value" style=format!("color: {}", stat.tone)>
						{stat.value}
					</span>
					{detail}
				</div>
			}
		})
		.collect_view();

	view! { <header class="stat-bar">{stats}</header> }
}

/// Escalated and autoresolved totals.
#[component]
pub fn OutcomePanels() -> impl IntoView {
	let panels = OUTCOMES
		.iter()
		.map(|&(title, value, tone)| {
			view! {
				<div class="outcome-panel">
					<div class="outcome-title">{title}</div>
					<div class="outcome-value" style=format!("color: {tone}")>
						{value}
					</div>
				</div>
			}
		})
		.collect_view();

	view! { <div class="outcome-panels">{panels}</div> }
}
