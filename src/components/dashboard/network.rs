//! Static decoration behind the connectors. Coordinates are in surface pixels.

use leptos::prelude::*;

struct Link {
	from: (f64, f64),
	to: (f64, f64),
	color: &'static str,
	width: f64,
	opacity: f64,
	glow: bool,
}

struct Node {
	at: (f64, f64),
	r: f64,
	fill: &'static str,
	ring: &'static str,
	opacity: f64,
}

const fn link(
	from: (f64, f64),
	to: (f64, f64),
	color: &'static str,
	opacity: f64,
	glow: bool,
) -> Link {
	Link {
		from,
		to,
		color,
		width: 1.0,
		opacity,
		glow,
	}
}

const LINKS: &[Link] = &[
	Link {
		from: (130.0, 300.0),
		to: (640.0, 300.0),
		color: "#3b82f6",
		width: 2.0,
		opacity: 0.6,
		glow: true,
	},
	link((100.0, 300.0), (500.0, 250.0), "#1e40af", 0.4, false),
	link((100.0, 300.0), (500.0, 350.0), "#7c3aed", 0.4, false),
	link((100.0, 300.0), (450.0, 200.0), "#ec4899", 0.3, false),
	link((500.0, 250.0), (700.0, 300.0), "#06b6d4", 0.5, true),
	link((500.0, 350.0), (700.0, 300.0), "#10b981", 0.5, true),
	link((700.0, 300.0), (900.0, 200.0), "#3b82f6", 0.4, false),
	link((700.0, 300.0), (900.0, 350.0), "#8b5cf6", 0.4, false),
	link((700.0, 300.0), (950.0, 450.0), "#f59e0b", 0.3, false),
	link((300.0, 500.0), (700.0, 300.0), "#ef4444", 0.3, false),
	link((1000.0, 100.0), (700.0, 300.0), "#06b6d4", 0.3, false),
];

const NODES: &[Node] = &[
	Node {
		at: (900.0, 200.0),
		r: 25.0,
		fill: "#10b981",
		ring: "#34d399",
		opacity: 0.7,
	},
	Node {
		at: (950.0, 450.0),
		r: 20.0,
		fill: "#f59e0b",
		ring: "#fbbf24",
		opacity: 0.6,
	},
	Node {
		at: (300.0, 500.0),
		r: 20.0,
		fill: "#ef4444",
		ring: "#f87171",
		opacity: 0.6,
	},
	Node {
		at: (1000.0, 100.0),
		r: 18.0,
		fill: "#06b6d4",
		ring: "#22d3ee",
		opacity: 0.6,
	},
	Node {
		at: (900.0, 350.0),
		r: 22.0,
		fill: "#7c3aed",
		ring: "#a78bfa",
		opacity: 0.6,
	},
	Node {
		at: (450.0, 200.0),
		r: 18.0,
		fill: "#ec4899",
		ring: "#f472b6",
		opacity: 0.6,
	},
	Node {
		at: (500.0, 250.0),
		r: 16.0,
		fill: "#3b82f6",
		ring: "#60a5fa",
		opacity: 0.5,
	},
	Node {
		at: (500.0, 350.0),
		r: 16.0,
		fill: "#10b981",
		ring: "#6ee7b7",
		opacity: 0.5,
	},
];

/// Central node the hub link runs into.
const CORE: (f64, f64, f64) = (700.0, 300.0, 60.0);

/// Glow filter and core gradient referenced by the surface.
#[component]
pub fn SurfaceDefs() -> impl IntoView {
	view! {
		<defs>
			<filter id="glow">
				<feGaussianBlur stdDeviation="6" result="coloredBlur" />
				<feMerge>
					<feMergeNode in="coloredBlur" />
					<feMergeNode in="SourceGraphic" />
				</feMerge>
			</filter>
			<radialGradient id="coreGradient">
				<stop offset="0%" stop-color="#3b82f6" />
				<stop offset="50%" stop-color="#1e40af" />
				<stop offset="100%" stop-color="#0c1221" />
			</radialGradient>
		</defs>
	}
}

/// Links, satellite nodes, the core and the hub the connectors converge on.
#[component]
pub fn NetworkBackdrop(
	/// Center of the convergence hub.
	hub: (f64, f64),
	/// Radius of the hub circle.
	hub_radius: f64,
) -> impl IntoView {
	let links = LINKS
		.iter()
		.map(|l| {
			view! {
				<line
					x1=l.from.0.to_string()
					y1=l.from.1.to_string()
					x2=l.to.0.to_string()
					y2=l.to.1.to_string()
					stroke=l.color
					stroke-width=l.width.to_string()
					opacity=l.opacity.to_string()
					filter=l.glow.then_some("url(#glow)")
				/>
			}
		})
		.collect_view();

	let nodes = NODES
		.iter()
		.map(|n| {
			let (cx, cy) = (n.at.0.to_string(), n.at.1.to_string());
			view! {
				<circle
					cx=cx.clone()
					cy=cy.clone()
					r=n.r.to_string()
					fill=n.fill
					opacity=n.opacity.to_string()
					filter="url(#glow)"
				/>
				<circle
					cx=cx
					cy=cy
					r=(n.r - 4.0).to_string()
					fill="none"
					stroke=n.ring
					stroke-width="2"
					opacity=(n.opacity - 0.1).to_string()
				/>
			}
		})
		.collect_view();

	let (core_x, core_y, core_r) = CORE;
	view! {
		<g class="network-backdrop">
			{links}
			{nodes}
			<circle
				cx=core_x.to_string()
				cy=core_y.to_string()
				r=core_r.to_string()
				fill="url(#coreGradient)"
				filter="url(#glow)"
			/>
			<circle
				class="convergence-hub"
				cx=hub.0.to_string()
				cy=hub.1.to_string()
				r=hub_radius.to_string()
				fill="url(#coreGradient)"
				stroke="#60a5fa"
				stroke-width="1.5"
			/>
		</g>
	}
}
