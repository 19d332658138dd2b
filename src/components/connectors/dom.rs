//! Browser-backed [`SurfaceGeometry`].

use web_sys::{DomRect, Element};

use super::engine::SurfaceGeometry;
use super::registry::AnchorRegistry;
use super::types::Point;

/// Inner glyph whose right edge gives a tighter connector start than the
/// anchor's own box.
const ICON_SELECTOR: &str = "svg";

/// Live DOM measurement through `getBoundingClientRect`.
pub struct DomGeometry {
	surface: Element,
	anchors: AnchorRegistry<Element>,
}

impl DomGeometry {
	/// Measures relative to `surface`, resolving anchors through `anchors`.
	pub fn new(surface: Element, anchors: AnchorRegistry<Element>) -> Self {
		Self { surface, anchors }
	}
}

impl SurfaceGeometry for DomGeometry {
	fn surface_origin(&self) -> Option<Point> {
		if !self.surface.is_connected() {
			return None;
		}
		let rect = self.surface.get_bounding_client_rect();
		Some(Point::new(rect.left(), rect.top()))
	}

	fn anchor_terminus(&self, id: &str) -> Option<Point> {
		let anchor = self.anchors.get(id)?;
		if !anchor.is_connected() {
			return None;
		}
		Some(anchor_terminus(&anchor))
	}
}

/// Right edge, vertical center of the anchor's icon, or of the anchor itself
/// when it has no icon.
pub fn anchor_terminus(anchor: &Element) -> Point {
	match anchor.query_selector(ICON_SELECTOR) {
		Ok(Some(icon)) => right_center(&icon.get_bounding_client_rect()),
		_ => right_center(&anchor.get_bounding_client_rect()),
	}
}

fn right_center(rect: &DomRect) -> Point {
	Point::new(rect.right(), (rect.top() + rect.bottom()) / 2.0)
}
