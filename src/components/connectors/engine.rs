//! Measure-then-lay-out entry point, independent of the DOM.

use super::layout::{FanStyle, fan_out};
use super::types::{AnchorItem, ConnectorCurve, ConvergencePoint, Point};

/// Read-only view of the rendered layout, in screen coordinates.
pub trait SurfaceGeometry {
	/// Top-left of the drawing surface, or `None` while it is not in the document.
	fn surface_origin(&self) -> Option<Point>;

	/// Screen point where the connector for `id` starts, or `None` while the
	/// anchor is not mounted.
	fn anchor_terminus(&self, id: &str) -> Option<Point>;
}

/// Measures anchors and lays out one connector per resolvable item.
#[derive(Debug)]
pub struct ConnectorLayoutEngine<G> {
	geometry: G,
	target: ConvergencePoint,
	style: FanStyle,
}

impl<G: SurfaceGeometry> ConnectorLayoutEngine<G> {
	/// Engine that measures through `geometry` and fans toward `target`.
	pub fn new(geometry: G, target: ConvergencePoint, style: FanStyle) -> Self {
		Self {
			geometry,
			target,
			style,
		}
	}

	#[cfg(test)]
	pub(crate) fn geometry(&self) -> &G {
		&self.geometry
	}

	/// Measures the current layout and returns the ordered curve list.
	///
	/// Returns `None` when the surface is gone; callers keep whatever they
	/// published last. Never writes to the layout it measures.
	pub fn recompute(&self, items: &[AnchorItem]) -> Option<Vec<ConnectorCurve>> {
		let origin = self.geometry.surface_origin()?;
		let anchors = items.iter().enumerate().filter_map(|(index, item)| {
			let terminus = self.geometry.anchor_terminus(&item.id)?;
			Some((index, item, terminus - origin))
		});
		Some(fan_out(anchors, items.len(), &self.target, &self.style))
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use super::*;
	use crate::components::connectors::layout::CURVE_PALETTE;

	#[derive(Default)]
	struct FakeLayout {
		origin: RefCell<Option<Point>>,
		anchors: RefCell<HashMap<String, Point>>,
	}

	impl FakeLayout {
		fn mounted(origin: Point, items: &[AnchorItem]) -> Self {
			let layout = Self::default();
			*layout.origin.borrow_mut() = Some(origin);
			for (i, item) in items.iter().enumerate() {
				let at = Point::new(origin.x + 180.0, origin.y + 24.0 + 40.0 * i as f64);
				layout.mount(&item.id, at);
			}
			layout
		}

		fn mount(&self, id: &str, at: Point) {
			self.anchors.borrow_mut().insert(id.to_string(), at);
		}

		fn unmount(&self, id: &str) {
			self.anchors.borrow_mut().remove(id);
		}
	}

	impl SurfaceGeometry for FakeLayout {
		fn surface_origin(&self) -> Option<Point> {
			*self.origin.borrow()
		}

		fn anchor_terminus(&self, id: &str) -> Option<Point> {
			self.anchors.borrow().get(id).copied()
		}
	}

	fn sources(n: usize) -> Vec<AnchorItem> {
		(0..n)
			.map(|i| AnchorItem::new(format!("src-{i}"), format!("Source {i}"), "#22d3ee"))
			.collect()
	}

	fn engine(layout: FakeLayout) -> ConnectorLayoutEngine<FakeLayout> {
		ConnectorLayoutEngine::new(
			layout,
			ConvergencePoint::new(Point::new(100.0, 300.0), 18.0),
			FanStyle::default(),
		)
	}

	fn ids(curves: &[ConnectorCurve]) -> Vec<&str> {
		curves.iter().map(|c| c.anchor_id.as_str()).collect()
	}

	#[test]
	fn one_curve_per_mounted_item_in_order() {
		for n in [0, 1, 2, 7, 12] {
			let items = sources(n);
			let engine = engine(FakeLayout::mounted(Point::new(240.0, 64.0), &items));
			let curves = engine.recompute(&items).unwrap_or_default();
			assert_eq!(curves.len(), n);
			let expected: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
			assert_eq!(ids(&curves), expected);
		}
	}

	#[test]
	fn unmounted_items_are_skipped() {
		let items = sources(6);
		let layout = FakeLayout::mounted(Point::new(0.0, 0.0), &items);
		layout.unmount("src-0");
		layout.unmount("src-3");
		let engine = engine(layout);

		let curves = engine.recompute(&items).unwrap_or_default();
		assert_eq!(ids(&curves), ["src-1", "src-2", "src-4", "src-5"]);
		assert_eq!(curves[2].color, CURVE_PALETTE[4]);

		// self-heals once the anchor mounts
		engine.geometry().mount("src-3", Point::new(180.0, 150.0));
		let curves = engine.recompute(&items).unwrap_or_default();
		assert_eq!(ids(&curves), ["src-1", "src-2", "src-3", "src-4", "src-5"]);
	}

	#[test]
	fn starts_are_translated_into_surface_space() {
		let items = sources(1);
		let layout = FakeLayout::default();
		*layout.origin.borrow_mut() = Some(Point::new(260.0, 120.0));
		layout.mount("src-0", Point::new(230.0, 300.0));
		let curves = engine(layout).recompute(&items).unwrap_or_default();
		assert_eq!(curves[0].path.start, Point::new(-30.0, 180.0));
	}

	#[test]
	fn recompute_is_idempotent() {
		let items = sources(12);
		let engine = engine(FakeLayout::mounted(Point::new(13.7, 91.3), &items));
		let first: Vec<String> = engine
			.recompute(&items)
			.unwrap_or_default()
			.iter()
			.map(|c| c.path.to_svg_path())
			.collect();
		let second: Vec<String> = engine
			.recompute(&items)
			.unwrap_or_default()
			.iter()
			.map(|c| c.path.to_svg_path())
			.collect();
		assert_eq!(first.len(), 12);
		assert_eq!(first, second);
	}

	#[test]
	fn every_end_sits_on_the_rim() {
		let items = sources(12);
		let engine = engine(FakeLayout::mounted(Point::new(50.0, 50.0), &items));
		let center = Point::new(100.0, 300.0);
		for curve in engine.recompute(&items).unwrap_or_default() {
			assert_eq!(curve.path.end, Point::new(82.0, 300.0));
			assert_eq!(curve.path.end.distance(center), 18.0);
		}
	}

	#[test]
	fn shrinking_list_leaves_no_stale_curves() {
		let items = sources(12);
		let engine = engine(FakeLayout::mounted(Point::new(0.0, 0.0), &items));
		assert_eq!(engine.recompute(&items).map(|c| c.len()), Some(12));

		let remaining = vec![items[4].clone()];
		let curves = engine.recompute(&remaining).unwrap_or_default();
		assert_eq!(ids(&curves), ["src-4"]);
		// a single item sits at the middle of its own list
		assert_eq!(curves[0].path.control.y, curves[0].path.start.y);
		assert_eq!(curves[0].color, CURVE_PALETTE[0]);
	}

	#[test]
	fn missing_surface_yields_nothing() {
		let items = sources(3);
		let layout = FakeLayout::mounted(Point::new(0.0, 0.0), &items);
		let engine = engine(layout);
		assert!(engine.recompute(&items).is_some());

		*engine.geometry().origin.borrow_mut() = None;
		assert_eq!(engine.recompute(&items), None);
	}
}
