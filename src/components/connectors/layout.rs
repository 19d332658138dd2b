//! Fan-out geometry: turns measured anchor termini into quadratic curves that
//! all land on the convergence rim.

use super::types::{AnchorItem, ConnectorCurve, ConvergencePoint, Point, QuadCurve};

/// Warm red / orange stroke cycle, indexed by source position.
pub const CURVE_PALETTE: &[&str] = &[
	"#ef4444", "#f97316", "#f97316", "#ef4444", "#f97316", "#ef4444", "#f97316", "#ef4444",
	"#f97316", "#ef4444", "#f97316", "#ef4444",
];

const FALLBACK_STROKE: &str = "currentColor";

/// Shape constants of the fan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanStyle {
	/// Vertical control-point step between neighbouring items.
	pub vertical_spread: f64,
	/// Minimum leftward pull of the control point.
	pub min_pull: f64,
	/// Leftward pull as a share of the horizontal start/end distance.
	pub pull_ratio: f64,
	/// Stroke colors, cycled by source position.
	pub palette: &'static [&'static str],
}

impl Default for FanStyle {
	fn default() -> Self {
		Self {
			vertical_spread: 20.0,
			min_pull: 60.0,
			pull_ratio: 0.6,
			palette: CURVE_PALETTE,
		}
	}
}

impl FanStyle {
	/// Vertical control offset of item `index` out of `count`, symmetric around
	/// the middle of the list.
	pub fn spread_offset(&self, index: usize, count: usize) -> f64 {
		let mid = count.saturating_sub(1) as f64 / 2.0;
		(index as f64 - mid) * self.vertical_spread
	}

	/// Stroke color of item `index`; `currentColor` when the palette is empty.
	pub fn stroke(&self, index: usize) -> &'static str {
		match self.palette.len() {
			0 => FALLBACK_STROKE,
			len => self.palette[index % len],
		}
	}

	/// Curve from `start` to the convergence rim for item `index` of `count`.
	pub fn curve(
		&self,
		start: Point,
		index: usize,
		count: usize,
		target: &ConvergencePoint,
	) -> QuadCurve {
		let end = target.terminus();
		let distance = (end.x - start.x).abs();
		let pull = self.min_pull.max(distance * self.pull_ratio);
		let control = Point::new(
			start.x.min(end.x) - pull,
			start.y + self.spread_offset(index, count),
		);
		QuadCurve {
			start,
			control,
			end,
		}
	}
}

/// Builds the ordered curve list.
///
/// `anchors` yields `(source index, item, terminus)` for resolvable items only;
/// `count` is the length of the full source list so spread and color stay
/// tied to an item's position even when earlier items are not mounted yet.
pub fn fan_out<'a, I>(
	anchors: I,
	count: usize,
	target: &ConvergencePoint,
	style: &FanStyle,
) -> Vec<ConnectorCurve>
where
	I: IntoIterator<Item = (usize, &'a AnchorItem, Point)>,
{
	anchors
		.into_iter()
		.map(|(index, item, start)| ConnectorCurve {
			anchor_id: item.id.clone(),
			path: style.curve(start, index, count, target),
			color: style.stroke(index).to_string(),
		})
		.collect()
}
