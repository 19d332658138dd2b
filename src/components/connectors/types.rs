//! Value types shared by the layout engine and the views that draw it.

use std::fmt;
use std::ops::Sub;

/// One entry of the source menu, supplied by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorItem {
	/// Stable identity; keys the anchor registry.
	pub id: String,
	/// Text shown in the menu.
	pub label: String,
	/// Icon tint of the menu entry. Not used for the connector stroke.
	pub color_token: String,
}

impl AnchorItem {
	/// Builds an item from anything string-like.
	pub fn new(
		id: impl Into<String>,
		label: impl Into<String>,
		color_token: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			color_token: color_token.into(),
		}
	}
}

/// A point in drawing-surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal position, growing rightward.
	pub x: f64,
	/// Vertical position, growing downward.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	#[cfg(test)]
	pub(crate) fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, origin: Point) -> Point {
		Point::new(self.x - origin.x, self.y - origin.y)
	}
}

/// The shared target every connector curves toward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergencePoint {
	/// Center of the target node.
	pub center: Point,
	/// Distance from `center` at which connectors stop.
	pub rim_offset: f64,
}

impl ConvergencePoint {
	/// Target at `center` whose connectors stop `rim_offset` short of it.
	pub const fn new(center: Point, rim_offset: f64) -> Self {
		Self { center, rim_offset }
	}

	/// Anchors sit to the left of the target, so curves land on the left rim.
	pub fn terminus(&self) -> Point {
		Point::new(self.center.x - self.rim_offset, self.center.y)
	}
}

impl Default for ConvergencePoint {
	fn default() -> Self {
		Self::new(Point::new(100.0, 300.0), 18.0)
	}
}

/// Quadratic Bezier segment: start, one control point, end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadCurve {
	/// Anchor terminus.
	pub start: Point,
	/// Single control point that bends the curve.
	pub control: Point,
	/// Point on the convergence rim.
	pub end: Point,
}

impl QuadCurve {
	/// SVG path data, `M x y Q cx cy ex ey`, two decimals per coordinate.
	pub fn to_svg_path(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for QuadCurve {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
			self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
		)
	}
}

/// One drawn connector, in the same order as its source item.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorCurve {
	/// Id of the item this connector starts from.
	pub anchor_id: String,
	/// Curve geometry in surface coordinates.
	pub path: QuadCurve,
	/// Stroke color.
	pub color: String,
}
