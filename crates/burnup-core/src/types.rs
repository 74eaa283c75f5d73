// File: crates/burnup-core/src/types.rs
// Summary: Shared types and constants (points, segments, projection defaults).

/// Horizontal extent of derived trend lines, in chart user units.
/// Stands in for the host screen width.
pub const PROJECTION_WIDTH: f64 = 1920.0;
/// Extra room past the projection point, as a fraction of the chart width.
pub const VIEWPORT_PADDING: f64 = 0.2;
/// Radius of the goal marker drawn at the projection point.
pub const MARKER_RADIUS: f64 = 5.0;

/// Chart container marker used by the burnup widget.
pub const CHART_SELECTOR: &str = ".BurnupChart";
/// Rendered line series inside a chart.
pub const SERIES_SELECTOR: &str = ".highcharts-series .highcharts-tracker-line";
/// Root SVG element whose `viewBox` gets widened.
pub const ROOT_SELECTOR: &str = "svg.highcharts-root";
/// Optional per-series attribute naming its role (`total` / `done`).
pub const ROLE_ATTRIBUTE: &str = "data-burnup-role";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

/// Ordered pair of endpoints.
/// Contract: consumers reject segments whose endpoints coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self { Self { start, end } }

    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { start: Point::new(x1, y1), end: Point::new(x2, y2) }
    }

    /// True when both endpoints are identical (no direction).
    pub fn is_degenerate(&self) -> bool { self.start == self.end }

    /// Point at parameter `t` along the segment (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        )
    }
}
