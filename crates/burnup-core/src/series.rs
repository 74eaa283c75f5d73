// File: crates/burnup-core/src/series.rs
// Summary: Burnup series model: path parsing, plateau trimming, role classification, derived lines.
// Notes:
// - Coordinates are taken from rendered path data, so they are in SVG user
//   units (y grows downward). Nothing here assumes an orientation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ChartError;
use crate::regression::linear_reg;
use crate::types::{Point, Segment};

static COORD_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(-?[\d.]+) (-?[\d.]+)").expect("coordinate pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesRole {
    /// Scope line, held flat at its last value.
    Total,
    /// Cumulative progress, extrapolated by regression.
    Done,
}

impl SeriesRole {
    /// Role from an explicit tag value (`total` / `done`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "total" => Some(SeriesRole::Total),
            "done" => Some(SeriesRole::Done),
            _ => None,
        }
    }

    /// Fallback by discovery order: the first series is the total line.
    pub fn from_index(index: usize) -> Self {
        if index == 0 { SeriesRole::Total } else { SeriesRole::Done }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub role: SeriesRole,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(role: SeriesRole, points: Vec<Point>) -> Self {
        Self { role, points }
    }

    /// Parse path data and drop the leading plateau.
    pub fn from_path(role: SeriesRole, d: &str) -> Result<Self, ChartError> {
        let mut points = parse_path_points(d)?;
        trim_leading_plateau(&mut points);
        Ok(Self { role, points })
    }

    /// Representative line across `[0, width]`, or `None` when a done series
    /// has no usable trend.
    pub fn derive_line(&self, width: f64) -> Option<Segment> {
        match self.role {
            SeriesRole::Total => {
                let last = self.points.last()?;
                Some(Segment::from_coords(0.0, last.y, width, last.y))
            }
            SeriesRole::Done => linear_reg(&self.points).map(|reg| reg.span(width)),
        }
    }
}

/// Extract every `"<float> <float>"` pair from SVG path data, in order.
pub fn parse_path_points(d: &str) -> Result<Vec<Point>, ChartError> {
    let parse = |s: &str| {
        s.parse::<f64>().map_err(|_| ChartError::MalformedPath { token: s.to_string() })
    };
    let points = COORD_PAIR
        .captures_iter(d)
        .map(|c| Ok(Point::new(parse(&c[1])?, parse(&c[2])?)))
        .collect::<Result<Vec<_>, ChartError>>()?;
    if points.is_empty() {
        return Err(ChartError::EmptyPath(d.to_string()));
    }
    Ok(points)
}

/// Drop leading points while the first two share a y value, keeping at
/// least one point.
pub fn trim_leading_plateau(points: &mut Vec<Point>) {
    let flat = points
        .windows(2)
        .take_while(|w| w[0].y == w[1].y)
        .count();
    points.drain(..flat);
}
