// File: crates/burnup-core/src/view.rs
// Visible chart viewport (`viewBox`) and the projection fit.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self { min_x, min_y, width, height }
    }

    /// Viewport that keeps the chart's top-left origin but reaches
    /// `padding * chart_width` past `projection.x`. `min_y` is clamped to at
    /// most `projection.y`, so a point above the plot area stays visible.
    pub fn fit_projection(projection: Point, chart_width: f64, chart_height: f64, padding: f64) -> Self {
        let min_y = projection.y.min(0.0);
        Self {
            min_x: 0.0,
            min_y,
            width: projection.x + chart_width * padding,
            height: chart_height - min_y,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x
            && p.x <= self.min_x + self.width
            && p.y >= self.min_y
            && p.y <= self.min_y + self.height
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

impl FromStr for ViewBox {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nums = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ChartError::ViewBox(s.to_string()))?;
        match nums[..] {
            [min_x, min_y, width, height] => Ok(Self::new(min_x, min_y, width, height)),
            _ => Err(ChartError::ViewBox(s.to_string())),
        }
    }
}
