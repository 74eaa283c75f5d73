// File: crates/burnup-core/src/chart.rs
// Summary: Per-chart projection: read series geometry, draw trend lines, widen the viewport, mark the goal.

use tracing::{debug, info, warn};

use crate::error::ChartError;
use crate::geometry::intersect;
use crate::overlay::{OverlayGraphic, OverlayPool};
use crate::selector::Selector;
use crate::series::{Series, SeriesRole};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{
    Point, Segment, CHART_SELECTOR, MARKER_RADIUS, PROJECTION_WIDTH, ROLE_ATTRIBUTE, ROOT_SELECTOR,
    SERIES_SELECTOR, VIEWPORT_PADDING,
};
use crate::view::ViewBox;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub chart_selector: Selector,
    pub series_selector: Selector,
    pub root_selector: Selector,
    /// Attribute carrying an explicit series role; discovery order is used without it.
    pub role_attribute: String,
    pub projection_width: f64,
    pub viewport_padding: f64,
    pub marker_radius: f64,
    pub theme: Theme,
}

impl RenderOptions {
    /// Options with custom selectors; other fields keep their defaults.
    pub fn with_selectors(chart: &str, series: &str, root: &str) -> Result<Self, ChartError> {
        Ok(Self {
            chart_selector: Selector::parse(chart)?,
            series_selector: Selector::parse(series)?,
            root_selector: Selector::parse(root)?,
            ..Self::default()
        })
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        let sel = |s: &str| Selector::parse(s).expect("built-in selector");
        Self {
            chart_selector: sel(CHART_SELECTOR),
            series_selector: sel(SERIES_SELECTOR),
            root_selector: sel(ROOT_SELECTOR),
            role_attribute: ROLE_ATTRIBUTE.to_string(),
            projection_width: PROJECTION_WIDTH,
            viewport_padding: VIEWPORT_PADDING,
            marker_radius: MARKER_RADIUS,
            theme: Theme::default(),
        }
    }
}

/// What a single chart ended up with after a cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartOutcome {
    pub lines_drawn: usize,
    pub projection: Option<Point>,
    pub viewport: Option<ViewBox>,
}

/// Draw trend lines and, when total and done cross, the projection for one chart.
///
/// Every series is parsed, and the root viewport resolved, before anything
/// is drawn, so a malformed chart leaves the surface untouched.
pub fn render_chart<S: Surface>(
    surface: &mut S,
    chart: S::Node,
    pool: &mut OverlayPool<S::Node>,
    opts: &RenderOptions,
) -> Result<ChartOutcome, ChartError> {
    let lines = surface.query_all(Some(chart), &opts.series_selector);
    if lines.is_empty() {
        return Err(ChartError::NoSeries(opts.series_selector.as_str().to_string()));
    }

    let mut parsed = Vec::with_capacity(lines.len());
    for (index, &line) in lines.iter().enumerate() {
        let d = surface.attribute(line, "d").ok_or_else(|| ChartError::MissingAttribute {
            element: surface.tag_name(line).unwrap_or("?").to_string(),
            name: "d".to_string(),
        })?;
        let role = surface
            .attribute(line, &opts.role_attribute)
            .and_then(SeriesRole::from_tag)
            .unwrap_or_else(|| SeriesRole::from_index(index));
        let series = Series::from_path(role, d)?;
        let parent = surface.parent(line).ok_or(ChartError::Detached)?;
        debug!(index, ?role, points = series.points.len(), "parsed series");
        parsed.push((parent, series));
    }

    let segments: Vec<Option<Segment>> = parsed
        .iter()
        .enumerate()
        .map(|(index, (_, series))| {
            let seg = series.derive_line(opts.projection_width);
            if seg.is_none() {
                warn!(index, "no usable trend for series, skipping its line");
            }
            seg
        })
        .collect();

    let projection = if parsed.len() == 2 {
        let point = project(&parsed, &segments);
        info!(?point, "projection point");
        point
    } else {
        debug!(series = parsed.len(), "projection needs exactly two series");
        None
    };

    // Resolve the viewport before drawing so a broken root leaves no overlays behind.
    let frame = match projection {
        Some(point) => {
            let root = surface
                .query(Some(chart), &opts.root_selector)
                .ok_or_else(|| ChartError::MissingRoot(opts.root_selector.as_str().to_string()))?;
            let width = numeric_attribute(surface, root, "width")?;
            let height = numeric_attribute(surface, root, "height")?;
            Some((point, root, ViewBox::fit_projection(point, width, height, opts.viewport_padding)))
        }
        None => None,
    };

    let mut outcome = ChartOutcome::default();
    for ((parent, _), seg) in parsed.iter().zip(&segments) {
        let Some(seg) = seg else { continue };
        let node = surface.append_child(*parent, OverlayGraphic::Line(*seg).to_element(&opts.theme));
        pool.track(node);
        outcome.lines_drawn += 1;
    }

    if let Some((point, root, view)) = frame {
        surface.set_attribute(root, "viewBox", &view.to_string());
        let marker = OverlayGraphic::Marker { center: point, radius: opts.marker_radius };
        let node = surface.append_child(parsed[0].0, marker.to_element(&opts.theme));
        pool.track(node);
        outcome.projection = Some(point);
        outcome.viewport = Some(view);
    }

    Ok(outcome)
}

/// Crossing of the total and done lines of a two-series chart.
fn project<N>(parsed: &[(N, Series)], segments: &[Option<Segment>]) -> Option<Point> {
    let line_for = |role: SeriesRole| {
        parsed.iter().zip(segments).find(|((_, s), _)| s.role == role).and_then(|(_, seg)| *seg)
    };
    let (Some(total), Some(done)) = (line_for(SeriesRole::Total), line_for(SeriesRole::Done)) else {
        debug!("need one total and one done line; no projection");
        return None;
    };
    intersect(&total, &done)
}

fn numeric_attribute<S: Surface>(surface: &S, node: S::Node, name: &str) -> Result<f64, ChartError> {
    let raw = surface.attribute(node, name).ok_or_else(|| ChartError::MissingAttribute {
        element: surface.tag_name(node).unwrap_or("?").to_string(),
        name: name.to_string(),
    })?;
    raw.trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .map_err(|_| ChartError::InvalidDimension { name: name.to_string(), value: raw.to_string() })
}
