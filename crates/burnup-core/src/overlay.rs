// File: crates/burnup-core/src/overlay.rs
// Summary: Overlay graphics (trend lines, goal marker) and the pool that owns them between cycles.

use crate::surface::{Element, Surface};
use crate::theme::Theme;
use crate::types::{Point, Segment};

/// Something the projector draws on top of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayGraphic {
    /// Thin unfilled stroke between two points.
    Line(Segment),
    /// Filled circle marking the projection point.
    Marker { center: Point, radius: f64 },
}

impl OverlayGraphic {
    pub fn to_element(&self, theme: &Theme) -> Element {
        match *self {
            OverlayGraphic::Line(seg) => Element::new("path")
                .attr("stroke", theme.line_stroke)
                .attr("stroke-width", theme.line_width)
                .attr("fill", "none")
                .attr("d", path_data(&seg)),
            OverlayGraphic::Marker { center, radius } => Element::new("circle")
                .attr("cx", center.x)
                .attr("cy", center.y)
                .attr("r", radius)
                .attr("fill", theme.marker_fill),
        }
    }
}

/// SVG path data for a straight segment.
pub fn path_data(seg: &Segment) -> String {
    format!("M {} {} L {} {}", seg.start.x, seg.start.y, seg.end.x, seg.end.y)
}

/// Handles of the overlays drawn by the most recent cycle.
///
/// `clear_all` and `track` are the only mutators that touch a surface;
/// a cycle calls `clear_all` once, then `track` per graphic it draws.
#[derive(Debug)]
pub struct OverlayPool<H> {
    handles: Vec<H>,
}

impl<H: Copy> OverlayPool<H> {
    pub fn new() -> Self { Self { handles: Vec::new() } }

    /// Remove every tracked overlay from `surface` and empty the pool.
    pub fn clear_all<S>(&mut self, surface: &mut S)
    where
        S: Surface<Node = H>,
    {
        for h in self.handles.drain(..) {
            surface.remove(h);
        }
    }

    pub fn track(&mut self, handle: H) {
        self.handles.push(handle);
    }

    /// Drop all handles without touching any surface. For when the surface
    /// they belong to has been replaced.
    pub fn forget(&mut self) {
        self.handles.clear();
    }

    pub fn handles(&self) -> &[H] { &self.handles }
    pub fn len(&self) -> usize { self.handles.len() }
    pub fn is_empty(&self) -> bool { self.handles.is_empty() }
}

impl<H: Copy> Default for OverlayPool<H> {
    fn default() -> Self { Self::new() }
}
