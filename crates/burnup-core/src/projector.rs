// File: crates/burnup-core/src/projector.rs
// Summary: One recompute-and-redraw cycle over every chart on a surface.

use tracing::{debug, warn};

use crate::chart::{render_chart, ChartOutcome, RenderOptions};
use crate::overlay::OverlayPool;
use crate::surface::Surface;

/// Result for one chart in a cycle. Failed charts are skipped, not fatal.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartReport {
    Rendered(ChartOutcome),
    Skipped(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CycleReport {
    pub charts: Vec<ChartReport>,
}

impl CycleReport {
    pub fn rendered(&self) -> impl Iterator<Item = &ChartOutcome> {
        self.charts.iter().filter_map(|c| match c {
            ChartReport::Rendered(o) => Some(o),
            ChartReport::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.charts.iter().filter(|c| matches!(c, ChartReport::Skipped(_))).count()
    }
}

/// Owns the overlay pool for one surface and redraws projections on demand.
pub struct Projector<H> {
    options: RenderOptions,
    pool: OverlayPool<H>,
}

impl<H: Copy> Projector<H> {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, pool: OverlayPool::new() }
    }

    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn pool(&self) -> &OverlayPool<H> { &self.pool }

    /// Clear last cycle's overlays, then render every chart found on `surface`.
    pub fn run_cycle<S>(&mut self, surface: &mut S) -> CycleReport
    where
        S: Surface<Node = H>,
    {
        self.pool.clear_all(surface);

        let charts = surface.query_all(None, &self.options.chart_selector);
        debug!(count = charts.len(), "charts found");
        let mut report = CycleReport::default();
        for (index, chart) in charts.into_iter().enumerate() {
            match render_chart(surface, chart, &mut self.pool, &self.options) {
                Ok(outcome) => report.charts.push(ChartReport::Rendered(outcome)),
                Err(e) => {
                    warn!(chart = index, error = %e, "skipping chart");
                    report.charts.push(ChartReport::Skipped(e.to_string()));
                }
            }
        }
        report
    }

    /// Forget tracked overlays without touching a surface; call after the
    /// surface has been replaced.
    pub fn reset(&mut self) {
        self.pool.forget();
    }
}

impl<H: Copy> Default for Projector<H> {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}
