// File: crates/burnup-cli/src/cli.rs
// Summary: Command-line definition for burnup-projection.

use std::path::PathBuf;

use anyhow::Result;
use burnup_core::{theme, RenderOptions};
use clap::{Args, Parser, Subcommand};

/// Overlay projected completion points on rendered burnup charts
#[derive(Parser, Debug)]
#[command(name = "burnup-projection")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one projection cycle over a document and write the result
    Annotate {
        /// Input SVG or XHTML document
        input: PathBuf,

        /// Output path (defaults to `<stem>.projected.<ext>` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Keep redrawing on a timer and whenever the input changes
    Watch {
        /// Input SVG or XHTML document
        input: PathBuf,

        /// Output path (defaults to `<stem>.projected.<ext>` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Periodic redraw interval in milliseconds
        #[arg(long, default_value = "1000")]
        interval_ms: u64,

        /// Delay between an input change and its redraw, in milliseconds
        #[arg(long, default_value = "100")]
        resize_delay_ms: u64,

        /// Stop after this many cycles (runs until interrupted when omitted)
        #[arg(long)]
        max_cycles: Option<u64>,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Horizontal extent of derived trend lines
    #[arg(long, default_value_t = burnup_core::types::PROJECTION_WIDTH)]
    pub width: f64,

    /// Viewport padding past the projection, as a fraction of chart width
    #[arg(long, default_value_t = burnup_core::types::VIEWPORT_PADDING)]
    pub padding: f64,

    /// Goal marker radius
    #[arg(long, default_value_t = burnup_core::types::MARKER_RADIUS)]
    pub marker_radius: f64,

    /// Overlay theme (gray, high-contrast)
    #[arg(long, default_value = "gray")]
    pub theme: String,

    /// Selector for chart containers
    #[arg(long, default_value = burnup_core::types::CHART_SELECTOR)]
    pub chart_selector: String,

    /// Selector for series paths inside a chart
    #[arg(long, default_value = burnup_core::types::SERIES_SELECTOR)]
    pub series_selector: String,

    /// Selector for the chart's root SVG element
    #[arg(long, default_value = burnup_core::types::ROOT_SELECTOR)]
    pub root_selector: String,
}

impl RenderArgs {
    pub fn to_options(&self) -> Result<RenderOptions> {
        let mut opts = RenderOptions::with_selectors(
            &self.chart_selector,
            &self.series_selector,
            &self.root_selector,
        )?;
        opts.projection_width = self.width;
        opts.viewport_padding = self.padding;
        opts.marker_radius = self.marker_radius;
        opts.theme = theme::find(&self.theme);
        Ok(opts)
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
