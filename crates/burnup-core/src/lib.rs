// File: crates/burnup-core/src/lib.rs
// Summary: Core library entry point; exports the projection kernel, overlay lifecycle and SVG surface.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod projector;
pub mod regression;
pub mod schedule;
pub mod selector;
pub mod series;
pub mod surface;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use chart::{render_chart, ChartOutcome, RenderOptions};
pub use error::ChartError;
pub use geometry::intersect;
pub use overlay::{OverlayGraphic, OverlayPool};
pub use projector::{ChartReport, CycleReport, Projector};
pub use regression::{linear_reg, Regression};
pub use schedule::{RenderQueue, Scheduler, Trigger};
pub use selector::Selector;
pub use series::{Series, SeriesRole};
pub use surface::{Element, Surface};
pub use svg::{NodeId, SvgDocument};
pub use theme::Theme;
pub use types::{Point, Segment};
pub use view::ViewBox;
