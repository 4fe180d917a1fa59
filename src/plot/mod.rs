//! Latency chart construction, drawing and display
//!
//! [`PlotModel`] captures the figure independent of any backend;
//! [`render_chart`] draws it with `plotters` and [`open_in_viewer`] hands the
//! finished image to the desktop.

mod model;
mod render;
mod viewer;

pub use model::{
    dash_segments, AxisRange, LinePattern, LineStyle, PlotModel, ReferenceLine, Rgb,
    PIXELS_PER_UNIT,
};
pub use render::{render_chart, render_svg_string};
pub use viewer::{open_in_viewer, viewer_command};
