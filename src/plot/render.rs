//! Chart drawing with `plotters`

use super::model::{dash_segments, LinePattern, LineStyle, PlotModel, Rgb};
use crate::{
    error::{AppError, Result},
    types::ImageFormat,
};
use plotters::coord::ranged1d::Ranged;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Axis key points requested from plotters for labels and grid lines
const KEY_POINTS: usize = 10;
/// Width of a legend glyph in pixels
const LEGEND_GLYPH_PX: i32 = 24;

fn render_err<E: std::fmt::Display>(error: E) -> AppError {
    AppError::render(error.to_string())
}

/// Draw `model` into an image file of the given format
pub fn render_chart(model: &PlotModel, path: &Path, format: ImageFormat) -> Result<()> {
    let size = (model.width, model.height);
    match format {
        ImageFormat::Png => draw(BitMapBackend::new(path, size).into_drawing_area(), model),
        ImageFormat::Svg => draw(SVGBackend::new(path, size).into_drawing_area(), model),
    }
    .map_err(|e| match e {
        AppError::Render(msg) => AppError::render(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Draw `model` into an SVG document held in memory
pub fn render_svg_string(model: &PlotModel) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (model.width, model.height)).into_drawing_area();
        draw(root, model)?;
    }
    Ok(buffer)
}

fn backend_color(rgb: Rgb, alpha: f64) -> RGBAColor {
    RGBColor(rgb.0, rgb.1, rgb.2).mix(alpha)
}

fn shape_style(style: &LineStyle, scale: f64) -> ShapeStyle {
    ShapeStyle {
        color: backend_color(style.color, style.alpha),
        filled: false,
        stroke_width: style.stroke_px(scale),
    }
}

/// Pixel spans of the three strokes making up a legend sample
fn legend_pieces(pattern: LinePattern) -> [(i32, i32); 3] {
    match pattern {
        LinePattern::Solid => [(0, 8), (8, 16), (16, LEGEND_GLYPH_PX)],
        LinePattern::Dashed => [(0, 6), (9, 15), (18, LEGEND_GLYPH_PX)],
        LinePattern::DashDot => [(0, 8), (12, 14), (18, LEGEND_GLYPH_PX)],
    }
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, model: &PlotModel) -> Result<()> {
    let scale = model.scale();

    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&model.title, ("sans-serif", model.title_font_px()))
        .margin((20.0 * scale).round() as u32)
        .x_label_area_size((3.5 * model.label_font_px() as f64).round() as u32)
        .y_label_area_size((5.0 * model.label_font_px() as f64).round() as u32)
        .build_cartesian_2d(
            model.x_range.start..model.x_range.end,
            model.y_range.start..model.y_range.end,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(KEY_POINTS)
        .y_labels(KEY_POINTS)
        .x_desc(model.x_label.as_str())
        .y_desc(model.y_label.as_str())
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .axis_desc_style(("sans-serif", model.label_font_px()))
        .label_style(("sans-serif", model.legend_font_px()))
        .draw()
        .map_err(render_err)?;

    let (area_w, area_h) = chart.plotting_area().dim_in_pixel();
    let x_per_px = model.x_range.span() / area_w.max(1) as f64;
    let y_per_px = model.y_range.span() / area_h.max(1) as f64;

    // Grid at the same key points plotters labels
    let grid_style = shape_style(&model.grid_style, scale);
    let grid_dashes = model.grid_style.pattern.dashes();
    let x_keys = chart.as_coord_spec().x_spec().key_points(KEY_POINTS);
    let y_keys = chart.as_coord_spec().y_spec().key_points(KEY_POINTS);

    let mut grid = Vec::new();
    for x in x_keys {
        for (y0, y1) in dash_segments(model.y_range.start, model.y_range.end, grid_dashes, y_per_px) {
            grid.push(PathElement::new(vec![(x, y0), (x, y1)], grid_style));
        }
    }
    for y in y_keys {
        for (x0, x1) in dash_segments(model.x_range.start, model.x_range.end, grid_dashes, x_per_px) {
            grid.push(PathElement::new(vec![(x0, y), (x1, y)], grid_style));
        }
    }
    chart.draw_series(grid).map_err(render_err)?;

    let series_style = shape_style(&model.series_style, scale);
    chart
        .draw_series(LineSeries::new(model.points.iter().copied(), series_style))
        .map_err(render_err)?
        .label(model.series_label.as_str())
        .legend(move |(x, y)| {
            let [a, b, c] = legend_pieces(LinePattern::Solid);
            EmptyElement::<(i32, i32), DB>::at((x, y))
                + PathElement::new(vec![(a.0, 0), (a.1, 0)], series_style)
                + PathElement::new(vec![(b.0, 0), (b.1, 0)], series_style)
                + PathElement::new(vec![(c.0, 0), (c.1, 0)], series_style)
        });

    for line in &model.reference_lines {
        let style = shape_style(&line.style, scale);
        let pattern = line.style.pattern;
        let value = line.value;
        let dashes = dash_segments(model.x_range.start, model.x_range.end, pattern.dashes(), x_per_px);

        chart
            .draw_series(
                dashes
                    .into_iter()
                    .map(move |(x0, x1)| PathElement::new(vec![(x0, value), (x1, value)], style)),
            )
            .map_err(render_err)?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                let [a, b, c] = legend_pieces(pattern);
                EmptyElement::<(i32, i32), DB>::at((x, y))
                    + PathElement::new(vec![(a.0, 0), (a.1, 0)], style)
                    + PathElement::new(vec![(b.0, 0), (b.1, 0)], style)
                    + PathElement::new(vec![(c.0, 0), (c.1, 0)], style)
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK.mix(0.3))
        .label_font(("sans-serif", model.legend_font_px()))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
