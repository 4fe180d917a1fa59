//! Backend-independent description of the latency chart
//!
//! Everything the renderer needs is computed here so that the figure for a
//! given input is fully determined before any pixels are drawn.

use crate::{
    defaults,
    models::{Config, SampleSeries},
    stats::SampleSummary,
};

/// Matplotlib-style figure units: the default figure is 12x6 units
pub const PIXELS_PER_UNIT: f64 = 100.0;
const POINTS_PER_INCH: f64 = 72.0;

const TITLE_FONT_PT: f64 = 16.0;
const LABEL_FONT_PT: f64 = 12.0;
const LEGEND_FONT_PT: f64 = 11.0;

/// Fraction of the value span added above and below the data
const Y_PADDING: f64 = 0.05;

/// Plain RGB color, converted to a backend color at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const GRID: Rgb = Rgb(176, 176, 176);
}

/// Dash pattern of a stroked line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Solid,
    /// `--`
    Dashed,
    /// `-.`
    DashDot,
}

impl LinePattern {
    /// Alternating on/off lengths in pixels at unit stroke width
    pub fn dashes(&self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[8.0, 5.0],
            Self::DashDot => &[8.0, 4.0, 2.0, 4.0],
        }
    }
}

/// Stroke appearance for one line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    /// Stroke width in figure points
    pub width: f64,
    pub pattern: LinePattern,
    /// Opacity in `0.0..=1.0`
    pub alpha: f64,
}

impl LineStyle {
    pub const fn solid(color: Rgb, width: f64) -> Self {
        Self { color, width, pattern: LinePattern::Solid, alpha: 1.0 }
    }

    pub const fn patterned(color: Rgb, width: f64, pattern: LinePattern) -> Self {
        Self { color, width, pattern, alpha: 1.0 }
    }

    /// Stroke width in whole pixels, never thinner than one pixel
    pub fn stroke_px(&self, scale: f64) -> u32 {
        (self.width * scale).round().max(1.0) as u32
    }
}

/// Horizontal line spanning the full x-range at a statistic
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub value: f64,
    pub style: LineStyle,
}

/// Inclusive numeric axis range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

/// Complete chart description
#[derive(Debug, Clone, PartialEq)]
pub struct PlotModel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Image size in pixels
    pub width: u32,
    pub height: u32,
    /// `(iteration, latency)` points of the main series
    pub points: Vec<(f64, f64)>,
    pub series_label: String,
    pub series_style: LineStyle,
    pub reference_lines: Vec<ReferenceLine>,
    pub grid_style: LineStyle,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl PlotModel {
    /// Build the chart for a series and its summary using default labels and size
    pub fn new(series: &SampleSeries, summary: &SampleSummary) -> Self {
        Self::build(
            series,
            summary,
            defaults::DEFAULT_TITLE,
            defaults::DEFAULT_WIDTH,
            defaults::DEFAULT_HEIGHT,
        )
    }

    /// Build the chart using the configured title and size
    pub fn from_config(series: &SampleSeries, summary: &SampleSummary, config: &Config) -> Self {
        Self::build(series, summary, &config.title, config.width, config.height)
    }

    fn build(series: &SampleSeries, summary: &SampleSummary, title: &str, width: u32, height: u32) -> Self {
        let points: Vec<(f64, f64)> = series
            .points()
            .map(|(i, latency)| (i as f64, latency as f64))
            .collect();

        let reference_lines = vec![
            ReferenceLine {
                label: "Mean".to_string(),
                value: summary.mean,
                style: LineStyle::patterned(Rgb::BLUE, 1.0, LinePattern::Dashed),
            },
            ReferenceLine {
                label: "Median".to_string(),
                value: summary.median,
                style: LineStyle::patterned(Rgb::GREEN, 1.0, LinePattern::DashDot),
            },
        ];

        let x_range = AxisRange {
            start: 0.0,
            end: (series.len().saturating_sub(1) as f64).max(1.0),
        };
        let y_range = padded_range(
            points
                .iter()
                .map(|&(_, y)| y)
                .chain(reference_lines.iter().map(|line| line.value)),
        );

        Self {
            title: title.to_string(),
            x_label: defaults::X_LABEL.to_string(),
            y_label: defaults::Y_LABEL.to_string(),
            width,
            height,
            points,
            series_label: "Latency".to_string(),
            series_style: LineStyle::solid(Rgb::RED, 1.2),
            reference_lines,
            grid_style: LineStyle {
                color: Rgb::GRID,
                width: 0.8,
                pattern: LinePattern::Dashed,
                alpha: 0.6,
            },
            x_range,
            y_range,
        }
    }

    /// Pixels per figure point at the current image size
    ///
    /// Line widths and fonts are specified for a 1200x600 figure and grow
    /// with the shorter image side.
    pub fn scale(&self) -> f64 {
        let x = self.width as f64 / defaults::DEFAULT_WIDTH as f64;
        let y = self.height as f64 / defaults::DEFAULT_HEIGHT as f64;
        x.min(y) * PIXELS_PER_UNIT / POINTS_PER_INCH
    }

    pub fn title_font_px(&self) -> u32 {
        font_px(TITLE_FONT_PT, self.scale())
    }

    pub fn label_font_px(&self) -> u32 {
        font_px(LABEL_FONT_PT, self.scale())
    }

    pub fn legend_font_px(&self) -> u32 {
        font_px(LEGEND_FONT_PT, self.scale())
    }
}

fn font_px(points: f64, scale: f64) -> u32 {
    (points * scale).round().max(1.0) as u32
}

fn padded_range<I: Iterator<Item = f64>>(values: I) -> AxisRange {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return AxisRange { start: 0.0, end: 1.0 };
    }

    let span = max - min;
    let pad = if span > 0.0 { span * Y_PADDING } else { 1.0 };
    AxisRange { start: min - pad, end: max + pad }
}

/// Split `start..end` into the visible pieces of a dash pattern
///
/// `dashes` alternates on/off lengths in pixels; `units_per_px` converts
/// them to axis units. An empty pattern yields the whole span.
pub fn dash_segments(start: f64, end: f64, dashes: &[f64], units_per_px: f64) -> Vec<(f64, f64)> {
    if end <= start {
        return Vec::new();
    }

    let period: f64 = dashes.iter().sum();
    if dashes.is_empty() || period <= 0.0 || !(units_per_px > 0.0) {
        return vec![(start, end)];
    }

    let mut segments = Vec::new();
    let mut position = start;
    let mut index = 0;
    while position < end {
        let length = dashes[index % dashes.len()] * units_per_px;
        let next = (position + length).min(end);
        if next <= position {
            // Dash shorter than the float resolution at this magnitude
            segments.push((position, end));
            break;
        }
        if index % 2 == 0 {
            segments.push((position, next));
        }
        position = next;
        index += 1;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_for(samples: Vec<i64>) -> PlotModel {
        let series = SampleSeries::from(samples);
        let summary = SampleSummary::from_series(&series).unwrap();
        PlotModel::new(&series, &summary)
    }

    #[test]
    fn test_reference_lines_follow_summary() {
        let model = model_for(vec![10, 20, 30, 100]);
        let mean = &model.reference_lines[0];
        let median = &model.reference_lines[1];

        assert_eq!(mean.label, "Mean");
        assert_eq!(mean.value, 40.0);
        assert_eq!(mean.style.color, Rgb::BLUE);
        assert_eq!(mean.style.pattern, LinePattern::Dashed);

        assert_eq!(median.label, "Median");
        assert_eq!(median.value, 25.0);
        assert_eq!(median.style.color, Rgb::GREEN);
        assert_eq!(median.style.pattern, LinePattern::DashDot);
    }

    #[test]
    fn test_series_styling_and_labels() {
        let model = model_for(vec![1, 2, 3]);
        assert_eq!(model.series_label, "Latency");
        assert_eq!(model.series_style.color, Rgb::RED);
        assert_eq!(model.series_style.width, 1.2);
        assert_eq!(model.title, "Latency per Iteration (µs)");
        assert_eq!(model.x_label, "Iteration");
        assert_eq!(model.y_label, "Latency (µs)");
        assert_eq!((model.width, model.height), (1200, 600));
        assert_eq!(model.grid_style.pattern, LinePattern::Dashed);
        assert_eq!(model.grid_style.alpha, 0.6);
    }

    #[test]
    fn test_points_are_indexed_by_iteration() {
        let model = model_for(vec![5, 15]);
        assert_eq!(model.points, vec![(0.0, 5.0), (1.0, 15.0)]);
    }

    #[test]
    fn test_ranges_cover_data_and_reference_lines() {
        let model = model_for(vec![100, 200, 900]);
        assert_eq!(model.x_range, AxisRange { start: 0.0, end: 2.0 });
        assert!(model.y_range.contains(100.0));
        assert!(model.y_range.contains(900.0));
        assert!(model.y_range.start < 100.0);
        assert!(model.y_range.end > 900.0);
        for line in &model.reference_lines {
            assert!(model.y_range.contains(line.value));
        }
    }

    #[test]
    fn test_single_sample_has_non_degenerate_ranges() {
        let model = model_for(vec![42]);
        assert!(model.x_range.span() > 0.0);
        assert_eq!(model.y_range, AxisRange { start: 41.0, end: 43.0 });
    }

    #[test]
    fn test_same_input_builds_identical_model() {
        assert_eq!(model_for(vec![3, 1, 4, 1, 5, 9, 2, 6]), model_for(vec![3, 1, 4, 1, 5, 9, 2, 6]));
    }

    #[test]
    fn test_config_overrides_title_and_size() {
        let series = SampleSeries::from(vec![1, 2]);
        let summary = SampleSummary::from_series(&series).unwrap();
        let mut config = Config::default();
        config.title = "Broadcast latency".to_string();
        config.width = 2400;
        config.height = 1200;

        let model = PlotModel::from_config(&series, &summary, &config);
        assert_eq!(model.title, "Broadcast latency");
        assert_eq!((model.width, model.height), (2400, 1200));
        assert_eq!(PlotModel::new(&series, &summary).title_font_px(), 22);
        assert_eq!(model.title_font_px(), 44);
    }

    #[test]
    fn test_stroke_widths_scale_with_figure() {
        let model = model_for(vec![1, 2]);
        let scale = model.scale();
        assert_eq!(model.series_style.stroke_px(scale), 2);
        assert_eq!(model.reference_lines[0].style.stroke_px(scale), 1);
    }

    #[test]
    fn test_dash_segments_solid() {
        assert_eq!(dash_segments(0.0, 10.0, LinePattern::Solid.dashes(), 1.0), vec![(0.0, 10.0)]);
    }

    #[test]
    fn test_dash_segments_dashed() {
        let segments = dash_segments(0.0, 30.0, LinePattern::Dashed.dashes(), 1.0);
        assert_eq!(segments, vec![(0.0, 8.0), (13.0, 21.0), (26.0, 30.0)]);
    }

    #[test]
    fn test_dash_segments_dash_dot() {
        let segments = dash_segments(0.0, 20.0, LinePattern::DashDot.dashes(), 1.0);
        assert_eq!(segments, vec![(0.0, 8.0), (12.0, 14.0), (18.0, 20.0)]);
    }

    #[test]
    fn test_dash_segments_scale_to_axis_units() {
        let segments = dash_segments(100.0, 113.0, LinePattern::Dashed.dashes(), 0.5);
        assert_eq!(segments, vec![(100.0, 104.0), (106.5, 110.5)]);
    }

    #[test]
    fn test_dash_segments_empty_span() {
        assert!(dash_segments(5.0, 5.0, LinePattern::Dashed.dashes(), 1.0).is_empty());
    }
}
