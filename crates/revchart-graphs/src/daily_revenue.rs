//! Daily revenue line chart.
//!
//! Draws revenue over time as a line with circular markers and a translucent
//! area down to zero, on a dashed grid, then crops the canvas to its content
//! and writes a PNG named after the dataset.

use crate::axis::{date_axis_range, month_ticks, revenue_axis_range, revenue_ticks, TickedAxis};
use crate::context::{encode_png, write_atomically, CanvasArea, RenderContext};
use crate::traits::GraphRenderer;
use crate::utils::to_rgb;
use chrono::{Datelike, NaiveDate};
use plotters::element::{DashedPathElement, DottedPathElement};
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};
use revchart_common::{
    chart_file_name, format_currency, format_month_label, ChartArtifact, ChartError, ChartRequest,
    DailyRevenueRecord, Result, RevenuePoint, DAILY_REVENUE_SUFFIX,
};
use revchart_config::{ChartStyle, Config, GridLineStyle};
use std::path::Path;
use tracing::{debug, info};

/// Margin around the plot, in points.
const CHART_MARGIN_POINTS: f64 = 10.0;

/// Parses and date-sorts records.
///
/// Records sharing a date keep their input order. Fails on empty input, on
/// the first unparseable date, and on negative or non-finite revenue.
pub fn prepare_series(records: &[DailyRevenueRecord]) -> Result<Vec<RevenuePoint>> {
    if records.is_empty() {
        return Err(ChartError::EmptyInput);
    }

    let mut points = records
        .iter()
        .enumerate()
        .map(|(index, record)| record.parse(index))
        .collect::<Result<Vec<_>>>()?;

    points.sort_by_key(|point| point.date);
    Ok(points)
}

/// Resolved colors for one render.
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: RGBColor,
    text: RGBColor,
    line: RGBColor,
    marker_edge: RGBColor,
    grid: RGBColor,
}

impl Palette {
    fn from_style(style: &ChartStyle) -> Result<Self> {
        Ok(Self {
            background: to_rgb("chart.background_color", &style.background_color)?,
            text: to_rgb("chart.text_color", &style.text_color)?,
            line: to_rgb("chart.line_color", &style.line_color)?,
            marker_edge: to_rgb("chart.marker_edge_color", &style.marker_edge_color)?,
            grid: to_rgb("chart.grid.color", &style.grid.color)?,
        })
    }
}

/// Dates are plotted as days since 0001-01-01.
fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

#[allow(clippy::cast_possible_truncation)]
fn date_from_day_number(value: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
}

/// Renderer for the daily revenue chart.
#[derive(Debug, Clone)]
pub struct DailyRevenueChart {
    style: ChartStyle,
    file_suffix: String,
}

impl DailyRevenueChart {
    /// Creates a renderer from a validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            style: config.chart.clone(),
            file_suffix: config.output.file_suffix.clone(),
        })
    }

    /// The style this renderer draws with.
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Chart title for a dataset.
    pub fn title(dataset_label: &str) -> String {
        format!("Daily Revenue - {dataset_label}")
    }

    /// Output file name for a dataset.
    pub fn file_name(&self, dataset_label: &str) -> String {
        chart_file_name(dataset_label, &self.file_suffix)
    }

    /// Renders a request and writes the image into its output directory.
    pub fn render(&self, request: &ChartRequest) -> Result<ChartArtifact> {
        self.render_to_file(
            &request.records,
            &request.output_directory,
            &request.dataset_label,
        )
    }

    /// Renders records into PNG bytes.
    ///
    /// Nothing is written to disk.
    pub fn render_to_bytes(
        &self,
        records: &[DailyRevenueRecord],
        dataset_label: &str,
    ) -> Result<Vec<u8>> {
        let points = prepare_series(records)?;
        debug!(
            dataset = dataset_label,
            points = points.len(),
            "rendering daily revenue chart"
        );

        let palette = Palette::from_style(&self.style)?;
        let (width, height) = self.style.canvas_size();

        let mut ctx = RenderContext::new(width, height, palette.background)?;
        ctx.draw(|root| self.draw_chart(root, &points, dataset_label, &palette))?;

        let pad = self.style.inches_to_pixels(self.style.pad_inches);
        let image = ctx.crop_to_content(pad)?;
        encode_png(&image)
    }

    fn draw_chart(
        &self,
        root: &CanvasArea<'_>,
        points: &[RevenuePoint],
        dataset_label: &str,
        palette: &Palette,
    ) -> Result<()> {
        let style = &self.style;
        let px = |size: f64| style.points_to_pixels(size);

        let date_range = date_axis_range(points)?;
        let first_date = points.first().map_or(date_range.start, |p| p.date);
        let x_ticks: Vec<f64> = month_ticks(&date_range, first_date)
            .into_iter()
            .map(day_number)
            .collect();
        let x_range = day_number(date_range.start)..day_number(date_range.end);

        let y_range = revenue_axis_range(points);
        let y_ticks = revenue_ticks(&y_range);

        let family = style.fonts.family.as_str();
        let font = |size: f64| (family, f64::from(px(size))).into_font();
        let title_style = font(style.fonts.title_size)
            .style(FontStyle::Bold)
            .color(&palette.text);
        let axis_desc_style = font(style.fonts.axis_label_size).color(&palette.text);
        let tick_style = font(style.fonts.tick_label_size).color(&palette.text);
        let x_tick_style = if style.rotate_date_labels {
            tick_style.transform(FontTransform::Rotate90)
        } else {
            tick_style.clone()
        };

        // rotated month labels stand upright below the axis
        let tick_px = px(style.fonts.tick_label_size);
        let desc_px = px(style.fonts.axis_label_size);
        let x_area = if style.rotate_date_labels {
            tick_px * 5 + desc_px * 2
        } else {
            tick_px * 2 + desc_px * 2
        };
        let y_area = tick_px * 6 + desc_px * 2;

        let mut chart = ChartBuilder::on(root)
            .caption(Self::title(dataset_label), title_style)
            .margin(px(CHART_MARGIN_POINTS))
            .x_label_area_size(x_area)
            .y_label_area_size(y_area)
            .build_cartesian_2d(
                TickedAxis::new(x_range.clone(), x_ticks.clone()),
                TickedAxis::new(y_range.clone(), y_ticks.clone()),
            )?;

        if style.grid.enabled {
            let grid_style = palette
                .grid
                .mix(style.grid.alpha)
                .stroke_width(px(style.grid.line_width));
            let line_style = style.grid.line_style;
            let pattern = line_style
                .pattern_points()
                .map(|(dash, gap)| (px(dash), px(gap)));
            let dot_radius = (px(style.grid.line_width) / 2).max(1);

            let verticals = x_ticks.iter().map(|&x| {
                (
                    chart.backend_coord(&(x, y_range.end)),
                    chart.backend_coord(&(x, y_range.start)),
                )
            });
            let horizontals = y_ticks.iter().map(|&y| {
                (
                    chart.backend_coord(&(x_range.start, y)),
                    chart.backend_coord(&(x_range.end, y)),
                )
            });

            for (from, to) in verticals.chain(horizontals) {
                match (line_style, pattern) {
                    (GridLineStyle::Dotted, Some((dot, gap))) => {
                        let dot_style = grid_style.filled();
                        root.draw(&DottedPathElement::new(
                            vec![from, to],
                            0,
                            dot + gap,
                            move |c| Circle::new(c, dot_radius, dot_style),
                        ))?;
                    }
                    (_, Some((dash, gap))) => {
                        root.draw(&DashedPathElement::new(vec![from, to], dash, gap, grid_style))?;
                    }
                    (_, None) => root.draw(&PathElement::new(vec![from, to], grid_style))?,
                }
            }
        }

        let x_formatter = |x: &f64| {
            date_from_day_number(*x)
                .map(|date| format_month_label(&date))
                .unwrap_or_default()
        };
        let y_formatter = |y: &f64| format_currency(*y);

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(x_ticks.len())
            .y_labels(y_ticks.len())
            .x_desc("Date")
            .y_desc("Revenue (USD)")
            .axis_desc_style(axis_desc_style)
            .x_label_style(x_tick_style)
            .y_label_style(tick_style)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .axis_style(palette.text)
            .draw()?;

        let series: Vec<(f64, f64)> = points
            .iter()
            .map(|point| (day_number(point.date), point.revenue))
            .collect();

        chart.draw_series(AreaSeries::new(
            series.iter().copied(),
            0.0,
            palette.line.mix(style.fill_alpha).filled(),
        ))?;

        chart.draw_series(LineSeries::new(
            series.iter().copied(),
            palette
                .line
                .mix(style.line_alpha)
                .stroke_width(px(style.line_width)),
        ))?;

        let radius = px(style.marker_size / 2.0);
        let marker_fill = palette.line.mix(style.line_alpha).filled();
        chart.draw_series(
            series
                .iter()
                .map(|&coord| Circle::new(coord, radius, marker_fill)),
        )?;

        if style.marker_edge_width > 0.0 {
            let marker_edge = palette
                .marker_edge
                .stroke_width(px(style.marker_edge_width));
            chart.draw_series(
                series
                    .iter()
                    .map(|&coord| Circle::new(coord, radius, marker_edge)),
            )?;
        }

        Ok(())
    }
}

impl Default for DailyRevenueChart {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            file_suffix: DAILY_REVENUE_SUFFIX.to_string(),
        }
    }
}

impl GraphRenderer for DailyRevenueChart {
    type Data = [DailyRevenueRecord];

    fn render_to_file(
        &self,
        data: &[DailyRevenueRecord],
        output_directory: &Path,
        dataset_label: &str,
    ) -> Result<ChartArtifact> {
        let bytes = Self::render_to_bytes(self, data, dataset_label)?;
        let file_path = write_atomically(output_directory, &self.file_name(dataset_label), &bytes)?;

        info!(
            dataset = dataset_label,
            path = %file_path.display(),
            bytes = bytes.len(),
            "saved daily revenue chart"
        );
        Ok(ChartArtifact { file_path })
    }

    fn render_to_bytes(&self, data: &[DailyRevenueRecord], dataset_label: &str) -> Result<Vec<u8>> {
        Self::render_to_bytes(self, data, dataset_label)
    }

    fn name(&self) -> &'static str {
        "daily_revenue"
    }

    fn description(&self) -> &'static str {
        "Daily revenue over time with markers and a filled area down to zero"
    }
}
