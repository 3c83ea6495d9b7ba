use std::{
    collections::BTreeMap,
    fs,
    io::{self, Cursor},
    ops::Range,
    path::{Path, PathBuf},
};

use image::{ImageOutputFormat, RgbImage};
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::options::{ChartOptions, LineColor, MarkerStyle};
use crate::sample::{SampleLabel, TimingSample};

/// 10x6 inches at 100 dpi.
pub const CANVAS_SIZE: (u32, u32) = (1000, 600);

impl LineColor {
    fn rgb(self) -> RGBColor {
        match self {
            LineColor::Blue => RGBColor(31, 119, 180),
            LineColor::Black => BLACK,
            LineColor::Red => RGBColor(214, 39, 40),
            LineColor::Green => RGBColor(44, 160, 44),
            LineColor::Orange => RGBColor(255, 127, 14),
        }
    }
}

/// Everything the drawing code needs, derived from the samples in file order.
#[derive(Debug)]
struct PlotData {
    points: Vec<(i64, f64)>,
    x_range: Range<i64>,
    ticks: BTreeMap<i64, String>,
    y_range: Range<f64>,
}

impl PlotData {
    fn new(samples: &[TimingSample], options: &ChartOptions) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptySeries);
        }

        let positions = x_positions(samples);
        let points = plottable_points(&positions, samples, options.log_scale_y);
        let masked = samples.len() - points.len();
        if masked > 0 {
            warn!(masked, log_scale = options.log_scale_y, "samples left out of the plot");
        }

        let values = points.iter().map(|&(_, y)| y).collect::<Vec<f64>>();
        let y_range = if options.log_scale_y {
            log_y_range(&values)
        } else {
            linear_y_range(&values)
        }
        .ok_or(Error::EmptySeries)?;

        // Both bounds are present since samples is non-empty.
        let min_x = positions.iter().copied().min().unwrap_or(0);
        let max_x = positions.iter().copied().max().unwrap_or(0);

        let x_range = padded_x_range(min_x, max_x).ok_or_else(|| {
            Error::Draw(format!("puzzle sizes {}..{} are too far apart to plot", min_x, max_x))
        })?;

        Ok(PlotData {
            points,
            x_range,
            ticks: tick_labels(&positions, samples, options.x_tick_stride),
            y_range,
        })
    }

    fn draw_on<DB>(&self, root: DrawingArea<DB, Shift>, options: &ChartOptions) -> Result<()>
    where
        DB: DrawingBackend,
    {
        let (lo, hi) = (self.y_range.start, self.y_range.end);
        if options.log_scale_y {
            self.draw(&root, options, (lo..hi).log_scale())
        } else {
            self.draw(&root, options, lo..hi)
        }
    }

    fn draw<DB, Y>(&self, root: &DrawingArea<DB, Shift>, options: &ChartOptions, y: Y) -> Result<()>
    where
        DB: DrawingBackend,
        Y: AsRangedCoord<Value = f64>,
        Y::CoordDescType: ValueFormatter<f64>,
    {
        root.fill(&WHITE).map_err(draw_err)?;

        let tick_positions = self.ticks.keys().copied().collect::<Vec<i64>>();
        let x = self.x_range.clone().with_key_points(tick_positions.clone());

        let mut chart = ChartBuilder::on(root)
            .caption(&options.title, ("sans-serif", 28).into_font())
            .margin(20)
            .x_label_area_size(if options.rotate_x_labels { 80 } else { 45 })
            .y_label_area_size(90)
            .build_cartesian_2d(x, y)
            .map_err(draw_err)?;

        let x_formatter = |x: &i64| self.ticks.get(x).cloned().unwrap_or_default();
        let y_formatter = |y: &f64| format_time(*y);
        let x_label_style = if options.rotate_x_labels {
            ("sans-serif", 12).into_font().transform(FontTransform::Rotate90)
        } else {
            ("sans-serif", 14).into_font()
        };

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(options.x_label.as_str())
            .y_desc(options.y_label.as_str())
            .axis_desc_style(("sans-serif", 16))
            .x_labels(tick_positions.len().max(1))
            .x_label_formatter(&x_formatter)
            .x_label_style(x_label_style)
            .y_label_formatter(&y_formatter)
            .light_line_style(&BLACK.mix(0.04))
            .bold_line_style(&BLACK.mix(0.15));
        if !options.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(draw_err)?;

        let color = options.color.rgb();
        chart
            .draw_series(LineSeries::new(self.points.iter().copied(), color.stroke_width(2)))
            .map_err(draw_err)?
            .label(options.series_label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        match options.marker {
            MarkerStyle::Circle => {
                chart
                    .draw_series(self.points.iter().map(|&p| Circle::new(p, 4, color.filled())))
                    .map_err(draw_err)?;
            }
            MarkerStyle::Cross => {
                chart
                    .draw_series(self.points.iter().map(|&p| Cross::new(p, 4, color.stroke_width(2))))
                    .map_err(draw_err)?;
            }
            MarkerStyle::Triangle => {
                chart
                    .draw_series(self.points.iter().map(|&p| TriangleMarker::new(p, 5, color.filled())))
                    .map_err(draw_err)?;
            }
            MarkerStyle::None => {}
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 14))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

fn draw_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Draw(err.to_string())
}

/// Integer sizes are placed at their value; any other label puts the samples
/// on a categorical axis at their index.
fn x_positions(samples: &[TimingSample]) -> Vec<i64> {
    let sizes = samples
        .iter()
        .map(|sample| match sample.label {
            SampleLabel::Size(size) => Some(size),
            SampleLabel::Name(_) => None,
        })
        .collect::<Option<Vec<i64>>>();

    sizes.unwrap_or_else(|| (0..samples.len() as i64).collect())
}

/// One unit of padding on both sides. The padded width must itself fit in an
/// `i64`, since the coordinate mapping subtracts the range start.
fn padded_x_range(min_x: i64, max_x: i64) -> Option<Range<i64>> {
    let lo = min_x.checked_sub(1)?;
    let hi = max_x.checked_add(1)?;
    hi.checked_sub(lo)?;
    Some(lo..hi)
}

/// Labels for every `stride`-th sample, counted in file order from the first.
fn tick_labels(positions: &[i64], samples: &[TimingSample], stride: usize) -> BTreeMap<i64, String> {
    let mut ticks = BTreeMap::new();
    for (&position, sample) in positions.iter().zip(samples).step_by(stride.max(1)) {
        ticks.entry(position).or_insert_with(|| sample.label.to_string());
    }
    ticks
}

/// A log axis has no place for zero or negative times; non-finite times fit
/// on neither axis.
fn plottable_points(positions: &[i64], samples: &[TimingSample], log_scale: bool) -> Vec<(i64, f64)> {
    positions
        .iter()
        .zip(samples)
        .map(|(&x, sample)| (x, sample.elapsed))
        .filter(|&(_, y)| y.is_finite() && (!log_scale || y > 0.0))
        .collect()
}

fn linear_y_range(values: &[f64]) -> Option<Range<f64>> {
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;

    let lo = min.min(0.0);
    let hi = if max > lo { max } else { lo + 1.0 };
    let pad = (hi - lo) * 0.05;
    let lo = if lo < 0.0 { lo - pad } else { lo };
    Some(lo..hi + pad)
}

fn log_y_range(values: &[f64]) -> Option<Range<f64>> {
    let min = values.iter().copied().filter(|v| *v > 0.0).reduce(f64::min)?;
    let max = values.iter().copied().filter(|v| *v > 0.0).reduce(f64::max)?;
    Some(min / 2.0..max * 2.0)
}

fn format_time(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e5 || magnitude < 1e-3 {
        format!("{:.0e}", value)
    } else {
        let text = format!("{:.3}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"))
}

fn encode_png(buffer: Vec<u8>, (width, height): (u32, u32)) -> Result<Vec<u8>> {
    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| Error::Draw("bitmap does not match canvas size".to_string()))?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageOutputFormat::Png)?;
    Ok(bytes.into_inner())
}

fn draw_bytes(data: &PlotData, options: &ChartOptions) -> Result<Vec<u8>> {
    if is_svg(&options.output_path) {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, CANVAS_SIZE).into_drawing_area();
            data.draw_on(root, options)?;
        }
        Ok(svg.into_bytes())
    } else {
        let (width, height) = CANVAS_SIZE;
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, CANVAS_SIZE).into_drawing_area();
            data.draw_on(root, options)?;
        }
        encode_png(buffer, CANVAS_SIZE)
    }
}

/// Draws the chart and returns the encoded image: SVG when `output_path` ends
/// in `.svg`, PNG otherwise. Nothing is written to disk.
pub fn render_to_bytes(samples: &[TimingSample], options: &ChartOptions) -> Result<Vec<u8>> {
    options.validate()?;
    let data = PlotData::new(samples, options)?;
    draw_bytes(&data, options)
}

/// Renders the samples and writes the image to `options.output_path`.
///
/// The image is fully drawn and encoded before the file is created, so a
/// failure never leaves a partial chart behind.
pub fn render_chart(samples: &[TimingSample], options: &ChartOptions) -> Result<PathBuf> {
    options.validate()?;
    let data = PlotData::new(samples, options)?;

    let path = &options.output_path;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(Error::io(
                parent,
                io::Error::new(io::ErrorKind::NotFound, "output directory does not exist"),
            ));
        }
    }

    let bytes = draw_bytes(&data, options)?;
    fs::write(path, &bytes).map_err(|err| Error::io(path, err))?;

    info!(
        path = %path.display(),
        samples = samples.len(),
        bytes = bytes.len(),
        "chart written"
    );
    Ok(path.clone())
}
