//! Chart rendering: draw a [`Chart`] to **SVG**, **PNG** or an in-memory RGB buffer.
//!
//! - Line chart of one series over calendar dates (fractional-year x axis)
//! - Choropleth: economies placed at their centroid on an equirectangular
//!   world grid, colored on a continuous Plasma scale with a color bar
//! - Bar chart over named categories
//!
//! Text goes through the `ab_glyph` path, which does not discover OS fonts;
//! [`ensure_fonts_registered`] loads a TTF file once per process.

pub mod text;
pub mod types;
pub mod util;

pub use types::{BarChart, Chart, ChoroplethMap, ImageFormat, LineChart, MapRegion};

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Datelike, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use text::truncate_to_width;
use util::{
    choose_axis_scale, compute_left_label_area_px, format_tick, normalize, office_color,
    padded_range, plasma, scaled_axis_title,
};

const MARGIN: u32 = 16;
const TITLE_PX: u32 = 24;
const LABEL_PX: u32 = 12;
const AXIS_DESC_PX: u32 = 16;
const Y_TICKS: usize = 10;

/// Latitudes outside this band hold no economies worth the space.
const MAP_LAT: (f64, f64) = (-60.0, 85.0);
const MAP_LON: (f64, f64) = (-180.0, 180.0);

static FONT: OnceLock<Result<PathBuf, String>> = OnceLock::new();

/// Font files tried in order. `preferred` first, then `MACRO_COPILOT_FONT`,
/// the user font directory and common system locations.
pub fn font_candidates(preferred: Option<&Path>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();
    out.extend(preferred.map(Path::to_path_buf));
    if let Ok(p) = std::env::var(crate::config::ENV_FONT)
        && !p.trim().is_empty()
    {
        out.push(PathBuf::from(p.trim()));
    }
    if let Some(dir) = dirs::font_dir() {
        out.push(dir.join("DejaVuSans.ttf"));
        out.push(dir.join("LiberationSans-Regular.ttf"));
    }
    out.extend(
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/Library/Fonts/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .into_iter()
        .map(PathBuf::from),
    );
    out
}

/// Register a "sans-serif" font for the `ab_glyph` text path.
///
/// Safe to call many times; the search only runs on the first call and its
/// outcome (the chosen file or the failure) is reused afterwards.
pub fn ensure_fonts_registered(preferred: Option<&Path>) -> Result<&'static Path> {
    match FONT.get_or_init(|| register_first_font(preferred)) {
        Ok(path) => Ok(path.as_path()),
        Err(e) => Err(anyhow!("{e}")),
    }
}

fn register_first_font(preferred: Option<&Path>) -> Result<PathBuf, String> {
    for path in font_candidates(preferred) {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        // registered fonts must outlive every chart
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes) {
            Ok(()) => {
                log::info!("using font {}", path.display());
                return Ok(path);
            }
            Err(_) => log::warn!("not a usable font: {}", path.display()),
        }
    }
    Err(format!(
        "no usable TTF font found; set {} to a .ttf file",
        crate::config::ENV_FONT
    ))
}

/// Render to `out_path`: SVG when the extension is `.svg`, PNG otherwise.
pub fn render_to_file<P: AsRef<Path>>(chart: &Chart, out_path: P, width: u32, height: u32) -> Result<()> {
    ensure_fonts_registered(None)?;
    let out_path = out_path.as_ref();
    let drawn = match ImageFormat::from_path(out_path) {
        ImageFormat::Svg => {
            let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
            draw_chart(root, chart)
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
            draw_chart(root, chart)
        }
    };
    drawn.with_context(|| format!("render {}", out_path.display()))
}

/// Render into a packed RGB buffer of `width * height * 3` bytes.
pub fn render_to_rgb(chart: &Chart, width: u32, height: u32) -> Result<Vec<u8>> {
    ensure_fonts_registered(None)?;
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw_chart(root, chart)?;
    }
    Ok(buf)
}

/// Draw `chart` onto any Plotters backend.
pub fn draw_chart<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, chart: &Chart) -> Result<()> {
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    match chart {
        Chart::Line(c) => draw_line_chart(&root, c)?,
        Chart::Choropleth(c) => draw_choropleth(&root, c)?,
        Chart::Bar(c) => draw_bar_chart(&root, c)?,
    }
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Date as a fractional year, e.g. 2020-07-01 -> ~2020.5.
pub fn decimal_year(date: NaiveDate) -> f64 {
    let days = if date.leap_year() { 366.0 } else { 365.0 };
    date.year() as f64 + date.ordinal0() as f64 / days
}

fn fitted_title<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, title: &str) -> String {
    let (w, _) = root.dim_in_pixel();
    truncate_to_width(title.trim(), TITLE_PX, w.saturating_sub(2 * MARGIN))
}

fn draw_line_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &LineChart) -> Result<()> {
    if chart.points.is_empty() {
        bail!("no data to plot");
    }
    let series: Vec<(f64, f64)> = chart
        .points
        .iter()
        .map(|(d, v)| (decimal_year(*d), *v))
        .collect();

    let (x_lo, x_hi) = min_max(series.iter().map(|p| p.0)).ok_or_else(|| anyhow!("no valid dates"))?;
    let (x_min, x_max) = if (x_hi - x_lo).abs() < f64::EPSILON {
        (x_lo - 1.0, x_hi + 1.0)
    } else {
        (x_lo, x_hi)
    };
    let (lo, hi) = min_max(series.iter().map(|p| p.1)).ok_or_else(|| anyhow!("no numeric values"))?;
    let (lo, hi) = padded_range(lo, hi);

    // large magnitudes are shown in thousands/millions/...
    let (yscale, scale_word) = choose_axis_scale(lo.abs().max(hi.abs()));
    let left = compute_left_label_area_px(lo / yscale, hi / yscale, Y_TICKS, LABEL_PX);

    let mut cc = ChartBuilder::on(root)
        .margin(MARGIN)
        .caption(fitted_title(root, &chart.title), (FontFamily::SansSerif, TITLE_PX))
        .set_label_area_size(LabelAreaPosition::Left, left)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(x_min..x_max, (lo / yscale)..(hi / yscale))
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |x: &f64| (x.round() as i32).to_string();
    let y_label_fmt = |v: &f64| format_tick(*v);
    let x_labels = ((x_max - x_min).ceil() as usize + 1).clamp(2, 12);
    cc.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(scaled_axis_title(&chart.y_label, scale_word))
        .x_labels(x_labels)
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, LABEL_PX))
        .axis_desc_style((FontFamily::SansSerif, AXIS_DESC_PX))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let color = office_color(0);
    let scaled: Vec<(f64, f64)> = series.iter().map(|(x, y)| (*x, *y / yscale)).collect();
    cc.draw_series(LineSeries::new(scaled.clone(), color.stroke_width(2)))
        .map_err(|e| anyhow!("{:?}", e))?;
    cc.draw_series(
        scaled
            .iter()
            .map(|(x, y)| Circle::new((*x, *y), 3, color.filled())),
    )
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_choropleth<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    map: &ChoroplethMap,
) -> Result<()> {
    let (lo, hi) = map.value_range().ok_or_else(|| anyhow!("no countries to draw"))?;
    let (w, _) = root.dim_in_pixel();
    let bar_w = (w / 8).clamp(90, 140);
    let (map_area, bar_area) = root.split_horizontally(w.saturating_sub(bar_w));

    let mut cc = ChartBuilder::on(&map_area)
        .margin(MARGIN)
        .caption(fitted_title(&map_area, &map.title), (FontFamily::SansSerif, TITLE_PX))
        .set_label_area_size(LabelAreaPosition::Left, 36)
        .set_label_area_size(LabelAreaPosition::Bottom, 28)
        .build_cartesian_2d(MAP_LON.0..MAP_LON.1, MAP_LAT.0..MAP_LAT.1)
        .map_err(|e| anyhow!("{:?}", e))?;

    let lon_fmt = |x: &f64| format!("{:.0}°", x);
    let lat_fmt = |y: &f64| format!("{:.0}°", y);
    cc.configure_mesh()
        .x_labels(13)
        .y_labels(7)
        .x_label_formatter(&lon_fmt)
        .y_label_formatter(&lat_fmt)
        .light_line_style(RGBColor(235, 240, 245))
        .bold_line_style(RGBColor(210, 218, 228))
        .label_style((FontFamily::SansSerif, 10))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    // smaller economies last so they stay visible on top of neighbours
    let mut regions: Vec<_> = map.regions.iter().collect();
    regions.sort_by(|a, b| b.value.total_cmp(&a.value));
    cc.draw_series(regions.iter().map(|r| {
        let color = plasma(normalize(r.value, lo, hi));
        EmptyElement::at((r.lon, r.lat))
            + Circle::new((0, 0), 6, color.filled())
            + Circle::new((0, 0), 6, BLACK.mix(0.35).stroke_width(1))
    }))
    .map_err(|e| anyhow!("{:?}", e))?;

    draw_color_bar(&bar_area, lo, hi)
}

fn draw_color_bar<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, lo: f64, hi: f64) -> Result<()> {
    const STEPS: usize = 64;
    let (lo_p, hi_p) = padded_range(lo, hi);
    let (yscale, scale_word) = choose_axis_scale(lo_p.abs().max(hi_p.abs()));
    let left = compute_left_label_area_px(lo_p / yscale, hi_p / yscale, 6, LABEL_PX);

    let mut cc = ChartBuilder::on(area)
        .margin_top(MARGIN + TITLE_PX + 8)
        .margin_bottom(MARGIN + 28)
        .margin_right(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, left.min(80))
        .build_cartesian_2d(0.0..1.0, (lo_p / yscale)..(hi_p / yscale))
        .map_err(|e| anyhow!("{:?}", e))?;

    let y_fmt = |v: &f64| format_tick(*v);
    cc.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&y_fmt)
        .y_desc(scaled_axis_title("Value", scale_word))
        .label_style((FontFamily::SansSerif, LABEL_PX))
        .axis_desc_style((FontFamily::SansSerif, LABEL_PX))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let step = (hi_p - lo_p) / STEPS as f64;
    cc.draw_series((0..STEPS).map(|i| {
        let y0 = lo_p + step * i as f64;
        let y1 = y0 + step;
        let color = plasma(normalize((y0 + y1) / 2.0, lo, hi));
        Rectangle::new([(0.0, y0 / yscale), (1.0, y1 / yscale)], color.filled())
    }))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_bar_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &BarChart) -> Result<()> {
    if chart.bars.is_empty() {
        bail!("no categories selected");
    }
    let n = chart.bars.len();
    // bars grow from zero
    let (lo, hi) = min_max(chart.bars.iter().map(|b| b.1).chain([0.0]))
        .ok_or_else(|| anyhow!("no values"))?;
    let (lo, hi) = padded_range(lo, hi * 1.05);
    let left = compute_left_label_area_px(lo, hi, Y_TICKS, LABEL_PX);

    let mut cc = ChartBuilder::on(root)
        .margin(MARGIN)
        .caption(fitted_title(root, &chart.title), (FontFamily::SansSerif, TITLE_PX))
        .set_label_area_size(LabelAreaPosition::Left, left)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d((0..n).into_segmented(), lo..hi)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => chart
            .bars
            .get(*i)
            .map(|(name, _)| name.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    let y_label_fmt = |v: &f64| format_tick(*v);
    cc.configure_mesh()
        .disable_x_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_labels(n)
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, LABEL_PX))
        .axis_desc_style((FontFamily::SansSerif, AXIS_DESC_PX))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let color = office_color(0);
    cc.draw_series(chart.bars.iter().enumerate().map(|(i, (_, v))| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), v.min(0.0)),
                (SegmentValue::Exact(i + 1), v.max(0.0)),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
