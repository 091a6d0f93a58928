//! Render time-functions of a [`Motion`] into PNG figures
//!
//! A [`PlotRequest`] names the functions to draw together with parallel lists
//! of colors and labels and the output path. Mismatched list lengths are
//! tolerated: only the first `min(len)` entries are drawn.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use plotters::coord::ranged1d::Ranged;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::PlotError;
use crate::simulation::motion::{Motion, TimeFunction};
use crate::simulation::sampling::SampleGrid;

/// Number of ticks (and dashed grid lines) per axis
const TICKS: usize = 10;

/// Line colors, parsed from single-letter codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotColor {
    Blue,
    Red,
    Green,
    Black,
    Cyan,
    Magenta,
    Yellow,
}

impl PlotColor {
    pub fn rgb(self) -> RGBColor {
        match self {
            PlotColor::Blue => RGBColor(31, 119, 180),
            PlotColor::Red => RGBColor(214, 39, 40),
            PlotColor::Green => RGBColor(44, 160, 44),
            PlotColor::Black => BLACK,
            PlotColor::Cyan => RGBColor(23, 190, 207),
            PlotColor::Magenta => RGBColor(227, 119, 194),
            PlotColor::Yellow => RGBColor(188, 189, 34),
        }
    }
}

impl FromStr for PlotColor {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "b" | "blue" => Ok(PlotColor::Blue),
            "r" | "red" => Ok(PlotColor::Red),
            "g" | "green" => Ok(PlotColor::Green),
            "k" | "black" => Ok(PlotColor::Black),
            "c" | "cyan" => Ok(PlotColor::Cyan),
            "m" | "magenta" => Ok(PlotColor::Magenta),
            "y" | "yellow" => Ok(PlotColor::Yellow),
            other => Err(PlotError::UnknownColor(other.to_string())),
        }
    }
}

/// Functions to draw on one figure and where to save it
#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub funcs: Vec<TimeFunction>,
    pub colors: Vec<PlotColor>,
    pub labels: Vec<String>,
    pub save_to: PathBuf,
}

impl PlotRequest {
    /// Build a request from color codes such as `"b"` and `"r"`
    pub fn new(
        funcs: &[TimeFunction],
        colors: &[&str],
        labels: &[&str],
        save_to: impl Into<PathBuf>,
    ) -> Result<Self, PlotError> {
        let colors = colors.iter().map(|c| c.parse()).collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            funcs: funcs.to_vec(),
            colors,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            save_to: save_to.into(),
        })
    }

    /// Pair a set of functions with their own labels
    pub fn labelled(funcs: &[TimeFunction], colors: &[PlotColor], save_to: impl Into<PathBuf>) -> Self {
        Self {
            funcs: funcs.to_vec(),
            colors: colors.to_vec(),
            labels: funcs.iter().map(|f| f.label().to_string()).collect(),
            save_to: save_to.into(),
        }
    }

    /// Number of curves actually drawn
    pub fn len(&self) -> usize {
        self.funcs.len().min(self.colors.len()).min(self.labels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Figure title: every label, comma separated
    pub fn title(&self) -> String {
        self.labels.join(",")
    }
}

/// The three figures of a run: positions, velocities, accelerations
pub fn default_requests(out_dir: &Path) -> Vec<PlotRequest> {
    use TimeFunction::*;
    let colors = [PlotColor::Blue, PlotColor::Red];
    vec![
        PlotRequest::labelled(&[X, Xi], &colors, out_dir.join("x_and_xi_from_t.png")),
        PlotRequest::labelled(&[Vx, Vxi], &colors, out_dir.join("vx_and_vxi_from_t.png")),
        PlotRequest::labelled(&[Ax, Axi], &colors, out_dir.join("ax_and_axi_from_t.png")),
    ]
}

/// A rendered figure, RGB8 row-major
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Figure {
    /// Pixels with an opaque alpha channel appended
    pub fn rgba(&self) -> Vec<u8> {
        self.rgb
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
            .collect()
    }

    /// Encode as PNG at `self.path`
    pub fn save(&self) -> Result<(), PlotError> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.rgb.clone())
            .ok_or_else(|| PlotError::Render("pixel buffer does not match figure size".to_string()))?;
        img.save_with_format(&self.path, image::ImageFormat::Png)
            .map_err(|source| PlotError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Sample, render and save one request
pub fn plot(
    motion: &Motion,
    grid: &SampleGrid,
    request: &PlotRequest,
    size: (u32, u32),
) -> Result<Figure, PlotError> {
    let figure = render(motion, grid, request, size)?;
    figure.save()?;
    info!("saved {:?} ({})", figure.path, figure.title);
    Ok(figure)
}

/// Sample and render one request into memory
pub fn render(
    motion: &Motion,
    grid: &SampleGrid,
    request: &PlotRequest,
    size: (u32, u32),
) -> Result<Figure, PlotError> {
    let n = request.len();
    if n != request.funcs.len() || n != request.colors.len() || n != request.labels.len() {
        warn!(
            "plot request for {:?} has {} functions, {} colors, {} labels; drawing {n}",
            request.save_to,
            request.funcs.len(),
            request.colors.len(),
            request.labels.len()
        );
    }

    // Fresh grid and fresh evaluation for every figure
    let ts = grid.points();
    let series: Vec<Vec<f64>> = request.funcs[..n]
        .iter()
        .map(|&f| ts.iter().map(|&t| motion.eval(f, t)).collect())
        .collect();
    debug!("rendering {} series of {} points", series.len(), ts.len());

    let x_range = x_bounds(grid);
    let y_range = y_bounds(&series);
    let legend_at = best_legend_position(&ts, &series, x_range, y_range);

    let (width, height) = size;
    let mut rgb = vec![u8::MAX; width as usize * height as usize * 3];
    let title = request.title();

    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .caption(&title, ("sans-serif", 22))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(TICKS)
            .y_labels(TICKS)
            .x_desc("t")
            .axis_desc_style(("sans-serif", 18))
            .draw()?;

        // Dashed grid on the tick positions
        let grid_style = BLACK.mix(0.7).stroke_width(1);
        let x_ticks = chart.as_coord_spec().x_spec().key_points(TICKS);
        let y_ticks = chart.as_coord_spec().y_spec().key_points(TICKS);
        for x in x_ticks {
            chart.draw_series(DashedLineSeries::new(
                [(x, y_range.0), (x, y_range.1)],
                6,
                4,
                grid_style,
            ))?;
        }
        for y in y_ticks {
            chart.draw_series(DashedLineSeries::new(
                [(x_range.0, y), (x_range.1, y)],
                6,
                4,
                grid_style,
            ))?;
        }

        for ((ys, color), label) in series.iter().zip(&request.colors).zip(&request.labels) {
            let color = color.rgb();
            chart
                .draw_series(LineSeries::new(
                    ts.iter().copied().zip(ys.iter().copied()),
                    color.stroke_width(1),
                ))?
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        if n > 0 {
            chart
                .configure_series_labels()
                .position(legend_at)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;
    }

    Ok(Figure {
        title,
        path: request.save_to.clone(),
        width,
        height,
        rgb,
    })
}

fn x_bounds(grid: &SampleGrid) -> (f64, f64) {
    if grid.tf > grid.t0 {
        (grid.t0, grid.tf)
    } else {
        (grid.t0 - 1.0, grid.t0 + 1.0)
    }
}

/// Min/max over every finite sample, padded by 5%
fn y_bounds(series: &[Vec<f64>]) -> (f64, f64) {
    let (lo, hi) = series
        .iter()
        .flatten()
        .filter(|y| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)));

    if lo > hi {
        (-1.0, 1.0)
    } else if lo == hi {
        (lo - 1.0, hi + 1.0)
    } else {
        let pad = 0.05 * (hi - lo);
        (lo - pad, hi + pad)
    }
}

/// Candidate legend spots, tried in this order
const LEGEND_SPOTS: [(SeriesLabelPosition, (f64, f64), (f64, f64)); 9] = [
    (SeriesLabelPosition::UpperRight, (0.65, 1.0), (0.75, 1.0)),
    (SeriesLabelPosition::UpperLeft, (0.0, 0.35), (0.75, 1.0)),
    (SeriesLabelPosition::LowerLeft, (0.0, 0.35), (0.0, 0.25)),
    (SeriesLabelPosition::LowerRight, (0.65, 1.0), (0.0, 0.25)),
    (SeriesLabelPosition::MiddleRight, (0.65, 1.0), (0.375, 0.625)),
    (SeriesLabelPosition::MiddleLeft, (0.0, 0.35), (0.375, 0.625)),
    (SeriesLabelPosition::LowerMiddle, (0.325, 0.675), (0.0, 0.25)),
    (SeriesLabelPosition::UpperMiddle, (0.325, 0.675), (0.75, 1.0)),
    (SeriesLabelPosition::MiddleMiddle, (0.325, 0.675), (0.375, 0.625)),
];

/// Pick the legend spot that covers the fewest samples
pub fn best_legend_position(
    ts: &[f64],
    series: &[Vec<f64>],
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> SeriesLabelPosition {
    let norm = |v: f64, (lo, hi): (f64, f64)| (v - lo) / (hi - lo);
    let covered = |(x0, x1): (f64, f64), (y0, y1): (f64, f64)| {
        series
            .iter()
            .flat_map(|ys| ts.iter().zip(ys))
            .filter(|&(&t, &y)| {
                let (u, w) = (norm(t, x_range), norm(y, y_range));
                (x0..=x1).contains(&u) && (y0..=y1).contains(&w)
            })
            .count()
    };

    let mut best = (SeriesLabelPosition::UpperRight, usize::MAX);
    for (pos, xs, ys) in LEGEND_SPOTS {
        let count = covered(xs, ys);
        if count < best.1 {
            best = (pos, count);
        }
    }
    best.0
}
