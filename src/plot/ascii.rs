//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each chart overlays any number of series against time. Line series are
//! drawn first so that measured points stay visible on top of them.

use crate::app::pipeline::RunOutput;
use crate::domain::CurveFile;
use crate::report::{model_title, room_title};

/// One series on a chart.
#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub label: String,
    pub glyph: char,
    pub points: Vec<(f64, f64)>,
    /// Connect consecutive points instead of marking each one.
    pub line: bool,
}

impl PlotSeries {
    pub fn points(label: &str, glyph: char, time: &[f64], values: &[f64]) -> Self {
        Self {
            label: label.to_string(),
            glyph,
            points: zip_points(time, values),
            line: false,
        }
    }

    pub fn line(label: &str, glyph: char, time: &[f64], values: &[f64]) -> Self {
        Self {
            label: label.to_string(),
            glyph,
            points: zip_points(time, values),
            line: true,
        }
    }
}

fn zip_points(time: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    time.iter().zip(values.iter()).map(|(&t, &y)| (t, y)).collect()
}

/// Render the four analysis charts: rod, room, both channels, and both
/// channels against the ideal curve.
pub fn render_analysis_charts(run: &RunOutput, width: usize, height: usize) -> String {
    let series = &run.ingest.series;
    let t = &series.seconds;

    let rod = PlotSeries::points("sensor A", 'a', t, &series.sensor_a);
    let room = PlotSeries::points("sensor B", 'b', t, &series.sensor_b);
    let ideal = PlotSeries::line("ideal", '-', t, &run.predicted);

    let charts = [
        render_chart("Copper Temperature", std::slice::from_ref(&rod), width, height),
        render_chart(&room_title(run.ingest.stats.avg), std::slice::from_ref(&room), width, height),
        render_chart(
            "Temperature of Copper MIXED",
            &[rod.clone(), room.clone()],
            width,
            height,
        ),
        render_chart(&model_title(&run.model), &[rod, room, ideal], width, height),
    ];

    charts.join("\n")
}

/// Render the predicted curve stored in a curve JSON file.
pub fn render_curve_file(curve: &CurveFile, width: usize, height: usize) -> String {
    let ideal = PlotSeries::line("ideal", '-', &curve.grid.time, &curve.grid.predicted);
    render_chart(&model_title(&curve.model), &[ideal], width, height)
}

/// Render a titled chart of several series on a shared time axis.
pub fn render_chart(title: &str, series: &[PlotSeries], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let all_points = || series.iter().flat_map(|s| s.points.iter());
    let (t_min, t_max) = axis_range(all_points().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = axis_range(all_points().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    for s in series.iter().filter(|s| s.line) {
        draw_curve(&mut grid, &s.points, t_min, t_max, y_min, y_max, s.glyph);
    }
    for s in series.iter().filter(|s| !s.line) {
        for &(t, y) in &s.points {
            if !(t.is_finite() && y.is_finite()) {
                continue;
            }
            let x = map_x(t, t_min, t_max, width);
            let yy = map_y(y, y_min, y_max, height);
            grid[yy][x] = s.glyph;
        }
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!(
        "Plot: t=[{t_min:.3}, {t_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let legend: Vec<String> = series.iter().map(|s| format!("{}={}", s.glyph, s.label)).collect();
    out.push_str(&legend.join("  "));
    out.push('\n');

    out
}

fn axis_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else if min.is_finite() && min == max {
        Some((min - 0.5, max + 0.5))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    t_min: f64,
    t_max: f64,
    y_min: f64,
    y_max: f64,
    ch: char,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, y) in curve {
        if !(t.is_finite() && y.is_finite()) {
            continue;
        }
        let x = map_x(t, t_min, t_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, ch);
        } else {
            grid[yy][x] = ch;
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_golden_snapshot_small() {
        let t = [0.0, 9.0];
        let series = [
            PlotSeries::points("rod", 'A', &t, &[10.0, 20.0]),
            PlotSeries::line("ideal", '-', &t, &[15.0, 15.0]),
        ];

        let txt = render_chart("Demo", &series, 10, 5);
        let expected = concat!(
            "Demo\n",
            "Plot: t=[0.000, 9.000] | y=[9.50, 20.50]\n",
            "         A\n",
            "          \n",
            "----------\n",
            "          \n",
            "A         \n",
            "A=rod  -=ideal\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_series_still_renders() {
        let t = [0.0, 1.0, 2.0];
        let series = [PlotSeries::points("room", 'b', &t, &[20.0, 20.0, 20.0])];
        let txt = render_chart("Flat", &series, 12, 6);
        assert_eq!(txt.lines().count(), 2 + 6 + 1);
        assert!(txt.contains('b'));
    }
}
