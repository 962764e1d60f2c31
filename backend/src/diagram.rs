//! SVG diagram of two segments and their relationship.

use segment_core::{format_coordinate, format_point, Relationship, Segment};

const PLOT_WIDTH: f64 = 600.0;
const PLOT_HEIGHT: f64 = 300.0;
const MARGIN: f64 = 48.0;
const TITLE_HEIGHT: f64 = 32.0;
const LEGEND_WIDTH: f64 = 320.0;
const GRID_LINES: f64 = 8.0;
/// Upper bound on grid lines per axis.
const MAX_GRID_LINES: usize = 64;

const FIRST_COLOR: &str = "blue";
const SECOND_COLOR: &str = "green";

/// World-to-screen mapping for the plot area. World y points up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// Fit all points with 10% padding. Flat extents widen to a unit span.
    pub fn fit(points: &[(f64, f64)]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if points.is_empty() {
            (x_min, x_max, y_min, y_max) = (0.0, 0.0, 0.0, 0.0);
        }

        let (x_min, x_max) = pad(x_min, x_max);
        let (y_min, y_max) = pad(y_min, y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let sx = MARGIN + (x - self.x_min) / (self.x_max - self.x_min) * PLOT_WIDTH;
        let sy = TITLE_HEIGHT + MARGIN + (self.y_max - y) / (self.y_max - self.y_min) * PLOT_HEIGHT;
        (sx, sy)
    }

    fn contains_x(&self, x: f64) -> bool {
        self.x_min <= x && x <= self.x_max
    }

    fn contains_y(&self, y: f64) -> bool {
        self.y_min <= y && y <= self.y_max
    }
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span < 1e-9 {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - span * 0.1, hi + span * 0.1)
}

/// Round a raw grid step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let base = 10f64.powf(exponent);
    let fraction = raw / base;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

fn grid_values(lo: f64, hi: f64) -> Vec<f64> {
    let step = nice_step((hi - lo) / GRID_LINES);
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if !step.is_finite() || step <= 0.0 || !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }

    let count = last - first;
    if count >= MAX_GRID_LINES as f64 {
        return Vec::new();
    }

    let mut values: Vec<f64> = (0..=count as usize)
        .map(|i| (first + i as f64) * step)
        .filter(|v| lo <= *v && *v <= hi)
        .collect();
    // beyond 2^53 neighbouring indices can collapse onto the same value
    values.dedup();
    values
}

enum Marker {
    Line { width: f64, opacity: f64, dashed: bool },
    Dot { radius: f64 },
    Cross,
}

struct LegendEntry {
    color: &'static str,
    marker: Marker,
    label: String,
}

/// Render the full diagram: grid, axes, both segments, the relationship
/// markers, a legend and the summary as title.
pub fn render(first: &Segment, second: &Segment, relationship: &Relationship) -> String {
    let mut points = vec![
        (first.start.x, first.start.y),
        (first.end.x, first.end.y),
        (second.start.x, second.start.y),
        (second.end.x, second.end.y),
    ];
    match *relationship {
        Relationship::NoRelation => {}
        Relationship::Point { x, y } => points.push((x, y)),
        Relationship::Range { x_start, y_start, x_end, y_end } => {
            points.push((x_start, y_start));
            points.push((x_end, y_end));
        }
    }
    let view = Viewport::fit(&points);

    let width = MARGIN * 2.0 + PLOT_WIDTH + LEGEND_WIDTH;
    let height = TITLE_HEIGHT + MARGIN * 2.0 + PLOT_HEIGHT;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\" font-size=\"12\">\n",
        w = width,
        h = height
    );
    svg.push_str(&format!(
        "<text class=\"title\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
        MARGIN + PLOT_WIDTH / 2.0,
        TITLE_HEIGHT - 8.0,
        relationship.summary()
    ));

    draw_grid(&mut svg, &view);
    draw_axes(&mut svg, &view);

    let mut legend = Vec::new();
    draw_segment(&mut svg, &view, first, FIRST_COLOR, "Segment 1", &mut legend);
    draw_segment(&mut svg, &view, second, SECOND_COLOR, "Segment 2", &mut legend);

    match *relationship {
        Relationship::NoRelation => {}
        Relationship::Point { x, y } => {
            let (sx, sy) = view.to_screen(x, y);
            svg.push_str(&cross(sx, sy, 8.0, "red"));
            legend.push(LegendEntry {
                color: "red",
                marker: Marker::Cross,
                label: format!("Intersection point {}", format_point(x, y)),
            });
        }
        Relationship::Range { x_start, y_start, x_end, y_end } => {
            let (x1, y1) = view.to_screen(x_start, y_start);
            let (x2, y2) = view.to_screen(x_end, y_end);
            svg.push_str(&format!(
                "<circle class=\"overlap-start\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"7\" fill=\"black\"/>\n",
                x1, y1
            ));
            svg.push_str(&format!(
                "<circle class=\"overlap-end\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"7\" fill=\"gray\"/>\n",
                x2, y2
            ));
            svg.push_str(&format!(
                "<line class=\"overlap\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"red\" stroke-width=\"2\" stroke-dasharray=\"6 4\"/>\n",
                x1, y1, x2, y2
            ));
            legend.push(LegendEntry {
                color: "black",
                marker: Marker::Dot { radius: 6.0 },
                label: format!("Overlap start {}", format_point(x_start, y_start)),
            });
            legend.push(LegendEntry {
                color: "gray",
                marker: Marker::Dot { radius: 6.0 },
                label: format!("Overlap end {}", format_point(x_end, y_end)),
            });
            legend.push(LegendEntry {
                color: "red",
                marker: Marker::Line { width: 2.0, opacity: 1.0, dashed: true },
                label: "Overlap range".to_string(),
            });
        }
    }

    draw_legend(&mut svg, &legend);
    svg.push_str("</svg>\n");
    svg
}

fn draw_grid(svg: &mut String, view: &Viewport) {
    let (left, top) = view.to_screen(view.x_min, view.y_max);
    let (right, bottom) = view.to_screen(view.x_max, view.y_min);

    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"white\" stroke=\"black\"/>\n",
        left,
        top,
        right - left,
        bottom - top
    ));

    for x in grid_values(view.x_min, view.x_max) {
        let (sx, _) = view.to_screen(x, 0.0);
        svg.push_str(&format!(
            "<line class=\"grid\" x1=\"{sx:.2}\" y1=\"{top:.2}\" x2=\"{sx:.2}\" y2=\"{bottom:.2}\" stroke=\"gray\" stroke-width=\"0.5\" stroke-dasharray=\"4 3\"/>\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>\n",
            sx,
            bottom + 16.0,
            format_coordinate(x)
        ));
    }
    for y in grid_values(view.y_min, view.y_max) {
        let (_, sy) = view.to_screen(0.0, y);
        svg.push_str(&format!(
            "<line class=\"grid\" x1=\"{left:.2}\" y1=\"{sy:.2}\" x2=\"{right:.2}\" y2=\"{sy:.2}\" stroke=\"gray\" stroke-width=\"0.5\" stroke-dasharray=\"4 3\"/>\n"
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\">{}</text>\n",
            left - 6.0,
            sy + 4.0,
            format_coordinate(y)
        ));
    }

    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">x</text>\n",
        (left + right) / 2.0,
        bottom + 34.0
    ));
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">y</text>\n",
        left - 36.0,
        (top + bottom) / 2.0
    ));
}

fn draw_axes(svg: &mut String, view: &Viewport) {
    if view.contains_y(0.0) {
        let (x1, y) = view.to_screen(view.x_min, 0.0);
        let (x2, _) = view.to_screen(view.x_max, 0.0);
        svg.push_str(&format!(
            "<line class=\"axis\" x1=\"{x1:.2}\" y1=\"{y:.2}\" x2=\"{x2:.2}\" y2=\"{y:.2}\" stroke=\"black\" stroke-width=\"0.5\"/>\n"
        ));
    }
    if view.contains_x(0.0) {
        let (x, y1) = view.to_screen(0.0, view.y_max);
        let (_, y2) = view.to_screen(0.0, view.y_min);
        svg.push_str(&format!(
            "<line class=\"axis\" x1=\"{x:.2}\" y1=\"{y1:.2}\" x2=\"{x:.2}\" y2=\"{y2:.2}\" stroke=\"black\" stroke-width=\"0.5\"/>\n"
        ));
    }
}

fn draw_segment(
    svg: &mut String,
    view: &Viewport,
    segment: &Segment,
    color: &'static str,
    name: &str,
    legend: &mut Vec<LegendEntry>,
) {
    let (x1, y1) = view.to_screen(segment.start.x, segment.start.y);
    if segment.is_degenerate() {
        svg.push_str(&format!(
            "<circle class=\"segment\" cx=\"{x1:.2}\" cy=\"{y1:.2}\" r=\"5\" fill=\"{color}\"/>\n"
        ));
        legend.push(LegendEntry {
            color,
            marker: Marker::Dot { radius: 5.0 },
            label: format!("{} (segment \u{2192} point)", name),
        });
        return;
    }

    let (x2, y2) = view.to_screen(segment.end.x, segment.end.y);
    svg.push_str(&format!(
        "<line class=\"segment\" x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"8\" stroke-opacity=\"0.5\" stroke-linecap=\"round\"/>\n"
    ));
    legend.push(LegendEntry {
        color,
        marker: Marker::Line { width: 8.0, opacity: 0.5, dashed: false },
        label: name.to_string(),
    });
}

fn cross(x: f64, y: f64, half: f64, color: &str) -> String {
    format!(
        "<path class=\"intersection\" d=\"M {:.2} {:.2} L {:.2} {:.2} M {:.2} {:.2} L {:.2} {:.2}\" stroke=\"{}\" stroke-width=\"3\"/>\n",
        x - half,
        y - half,
        x + half,
        y + half,
        x - half,
        y + half,
        x + half,
        y - half,
        color
    )
}

fn draw_legend(svg: &mut String, entries: &[LegendEntry]) {
    let left = MARGIN * 2.0 + PLOT_WIDTH - 24.0;
    let mut y = TITLE_HEIGHT + MARGIN + 12.0;

    svg.push_str("<g class=\"legend\">\n");
    for entry in entries {
        match entry.marker {
            Marker::Line { width, opacity, dashed } => {
                let dash = if dashed { " stroke-dasharray=\"6 4\"" } else { "" };
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"{}/>\n",
                    left,
                    y,
                    left + 24.0,
                    y,
                    entry.color,
                    width,
                    opacity,
                    dash
                ));
            }
            Marker::Dot { radius } => {
                svg.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>\n",
                    left + 12.0,
                    y,
                    radius,
                    entry.color
                ));
            }
            Marker::Cross => svg.push_str(&cross(left + 12.0, y, 6.0, entry.color)),
        }
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\">{}</text>\n",
            left + 32.0,
            y + 4.0,
            entry.label
        ));
        y += 22.0;
    }
    svg.push_str("</g>\n");
}
