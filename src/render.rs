//! SVG plot of a tour.
//!
//! The plot is a pure consumer of the final tour and the node coordinates;
//! nothing flows back into the colony.

use crate::error::AcoError;
use crate::nodes::Point;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera};

/// Default marker radius, in node-label units.
pub const DEFAULT_POINT_RADIUS: f64 = std::f64::consts::SQRT_2;

/// Pixels per unit of marker radius.
const MARKER_SCALE: f64 = 2.5;

const TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{{ total_width }}" height="{{ total_height }}" viewBox="0 0 {{ total_width }} {{ total_height }}">
  <title>{{ name }}</title>
  <rect width="100%" height="100%" fill="white"/>
  <path d="{{ path }}" fill="none" stroke="#1f77b4" stroke-width="2"/>
{% for p in points %}  <circle cx="{{ p.x }}" cy="{{ p.y }}" r="{{ radius }}" fill="#ff7f0e"/>
  <text x="{{ p.x }}" y="{{ p.y }}" dx="{{ radius }}" dy="-{{ radius }}" font-size="10">{{ p.label }}</text>
{% endfor %}</svg>
"##;

/// Builds the coordinate sequence of a closed tour: every node in tour
/// order, then the first node again.
///
/// # Errors
/// - [`AcoError::NoResultAvailable`] for an empty tour.
/// - [`AcoError::UnknownNode`] if the tour references a node outside
///   `points`.
pub fn closed_path(tour: &[usize], points: &[Point]) -> Result<Vec<Point>, AcoError> {
    if tour.is_empty() {
        return Err(AcoError::NoResultAvailable);
    }

    let mut path = Vec::with_capacity(tour.len() + 1);
    for &i in tour {
        let point = points.get(i).ok_or(AcoError::UnknownNode {
            index: i,
            len: points.len(),
        })?;
        path.push(*point);
    }
    path.push(path[0]);
    Ok(path)
}

/// SVG canvas settings.
#[derive(Debug, Clone)]
pub struct TourPlot {
    pub width: usize,
    pub height: usize,
    pub padding: usize,
    pub point_radius: f64,
}

impl Default for TourPlot {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            padding: 40,
            point_radius: DEFAULT_POINT_RADIUS,
        }
    }
}

/// Maps plane coordinates onto the padded canvas, y axis pointing up.
struct Canvas {
    min_x: f64,
    min_y: f64,
    span_x: f64,
    span_y: f64,
    width: f64,
    height: f64,
    padding: f64,
}

impl Canvas {
    fn fit(points: &[Point], plot: &TourPlot) -> Self {
        let (min_x, min_y, max_x, max_y) = points.iter().fold(
            (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |acc, p| (acc.0.min(p.x), acc.1.min(p.y), acc.2.max(p.x), acc.3.max(p.y)),
        );
        let span = |lo: f64, hi: f64| if hi > lo { hi - lo } else { 1.0 };

        Self {
            min_x,
            min_y,
            span_x: span(min_x, max_x),
            span_y: span(min_y, max_y),
            width: plot.width as f64,
            height: plot.height as f64,
            padding: plot.padding as f64,
        }
    }

    fn project(&self, p: &Point) -> (f64, f64) {
        let x = (p.x - self.min_x) / self.span_x * self.width + self.padding;
        let y = self.height + self.padding - (p.y - self.min_y) / self.span_y * self.height;
        (x, y)
    }
}

impl TourPlot {
    pub fn with_point_radius(mut self, r: f64) -> Self {
        self.point_radius = r;
        self
    }

    /// Renders the closed tour as an SVG document.
    ///
    /// Nodes are labelled with 1-based indices.
    pub fn render_svg(&self, tour: &[usize], points: &[Point], name: &str) -> Result<String, AcoError> {
        let path = closed_path(tour, points)?;
        let canvas = Canvas::fit(&path, self);

        let d = path
            .iter()
            .enumerate()
            .map(|(k, p)| {
                let (x, y) = canvas.project(p);
                format!("{} {x:.2} {y:.2}", if k == 0 { "M" } else { "L" })
            })
            .collect::<Vec<_>>()
            .join(" ");

        let markers: Vec<HashMap<&str, String>> = tour
            .iter()
            .zip(&path)
            .map(|(&i, p)| {
                let (x, y) = canvas.project(p);
                HashMap::from([
                    ("x", format!("{x:.2}")),
                    ("y", format!("{y:.2}")),
                    ("label", (i + 1).to_string()),
                ])
            })
            .collect();

        let mut context = Context::new();
        context.insert("name", name);
        context.insert("total_width", &(self.width + 2 * self.padding));
        context.insert("total_height", &(self.height + 2 * self.padding));
        context.insert("path", &d);
        context.insert("radius", &format!("{:.2}", self.point_radius * MARKER_SCALE));
        context.insert("points", &markers);

        Ok(Tera::one_off(TEMPLATE, &context, true)?)
    }

    /// Renders and writes the SVG to `path`.
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        tour: &[usize],
        points: &[Point],
        name: &str,
    ) -> Result<(), AcoError> {
        let svg = self.render_svg(tour, points, name)?;
        std::fs::write(path.as_ref(), svg)?;
        tracing::info!(path = %path.as_ref().display(), "tour plot written");
        Ok(())
    }
}
