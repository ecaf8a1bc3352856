//! A small, explicit figure model. Figures are plain values built by the
//! [visualize][crate::visualize] functions and handed to [render] together
//! with an [Output]; nothing is kept in global state.
use std::ops::Range;
use std::path::PathBuf;

mod render;

pub use render::{export, render, show};

pub const DEFAULT_SIZE: (u32, u32) = (1024, 768);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Red,
    Green,
    Black,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub color: SeriesColor,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(color: SeriesColor, points: Vec<(f64, f64)>) -> Self {
        Series {
            label: None,
            color,
            points,
        }
    }

    pub fn labelled<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A single highlighted point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: Option<String>,
    pub color: SeriesColor,
    pub point: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<Series>,
    pub markers: Vec<Marker>,
    /// Fixed x extent. When `None` the extent of the data is used.
    pub x_range: Option<Range<f64>>,
    pub grid: bool,
}

impl Panel {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Panel {
            title: title.into(),
            x_label: None,
            y_label: None,
            series: Vec::new(),
            markers: Vec::new(),
            x_range: None,
            grid: false,
        }
    }

    pub fn x_label<S: Into<String>>(mut self, label: S) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label<S: Into<String>>(mut self, label: S) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Set the x extent. A zero-width extent is widened so it can be drawn.
    pub fn x_range(mut self, start: f64, end: f64) -> Self {
        self.x_range = Some(widen(start, end));
        self
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .chain(self.markers.iter().map(|m| m.point))
    }

    pub fn x_extent(&self) -> Range<f64> {
        match &self.x_range {
            Some(range) => range.clone(),
            None => {
                let (lo, hi) = extent(self.points().map(|p| p.0));
                widen(lo, hi)
            }
        }
    }

    /// Extent of the data along y with 5% padding on each side.
    pub fn y_extent(&self) -> Range<f64> {
        let (lo, hi) = extent(self.points().map(|p| p.1));
        let pad = (hi - lo) * 0.05;
        widen(lo - pad, hi + pad)
    }

    pub fn has_legend(&self) -> bool {
        self.series.iter().any(|s| s.label.is_some())
            || self.markers.iter().any(|m| m.label.is_some())
    }
}

/// Panels are stacked vertically, first on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
    pub size: (u32, u32),
}

impl Figure {
    pub fn new(size: (u32, u32)) -> Self {
        Figure {
            panels: Vec::new(),
            size,
        }
    }

    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new(DEFAULT_SIZE)
    }
}

/// Where a rendered figure goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Render to a temporary image, open it in the platform image viewer and
    /// block until the viewer process exits. The image is deleted afterwards.
    ///
    /// On Linux the viewer is `xdg-open` unless `PITCH_VISUALIZER_VIEWER` names
    /// another program. `xdg-open` usually returns as soon as the desktop viewer
    /// starts, so the call does not block and the viewer may find the image gone.
    /// Set `PITCH_VISUALIZER_VIEWER` to a viewer that stays in the foreground
    /// (`eog`, `feh`, ...) or use [Output::Export].
    Show,
    /// Write a PNG, or an SVG when the extension is `.svg`. Never blocks.
    Export(PathBuf),
}

/// Min and max of the finite values, `(0, 0)` when there are none.
fn extent<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0., 0.))
}

fn widen(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo {
        return lo..hi;
    }
    let pad = if lo == 0. { 1. } else { lo.abs() * 0.05 };
    (lo - pad)..(hi + pad)
}
