//! Mapping between the world lattice and the display grid.
//!
//! World Y grows upward, display Y grows downward. The world rectangle is
//! centered so the origin falls on a grid line.

use std::fmt;
use std::ops::RangeInclusive;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::raster::Point;

/// Grid size in whole cells per axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Units {
    pub x: u16,
    pub y: u16,
}

impl Units {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Smallest even grid, within `min_units..=max_units`, that shows every point
/// with `padding` spare cells around it.
///
/// An odd `max_units` axis is rounded down to the even count below it, so the
/// result is always even.
///
/// Only the single largest coordinate magnitude is considered, so both axes
/// are sized for a bounding square. Lines that are long on one axis and short
/// on the other get a taller grid than they need.
pub fn required_extent<I>(points: I, min_units: Units, max_units: Units, padding: u32) -> Units
where
    I: IntoIterator<Item = Point>,
{
    debug_assert!(min_units.x <= max_units.x && min_units.y <= max_units.y);

    let magnitude = points.into_iter().map(Point::max_abs).max().unwrap_or(0);
    let required = 2 * (u64::from(magnitude) + u64::from(padding));

    Units {
        x: fit_axis(required, min_units.x, max_units.x),
        y: fit_axis(required, min_units.y, max_units.y),
    }
}

fn fit_axis(required: u64, min: u16, max: u16) -> u16 {
    let cap = u64::from(max) - u64::from(max) % 2;
    let size = required.max(u64::from(min));
    let even = size + size % 2;
    even.min(cap) as u16
}

/// Labels go on every other grid line.
pub fn shows_axis_label(value: i32) -> bool {
    value % 2 == 0
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle in display space, `(x0, y0)` top-left.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DisplayRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl DisplayRect {
    pub fn center(&self) -> DisplayPoint {
        DisplayPoint {
            x: (self.x0 + self.x1) / 2.0,
            y: (self.y0 + self.y1) / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Shrinks the rectangle by `by` on every side.
    pub fn inset(&self, by: f64) -> DisplayRect {
        DisplayRect {
            x0: self.x0 + by,
            y0: self.y0 + by,
            x1: self.x1 - by,
            y1: self.y1 - by,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// One line of the grid, `offset` pixels from the left (vertical) or top
/// (horizontal) edge of the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    pub offset: f64,
    pub value: i32,
    pub is_axis: bool,
}

/// The current mapping window between world and display coordinates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Viewport {
    units: Units,
    cell_size: u32,
    x_min: i32,
    y_min: i32,
}

impl Viewport {
    pub fn new(units: Units, cell_size: u32) -> Self {
        debug_assert!(cell_size > 0, "cell size must be positive");

        let viewport = Viewport {
            units,
            cell_size,
            x_min: (-i32::from(units.x)).div_euclid(2),
            y_min: (-i32::from(units.y)).div_euclid(2),
        };
        trace!("viewport {} at {}px per cell: {}", units, cell_size, viewport);
        viewport
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    fn x_max_edge(&self) -> i32 {
        self.x_min + i32::from(self.units.x)
    }

    fn y_max_edge(&self) -> i32 {
        self.y_min + i32::from(self.units.y)
    }

    /// World x of every column, left to right.
    pub fn x_range(&self) -> RangeInclusive<i32> {
        self.x_min..=self.x_max_edge() - 1
    }

    /// World y of every row, bottom to top.
    pub fn y_range(&self) -> RangeInclusive<i32> {
        self.y_min..=self.y_max_edge() - 1
    }

    pub fn contains(&self, p: Point) -> bool {
        self.x_min <= p.x && p.x < self.x_max_edge() && self.y_min <= p.y && p.y < self.y_max_edge()
    }

    fn cell(&self) -> f64 {
        f64::from(self.cell_size)
    }

    fn canvas_width(&self) -> f64 {
        self.cell() * f64::from(self.units.x)
    }

    fn canvas_height(&self) -> f64 {
        self.cell() * f64::from(self.units.y)
    }

    pub fn canvas_size(&self) -> DisplaySize {
        DisplaySize {
            width: self.canvas_width(),
            height: self.canvas_height(),
        }
    }

    /// Canvas size clamped to what fits on screen.
    pub fn visible_size(&self, max: DisplaySize) -> DisplaySize {
        DisplaySize {
            width: self.canvas_width().min(max.width),
            height: self.canvas_height().min(max.height),
        }
    }

    /// Whether the canvas overflows `max` horizontally and vertically.
    pub fn needs_scroll(&self, max: DisplaySize) -> (bool, bool) {
        (self.canvas_width() > max.width, self.canvas_height() > max.height)
    }

    pub fn cell_to_display_rect(&self, p: Point) -> DisplayRect {
        let column = (i64::from(p.x) - i64::from(self.x_min)) as f64;
        let row = (i64::from(p.y) - i64::from(self.y_min)) as f64;
        let cell = self.cell();
        let height = self.canvas_height();

        DisplayRect {
            x0: column * cell,
            y0: height - (row + 1.0) * cell,
            x1: (column + 1.0) * cell,
            y1: height - row * cell,
        }
    }

    /// Center of the cell at `p`, where the ideal line passes through.
    pub fn point_to_display_center(&self, p: Point) -> DisplayPoint {
        let column = (i64::from(p.x) - i64::from(self.x_min)) as f64;
        let row = (i64::from(p.y) - i64::from(self.y_min)) as f64;
        let cell = self.cell();

        DisplayPoint {
            x: (column + 0.5) * cell,
            y: self.canvas_height() - (row + 0.5) * cell,
        }
    }

    pub fn grid_lines(&self) -> impl Iterator<Item = GridLine> {
        let viewport = *self;
        let cell = self.cell();

        let vertical = (0..=self.units.x).map(move |i| {
            let value = viewport.x_min + i32::from(i);
            GridLine {
                orientation: Orientation::Vertical,
                offset: f64::from(i) * cell,
                value,
                is_axis: value == 0,
            }
        });
        let horizontal = (0..=self.units.y).map(move |i| {
            let value = viewport.y_min + i32::from(viewport.units.y - i);
            GridLine {
                orientation: Orientation::Horizontal,
                offset: f64::from(i) * cell,
                value,
                is_axis: value == 0,
            }
        });

        vertical.chain(horizontal)
    }

    /// Every cell of the grid, top row first.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let x_range = self.x_range();
        self.y_range()
            .rev()
            .flat_map(move |y| x_range.clone().map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid: [{}, {}] x [{}, {}]",
            self.x_min,
            self.x_max_edge() - 1,
            self.y_min,
            self.y_max_edge() - 1
        )
    }
}
