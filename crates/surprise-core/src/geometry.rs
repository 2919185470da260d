//! Surface geometry.
//!
//! Simulation runs on a virtual surface measured in surface units (roughly
//! pixels). A terminal cell covers `cell_width x cell_height` units.

/// Default horizontal size of a terminal cell in surface units.
pub const DEFAULT_CELL_WIDTH: f32 = 8.0;

/// Default vertical size of a terminal cell in surface units.
pub const DEFAULT_CELL_HEIGHT: f32 = 16.0;

/// A position on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Dimensions of the drawing surface and how it maps onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width in units.
    pub width: f32,
    /// Surface height in units.
    pub height: f32,
    /// Units per terminal column.
    pub cell_width: f32,
    /// Units per terminal row.
    pub cell_height: f32,
}

impl Viewport {
    /// Viewport of the given size using the default cell metrics.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }

    /// Viewport covering a terminal of `columns x rows` cells.
    pub fn from_cells(columns: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        let cell_width = cell_width.max(1.0);
        let cell_height = cell_height.max(1.0);
        Self {
            width: columns as f32 * cell_width,
            height: rows as f32 * cell_height,
            cell_width,
            cell_height,
        }
    }

    /// Center of the surface.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether the surface has no drawable area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether a point lies on the surface.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }

    /// Terminal cell (column, row) covering a point, if it lies on the surface.
    pub fn cell_at(&self, p: Point) -> Option<(u16, u16)> {
        if !p.x.is_finite() || !p.y.is_finite() || !self.contains(p) {
            return None;
        }
        let col = (p.x / self.cell_width) as u16;
        let row = (p.y / self.cell_height) as u16;
        Some((col, row))
    }
}
