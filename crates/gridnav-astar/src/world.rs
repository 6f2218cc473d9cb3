//! The [`GridWorld`] — a static map of cell types plus the affine transform
//! between world space and grid coordinates.

use gridnav_core::{Point, Range, Vec2};

use crate::agent::MAX_CELL_TYPES;
use crate::error::WorldError;

/// A row-major grid of cell types with a world↔grid transform.
///
/// World point `w` lies over grid cell `round((w - offset) / scale)`, and
/// grid cell `p` is centred on `p * scale + offset`.
///
/// The owner edits the world between searches; a search only reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWorld {
    width: u16,
    height: u16,
    cells: Vec<u8>,
    offset: Vec2,
    scale: f32,
}

impl GridWorld {
    /// Create a world of the given size with every cell set to type `0`,
    /// identity transform.
    pub fn new(width: u16, height: u16) -> Result<Self, WorldError> {
        Self::from_cells(width, height, vec![0; width as usize * height as usize])
    }

    /// Create a world from a row-major cell buffer, identity transform.
    pub fn from_cells(width: u16, height: u16, cells: Vec<u8>) -> Result<Self, WorldError> {
        let world = Self {
            width,
            height,
            cells,
            offset: Vec2::ZERO,
            scale: 1.0,
        };
        world.validate()?;
        Ok(world)
    }

    /// Parse a world from rows of hexadecimal digits, one digit per cell
    /// type (`'0'..='9'`, `'a'..='f'`). Whitespace around rows is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, WorldError> {
        let rows: Vec<&str> = rows.iter().map(|r| r.trim()).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let mut n = 0;
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let value = ch
                    .to_digit(16)
                    .ok_or(WorldError::InvalidChar { ch, pos })?;
                cells.push(value as u8);
                n += 1;
            }
            if n != width {
                return Err(WorldError::CellCountMismatch {
                    expected: width * rows.len(),
                    actual: width * y + n,
                });
            }
        }
        let width = u16::try_from(width).map_err(|_| WorldError::TooLarge)?;
        let height = u16::try_from(rows.len()).map_err(|_| WorldError::TooLarge)?;
        Self::from_cells(width, height, cells)
    }

    /// Builder-style variant of [`set_transform`](Self::set_transform).
    pub fn with_transform(mut self, offset: Vec2, scale: f32) -> Result<Self, WorldError> {
        self.set_transform(offset, scale)?;
        Ok(self)
    }

    /// Replace the world↔grid transform.
    pub fn set_transform(&mut self, offset: Vec2, scale: f32) -> Result<(), WorldError> {
        check_transform(offset, scale)?;
        self.offset = offset;
        self.scale = scale;
        Ok(())
    }

    /// Check every precondition a search relies on.
    ///
    /// Constructors already enforce these; a deserialized world may not.
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.width == 0 || self.height == 0 {
            return Err(WorldError::EmptyGrid);
        }
        let expected = self.width as usize * self.height as usize;
        if self.cells.len() != expected {
            return Err(WorldError::CellCountMismatch {
                expected,
                actual: self.cells.len(),
            });
        }
        check_transform(self.offset, self.scale)?;
        if let Some(i) = self
            .cells
            .iter()
            .position(|&c| c as usize >= MAX_CELL_TYPES)
        {
            return Err(WorldError::InvalidCellType {
                pos: self.point(i),
                value: self.cells[i],
            });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Grid extent as a range starting at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width as i32, self.height as i32)
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Row-major cell types.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell type at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u8> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell type at `p`.
    pub fn set(&mut self, p: Point, cell_type: u8) -> Result<(), WorldError> {
        if cell_type as usize >= MAX_CELL_TYPES {
            return Err(WorldError::InvalidCellType {
                pos: p,
                value: cell_type,
            });
        }
        let i = self.index(p).ok_or(WorldError::OutOfBounds(p))?;
        self.cells[i] = cell_type;
        Ok(())
    }

    /// Set every cell to `cell_type`.
    pub fn fill(&mut self, cell_type: u8) -> Result<(), WorldError> {
        if cell_type as usize >= MAX_CELL_TYPES {
            return Err(WorldError::InvalidCellType {
                pos: Point::ZERO,
                value: cell_type,
            });
        }
        self.cells.fill(cell_type);
        Ok(())
    }

    /// Map a world-space point to the nearest grid cell.
    ///
    /// Points outside the grid are clamped onto the nearest border cell
    /// rather than rejected.
    pub fn to_grid(&self, w: Vec2) -> Point {
        let g = ((w - self.offset) * (1.0 / self.scale)).round();
        let p = Point::new(g.x as i32, g.y as i32);
        self.range().clamp(p).unwrap_or(Point::ZERO)
    }

    /// World-space position of grid cell `p`.
    pub fn to_world(&self, p: Point) -> Vec2 {
        Vec2::new(
            p.x as f32 * self.scale + self.offset.x,
            p.y as f32 * self.scale + self.offset.y,
        )
    }

    /// Flat index of `p`, or `None` outside the grid.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width as i32 || p.y >= self.height as i32 {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Grid point of flat index `idx`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Cell type at a flat index.
    #[inline]
    pub(crate) fn cell_at(&self, idx: usize) -> u8 {
        self.cells[idx]
    }
}

fn check_transform(offset: Vec2, scale: f32) -> Result<(), WorldError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(WorldError::InvalidScale(scale));
    }
    if !offset.is_finite() {
        return Err(WorldError::InvalidOffset);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_type_zero() {
        let w = GridWorld::new(4, 3).unwrap();
        assert_eq!(w.cell_count(), 12);
        assert_eq!(w.range(), Range::sized(4, 3));
        assert!(w.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn rejects_empty_and_mismatched_grids() {
        assert_eq!(GridWorld::new(0, 3), Err(WorldError::EmptyGrid));
        assert_eq!(
            GridWorld::from_cells(2, 2, vec![1; 3]),
            Err(WorldError::CellCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            GridWorld::from_cells(2, 1, vec![1, 16]),
            Err(WorldError::InvalidCellType {
                pos: Point::new(1, 0),
                value: 16
            })
        );
    }

    #[test]
    fn from_rows_parses_hex_digits() {
        let w = GridWorld::from_rows(&["01f", "a20"]).unwrap();
        assert_eq!((w.width(), w.height()), (3, 2));
        assert_eq!(w.at(Point::new(2, 0)), Some(15));
        assert_eq!(w.at(Point::new(0, 1)), Some(10));
        assert_eq!(w.at(Point::new(3, 0)), None);
    }

    #[test]
    fn from_rows_rejects_ragged_and_bad_chars() {
        assert!(matches!(
            GridWorld::from_rows(&["111", "11"]),
            Err(WorldError::CellCountMismatch { .. })
        ));
        assert_eq!(
            GridWorld::from_rows(&["1x"]),
            Err(WorldError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 0)
            })
        );
        assert_eq!(GridWorld::from_rows(&[]), Err(WorldError::EmptyGrid));
    }

    #[test]
    fn set_and_fill() {
        let mut w = GridWorld::new(3, 3).unwrap();
        w.fill(2).unwrap();
        w.set(Point::new(1, 1), 0).unwrap();
        assert_eq!(w.at(Point::new(1, 1)), Some(0));
        assert_eq!(w.at(Point::new(0, 1)), Some(2));
        assert_eq!(
            w.set(Point::new(3, 0), 1),
            Err(WorldError::OutOfBounds(Point::new(3, 0)))
        );
        assert!(w.set(Point::ZERO, 99).is_err());
        assert!(w.fill(16).is_err());
    }

    #[test]
    fn transform_round_trip() {
        let w = GridWorld::new(10, 10)
            .unwrap()
            .with_transform(Vec2::new(-5.0, 2.0), 0.5)
            .unwrap();
        let p = Point::new(3, 7);
        let wp = w.to_world(p);
        assert_eq!(wp, Vec2::new(-3.5, 5.5));
        assert_eq!(w.to_grid(wp), p);
        // Nearest cell wins.
        assert_eq!(w.to_grid(Vec2::new(-3.4, 5.6)), p);
    }

    #[test]
    fn to_grid_clamps_out_of_range_points() {
        let w = GridWorld::new(4, 3).unwrap();
        assert_eq!(w.to_grid(Vec2::new(-10.0, -10.0)), Point::new(0, 0));
        assert_eq!(w.to_grid(Vec2::new(100.0, 1.0)), Point::new(3, 1));
        assert_eq!(w.to_grid(Vec2::new(2.0, 1e9)), Point::new(2, 2));
    }

    #[test]
    fn rejects_bad_transform() {
        let mut w = GridWorld::new(2, 2).unwrap();
        assert_eq!(w.set_transform(Vec2::ZERO, 0.0), Err(WorldError::InvalidScale(0.0)));
        assert!(w.set_transform(Vec2::ZERO, f32::INFINITY).is_err());
        assert_eq!(
            w.set_transform(Vec2::new(f32::NAN, 0.0), 1.0),
            Err(WorldError::InvalidOffset)
        );
        // Failed edits leave the transform untouched.
        assert_eq!(w.scale(), 1.0);
        assert_eq!(w.offset(), Vec2::ZERO);
    }

    #[test]
    fn index_and_point_agree() {
        let w = GridWorld::new(5, 4).unwrap();
        for p in w.range() {
            let i = w.index(p).unwrap();
            assert_eq!(w.point(i), p);
        }
        assert_eq!(w.index(Point::new(-1, 0)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn world_round_trip() {
        let w = GridWorld::from_rows(&["012", "345"])
            .unwrap()
            .with_transform(Vec2::new(1.0, 2.0), 4.0)
            .unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let back: GridWorld = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
        assert!(back.validate().is_ok());
    }
}
