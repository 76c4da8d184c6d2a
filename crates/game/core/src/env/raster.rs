//! Tile-grid collision map addressed in pixels.
use crate::geometry::{Rect, Vec2};

use super::{CollisionMap, LevelError, TileKind};

/// Row-major tile grid with square tiles of `tile_size` pixels.
///
/// The raster spans `[0, width * tile_size) x [0, height * tile_size)`; any
/// point outside classifies as [`TileKind::Outside`].
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionRaster {
    width: u32,
    height: u32,
    tile_size: f32,
    tiles: Vec<TileKind>,
}

impl CollisionRaster {
    pub fn new(
        width: u32,
        height: u32,
        tile_size: f32,
        tiles: Vec<TileKind>,
    ) -> Result<Self, LevelError> {
        if width == 0 || height == 0 {
            return Err(LevelError::EmptyLevel { width, height });
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(LevelError::ZeroTileSize);
        }
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(LevelError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self {
            width,
            height,
            tile_size,
            tiles,
        })
    }

    /// Grid filled with a single kind.
    pub fn filled(
        width: u32,
        height: u32,
        tile_size: f32,
        kind: TileKind,
    ) -> Result<Self, LevelError> {
        Self::new(
            width,
            height,
            tile_size,
            vec![kind; width as usize * height as usize],
        )
    }

    /// Builds a raster from rows of already-classified tiles.
    pub fn from_rows<R>(rows: &[R], tile_size: f32) -> Result<Self, LevelError>
    where
        R: AsRef<[TileKind]>,
    {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LevelError::RaggedRow {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }

        Self::new(width as u32, rows.len() as u32, tile_size, tiles)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Tile at grid coordinates, `None` outside the grid.
    pub fn tile(&self, column: i64, row: i64) -> Option<TileKind> {
        if column < 0 || row < 0 || column >= self.width as i64 || row >= self.height as i64 {
            return None;
        }
        self.tiles
            .get(row as usize * self.width as usize + column as usize)
            .copied()
    }

    /// Overwrites a single tile. Only meant for level construction; the
    /// simulation treats the map as immutable.
    pub fn set_tile(&mut self, column: u32, row: u32, kind: TileKind) -> bool {
        if column >= self.width || row >= self.height {
            return false;
        }
        let index = row as usize * self.width as usize + column as usize;
        self.tiles[index] = kind;
        true
    }

    /// Fills the inclusive tile rectangle `[c0, c1] x [r0, r1]`.
    pub fn fill(&mut self, columns: (u32, u32), rows: (u32, u32), kind: TileKind) {
        for row in rows.0..=rows.1 {
            for column in columns.0..=columns.1 {
                self.set_tile(column, row, kind);
            }
        }
    }

    pub fn pixel_to_tile(&self, point: Vec2) -> (i64, i64) {
        (
            (point.x / self.tile_size).floor() as i64,
            (point.y / self.tile_size).floor() as i64,
        )
    }
}

impl CollisionMap for CollisionRaster {
    fn classify(&self, point: Vec2) -> TileKind {
        if !point.is_finite() {
            return TileKind::Outside;
        }
        let (column, row) = self.pixel_to_tile(point);
        self.tile(column, row).unwrap_or(TileKind::Outside)
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn sample() -> CollisionRaster {
        let mut raster = CollisionRaster::filled(4, 3, 16.0, TileKind::Empty).unwrap();
        raster.fill((0, 3), (2, 2), TileKind::Dirt);
        raster.set_tile(2, 1, TileKind::Ladder);
        raster
    }

    #[test]
    fn classifies_at_pixel_resolution() {
        let raster = sample();
        assert_eq!(raster.classify(Vec2::new(0.0, 0.0)), TileKind::Empty);
        assert_eq!(raster.classify(Vec2::new(15.9, 31.9)), TileKind::Empty);
        assert_eq!(raster.classify(Vec2::new(15.9, 32.0)), TileKind::Dirt);
        assert_eq!(raster.classify(Vec2::new(40.0, 20.0)), TileKind::Ladder);
    }

    #[test]
    fn points_beyond_bounds_are_outside() {
        let raster = sample();
        assert_eq!(raster.classify(Vec2::new(-0.1, 5.0)), TileKind::Outside);
        assert_eq!(raster.classify(Vec2::new(64.0, 5.0)), TileKind::Outside);
        assert_eq!(raster.classify(Vec2::new(5.0, 48.0)), TileKind::Outside);
        assert_eq!(raster.classify(Vec2::new(f32::NAN, 5.0)), TileKind::Outside);
        assert!(raster.is_solid(Vec2::new(5.0, -1.0)));
    }

    #[test]
    fn bounds_span_the_whole_grid() {
        assert_eq!(sample().bounds(), Rect::new(0.0, 0.0, 64.0, 48.0));
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert_eq!(
            CollisionRaster::filled(0, 3, 16.0, TileKind::Empty),
            Err(LevelError::EmptyLevel {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            CollisionRaster::filled(2, 2, 0.0, TileKind::Empty),
            Err(LevelError::ZeroTileSize)
        );
        let err = CollisionRaster::filled(2, 2, -1.0, TileKind::Empty).unwrap_err();
        assert!(err.severity().is_fatal());
        assert_eq!(err.severity().as_str(), "fatal");
        assert_eq!(
            CollisionRaster::new(2, 2, 8.0, vec![TileKind::Empty; 3]),
            Err(LevelError::TileCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![
            vec![TileKind::Empty, TileKind::Empty],
            vec![TileKind::Dirt],
        ];
        assert_eq!(
            CollisionRaster::from_rows(&rows, 8.0),
            Err(LevelError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }
}
