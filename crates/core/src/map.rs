//! Immutable 2D grid map parsed from a text layout.

use thiserror::Error;

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
}

/// Errors raised while parsing a text map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map text is empty")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unrecognized map glyph {glyph:?} at column {x}, row {y}")]
    InvalidGlyph { glyph: char, x: usize, y: usize },
}

/// The built-in level: a 16x16 bordered arena with a few interior walls.
pub const DEFAULT_LEVEL: &str = "\
################
#       #      #
#       #      #
#       #      #
#       #      #
#       #      #
#              #
#              #
#     #        #
#              #
#        #     #
#              #
#       ########
#  #           #
#              #
################";

/// Immutable row-major grid of [`Tile`]s.
///
/// Created once at startup and never mutated; every per-frame computation
/// reads it through [`Map::tile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Map {
    /// Parse a text grid where `#` is a wall and a space is open floor.
    ///
    /// Every row must be the same width.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut tiles = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in text.lines().enumerate() {
            if y == 0 {
                width = line.chars().count();
            } else {
                let found = line.chars().count();
                if found != width {
                    return Err(MapError::RaggedRow {
                        row: y,
                        found,
                        expected: width,
                    });
                }
            }

            for (x, glyph) in line.chars().enumerate() {
                tiles.push(match glyph {
                    '#' => Tile::Wall,
                    ' ' => Tile::Open,
                    other => return Err(MapError::InvalidGlyph { glyph: other, x, y }),
                });
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at integer grid coordinates; `None` outside the map.
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// True when the cell exists and is a wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.tile(x, y) == Some(Tile::Wall)
    }

    /// Display glyph for a tile, the inverse of [`Map::parse`].
    ///
    /// Used by the minimap overlay.
    pub fn glyph(&self, x: i32, y: i32) -> char {
        match self.tile(x, y) {
            Some(Tile::Wall) => '#',
            _ => ' ',
        }
    }
}
