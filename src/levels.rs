//! Level layouts
//!
//! Each level is a grid of characters. `-` is an empty cell, `M` a two-hit
//! brick, `H` a three-hit brick, and anything else (spaces included) a
//! one-hit brick. Rows may be shorter than the first row; the missing cells
//! are empty.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::Color;

/// Brick classification: starting hit points and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickTier {
    Standard,
    Tough,
    Hard,
}

impl BrickTier {
    /// Tier for a layout cell, `None` for an empty cell
    pub fn from_cell(cell: char) -> Option<Self> {
        match cell {
            '-' => None,
            'M' => Some(BrickTier::Tough),
            'H' => Some(BrickTier::Hard),
            _ => Some(BrickTier::Standard),
        }
    }

    pub fn hit_points(self) -> u32 {
        match self {
            BrickTier::Standard => 1,
            BrickTier::Tough => 2,
            BrickTier::Hard => 3,
        }
    }

    pub fn color(self) -> Color {
        match self {
            BrickTier::Standard => Color::BRICK_ORANGE,
            BrickTier::Tough => Color::BRICK_GREEN,
            BrickTier::Hard => Color::BRICK_BLUE,
        }
    }
}

/// One level's character grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelLayout {
    rows: Vec<String>,
}

impl LevelLayout {
    pub fn new<S: Into<String>>(rows: impl IntoIterator<Item = S>) -> Self {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Column count, taken from the first row
    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    /// Tier at (row, column); out-of-range cells are empty
    pub fn tier_at(&self, row: usize, column: usize) -> Option<BrickTier> {
        self.rows
            .get(row)
            .and_then(|r| r.chars().nth(column))
            .and_then(BrickTier::from_cell)
    }

    /// Number of bricks this layout produces
    pub fn brick_count(&self) -> usize {
        let columns = self.columns();
        (0..self.rows())
            .map(|row| {
                (0..columns)
                    .filter(|&column| self.tier_at(row, column).is_some())
                    .count()
            })
            .sum()
    }
}

/// Ordered, read-only list of levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    layouts: Vec<LevelLayout>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LevelTable {
    pub fn new(layouts: Vec<LevelLayout>) -> Result<Self, ConfigError> {
        let table = Self { layouts };
        table.validate()?;
        Ok(table)
    }

    /// The ten stock levels
    pub fn builtin() -> Self {
        let layouts = BUILTIN_LEVELS
            .iter()
            .map(|rows| LevelLayout::new(rows.iter().copied()))
            .collect();
        Self { layouts }
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Layout for a 1-based level number
    pub fn get(&self, level: u32) -> Option<&LevelLayout> {
        (level as usize)
            .checked_sub(1)
            .and_then(|index| self.layouts.get(index))
    }

    pub fn has_level(&self, level: u32) -> bool {
        self.get(level).is_some()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layouts.is_empty() {
            return Err(ConfigError::EmptyLevelTable);
        }
        if let Some(index) = self.layouts.iter().position(|l| l.columns() == 0) {
            return Err(ConfigError::EmptyLayout { level: index + 1 });
        }
        Ok(())
    }
}

const BUILTIN_LEVELS: &[&[&str]] = &[
    &[
        "XXXXXXXXXX",
        "XXXXXXXXXX",
        "X-XXXXXX-X",
        "X-XXXXXX-X",
        "XXXXXXXXXX",
        "XXXXXXXXXX",
    ],
    &[
        "M-M-M-M-M-",
        "-M-M-M-M-M",
        "M-M-M-M-M-",
        "-M-M-M-M-M",
        "M-M-M-M-M-",
        "-M-M-M-M-M",
    ],
    &[
        "H-H-H-H-H-",
        "H-H-H-H-H-",
        "--M-M-M--",
        "--M-M-M--",
        "---XXXX---",
        "---XXXX---",
    ],
    &[
        "XXXXXXXXXX",
        "XMMMMMMMMX",
        "XMH H MHMX",
        "XMH H MHMX",
        "XMMMMMMMMX",
        "XXXXXXXXXX",
    ],
    &[
        "H-M-X-X-M-H",
        "-H-M-X-M-H-",
        "--H-M-M-H--",
        "---H-H-H---",
        "----HHH----",
        "-----H-----",
    ],
    &[
        "X-H-H-H-H-X",
        "X-H-H-H-H-X",
        "X-H-H-H-H-X",
        "-----------",
        "M-M-M-M-M-M",
        "M-M-M-M-M-M",
    ],
    &[
        "HXXXXXXXXH",
        "HXXMMXXH",
        "HXMMMMXH",
        "HMMHHMMH",
        "HXMMMMXH",
        "HXXMMXXH",
        "HXXXXXXXXH",
    ],
    &[
        "H M H M H M",
        " M H M H M ",
        "H M H M H M",
        " M H M H M ",
        "H M H M H M",
        " M H M H M ",
    ],
    &[
        "---H---H---",
        "--H-H-H-H--",
        "-H-H-H-H-H-",
        "H-H-H-H-H-H",
        "-H-H-H-H-H-",
        "--H-H-H-H--",
        "---H---H---",
    ],
    &[
        "HHHHHHHHHH",
        "HMMMMMMMMH",
        "HMXXXXXXMH",
        "HMXHHXHMXH",
        "HMXHHXHMXH",
        "HMXXXXXXMH",
        "HMMMMMMMMH",
        "HHHHHHHHHH",
    ],
];
