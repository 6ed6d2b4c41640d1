//! Authored levels and their RON representation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::Board;
use crate::builder::{BoardBuilder, BuilderInvalidReason};
use crate::cell::{Cell, Rotation, TileKind, ROTATIONS};
use crate::color::LightColor;
use crate::direction::Direction;
use crate::location::{Coord, Dimension, GridPosition};

/// Reasons a level cannot be loaded or turned into a board.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The level text is not valid RON for a level.
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The level's tiles do not fit together on its board.
    #[error("level '{id}' is invalid: {reasons:?}")]
    Invalid {
        /// The offending level.
        id: String,
        /// Everything the builder rejected.
        reasons: Vec<BuilderInvalidReason>,
    },
}

/// One tile placement in a level. `color` is the emitted, required, or activation color depending on `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileDef {
    /// Column of the tile.
    pub col: Coord,
    /// Row of the tile.
    pub row: Coord,
    /// What the tile does.
    pub kind: TileKind,
    /// Authored rotation, which is also the starting rotation.
    #[serde(default)]
    pub rotation: Rotation,
    /// Emitted, required, or activation color.
    #[serde(default)]
    pub color: LightColor,
    /// Emission direction, for sources only.
    #[serde(default)]
    pub direction: Direction,
    /// Fix a rotatable tile in place. Sources, targets, and dark absorbers are locked regardless.
    #[serde(default)]
    pub locked: bool,
}

impl TileDef {
    /// Where the tile goes.
    pub fn location(&self) -> GridPosition {
        GridPosition(self.col, self.row)
    }

    fn to_cell(&self) -> Cell {
        match self.kind {
            TileKind::Source => Cell::source(self.color, self.direction).with_rotation(self.rotation),
            TileKind::Target => Cell::target(self.color).with_rotation(self.rotation),
            TileKind::DarkAbsorber => Cell::dark(self.color).with_rotation(self.rotation),
            kind => {
                let cell = Cell::new(kind, self.rotation);
                if self.locked { cell.locked() } else { cell }
            }
        }
    }
}

/// A puzzle as authored: board size, tile placements, and the par figures used for rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Short unique key. Also seeds the shuffle.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of columns.
    pub width: Dimension,
    /// Number of rows.
    pub height: Dimension,
    /// Moves allowed for a three-star rating.
    #[serde(default)]
    pub par_moves: u32,
    /// Seconds allowed for a three-star rating.
    #[serde(default)]
    pub par_time_seconds: f32,
    /// Unlocked tiles are shuffled into new positions when the level starts.
    #[serde(default)]
    pub shuffle: bool,
    /// Every non-empty cell.
    pub tiles: Vec<TileDef>,
}

impl LevelDefinition {
    /// Parse a single level.
    pub fn from_ron(text: &str) -> Result<Self, LevelError> {
        Ok(ron::from_str(text)?)
    }

    /// Parse a RON list of levels.
    pub fn pack_from_ron(text: &str) -> Result<Vec<Self>, LevelError> {
        Ok(ron::from_str(text)?)
    }

    /// Read and parse a RON list of levels from a file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_pack(path: impl AsRef<Path>) -> Result<Vec<Self>, LevelError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let pack = Self::pack_from_ron(&text)?;
        debug!(levels = pack.len(), "loaded level pack");
        Ok(pack)
    }

    /// The authored rotation at `location`, or 0 if nothing was placed there.
    pub fn authored_rotation(&self, location: GridPosition) -> Rotation {
        self.tiles.iter()
            .find(|tile| tile.location() == location)
            .map_or(0, |tile| tile.rotation % ROTATIONS)
    }

    /// Place every tile on a fresh board. Cells without a tile are empty.
    ///
    /// Sources, targets, and dark absorbers are always locked, whatever `locked` says.
    pub fn to_board(&self) -> Result<Board, LevelError> {
        let mut builder = BoardBuilder::with_dims((self.width, self.height));
        for tile in &self.tiles {
            builder.place(tile.location(), tile.to_cell());
        }

        builder.build().map_err(|reasons| LevelError::Invalid {
            id: self.id.clone(),
            reasons: reasons.clone(),
        })
    }
}
