use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use crate::color::LightColor;
use crate::direction::Direction;

/// Clockwise quarter turns applied to a tile, always in `0..4`.
pub type Rotation = u8;

pub(crate) const ROTATIONS: Rotation = 4;

/// The behavior category of a tile. Routing for each kind lives in [`route`](crate::router::route).
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray, Display, EnumString, Serialize, Deserialize)]
pub enum TileKind {
    /// Beams pass straight through.
    #[default]
    Empty,
    /// Passes beams along its local up/down axis only.
    Straight,
    /// Connects its local up and right faces.
    Bend,
    /// Entry from local down exits left and right; left and right entries pass across.
    Splitter,
    /// Beams pass straight through on both axes without interacting.
    Cross,
    /// Combines colors arriving at its local left and right faces and emits them upward.
    Merger,
    /// Blocks any beam that does not contain its activation color.
    DarkAbsorber,
    /// Emits one beam and never routes incoming beams.
    Source,
    /// Absorbs every beam, accumulating their mixed color.
    Target,
    /// Reflects between local up/right and down/left.
    Mirror,
}

/// A tile instance. Only the fields relevant to its [`TileKind`] are meaningful.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Cell {
    pub(crate) kind: TileKind,
    pub(crate) rotation: Rotation,
    pub(crate) source_color: LightColor,
    pub(crate) source_direction: Direction,
    pub(crate) required_color: LightColor,
    pub(crate) activation_color: LightColor,
    pub(crate) locked: bool,
}

impl Cell {
    /// An unlocked [`Empty`](TileKind::Empty) cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An unlocked tile of `kind`. `rotation` is taken modulo four.
    pub fn new(kind: TileKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation: rotation % ROTATIONS,
            ..Self::default()
        }
    }

    /// A locked source emitting `color` toward `direction`, before its own rotation.
    pub fn source(color: LightColor, direction: Direction) -> Self {
        Self {
            kind: TileKind::Source,
            source_color: color,
            source_direction: direction,
            locked: true,
            ..Self::default()
        }
    }

    /// A locked target satisfied by any hit containing `required`.
    pub fn target(required: LightColor) -> Self {
        Self {
            kind: TileKind::Target,
            required_color: required,
            locked: true,
            ..Self::default()
        }
    }

    /// A locked dark absorber that only passes beams containing `activation`.
    pub fn dark(activation: LightColor) -> Self {
        Self {
            kind: TileKind::DarkAbsorber,
            activation_color: activation,
            locked: true,
            ..Self::default()
        }
    }

    /// This cell, fixed in place.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// This cell turned to `rotation`, modulo four.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation % ROTATIONS;
        self
    }

    /// What this tile does to beams.
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// Clockwise quarter turns from the canonical orientation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Emitted color, for sources.
    pub fn source_color(&self) -> LightColor {
        self.source_color
    }

    /// Unrotated emission direction, for sources.
    pub fn source_direction(&self) -> Direction {
        self.source_direction
    }

    /// Color a target's hit must contain.
    pub fn required_color(&self) -> LightColor {
        self.required_color
    }

    /// Color a beam must contain to pass a dark absorber.
    pub fn activation_color(&self) -> LightColor {
        self.activation_color
    }

    /// Locked cells can be neither rotated nor swapped.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the player (or the solver) may turn this tile.
    pub fn is_rotatable(&self) -> bool {
        !self.locked && self.kind != TileKind::Empty
    }

    /// World-space emission direction, for sources only.
    pub fn emission(&self) -> Option<Direction> {
        match self.kind {
            TileKind::Source => Some(self.source_direction.rotate_cw(self.rotation as i32)),
            _ => None,
        }
    }

    pub(crate) fn glyph(&self) -> char {
        let r = self.rotation as usize;
        match self.kind {
            TileKind::Empty => '.',
            TileKind::Straight => ['|', '-'][r % 2],
            TileKind::Bend => ['└', '┌', '┐', '┘'][r],
            TileKind::Mirror => ['\\', '/'][r % 2],
            TileKind::Splitter => ['┬', '┤', '┴', '├'][r],
            TileKind::Merger => ['^', '>', 'v', '<'][r],
            TileKind::Cross => '+',
            TileKind::DarkAbsorber => '#',
            TileKind::Source => self.source_color.initial(),
            TileKind::Target => self.required_color.initial().to_ascii_lowercase(),
        }
    }
}
