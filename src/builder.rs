//! Incremental construction of [`Board`]s.

use std::collections::HashSet;

use ndarray::Array2;

use crate::board::Board;
use crate::cell::{Cell, Rotation, TileKind};
use crate::color::LightColor;
use crate::direction::Direction;
use crate::location::{Dimension, GridPosition};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// A tile was placed outside the bounds specified by `dims` on a builder.
    #[error("tile placed outside the board")]
    FeatureOutOfBounds,
    /// Two tiles were placed on the same location.
    #[error("two tiles placed on the same cell")]
    DuplicatePlacement,
}

/// A builder for rectangular boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, every further call does nothing.
#[derive(Clone)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    placed: HashSet<GridPosition>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    /// Every cell starts out [`Empty`](TileKind::Empty).
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            placed: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    fn out_of_bounds(&self, location: GridPosition) -> bool {
        location.0 < 0 || location.1 < 0
            || location.0 as usize >= self.dims.0.get()
            || location.1 as usize >= self.dims.1.get()
    }

    /// Place `cell` at `location`.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds,
    /// or a [`DuplicatePlacement`](BuilderInvalidReason::DuplicatePlacement) invalid state if something was already placed there.
    pub fn place(&mut self, location: GridPosition, cell: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.out_of_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        if !self.placed.insert(location) {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicatePlacement);
            return self;
        }

        self.cells[location.as_index()] = cell;
        self
    }

    /// Add a locked source emitting `color` toward `direction` (before the tile's own rotation).
    pub fn add_source(&mut self, location: GridPosition, color: LightColor, direction: Direction) -> &mut Self {
        self.place(location, Cell::source(color, direction))
    }

    /// Add a locked target satisfied by any hit containing `required`.
    pub fn add_target(&mut self, location: GridPosition, required: LightColor) -> &mut Self {
        self.place(location, Cell::target(required))
    }

    /// Add a locked dark absorber that only passes beams containing `activation`.
    pub fn add_dark(&mut self, location: GridPosition, activation: LightColor) -> &mut Self {
        self.place(location, Cell::dark(activation))
    }

    /// Add an unlocked tile the player may rotate.
    pub fn add_tile(&mut self, location: GridPosition, kind: TileKind, rotation: Rotation) -> &mut Self {
        self.place(location, Cell::new(kind, rotation))
    }

    /// Add a tile fixed in place at `rotation`.
    pub fn add_locked(&mut self, location: GridPosition, kind: TileKind, rotation: Rotation) -> &mut Self {
        self.place(location, Cell::new(kind, rotation).locked())
    }

    /// Clear whatever was placed at `location`, leaving it empty.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    pub fn clear(&mut self, location: GridPosition) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.out_of_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.placed.remove(&location);
        self.cells[location.as_index()] = Cell::default();
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
        })
    }
}
