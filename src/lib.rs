#![warn(missing_docs)]

//! # `prismpulse`
//!
//! The simulation core of a light-routing grid puzzle. Tiles sit on a rectangular board; sources emit colored beams,
//! rotatable tiles redirect, split, merge, or gate them, and a puzzle is solved when every target receives a beam containing its required color.
//! Begin by building a [`Board`] with a [`BoardBuilder`](builder::BoardBuilder) or from a [`LevelDefinition`](level::LevelDefinition),
//! then run a [`Tracer`] over it to get a [`PropagationResult`], or hand it to [`solve`] to find rotations that satisfy every target.
//!
//! # Internals
//! Colors are 3-bit additive values; mixing is bitwise union.
//! Beams travel along the four grid axes one cell at a time. Each [`TileKind`] has a fixed connectivity table in its unrotated orientation,
//! and [`route`](router::route) rotates a beam's entry face into that frame and the exits back out again.
//!
//! Tracing is breadth-first from every source in row-major order:
//! 1. Every `(cell, direction of travel)` pair is processed at most once, so traces terminate even when beams run in loops.
//! 2. Targets absorb and accumulate everything that reaches them. Dark absorbers drop beams missing their activation color.
//! 3. Mergers hold their arrivals until nothing else is moving, then emit the union of everything they received exactly once.
//! If a merger receives more light after it has fired, the whole board is traced again with that light carried forward, until nothing changes.
//!
//! The solver is a plain depth-first search over the rotations of every unlocked tile, trying each tile's current rotation first.
//! It runs a full trace per leaf, so it is only suitable for the handful of rotatable tiles a hand-made level has.

pub use board::Board;
pub use builder::BoardBuilder;
pub use cell::{Cell, Rotation, TileKind};
pub use color::LightColor;
pub use direction::Direction;
pub use location::GridPosition;
pub use solver::{next_hint, solve, Hint, Solution, Solver};
pub use tracer::{BeamSegment, PropagationResult, Tracer};

pub(crate) mod board;
mod tests;
pub mod builder;
pub(crate) mod cell;
pub mod color;
pub(crate) mod direction;
pub mod level;
pub mod location;
pub mod par;
pub mod router;
pub mod session;
pub(crate) mod solver;
pub(crate) mod tracer;
