//! Per-kind tile connectivity.
//!
//! Every kind is described once, in its canonical (rotation 0) orientation. A beam's entry face
//! is rotated into that local frame, looked up, and the exits are rotated back into world space.

use smallvec::{smallvec, SmallVec};

use crate::cell::{Cell, TileKind};
use crate::direction::Direction;
use crate::direction::Direction::{Down, Left, Right, Up};

/// World-space exit directions. Never more than two.
pub type Exits = SmallVec<[Direction; 2]>;

/// The directions a beam leaves `cell` in, given the direction it was travelling when it entered.
///
/// Empty means the beam stops here: blocked by the tile's geometry, absorbed by a target, or
/// arriving at a source. [`DarkAbsorber`](TileKind::DarkAbsorber)s always pass here; the tracer
/// checks the activation color before asking.
pub fn route(cell: &Cell, incoming: Direction) -> Exits {
    let rotation = cell.rotation as i32;
    let local_entry = incoming.opposite().rotate_cw(-rotation);

    let local_exits: &[Direction] = match (cell.kind, local_entry) {
        (TileKind::Empty | TileKind::Cross | TileKind::DarkAbsorber, _) => return smallvec![incoming],

        (TileKind::Straight, Up) => &[Down],
        (TileKind::Straight, Down) => &[Up],

        (TileKind::Bend, Up) => &[Right],
        (TileKind::Bend, Right) => &[Up],

        (TileKind::Mirror, Up) => &[Right],
        (TileKind::Mirror, Right) => &[Up],
        (TileKind::Mirror, Down) => &[Left],
        (TileKind::Mirror, Left) => &[Down],

        // one-way: the stem splits, the arms only cross
        (TileKind::Splitter, Down) => &[Left, Right],
        (TileKind::Splitter, Left) => &[Right],
        (TileKind::Splitter, Right) => &[Left],

        (TileKind::Merger, Left | Right) => &[Up],

        _ => &[],
    };

    local_exits.iter().map(|exit| exit.rotate_cw(rotation)).collect()
}
