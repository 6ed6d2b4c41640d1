use std::collections::{HashMap, HashSet, VecDeque};

use itertools::Itertools;
use strum::VariantArray;
use tracing::trace;

use crate::board::Board;
use crate::cell::TileKind;
use crate::color::LightColor;
use crate::direction::Direction;
use crate::location::GridPosition;
use crate::router::route;

/// One single-cell hop of a beam, reported for presentation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BeamSegment {
    /// The cell the beam leaves.
    pub from: GridPosition,
    /// The neighboring cell it enters.
    pub to: GridPosition,
    /// Color carried over this hop.
    pub color: LightColor,
    /// Direction of travel.
    pub direction: Direction,
}

/// Everything one [`Tracer::trace`] call found out about a board.
///
/// The same instance can be passed to many traces; each one clears it first.
#[derive(Clone, Debug, Default)]
pub struct PropagationResult {
    pub(crate) segments: Vec<BeamSegment>,
    pub(crate) target_hits: HashMap<GridPosition, LightColor>,
    pub(crate) all_targets_satisfied: bool,
}

impl PropagationResult {
    /// Forget everything from the previous trace.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.target_hits.clear();
        self.all_targets_satisfied = false;
    }

    /// Segments in discovery order.
    pub fn segments(&self) -> &[BeamSegment] {
        &self.segments
    }

    /// Mixed color received by each target that was hit at all.
    pub fn target_hits(&self) -> &HashMap<GridPosition, LightColor> {
        &self.target_hits
    }

    /// Mixed color received by the target at `location`, if anything reached it.
    pub fn hit_at(&self, location: GridPosition) -> Option<LightColor> {
        self.target_hits.get(&location).copied()
    }

    /// True only if the board has at least one target and every target's hit contains its required color.
    pub fn all_targets_satisfied(&self) -> bool {
        self.all_targets_satisfied
    }

    /// Whether any beam segment starts or ends at `location`.
    pub fn is_lit(&self, location: GridPosition) -> bool {
        self.segments.iter().any(|segment| segment.from == location || segment.to == location)
    }
}

#[derive(Clone, Copy, Debug)]
struct Beam {
    location: GridPosition,
    // direction of travel on entering `location`
    direction: Direction,
    color: LightColor,
}

/// Breadth-first beam propagation.
///
/// Each `(location, direction)` pair is processed at most once per pass, which bounds a pass
/// to four states per cell even when beams loop.
///
/// Mergers do not emit while other beams are still in flight. They collect arrivals until the
/// queue drains; then every merger that has received light and not yet fired emits the union
/// of its arrivals once, in row-major order, and propagation resumes. Arrival order therefore
/// never changes what a merger emits.
///
/// A merger can still fire before light reaches it from another merger that fires after it.
/// When that happens the board is traced again, with every merger carrying forward everything
/// it received in the previous pass, until no merger receives light it did not emit. Carried
/// colors only grow, so this settles within three extra passes per merger.
///
/// Buffers are kept between calls and cleared at the start of each trace. A [`Tracer`] is
/// not meant to be shared between threads.
#[derive(Debug, Default)]
pub struct Tracer {
    queue: VecDeque<Beam>,
    visited: HashSet<(GridPosition, Direction)>,
    // keyed by the face the light came in through
    arrivals: HashMap<(GridPosition, Direction), LightColor>,
    pending_mergers: Vec<(GridPosition, Direction)>,
    // color each merger emitted this pass
    fired_mergers: HashMap<GridPosition, LightColor>,
    // merger input seen in earlier passes
    carried: HashMap<GridPosition, LightColor>,
    sources: Vec<GridPosition>,
    steps: usize,
    passes: usize,
}

impl Tracer {
    /// A tracer with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Beam states processed by the final pass of the last [`trace`](Self::trace).
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Passes the last [`trace`](Self::trace) needed to settle. One unless mergers feed mergers.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Trace every beam on `board` from scratch, refilling `result`.
    pub fn trace(&mut self, board: &Board, result: &mut PropagationResult) {
        self.carried.clear();
        self.passes = 0;

        loop {
            self.passes += 1;
            self.propagate(board, result);
            if !self.carry_late_arrivals() {
                break;
            }
            trace!(passes = self.passes, "merger received light after firing, tracing again");
        }

        let mut targets = board.targets().peekable();
        let satisfied = targets.peek().is_some() && targets.all(|location| {
            let hit = result.hit_at(location).unwrap_or_default();
            hit.contains(board.cell(location).required_color)
        });
        result.all_targets_satisfied = satisfied;

        trace!(
            steps = self.steps,
            passes = self.passes,
            segments = result.segments.len(),
            satisfied = result.all_targets_satisfied,
            "trace finished"
        );
    }

    fn propagate(&mut self, board: &Board, result: &mut PropagationResult) {
        result.clear();
        self.queue.clear();
        self.visited.clear();
        self.arrivals.clear();
        self.pending_mergers.clear();
        self.fired_mergers.clear();
        self.steps = 0;

        self.sources.clear();
        self.sources.extend(board.sources());
        for i in 0..self.sources.len() {
            let location = self.sources[i];
            let source = board.cell(location);
            if let Some(direction) = source.emission() {
                self.emit(board, result, location, direction, source.source_color);
            }
        }

        loop {
            while let Some(beam) = self.queue.pop_front() {
                self.step(board, result, beam);
            }

            if self.pending_mergers.is_empty() {
                break;
            }
            self.fire_mergers(board, result);
        }
    }

    fn emit(&mut self, board: &Board, result: &mut PropagationResult, from: GridPosition, direction: Direction, color: LightColor) {
        let to = direction.attempt_from(from);
        if !board.in_bounds(to) {
            return;
        }

        result.segments.push(BeamSegment { from, to, color, direction });
        self.queue.push_back(Beam { location: to, direction, color });
    }

    fn step(&mut self, board: &Board, result: &mut PropagationResult, beam: Beam) {
        let Beam { location, direction, color } = beam;
        if !self.visited.insert((location, direction)) {
            return;
        }
        self.steps += 1;

        let tile = board.cell(location);
        match tile.kind {
            TileKind::DarkAbsorber if !color.contains(tile.activation_color) => {
                trace!(%location, %color, "absorbed");
            }
            TileKind::Target => {
                *result.target_hits.entry(location).or_default() |= color;
            }
            TileKind::Merger => {
                if route(tile, direction).is_empty() {
                    return;
                }
                *self.arrivals.entry((location, direction.opposite())).or_default() |= color;
                if self.fired_mergers.contains_key(&location) {
                    trace!(%location, %color, "late arrival at a merger that already fired");
                } else {
                    self.pending_mergers.push((location, direction));
                }
            }
            _ => {
                for exit in route(tile, direction) {
                    self.emit(board, result, location, exit, color);
                }
            }
        }
    }

    /// Everything that reached the merger at `location` this pass.
    fn received(&self, location: GridPosition) -> LightColor {
        Direction::VARIANTS.iter()
            .filter_map(|face| self.arrivals.get(&(location, *face)))
            .copied()
            .collect()
    }

    fn fire_mergers(&mut self, board: &Board, result: &mut PropagationResult) {
        let mut pending = std::mem::take(&mut self.pending_mergers);
        pending.sort_by_key(|(location, _)| (location.1, location.0));
        pending.dedup_by_key(|(location, _)| *location);

        for (location, direction) in pending.drain(..) {
            if self.fired_mergers.contains_key(&location) {
                continue;
            }

            let carried = self.carried.get(&location).copied().unwrap_or_default();
            let merged = self.received(location) | carried;
            self.fired_mergers.insert(location, merged);
            trace!(%location, %merged, "merger fires");

            for exit in route(board.cell(location), direction) {
                self.emit(board, result, location, exit, merged);
            }
        }

        // hand the allocation back
        self.pending_mergers = pending;
    }

    /// Fold what each fired merger received into what it carries into the next pass.
    ///
    /// Returns whether any merger received light it did not emit.
    fn carry_late_arrivals(&mut self) -> bool {
        let grown = self.fired_mergers.iter()
            .map(|(location, emitted)| (*location, *emitted, self.received(*location)))
            .filter(|(_, emitted, received)| !emitted.contains(*received))
            .map(|(location, _, received)| (location, received))
            .collect_vec();

        for (location, received) in &grown {
            *self.carried.entry(*location).or_default() |= *received;
        }

        !grown.is_empty()
    }
}
