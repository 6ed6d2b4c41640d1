#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use unordered_pair::UnorderedPair;

    use crate::builder::{BoardBuilder, BuilderInvalidReason};
    use crate::cell::TileKind;
    use crate::color::LightColor;
    use crate::direction::Direction;
    use crate::level::{LevelDefinition, LevelError};
    use crate::location::GridPosition;
    use crate::par::{calculate_par, level_seed, par_from_solution, shuffle_unlocked, star_rating, Par};
    use crate::router::route;
    use crate::session::Session;
    use crate::solver::{next_hint, solve, Hint};
    use crate::tracer::{PropagationResult, Tracer};
    use crate::Board;

    const BUILTIN: &str = include_str!("../levels/builtin.ron");

    fn builtin(id: &str) -> LevelDefinition {
        LevelDefinition::pack_from_ron(BUILTIN)
            .unwrap()
            .into_iter()
            .find(|level| level.id == id)
            .unwrap()
    }

    fn trace(board: &Board) -> PropagationResult {
        let mut result = PropagationResult::default();
        Tracer::new().trace(board, &mut result);
        result
    }

    fn first_light() -> Board {
        BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(1).unwrap()))
            .add_source(GridPosition(0, 0), LightColor::RED, Direction::Right)
            .add_tile(GridPosition(1, 0), TileKind::Straight, 0)
            .add_target(GridPosition(2, 0), LightColor::RED)
            .build()
            .unwrap()
    }

    #[test]
    fn color_mixing() {
        assert_eq!(LightColor::RED | LightColor::BLUE, LightColor::PURPLE);
        assert_eq!(LightColor::YELLOW | LightColor::CYAN, LightColor::WHITE);
        assert_eq!(LightColor::GREEN | LightColor::GREEN, LightColor::GREEN);
        assert_eq!([LightColor::RED, LightColor::GREEN].into_iter().collect::<LightColor>(), LightColor::YELLOW);

        assert!(LightColor::WHITE.contains(LightColor::GREEN));
        assert!(LightColor::PURPLE.contains(LightColor::PURPLE));
        assert!(!LightColor::RED.contains(LightColor::PURPLE));
        assert!(LightColor::RED.contains(LightColor::NONE));

        assert!(LightColor::BLUE.is_primary());
        assert!(!LightColor::CYAN.is_primary());
        assert_eq!(LightColor::WHITE.component_count(), 3);
        assert!(LightColor::NONE.is_none());
        assert_eq!(LightColor::from_bits(8), None);
    }

    #[test]
    fn color_names() {
        assert_eq!(LightColor::PURPLE.to_string(), "Purple");
        assert_eq!(" cyan ".parse::<LightColor>(), Ok(LightColor::CYAN));
        assert!("Magenta".parse::<LightColor>().is_err());
    }

    #[test]
    fn router_rotates_tiles() {
        let bend = crate::Cell::new(TileKind::Bend, 0);
        // travelling down, the beam enters through the up face
        assert_eq!(route(&bend, Direction::Down).as_slice(), &[Direction::Right]);
        assert!(route(&bend, Direction::Right).is_empty());

        let bend = bend.with_rotation(2);
        assert_eq!(route(&bend, Direction::Right).as_slice(), &[Direction::Down]);

        let splitter = crate::Cell::new(TileKind::Splitter, 0);
        assert_eq!(route(&splitter, Direction::Up).as_slice(), &[Direction::Left, Direction::Right]);
        assert_eq!(route(&splitter, Direction::Right).as_slice(), &[Direction::Right]);
        assert!(route(&splitter, Direction::Down).is_empty());

        let target = crate::Cell::target(LightColor::RED);
        assert!(route(&target, Direction::Left).is_empty());
        let cross = crate::Cell::new(TileKind::Cross, 3);
        assert_eq!(route(&cross, Direction::Left).as_slice(), &[Direction::Left]);
    }

    #[test]
    fn straight_run() {
        let mut board = first_light();
        let result = trace(&board);
        assert!(!result.all_targets_satisfied());
        assert_eq!(result.hit_at(GridPosition(2, 0)), None);
        assert_eq!(result.segments().len(), 1);

        assert!(board.rotate(GridPosition(1, 0)));
        let result = trace(&board);
        assert!(result.all_targets_satisfied());
        assert_eq!(result.hit_at(GridPosition(2, 0)), Some(LightColor::RED));
        assert_eq!(result.segments().len(), 2);
        assert!(result.segments().iter().all(|segment| segment.color == LightColor::RED));
        assert!(result.is_lit(GridPosition(1, 0)));
    }

    #[test]
    fn wrong_color() {
        let board = BoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(1).unwrap()))
            .add_source(GridPosition(0, 0), LightColor::RED, Direction::Right)
            .add_target(GridPosition(1, 0), LightColor::GREEN)
            .build()
            .unwrap();

        let result = trace(&board);
        assert_eq!(result.hit_at(GridPosition(1, 0)), Some(LightColor::RED));
        assert!(!result.all_targets_satisfied());
    }

    #[test]
    fn no_targets() {
        let board = BoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(1).unwrap()))
            .add_source(GridPosition(0, 0), LightColor::RED, Direction::Right)
            .build()
            .unwrap();

        let result = trace(&board);
        assert_eq!(result.segments().len(), 1);
        assert!(!result.all_targets_satisfied());
    }

    #[test]
    fn source_rotation_turns_emission() {
        let board = BoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(2).unwrap()))
            .place(GridPosition(0, 0), crate::Cell::source(LightColor::BLUE, Direction::Right).with_rotation(1))
            .add_target(GridPosition(0, 1), LightColor::BLUE)
            .build()
            .unwrap();

        assert!(trace(&board).all_targets_satisfied());
    }

    #[test]
    fn dark_absorber() {
        let dark = |activation| BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(1).unwrap()))
            .add_source(GridPosition(0, 0), LightColor::RED, Direction::Right)
            .add_dark(GridPosition(1, 0), activation)
            .add_target(GridPosition(2, 0), LightColor::RED)
            .build()
            .unwrap();

        let result = trace(&dark(LightColor::RED));
        assert!(result.all_targets_satisfied());

        let result = trace(&dark(LightColor::BLUE));
        assert_eq!(result.hit_at(GridPosition(2, 0)), None);
        assert!(!result.all_targets_satisfied());
    }

    #[test]
    fn mixing_at_target() {
        let mut board = builtin("03").to_board().unwrap();
        assert!(board.rotate(GridPosition(1, 0)));
        assert!(!trace(&board).all_targets_satisfied());
        assert_eq!(trace(&board).hit_at(GridPosition(2, 0)), Some(LightColor::RED));

        assert!(board.rotate(GridPosition(3, 0)));
        let result = trace(&board);
        assert_eq!(result.hit_at(GridPosition(2, 0)), Some(LightColor::PURPLE));
        assert!(result.all_targets_satisfied());
    }

    #[test]
    fn splitter_feeds_both_arms() {
        let mut board = builtin("04").to_board().unwrap();
        assert!(board.set_rotation(GridPosition(1, 1), 0));

        let result = trace(&board);
        assert!(result.all_targets_satisfied());
        assert_eq!(result.hit_at(GridPosition(0, 2)), Some(LightColor::GREEN));
        assert_eq!(result.hit_at(GridPosition(2, 2)), Some(LightColor::GREEN));

        let from_splitter = result.segments().iter()
            .filter(|segment| segment.from == GridPosition(1, 2))
            .collect::<Vec<_>>();
        assert_eq!(from_splitter.len(), 2);
        assert!(from_splitter.iter().all(|segment| segment.color == LightColor::GREEN));
    }

    #[test]
    fn merger_combines_arrivals() {
        let mut board = builtin("11").to_board().unwrap();
        assert!(board.rotate(GridPosition(1, 1)));
        assert_eq!(trace(&board).hit_at(GridPosition(2, 0)), Some(LightColor::RED));

        assert!(board.rotate(GridPosition(3, 1)));
        let result = trace(&board);
        assert_eq!(result.hit_at(GridPosition(2, 0)), Some(LightColor::PURPLE));
        assert!(result.all_targets_satisfied());

        let out = result.segments().iter()
            .filter(|segment| segment.from == GridPosition(2, 1))
            .collect::<Vec<_>>();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].direction, Direction::Up);
    }

    #[test]
    fn merger_ignores_arrival_order() {
        let mirrored = |left, right| BoardBuilder::with_dims((NonZero::new(5).unwrap(), NonZero::new(2).unwrap()))
            .add_target(GridPosition(2, 0), LightColor::PURPLE)
            .add_source(GridPosition(0, 1), left, Direction::Right)
            .add_tile(GridPosition(1, 1), TileKind::Straight, 1)
            .add_locked(GridPosition(2, 1), TileKind::Merger, 0)
            .add_tile(GridPosition(3, 1), TileKind::Straight, 1)
            .add_source(GridPosition(4, 1), right, Direction::Left)
            .build()
            .unwrap();

        let a = trace(&mirrored(LightColor::RED, LightColor::BLUE));
        let b = trace(&mirrored(LightColor::BLUE, LightColor::RED));
        assert_eq!(a.hit_at(GridPosition(2, 0)), Some(LightColor::PURPLE));
        assert_eq!(b.hit_at(GridPosition(2, 0)), Some(LightColor::PURPLE));
    }

    #[test]
    fn looping_beams_terminate() {
        // the splitter's arms lead around a ring of bends back into the splitter
        let board = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()))
            .add_source(GridPosition(0, 1), LightColor::GREEN, Direction::Right)
            .add_tile(GridPosition(1, 1), TileKind::Splitter, 1)
            .add_tile(GridPosition(1, 0), TileKind::Bend, 1)
            .add_tile(GridPosition(2, 0), TileKind::Bend, 2)
            .add_tile(GridPosition(2, 1), TileKind::Straight, 0)
            .add_tile(GridPosition(2, 2), TileKind::Bend, 3)
            .add_tile(GridPosition(1, 2), TileKind::Bend, 0)
            .build()
            .unwrap();

        let mut tracer = Tracer::new();
        let mut result = PropagationResult::default();
        tracer.trace(&board, &mut result);

        assert!(tracer.steps() <= 4 * 9);
        assert!(result.segments().len() <= 4 * 9);
        assert!(result.is_lit(GridPosition(2, 1)));
        assert!(!result.all_targets_satisfied());
    }

    #[test]
    fn rotate_and_swap() {
        let mut board = builtin("11").to_board().unwrap();
        let straight = GridPosition(1, 1);

        assert!(!board.rotate(GridPosition(0, 1)));
        assert!(!board.rotate(GridPosition(2, 1)));
        assert!(!board.rotate(GridPosition(0, 0)));
        for expected in [1, 2, 3, 0] {
            assert!(board.rotate(straight));
            assert_eq!(board[straight].rotation(), expected);
        }

        assert!(!board.swap(UnorderedPair(straight, straight)));
        assert!(!board.swap(UnorderedPair(straight, GridPosition(2, 1))));
        assert!(board.swap(UnorderedPair(straight, GridPosition(0, 0))));
        assert_eq!(board[GridPosition(0, 0)].kind(), TileKind::Straight);
        assert_eq!(board[straight].kind(), TileKind::Empty);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access() {
        let board = first_light();
        board.cell(GridPosition(3, 0));
    }

    #[test]
    fn builder_invalid() {
        let mut builder = BoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(2).unwrap()));
        builder.add_tile(GridPosition(2, 0), TileKind::Bend, 0)
            .add_tile(GridPosition(0, 0), TileKind::Bend, 0);
        assert_eq!(builder.build(), Err(&vec![BuilderInvalidReason::FeatureOutOfBounds]));

        let mut builder = BoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(2).unwrap()));
        builder.add_target(GridPosition(1, 1), LightColor::RED)
            .add_tile(GridPosition(1, 1), TileKind::Bend, 0);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::DuplicatePlacement]));

        let mut builder = BoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(2).unwrap()));
        builder.add_target(GridPosition(1, 1), LightColor::RED)
            .clear(GridPosition(1, 1))
            .add_tile(GridPosition(1, 1), TileKind::Bend, 0);
        assert!(builder.is_valid().is_none());
    }

    #[test]
    fn display() {
        let mut board = builtin("11").to_board().unwrap();
        assert_eq!(format!("{}", board), "..p..
R|^|B
");

        let solution = solve(&mut board).unwrap();
        for (location, rotation) in &solution {
            board.set_rotation(*location, *rotation);
        }
        assert_eq!(format!("{}", board), "..p..
R-^-B
");
    }

    #[test]
    fn solve_first_light() {
        let mut board = first_light();
        let before = board.rotation_snapshot();

        let solution = solve(&mut board).unwrap();
        assert_eq!(board.rotation_snapshot(), before);
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.get(&GridPosition(1, 0)), Some(&1));
    }

    #[test]
    fn solve_nothing_to_rotate() {
        let mut board = BoardBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(1).unwrap()))
            .add_source(GridPosition(0, 0), LightColor::RED, Direction::Right)
            .add_target(GridPosition(1, 0), LightColor::RED)
            .build()
            .unwrap();

        assert!(trace(&board).all_targets_satisfied());
        assert_eq!(solve(&mut board), None);
    }

    #[test]
    fn solve_impossible() {
        let mut board = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(1).unwrap()))
            .add_source(GridPosition(0, 0), LightColor::RED, Direction::Right)
            .add_tile(GridPosition(1, 0), TileKind::Straight, 0)
            .add_target(GridPosition(2, 0), LightColor::BLUE)
            .build()
            .unwrap();
        let before = board.clone();

        assert_eq!(solve(&mut board), None);
        assert_eq!(board, before);
    }

    #[test]
    fn hints() {
        let mut board = first_light();
        let solution = solve(&mut board);

        assert_eq!(next_hint(&board, None), None);
        assert_eq!(next_hint(&board, solution.as_ref()), Some(Hint { location: GridPosition(1, 0), rotations: 1 }));

        board.rotate(GridPosition(1, 0));
        board.rotate(GridPosition(1, 0));
        assert_eq!(next_hint(&board, solution.as_ref()), Some(Hint { location: GridPosition(1, 0), rotations: 3 }));

        board.set_rotation(GridPosition(1, 0), 1);
        assert_eq!(next_hint(&board, solution.as_ref()), None);
    }

    #[test]
    fn parse_level() {
        let level = LevelDefinition::from_ron(r#"(
            id: "T1",
            name: "Test",
            width: 2,
            height: 1,
            tiles: [
                (col: 0, row: 0, kind: Source, color: "Green", direction: Right),
                (col: 1, row: 0, kind: Target, color: "green", locked: false),
            ],
        )"#).unwrap();

        assert_eq!(level.par_moves, 0);
        assert!(!level.shuffle);
        let board = level.to_board().unwrap();
        assert!(board[GridPosition(1, 0)].is_locked());
        assert!(trace(&board).all_targets_satisfied());
    }

    #[test]
    fn invalid_level() {
        let level = LevelDefinition::from_ron(r#"(
            id: "T2",
            name: "Overlap",
            width: 1,
            height: 1,
            tiles: [
                (col: 0, row: 0, kind: Bend),
                (col: 0, row: 0, kind: Straight),
            ],
        )"#).unwrap();

        assert!(matches!(
            level.to_board(),
            Err(LevelError::Invalid { reasons, .. }) if reasons == vec![BuilderInvalidReason::DuplicatePlacement]
        ));
        assert!(matches!(LevelDefinition::from_ron("(id: 3)"), Err(LevelError::Parse(_))));
        assert!(matches!(LevelDefinition::load_pack("levels/missing.ron"), Err(LevelError::Io(_))));
    }

    #[test]
    fn builtin_levels_solvable() {
        let pack = LevelDefinition::pack_from_ron(BUILTIN).unwrap();
        assert!(!pack.is_empty());

        for level in pack {
            let mut board = level.to_board().unwrap();
            let solution = solve(&mut board).unwrap_or_else(|| panic!("level {} has no solution", level.id));
            for (location, rotation) in &solution {
                assert!(board.set_rotation(*location, *rotation));
            }
            assert!(trace(&board).all_targets_satisfied(), "level {} solution does not satisfy", level.id);
        }
    }

    #[test]
    fn builtin_par_matches_authored() {
        let pack = LevelDefinition::pack_from_ron(BUILTIN).unwrap();

        for level in pack.iter().filter(|level| !level.shuffle) {
            let par = calculate_par(level).unwrap().unwrap();
            assert_eq!(par.swaps, 0);
            assert_eq!(par.total(), level.par_moves, "level {}", level.id);
        }
    }

    #[test]
    fn shuffle_is_deterministic() {
        let level = builtin("S1");
        let authored = level.to_board().unwrap();

        let mut a = authored.clone();
        let mut b = authored.clone();
        shuffle_unlocked(&mut a, level_seed(&level.id));
        shuffle_unlocked(&mut b, level_seed(&level.id));
        assert_eq!(a, b);

        for location in authored.positions().filter(|location| authored[*location].is_locked()) {
            assert_eq!(a[location], authored[location]);
        }

        let kinds = |board: &Board| {
            let mut kinds = board.positions().map(|location| board[location].kind()).collect::<Vec<_>>();
            kinds.sort();
            kinds
        };
        assert_eq!(kinds(&a), kinds(&authored));

        // the straight that bridges the gap lands below it, turned the wrong way for the gap
        assert_eq!(format!("{}", a), "R|┐
|-|
||r
");
        assert!(trace(&authored).all_targets_satisfied());
        assert!(!trace(&a).all_targets_satisfied());

        assert_eq!(calculate_par(&level).unwrap(), Some(Par { swaps: 1, rotations: 0 }));
    }

    #[test]
    fn par_reuses_solution() {
        let level = builtin("13");
        let mut board = level.to_board().unwrap();
        let solution = solve(&mut board).unwrap();

        let par = par_from_solution(&level, &board, &solution);
        assert_eq!(par, Par { swaps: 0, rotations: 3 });
        assert_eq!(calculate_par(&level).unwrap(), Some(par));
    }

    #[test]
    fn stars() {
        assert_eq!(star_rating(2, 5.0, 2, 10.0), 3);
        assert_eq!(star_rating(3, 5.0, 2, 10.0), 2);
        assert_eq!(star_rating(2, 20.0, 2, 10.0), 2);
        assert_eq!(star_rating(4, 5.0, 2, 10.0), 1);
    }

    #[test]
    fn session() {
        let mut session = Session::start(builtin("01")).unwrap();
        assert!(!session.is_solved());
        assert_eq!(session.moves(), 0);

        assert!(!session.rotate(GridPosition(0, 0)));
        assert_eq!(session.moves(), 0);
        assert_eq!(session.hint(), Some(Hint { location: GridPosition(1, 0), rotations: 1 }));

        assert!(session.rotate(GridPosition(1, 0)));
        assert!(session.is_solved());
        assert_eq!(session.moves(), 1);
        assert_eq!(session.result().hit_at(GridPosition(2, 0)), Some(LightColor::RED));
        assert_eq!(session.stars(4.0), 3);
        assert!(!session.rotate(GridPosition(1, 0)));
        assert_eq!(session.hint(), None);

        session.restart().unwrap();
        assert!(!session.is_solved());
        assert_eq!(session.moves(), 0);
        assert_eq!(session.board()[GridPosition(1, 0)].rotation(), 0);
    }

    #[test]
    fn builtin_sessions_start_unsolved() {
        for level in LevelDefinition::pack_from_ron(BUILTIN).unwrap() {
            let id = level.id.clone();
            let session = Session::start(level).unwrap();
            assert!(!session.is_solved(), "level {} starts solved", id);
            assert!(!session.result().all_targets_satisfied(), "level {} starts lit", id);
            assert_eq!(session.moves(), 0);
        }
    }

    #[test]
    fn session_starting_lit_stays_playable() {
        let level = LevelDefinition::from_ron(r#"(
            id: "T3",
            name: "Already Lit",
            width: 3,
            height: 1,
            tiles: [
                (col: 0, row: 0, kind: Source, color: "Red", direction: Right),
                (col: 1, row: 0, kind: Straight, rotation: 1),
                (col: 2, row: 0, kind: Target, color: "Red"),
            ],
        )"#).unwrap();

        let mut session = Session::start(level).unwrap();
        assert!(session.result().all_targets_satisfied());
        assert!(!session.is_solved());

        assert!(session.rotate(GridPosition(1, 0)));
        assert!(!session.is_solved());
        assert!(session.rotate(GridPosition(1, 0)));
        assert!(session.is_solved());
        assert_eq!(session.moves(), 2);
    }

    #[test]
    fn session_swaps() {
        let mut session = Session::start(builtin("S1")).unwrap();
        assert!(!session.is_solved());
        assert_eq!(format!("{}", session.board()), "R|┐
|-|
||r
");

        assert!(!session.swap(GridPosition(0, 0), GridPosition(1, 0)));
        assert!(!session.swap(GridPosition(1, 0), GridPosition(1, 0)));
        assert!(!session.swap(GridPosition(1, 1), GridPosition(2, 2)));
        assert_eq!(session.moves(), 0);

        let hint = Some(Hint { location: GridPosition(1, 0), rotations: 1 });
        assert_eq!(session.hint(), hint);

        // a bend in the gap can only send the beam down column 1, past the target
        assert!(session.swap(GridPosition(1, 0), GridPosition(2, 0)));
        assert_eq!(session.moves(), 1);
        assert!(!session.is_solved());
        assert_eq!(session.board()[GridPosition(1, 0)].kind(), TileKind::Bend);
        assert_eq!(session.hint(), None);

        assert!(session.swap(GridPosition(2, 0), GridPosition(1, 0)));
        assert_eq!(session.moves(), 2);
        assert_eq!(session.hint(), hint);

        assert!(session.swap(GridPosition(1, 0), GridPosition(1, 1)));
        assert_eq!(session.moves(), 3);
        assert!(session.is_solved());
        assert_eq!(session.result().hit_at(GridPosition(2, 2)), Some(LightColor::RED));
        assert!(!session.swap(GridPosition(0, 1), GridPosition(0, 2)));
        assert_eq!(session.moves(), 3);
        assert_eq!(session.stars(10.0), 1);
    }

    #[test]
    fn merger_feeds_merger() {
        // the lower merger fires first in row-major order, before the right-hand merger's cyan reaches it
        let board = BoardBuilder::with_dims((NonZero::new(5).unwrap(), NonZero::new(3).unwrap()))
            .add_target(GridPosition(2, 0), LightColor::WHITE)
            .add_source(GridPosition(4, 0), LightColor::GREEN, Direction::Down)
            .add_source(GridPosition(0, 1), LightColor::RED, Direction::Right)
            .add_locked(GridPosition(2, 1), TileKind::Merger, 0)
            .add_locked(GridPosition(4, 1), TileKind::Merger, 3)
            .add_source(GridPosition(4, 2), LightColor::BLUE, Direction::Up)
            .build()
            .unwrap();

        let mut tracer = Tracer::new();
        let mut result = PropagationResult::default();
        tracer.trace(&board, &mut result);

        assert_eq!(result.hit_at(GridPosition(2, 0)), Some(LightColor::WHITE));
        assert!(result.all_targets_satisfied());
        assert_eq!(tracer.passes(), 2);
        assert!(tracer.steps() <= 4 * 15);

        let from_right = result.segments().iter()
            .find(|segment| segment.from == GridPosition(4, 1))
            .unwrap();
        assert_eq!(from_right.color, LightColor::CYAN);
        assert_eq!(from_right.direction, Direction::Left);

        tracer.trace(&first_light(), &mut result);
        assert_eq!(tracer.passes(), 1);
    }

    #[test]
    fn direction_rotation_wraps() {
        assert_eq!(Direction::Up.rotate_cw(5), Direction::Right);
        assert_eq!(Direction::Up.rotate_cw(-1), Direction::Left);
        assert_eq!(Direction::Left.rotate_cw(i32::MAX), Direction::Down);
        assert_eq!(Direction::Right.rotate_cw(i32::MIN), Direction::Right);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }
}
