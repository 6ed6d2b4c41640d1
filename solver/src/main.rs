use std::process::ExitCode;

use prismpulse::level::LevelDefinition;
use prismpulse::par::par_from_solution;
use prismpulse::{solve, PropagationResult, Tracer};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: prismpulse-solver <levels.ron>");
        return ExitCode::from(2);
    };

    let pack = match LevelDefinition::load_pack(&path) {
        Ok(pack) => pack,
        Err(err) => {
            error!(%path, %err, "could not load level pack");
            return ExitCode::FAILURE;
        }
    };

    let mut tracer = Tracer::new();
    let mut result = PropagationResult::default();
    let mut failed = false;

    for level in &pack {
        println!("{} {}", level.id, level.name);

        let mut board = match level.to_board() {
            Ok(board) => board,
            Err(err) => {
                error!(%err, "skipping level");
                failed = true;
                continue;
            }
        };
        print!("{}", board);

        tracer.trace(&board, &mut result);
        println!("satisfied as authored: {}", result.all_targets_satisfied());

        match solve(&mut board) {
            Some(solution) => {
                let par = par_from_solution(level, &board, &solution);
                for (location, rotation) in &solution {
                    board.set_rotation(*location, *rotation);
                }
                println!("solution:");
                print!("{}", board);
                println!("par: {} ({} swaps, {} rotations), authored {}", par.total(), par.swaps, par.rotations, level.par_moves);
            }
            None => println!("no solution"),
        }
        println!();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
