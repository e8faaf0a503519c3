//! Headless puzzle runner (default binary).
//!
//! Loads a puzzle JSON, executes a command script, and prints board
//! states as ASCII. This is the thin caller layer the core expects a
//! real presentation front end to replace.
//!
//! Usage: polybreak <puzzle.json> [script.txt]
//!
//! Script commands, one per line (`#` starts a comment):
//!   place <piece-index> <x> <y>
//!   break <x> <y>
//!   tick <n>
//!   settle
//!   show

use std::fs;

use anyhow::{bail, Context, Result};

use polybreak::core::{BoardSnapshot, LinePath};
use polybreak::engine::Session;
use polybreak::level::PuzzleData;
use polybreak::types::Coord;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(puzzle_path) = args.first() else {
        bail!("usage: polybreak <puzzle.json> [script.txt]");
    };

    let text = fs::read_to_string(puzzle_path)
        .with_context(|| format!("reading {puzzle_path}"))?;
    let puzzle = PuzzleData::from_json(&text)?;
    let mut session = puzzle.build_session()?;

    if let Some(script_path) = args.get(1) {
        let script = fs::read_to_string(script_path)
            .with_context(|| format!("reading {script_path}"))?;
        for (line_no, line) in script.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            run_command(&mut session, line)
                .with_context(|| format!("script line {}: {line}", line_no + 1))?;
        }
    }

    session.settle(&LinePath);
    print_board(&session);
    match session.outcome() {
        Some(true) => println!("outcome: win"),
        Some(false) => println!("outcome: loss"),
        None => println!(
            "outcome: unfinished ({} pieces in hand, {} breaks owed)",
            session.pieces().len(),
            session.remaining_breaks()
        ),
    }
    Ok(())
}

fn run_command(session: &mut Session, line: &str) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["place", index, x, y] => {
            let index: usize = index.parse().context("piece index")?;
            let at = parse_coord(x, y)?;
            session
                .place_piece(index, at)
                .map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e.message()))?;
        }
        ["break", x, y] => {
            let at = parse_coord(x, y)?;
            session
                .request_break(at)
                .map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e.message()))?;
        }
        ["tick", n] => {
            let n: u32 = n.parse().context("tick count")?;
            for _ in 0..n {
                session.tick(&LinePath);
            }
        }
        ["settle"] => {
            session.settle(&LinePath);
        }
        ["show"] => print_board(session),
        _ => bail!("unknown command"),
    }
    Ok(())
}

fn parse_coord(x: &str, y: &str) -> Result<Coord> {
    Ok(Coord::new(
        x.parse().context("x coordinate")?,
        y.parse().context("y coordinate")?,
    ))
}

const CELL_SYMBOLS: [char; 6] = ['.', 'b', 'u', 'x', 'g', 'O'];

fn print_board(session: &Session) {
    let snapshot = BoardSnapshot::capture(session.board());
    for row in snapshot.rows() {
        let line: String = row
            .iter()
            .map(|&code| {
                CELL_SYMBOLS
                    .get(usize::from(code))
                    .copied()
                    .unwrap_or('?')
            })
            .collect();
        println!("{line}");
    }
}
