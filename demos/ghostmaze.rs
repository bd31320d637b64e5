//! Terminal maze-search demo.
//!
//! Routes an agent through the fixed application maze with one of the three
//! search strategies (or all of them) and prints the resulting path: the
//! maze with the route overlaid, the waypoint sequence a presentation layer
//! would animate, and the edge count.
//!
//! Run: cargo run --bin ghostmaze [dfs|bfs|astar]

use std::collections::HashSet;

use gridmaze_core::{CellKind, MazeGrid, Point};
use gridmaze_search::{Searcher, Strategy};

/// The application maze: 10 columns by 11 rows, start (1, 1), goal (8, 9).
const MAZE: &str = "\
##########
#@.......#
#.##..##.#
#.#....#.#
#.#.##.#.#
#........#
#.#.##.#.#
#.#....#.#
#.##..##.#
#.......>#
##########";

fn main() {
    let strategies: Vec<Strategy> = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(strategy) => vec![strategy],
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        },
        None => Strategy::ALL.to_vec(),
    };

    let maze = match MazeGrid::parse(MAZE) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let (Some(start), Some(goal)) = (maze.start(), maze.goal()) else {
        eprintln!("Error: maze has no start or goal marker");
        std::process::exit(1);
    };

    let mut searcher = Searcher::new(maze.bounds());
    for strategy in strategies {
        let path = strategy.search(&mut searcher, &maze, start, goal);
        report(strategy, &maze, &path);
    }
}

fn report(strategy: Strategy, maze: &MazeGrid, path: &[Point]) {
    if path.is_empty() {
        println!("{strategy}: no path");
        return;
    }
    println!("{strategy}: {} steps", path.len() - 1);
    print!("{}", render(maze, path));
    let waypoints: Vec<String> = path.iter().map(Point::to_string).collect();
    println!("waypoints: {}", waypoints.join(" "));
    println!();
}

/// Render the maze with the path overlaid as `*` on open cells.
fn render(maze: &MazeGrid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let p = Point::new(x, y);
            let ch = match maze.kind_at(p) {
                Some(CellKind::Open) if on_path.contains(&p) => '*',
                Some(kind) => kind.rune(),
                None => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
