//! Terminal demo: scatter entities over a grid and route around them.
//!
//! Run: cargo run -p wayfind-demos --bin navdemo -- --width 40 --height 16 --seed 7
//!
//! Set `RUST_LOG=debug` to see search statistics.

use clap::Parser;
use log::info;
use rand::prelude::*;
use rand::rngs::StdRng;
use wayfind_core::{Point, WorldPoint};
use wayfind_paths::{AvoidOccupied, Connectivity, NavConfig, NavMap, Path};

/// Route a mover across a randomly cluttered grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of grid columns
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Number of grid rows
    #[arg(long, default_value_t = 16)]
    height: i32,

    /// Side length of one cell in world units
    #[arg(long, default_value_t = 1.0)]
    cell_size: f32,

    /// Fraction of cells holding an entity
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Random seed for entity placement
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Allow diagonal moves
    #[arg(long)]
    diagonal: bool,
}

/// Handle for a scattered entity; only its identity matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntityId(u32);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let connectivity = if args.diagonal {
        Connectivity::Eight
    } else {
        Connectivity::Four
    };
    let config = NavConfig::default()
        .with_cell_size(args.cell_size)
        .with_connectivity(connectivity);
    let mut map: NavMap<EntityId> = match NavMap::with_config(args.width, args.height, config) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let start = Point::new(0, 0);
    let goal = Point::new(args.width - 1, args.height - 1);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut next_id = 0;
    for cell in map.bounds() {
        if cell == start || cell == goal {
            continue;
        }
        if rng.random_bool(args.density.clamp(0.0, 1.0)) {
            map.mark_occupied([cell], Some(EntityId(next_id)));
            next_id += 1;
        }
    }
    info!("placed {} entities on a {}x{} map", next_id, map.width(), map.height());

    let source = map.cell_center(start);
    // Two acceptable goals: the far corner, or just off its edge.
    let size = args.cell_size;
    let destinations = [
        map.cell_center(goal),
        WorldPoint::new(goal.x as f32 * size, (goal.y as f32 + 0.9) * size),
    ];

    match map.find_path(source, &destinations, &AvoidOccupied) {
        Some(path) => {
            print!("{}", render(&map, &path, start));
            info!(
                "route of {} cells, cost {:.2}, ending at {}",
                path.cells().len(),
                path.cost(),
                path.destination().unwrap_or(source)
            );
            for (i, wp) in path.enumerate() {
                log::debug!("waypoint {i}: {wp}");
            }
        }
        None => {
            print!("{}", render_map(&map, &[], start, goal));
            eprintln!("no route from {start} to {goal}");
            std::process::exit(1);
        }
    }
}

fn render(map: &NavMap<EntityId>, path: &Path, start: Point) -> String {
    let goal = path.cells().last().copied().unwrap_or(start);
    render_map(map, path.cells(), start, goal)
}

fn render_map(map: &NavMap<EntityId>, route: &[Point], start: Point, goal: Point) -> String {
    let mut out = String::with_capacity(((map.width() + 1) * map.height()) as usize);
    for y in 0..map.height() {
        for x in 0..map.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if route.contains(&p) {
                '*'
            } else if map.is_occupied(p) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
