//! Command-line interface for running grid queries
//!
//! Each subcommand parses its coordinates, assembles an obstacle set from the
//! explicit, file and scattered sources, runs one query and writes plain text
//! results to the supplied writer.

use crate::algorithm::flood::flood_fill;
use crate::algorithm::line::{is_line_unbroken, trace_line};
use crate::io::configuration::{DEFAULT_MAX_DISTANCE, DEFAULT_SCATTER_RADIUS, DEFAULT_SEED};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::obstacle_map::ObstacleMap;
use crate::io::scatter::scatter_obstacles;
use crate::spatial::coordinate::Coordinate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridcoord")]
#[command(
    author,
    version,
    about = "Run flood-fill, line and direction queries on an integer grid"
)]
/// Command-line arguments for the grid query tool
pub struct Cli {
    /// Query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available grid queries
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hop distances to every cell reachable from the start cells
    Flood(FloodArgs),
    /// Cells crossed by a straight line and whether it is blocked
    Line(LineArgs),
    /// Heading from one cell towards another
    Direction(DirectionArgs),
    /// Cardinal and diagonal distance between two cells
    Distance(PairArgs),
}

/// Obstacle sources shared by the queries that respect walls
#[derive(Args, Debug, Clone)]
pub struct ObstacleArgs {
    /// Blocked cell (repeatable)
    #[arg(short, long = "obstacle", value_name = "X,Y", allow_hyphen_values = true)]
    pub obstacles: Vec<Coordinate>,

    /// Text map of blocked cells ('#' blocked, '.' or space open)
    #[arg(long, value_name = "PATH")]
    pub obstacle_map: Option<PathBuf>,

    /// World position of the first character of the obstacle map
    #[arg(long, value_name = "X,Y", default_value = "0,0", allow_hyphen_values = true)]
    pub map_origin: Coordinate,

    /// Number of random obstacles to scatter around the origin
    #[arg(long, default_value_t = 0)]
    pub scatter: usize,

    /// Random seed for reproducible scattering
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Half-width of the square that scattered obstacles are drawn from
    #[arg(long, default_value_t = DEFAULT_SCATTER_RADIUS, allow_hyphen_values = true)]
    pub radius: i32,
}

impl ObstacleArgs {
    /// Merge every configured obstacle source into one set
    ///
    /// Scattered obstacles never land on a cell in `keep_clear`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scatter radius is negative or the obstacle map cannot be loaded
    pub fn collect(&self, keep_clear: &HashSet<Coordinate>) -> Result<HashSet<Coordinate>> {
        let mut obstacles: HashSet<Coordinate> = self.obstacles.iter().copied().collect();

        if let Some(path) = &self.obstacle_map {
            let map = ObstacleMap::from_path(path, self.map_origin)?;
            tracing::debug!(path = %path.display(), cells = map.len(), "obstacle map loaded");
            obstacles.extend(map.obstacles);
        }

        if self.scatter > 0 {
            if self.radius < 0 {
                return Err(invalid_parameter(
                    "radius",
                    &self.radius,
                    &"scatter radius must not be negative",
                ));
            }
            obstacles.extend(scatter_obstacles(
                self.scatter,
                self.radius,
                self.seed,
                keep_clear,
            ));
        }

        Ok(obstacles)
    }
}

/// Arguments for the `flood` query
#[derive(Args, Debug, Clone)]
pub struct FloodArgs {
    /// Start cell (repeatable, at least one)
    #[arg(long = "start", value_name = "X,Y", required = true, allow_hyphen_values = true)]
    pub starts: Vec<Coordinate>,

    /// Maximum number of orthogonal hops
    #[arg(short, long, default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: usize,

    /// Obstacle sources
    #[command(flatten)]
    pub obstacles: ObstacleArgs,
}

/// Two cells given as positional arguments
#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// First cell
    #[arg(value_name = "FROM", allow_hyphen_values = true)]
    pub from: Coordinate,

    /// Second cell
    #[arg(value_name = "TO", allow_hyphen_values = true)]
    pub to: Coordinate,
}

/// Arguments for the `line` query
#[derive(Args, Debug, Clone)]
pub struct LineArgs {
    /// Line endpoints
    #[command(flatten)]
    pub endpoints: PairArgs,

    /// Obstacle sources
    #[command(flatten)]
    pub obstacles: ObstacleArgs,
}

/// Axis kept when simplifying a diagonal heading
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Keep the horizontal component
    X,
    /// Keep the vertical component
    Y,
}

/// Arguments for the `direction` query
#[derive(Args, Debug, Clone)]
pub struct DirectionArgs {
    /// Cells to classify
    #[command(flatten)]
    pub endpoints: PairArgs,

    /// Reduce a diagonal result to one of its orthogonal components
    #[arg(long, value_enum, value_name = "AXIS")]
    pub simplify: Option<Axis>,
}

impl Command {
    /// Run the query and write its results to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if obstacle sources are invalid or writing to `out` fails
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Self::Flood(args) => run_flood(args, out),
            Self::Line(args) => run_line(args, out),
            Self::Direction(args) => run_direction(args, out),
            Self::Distance(args) => run_distance(args, out),
        }
    }
}

fn run_flood(args: &FloodArgs, out: &mut impl Write) -> Result<()> {
    let keep_clear: HashSet<Coordinate> = args.starts.iter().copied().collect();
    let obstacles = args.obstacles.collect(&keep_clear)?;

    let distances = flood_fill(args.starts.iter().copied(), args.max_distance, &obstacles);

    let mut reached: Vec<(usize, Coordinate)> = distances
        .into_iter()
        .map(|(cell, distance)| (distance, cell))
        .collect();
    reached.sort_unstable();

    for (distance, cell) in reached {
        write_line(out, format_args!("{cell} {distance}"))?;
    }
    Ok(())
}

fn run_line(args: &LineArgs, out: &mut impl Write) -> Result<()> {
    let PairArgs { from, to } = args.endpoints;
    let keep_clear = HashSet::from([from, to]);
    let obstacles = args.obstacles.collect(&keep_clear)?;

    for cell in trace_line(from, to) {
        write_line(out, format_args!("{cell}"))?;
    }
    write_line(out, format_args!("unbroken: {}", is_line_unbroken(from, to, &obstacles)))?;
    Ok(())
}

fn run_direction(args: &DirectionArgs, out: &mut impl Write) -> Result<()> {
    let PairArgs { from, to } = args.endpoints;
    let mut direction = from.direction_to(to);
    if let Some(axis) = args.simplify {
        direction = direction.simplify(axis == Axis::X);
    }

    write_line(out, format_args!("direction: {direction}"))?;
    write_line(out, format_args!("vector: {}", direction.vector()))?;
    Ok(())
}

fn run_distance(args: &PairArgs, out: &mut impl Write) -> Result<()> {
    write_line(out, format_args!("cardinal: {}", args.from.cardinal_distance(args.to)))?;
    write_line(out, format_args!("diagonal: {}", args.from.diagonal_distance(args.to)))?;
    Ok(())
}

fn write_line(out: &mut impl Write, line: fmt::Arguments<'_>) -> Result<()> {
    out.write_fmt(line)
        .and_then(|()| out.write_all(b"\n"))
        .map_err(|source| GridError::Output { source })
}
