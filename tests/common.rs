//! Test utilities for Marjana integration tests.
//!
//! Seeded world generation and brute-force reference distances.

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use marjana::{GridConfig, GridCoord, GridWorld};

/// Unreachable marker in distance tables.
pub const INF: u32 = u32::MAX;

/// Generate a reproducible world.
pub fn seeded_world(width: usize, height: usize, obstacles: f64, dirt: f64, seed: u64) -> GridWorld {
    let config = GridConfig::with_size(width, height)
        .with_obstacle_probability(obstacles)
        .with_dirt_probability(dirt);
    let mut rng = StdRng::seed_from_u64(seed);
    GridWorld::generate(&config, &mut rng).unwrap()
}

/// A batch of small cluttered worlds for property-style checks.
pub fn world_batch(count: u64) -> Vec<GridWorld> {
    (0..count)
        .map(|seed| seeded_world(7, 6, 0.25, 0.3, seed))
        .collect()
}

/// All-pairs shortest path lengths by Floyd-Warshall, indexed by cell index.
pub fn all_pairs_distances(world: &GridWorld) -> Vec<Vec<u32>> {
    let n = world.cell_count();
    let mut dist = vec![vec![INF; n]; n];

    for i in 0..n {
        let cell = world.index_to_coord(i);
        if !world.is_walkable(cell) {
            continue;
        }
        dist[i][i] = 0;
        for neighbor in world.neighbors(cell) {
            if let Some(j) = world.coord_to_index(neighbor) {
                dist[i][j] = 1;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == INF {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == INF {
                    continue;
                }
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

/// Reference distance between two cells, `None` if unreachable.
pub fn reference_distance(
    world: &GridWorld,
    table: &[Vec<u32>],
    from: GridCoord,
    to: GridCoord,
) -> Option<u32> {
    let i = world.coord_to_index(from)?;
    let j = world.coord_to_index(to)?;
    (table[i][j] != INF).then_some(table[i][j])
}

/// Every walkable cell in row-major order.
pub fn walkable_cells(world: &GridWorld) -> Vec<GridCoord> {
    (0..world.cell_count())
        .map(|i| world.index_to_coord(i))
        .filter(|c| world.is_walkable(*c))
        .collect()
}

/// Check that a path is a chain of 4-adjacent walkable cells.
pub fn assert_valid_path(world: &GridWorld, path: &[GridCoord]) {
    for cell in path {
        assert!(world.is_walkable(*cell), "path crosses {}", cell);
    }
    for pair in path.windows(2) {
        assert_eq!(
            pair[0].manhattan_distance(&pair[1]),
            1,
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}
