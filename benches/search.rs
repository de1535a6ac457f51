//! Benchmark search algorithms and full agent runs.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marjana::search::{astar, bfs, dfs, nearest_dirty_astar, nearest_dirty_bfs};
use marjana::{AgentKind, Goal, GridConfig, GridCoord, GridWorld, Simulation};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate a cluttered square world.
fn world(size: usize) -> GridWorld {
    let config = GridConfig::with_size(size, size)
        .with_obstacle_probability(0.15)
        .with_dirt_probability(0.1);
    let mut rng = StdRng::seed_from_u64(42);
    GridWorld::generate(&config, &mut rng).unwrap()
}

/// Far corner, or the last walkable cell before it.
fn far_goal(world: &GridWorld) -> GridCoord {
    (0..world.cell_count())
        .rev()
        .map(|i| world.index_to_coord(i))
        .find(|c| world.is_walkable(*c))
        .unwrap_or(world.robot())
}

fn bench_point_to_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_to_point");
    for size in [16, 32, 64] {
        let world = world(size);
        let goal = Goal::Position(far_goal(&world));
        let start = world.robot();

        group.bench_with_input(BenchmarkId::new("bfs", size), &size, |b, _| {
            b.iter(|| bfs(black_box(&world), start, &goal))
        });
        group.bench_with_input(BenchmarkId::new("dfs", size), &size, |b, _| {
            b.iter(|| dfs(black_box(&world), start, &goal))
        });
        group.bench_with_input(BenchmarkId::new("astar", size), &size, |b, _| {
            b.iter(|| astar(black_box(&world), start, &goal))
        });
    }
    group.finish();
}

fn bench_nearest_dirty(c: &mut Criterion) {
    let world = world(48);
    let start = world.robot();

    c.bench_function("nearest_dirty_bfs_48", |b| {
        b.iter(|| nearest_dirty_bfs(black_box(&world), start))
    });
    c.bench_function("nearest_dirty_astar_48", |b| {
        b.iter(|| nearest_dirty_astar(black_box(&world), start))
    });
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run_24");
    let world = world(24);
    for kind in [
        AgentKind::ModelBased,
        AgentKind::UtilityBased,
        AgentKind::GoalBased,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| {
                let mut sim = Simulation::with_world(world.clone(), kind, None);
                sim.run(100_000)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_point_to_point,
    bench_nearest_dirty,
    bench_full_run
);
criterion_main!(benches);
