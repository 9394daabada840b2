use criterion::{black_box, criterion_group, criterion_main, Criterion};

use maze_core::generation::carver::carve;
use maze_core::layout::{passage_graph, wall_segments, WorldScale};
use maze_core::spawn::place_spawns;
use maze_core::{Grid, Maze, MazeConfig, MazeSeed, Phase, SpawnPolicy};

fn bench_carving(c: &mut Criterion) {
    for size in [10usize, 100, 300] {
        c.bench_function(&format!("carve_{size}x{size}"), |b| {
            b.iter(|| {
                let mut grid = Grid::new(size, size).unwrap();
                let mut rng = MazeSeed::new(black_box(42)).rng(Phase::Carve);
                carve(&mut grid, &mut rng).unwrap()
            })
        });
    }
}

fn bench_placement(c: &mut Criterion) {
    let grid = Grid::new(100, 100).unwrap();

    c.bench_function("place_spawns_permissive", |b| {
        b.iter(|| {
            let mut rng = MazeSeed::new(black_box(7)).rng(Phase::Spawn);
            place_spawns(&grid, &mut rng, SpawnPolicy::Permissive).unwrap()
        })
    });

    let tiny = Grid::new(2, 1).unwrap();
    c.bench_function("place_spawns_two_cells", |b| {
        b.iter(|| {
            let mut rng = MazeSeed::new(black_box(7)).rng(Phase::Spawn);
            place_spawns(&tiny, &mut rng, SpawnPolicy::Permissive).unwrap()
        })
    });
}

fn bench_full_generation(c: &mut Criterion) {
    let config = MazeConfig::new(50, 50).with_seed(1234);

    c.bench_function("maze_generate_50x50", |b| {
        b.iter(|| Maze::generate(black_box(&config)).unwrap())
    });
}

fn bench_exports(c: &mut Criterion) {
    let maze = Maze::generate(&MazeConfig::new(100, 100).with_seed(5)).unwrap();
    let scale = WorldScale::default();

    c.bench_function("wall_segments_100x100", |b| {
        b.iter(|| wall_segments(black_box(maze.grid()), &scale))
    });

    c.bench_function("passage_graph_100x100", |b| {
        b.iter(|| passage_graph(black_box(maze.grid())))
    });
}

criterion_group!(
    benches,
    bench_carving,
    bench_placement,
    bench_full_generation,
    bench_exports
);
criterion_main!(benches);
