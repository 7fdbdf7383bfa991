use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use trisearch::core::{Cost, GoalSet};
use trisearch::{CostGraph, TriTraversal};

/// 网格图：每个格子连向右侧和下方的格子，边权随位置变化
fn grid_cost(side: usize) -> Vec<Vec<Cost>> {
    let n = side * side;
    let mut cost = vec![vec![-1; n + 1]; n + 1];
    let id = |row: usize, col: usize| row * side + col + 1;
    for row in 0..side {
        for col in 0..side {
            let from = id(row, col);
            cost[from][from] = 0;
            if col + 1 < side {
                cost[from][id(row, col + 1)] = 1 + ((row * 7 + col * 3) % 5) as Cost;
            }
            if row + 1 < side {
                cost[from][id(row + 1, col)] = 1 + ((row * 5 + col * 11) % 4) as Cost;
            }
        }
    }
    cost
}

fn bench_tri_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("tri_traversal");
    for side in [8usize, 16, 24] {
        let graph = CostGraph::new(grid_cost(side)).expect("grid graph");
        let goals = GoalSet::from([side * side]);
        let traversal = TriTraversal::new();
        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, graph| {
            b.iter(|| traversal.run(black_box(graph), 1, &goals).expect("valid request"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tri_traversal);
criterion_main!(benches);
