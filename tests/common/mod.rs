//! 集成测试共享工具模块
//!
//! 提供测试用的代价矩阵和路径断言

#![allow(dead_code)]

use trisearch::core::{Cost, GoalSet, NodeId};
use trisearch::CostGraph;

/// 三节点图：1->2 (1), 2->3 (1), 1->3 (5)
pub fn triangle() -> Vec<Vec<Cost>> {
    vec![
        vec![0, 0, 0, 0],
        vec![0, 0, 1, 5],
        vec![0, -1, 0, 1],
        vec![0, -1, -1, 0],
    ]
}

/// 十节点示例图，目标为 {6, 7, 10}
pub fn ten_node_cost() -> Vec<Vec<Cost>> {
    vec![
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 5, 9, -1, 6, -1, -1, -1, -1, -1],
        vec![0, -1, 0, 3, -1, -1, 9, -1, -1, -1, -1],
        vec![0, -1, 2, 0, 1, -1, -1, -1, -1, -1, -1],
        vec![0, 6, -1, -1, 0, -1, -1, 5, 7, -1, -1],
        vec![0, -1, -1, -1, 2, 0, -1, -1, -1, 2, -1],
        vec![0, -1, -1, -1, -1, -1, 0, -1, -1, -1, -1],
        vec![0, -1, -1, -1, -1, -1, -1, 0, -1, -1, -1],
        vec![0, -1, -1, -1, -1, 2, -1, -1, 0, -1, 8],
        vec![0, -1, -1, -1, -1, -1, -1, -1, -1, 0, 7],
        vec![0, -1, -1, -1, -1, -1, -1, -1, 5, 4, 0],
    ]
}

pub fn ten_node_heuristic() -> Vec<Cost> {
    vec![0, 5, 7, 3, 4, 6, 0, 0, 6, 5, 0]
}

pub fn ten_node_graph() -> CostGraph {
    CostGraph::new(ten_node_cost())
        .and_then(|graph| graph.with_heuristic(ten_node_heuristic()))
        .expect("Graph should build in test")
}

/// 节点5与其余节点不连通
pub fn disconnected() -> Vec<Vec<Cost>> {
    vec![
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 2, -1, -1, -1],
        vec![0, 3, 0, 4, -1, -1],
        vec![0, -1, -1, 0, 1, -1],
        vec![0, 1, -1, -1, 0, -1],
        vec![0, -1, -1, -1, -1, 0],
    ]
}

/// 确定性伪随机稠密图，约一半的位置有边
pub fn pseudo_random_cost(node_count: usize, seed: u64) -> Vec<Vec<Cost>> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as i64
    };

    let size = node_count + 1;
    let mut cost = vec![vec![0; size]; size];
    for from in 1..size {
        for to in 1..size {
            if from == to {
                continue;
            }
            let roll = next();
            cost[from][to] = if roll % 2 == 0 { -1 } else { 1 + roll % 9 };
        }
    }
    cost
}

/// 断言路径有效：首节点为起点，末节点为目标，每一跳都是正权边
pub fn assert_valid_path(graph: &CostGraph, path: &[NodeId], start: NodeId, goals: &GoalSet) {
    assert!(
        graph.is_valid_path(path, start, goals),
        "路径 {:?} 无效 (start={}, goals={:?})",
        path,
        start,
        goals
    );
}
