//! 已探索集合模块

use crate::core::types::NodeId;

/// 已扩展节点集合，一次搜索内只增不减
///
/// 以节点ID为下标的位图实现，容量为 n+1
#[derive(Debug, Clone)]
pub struct ExploredSet {
    visited: Vec<bool>,
    count: usize,
}

impl ExploredSet {
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count + 1],
            count: 0,
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    /// 标记节点为已探索，首次插入返回 true
    pub fn insert(&mut self, node: NodeId) -> bool {
        let slot = &mut self.visited[node];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut explored = ExploredSet::with_node_count(4);
        assert!(explored.is_empty());
        assert!(explored.insert(2));
        assert!(!explored.insert(2));
        assert!(explored.contains(2));
        assert!(!explored.contains(3));
        assert_eq!(explored.len(), 1);
    }

    #[test]
    fn test_out_of_range_contains() {
        let explored = ExploredSet::with_node_count(2);
        assert!(!explored.contains(10));
    }
}
