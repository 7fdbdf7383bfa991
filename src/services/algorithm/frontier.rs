//! 优先队列边界（Frontier）模块
//!
//! 带身份索引的优先队列：有序集合负责按优先级取最小，节点ID到条目的映射
//! 保证每个节点在队列中至多存在一个条目，并支持 O(log k) 的 decrease-key。

use std::collections::{BTreeSet, HashMap};

use crate::core::types::{Cost, NodeId, Path};

/// 搜索节点
///
/// 字段顺序即比较顺序：优先级 → 路径字典序 → 节点ID。同一节点在队列中唯一，
/// 因此累计代价不会参与实际的大小判定。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchNode {
    /// UCS 中为累计代价 g，A* 中为 f = g + h
    pub priority: Cost,
    pub path: Path,
    pub node: NodeId,
    /// 从起点到当前节点的累计代价 g
    pub cost: Cost,
}

impl SearchNode {
    /// 起始节点，路径只含自身，g = 0
    pub fn root(node: NodeId, priority: Cost) -> Self {
        Self {
            priority,
            path: vec![node],
            node,
            cost: 0,
        }
    }

    /// 沿边 `self.node -> next` 扩展出的后继节点
    pub fn successor(&self, next: NodeId, edge_cost: Cost, estimate: Cost) -> Self {
        let cost = self.cost.saturating_add(edge_cost);
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self {
            priority: cost.saturating_add(estimate),
            path,
            node: next,
            cost,
        }
    }

    /// 比较累计代价，代价相同时比较路径字典序
    fn improves_on(&self, other: &SearchNode) -> bool {
        (self.cost, &self.path) < (other.cost, &other.path)
    }
}

/// 插入操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierUpdate {
    /// 新节点入队
    Inserted,
    /// 已有条目被更优的候选替换
    Replaced,
    /// 候选不优于已有条目，被丢弃
    Skipped,
}

/// 搜索边界
#[derive(Debug, Default)]
pub struct Frontier {
    queue: BTreeSet<SearchNode>,
    index: HashMap<NodeId, SearchNode>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// 节点是否已有存活条目
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// 查看节点的当前条目
    pub fn get(&self, node: NodeId) -> Option<&SearchNode> {
        self.index.get(&node)
    }

    /// 插入候选节点
    ///
    /// 若该节点已有条目则转为 [`Frontier::decrease_or_skip`]，永远不会出现重复条目
    pub fn insert(&mut self, candidate: SearchNode) -> FrontierUpdate {
        if self.contains(candidate.node) {
            return if self.decrease_or_skip(candidate) {
                FrontierUpdate::Replaced
            } else {
                FrontierUpdate::Skipped
            };
        }
        self.index.insert(candidate.node, candidate.clone());
        self.queue.insert(candidate);
        FrontierUpdate::Inserted
    }

    /// 对已存在的条目执行 decrease-key
    ///
    /// 仅当候选的累计代价更小，或代价相同但路径字典序更小时替换并返回 true；
    /// 节点不在队列中或候选不更优时返回 false
    pub fn decrease_or_skip(&mut self, candidate: SearchNode) -> bool {
        let Some(existing) = self.index.get(&candidate.node) else {
            return false;
        };
        if !candidate.improves_on(existing) {
            return false;
        }
        self.queue.remove(existing);
        self.queue.insert(candidate.clone());
        self.index.insert(candidate.node, candidate);
        true
    }

    /// 取出优先级最小的节点
    pub fn pop_min(&mut self) -> Option<SearchNode> {
        let first = self.queue.pop_first()?;
        self.index.remove(&first.node);
        Some(first)
    }

    /// 查看优先级最小的节点但不取出
    pub fn peek_min(&self) -> Option<&SearchNode> {
        self.queue.first()
    }
}
