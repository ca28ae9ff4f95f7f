//! 图数据结构
//!
//! 无向带权多重图：允许自环、平行边和不连通分量

use super::edge::Edge;
use crate::algorithm::{Dijkstra, Kruskal};
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// 两个顶点之间的平行边（边下标，按权重升序）
pub(crate) type EdgeSlot = SmallVec<[usize; 2]>;

/// 单个顶点的邻接表：邻居 -> 平行边
pub(crate) type Neighbors<V> = IndexMap<V, EdgeSlot>;

/// 图
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    /// 邻接表（孤立顶点对应空表）
    adjacency: IndexMap<V, Neighbors<V>>,
    /// 全部边，按输入顺序
    edges: Vec<E>,
    /// 至少关联一条边的顶点
    vertices_with_edges: IndexSet<V>,
}

impl<V, E> Graph<V, E>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<V>,
{
    /// 由顶点与边构建图
    ///
    /// 边权重为负（或 NaN）、端点不在顶点集中时返回 [`Error::InvalidArgument`]。
    /// 重复的顶点只计一次。
    pub fn new<IV, IE>(vertices: IV, edges: IE) -> Result<Self>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = E>,
    {
        let mut adjacency: IndexMap<V, Neighbors<V>> = IndexMap::new();
        for vertex in vertices {
            adjacency.entry(vertex).or_default();
        }

        let edges: Vec<E> = edges.into_iter().collect();

        // 先完成校验，再修改邻接表
        for edge in &edges {
            let weight = edge.weight();
            if weight.is_nan() || weight < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "边权重必须非负: {:?} - {:?} 权重 {}",
                    edge.vertex1(),
                    edge.vertex2(),
                    weight
                )));
            }
            for endpoint in [edge.vertex1(), edge.vertex2()] {
                if !adjacency.contains_key(endpoint) {
                    return Err(Error::InvalidArgument(format!(
                        "边端点 {:?} 不在顶点集中",
                        endpoint
                    )));
                }
            }
        }

        let mut vertices_with_edges = IndexSet::new();
        for (idx, edge) in edges.iter().enumerate() {
            let (v1, v2) = (edge.vertex1(), edge.vertex2());
            vertices_with_edges.insert(v1.clone());
            vertices_with_edges.insert(v2.clone());

            Self::link(&mut adjacency, &edges, v1, v2, idx);
            if v1 != v2 {
                Self::link(&mut adjacency, &edges, v2, v1, idx);
            }
        }

        debug!(
            vertices = adjacency.len(),
            edges = edges.len(),
            vertices_with_edges = vertices_with_edges.len(),
            "图构建完成"
        );

        Ok(Self {
            adjacency,
            edges,
            vertices_with_edges,
        })
    }

    /// 在 from -> to 的平行边中按权重插入边下标
    fn link(adjacency: &mut IndexMap<V, Neighbors<V>>, edges: &[E], from: &V, to: &V, idx: usize) {
        if let Some(neighbors) = adjacency.get_mut(from) {
            let slot = neighbors.entry(to.clone()).or_default();
            let weight = edges[idx].weight();
            let pos = slot.partition_point(|&other| edges[other].weight() <= weight);
            slot.insert(pos, idx);
        }
    }

    // ==================== 基本查询 ====================

    /// 顶点数（含孤立顶点）
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// 边数（无向边只计一次）
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// 顶点是否关联至少一条边
    pub fn has_adjacency(&self, vertex: &V) -> bool {
        self.adjacency
            .get(vertex)
            .map_or(false, |neighbors| !neighbors.is_empty())
    }

    /// 所有顶点（按声明顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// 所有边（按输入顺序）
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// 关联至少一条边的顶点
    pub fn vertices_with_edges(&self) -> &IndexSet<V> {
        &self.vertices_with_edges
    }

    /// 两点之间的所有边（按权重升序）
    pub fn edges_between(&self, a: &V, b: &V) -> Vec<&E> {
        self.adjacency
            .get(a)
            .and_then(|neighbors| neighbors.get(b))
            .map(|slot| slot.iter().map(|&idx| &self.edges[idx]).collect())
            .unwrap_or_default()
    }

    /// 两点之间权重最小的边
    pub fn cheapest_edge(&self, a: &V, b: &V) -> Option<&E> {
        let idx = *self.adjacency.get(a)?.get(b)?.first()?;
        Some(&self.edges[idx])
    }

    /// 顶点的不同邻居数（自环算作一个邻居）
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(|neighbors| neighbors.len())
    }

    /// 顶点的邻接表
    pub(crate) fn neighbors(&self, vertex: &V) -> Option<&Neighbors<V>> {
        self.adjacency.get(vertex)
    }

    /// 遍历 (顶点, 邻接表)
    pub(crate) fn adjacency(&self) -> impl Iterator<Item = (&V, &Neighbors<V>)> {
        self.adjacency.iter()
    }

    // ==================== 图算法 ====================

    /// 最小生成树（Kruskal）
    ///
    /// 前置条件：所有带边顶点彼此连通，否则结果为最小生成森林。
    /// 图中没有边时返回 [`Error::InvalidState`]。
    pub fn minimum_spanning_tree(&self) -> Result<Vec<E>>
    where
        E: Clone,
    {
        let tree = Kruskal::new(self).minimum_spanning_tree()?;
        Ok(tree.into_iter().cloned().collect())
    }

    /// 最短路径（Dijkstra），按 start -> end 顺序返回路径上的边
    ///
    /// start 与 end 相同时返回空路径。
    pub fn shortest_path(&self, start: &V, end: &V) -> Result<Vec<E>>
    where
        E: Clone,
    {
        let path = Dijkstra::new(self).find(start, end)?;
        Ok(path.edges.into_iter().cloned().collect())
    }
}
