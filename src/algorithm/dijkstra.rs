//! 单源最短路径算法
//!
//! Dijkstra（一致代价搜索变体）：不使用 decrease-key，
//! 发现更短距离时重新入队，过期记录出队时直接跳过。

use crate::collections::PriorityQueue;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// 搜索过程中的顶点记录
#[derive(Debug, Clone)]
struct VertexRecord<'a, V> {
    vertex: &'a V,
    /// 暂定代价
    cost: f64,
    predecessor: Option<&'a V>,
}

fn by_cost<V>(a: &VertexRecord<'_, V>, b: &VertexRecord<'_, V>) -> Ordering {
    a.cost.total_cmp(&b.cost)
}

/// 最短路径结果
#[derive(Debug, Clone)]
pub struct ShortestPath<'a, V, E> {
    /// 路径上的顶点序列（含起点和终点）
    pub vertices: Vec<&'a V>,
    /// 路径上的边序列
    pub edges: Vec<&'a E>,
    /// 路径总权重
    pub total_weight: f64,
}

impl<'a, V, E> ShortestPath<'a, V, E> {
    fn single(vertex: &'a V) -> Self {
        Self {
            vertices: vec![vertex],
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// 边数
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Dijkstra 最短路径
pub struct Dijkstra<'a, V, E> {
    graph: &'a Graph<V, E>,
}

impl<'a, V, E> Dijkstra<'a, V, E>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<V>,
{
    /// 创建算法实例
    pub fn new(graph: &'a Graph<V, E>) -> Self {
        Self { graph }
    }

    /// 查找 start 到 end 的最短路径
    ///
    /// - 端点不在图中：[`Error::InvalidArgument`]
    /// - 端点没有关联边，或两点不连通：[`Error::NoPathExists`]
    /// - start 与 end 相同：空路径
    #[tracing::instrument(skip_all, fields(start = ?start, end = ?end))]
    pub fn find(&self, start: &V, end: &V) -> Result<ShortestPath<'a, V, E>> {
        let graph = self.graph;
        for endpoint in [start, end] {
            if !graph.contains_vertex(endpoint) {
                return Err(Error::InvalidArgument(format!(
                    "顶点 {:?} 不在图中",
                    endpoint
                )));
            }
        }

        if !graph.has_adjacency(start) || !graph.has_adjacency(end) {
            return Err(no_path(start, end));
        }

        if start == end {
            let vertex = graph
                .vertices_with_edges()
                .get(start)
                .ok_or_else(|| no_path(start, end))?;
            return Ok(ShortestPath::single(vertex));
        }

        // 所有带边顶点入队，起点代价为 0，其余为无穷大
        let mut best: HashMap<&'a V, f64> = HashMap::new();
        let mut queue: PriorityQueue<VertexRecord<'a, V>> =
            PriorityQueue::with_comparator_and_capacity(by_cost, graph.vertices_with_edges().len());
        for (vertex, neighbors) in graph.adjacency() {
            if neighbors.is_empty() {
                continue;
            }
            let cost = if vertex == start { 0.0 } else { f64::INFINITY };
            best.insert(vertex, cost);
            queue.insert(VertexRecord {
                vertex,
                cost,
                predecessor: None,
            });
        }

        // 已确定最短距离的顶点 -> 前驱
        let mut settled: HashMap<&'a V, Option<&'a V>> = HashMap::new();
        let mut stale = 0usize;

        while let Ok(record) = queue.remove_min() {
            if settled.contains_key(record.vertex) {
                // 已被更短的记录取代
                stale += 1;
                continue;
            }
            if record.cost.is_infinite() {
                break;
            }

            settled.insert(record.vertex, record.predecessor);
            if record.vertex == end {
                debug!(settled = settled.len(), stale, cost = record.cost, "找到最短路径");
                return self.reconstruct(&settled, record.vertex, record.cost);
            }

            let Some(neighbors) = graph.neighbors(record.vertex) else {
                continue;
            };
            for (neighbor, slot) in neighbors {
                if neighbor == record.vertex || settled.contains_key(neighbor) {
                    continue;
                }
                // 平行边中第一条即最便宜的边
                let Some(&idx) = slot.first() else {
                    continue;
                };
                let candidate = record.cost + graph.edges()[idx].weight();
                let known = best.get(neighbor).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    best.insert(neighbor, candidate);
                    queue.insert(VertexRecord {
                        vertex: neighbor,
                        cost: candidate,
                        predecessor: Some(record.vertex),
                    });
                }
            }
        }

        debug!(settled = settled.len(), stale, "终点不可达");
        Err(no_path(start, end))
    }

    /// 沿前驱回溯，得到 start -> end 的路径
    fn reconstruct(
        &self,
        settled: &HashMap<&'a V, Option<&'a V>>,
        end: &'a V,
        total_weight: f64,
    ) -> Result<ShortestPath<'a, V, E>> {
        let mut vertices = vec![end];
        let mut edges = Vec::new();
        let mut current = end;

        while let Some(&Some(prev)) = settled.get(current) {
            let edge = self.graph.cheapest_edge(prev, current).ok_or_else(|| {
                Error::InvalidState(format!("邻接表缺少边 {:?} - {:?}", prev, current))
            })?;
            edges.push(edge);
            vertices.push(prev);
            current = prev;
        }

        vertices.reverse();
        edges.reverse();

        Ok(ShortestPath {
            vertices,
            edges,
            total_weight,
        })
    }
}

fn no_path<V: Debug>(start: &V, end: &V) -> Error {
    Error::NoPathExists {
        from: format!("{:?}", start),
        to: format!("{:?}", end),
    }
}
