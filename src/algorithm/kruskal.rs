//! 最小生成树算法
//!
//! Kruskal：按权重升序扫描边，用并查集跳过成环的边

use crate::collections::{top_k_sort_by, DisjointSet};
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// 排序键：(权重, 输入位置)，同权重按输入顺序
type SortKey = (f64, usize);

fn by_weight_then_position(a: &SortKey, b: &SortKey) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// Kruskal 最小生成树
pub struct Kruskal<'a, V, E> {
    graph: &'a Graph<V, E>,
}

impl<'a, V, E> Kruskal<'a, V, E>
where
    V: Hash + Eq + Clone + Debug,
    E: Edge<V>,
{
    /// 创建算法实例
    pub fn new(graph: &'a Graph<V, E>) -> Self {
        Self { graph }
    }

    /// 计算最小生成树，按选中顺序（权重升序）返回边
    ///
    /// 图不连通时返回每个分量的最小生成树（森林）。
    #[tracing::instrument(skip_all, fields(vertices = self.graph.num_vertices(), edges = self.graph.num_edges()))]
    pub fn minimum_spanning_tree(&self) -> Result<Vec<&'a E>> {
        let graph = self.graph;
        if graph.num_edges() == 0 {
            return Err(Error::InvalidState("图中没有边，无法构建生成树".to_string()));
        }

        // 孤立顶点不参与并查集
        let touched = graph.vertices_with_edges();
        let mut sets: DisjointSet<&'a V> = DisjointSet::with_capacity(touched.len());
        for vertex in touched {
            sets.make_set(vertex)?;
        }

        let edges = graph.edges();
        let keys = edges.iter().enumerate().map(|(idx, e)| (e.weight(), idx));
        let sorted = top_k_sort_by(edges.len() as i64, keys, by_weight_then_position)?;

        let target = touched.len().saturating_sub(1);
        let mut tree = Vec::with_capacity(target);
        for (_, idx) in sorted {
            if tree.len() == target {
                break;
            }

            let edge = &edges[idx];
            let (v1, v2) = (edge.vertex1(), edge.vertex2());
            if !sets.same_set(&v1, &v2)? {
                sets.union(&v1, &v2)?;
                tree.push(edge);
            }
        }

        debug!(
            selected = tree.len(),
            components = sets.set_count(),
            "最小生成树构建完成"
        );

        Ok(tree)
    }
}
