//! 边定义
//!
//! 无向带权边：两个端点在创建时固定，权重非负

use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向边接口
///
/// 图只通过该接口读取端点与权重；边之间按权重排序。
pub trait Edge<V> {
    /// 第一个端点
    fn vertex1(&self) -> &V;

    /// 第二个端点
    fn vertex2(&self) -> &V;

    /// 边权重
    fn weight(&self) -> f64;

    /// 获取另一端点（自环返回自身）
    fn other_vertex(&self, vertex: &V) -> &V
    where
        V: PartialEq,
    {
        if self.vertex1() == vertex {
            self.vertex2()
        } else {
            self.vertex1()
        }
    }
}

/// 通用带权边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V> {
    /// 端点 1
    v1: V,
    /// 端点 2
    v2: V,
    /// 权重
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// 创建新边
    pub fn new(v1: V, v2: V, weight: f64) -> Self {
        Self { v1, v2, weight }
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.v1 == self.v2
    }
}

impl<V> Edge<V> for WeightedEdge<V> {
    fn vertex1(&self) -> &V {
        &self.v1
    }

    fn vertex2(&self) -> &V {
        &self.v2
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<V: fmt::Display> fmt::Display for WeightedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]- {}", self.v1, self.weight, self.v2)
    }
}
