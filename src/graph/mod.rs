//! 图核心模块
//!
//! 定义边接口和无向带权图的邻接结构

mod edge;
mod graph;

pub use edge::{Edge, WeightedEdge};
pub use graph::Graph;
