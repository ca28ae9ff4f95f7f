//! 图算法模块
//!
//! 包含最小生成树和单源最短路径算法

mod dijkstra;
mod kruskal;

pub use dijkstra::{Dijkstra, ShortestPath};
pub use kruskal::Kruskal;
