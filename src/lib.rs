//! MazeGraph - 图算法与基础数据结构库
//!
//! 提供：
//! - 并查集、四叉最小堆、Top-K 选择
//! - 无向带权多重图，支持最小生成树 (Kruskal) 与最短路径 (Dijkstra)
//! - 基于 Kruskal 的网格迷宫生成与求解

pub mod algorithm;
pub mod collections;
pub mod error;
pub mod graph;
pub mod maze;

// 重导出常用类型
pub use algorithm::{Dijkstra, Kruskal, ShortestPath};
pub use collections::{top_k_sort, top_k_sort_by, DisjointSet, PriorityQueue, SetId};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, WeightedEdge};
pub use maze::{KruskalMazeCarver, Maze, MazeConfig, Room, RoomId, Wall};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
