//! 基础数据结构模块
//!
//! 包含图算法依赖的底层结构：
//! - 并查集 (Disjoint Set)，用于最小生成树的环检测
//! - 四叉最小堆 (Priority Queue)，用于最短路径的候选队列
//! - Top-K 选择，基于有界最小堆

mod disjoint_set;
mod priority_queue;
mod top_k;

pub use disjoint_set::{DisjointSet, SetId};
pub use priority_queue::{Comparator, PriorityQueue};
pub use top_k::{top_k_sort, top_k_sort_by};
