//! 迷宫模块
//!
//! 网格迷宫、基于 Kruskal 的迷宫生成与最短路径求解

mod carver;
mod config;
mod maze;

pub use carver::KruskalMazeCarver;
pub use config::MazeConfig;
pub use maze::{Maze, Room, RoomId, Wall};
