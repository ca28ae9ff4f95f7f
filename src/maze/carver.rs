//! Kruskal 迷宫生成
//!
//! 给每堵墙分配一个临时随机键，按该键求最小生成树，
//! 树上的墙即为需要拆除的墙。墙本身的距离不会被修改。

use super::config::MazeConfig;
use super::maze::{Maze, RoomId, Wall};
use crate::error::Result;
use crate::graph::{Edge, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// 带临时排序键的墙
#[derive(Debug, Clone)]
struct KeyedWall<'a> {
    wall: &'a Wall,
    key: f64,
}

impl Edge<RoomId> for KeyedWall<'_> {
    fn vertex1(&self) -> &RoomId {
        self.wall.vertex1()
    }

    fn vertex2(&self) -> &RoomId {
        self.wall.vertex2()
    }

    fn weight(&self) -> f64 {
        self.key
    }
}

/// Kruskal 迷宫生成器
#[derive(Debug, Clone, Default)]
pub struct KruskalMazeCarver {
    /// 随机种子，None 时使用系统熵
    seed: Option<u64>,
}

impl KruskalMazeCarver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用固定种子（结果可复现）
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn from_config(config: &MazeConfig) -> Self {
        Self { seed: config.seed }
    }

    /// 返回需要拆除的墙
    pub fn walls_to_remove(&self, maze: &Maze) -> Result<Vec<Wall>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.walls_to_remove_with(maze, &mut rng)
    }

    /// 使用给定随机源生成
    #[tracing::instrument(skip_all, fields(width = maze.width(), height = maze.height()))]
    pub fn walls_to_remove_with<R: Rng>(&self, maze: &Maze, rng: &mut R) -> Result<Vec<Wall>> {
        if maze.walls().is_empty() {
            return Ok(Vec::new());
        }

        // 第一阶段：分配临时键
        let keyed: Vec<KeyedWall<'_>> = maze
            .walls()
            .iter()
            .map(|wall| KeyedWall {
                wall,
                key: rng.gen::<f64>(),
            })
            .collect();

        // 第二阶段：按临时键求生成树，之后丢弃键
        let graph = Graph::new(maze.rooms().iter().map(|room| room.id()), keyed)?;
        let tree = graph.minimum_spanning_tree()?;
        let removed: Vec<Wall> = tree.into_iter().map(|kw| kw.wall.clone()).collect();

        debug!(
            walls = maze.walls().len(),
            removed = removed.len(),
            "迷宫生成完成"
        );

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::DisjointSet;

    #[test]
    fn test_carved_maze_is_spanning_tree() {
        let maze = Maze::grid(8, 6).unwrap();
        let removed = KruskalMazeCarver::with_seed(1).walls_to_remove(&maze).unwrap();

        assert_eq!(removed.len(), maze.rooms().len() - 1);

        // 拆除的墙不成环，且连通所有房间
        let mut sets = DisjointSet::new();
        for room in maze.rooms() {
            sets.make_set(room.id()).unwrap();
        }
        for wall in &removed {
            sets.union(&wall.room1(), &wall.room2()).unwrap();
        }
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_walls_keep_original_distance() {
        let maze = Maze::grid(4, 4).unwrap();
        let removed = KruskalMazeCarver::with_seed(9).walls_to_remove(&maze).unwrap();

        for wall in &removed {
            assert_eq!(wall.distance(), 1.0);
            assert!(maze.walls().contains(wall));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let maze = Maze::grid(5, 5).unwrap();
        let a = KruskalMazeCarver::with_seed(42).walls_to_remove(&maze).unwrap();
        let b = KruskalMazeCarver::with_seed(42).walls_to_remove(&maze).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_every_room_reachable() {
        let maze = Maze::grid(6, 4).unwrap();
        let removed = KruskalMazeCarver::new().walls_to_remove(&maze).unwrap();

        let last = maze.rooms().len() - 1;
        let path = maze.solve(&removed, 0, last).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&last));
    }

    #[test]
    fn test_single_room() {
        let maze = Maze::grid(1, 1).unwrap();
        let removed = KruskalMazeCarver::with_seed(3).walls_to_remove(&maze).unwrap();

        assert!(removed.is_empty());
    }

    #[test]
    fn test_single_row() {
        // 一维迷宫只有一种生成树：拆除全部墙
        let maze = Maze::grid(5, 1).unwrap();
        let removed = KruskalMazeCarver::with_seed(5).walls_to_remove(&maze).unwrap();

        assert_eq!(removed.len(), 4);
    }
}
