//! 网格迷宫
//!
//! 房间排成 width x height 的网格，相邻房间之间有一堵墙

use crate::algorithm::Dijkstra;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 房间 ID（行优先编号）
pub type RoomId = usize;

/// 房间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    row: usize,
    col: usize,
}

impl Room {
    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// 房间中心坐标 (x, y)
    pub fn center(&self) -> (f64, f64) {
        (self.col as f64 + 0.5, self.row as f64 + 0.5)
    }
}

/// 分隔两个房间的墙
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    room1: RoomId,
    room2: RoomId,
    /// 两房间中心距离
    distance: f64,
}

impl Wall {
    fn between(a: &Room, b: &Room) -> Self {
        let (ax, ay) = a.center();
        let (bx, by) = b.center();
        Self {
            room1: a.id,
            room2: b.id,
            distance: (ax - bx).hypot(ay - by),
        }
    }

    pub fn room1(&self) -> RoomId {
        self.room1
    }

    pub fn room2(&self) -> RoomId {
        self.room2
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// 无序房间对，用于查找
    fn key(&self) -> (RoomId, RoomId) {
        (self.room1.min(self.room2), self.room1.max(self.room2))
    }
}

impl Edge<RoomId> for Wall {
    fn vertex1(&self) -> &RoomId {
        &self.room1
    }

    fn vertex2(&self) -> &RoomId {
        &self.room2
    }

    fn weight(&self) -> f64 {
        self.distance
    }
}

/// 迷宫
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
    walls: Vec<Wall>,
}

impl Maze {
    /// 创建 width x height 的网格迷宫（所有内墙完整）
    pub fn grid(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "迷宫尺寸必须为正: {}x{}",
                width, height
            )));
        }

        let rooms: Vec<Room> = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .enumerate()
            .map(|(id, (row, col))| Room { id, row, col })
            .collect();

        let mut walls = Vec::new();
        for room in &rooms {
            if room.col + 1 < width {
                walls.push(Wall::between(room, &rooms[room.id + 1]));
            }
            if room.row + 1 < height {
                walls.push(Wall::between(room, &rooms[room.id + width]));
            }
        }

        Ok(Self {
            width,
            height,
            rooms,
            walls,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// 所有内墙
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// 按行列查找房间
    pub fn room_at(&self, row: usize, col: usize) -> Option<RoomId> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// 在拆除 `removed` 后的迷宫中求 from 到 to 的最短房间序列
    pub fn solve(&self, removed: &[Wall], from: RoomId, to: RoomId) -> Result<Vec<RoomId>> {
        let graph = Graph::new(self.rooms.iter().map(Room::id), removed.iter().cloned())?;
        let path = Dijkstra::new(&graph).find(&from, &to)?;
        Ok(path.vertices.into_iter().copied().collect())
    }

    /// ASCII 渲染，`path` 中的房间以 `*` 标出
    pub fn render(&self, removed: &[Wall], path: &[RoomId]) -> String {
        let open: HashSet<(RoomId, RoomId)> = removed.iter().map(Wall::key).collect();
        let on_path: HashSet<RoomId> = path.iter().copied().collect();
        let is_open = |a: RoomId, b: RoomId| open.contains(&(a.min(b), a.max(b)));

        let mut out = String::new();
        for row in 0..self.height {
            // 房间上方的墙
            for col in 0..self.width {
                let id = row * self.width + col;
                let gap = row > 0 && is_open(id - self.width, id);
                out.push_str(if gap { "+   " } else { "+---" });
            }
            out.push_str("+\n|");

            for col in 0..self.width {
                let id = row * self.width + col;
                out.push_str(if on_path.contains(&id) { " * " } else { "   " });
                let gap = col + 1 < self.width && is_open(id, id + 1);
                out.push(if gap { ' ' } else { '|' });
            }
            out.push('\n');
        }
        for _ in 0..self.width {
            out.push_str("+---");
        }
        out.push('+');
        out
    }

    /// 迷宫摘要
    pub fn summary(&self, removed: &[Wall]) -> String {
        format!(
            "{}x{} 迷宫: {} 个房间, {} 堵内墙, 拆除 {} 堵",
            self.width,
            self.height,
            self.rooms.len(),
            self.walls.len(),
            removed.len()
        )
    }
}
