//! 并查集
//!
//! 元素映射到数组下标，数组中负值表示根节点（`-(rank + 1)`），
//! 非负值为父节点下标。查找时做路径压缩，合并时按秩合并。

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// 默认初始容量
const DEFAULT_CAPACITY: usize = 20;

/// 集合代表元 ID（根节点下标）
pub type SetId = usize;

/// 数组实现的并查集
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// 父指针 / 秩编码数组
    pointers: Vec<isize>,
    /// 元素到下标的映射
    index: HashMap<T, usize>,
    /// 当前不相交集合数
    set_count: usize,
}

impl<T> DisjointSet<T>
where
    T: Hash + Eq + Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 创建指定初始容量的并查集
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pointers: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// 为 `item` 新建单元素集合
    pub fn make_set(&mut self, item: T) -> Result<()> {
        if self.index.contains_key(&item) {
            return Err(Error::DuplicateElement(format!("{:?}", item)));
        }

        if self.pointers.len() == self.pointers.capacity() {
            let additional = self.pointers.capacity().max(1);
            self.pointers.reserve(additional);
        }

        self.index.insert(item, self.pointers.len());
        self.pointers.push(-1);
        self.set_count += 1;
        Ok(())
    }

    /// 返回 `item` 所在集合的代表元
    pub fn find_set(&mut self, item: &T) -> Result<SetId> {
        let id = self.id_of(item)?;
        Ok(self.find_root(id))
    }

    /// 合并 `item1` 与 `item2` 所在的集合
    pub fn union(&mut self, item1: &T, item2: &T) -> Result<()> {
        let id1 = self.id_of(item1)?;
        let id2 = self.id_of(item2)?;

        let root1 = self.find_root(id1);
        let root2 = self.find_root(id2);
        if root1 == root2 {
            return Err(Error::SameSet(format!("{:?} 与 {:?}", item1, item2)));
        }

        let rank1 = self.rank(root1);
        let rank2 = self.rank(root2);
        if rank1 < rank2 {
            self.pointers[root1] = root2 as isize;
        } else if rank2 < rank1 {
            self.pointers[root2] = root1 as isize;
        } else {
            self.pointers[root2] = root1 as isize;
            self.pointers[root1] -= 1;
        }

        self.set_count -= 1;
        Ok(())
    }

    /// 两个元素是否在同一集合
    pub fn same_set(&mut self, item1: &T, item2: &T) -> Result<bool> {
        Ok(self.find_set(item1)? == self.find_set(item2)?)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// 已注册元素数
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// 不相交集合数
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    fn id_of(&self, item: &T) -> Result<usize> {
        self.index
            .get(item)
            .copied()
            .ok_or_else(|| Error::UnknownElement(format!("{:?}", item)))
    }

    fn rank(&self, root: usize) -> isize {
        -self.pointers[root] - 1
    }

    /// 找到根并把路径上的节点直接指向根
    fn find_root(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.pointers[root] >= 0 {
            root = self.pointers[root] as usize;
        }

        let mut node = id;
        while self.pointers[node] >= 0 {
            let parent = self.pointers[node] as usize;
            self.pointers[node] = root as isize;
            node = parent;
        }

        root
    }
}

impl<T> Default for DisjointSet<T>
where
    T: Hash + Eq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
