//! 四叉最小堆
//!
//! 以数组存储的完全 4 叉树：下标 `i` 的子节点位于 `4i+1 ..= 4i+4`，
//! 父节点位于 `(i-1)/4`。相等键的出队顺序不保证稳定。

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// 默认初始容量
const DEFAULT_CAPACITY: usize = 20;

/// 每个节点的子节点数
const NUM_CHILDREN: usize = 4;

/// 比较函数
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// 最小优先队列
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    /// 前 `heap.len()` 个位置即为全部有效元素
    heap: Vec<T>,
    /// 元素比较函数
    cmp: Comparator<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// 创建空队列（按 `Ord` 排序）
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// 创建指定初始容量的队列
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparator_and_capacity(Ord::cmp, capacity)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// 使用外部比较函数创建队列
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self::with_comparator_and_capacity(cmp, DEFAULT_CAPACITY)
    }

    /// 使用外部比较函数和初始容量创建队列
    pub fn with_comparator_and_capacity(cmp: Comparator<T>, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// 插入元素
    ///
    /// 存储已满时容量翻倍，随后上滤。
    pub fn insert(&mut self, item: T) {
        if self.heap.len() == self.heap.capacity() {
            let additional = self.heap.capacity().max(1);
            self.heap.reserve(additional);
        }

        self.heap.push(item);
        self.percolate_up(self.heap.len() - 1);
    }

    /// 查看最小元素
    pub fn peek_min(&self) -> Result<&T> {
        self.heap.first().ok_or(Error::EmptyContainer)
    }

    /// 移除并返回最小元素
    pub fn remove_min(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyContainer);
        }

        // 根与末尾元素交换后弹出
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.percolate_down(0);
        }

        Ok(min)
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// 当前存储容量
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// 遍历所有元素（顺序不确定）
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// 依次出队，得到升序序列
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(item) = self.remove_min() {
            sorted.push(item);
        }
        sorted
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / NUM_CHILDREN;
            if !self.less(index, parent) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let first_child = NUM_CHILDREN * index + 1;
            if first_child >= len {
                break;
            }

            let last_child = (first_child + NUM_CHILDREN).min(len);
            let mut smallest = first_child;
            for child in first_child + 1..last_child {
                if self.less(child, smallest) {
                    smallest = child;
                }
            }

            if !self.less(smallest, index) {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.insert(item);
        }
        queue
    }
}
