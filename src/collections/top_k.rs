//! Top-K 选择
//!
//! 用容量为 k 的最小堆在 O(n log k) 时间、O(k) 空间内选出最大的 k 个元素。

use super::priority_queue::{Comparator, PriorityQueue};
use crate::error::{Error, Result};
use std::cmp::Ordering;

/// 返回 `input` 中最大的 `k` 个元素（升序）
///
/// 元素不足 `k` 个时返回全部元素；`k < 0` 返回 [`Error::InvalidArgument`]。
pub fn top_k_sort<T, I>(k: i64, input: I) -> Result<Vec<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    top_k_sort_by(k, input, Ord::cmp)
}

/// 使用外部比较函数的 [`top_k_sort`]
pub fn top_k_sort_by<T, I>(k: i64, input: I, cmp: Comparator<T>) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    if k < 0 {
        return Err(Error::InvalidArgument(format!("k 不能为负数: {}", k)));
    }
    let k = usize::try_from(k).map_err(|_| Error::InvalidArgument(format!("k 过大: {}", k)))?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let input = input.into_iter();
    // 避免超大 k 时一次性分配
    let capacity = k.min(input.size_hint().0) + 1;
    let mut heap = PriorityQueue::with_comparator_and_capacity(cmp, capacity);

    for item in input {
        if heap.len() < k {
            heap.insert(item);
        } else if cmp(heap.peek_min()?, &item) == Ordering::Less {
            heap.remove_min()?;
            heap.insert(item);
        }
    }

    Ok(heap.into_sorted_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_simple_usage() {
        let top = top_k_sort(5, 0..20).unwrap();
        assert_eq!(top, vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_k_equals_input_size() {
        let top = top_k_sort(19, (0..19).rev()).unwrap();
        assert_eq!(top, (0..19).collect::<Vec<_>>());
    }

    #[test]
    fn test_k_larger_than_input() {
        let top = top_k_sort(100, vec![3, 1, 2]).unwrap();
        assert_eq!(top, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_and_negative_k() {
        assert!(top_k_sort(0, vec![1, 2, 3]).unwrap().is_empty());
        assert!(top_k_sort(0, Vec::<i32>::new()).unwrap().is_empty());
        assert!(matches!(
            top_k_sort(-1, vec![1, 2, 3]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            top_k_sort(-1, Vec::<i32>::new()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(top_k_sort(5, Vec::<i32>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_counted() {
        let top = top_k_sort(3, vec![5, 9, 9, 1, 9, 5]).unwrap();
        assert_eq!(top, vec![9, 9, 9]);

        let top = top_k_sort(4, vec![5, 9, 9, 1, 9, 5]).unwrap();
        assert_eq!(top, vec![5, 9, 9, 9]);
    }

    #[test]
    fn test_custom_comparator() {
        // 按字符串长度选出最长的两个
        let words = vec!["a", "abcd", "ab", "abc"];
        let top = top_k_sort_by(2, words, |a, b| a.len().cmp(&b.len())).unwrap();
        assert_eq!(top, vec!["abc", "abcd"]);
    }

    #[test]
    fn test_matches_full_sort_stress() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.gen_range(0..500);
            let mut values: Vec<i32> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
            values.shuffle(&mut rng);
            let k = rng.gen_range(0..600);

            let top = top_k_sort(k, values.clone()).unwrap();

            let mut expected = values;
            expected.sort();
            let keep = expected.len().min(k as usize);
            let expected = expected.split_off(expected.len() - keep);
            assert_eq!(top, expected);
        }
    }
}
