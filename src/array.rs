//! Sequence utilities
//!
//! Deduplication, chunking, flattening, shuffling and membership filters.
//! Every function borrows its input and returns a new `Vec`.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

/// Depth used by callers that want a single level of flattening.
pub const DEFAULT_FLATTEN_DEPTH: usize = 1;

/// An element of a nested sequence: a plain item or a nested list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    pub fn list<I: IntoIterator<Item = Nested<T>>>(items: I) -> Self {
        Nested::List(items.into_iter().collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// Removes duplicates, keeping the first occurrence of each element.
pub fn unique<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Splits `seq` into consecutive groups of `size` elements.
///
/// The last group may be shorter. A `size` of zero yields no groups.
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    seq.chunks(size).map(<[T]>::to_vec).collect()
}

/// Flattens nested lists up to `depth` levels.
///
/// Lists deeper than `depth` stay nested; `depth == 0` returns a shallow
/// copy. Items are never touched, whatever the level they appear at.
pub fn flatten<T: Clone>(seq: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    if depth == 0 {
        return seq.to_vec();
    }
    let mut result = Vec::with_capacity(seq.len());
    for element in seq {
        match element {
            Nested::List(inner) => result.extend(flatten(inner, depth - 1)),
            item @ Nested::Item(_) => result.push(item.clone()),
        }
    }
    result
}

/// Returns a uniformly random permutation of `seq`.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// Like [`shuffle`], drawing from the given generator.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut result = seq.to_vec();
    // Fisher-Yates, from the back
    result.shuffle(rng);
    result
}

/// Elements of `a` that also appear in `b`, in `a`'s order.
pub fn intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(item)).cloned().collect()
}

/// Elements of `a` that do not appear in `b`, in `a`'s order.
pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn i(value: i32) -> Nested<i32> {
        Nested::item(value)
    }

    fn l(items: Vec<Nested<i32>>) -> Nested<i32> {
        Nested::list(items)
    }

    #[test]
    fn test_unique() {
        assert_eq!(unique(&[1, 2, 2, 3, 3, 3]), vec![1, 2, 3]);
        assert_eq!(unique(&["a", "b", "a", "c"]), vec!["a", "b", "c"]);
        assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_unique_keeps_first_seen_order() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(chunk(&[1, 2, 3, 4], 2), vec![vec![1, 2], vec![3, 4]]);
        assert!(chunk::<i32>(&[], 2).is_empty());
        assert!(chunk(&[1, 2, 3], 0).is_empty());
        assert_eq!(chunk(&[1, 2], 5), vec![vec![1, 2]]);
    }

    #[test]
    fn test_flatten_one_level() {
        let input = vec![l(vec![i(1), i(2)]), l(vec![i(3), i(4)])];
        let flat = flatten(&input, DEFAULT_FLATTEN_DEPTH);

        assert_eq!(flat, vec![i(1), i(2), i(3), i(4)]);
        assert!(input.iter().all(Nested::is_list));
        assert!(!flat.iter().any(Nested::is_list));
    }

    #[test]
    fn test_flatten_depth() {
        let input = vec![i(1), l(vec![i(2), l(vec![i(3), i(4)])]), i(5)];

        assert_eq!(flatten(&input, 2), vec![i(1), i(2), i(3), i(4), i(5)]);
        assert_eq!(
            flatten(&input, 1),
            vec![i(1), i(2), l(vec![i(3), i(4)]), i(5)]
        );
        assert_eq!(flatten(&input, 0), input);
    }

    #[test]
    fn test_flatten_empty_lists_vanish() {
        let input = vec![l(vec![]), i(1), l(vec![l(vec![])])];
        assert_eq!(flatten(&input, 1), vec![i(1), l(vec![])]);
        assert_eq!(flatten(&input, 2), vec![i(1)]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let arr = [1, 2, 3, 4, 5];
        let shuffled = shuffle(&arr);

        assert_eq!(shuffled.len(), 5);
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, arr);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_with_seed_is_reproducible() {
        let arr: Vec<u32> = (0..32).collect();
        let first = shuffle_with(&arr, &mut StdRng::seed_from_u64(7));
        let second = shuffle_with(&arr, &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
        assert_ne!(first, arr);
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
        assert_eq!(intersection(&["a", "b"], &["b", "c"]), vec!["b"]);
        assert!(intersection(&[1, 2], &[3, 4]).is_empty());
        assert_eq!(intersection(&[2, 2, 1], &[2]), vec![2, 2]);
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(&[1, 2, 3], &[2, 3, 4]), vec![1]);
        assert_eq!(difference(&["a", "b", "c"], &["b"]), vec!["a", "c"]);
        assert_eq!(difference(&[1, 2], &[3, 4]), vec![1, 2]);
        assert_eq!(difference(&[1, 1, 2], &[2]), vec![1, 1]);
    }
}
