//! Folding, counting and grouping.

use std::{
  collections::HashMap,
  hash::Hash,
};

/// Folds `v` from left to right, threading `memo` through every invocation of
/// `f`.
pub fn reduce<T, U>(v: &[T], memo: U, mut f: impl FnMut(&T, U) -> U) -> U {
  v.iter().fold(memo, |memo, a| f(a, memo))
}

/// Counts the elements of `v` for which `f` returns true.
pub fn count<T>(v: &[T], mut f: impl FnMut(&T) -> bool) -> usize {
  v.iter().filter(|&a| f(a)).count()
}

/// Counts the elements of `v` per value returned by `f`.
pub fn count_by<T, U: Eq + Hash>(v: &[T], mut f: impl FnMut(&T) -> U) -> HashMap<U, usize> {
  let mut r = HashMap::new();
  for a in v {
    *r.entry(f(a)).or_default() += 1;
  }
  r
}

/// Groups the elements of `v` by the value returned by `f`. Elements keep
/// their original relative order within each group.
pub fn group_by<T: Clone, U: Eq + Hash>(
  v: &[T],
  mut f: impl FnMut(&T) -> U,
) -> HashMap<U, Vec<T>> {
  let mut r: HashMap<U, Vec<T>> = HashMap::new();
  for a in v {
    r.entry(f(a)).or_default().push(a.clone());
  }
  r
}
