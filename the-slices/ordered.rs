//! Sorting, deduplication and min/max selection.

use std::{
  cmp::Ordering,
  collections::HashSet,
  hash::Hash,
  time::Instant,
};

use tracing::Level;

/// Returns a sorted copy of `v` according to the strict weak ordering `less`.
/// Equal elements may be reordered. The original slice is not modified.
pub fn sort<T: Clone>(v: &[T], less: impl FnMut(&T, &T) -> bool) -> Vec<T> {
  let start = tracing::enabled!(Level::DEBUG).then(Instant::now);
  let mut r = v.to_vec();
  r.sort_unstable_by(ordering_from_less(less));
  log_sort("sort", r.len(), start);
  r
}

/// Returns a sorted copy of `v` according to the strict weak ordering `less`,
/// preserving the original order of elements that compare equal. The original
/// slice is not modified.
pub fn stable_sort<T: Clone>(v: &[T], less: impl FnMut(&T, &T) -> bool) -> Vec<T> {
  let start = tracing::enabled!(Level::DEBUG).then(Instant::now);
  let mut r = v.to_vec();
  r.sort_by(ordering_from_less(less));
  log_sort("stable_sort", r.len(), start);
  r
}

/// Returns a copy of `v` sorted by the natural order of `key(element)`.
pub fn sort_by<T: Clone, U: Ord>(v: &[T], key: impl FnMut(&T) -> U) -> Vec<T> {
  let start = tracing::enabled!(Level::DEBUG).then(Instant::now);
  let mut r = v.to_vec();
  r.sort_unstable_by_key(key);
  log_sort("sort_by", r.len(), start);
  r
}

/// Returns a copy of `v` sorted by the natural order of `key(element)`,
/// preserving the original order of elements with equal keys.
pub fn stable_sort_by<T: Clone, U: Ord>(v: &[T], key: impl FnMut(&T) -> U) -> Vec<T> {
  let start = tracing::enabled!(Level::DEBUG).then(Instant::now);
  let mut r = v.to_vec();
  r.sort_by_key(key);
  log_sort("stable_sort_by", r.len(), start);
  r
}

fn ordering_from_less<T>(mut less: impl FnMut(&T, &T) -> bool) -> impl FnMut(&T, &T) -> Ordering {
  move |a: &T, b: &T| {
    if less(a, b) {
      Ordering::Less
    } else if less(b, a) {
      Ordering::Greater
    } else {
      Ordering::Equal
    }
  }
}

fn log_sort(operation: &'static str, len: usize, start: Option<Instant>) {
  if let Some(start) = start {
    tracing::debug!(
      operation,
      len,
      "sort took {}s",
      Instant::now().duration_since(start).as_secs_f64()
    );
  }
}

/// Returns a copy of `v` where only the first occurrence of each value is kept.
/// The input does not have to be sorted.
pub fn dedup<T: Eq + Hash + Clone>(v: &[T]) -> Vec<T> {
  let mut seen = HashSet::with_capacity(v.len());
  v.iter().filter(|&a| seen.insert(a)).cloned().collect()
}

/// Returns a copy of `v` where only the first element yielding each distinct
/// `key(element)` is kept.
pub fn dedup_by<T: Clone, U: Eq + Hash>(v: &[T], mut key: impl FnMut(&T) -> U) -> Vec<T> {
  let mut seen = HashSet::with_capacity(v.len());
  v.iter().filter(|&a| seen.insert(key(a))).cloned().collect()
}

/// Returns the smallest element of `v`, or `None` if `v` is empty. The first
/// of several equal minima wins.
pub fn min<T: Ord>(v: &[T]) -> Option<&T> {
  v.iter().reduce(|min, a| if a < min { a } else { min })
}

/// Returns the largest element of `v`, or `None` if `v` is empty. The first of
/// several equal maxima wins.
pub fn max<T: Ord>(v: &[T]) -> Option<&T> {
  v.iter().reduce(|max, a| if a > max { a } else { max })
}

/// Returns both the smallest and the largest element of `v` in a single pass.
pub fn min_max<T: Ord>(v: &[T]) -> Option<(&T, &T)> {
  let (first, rest) = v.split_first()?;
  Some(rest.iter().fold((first, first), |(min, max), a| {
    (if a < min { a } else { min }, if a > max { a } else { max })
  }))
}

/// Returns the first element of `v` for which `key` yields the smallest value.
pub fn min_by<T, U: Ord>(v: &[T], key: impl FnMut(&T) -> U) -> Option<&T> {
  extreme_by(v, key, Ordering::Less)
}

/// Returns the first element of `v` for which `key` yields the largest value.
pub fn max_by<T, U: Ord>(v: &[T], key: impl FnMut(&T) -> U) -> Option<&T> {
  extreme_by(v, key, Ordering::Greater)
}

/// Returns the first elements of `v` for which `key` yields the smallest and
/// the largest values. `key` is invoked once per element.
pub fn min_max_by<T, U: Ord + Clone>(v: &[T], mut key: impl FnMut(&T) -> U) -> Option<(&T, &T)> {
  let (first, rest) = v.split_first()?;
  let k = key(first);
  let mut min = (first, k.clone());
  let mut max = (first, k);
  for a in rest {
    let k = key(a);
    if k < min.1 {
      min = (a, k);
    } else if k > max.1 {
      max = (a, k);
    }
  }
  Some((min.0, max.0))
}

// `wanted` is the ordering a candidate key must have against the current best
// one to replace it, so ties keep the earlier element.
fn extreme_by<T, U: Ord>(v: &[T], mut key: impl FnMut(&T) -> U, wanted: Ordering) -> Option<&T> {
  let (first, rest) = v.split_first()?;
  let mut best = (first, key(first));
  for a in rest {
    let k = key(a);
    if k.cmp(&best.1) == wanted {
      best = (a, k);
    }
  }
  Some(best.0)
}

// Default-returning forms. These keep the convention of yielding the type's
// default value for an empty input, which cannot be told apart from a genuine
// default-valued result.

/// Like [`min`], but returns `T::default()` for an empty input.
pub fn min_or_default<T: Ord + Clone + Default>(v: &[T]) -> T {
  or_default("min", min(v))
}

/// Like [`max`], but returns `T::default()` for an empty input.
pub fn max_or_default<T: Ord + Clone + Default>(v: &[T]) -> T {
  or_default("max", max(v))
}

/// Like [`min_max`], but returns a pair of `T::default()` for an empty input.
pub fn min_max_or_default<T: Ord + Clone + Default>(v: &[T]) -> (T, T) {
  pair_or_default("min_max", min_max(v))
}

/// Like [`min_by`], but returns `T::default()` for an empty input.
pub fn min_by_or_default<T: Clone + Default, U: Ord>(v: &[T], key: impl FnMut(&T) -> U) -> T {
  or_default("min_by", min_by(v, key))
}

/// Like [`max_by`], but returns `T::default()` for an empty input.
pub fn max_by_or_default<T: Clone + Default, U: Ord>(v: &[T], key: impl FnMut(&T) -> U) -> T {
  or_default("max_by", max_by(v, key))
}

/// Like [`min_max_by`], but returns a pair of `T::default()` for an empty input.
pub fn min_max_by_or_default<T: Clone + Default, U: Ord + Clone>(
  v: &[T],
  key: impl FnMut(&T) -> U,
) -> (T, T) {
  pair_or_default("min_max_by", min_max_by(v, key))
}

fn or_default<T: Clone + Default>(operation: &'static str, r: Option<&T>) -> T {
  match r {
    Some(a) => a.clone(),
    None => {
      tracing::trace!(operation, "empty input, returning default value");
      T::default()
    },
  }
}

fn pair_or_default<T: Clone + Default>(operation: &'static str, r: Option<(&T, &T)>) -> (T, T) {
  match r {
    Some((min, max)) => (min.clone(), max.clone()),
    None => {
      tracing::trace!(operation, "empty input, returning default values");
      (T::default(), T::default())
    },
  }
}
